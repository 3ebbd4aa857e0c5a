use std::sync::Arc;

use anyhow::Context;
use chrono::TimeDelta;
use fb_auth::{SessionStore, UserDirectory};
use fb_config::FreebirdConfig;
use fb_core::entities::SubscriptionTierDetails;
use fb_core::kv::KeyValueStore;
use fb_db::{ContentStore, JsonFileStore, MessageStore, Seed, SubscriberStore};

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub config: FreebirdConfig,
    pub content: ContentStore,
    pub session: SessionStore,
    pub subscribers: SubscriberStore,
    pub messages: MessageStore,
    pub tiers: Vec<SubscriptionTierDetails>,
}

impl AppContext {
    /// Open the configured storage file and build every store on top of it.
    pub fn init(config: FreebirdConfig) -> anyhow::Result<Self> {
        let path = config.storage.resolved_path();
        let storage = JsonFileStore::open(&path)
            .with_context(|| format!("failed to open storage at {}", path.display()))?;
        Self::with_storage(config, Arc::new(storage))
    }

    /// Build every store over an already opened backend.
    pub fn with_storage(
        config: FreebirdConfig,
        storage: Arc<dyn KeyValueStore>,
    ) -> anyhow::Result<Self> {
        super::warn_unconfigured();

        let seed = Seed::load().context("failed to load seed data")?;
        let content = ContentStore::from_seed(&seed)
            .context("failed to build content store")?
            .with_page_sizes(
                config.content.project_page_size,
                config.content.article_page_size,
            );

        let ttl = TimeDelta::days(i64::from(config.session.token_ttl_days));
        let session = SessionStore::restore(UserDirectory::new(seed.users), storage.clone(), ttl)
            .context("failed to restore session")?;
        let subscribers =
            SubscriberStore::open(storage.clone()).context("failed to load subscribers")?;
        let messages = MessageStore::open(storage).context("failed to load messages")?;

        Ok(Self {
            config,
            content,
            session,
            subscribers,
            messages,
            tiers: seed.tiers,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use fb_config::FreebirdConfig;
    use fb_core::entities::NewContactMessage;
    use fb_core::kv::MemoryStore;
    use fb_db::ProjectFilter;
    use pretty_assertions::assert_eq;

    use super::AppContext;

    fn memory_context(storage: &Arc<MemoryStore>) -> AppContext {
        AppContext::with_storage(FreebirdConfig::default(), storage.clone())
            .expect("context should build")
    }

    #[test]
    fn session_survives_restart() {
        let storage = Arc::new(MemoryStore::new());
        let mut ctx = memory_context(&storage);
        ctx.session
            .login("demo@example.com", "demo123")
            .expect("seeded login should work");

        let restarted = memory_context(&storage);
        assert_eq!(
            restarted.session.current_user().map(|u| u.id.as_str()),
            Some("2")
        );
    }

    #[test]
    fn subscribers_and_messages_share_one_backend() {
        let storage = Arc::new(MemoryStore::new());
        let mut ctx = memory_context(&storage);
        ctx.subscribers
            .add_subscriber("fan@example.com")
            .expect("subscribe should persist");
        ctx.messages
            .add_message(NewContactMessage {
                name: "Sam".into(),
                email: "sam@example.com".into(),
                subject: "Hello".into(),
                message: "Loved the film.".into(),
            })
            .expect("message should persist");

        let restarted = memory_context(&storage);
        let stats = fb_db::stats::collect(
            &restarted.content,
            &restarted.subscribers,
            &restarted.messages,
        );
        assert_eq!(stats.active_subscribers, 1);
        assert_eq!(stats.unread_messages, 1);
        assert_eq!(restarted.tiers.len(), 4);
    }

    #[test]
    fn configured_page_size_is_the_list_default() {
        let mut config = FreebirdConfig::default();
        config.content.project_page_size = 2;
        let ctx = AppContext::with_storage(config, Arc::new(MemoryStore::new()))
            .expect("context should build");

        let page = ctx.content.list_projects(&ProjectFilter::default());
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.total_pages, 3);
    }

    #[test]
    fn file_backed_context_writes_on_login() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("state").join("storage.json");
        let mut config = FreebirdConfig::default();
        config.storage.path = Some(path.clone());

        let mut ctx = AppContext::init(config.clone()).expect("context should build");
        assert!(!path.exists());
        ctx.session
            .login("admin@freebirdproductions.com", "admin123")
            .expect("seeded login should work");
        assert!(path.exists());

        let restarted = AppContext::init(config).expect("context should build");
        assert!(restarted.session.is_authenticated());
    }
}
