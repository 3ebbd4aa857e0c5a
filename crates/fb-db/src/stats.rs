use fb_core::responses::SiteStats;

use crate::content::ContentStore;
use crate::messages::MessageStore;
use crate::subscribers::SubscriberStore;

/// Admin dashboard counters across every store.
#[must_use]
pub fn collect(
    content: &ContentStore,
    subscribers: &SubscriberStore,
    messages: &MessageStore,
) -> SiteStats {
    SiteStats {
        total_projects: content.all_projects().len(),
        published_projects: content.all_projects().iter().filter(|p| p.is_published).count(),
        total_articles: content.all_articles().len(),
        published_articles: content.all_articles().iter().filter(|a| a.is_published).count(),
        active_subscribers: subscribers.len(),
        total_messages: messages.len(),
        unread_messages: messages.unread_count(),
    }
}
