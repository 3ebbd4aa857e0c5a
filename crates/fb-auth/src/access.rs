//! Role and tier gates for protected views.

use fb_core::entities::{Article, PublicUser};
use fb_core::enums::{Role, SubscriptionTier};
use fb_core::responses::ArticleView;

use crate::error::AuthError;

/// Minimum role and/or tier a view demands. Both `None` means "signed in".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AccessRequirement {
    pub role: Option<Role>,
    pub tier: Option<SubscriptionTier>,
}

impl AccessRequirement {
    #[must_use]
    pub const fn authenticated() -> Self {
        Self {
            role: None,
            tier: None,
        }
    }

    #[must_use]
    pub const fn role(role: Role) -> Self {
        Self {
            role: Some(role),
            tier: None,
        }
    }

    #[must_use]
    pub const fn tier(tier: SubscriptionTier) -> Self {
        Self {
            role: None,
            tier: Some(tier),
        }
    }

    #[must_use]
    pub const fn admin() -> Self {
        Self::role(Role::Admin)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessDecision {
    Granted,
    LoginRequired,
    RoleTooLow,
    TierTooLow,
}

impl AccessDecision {
    #[must_use]
    pub const fn is_granted(self) -> bool {
        matches!(self, Self::Granted)
    }

    /// Where a denied visitor is sent.
    #[must_use]
    pub const fn redirect_path(self) -> Option<&'static str> {
        match self {
            Self::Granted => None,
            Self::LoginRequired => Some("/login"),
            Self::RoleTooLow => Some("/subscribers"),
            Self::TierTooLow => Some("/subscribers/upgrade"),
        }
    }
}

/// Evaluate `requirement` for `user`. The role gate is checked before the tier.
#[must_use]
pub fn check(user: Option<&PublicUser>, requirement: AccessRequirement) -> AccessDecision {
    let Some(user) = user else {
        return AccessDecision::LoginRequired;
    };
    if let Some(role) = requirement.role
        && !user.role.at_least(role)
    {
        return AccessDecision::RoleTooLow;
    }
    if let Some(tier) = requirement.tier
        && !user.subscription_tier.at_least(tier)
    {
        return AccessDecision::TierTooLow;
    }
    AccessDecision::Granted
}

/// [`check`] as a `Result`, for callers that stop on denial.
///
/// # Errors
///
/// Returns `AuthError::NotAuthenticated` without a user, or
/// `AuthError::AccessDenied` naming the unmet requirement.
pub fn require(
    user: Option<&PublicUser>,
    requirement: AccessRequirement,
) -> Result<&PublicUser, AuthError> {
    match (check(user, requirement), user) {
        (AccessDecision::Granted, Some(user)) => Ok(user),
        (AccessDecision::RoleTooLow, _) => Err(AuthError::AccessDenied(format!(
            "requires role {}",
            requirement.role.unwrap_or(Role::User)
        ))),
        (AccessDecision::TierTooLow, _) => Err(AuthError::AccessDenied(format!(
            "requires {} tier or higher",
            requirement.tier.unwrap_or(SubscriptionTier::Free)
        ))),
        _ => Err(AuthError::NotAuthenticated),
    }
}

/// Admins and any paid tier can read premium content.
#[must_use]
pub fn can_access_premium(user: Option<&PublicUser>) -> bool {
    user.is_some_and(|u| u.role == Role::Admin || u.subscription_tier.is_paid())
}

/// The article as `user` may see it. Locked premium articles lose their body.
#[must_use]
pub fn view_article(mut article: Article, user: Option<&PublicUser>) -> ArticleView {
    let locked = article.is_premium && !can_access_premium(user);
    if locked {
        article.content.clear();
    }
    ArticleView { article, locked }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use fb_core::enums::ArticleCategory;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn user(role: Role, tier: SubscriptionTier) -> PublicUser {
        PublicUser {
            id: "9".into(),
            email: "x@example.com".into(),
            name: "X".into(),
            role,
            subscription_tier: tier,
            avatar: None,
            created_at: Utc::now(),
        }
    }

    fn article(is_premium: bool) -> Article {
        Article {
            id: "2".into(),
            title: "Mastering Color Grading".into(),
            slug: "mastering-color-grading".into(),
            excerpt: "Grade like a pro.".into(),
            content: "Full body".into(),
            category: ArticleCategory::Tutorial,
            tags: vec!["film".into()],
            featured_image: "/img.jpg".into(),
            read_time: 18,
            author: "Alex Rivera".into(),
            is_published: true,
            is_premium,
            created_at: Utc::now(),
        }
    }

    #[rstest]
    #[case(Role::User, SubscriptionTier::Free, AccessRequirement::authenticated(), AccessDecision::Granted)]
    #[case(Role::User, SubscriptionTier::Free, AccessRequirement::role(Role::Subscriber), AccessDecision::RoleTooLow)]
    #[case(Role::Subscriber, SubscriptionTier::Free, AccessRequirement::role(Role::Subscriber), AccessDecision::Granted)]
    #[case(Role::Subscriber, SubscriptionTier::Starter, AccessRequirement::tier(SubscriptionTier::Pro), AccessDecision::TierTooLow)]
    #[case(Role::Subscriber, SubscriptionTier::Enterprise, AccessRequirement::tier(SubscriptionTier::Pro), AccessDecision::Granted)]
    #[case(Role::Subscriber, SubscriptionTier::Enterprise, AccessRequirement::admin(), AccessDecision::RoleTooLow)]
    #[case(Role::Admin, SubscriptionTier::Free, AccessRequirement::role(Role::Subscriber), AccessDecision::Granted)]
    fn decisions(
        #[case] role: Role,
        #[case] tier: SubscriptionTier,
        #[case] requirement: AccessRequirement,
        #[case] expected: AccessDecision,
    ) {
        let u = user(role, tier);
        assert_eq!(check(Some(&u), requirement), expected);
    }

    #[test]
    fn anonymous_must_log_in() {
        let decision = check(None, AccessRequirement::authenticated());
        assert_eq!(decision, AccessDecision::LoginRequired);
        assert_eq!(decision.redirect_path(), Some("/login"));
        assert!(matches!(
            require(None, AccessRequirement::admin()),
            Err(AuthError::NotAuthenticated)
        ));
    }

    #[test]
    fn require_reports_unmet_role() {
        let u = user(Role::Subscriber, SubscriptionTier::Pro);
        let err = require(Some(&u), AccessRequirement::admin()).unwrap_err();
        assert_eq!(err.to_string(), "access denied: requires role admin");
    }

    #[rstest]
    #[case(None, false)]
    #[case(Some((Role::User, SubscriptionTier::Free)), false)]
    #[case(Some((Role::Subscriber, SubscriptionTier::Starter)), true)]
    #[case(Some((Role::Admin, SubscriptionTier::Free)), true)]
    fn premium_access(#[case] who: Option<(Role, SubscriptionTier)>, #[case] expected: bool) {
        let u = who.map(|(role, tier)| user(role, tier));
        assert_eq!(can_access_premium(u.as_ref()), expected);
    }

    #[test]
    fn locked_premium_article_keeps_only_excerpt() {
        let view = view_article(article(true), None);
        assert!(view.locked);
        assert!(view.article.content.is_empty());
        assert_eq!(view.article.excerpt, "Grade like a pro.");
    }

    #[test]
    fn free_articles_and_paid_readers_see_everything() {
        let free = view_article(article(false), None);
        assert!(!free.locked);
        assert_eq!(free.article.content, "Full body");

        let reader = user(Role::Subscriber, SubscriptionTier::Pro);
        let paid = view_article(article(true), Some(&reader));
        assert!(!paid.locked);
        assert_eq!(paid.article.content, "Full body");
    }
}
