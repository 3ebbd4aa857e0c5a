use chrono::{DateTime, Utc};

/// Decoded session token payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionClaims {
    /// Directory id of the signed-in user (`userId`).
    pub user_id: String,
    /// Expiry (`exp`, epoch milliseconds on the wire).
    pub expires_at: DateTime<Utc>,
}

impl SessionClaims {
    /// Whether the token has expired at `now`. A token expiring exactly at
    /// `now` is expired.
    #[must_use]
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at <= now
    }

    /// Time left before expiry, clamped at zero.
    #[must_use]
    pub fn remaining(&self, now: DateTime<Utc>) -> chrono::TimeDelta {
        (self.expires_at - now).max(chrono::TimeDelta::zero())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_claims(expires_at: DateTime<Utc>) -> SessionClaims {
        SessionClaims {
            user_id: "2".into(),
            expires_at,
        }
    }

    #[test]
    fn not_expired_when_in_future() {
        let now = Utc::now();
        let claims = make_claims(now + chrono::TimeDelta::hours(1));
        assert!(!claims.is_expired(now));
        assert_eq!(claims.remaining(now), chrono::TimeDelta::hours(1));
    }

    #[test]
    fn expired_when_past() {
        let now = Utc::now();
        let claims = make_claims(now - chrono::TimeDelta::seconds(10));
        assert!(claims.is_expired(now));
        assert_eq!(claims.remaining(now), chrono::TimeDelta::zero());
    }

    #[test]
    fn expired_at_exact_boundary() {
        let now = Utc::now();
        assert!(make_claims(now).is_expired(now));
    }
}
