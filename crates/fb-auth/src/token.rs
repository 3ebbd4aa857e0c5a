//! Unsigned demo session tokens.
//!
//! Shape: `base64url(header).base64url(payload).` with header
//! `{"alg":"none","typ":"JWT"}`, payload `{"userId": .., "exp": <epoch ms>}`
//! and an empty signature segment. Anyone can mint one; they only exist so the
//! stored session has an expiry.

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

use crate::claims::SessionClaims;
use crate::error::AuthError;

const HEADER: &str = r#"{"alg":"none","typ":"JWT"}"#;

#[derive(Serialize, Deserialize)]
struct Payload {
    #[serde(rename = "userId")]
    user_id: String,
    exp: i64,
}

/// Mint a token for `user_id` that expires `ttl` after `issued_at`.
#[must_use]
pub fn issue(user_id: &str, issued_at: DateTime<Utc>, ttl: TimeDelta) -> String {
    let payload = Payload {
        user_id: user_id.to_string(),
        exp: (issued_at + ttl).timestamp_millis(),
    };
    // Two plain string fields cannot fail to serialize.
    let payload_json = serde_json::to_string(&payload).unwrap_or_default();
    format!(
        "{}.{}.",
        URL_SAFE_NO_PAD.encode(HEADER),
        URL_SAFE_NO_PAD.encode(payload_json)
    )
}

/// Decode a token's payload. Expiry is not checked here.
///
/// # Errors
///
/// Returns `AuthError::InvalidToken` if the token does not have three
/// segments, the payload is not base64url JSON, or `userId`/`exp` are missing.
pub fn decode(token: &str) -> Result<SessionClaims, AuthError> {
    let parts: Vec<&str> = token.split('.').collect();
    if parts.len() != 3 {
        return Err(AuthError::InvalidToken("expected three segments".into()));
    }
    let raw = URL_SAFE_NO_PAD
        .decode(parts[1])
        .map_err(|e| AuthError::InvalidToken(format!("base64 decode failed: {e}")))?;
    let payload: Payload = serde_json::from_slice(&raw)
        .map_err(|e| AuthError::InvalidToken(format!("payload parse failed: {e}")))?;
    let expires_at = DateTime::from_timestamp_millis(payload.exp)
        .ok_or_else(|| AuthError::InvalidToken("exp out of range".into()))?;

    Ok(SessionClaims {
        user_id: payload.user_id,
        expires_at,
    })
}

/// `true` when the token decodes and has not expired at `now`.
#[must_use]
pub fn is_valid(token: &str, now: DateTime<Utc>) -> bool {
    decode(token).is_ok_and(|claims| !claims.is_expired(now))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn fixed_now() -> DateTime<Utc> {
        DateTime::from_timestamp_millis(1_730_000_000_000).unwrap()
    }

    #[test]
    fn issued_token_decodes_to_same_claims() {
        let now = fixed_now();
        let token = issue("2", now, TimeDelta::days(7));
        let claims = decode(&token).unwrap();
        assert_eq!(claims.user_id, "2");
        assert_eq!(claims.expires_at, now + TimeDelta::days(7));
    }

    #[test]
    fn header_and_empty_signature() {
        let token = issue("1", fixed_now(), TimeDelta::days(7));
        let parts: Vec<&str> = token.split('.').collect();
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[2], "");
        let header = URL_SAFE_NO_PAD.decode(parts[0]).unwrap();
        assert_eq!(String::from_utf8(header).unwrap(), HEADER);
    }

    #[test]
    fn payload_uses_epoch_millis() {
        let now = fixed_now();
        let token = issue("1", now, TimeDelta::milliseconds(500));
        let payload = token.split('.').nth(1).unwrap();
        let value: serde_json::Value =
            serde_json::from_slice(&URL_SAFE_NO_PAD.decode(payload).unwrap()).unwrap();
        assert_eq!(value["userId"], "1");
        assert_eq!(value["exp"], 1_730_000_000_500_i64);
    }

    #[test]
    fn validity_tracks_expiry() {
        let now = fixed_now();
        let token = issue("1", now, TimeDelta::days(7));
        assert!(is_valid(&token, now));
        assert!(is_valid(&token, now + TimeDelta::days(6)));
        assert!(!is_valid(&token, now + TimeDelta::days(7)));
    }

    #[test]
    fn wrong_segment_count_rejected() {
        let err = decode("only.two").unwrap_err();
        assert!(err.to_string().contains("three segments"));
        assert!(!is_valid("garbage", fixed_now()));
    }

    #[test]
    fn bad_base64_rejected() {
        let err = decode("a.!!!.").unwrap_err();
        assert!(err.to_string().contains("base64 decode failed"));
    }

    #[test]
    fn missing_user_id_rejected() {
        let payload = URL_SAFE_NO_PAD.encode(r#"{"exp":1}"#);
        let err = decode(&format!("h.{payload}.")).unwrap_err();
        assert!(err.to_string().contains("payload parse failed"));
    }
}
