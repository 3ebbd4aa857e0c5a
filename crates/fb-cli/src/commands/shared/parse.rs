use serde::de::DeserializeOwned;

/// Parse a snake_case enum value using serde-deserialization.
pub fn parse_enum<T>(raw: &str, field: &str) -> anyhow::Result<T>
where
    T: DeserializeOwned,
{
    let normalized = raw.trim().to_ascii_lowercase().replace('-', "_");
    let json = format!("\"{normalized}\"");
    serde_json::from_str(&json).map_err(|error| anyhow::anyhow!("invalid {field} '{raw}': {error}"))
}

#[cfg(test)]
mod tests {
    use fb_core::enums::{ProjectSort, Role, SubscriptionTier};

    use super::parse_enum;

    #[test]
    fn parses_snake_case_enum() {
        let tier: SubscriptionTier = parse_enum("enterprise", "tier").expect("tier should parse");
        assert_eq!(tier, SubscriptionTier::Enterprise);
    }

    #[test]
    fn ignores_case() {
        let sort: ProjectSort = parse_enum("Oldest", "sort").expect("sort should parse");
        assert_eq!(sort, ProjectSort::Oldest);
    }

    #[test]
    fn errors_on_invalid_enum() {
        let err = parse_enum::<Role>("superuser", "role").expect_err("should fail");
        assert!(err.to_string().contains("invalid role 'superuser'"));
    }
}
