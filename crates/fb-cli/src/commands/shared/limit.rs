/// Resolve a list length: the command's own `--limit`, then the global
/// `--limit`, then the configured default.
#[must_use]
pub fn effective_limit(local: Option<u32>, global: Option<u32>, fallback: usize) -> usize {
    local
        .or(global)
        .map_or(fallback, |limit| usize::try_from(limit).unwrap_or(usize::MAX))
}

#[cfg(test)]
mod tests {
    use super::effective_limit;

    #[test]
    fn command_limit_wins() {
        assert_eq!(effective_limit(Some(2), Some(8), 5), 2);
    }

    #[test]
    fn global_limit_when_command_has_none() {
        assert_eq!(effective_limit(None, Some(8), 5), 8);
    }

    #[test]
    fn configured_default_otherwise() {
        assert_eq!(effective_limit(None, None, 5), 5);
    }

    #[test]
    fn zero_is_respected() {
        assert_eq!(effective_limit(Some(0), None, 5), 0);
    }
}
