const SECTIONS: [&str; 3] = ["STORAGE", "CONTENT", "SESSION"];

/// Emit warnings for likely mistyped env var keys that silently fell back to defaults.
pub fn warn_unconfigured() {
    for warning in collect_unconfigured_warnings(std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let env_keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();

    SECTIONS
        .iter()
        .filter_map(|section| {
            let single = format!("FREEBIRD_{section}_");
            let double = format!("FREEBIRD_{section}__");
            let key = env_keys
                .iter()
                .find(|key| key.starts_with(&single) && !key.starts_with(&double))?;
            Some(format!(
                "{key} is ignored. Use double underscores between section and field (example: {double}{})",
                &key[single.len()..]
            ))
        })
        .collect()
}
