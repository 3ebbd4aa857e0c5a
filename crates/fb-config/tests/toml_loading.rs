//! Integration tests for TOML configuration loading.
//!
//! Uses `figment::Jail` for sandboxed file and env var manipulation.

use std::path::PathBuf;

use fb_config::FreebirdConfig;
use figment::{
    Figment, Jail,
    providers::{Format, Serialized, Toml},
};

#[test]
fn loads_all_sections_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[storage]
path = "/var/lib/freebird/state.json"

[content]
project_page_size = 12
article_page_size = 3
recent_limit = 8

[session]
token_ttl_days = 30
"#,
        )?;

        let figment = Figment::from(Serialized::defaults(FreebirdConfig::default()))
            .merge(Toml::file("config.toml"));
        let config = FreebirdConfig::from_figment(&figment).expect("config loads");

        assert_eq!(
            config.storage.resolved_path(),
            PathBuf::from("/var/lib/freebird/state.json")
        );
        assert_eq!(config.content.project_page_size, 12);
        assert_eq!(config.content.article_page_size, 3);
        assert_eq!(config.content.recent_limit, 8);
        assert_eq!(config.session.token_ttl_days, 30);
        Ok(())
    });
}

#[test]
fn partial_toml_keeps_remaining_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r"
[content]
article_page_size = 12
",
        )?;

        let figment = Figment::from(Serialized::defaults(FreebirdConfig::default()))
            .merge(Toml::file("config.toml"));
        let config = FreebirdConfig::from_figment(&figment).expect("config loads");

        assert_eq!(config.content.article_page_size, 12);
        assert_eq!(config.content.project_page_size, 6);
        assert_eq!(config.session.token_ttl_days, 7);
        Ok(())
    });
}

#[test]
fn project_local_file_is_picked_up() {
    Jail::expect_with(|jail| {
        jail.create_dir(".freebird")?;
        jail.create_file(
            ".freebird/config.toml",
            r"
[session]
token_ttl_days = 1
",
        )?;

        let config = FreebirdConfig::load().expect("config loads");
        assert_eq!(config.session.token_ttl_days, 1);
        Ok(())
    });
}

#[test]
fn zero_ttl_in_toml_is_rejected() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r"
[session]
token_ttl_days = 0
",
        )?;

        let figment = Figment::from(Serialized::defaults(FreebirdConfig::default()))
            .merge(Toml::file("config.toml"));
        let err = FreebirdConfig::from_figment(&figment).expect_err("zero ttl must fail");
        assert!(err.to_string().contains("session.token_ttl_days"));
        Ok(())
    });
}
