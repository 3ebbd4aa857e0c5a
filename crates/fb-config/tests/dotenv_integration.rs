//! `.env` values flow through `load_with_dotenv` into the figment env layer.
//!
//! `dotenvy` writes straight into the process environment, so every test in
//! this binary uses the same key and value for the `.env` file.

use fb_config::FreebirdConfig;
use figment::Jail;

const DOTENV: &str = "FREEBIRD_SESSION__TOKEN_TTL_DAYS=14\n";

#[test]
fn dotenv_file_is_read_from_working_directory() {
    Jail::expect_with(|jail| {
        jail.create_file(".env", DOTENV)?;

        let config = FreebirdConfig::load_with_dotenv().expect("config loads");
        assert_eq!(config.session.token_ttl_days, 14);
        Ok(())
    });
}

#[test]
fn real_env_beats_dotenv_file() {
    Jail::expect_with(|jail| {
        jail.create_file(".env", DOTENV)?;
        jail.set_env("FREEBIRD_SESSION__TOKEN_TTL_DAYS", "3");

        let config = FreebirdConfig::load_with_dotenv().expect("config loads");
        assert_eq!(config.session.token_ttl_days, 3);
        Ok(())
    });
}
