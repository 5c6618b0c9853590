use config::{Config, ConfigError, Environment};

/// Settings read from the environment (and an optional `.env` file).
///
/// `ECC_REF_DEBUG=true` selects verbose output without passing `--debug`.
#[derive(serde::Deserialize, Debug, Default, Clone, PartialEq, Eq)]
pub struct Settings {
    #[serde(default)]
    pub debug: bool,
}

pub fn get_config() -> Result<Settings, ConfigError> {
    // a missing .env file is fine, the process environment still applies
    dotenv::dotenv().ok();

    Config::builder()
        .add_source(Environment::with_prefix("ECC_REF"))
        .build()?
        .try_deserialize()
}
