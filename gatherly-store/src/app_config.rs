use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    pub payment: PaymentConfig,
    pub uploads: UploadsConfig,
    pub app: AppConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AuthConfig {
    pub jwt_secret: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PaymentConfig {
    pub secret_key: String,
    #[serde(default = "default_payment_api_url")]
    pub api_url: String,
}

fn default_payment_api_url() -> String {
    "https://api.stripe.com".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct UploadsConfig {
    pub endpoint: String,
    pub api_key: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    /// Public base URL, used for the checkout success/cancel redirects.
    pub base_url: String,
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            // Start off by merging in the "default" configuration file
            .add_source(config::File::with_name("config/default"))
            // Add in the current environment file
            // Default to 'development' env
            // Note that this file is _optional_
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Add in a local configuration file
            // This file shouldn't be checked in to git
            .add_source(config::File::with_name("config/local").required(false))
            // Add in settings from the environment (with a prefix of GATHERLY)
            // Eg.. `GATHERLY__SERVER__PORT=8080` would set the server port
            .add_source(config::Environment::with_prefix("GATHERLY").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}
