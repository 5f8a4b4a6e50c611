use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::{env, time::Duration};
use tooniq_shared::contact::EMAIL_FORMAT;

pub use tooniq_notification::EmailConfig;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub email: EmailConfig,
    #[serde(default)]
    pub form: FormConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Client-side submission settings, used by the CLI form and exposed to the
/// browser script.
#[derive(Debug, Deserialize, Clone)]
pub struct FormConfig {
    #[serde(default = "default_form_endpoint")]
    pub endpoint: String,
    /// Hosted form API key. Unused when posting to the relay.
    #[serde(default)]
    pub access_key: Option<String>,
    #[serde(default = "default_success_reset_ms")]
    pub success_reset_ms: u64,
    #[serde(default)]
    pub error_reset_ms: Option<u64>,
    #[serde(default)]
    pub timeout_ms: Option<u64>,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            endpoint: default_form_endpoint(),
            access_key: None,
            success_reset_ms: default_success_reset_ms(),
            error_reset_ms: None,
            timeout_ms: None,
        }
    }
}

impl FormConfig {
    pub fn options(&self, recipient: &str) -> tooniq_form::FormOptions {
        tooniq_form::FormOptions {
            recipient: recipient.to_owned(),
            access_key: self.access_key.clone(),
            success_reset: Duration::from_millis(self.success_reset_ms),
            error_reset: self.error_reset_ms.map(Duration::from_millis),
        }
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_ms.map(Duration::from_millis)
    }
}

fn default_form_endpoint() -> String {
    "http://127.0.0.1:3000/api/contact".to_string()
}

fn default_success_reset_ms() -> u64 {
    5000
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// `pretty` or `json`.
    #[serde(default = "default_log_format")]
    pub log_format: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_format: default_log_format(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Legacy `RESEND_API_KEY`
    /// 2. Environment variables (TOONIQ__EMAIL__RESEND_API_KEY, etc.)
    /// 3. Config file specified by path
    /// 4. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        builder = builder
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("TOONIQ")
                .separator("__")
                .try_parsing(true),
        );

        if let Ok(api_key) = env::var("RESEND_API_KEY") {
            builder = builder.set_override("email.resend_api_key", api_key)?;
        }

        builder.build()?.try_deserialize()
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.server.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }
        if !EMAIL_FORMAT.is_match(&self.email.contact_address) {
            return Err(format!(
                "Contact address is not a valid email: {}",
                self.email.contact_address
            ));
        }
        if self.form.endpoint.is_empty() {
            return Err("Form endpoint must not be empty".to_string());
        }
        if self.form.timeout_ms == Some(0) {
            return Err("Form timeout must be greater than 0 when set".to_string());
        }
        Ok(())
    }
}
