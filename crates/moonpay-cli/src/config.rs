/*
[INPUT]:  Optional YAML configuration file and MOONPAY_* environment variables
[OUTPUT]: Parsed CLI configuration and configured API clients
[POS]:    Configuration layer - credentials and connection settings
[UPDATE]: When adding new configuration options
*/

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result, bail};
use config::{Config, Environment, File, FileFormat};
use moonpay_adapter::{API_BASE_URL, ClientConfig, CustomerClient, MoonpayClient};
use serde::{Deserialize, Serialize};

/// Prefix of the environment variables that override file settings
pub const ENV_PREFIX: &str = "MOONPAY";

/// Settings shared by every subcommand
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CliConfig {
    /// Publishable API key (`pk_test_...` or `pk_live_...`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// Customer bearer token from `moonpay login`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    /// API origin, e.g. `https://api.moonpay.io`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            token: None,
            base_url: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_timeout_secs() -> u64 {
    30
}

/// `<config dir>/moonpay/config.yaml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("moonpay").join("config.yaml"))
}

impl CliConfig {
    /// Load settings from the file (if any) and the process environment.
    ///
    /// An explicitly given file must exist; the default location is optional.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::from_sources(path, Environment::with_prefix(ENV_PREFIX))
    }

    /// Load settings from the file and an explicit environment source
    pub fn from_sources(path: Option<&Path>, env: Environment) -> Result<Self> {
        let mut builder = Config::builder();

        match path {
            Some(path) => {
                builder = builder.add_source(File::from(path).format(FileFormat::Yaml).required(true));
            }
            None => {
                if let Some(default_path) = default_config_path() {
                    builder = builder.add_source(
                        File::from(default_path.as_path())
                            .format(FileFormat::Yaml)
                            .required(false),
                    );
                }
            }
        }

        let config = builder
            .add_source(env)
            .build()
            .context("read configuration")?;
        config
            .try_deserialize()
            .context("parse configuration")
    }

    /// Starting point written by `moonpay config init`
    pub fn template(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            token: None,
            base_url: Some(API_BASE_URL.to_string()),
            timeout_secs: default_timeout_secs(),
        }
    }

    /// Write this configuration as YAML, creating parent directories
    pub fn write_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }

        let yaml = serde_yaml::to_string(self).context("failed to serialize config to YAML")?;
        std::fs::write(path, yaml)
            .with_context(|| format!("failed to write config to {}", path.display()))?;
        Ok(())
    }

    /// Anonymous API client built from these settings
    pub fn client(&self) -> Result<MoonpayClient> {
        let Some(api_key) = self.api_key.as_deref().filter(|key| !key.trim().is_empty()) else {
            bail!("missing API key: set MOONPAY_API_KEY or api_key in the config file");
        };
        if self.timeout_secs == 0 {
            bail!("timeout_secs must be at least 1 second");
        }

        let config = ClientConfig {
            base_url: self
                .base_url
                .clone()
                .unwrap_or_else(|| API_BASE_URL.to_string()),
            timeout: Duration::from_secs(self.timeout_secs),
            ..ClientConfig::default()
        };
        MoonpayClient::with_config(api_key, config).context("create API client")
    }

    /// Customer-scoped client; requires a token
    pub fn customer(&self) -> Result<CustomerClient> {
        let client = self.client()?;
        let Some(token) = self.token.as_deref().filter(|token| !token.trim().is_empty()) else {
            bail!("missing customer token: run `moonpay login` and set MOONPAY_TOKEN");
        };
        Ok(client.customer(token))
    }
}
