use std::path::Path;
use std::time::Duration;

use common_libs::error::{ServiceError, ServiceErrorType, ServiceExuctionResult};
use common_libs::files::from_file;
use common_libs::DEFAULT_LOG_CONFIG;
use log::info;
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_BASE_URL, ENV_SCHEMA, ENV_URL};
use crate::model::SchemaVersion;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ClientConfig {
    pub base_url: String,
    pub schema: SchemaVersion,
    pub timeout_secs: Option<u64>,
    pub log_config: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            base_url: DEFAULT_BASE_URL.to_string(),
            schema: SchemaVersion::Similarity,
            timeout_secs: None,
            log_config: DEFAULT_LOG_CONFIG.to_string(),
        }
    }
}

/// Values given on the command line. `None` keeps what the layers below set.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub base_url: Option<String>,
    pub schema: Option<String>,
    pub timeout_secs: Option<u64>,
    pub log_config: Option<String>,
}

impl ClientConfig {
    /// Defaults, then the JSON file, then `ETYMO_URL` / `ETYMO_SCHEMA`, then `overrides`.
    /// A missing file is only an error when it was asked for explicitly.
    pub fn load(
        file: &str,
        required: bool,
        env: impl Fn(&str) -> Option<String>,
        overrides: ConfigOverrides,
    ) -> ServiceExuctionResult<ClientConfig> {
        let mut config = if Path::new(file).exists() {
            info!("loading config from {}", file);
            from_file::<_, ClientConfig>(file)?
        } else if required {
            let msg = format!("config.not.found: {}", file);
            return Err(ServiceError::throw(&msg, ServiceErrorType::ResourceNotFound));
        } else {
            ClientConfig::default()
        };

        if let Some(url) = env(ENV_URL) {
            config.base_url = url;
        }
        if let Some(schema) = env(ENV_SCHEMA) {
            config.schema = SchemaVersion::from(schema);
        }

        if let Some(url) = overrides.base_url {
            config.base_url = url;
        }
        if let Some(schema) = overrides.schema {
            config.schema = SchemaVersion::from(schema);
        }
        if overrides.timeout_secs.is_some() {
            config.timeout_secs = overrides.timeout_secs;
        }
        if let Some(log_config) = overrides.log_config {
            config.log_config = log_config;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> ServiceExuctionResult<()> {
        if self.schema == SchemaVersion::Undefined {
            return Err(ServiceError::throw(
                "unknown.schema: expected similarity or legacy",
                ServiceErrorType::Failure,
            ));
        }
        if self.base_url.trim().is_empty() {
            return Err(ServiceError::throw("base.url.empty", ServiceErrorType::Failure));
        }
        if self.timeout_secs == Some(0) {
            return Err(ServiceError::throw("timeout.must.be.positive", ServiceErrorType::Failure));
        }
        Ok(())
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

#[cfg(test)]
mod config_tests {
    use std::time::Duration;

    use common_libs::error::ServiceErrorType;
    use common_libs::files::save;

    use super::{ClientConfig, ConfigOverrides};
    use crate::model::SchemaVersion;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    fn tmp_config(name: &str, config: &ClientConfig) -> String {
        let file = std::env::temp_dir().join(name).to_string_lossy().to_string();
        save(&file, config).unwrap();
        file
    }

    #[test]
    fn defaults_test() {
        let config =
            ClientConfig::load("does/not/exist.json", false, no_env, ConfigOverrides::default())
                .unwrap();
        assert_eq!(ClientConfig::default(), config);
        assert_eq!("http://127.0.0.1:5000", config.base_url);
        assert_eq!(None, config.timeout());
    }

    #[test]
    fn required_file_missing_test() {
        let err = ClientConfig::load("does/not/exist.json", true, no_env, ConfigOverrides::default())
            .unwrap_err();
        assert_eq!(ServiceErrorType::ResourceNotFound, err.error_type);
    }

    #[test]
    fn precedence_test() {
        let file_config = ClientConfig {
            base_url: "http://from-file".to_string(),
            schema: SchemaVersion::Legacy,
            timeout_secs: Some(3),
            log_config: "file.yml".to_string(),
        };
        let file = tmp_config("etymo_precedence_test.json", &file_config);

        let loaded = ClientConfig::load(&file, true, no_env, ConfigOverrides::default()).unwrap();
        assert_eq!(file_config, loaded);

        let env = |key: &str| match key {
            "ETYMO_URL" => Some("http://from-env".to_string()),
            "ETYMO_SCHEMA" => Some("similarity".to_string()),
            _ => None,
        };
        let loaded = ClientConfig::load(&file, true, env, ConfigOverrides::default()).unwrap();
        assert_eq!("http://from-env", loaded.base_url);
        assert_eq!(SchemaVersion::Similarity, loaded.schema);

        let overrides = ConfigOverrides {
            base_url: Some("http://from-cli".to_string()),
            schema: Some("b".to_string()),
            timeout_secs: Some(9),
            log_config: None,
        };
        let loaded = ClientConfig::load(&file, true, env, overrides).unwrap();
        assert_eq!("http://from-cli", loaded.base_url);
        assert_eq!(SchemaVersion::Legacy, loaded.schema);
        assert_eq!(Some(Duration::from_secs(9)), loaded.timeout());
        assert_eq!("file.yml", loaded.log_config);
        let _ = std::fs::remove_file(&file);
    }

    #[test]
    fn partial_file_uses_defaults_test() {
        let file = std::env::temp_dir()
            .join("etymo_partial_test.json")
            .to_string_lossy()
            .to_string();
        std::fs::write(&file, r#"{"schema":"legacy"}"#).unwrap();
        let loaded = ClientConfig::load(&file, true, no_env, ConfigOverrides::default()).unwrap();
        assert_eq!(SchemaVersion::Legacy, loaded.schema);
        assert_eq!("http://127.0.0.1:5000", loaded.base_url);
        let _ = std::fs::remove_file(&file);
    }

    #[test]
    fn invalid_values_test() {
        let overrides = ConfigOverrides {
            schema: Some("v3".to_string()),
            ..Default::default()
        };
        assert!(ClientConfig::load("does/not/exist.json", false, no_env, overrides).is_err());

        let overrides = ConfigOverrides {
            timeout_secs: Some(0),
            ..Default::default()
        };
        assert!(ClientConfig::load("does/not/exist.json", false, no_env, overrides).is_err());
    }
}
