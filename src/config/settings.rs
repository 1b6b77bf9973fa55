use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{RelayError, Result};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerConfig,
    pub azure_openai: AzureOpenAIConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AzureOpenAIConfig {
    #[serde(default)]
    pub endpoint: String,
    #[serde(default)]
    pub api_key: String,
    #[serde(default)]
    pub deployment_name: String,
    #[serde(default = "default_api_version")]
    pub api_version: String,
}

fn default_api_version() -> String {
    "2024-02-15-preview".to_string()
}

impl AzureOpenAIConfig {
    /// Startup validation; serving must not begin with any of these missing.
    pub fn validate(&self) -> Result<()> {
        if self.endpoint.trim().is_empty() {
            return Err(RelayError::Config(
                "azure_openai.endpoint is not configured".to_string(),
            ));
        }
        if self.api_key.trim().is_empty() {
            return Err(RelayError::Config(
                "azure_openai.api_key is not configured".to_string(),
            ));
        }
        if self.deployment_name.trim().is_empty() {
            return Err(RelayError::Config(
                "azure_openai.deployment_name is not configured".to_string(),
            ));
        }
        Ok(())
    }
}

impl Settings {
    pub fn load() -> Result<Self> {
        let config_path = Self::find_config_file()?;
        let mut settings = Self::load_from(&config_path)?;
        settings.apply_overrides(|key| std::env::var(key).ok());
        Ok(settings)
    }

    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let config_content = std::fs::read_to_string(path)
            .map_err(|e| RelayError::Config(format!("failed to read {}: {}", path.display(), e)))?;
        let settings: Settings = toml::from_str(&config_content)
            .map_err(|e| RelayError::Config(format!("failed to parse {}: {}", path.display(), e)))?;
        Ok(settings)
    }

    // Environment wins over the file so secrets can stay out of it.
    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(v) = non_empty(lookup("AZURE_OPENAI_ENDPOINT")) {
            self.azure_openai.endpoint = v;
        }
        if let Some(v) = non_empty(lookup("AZURE_OPENAI_API_KEY")) {
            self.azure_openai.api_key = v;
        }
        if let Some(v) = non_empty(lookup("AZURE_OPENAI_DEPLOYMENT_NAME")) {
            self.azure_openai.deployment_name = v;
        }
        if let Some(v) = non_empty(lookup("AZURE_OPENAI_API_VERSION")) {
            self.azure_openai.api_version = v;
        }
    }

    fn find_config_file() -> Result<String> {
        let possible_names = ["custom-config.toml", "config.toml"];

        for name in &possible_names {
            if Path::new(name).exists() {
                return Ok(name.to_string());
            }
        }

        Err(RelayError::Config(
            "Configuration file not found. Please create custom-config.toml or config.toml"
                .to_string(),
        ))
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn loads_full_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
[server]
host = "127.0.0.1"
port = 9000

[azure_openai]
endpoint = "https://example.openai.azure.com"
api_key = "secret"
deployment_name = "gpt-4o"
api_version = "2024-06-01"
"#,
        )
        .unwrap();

        let settings = Settings::load_from(&path).unwrap();
        assert_eq!(settings.server.host, "127.0.0.1");
        assert_eq!(settings.server.port, 9000);
        assert_eq!(settings.azure_openai.deployment_name, "gpt-4o");
        assert_eq!(settings.azure_openai.api_version, "2024-06-01");
    }

    #[test]
    fn api_version_and_server_default_when_absent() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
[azure_openai]
endpoint = "https://example.openai.azure.com"
api_key = "secret"
deployment_name = "gpt-4o"
"#,
        )
        .unwrap();

        let settings = Settings::load_from(&path).unwrap();
        assert_eq!(settings.server.host, "0.0.0.0");
        assert_eq!(settings.server.port, 8080);
        assert_eq!(settings.azure_openai.api_version, "2024-02-15-preview");
    }

    #[test]
    fn invalid_toml_is_a_config_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "not = [toml").unwrap();

        let err = Settings::load_from(&path).unwrap_err();
        assert!(matches!(err, RelayError::Config(_)));
    }

    #[test]
    fn missing_file_is_a_config_error() {
        let dir = tempdir().unwrap();
        let err = Settings::load_from(dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, RelayError::Config(_)));
    }

    #[test]
    fn validate_requires_endpoint_key_and_deployment() {
        let full = AzureOpenAIConfig {
            endpoint: "https://example.openai.azure.com".to_string(),
            api_key: "secret".to_string(),
            deployment_name: "gpt-4o".to_string(),
            api_version: default_api_version(),
        };
        assert!(full.validate().is_ok());

        for missing in ["endpoint", "api_key", "deployment_name"] {
            let mut config = full.clone();
            match missing {
                "endpoint" => config.endpoint = "  ".to_string(),
                "api_key" => config.api_key = String::new(),
                _ => config.deployment_name = String::new(),
            }
            let err = config.validate().unwrap_err();
            assert!(err.to_string().contains(missing), "{err} vs {missing}");
        }
    }

    #[test]
    fn overrides_replace_file_values_but_ignore_blanks() {
        let mut settings = Settings {
            server: ServerConfig::default(),
            azure_openai: AzureOpenAIConfig {
                endpoint: "https://file.openai.azure.com".to_string(),
                api_key: "from-file".to_string(),
                deployment_name: "gpt-4o".to_string(),
                api_version: default_api_version(),
            },
        };

        settings.apply_overrides(|key| match key {
            "AZURE_OPENAI_API_KEY" => Some("from-env".to_string()),
            "AZURE_OPENAI_ENDPOINT" => Some("   ".to_string()),
            _ => None,
        });

        assert_eq!(settings.azure_openai.api_key, "from-env");
        assert_eq!(
            settings.azure_openai.endpoint,
            "https://file.openai.azure.com"
        );
        assert_eq!(settings.azure_openai.deployment_name, "gpt-4o");
    }
}
