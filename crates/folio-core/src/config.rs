//! Site and content configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::{
    error::{CoreError, Result},
    store::ValidationMode,
};

/// Main configuration structure for Folio.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Site-wide settings.
    #[serde(default)]
    pub site: SiteConfig,

    /// Content loading settings.
    #[serde(default)]
    pub content: ContentConfig,
}

/// Site identity used for metadata and structured data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Site name.
    #[serde(default = "default_name")]
    pub name: String,

    /// Site description for meta tags.
    #[serde(default = "default_description")]
    pub description: String,

    /// Base URL for the site (e.g., "https://example.com").
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Default Open Graph image path.
    #[serde(default = "default_og_image")]
    pub og_image: String,

    /// Person the portfolio belongs to.
    #[serde(default = "default_author")]
    pub author: String,

    /// Profile links for the person schema.
    #[serde(default)]
    pub same_as: Vec<String>,
}

/// Build environment; diagnostics are silenced in production.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Production,
}

/// Content loading configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContentConfig {
    #[serde(default)]
    pub environment: Environment,

    /// Handling of records that fail validation.
    #[serde(default)]
    pub validation: ValidationMode,
}

// Default value functions
fn default_name() -> String {
    "Portfolio".to_string()
}

fn default_description() -> String {
    "Personal portfolio showcasing projects and writing.".to_string()
}

fn default_base_url() -> String {
    "http://localhost:3000".to_string()
}

fn default_og_image() -> String {
    "/og/og-default.png".to_string()
}

fn default_author() -> String {
    "Portfolio Owner".to_string()
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            description: default_description(),
            base_url: default_base_url(),
            og_image: default_og_image(),
            author: default_author(),
            same_as: Vec::new(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CoreError::config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content).map_err(|e| {
            CoreError::config_with_source(
                format!("Failed to parse config file: {}", path.display()),
                e,
            )
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration, letting `FOLIO__*` environment variables override
    /// file values (e.g. `FOLIO__SITE__BASE_URL`).
    pub fn load_with_env(path: &Path) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::from(path))
            .add_source(config::Environment::with_prefix("FOLIO").separator("__"))
            .build()?;

        let config: Config = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.site.name.is_empty() {
            return Err(CoreError::config("site.name cannot be empty"));
        }

        if self.site.base_url.is_empty() {
            return Err(CoreError::config("site.base_url cannot be empty"));
        }

        if let Err(e) = Url::parse(&self.site.base_url) {
            return Err(CoreError::config_with_source(
                format!("site.base_url is not an absolute URL: {}", self.site.base_url),
                e,
            ));
        }

        if self.site.base_url.ends_with('/') {
            tracing::warn!("site.base_url should not have a trailing slash");
        }

        Ok(())
    }

    /// Get the full URL for a path.
    pub fn url_for(&self, path: &str) -> String {
        let base = self.site.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{base}/{path}")
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn create_test_config() -> String {
        r#"
[site]
name = "Jane Doe"
description = "Data science portfolio"
base_url = "https://example.com"
og_image = "/og/jane.png"
author = "Jane Doe"
same_as = ["https://github.com/jane"]

[content]
environment = "production"
validation = "strict"
"#
        .to_string()
    }

    #[test]
    fn test_load_config() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config_path = dir.path().join("folio.toml");
        let mut file = std::fs::File::create(&config_path).expect("create file");
        file.write_all(create_test_config().as_bytes())
            .expect("write");

        let config = Config::load(&config_path).expect("load config");

        assert_eq!(config.site.name, "Jane Doe");
        assert_eq!(config.site.base_url, "https://example.com");
        assert_eq!(config.site.og_image, "/og/jane.png");
        assert_eq!(config.site.same_as, vec!["https://github.com/jane"]);
        assert_eq!(config.content.environment, Environment::Production);
        assert_eq!(config.content.validation, ValidationMode::Strict);
    }

    #[test]
    fn test_config_defaults() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config_path = dir.path().join("folio.toml");
        std::fs::write(&config_path, "[site]\nname = \"Minimal\"\n").expect("write");

        let config = Config::load(&config_path).expect("load config");

        assert_eq!(config.site.name, "Minimal");
        assert_eq!(config.site.base_url, "http://localhost:3000");
        assert_eq!(config.site.og_image, "/og/og-default.png");
        assert_eq!(config.content, ContentConfig::default());
        assert_eq!(
            config.content.validation,
            ValidationMode::PermissiveWithWarnings
        );
    }

    #[test]
    fn test_url_for() {
        let mut config = Config::default();
        config.site.base_url = "https://example.com/".to_string();

        assert_eq!(
            config.url_for("/projects/alpha"),
            "https://example.com/projects/alpha"
        );
        assert_eq!(
            config.url_for("projects/alpha"),
            "https://example.com/projects/alpha"
        );
    }

    #[test]
    fn test_config_validation_relative_base_url() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config_path = dir.path().join("folio.toml");
        std::fs::write(&config_path, "[site]\nbase_url = \"example.com\"\n").expect("write");

        let result = Config::load(&config_path);
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("not an absolute URL")
        );
    }

    #[test]
    fn test_config_validation_empty_name() {
        let mut config = Config::default();
        config.site.name.clear();
        assert!(
            config
                .validate()
                .unwrap_err()
                .to_string()
                .contains("name cannot be empty")
        );
    }

    #[test]
    fn test_config_not_found() {
        let result = Config::load(Path::new("/nonexistent/folio.toml"));
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("not found"));
    }

    #[test]
    fn test_malformed_toml_is_config_error() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config_path = dir.path().join("folio.toml");
        std::fs::write(&config_path, "[site\nname = ").expect("write");

        let err = Config::load(&config_path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
        match err {
            CoreError::Config { source, .. } => assert!(source.is_some()),
            other => panic!("Expected Config error, got {other:?}"),
        }
    }

    #[test]
    fn test_load_with_env_reads_file() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config_path = dir.path().join("folio.toml");
        std::fs::write(&config_path, create_test_config()).expect("write");

        let config = Config::load_with_env(&config_path).expect("load config");
        assert_eq!(config.site.name, "Jane Doe");
        assert_eq!(config.content.validation, ValidationMode::Strict);
    }
}
