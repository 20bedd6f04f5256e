//! Configuration types for bwl-report
//!
//! The config file is a small YAML document holding the platform root URL
//! and the reporting API client credentials. It is loaded once at startup
//! and read-only for the lifetime of the run.

use crate::error::{Error, Result};
use crate::types::BlueprintId;
use serde::{Deserialize, Serialize};
use std::path::Path;
use url::Url;

/// Main configuration for a reporting run
///
/// Keys in the YAML file are kebab-case, matching the platform's own
/// configuration conventions:
///
/// ```yaml
/// root-url: https://www.blueworkslive.com
/// artefact-reporting-client-id: my-client
/// artefact-reporting-client-secret: my-secret
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the platform; all endpoints are relative to it
    #[serde(rename = "root-url")]
    pub root_url: String,

    /// OAuth client id for the reporting API
    #[serde(rename = "artefact-reporting-client-id")]
    pub client_id: String,

    /// OAuth client secret for the reporting API
    #[serde(rename = "artefact-reporting-client-secret")]
    pub client_secret: String,
}

impl Config {
    /// Load and validate a configuration file
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the file is missing, the YAML does not
    /// parse, a key is absent, or the root URL is not an absolute
    /// `http`/`https` URL.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| Error::Config {
            message: format!("cannot read config file {}: {}", path.display(), e),
            key: None,
        })?;

        let mut config: Config = serde_yaml::from_str(&raw).map_err(|e| Error::Config {
            message: format!("cannot parse config file {}: {}", path.display(), e),
            key: None,
        })?;

        config.validate()?;

        // Canonical form has no trailing slash so endpoint concatenation
        // never produces a double separator.
        while config.root_url.ends_with('/') {
            config.root_url.pop();
        }

        Ok(config)
    }

    /// Validate the loaded settings
    pub fn validate(&self) -> Result<()> {
        let parsed = Url::parse(&self.root_url)
            .map_err(|e| Error::config(format!("root-url is not a valid URL: {}", e), "root-url"))?;

        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(Error::config(
                format!("root-url must use http or https, got {}", parsed.scheme()),
                "root-url",
            ));
        }

        if self.client_id.is_empty() {
            return Err(Error::config(
                "client id must not be empty",
                "artefact-reporting-client-id",
            ));
        }

        if self.client_secret.is_empty() {
            return Err(Error::config(
                "client secret must not be empty",
                "artefact-reporting-client-secret",
            ));
        }

        Ok(())
    }

    /// OAuth token endpoint
    pub fn auth_endpoint(&self) -> String {
        format!("{}/oauth/token", self.root_url)
    }

    /// Library listing endpoint, filtered to blueprints and returning only
    /// the identifier column
    pub fn listing_endpoint(&self) -> String {
        format!(
            "{}/scr/api/LibraryArtifact?type=BLUEPRINT&returnFields=ID",
            self.root_url
        )
    }

    /// Per-blueprint document endpoint
    pub fn blueprint_endpoint(&self, id: &BlueprintId) -> String {
        format!("{}/bwl/blueprints/{}", self.root_url, id)
    }
}

// unwrap/expect are acceptable in tests for concise failure-on-error assertions
#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_kebab_case_keys() {
        let file = write_config(
            "root-url: https://bwl.test\n\
             artefact-reporting-client-id: client-1\n\
             artefact-reporting-client-secret: hunter2\n",
        );

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.root_url, "https://bwl.test");
        assert_eq!(config.client_id, "client-1");
        assert_eq!(config.client_secret, "hunter2");
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let err = Config::load(Path::new("/nonexistent/config.yaml")).unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
        assert!(err.to_string().contains("cannot read config file"));
    }

    #[test]
    fn test_missing_key_is_config_error() {
        let file = write_config("root-url: https://bwl.test\n");
        let err = Config::load(file.path()).unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
    }

    #[test]
    fn trailing_slash_on_root_url_is_trimmed() {
        let file = write_config(
            "root-url: https://bwl.test/\n\
             artefact-reporting-client-id: c\n\
             artefact-reporting-client-secret: s\n",
        );

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.root_url, "https://bwl.test");
        assert_eq!(config.auth_endpoint(), "https://bwl.test/oauth/token");
    }

    #[test]
    fn test_invalid_root_url_rejected() {
        let file = write_config(
            "root-url: not a url\n\
             artefact-reporting-client-id: c\n\
             artefact-reporting-client-secret: s\n",
        );
        assert!(Config::load(file.path()).is_err());

        let file = write_config(
            "root-url: ftp://bwl.test\n\
             artefact-reporting-client-id: c\n\
             artefact-reporting-client-secret: s\n",
        );
        let err = Config::load(file.path()).unwrap_err();
        assert!(err.to_string().contains("http or https"));
    }

    #[test]
    fn test_endpoints() {
        let config = Config {
            root_url: "https://bwl.test".to_string(),
            client_id: "c".to_string(),
            client_secret: "s".to_string(),
        };

        assert_eq!(config.auth_endpoint(), "https://bwl.test/oauth/token");
        assert_eq!(
            config.listing_endpoint(),
            "https://bwl.test/scr/api/LibraryArtifact?type=BLUEPRINT&returnFields=ID"
        );
        assert_eq!(
            config.blueprint_endpoint(&"abc123".into()),
            "https://bwl.test/bwl/blueprints/abc123"
        );
    }
}
