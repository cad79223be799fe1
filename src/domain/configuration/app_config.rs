//! Application configuration domain models.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::AppError;

/// Configuration loaded from `foyer.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Backend API configuration.
    #[serde(default)]
    pub backend: BackendConfig,
    /// PDF export configuration.
    #[serde(default)]
    pub export: ExportConfig,
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        self.backend.validate()?;
        self.export.validate()?;
        Ok(())
    }
}

/// Backend API configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BackendConfig {
    /// Base URL under which `personnel` and `schedule/general` live.
    #[serde(default = "default_api_url")]
    pub api_url: Url,
    /// Request timeout in seconds. Requests wait indefinitely when unset.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
    /// File holding the bearer token.
    #[serde(default)]
    pub token_file: Option<PathBuf>,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self { api_url: default_api_url(), timeout_secs: None, token_file: None }
    }
}

impl BackendConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.timeout_secs == Some(0) {
            return Err(AppError::config_error("timeout_secs must be greater than 0"));
        }
        if !matches!(self.api_url.scheme(), "http" | "https") {
            return Err(AppError::config_error(format!(
                "api_url must use http or https, got '{}'",
                self.api_url.scheme()
            )));
        }
        Ok(())
    }

    /// Resolve an endpoint path against the base URL.
    ///
    /// A base without a trailing slash is treated as a directory, so
    /// `http://host/api` and `http://host/api/` both give `http://host/api/personnel`.
    pub fn endpoint(&self, path: &str) -> Result<Url, AppError> {
        let mut base = self.api_url.clone();
        if !base.path().ends_with('/') {
            let with_slash = format!("{}/", base.path());
            base.set_path(&with_slash);
        }
        base.join(path.trim_start_matches('/')).map_err(|e| {
            AppError::config_error(format!("Invalid endpoint '{}' for {}: {}", path, base, e))
        })
    }
}

fn default_api_url() -> Url {
    Url::parse("http://localhost:5000/api/").expect("Default API URL must be valid")
}

/// PDF export configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExportConfig {
    /// Directory receiving exported documents.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    /// Document title printed in the header block.
    #[serde(default = "default_title")]
    pub title: String,
    /// Institutional line printed in every page footer.
    #[serde(default = "default_institution")]
    pub institution: String,
    /// Heading of the signature block.
    #[serde(default = "default_signature_title")]
    pub signature_title: String,
    /// TrueType font embedded in the document. Without it the built-in
    /// Helvetica is used and `→` prints as `->`.
    #[serde(default)]
    pub font_file: Option<PathBuf>,
    /// Bold companion of `font_file`; the regular face is reused when unset.
    #[serde(default)]
    pub bold_font_file: Option<PathBuf>,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            title: default_title(),
            institution: default_institution(),
            signature_title: default_signature_title(),
            font_file: None,
            bold_font_file: None,
        }
    }
}

impl ExportConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.title.trim().is_empty() {
            return Err(AppError::config_error("export.title must not be empty"));
        }
        if self.bold_font_file.is_some() && self.font_file.is_none() {
            return Err(AppError::config_error("export.bold_font_file requires export.font_file"));
        }
        Ok(())
    }
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_title() -> String {
    "Planning Général du Personnel".to_string()
}

fn default_institution() -> String {
    "Foyer - Gestion du personnel".to_string()
}

fn default_signature_title() -> String {
    "Directeur De Centre".to_string()
}
