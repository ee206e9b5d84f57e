use crate::cli::{DEFAULT_CONFIG_FILE, DEFAULT_CURRENT_DIR, DEFAULT_EXTRA_DIR};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

/// On-disk settings file. Every key is optional; missing keys keep defaults.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct SettingsFile {
    #[serde(default)]
    pub probe: ProbeSection,
    #[serde(default)]
    pub listing: ListingSection,
}

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct ProbeSection {
    pub config_file: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct ListingSection {
    pub current_dir: Option<String>,
    pub extra_dir: Option<String>,
    #[serde(default)]
    pub independent: bool,
}

/// Fully resolved inputs for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub config_file: PathBuf,
    pub current_dir: PathBuf,
    pub extra_dir: PathBuf,
    pub listing_mode: ListingMode,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            config_file: PathBuf::from(DEFAULT_CONFIG_FILE),
            current_dir: PathBuf::from(DEFAULT_CURRENT_DIR),
            extra_dir: PathBuf::from(DEFAULT_EXTRA_DIR),
            listing_mode: ListingMode::Shared,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ListingMode {
    /// One failure scope around all listings: the first failure skips the rest.
    Shared,
    /// Each listing is attempted regardless of earlier failures.
    Independent,
}

/// Result of a single diagnostic step.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", content = "value", rename_all = "lowercase")]
pub enum Outcome<T> {
    Ok(T),
    Failed(String),
}

impl<T> Outcome<T> {
    pub fn from_result<E: std::fmt::Display>(res: Result<T, E>) -> Self {
        match res {
            Ok(v) => Outcome::Ok(v),
            Err(e) => Outcome::Failed(e.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", content = "value", rename_all = "lowercase")]
pub enum ListingOutcome {
    Ok(Vec<String>),
    Failed(String),
    Skipped,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuntimeInfo {
    pub working_dir: String,
    pub executable: String,
    pub version: String,
    pub os: String,
    pub arch: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnvVar {
    pub key: String,
    pub value: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct EnvironmentReport {
    pub runtime: RuntimeInfo,
    pub variables: Vec<EnvVar>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FileDetails {
    pub is_file: bool,
    pub is_symlink: bool,
    pub symlink_target: Option<Outcome<String>>,
    pub contents: Outcome<String>,
    pub parsed: Outcome<serde_json::Value>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FileProbe {
    pub requested_path: String,
    pub absolute_path: String,
    pub exists: bool,
    /// Present only when the file exists.
    pub details: Option<FileDetails>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DirectoryListing {
    pub path: String,
    pub outcome: ListingOutcome,
}

#[derive(Debug, Clone, Serialize)]
pub struct ListingReport {
    pub mode: ListingMode,
    pub listings: Vec<DirectoryListing>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DiagnosticReport {
    pub environment: EnvironmentReport,
    pub probe: FileProbe,
    pub listing: ListingReport,
}
