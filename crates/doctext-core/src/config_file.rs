use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::ExtractionConfig;

/// On-disk TOML configuration structure.
/// All fields are optional so partial configs work (merge with defaults).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    pub extraction: Option<ExtractionSection>,
    pub limits: Option<LimitsSection>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExtractionSection {
    pub timeout_ms: Option<u64>,
    pub enable_fallback: Option<bool>,
    pub scanned_text_threshold: Option<usize>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LimitsSection {
    pub max_file_size_mb: Option<u64>,
}

/// Platform config directory path: `<config_dir>/doctext/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("doctext").join("config.toml"))
}

/// Load config by cascading CWD `.doctext.toml` over platform config.
/// CWD values override platform values.
pub fn load_config() -> ConfigFile {
    let platform = config_path().and_then(|p| load_from_path(&p));
    let cwd = load_from_path(&PathBuf::from(".doctext.toml"));

    match (platform, cwd) {
        (None, None) => ConfigFile::default(),
        (Some(p), None) => p,
        (None, Some(c)) => c,
        (Some(p), Some(c)) => merge(p, c),
    }
}

/// Load a config from a specific path. Returns `None` if the file doesn't
/// exist or can't be parsed.
pub fn load_from_path(path: &PathBuf) -> Option<ConfigFile> {
    let content = std::fs::read_to_string(path).ok()?;
    toml::from_str(&content).ok()
}

/// Merge two configs: `overlay` values take precedence over `base`.
pub fn merge(base: ConfigFile, overlay: ConfigFile) -> ConfigFile {
    ConfigFile {
        extraction: Some(ExtractionSection {
            timeout_ms: overlay
                .extraction
                .as_ref()
                .and_then(|e| e.timeout_ms)
                .or_else(|| base.extraction.as_ref().and_then(|e| e.timeout_ms)),
            enable_fallback: overlay
                .extraction
                .as_ref()
                .and_then(|e| e.enable_fallback)
                .or_else(|| base.extraction.as_ref().and_then(|e| e.enable_fallback)),
            scanned_text_threshold: overlay
                .extraction
                .as_ref()
                .and_then(|e| e.scanned_text_threshold)
                .or_else(|| {
                    base.extraction
                        .as_ref()
                        .and_then(|e| e.scanned_text_threshold)
                }),
        }),
        limits: Some(LimitsSection {
            max_file_size_mb: overlay
                .limits
                .as_ref()
                .and_then(|l| l.max_file_size_mb)
                .or_else(|| base.limits.as_ref().and_then(|l| l.max_file_size_mb)),
        }),
    }
}

impl ConfigFile {
    /// Resolve the file's values over the built-in defaults.
    pub fn resolve(&self) -> ExtractionConfig {
        let defaults = ExtractionConfig::default();
        ExtractionConfig {
            enable_fallback: self
                .extraction
                .as_ref()
                .and_then(|e| e.enable_fallback)
                .unwrap_or(defaults.enable_fallback),
            timeout: self
                .extraction
                .as_ref()
                .and_then(|e| e.timeout_ms)
                .map(Duration::from_millis)
                .unwrap_or(defaults.timeout),
            scanned_text_threshold: self
                .extraction
                .as_ref()
                .and_then(|e| e.scanned_text_threshold)
                .unwrap_or(defaults.scanned_text_threshold),
            max_file_size_bytes: self
                .limits
                .as_ref()
                .and_then(|l| l.max_file_size_mb)
                .map(|mb| mb * 1024 * 1024)
                .unwrap_or(defaults.max_file_size_bytes),
        }
    }
}
