use std::fs;
use std::path::Path;

use formset_augment::ScanFaxConfig;
use formset_core::PadPolicy;
use serde::{Deserialize, Serialize};

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

fn default_flip() -> bool {
    true
}

fn default_scan_fax_samples() -> u32 {
    1
}

/// Run configuration for label collection and augmentation.
///
/// Every field has a default, so a partial JSON file is a valid config.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AugmentConfig {
    /// Emit one horizontally mirrored sample per page.
    #[serde(default = "default_flip")]
    pub flip: bool,
    /// Number of independently sampled scan/fax samples per page.
    #[serde(default = "default_scan_fax_samples")]
    pub scan_fax_samples: u32,
    #[serde(default)]
    pub scan_fax: ScanFaxConfig,
    #[serde(default)]
    pub pad: PadPolicy,
}

impl Default for AugmentConfig {
    fn default() -> Self {
        Self {
            flip: default_flip(),
            scan_fax_samples: default_scan_fax_samples(),
            scan_fax: ScanFaxConfig::default(),
            pad: PadPolicy::default(),
        }
    }
}

impl AugmentConfig {
    /// Load a JSON config from disk.
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Write the config as pretty-printed JSON.
    pub fn write_json(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }
}
