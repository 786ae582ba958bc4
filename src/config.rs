//! Configuration types for the lip-sync engine.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Top-level configuration for the lip-sync engine.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LipSyncConfig {
    /// Pronunciation dictionary settings.
    pub dictionary: DictionaryConfig,
    /// Stress-weighted frame expansion settings.
    pub stress: StressPolicy,
}

/// Pronunciation dictionary configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DictionaryConfig {
    /// Path to a CMU-format dictionary file (None = empty table; every
    /// word falls back to the neutral mouth shape).
    pub path: Option<PathBuf>,
}

/// How many frames a vowel contributes per stress level.
///
/// These repeat counts are a tunable animation heuristic, not a measured
/// acoustic quantity. Primary (1) and secondary (2) stress both use
/// `stressed_repeats`; only the primary/secondary distinction is collapsed,
/// never the stressed/unstressed one.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct StressPolicy {
    /// Frames for an unstressed vowel (stress digit 0).
    pub unstressed_repeats: usize,
    /// Frames for a stressed vowel (stress digits 1 and 2).
    pub stressed_repeats: usize,
}

impl Default for StressPolicy {
    fn default() -> Self {
        Self {
            unstressed_repeats: 1,
            stressed_repeats: 2,
        }
    }
}

impl StressPolicy {
    /// Repeat count for a stress digit (0 = unstressed, 1/2 = stressed).
    pub fn repeats(&self, stress: u32) -> usize {
        if stress == 0 {
            self.unstressed_repeats
        } else {
            self.stressed_repeats
        }
    }
}

impl LipSyncConfig {
    /// Load configuration from a TOML file, falling back to defaults for missing fields.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &std::path::Path) -> crate::error::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| crate::error::LipSyncError::Config(e.to_string()))
    }

    /// Save configuration to a TOML file, creating parent directories as needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written or the config cannot be serialized.
    pub fn save_to_file(&self, path: &std::path::Path) -> crate::error::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)
            .map_err(|e| crate::error::LipSyncError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

    use super::*;

    #[test]
    fn test_default_stress_policy() {
        let policy = StressPolicy::default();
        assert_eq!(policy.repeats(0), 1);
        assert_eq!(policy.repeats(1), 2);
        assert_eq!(policy.repeats(2), 2);
    }

    #[test]
    fn test_toml_round_trip() {
        let config = LipSyncConfig {
            dictionary: DictionaryConfig {
                path: Some(PathBuf::from("/opt/cmudict.txt")),
            },
            stress: StressPolicy {
                unstressed_repeats: 1,
                stressed_repeats: 3,
            },
        };
        let toml_str = toml::to_string_pretty(&config).unwrap();
        let loaded: LipSyncConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(loaded.dictionary.path, config.dictionary.path);
        assert_eq!(loaded.stress.stressed_repeats, 3);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: LipSyncConfig = toml::from_str("[stress]\nstressed_repeats = 4\n").unwrap();
        assert_eq!(config.stress.stressed_repeats, 4);
        assert_eq!(config.stress.unstressed_repeats, 1);
        assert!(config.dictionary.path.is_none());
    }

    #[test]
    fn test_from_file_missing_is_error() {
        let result = LipSyncConfig::from_file(std::path::Path::new("/nonexistent/lipspeak.toml"));
        assert!(result.is_err());
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let config = LipSyncConfig::default();
        config.save_to_file(&path).unwrap();
        let loaded = LipSyncConfig::from_file(&path).unwrap();
        assert_eq!(loaded.stress.stressed_repeats, 2);
    }
}
