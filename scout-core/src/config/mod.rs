//! Per-subsystem configuration with serde defaults.

pub mod defaults;
mod learning_config;
mod scoring_config;
mod verify_config;

pub use learning_config::LearningConfig;
pub use scoring_config::SignalWeights;
pub use verify_config::VerifyConfig;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{ScoutError, ScoutResult};

/// Top-level configuration for the Scout system.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoutConfig {
    pub scoring: SignalWeights,
    pub verify: VerifyConfig,
    pub learning: LearningConfig,
}

impl ScoutConfig {
    /// Load from a TOML file. Missing fields fall back to defaults.
    pub fn load(path: &Path) -> ScoutResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| ScoutError::Config {
            message: format!("cannot read {}: {e}", path.display()),
        })?;
        toml::from_str(&text).map_err(|e| ScoutError::Config {
            message: format!("cannot parse {}: {e}", path.display()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_documented_band() {
        let cfg = ScoutConfig::default();
        assert_eq!(cfg.verify.borderline_low, 0.4);
        assert_eq!(cfg.verify.borderline_high, 0.8);
        assert_eq!(cfg.verify.min_accept_confidence, 0.6);
        assert_eq!(cfg.verify.workers, 3);
    }

    #[test]
    fn partial_toml_falls_back_to_defaults() {
        let cfg: ScoutConfig = toml::from_str("[verify]\nworkers = 8\n").unwrap();
        assert_eq!(cfg.verify.workers, 8);
        assert_eq!(cfg.verify.min_accept_confidence, 0.6);
        assert_eq!(cfg.learning.threshold_step, 0.05);
    }

    #[test]
    fn borderline_band_is_inclusive() {
        let cfg = VerifyConfig::default();
        assert!(cfg.is_borderline(0.4));
        assert!(cfg.is_borderline(0.8));
        assert!(!cfg.is_borderline(0.39));
        assert!(!cfg.is_borderline(0.81));
    }
}
