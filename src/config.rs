//! Analyzer configuration.
//!
//! Read from YAML. Every key is optional and unknown keys are rejected:
//!
//! ```yaml
//! final_syllable: as-scanned   # or: guru (default)
//! min_score: 0.75
//! split_half_verses: false
//! extra_meters:
//!   - name: Pathyā
//!     padas: ["xxxxLGGx", "xxxxLGLx"]
//!     tolerant: true
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalogue::MeterEntry;
use crate::errors::ChandasError;
use crate::matcher::MatchPolicy;

pub use crate::weight::FinalSyllable;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnalyzerConfig {
    /// Whether a light pāda-final syllable counts as guru.
    pub final_syllable: FinalSyllable,
    /// Acceptance floor for tolerant meters, in `[0, 1]`.
    pub min_score: f64,
    /// Allow two-line input to match four-pāda meters.
    pub split_half_verses: bool,
    /// Meters appended after the built-in catalogue.
    pub extra_meters: Vec<MeterEntry>,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        let policy = MatchPolicy::default();
        Self {
            final_syllable: FinalSyllable::default(),
            min_score: policy.min_score,
            split_half_verses: policy.split_half_verses,
            extra_meters: Vec::new(),
        }
    }
}

impl AnalyzerConfig {
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ChandasError> {
        // An empty document deserializes to unit, not to a map.
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: AnalyzerConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ChandasError> {
        let path = path.as_ref();
        let yaml = std::fs::read_to_string(path).map_err(|e| ChandasError::io(path.display().to_string(), e))?;
        let config = Self::from_yaml_str(&yaml)?;
        debug!(path = %path.display(), extra_meters = config.extra_meters.len(), "loaded configuration");
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ChandasError> {
        if !(0.0..=1.0).contains(&self.min_score) {
            return Err(ChandasError::config(format!(
                "min_score must be between 0 and 1, found {}",
                self.min_score
            )));
        }
        Ok(())
    }

    pub fn match_policy(&self) -> MatchPolicy {
        MatchPolicy {
            min_score: self.min_score,
            split_half_verses: self.split_half_verses,
            final_syllable: self.final_syllable,
        }
    }
}
