use std::{fs, ops::RangeInclusive, path::Path};

use tracing::warn;

use crate::{
    error::{PlanError, Result},
    types::PlanConfig,
};

/// Durations accepted at all.
pub const DURATION_LIMITS: RangeInclusive<u32> = 1..=600;
/// Durations the copy and pacing tables are tuned for.
pub const RECOMMENDED_DURATION: RangeInclusive<u32> = 15..=90;

fn has_word(value: &str) -> bool {
    value.chars().any(char::is_alphanumeric)
}

impl PlanConfig {
    /// Load a brief from a `.toml` or `.json` file. Missing fields keep their defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .map(|ext| ext.to_string_lossy().to_lowercase());
        let content = match ext.as_deref() {
            Some("toml") | Some("json") => fs::read_to_string(path)?,
            _ => {
                return Err(PlanError::UnsupportedBriefFormat {
                    path: path.to_path_buf(),
                });
            }
        };

        let config = if ext.as_deref() == Some("json") {
            serde_json::from_str(&content)?
        } else {
            toml::from_str(&content)?
        };
        Ok(config)
    }

    /// Boundary checks run before generation; the engine itself never fails.
    pub fn validate(&self) -> Result<()> {
        if !has_word(&self.topic) {
            return Err(PlanError::InvalidField {
                field: "topic",
                reason: "must contain at least one letter or digit".into(),
            });
        }
        if !has_word(&self.audience) {
            return Err(PlanError::InvalidField {
                field: "audience",
                reason: "must contain at least one letter or digit".into(),
            });
        }
        if !DURATION_LIMITS.contains(&self.duration) {
            return Err(PlanError::InvalidField {
                field: "duration",
                reason: format!(
                    "{}s is outside {}-{}s",
                    self.duration,
                    DURATION_LIMITS.start(),
                    DURATION_LIMITS.end()
                ),
            });
        }
        if !RECOMMENDED_DURATION.contains(&self.duration) {
            warn!(
                duration = self.duration,
                "duration is outside the recommended {}-{}s window",
                RECOMMENDED_DURATION.start(),
                RECOMMENDED_DURATION.end()
            );
        }
        Ok(())
    }
}
