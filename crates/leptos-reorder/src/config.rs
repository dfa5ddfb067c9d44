//! Reorder Configuration

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{ReorderError, ReorderResult};

/// Tunables for the reorder engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ReorderConfig {
    /// Duration of the shift animation. Zero completes shifts synchronously.
    pub transition_duration_ms: u64,
    /// Opacity of the dragged tile while the gesture is active
    pub ghost_opacity: f64,
    /// z-index given to shifting and shifted tiles
    pub raised_z_index: i32,
}

impl Default for ReorderConfig {
    fn default() -> Self {
        Self {
            transition_duration_ms: 300,
            // Fully transparent elements stop receiving drag events
            ghost_opacity: 0.01,
            raised_z_index: 1,
        }
    }
}

impl ReorderConfig {
    pub fn with_transition_ms(mut self, ms: u64) -> Self {
        self.transition_duration_ms = ms;
        self
    }

    pub fn transition_duration(&self) -> Duration {
        Duration::from_millis(self.transition_duration_ms)
    }

    /// Parse a (possibly partial) JSON config, e.g. from a `data-` attribute
    pub fn from_json(json: &str) -> ReorderResult<Self> {
        let config: ReorderConfig = serde_json::from_str(json)
            .map_err(|e| ReorderError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> ReorderResult<()> {
        if !(self.ghost_opacity > 0.0 && self.ghost_opacity <= 1.0) {
            return Err(ReorderError::InvalidConfig(format!(
                "ghostOpacity must be in (0, 1], got {}",
                self.ghost_opacity
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = ReorderConfig::from_json(r#"{"transitionDurationMs": 0}"#).unwrap();
        assert_eq!(config.transition_duration(), Duration::ZERO);
        assert_eq!(config.ghost_opacity, 0.01);
        assert_eq!(config.raised_z_index, 1);
    }

    #[test]
    fn test_invisible_ghost_rejected() {
        let err = ReorderConfig::from_json(r#"{"ghostOpacity": 0}"#).unwrap_err();
        assert!(matches!(err, ReorderError::InvalidConfig(_)));
    }

    #[test]
    fn test_malformed_json_rejected() {
        assert!(ReorderConfig::from_json("{transition").is_err());
    }
}
