//! Router configuration.

use crate::error::InputError;
use crate::{DEFAULT_SUPPRESSION_MS, MAX_SUPPRESSION_MS, MIN_SUPPRESSION_MS};
use serde::{Deserialize, Serialize};

/// Input router configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouterConfig {
    /// Window (ms) after a handled gesture during which activations from a
    /// different pathway are dropped as synthetic duplicates.
    pub suppression_ms: u64,

    /// Whether Enter/Space on a focused control toggles its widget.
    pub keyboard_activation: bool,

    /// Whether Escape closes every widget.
    pub escape_closes: bool,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            suppression_ms: DEFAULT_SUPPRESSION_MS,
            keyboard_activation: true,
            escape_closes: true,
        }
    }
}

impl RouterConfig {
    /// Config with a custom suppression window, validated.
    pub fn with_suppression_ms(suppression_ms: u64) -> Result<Self, InputError> {
        let config = Self {
            suppression_ms,
            ..Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), InputError> {
        if !(MIN_SUPPRESSION_MS..=MAX_SUPPRESSION_MS).contains(&self.suppression_ms) {
            return Err(InputError::SuppressionOutOfRange {
                value: self.suppression_ms,
                min: MIN_SUPPRESSION_MS,
                max: MAX_SUPPRESSION_MS,
            });
        }
        Ok(())
    }
}
