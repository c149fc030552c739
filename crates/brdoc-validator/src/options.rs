//! # Validation Options
//!
//! Per-call switches for the normalization pipeline.

use serde::{Deserialize, Serialize};

/// Controls how a candidate is normalized before validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationOptions {
    /// Drop formatting characters found at the mask's formatting positions.
    #[serde(default = "default_remove_formatters")]
    pub remove_formatters: bool,
    /// Left-pad short input with the descriptor's padding character.
    #[serde(default)]
    pub pad: bool,
}

fn default_remove_formatters() -> bool {
    true
}

impl Default for ValidationOptions {
    fn default() -> Self {
        Self {
            remove_formatters: true,
            pad: false,
        }
    }
}

impl ValidationOptions {
    /// Options with formatter removal and padding both configurable.
    pub const fn new(remove_formatters: bool, pad: bool) -> Self {
        Self {
            remove_formatters,
            pad,
        }
    }

    /// Same options with padding switched on or off.
    pub const fn with_pad(self, pad: bool) -> Self {
        Self { pad, ..self }
    }

    /// Same options with formatter removal switched on or off.
    pub const fn with_remove_formatters(self, remove_formatters: bool) -> Self {
        Self {
            remove_formatters,
            ..self
        }
    }
}
