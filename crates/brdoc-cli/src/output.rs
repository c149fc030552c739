//! # Verdict Rendering
//!
//! Text and JSON rendering for single checks and batch reports.

use anyhow::Result;
use serde::Serialize;

use brdoc_core::IdentifierKind;

use crate::config::OutputFormat;

/// Outcome of validating one candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Verdict {
    /// Kind the candidate was validated as.
    pub kind: IdentifierKind,
    /// The candidate exactly as supplied.
    pub value: String,
    /// State abbreviation checked against, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    /// Whether the candidate is valid.
    pub valid: bool,
}

impl Verdict {
    fn label(&self) -> &'static str {
        if self.valid {
            "valid"
        } else {
            "invalid"
        }
    }

    /// Render as a single line of text.
    pub fn to_text(&self) -> String {
        match &self.state {
            Some(state) => format!("{} {} [{}]: {}", self.kind, self.value, state, self.label()),
            None => format!("{} {}: {}", self.kind, self.value, self.label()),
        }
    }

    /// Render in `format`.
    pub fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Text => Ok(self.to_text()),
            OutputFormat::Json => Ok(serde_json::to_string(self)?),
        }
    }
}
