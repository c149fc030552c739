//! # CNPJ Validator
//!
//! Validates a 14-digit CNPJ:
//!
//! ```text
//!  1 6 7 8 8 3 1 4 │ 0 0 0 1 │ 3 0
//!  └─── root ─────┘ └ branch ┘ └dv┘
//! ```
//!
//! 1. basic validations (digits only, not a repeated digit);
//! 2. the branch segment (indices 8..12) must not be `0000`;
//! 3. the two mod-11 check digits at indices 12 and 13.
//!
//! CNPJ validation takes no auxiliary value; supplying one is a usage error.

use brdoc_core::{IdentifierDescriptor, IdentifierKind, ValidationError};

use crate::basic::{digits, is_plausible};
use crate::mod11::Mod11Scheme;
use crate::validator::IdentifierValidator;

/// CNPJ check-digit weights.
pub const CNPJ_SCHEME: Mod11Scheme = Mod11Scheme {
    first: &[5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2],
    second: &[6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2],
};

/// Branch segment that never identifies a real establishment.
pub const INVALID_BRANCH_NUMBER: &str = "0000";

/// Character range of the branch segment in a normalized CNPJ.
pub const BRANCH_RANGE: std::ops::Range<usize> = 8..12;

/// Validator for CNPJ numbers.
///
/// Always bound to [`IdentifierDescriptor::CNPJ`], so its kind cannot drift
/// from the rules it applies.
#[derive(Debug, Clone, Copy, Default)]
pub struct CnpjValidator;

impl CnpjValidator {
    /// A CNPJ validator.
    pub const fn new() -> Self {
        Self
    }
}

/// The 4-character branch segment of a normalized CNPJ, if long enough.
pub fn branch_number(value: &str) -> Option<&str> {
    value.get(BRANCH_RANGE)
}

/// Whether the branch segment is anything other than the `0000` placeholder.
pub fn branch_number_is_valid(value: &str) -> bool {
    branch_number(value).is_some_and(|branch| branch != INVALID_BRANCH_NUMBER)
}

impl IdentifierValidator for CnpjValidator {
    fn descriptor(&self) -> &IdentifierDescriptor {
        &IdentifierDescriptor::CNPJ
    }

    fn kind(&self) -> IdentifierKind {
        IdentifierKind::Cnpj
    }

    fn check_auxiliary(&self, auxiliary: Option<&str>) -> Result<(), ValidationError> {
        match auxiliary {
            Some(value) if !value.is_empty() => Err(ValidationError::AuxiliaryValueRejected {
                kind: IdentifierKind::Cnpj,
                value: value.to_string(),
            }),
            _ => Ok(()),
        }
    }

    fn apply_specific_validation(
        &self,
        value: &str,
        auxiliary: Option<&str>,
    ) -> Result<bool, ValidationError> {
        self.check_auxiliary(auxiliary)?;

        if !is_plausible(value) {
            tracing::debug!("cnpj rejected: not a plausible digit sequence");
            return Ok(false);
        }

        if !branch_number_is_valid(value) {
            tracing::debug!("cnpj rejected: placeholder branch number");
            return Ok(false);
        }

        let digits = digits(value);
        if !CNPJ_SCHEME.first_digit_matches(&digits) {
            tracing::debug!("cnpj rejected: first check digit mismatch");
            return Ok(false);
        }

        let valid = CNPJ_SCHEME.verify(&digits);
        if !valid {
            tracing::debug!("cnpj rejected: second check digit mismatch");
        }
        Ok(valid)
    }
}
