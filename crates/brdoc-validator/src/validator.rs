//! # Identifier Validator Trait
//!
//! The seam between the shared normalization pipeline and the
//! kind-specific rules. Implementations supply a descriptor, an auxiliary
//! value check, and the rules for a normalized value; the provided
//! [`IdentifierValidator::apply_validation`] wires them together.
//!
//! Implementations must be stateless (or internally immutable) so that one
//! instance can serve every thread.

use brdoc_core::{IdentifierDescriptor, IdentifierKind, ValidationError};

use crate::normalize::normalize;
use crate::options::ValidationOptions;

/// A validator bound to one identifier kind.
pub trait IdentifierValidator: Send + Sync + std::fmt::Debug {
    /// Layout of the identifier this validator handles.
    fn descriptor(&self) -> &IdentifierDescriptor;

    /// Kind this validator handles.
    fn kind(&self) -> IdentifierKind {
        self.descriptor().kind
    }

    /// Reject auxiliary values this kind does not accept.
    ///
    /// Called with empty auxiliary values already mapped to `None`.
    fn check_auxiliary(&self, auxiliary: Option<&str>) -> Result<(), ValidationError>;

    /// Apply the kind-specific rules to a normalized value.
    ///
    /// `value` has exactly `descriptor().length` characters, not yet checked
    /// for character class.
    fn apply_specific_validation(
        &self,
        value: &str,
        auxiliary: Option<&str>,
    ) -> Result<bool, ValidationError>;

    /// Validate a raw candidate.
    ///
    /// The auxiliary argument is checked first, so a malformed request is
    /// reported whatever the candidate. Candidates rejected by
    /// normalization yield `Ok(false)`.
    fn apply_validation(
        &self,
        value: &str,
        auxiliary: Option<&str>,
        options: ValidationOptions,
    ) -> Result<bool, ValidationError> {
        let auxiliary = auxiliary.filter(|a| !a.is_empty());
        self.check_auxiliary(auxiliary)?;

        match normalize(value, self.descriptor(), options) {
            Some(normalized) => self.apply_specific_validation(&normalized, auxiliary),
            None => Ok(false),
        }
    }
}
