//! # Error Hierarchy
//!
//! Structured error types for the workspace, built with `thiserror`.
//!
//! A validation call has two outcomes that must never be confused:
//!
//! - `Ok(false)`: the identifier is invalid. Empty input, wrong length,
//!   non-digits, degenerate sequences, checksum or region mismatches all
//!   land here.
//! - `Err(_)`: the request itself is malformed. An auxiliary value the
//!   identifier kind does not accept, an unknown state abbreviation, or a
//!   registry wired without the requested validator.

use thiserror::Error;

use crate::kind::IdentifierKind;

/// Top-level error type.
#[derive(Error, Debug)]
pub enum BrdocError {
    /// The caller supplied an invalid argument.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// The registry is misconfigured for the requested operation.
    #[error("registry error: {0}")]
    Registry(#[from] RegistryError),
}

/// Invalid-argument errors raised by validators and validated newtypes.
///
/// Each variant carries the offending input so callers can report it
/// without guesswork.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// An auxiliary value was supplied to a kind that accepts none.
    #[error("auxiliary value \"{value}\" must not be provided when validating a {kind}")]
    AuxiliaryValueRejected {
        /// The kind being validated.
        kind: IdentifierKind,
        /// The rejected auxiliary value.
        value: String,
    },

    /// The state abbreviation is not one of the 27 federative units.
    #[error("unknown state abbreviation: \"{0}\" (expected one of the 27 Brazilian federative units)")]
    UnknownStateAbbreviation(String),

    /// The name does not match any supported identifier kind.
    #[error("unknown identifier kind: \"{0}\" (expected cpf or cnpj)")]
    UnknownIdentifierKind(String),

    /// Value rejected while constructing a validated CPF.
    #[error("invalid CPF: \"{0}\"")]
    InvalidCpf(String),

    /// Value rejected while constructing a validated CNPJ.
    #[error("invalid CNPJ: \"{0}\"")]
    InvalidCnpj(String),
}

/// Errors building or querying a validator registry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// The registry was constructed without any validator.
    #[error("no identifier validator was supplied")]
    NoValidators,

    /// A validator reports a kind that differs from its descriptor's kind.
    #[error("validator reports kind {reported} but its descriptor is for {described}")]
    KindMismatch {
        /// Kind returned by the validator.
        reported: IdentifierKind,
        /// Kind of the descriptor whose rules the validator applies.
        described: IdentifierKind,
    },

    /// No registered validator handles the requested kind.
    #[error("validator not found for identifier kind {0}")]
    ValidatorNotFound(IdentifierKind),
}

/// Convenience alias for results carrying [`BrdocError`].
pub type BrdocResult<T> = Result<T, BrdocError>;
