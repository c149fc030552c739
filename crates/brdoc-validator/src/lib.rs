#![deny(missing_docs)]

//! # brdoc-validator: CPF and CNPJ Validation
//!
//! Validates Brazilian taxpayer identifiers: the individual CPF and the
//! company CNPJ.
//!
//! ## Pipeline
//!
//! Every validation runs the same shared steps before the kind-specific
//! rules:
//!
//! 1. **Auxiliary check.** CPF accepts an optional state abbreviation; CNPJ
//!    accepts none. A malformed auxiliary value is an error, never `false`.
//! 2. **Normalization** ([`normalize`]). Blank input is rejected, mask
//!    formatting characters are stripped, short input is optionally
//!    left-padded, and the result must have exactly the canonical length.
//! 3. **Basic validations** ([`basic`]). ASCII digits only, not one repeated
//!    digit.
//! 4. **Kind rules.** CPF region cross-check ([`region`]), CNPJ branch rule,
//!    then the two mod-11 check digits ([`mod11`]).
//!
//! ## Entry points
//!
//! - [`check_cpf`] / [`check_cnpj`]: free functions over shared instances.
//! - [`ValidatorRegistry`]: kind-keyed dispatch over any set of
//!   [`IdentifierValidator`] implementations.
//! - [`Cpf`] / [`Cnpj`]: newtypes that only hold valid values.

pub mod basic;
pub mod cnpj;
pub mod cpf;
pub mod document;
pub mod facade;
pub mod mod11;
pub mod normalize;
pub mod options;
pub mod region;
pub mod registry;
pub mod validator;

pub use cnpj::CnpjValidator;
pub use cpf::CpfValidator;
pub use document::{Cnpj, Cpf};
pub use facade::{check_cnpj, check_cnpj_with, check_cpf, check_cpf_with, default_registry};
pub use normalize::normalize;
pub use options::ValidationOptions;
pub use registry::ValidatorRegistry;
pub use validator::IdentifierValidator;

pub use brdoc_core::{
    BrdocError, BrdocResult, IdentifierDescriptor, IdentifierKind, RegistryError, State,
    ValidationError,
};
