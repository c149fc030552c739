//! # Validator Registry
//!
//! Dispatches a validation request to the validator registered for the
//! requested [`IdentifierKind`].
//!
//! ## Resolution
//!
//! Validators are matched to kinds once, at construction. Each kind maps to
//! the first validator registered for it; later validators for the same
//! kind are ignored with a warning. A request for an unregistered kind is a
//! wiring defect and fails with [`RegistryError::ValidatorNotFound`].
//!
//! The registry is immutable after construction and can be shared across
//! threads behind an `Arc` or a `&'static`.

use std::collections::HashMap;
use std::sync::Arc;

use brdoc_core::{BrdocError, IdentifierKind, RegistryError};

use crate::cnpj::CnpjValidator;
use crate::cpf::CpfValidator;
use crate::options::ValidationOptions;
use crate::validator::IdentifierValidator;

/// A kind-keyed collection of identifier validators.
#[derive(Debug, Clone)]
pub struct ValidatorRegistry {
    validators: Vec<Arc<dyn IdentifierValidator>>,
    by_kind: HashMap<IdentifierKind, usize>,
}

impl ValidatorRegistry {
    /// Build a registry from a non-empty list of validators.
    ///
    /// # Errors
    ///
    /// - [`RegistryError::NoValidators`] if `validators` is empty.
    /// - [`RegistryError::KindMismatch`] if a validator's kind differs from
    ///   the kind of the descriptor it applies.
    pub fn new(validators: Vec<Arc<dyn IdentifierValidator>>) -> Result<Self, RegistryError> {
        if validators.is_empty() {
            return Err(RegistryError::NoValidators);
        }

        let mut by_kind = HashMap::with_capacity(validators.len());
        for (index, validator) in validators.iter().enumerate() {
            let kind = validator.kind();
            let described = validator.descriptor().kind;
            if kind != described {
                return Err(RegistryError::KindMismatch {
                    reported: kind,
                    described,
                });
            }
            if by_kind.contains_key(&kind) {
                tracing::warn!(
                    %kind,
                    index,
                    "duplicate validator for identifier kind; keeping the first registered"
                );
                continue;
            }
            by_kind.insert(kind, index);
        }

        Ok(Self {
            validators,
            by_kind,
        })
    }

    /// A registry holding the CPF and CNPJ validators.
    pub fn standard() -> Self {
        let validators: Vec<Arc<dyn IdentifierValidator>> = vec![
            Arc::new(CpfValidator::new()),
            Arc::new(CnpjValidator::new()),
        ];
        let by_kind = validators
            .iter()
            .enumerate()
            .map(|(i, v)| (v.kind(), i))
            .collect();
        Self {
            validators,
            by_kind,
        }
    }

    /// The validator registered for `kind`.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::ValidatorNotFound`] naming the kind if none
    /// is registered.
    pub fn validator(
        &self,
        kind: IdentifierKind,
    ) -> Result<&dyn IdentifierValidator, RegistryError> {
        self.by_kind
            .get(&kind)
            .map(|&i| self.validators[i].as_ref())
            .ok_or(RegistryError::ValidatorNotFound(kind))
    }

    /// Kinds this registry can validate, in canonical order.
    pub fn kinds(&self) -> Vec<IdentifierKind> {
        let mut kinds: Vec<_> = self.by_kind.keys().copied().collect();
        kinds.sort();
        kinds
    }

    /// Validate `value` as an identifier of `kind`.
    ///
    /// # Errors
    ///
    /// - [`RegistryError::ValidatorNotFound`] when no validator handles `kind`.
    /// - Any [`brdoc_core::ValidationError`] raised by the validator for a
    ///   malformed auxiliary value.
    pub fn validate(
        &self,
        kind: IdentifierKind,
        value: &str,
        auxiliary: Option<&str>,
        options: ValidationOptions,
    ) -> Result<bool, BrdocError> {
        let validator = self.validator(kind)?;
        Ok(validator.apply_validation(value, auxiliary, options)?)
    }

    /// Validate a CPF, optionally against a state abbreviation.
    pub fn validate_cpf(
        &self,
        cpf: &str,
        state: Option<&str>,
        options: ValidationOptions,
    ) -> Result<bool, BrdocError> {
        self.validate(IdentifierKind::Cpf, cpf, state, options)
    }

    /// Validate a CNPJ.
    pub fn validate_cnpj(
        &self,
        cnpj: &str,
        options: ValidationOptions,
    ) -> Result<bool, BrdocError> {
        self.validate(IdentifierKind::Cnpj, cnpj, None, options)
    }
}

impl Default for ValidatorRegistry {
    fn default() -> Self {
        Self::standard()
    }
}
