//! # Validator Facade
//!
//! Free functions over process-wide validator instances. Each validator is
//! built on first use and shared by every subsequent call.

use std::sync::OnceLock;

use brdoc_core::ValidationError;

use crate::cnpj::CnpjValidator;
use crate::cpf::CpfValidator;
use crate::options::ValidationOptions;
use crate::registry::ValidatorRegistry;
use crate::validator::IdentifierValidator;

static CPF_VALIDATOR: OnceLock<CpfValidator> = OnceLock::new();
static CNPJ_VALIDATOR: OnceLock<CnpjValidator> = OnceLock::new();
static DEFAULT_REGISTRY: OnceLock<ValidatorRegistry> = OnceLock::new();

fn cpf_validator() -> &'static CpfValidator {
    CPF_VALIDATOR.get_or_init(CpfValidator::new)
}

fn cnpj_validator() -> &'static CnpjValidator {
    CNPJ_VALIDATOR.get_or_init(CnpjValidator::new)
}

/// Process-wide registry holding the CPF and CNPJ validators.
pub fn default_registry() -> &'static ValidatorRegistry {
    DEFAULT_REGISTRY.get_or_init(ValidatorRegistry::standard)
}

/// Validate a CPF with default options, optionally against a state.
///
/// # Errors
///
/// Returns [`ValidationError::UnknownStateAbbreviation`] when `state` names
/// no federative unit.
pub fn check_cpf(cpf: &str, state: Option<&str>) -> Result<bool, ValidationError> {
    check_cpf_with(cpf, state, ValidationOptions::default())
}

/// Validate a CPF with explicit normalization options.
pub fn check_cpf_with(
    cpf: &str,
    state: Option<&str>,
    options: ValidationOptions,
) -> Result<bool, ValidationError> {
    cpf_validator().apply_validation(cpf, state, options)
}

/// Validate a CNPJ with default options.
///
/// # Errors
///
/// Propagates any [`ValidationError`] raised by the CNPJ validator. No
/// auxiliary value is passed, so none is raised today.
pub fn check_cnpj(cnpj: &str) -> Result<bool, ValidationError> {
    check_cnpj_with(cnpj, ValidationOptions::default())
}

/// Validate a CNPJ with explicit normalization options.
pub fn check_cnpj_with(cnpj: &str, options: ValidationOptions) -> Result<bool, ValidationError> {
    cnpj_validator().apply_validation(cnpj, None, options)
}
