//! # Validated Identifiers
//!
//! `Cpf` and `Cnpj` can only hold values that passed validation. They store
//! the normalized digit string, so `"275.930.516-33"` and `"27593051633"`
//! produce equal values.
//!
//! Deserialization routes through the same constructors, so an invalid
//! identifier cannot enter the system through a JSON or YAML payload.

use serde::{Deserialize, Serialize};

use brdoc_core::{IdentifierDescriptor, State, ValidationError};

use crate::cnpj::{branch_number, CnpjValidator};
use crate::cpf::CpfValidator;
use crate::normalize::normalize;
use crate::options::ValidationOptions;
use crate::region::{states_for_region, REGION_DIGIT_INDEX};
use crate::validator::IdentifierValidator;

/// Implements `Deserialize` by way of the type's validating `new`.
macro_rules! impl_validating_deserialize {
    ($ty:ident) => {
        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let raw = String::deserialize(deserializer)?;
                Self::new(raw).map_err(serde::de::Error::custom)
            }
        }
    };
}

/// Branch number of a company's head office.
pub const HEADQUARTERS_BRANCH: &str = "0001";

/// A valid CPF, stored as 11 digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Cpf(String);

impl_validating_deserialize!(Cpf);

impl Cpf {
    /// Validate and normalize a CPF.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidCpf`] carrying the raw input.
    pub fn new(raw: impl Into<String>) -> Result<Self, ValidationError> {
        Self::build(raw.into(), None)
    }

    /// Validate a CPF that must have been issued for `state`.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidCpf`] if the value is invalid or
    /// its region does not serve `state`.
    pub fn with_state(raw: impl Into<String>, state: State) -> Result<Self, ValidationError> {
        Self::build(raw.into(), Some(state))
    }

    fn build(raw: String, state: Option<State>) -> Result<Self, ValidationError> {
        let validator = CpfValidator::new();
        let options = ValidationOptions::default();
        let state = state.map(|s| s.abbreviation());

        let digits = normalize(&raw, &IdentifierDescriptor::CPF, options)
            .filter(|digits| {
                matches!(validator.apply_specific_validation(digits, state), Ok(true))
            });

        match digits {
            Some(digits) => Ok(Self(digits)),
            None => Err(ValidationError::InvalidCpf(raw)),
        }
    }

    /// The 11 digits.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The fiscal region digit.
    pub fn region_digit(&self) -> char {
        char::from(self.0.as_bytes()[REGION_DIGIT_INDEX])
    }

    /// Federative units served by the region that issued this CPF.
    pub fn region_states(&self) -> &'static [State] {
        states_for_region(self.region_digit()).unwrap_or(&[])
    }
}

impl std::fmt::Display for Cpf {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for Cpf {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// A valid CNPJ, stored as 14 digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Cnpj(String);

impl_validating_deserialize!(Cnpj);

impl Cnpj {
    /// Validate and normalize a CNPJ.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidCnpj`] carrying the raw input.
    pub fn new(raw: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = raw.into();
        let validator = CnpjValidator::new();

        let digits = normalize(&raw, &IdentifierDescriptor::CNPJ, ValidationOptions::default())
            .filter(|digits| {
                matches!(validator.apply_specific_validation(digits, None), Ok(true))
            });

        match digits {
            Some(digits) => Ok(Self(digits)),
            None => Err(ValidationError::InvalidCnpj(raw)),
        }
    }

    /// The 14 digits.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The 8-digit company root shared by every branch.
    pub fn root(&self) -> &str {
        &self.0[..8]
    }

    /// The 4-digit branch number.
    pub fn branch_number(&self) -> &str {
        branch_number(&self.0).unwrap_or_default()
    }

    /// Whether this CNPJ identifies the head office.
    pub fn is_headquarters(&self) -> bool {
        self.branch_number() == HEADQUARTERS_BRANCH
    }
}

impl std::fmt::Display for Cnpj {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for Cnpj {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
