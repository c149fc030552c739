//! # Identifier Kinds
//!
//! The closed set of identifier kinds this workspace validates. Registry
//! dispatch keys on [`IdentifierKind`], so adding a kind forces every
//! `match` in the workspace to handle it at compile time.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::ValidationError;

/// A Brazilian federal identifier kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdentifierKind {
    /// Cadastro de Pessoas Físicas: individual taxpayer number, 11 digits.
    Cpf,
    /// Cadastro Nacional da Pessoa Jurídica: legal-entity taxpayer number, 14 digits.
    Cnpj,
}

impl IdentifierKind {
    /// All supported kinds in canonical order.
    pub fn all() -> &'static [IdentifierKind] {
        &[Self::Cpf, Self::Cnpj]
    }

    /// Lowercase identifier, matching the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cpf => "cpf",
            Self::Cnpj => "cnpj",
        }
    }
}

impl std::fmt::Display for IdentifierKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IdentifierKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cpf" => Ok(Self::Cpf),
            "cnpj" => Ok(Self::Cnpj),
            _ => Err(ValidationError::UnknownIdentifierKind(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn as_str_matches_serde() {
        for kind in IdentifierKind::all() {
            let json = serde_json::to_string(kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.as_str()));
        }
    }

    #[test]
    fn from_str_is_case_insensitive() {
        assert_eq!("CPF".parse::<IdentifierKind>().unwrap(), IdentifierKind::Cpf);
        assert_eq!(" Cnpj ".parse::<IdentifierKind>().unwrap(), IdentifierKind::Cnpj);
    }

    #[test]
    fn from_str_rejects_unknown() {
        assert_eq!(
            "rg".parse::<IdentifierKind>().unwrap_err(),
            ValidationError::UnknownIdentifierKind("rg".to_string())
        );
        assert_eq!(
            "".parse::<IdentifierKind>().unwrap_err(),
            ValidationError::UnknownIdentifierKind(String::new())
        );
    }

    #[test]
    fn display() {
        assert_eq!(IdentifierKind::Cnpj.to_string(), "cnpj");
    }
}
