//! # Federative Units
//!
//! The 26 Brazilian states plus the Federal District, identified by their
//! two-letter abbreviations. CPF validation cross-checks a caller-supplied
//! abbreviation against the issuing region encoded in the CPF.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Number of federative units (26 states + Federal District).
pub const STATE_COUNT: usize = 27;

/// A Brazilian federative unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum State {
    /// Acre.
    Ac,
    /// Alagoas.
    Al,
    /// Amapá.
    Ap,
    /// Amazonas.
    Am,
    /// Bahia.
    Ba,
    /// Ceará.
    Ce,
    /// Distrito Federal.
    Df,
    /// Espírito Santo.
    Es,
    /// Goiás.
    Go,
    /// Maranhão.
    Ma,
    /// Mato Grosso.
    Mt,
    /// Mato Grosso do Sul.
    Ms,
    /// Minas Gerais.
    Mg,
    /// Pará.
    Pa,
    /// Paraíba.
    Pb,
    /// Paraná.
    Pr,
    /// Pernambuco.
    Pe,
    /// Piauí.
    Pi,
    /// Rio de Janeiro.
    Rj,
    /// Rio Grande do Norte.
    Rn,
    /// Rio Grande do Sul.
    Rs,
    /// Rondônia.
    Ro,
    /// Roraima.
    Rr,
    /// Santa Catarina.
    Sc,
    /// São Paulo.
    Sp,
    /// Sergipe.
    Se,
    /// Tocantins.
    To,
}

impl State {
    /// All federative units, alphabetical by full name.
    pub fn all() -> &'static [State] {
        &[
            Self::Ac,
            Self::Al,
            Self::Ap,
            Self::Am,
            Self::Ba,
            Self::Ce,
            Self::Df,
            Self::Es,
            Self::Go,
            Self::Ma,
            Self::Mt,
            Self::Ms,
            Self::Mg,
            Self::Pa,
            Self::Pb,
            Self::Pr,
            Self::Pe,
            Self::Pi,
            Self::Rj,
            Self::Rn,
            Self::Rs,
            Self::Ro,
            Self::Rr,
            Self::Sc,
            Self::Sp,
            Self::Se,
            Self::To,
        ]
    }

    /// Uppercase two-letter abbreviation.
    pub fn abbreviation(&self) -> &'static str {
        match self {
            Self::Ac => "AC",
            Self::Al => "AL",
            Self::Ap => "AP",
            Self::Am => "AM",
            Self::Ba => "BA",
            Self::Ce => "CE",
            Self::Df => "DF",
            Self::Es => "ES",
            Self::Go => "GO",
            Self::Ma => "MA",
            Self::Mt => "MT",
            Self::Ms => "MS",
            Self::Mg => "MG",
            Self::Pa => "PA",
            Self::Pb => "PB",
            Self::Pr => "PR",
            Self::Pe => "PE",
            Self::Pi => "PI",
            Self::Rj => "RJ",
            Self::Rn => "RN",
            Self::Rs => "RS",
            Self::Ro => "RO",
            Self::Rr => "RR",
            Self::Sc => "SC",
            Self::Sp => "SP",
            Self::Se => "SE",
            Self::To => "TO",
        }
    }

    /// Full name in Portuguese.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Ac => "Acre",
            Self::Al => "Alagoas",
            Self::Ap => "Amapá",
            Self::Am => "Amazonas",
            Self::Ba => "Bahia",
            Self::Ce => "Ceará",
            Self::Df => "Distrito Federal",
            Self::Es => "Espírito Santo",
            Self::Go => "Goiás",
            Self::Ma => "Maranhão",
            Self::Mt => "Mato Grosso",
            Self::Ms => "Mato Grosso do Sul",
            Self::Mg => "Minas Gerais",
            Self::Pa => "Pará",
            Self::Pb => "Paraíba",
            Self::Pr => "Paraná",
            Self::Pe => "Pernambuco",
            Self::Pi => "Piauí",
            Self::Rj => "Rio de Janeiro",
            Self::Rn => "Rio Grande do Norte",
            Self::Rs => "Rio Grande do Sul",
            Self::Ro => "Rondônia",
            Self::Rr => "Roraima",
            Self::Sc => "Santa Catarina",
            Self::Sp => "São Paulo",
            Self::Se => "Sergipe",
            Self::To => "Tocantins",
        }
    }

    /// Look up a unit by abbreviation, ignoring case.
    ///
    /// The input is uppercased and compared against the canonical
    /// abbreviations. Surrounding whitespace is not trimmed.
    pub fn from_abbreviation(abbreviation: &str) -> Option<State> {
        let upper = abbreviation.to_uppercase();
        Self::all()
            .iter()
            .copied()
            .find(|s| s.abbreviation() == upper)
    }
}

impl std::fmt::Display for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.abbreviation())
    }
}

impl FromStr for State {
    type Err = crate::error::ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_abbreviation(s)
            .ok_or_else(|| crate::error::ValidationError::UnknownStateAbbreviation(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn count_matches_constant() {
        assert_eq!(State::all().len(), STATE_COUNT);
    }

    #[test]
    fn abbreviations_unique_and_uppercase() {
        let set: HashSet<&str> = State::all().iter().map(|s| s.abbreviation()).collect();
        assert_eq!(set.len(), STATE_COUNT);
        for abbr in set {
            assert_eq!(abbr.len(), 2);
            assert_eq!(abbr, abbr.to_uppercase());
        }
    }

    #[test]
    fn parse_ignores_case() {
        assert_eq!("sp".parse::<State>().unwrap(), State::Sp);
        assert_eq!("Rr".parse::<State>().unwrap(), State::Rr);
        assert_eq!("DF".parse::<State>().unwrap(), State::Df);
    }

    #[test]
    fn parse_rejects_unknown() {
        for bad in ["", "  ", "UT", "LA", "fd", "..", "tocantins", "ñÑ", " SP"] {
            assert!(bad.parse::<State>().is_err(), "{bad:?} should be rejected");
        }
    }

    #[test]
    fn serde_uses_abbreviation() {
        for state in State::all() {
            let json = serde_json::to_string(state).unwrap();
            assert_eq!(json, format!("\"{}\"", state.abbreviation()));
            let back: State = serde_json::from_str(&json).unwrap();
            assert_eq!(back, *state);
        }
    }

    #[test]
    fn display_is_abbreviation() {
        assert_eq!(State::Rs.to_string(), "RS");
        assert_eq!(State::Rs.name(), "Rio Grande do Sul");
    }
}
