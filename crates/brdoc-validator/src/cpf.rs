//! # CPF Validator
//!
//! Validates an 11-digit CPF:
//!
//! 1. basic validations (digits only, not a repeated digit);
//! 2. when a state abbreviation is supplied, the region digit at index 8
//!    must belong to a region serving that state;
//! 3. the two mod-11 check digits at indices 9 and 10.
//!
//! The optional auxiliary value is a two-letter state abbreviation. An
//! abbreviation that names no federative unit is a usage error, not a
//! validity verdict.

use brdoc_core::{IdentifierDescriptor, IdentifierKind, State, ValidationError};

use crate::basic::{digits, is_plausible};
use crate::mod11::Mod11Scheme;
use crate::region::matches_region;
use crate::validator::IdentifierValidator;

/// CPF check-digit weights.
pub const CPF_SCHEME: Mod11Scheme = Mod11Scheme {
    first: &[10, 9, 8, 7, 6, 5, 4, 3, 2],
    second: &[11, 10, 9, 8, 7, 6, 5, 4, 3, 2],
};

/// Validator for CPF numbers.
///
/// Always bound to [`IdentifierDescriptor::CPF`], so its kind cannot drift
/// from the rules it applies.
#[derive(Debug, Clone, Copy, Default)]
pub struct CpfValidator;

impl CpfValidator {
    /// A CPF validator.
    pub const fn new() -> Self {
        Self
    }

    fn parse_state(auxiliary: Option<&str>) -> Result<Option<State>, ValidationError> {
        auxiliary.map(str::parse::<State>).transpose()
    }
}

impl IdentifierValidator for CpfValidator {
    fn descriptor(&self) -> &IdentifierDescriptor {
        &IdentifierDescriptor::CPF
    }

    fn kind(&self) -> IdentifierKind {
        IdentifierKind::Cpf
    }

    fn check_auxiliary(&self, auxiliary: Option<&str>) -> Result<(), ValidationError> {
        Self::parse_state(auxiliary).map(|_| ())
    }

    fn apply_specific_validation(
        &self,
        value: &str,
        auxiliary: Option<&str>,
    ) -> Result<bool, ValidationError> {
        let state = Self::parse_state(auxiliary.filter(|a| !a.is_empty()))?;

        if !is_plausible(value) {
            tracing::debug!("cpf rejected: not a plausible digit sequence");
            return Ok(false);
        }

        if let Some(state) = state {
            if !matches_region(value, state) {
                tracing::debug!(%state, "cpf rejected: region digit does not serve state");
                return Ok(false);
            }
        }

        let digits = digits(value);
        if !CPF_SCHEME.first_digit_matches(&digits) {
            tracing::debug!("cpf rejected: first check digit mismatch");
            return Ok(false);
        }

        let valid = CPF_SCHEME.verify(&digits);
        if !valid {
            tracing::debug!("cpf rejected: second check digit mismatch");
        }
        Ok(valid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::ValidationOptions;

    fn validate(value: &str, state: Option<&str>) -> Result<bool, ValidationError> {
        CpfValidator::new().apply_validation(value, state, ValidationOptions::default())
    }

    fn is_valid(value: &str) -> bool {
        validate(value, None).unwrap()
    }

    #[test]
    fn bound_to_cpf_descriptor() {
        for v in [CpfValidator::new(), CpfValidator::default()] {
            assert_eq!(v.descriptor(), &IdentifierDescriptor::CPF);
            assert_eq!(v.kind(), v.descriptor().kind);
            assert_eq!(v.kind(), IdentifierKind::Cpf);
        }
    }

    #[test]
    fn empty_is_false() {
        assert!(!is_valid(""));
        assert!(!is_valid("   "));
    }

    #[test]
    fn all_digits_equal_is_false() {
        for d in '0'..='9' {
            let value: String = std::iter::repeat(d).take(11).collect();
            assert!(!is_valid(&value), "{value}");
        }
    }

    #[test]
    fn non_digit_is_false() {
        for value in [
            "¼0000000000",
            "111½1111111",
            "2¾222222222",
            "3333333333¥",
            "444444444˅4",
            "555Ѽ5555555",
            "66666Ç66666",
            "777 7777777",
            "88888 88888",
            "9999999999\u{200b}",
        ] {
            assert!(!is_valid(value), "{value:?}");
        }
    }

    #[test]
    fn too_short_is_false() {
        for value in ["33 33", "1", "384"] {
            assert!(!is_valid(value), "{value:?}");
        }
    }

    #[test]
    fn valid_check_digits_with_padding() {
        let opts = ValidationOptions::default().with_pad(true);
        for value in [
            "17482587705",
            "00438880110",
            "37607035427",
            "77777386239",
            "28753660846",
            "38830552550",
            "48628623060",
            "66881678673",
            "28072824589",
            "1023106299",
        ] {
            assert!(
                CpfValidator::new().apply_validation(value, None, opts).unwrap(),
                "{value}"
            );
        }
    }

    #[test]
    fn wrong_check_digits_are_false() {
        assert!(!is_valid("18738704178"));
        assert!(!is_valid("78274468926"));
        assert!(!is_valid("27593051634"));
    }

    #[test]
    fn formatted_value_accepted() {
        assert!(is_valid("275.930.516-33"));
    }

    #[test]
    fn region_mismatch_is_false() {
        for (value, state) in [
            ("00036059064", "DF"),
            ("86043310180", "AC"),
            ("84023836290", "CE"),
            ("48579800374", "AL"),
            ("45377639499", "BA"),
            ("82865948510", "MG"),
            ("05909610635", "ES"),
            ("18145388791", "SP"),
            ("88084100807", "PR"),
            ("87025987956", "RS"),
        ] {
            assert!(!validate(value, Some(state)).unwrap(), "{value} {state}");
        }
    }

    #[test]
    fn region_match_is_true_in_any_case() {
        assert!(validate("40466131224", Some("RR")).unwrap());
        assert!(validate("40466131224", Some("rr")).unwrap());
        assert!(validate("00036059064", Some("rs")).unwrap());
    }

    #[test]
    fn empty_state_is_ignored() {
        assert!(validate("32728128731", Some("")).unwrap());
        assert!(validate("11328885496", None).unwrap());
    }

    #[test]
    fn unknown_state_is_an_error() {
        for (value, state) in [
            ("21768146063", "fd"),
            ("86424438122", "null"),
            ("52425206205", "invalid"),
            ("89490403369", "nonexistent"),
            ("54456313463", "UT"),
            ("54468250550", "LA"),
            ("03966902621", "tocantins"),
            ("93469285730", "ñÑ"),
            ("98622648885", "  "),
            ("08594921926", ".."),
        ] {
            let err = validate(value, Some(state)).unwrap_err();
            assert_eq!(
                err,
                ValidationError::UnknownStateAbbreviation(state.to_string())
            );
        }
    }

    #[test]
    fn unknown_state_is_an_error_even_for_blank_candidate() {
        assert!(validate("", Some("UT")).is_err());
    }

    #[test]
    fn degenerate_value_fails_before_region() {
        assert!(!validate("00000000000", Some("RS")).unwrap());
    }

    #[test]
    fn specific_validation_rejects_unknown_state_directly() {
        let v = CpfValidator::new();
        assert!(v.apply_specific_validation("40466131224", Some("XX")).is_err());
        assert!(v.apply_specific_validation("40466131224", Some("")).unwrap());
    }
}
