//! # Normalizer
//!
//! Turns a raw candidate into a value of exactly the descriptor's length,
//! or rejects it. Character classes are not checked here; that is the job
//! of [`crate::basic`].
//!
//! ## Pipeline
//!
//! ```text
//! raw ──► blank? ──► strip formatters ──► left-pad ──► length gate ──► normalized
//!          │          (optional)           (optional)     │
//!          └──────────── None ◄────────────────────────────┘
//! ```
//!
//! Lengths are counted in `char`s, so a multi-byte character occupies one
//! position, the same as in the mask.

use brdoc_core::IdentifierDescriptor;

use crate::options::ValidationOptions;

/// Normalize `raw` against `descriptor`.
///
/// Returns `None` when the input is blank or when, after the optional
/// strip and pad steps, its length differs from `descriptor.length`.
pub fn normalize(
    raw: &str,
    descriptor: &IdentifierDescriptor,
    options: ValidationOptions,
) -> Option<String> {
    if raw.trim().is_empty() {
        tracing::trace!(kind = %descriptor.kind, "blank candidate");
        return None;
    }

    let mut value = if options.remove_formatters {
        strip_formatters(raw, descriptor)
    } else {
        raw.to_string()
    };

    if options.pad {
        value = pad_left(&value, descriptor.length, descriptor.padding_char);
    }

    let len = value.chars().count();
    if len != descriptor.length {
        tracing::trace!(
            kind = %descriptor.kind,
            expected = descriptor.length,
            actual = len,
            "candidate rejected by length gate"
        );
        return None;
    }

    Some(value)
}

/// Drop every character that is both at a formatting position of the mask
/// and one of the descriptor's formatting characters.
///
/// Indices refer to the raw input, so an unformatted value keeps all of
/// its digits even though some of them sit at formatting positions.
pub fn strip_formatters(raw: &str, descriptor: &IdentifierDescriptor) -> String {
    let formatter_positions = descriptor.formatting_positions();
    raw.chars()
        .enumerate()
        .filter(|(i, c)| !(formatter_positions.contains(i) && descriptor.is_formatting_char(*c)))
        .map(|(_, c)| c)
        .collect()
}

/// Left-pad `value` with `padding` until it is `width` characters long.
/// Longer values are returned unchanged.
pub fn pad_left(value: &str, width: usize, padding: char) -> String {
    let len = value.chars().count();
    if len >= width {
        return value.to_string();
    }
    let mut padded: String = std::iter::repeat(padding).take(width - len).collect();
    padded.push_str(value);
    padded
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const CPF: IdentifierDescriptor = IdentifierDescriptor::CPF;
    const CNPJ: IdentifierDescriptor = IdentifierDescriptor::CNPJ;

    fn opts(remove_formatters: bool, pad: bool) -> ValidationOptions {
        ValidationOptions::new(remove_formatters, pad)
    }

    #[test]
    fn blank_input_rejected() {
        for raw in ["", " ", "\t\n", "           "] {
            assert_eq!(normalize(raw, &CPF, opts(true, true)), None, "{raw:?}");
        }
    }

    #[test]
    fn formatted_cpf_stripped() {
        assert_eq!(
            normalize("275.930.516-33", &CPF, opts(true, false)).as_deref(),
            Some("27593051633")
        );
    }

    #[test]
    fn formatted_cnpj_stripped() {
        assert_eq!(
            normalize("16.788.314/0001-30", &CNPJ, opts(true, false)).as_deref(),
            Some("16788314000130")
        );
    }

    #[test]
    fn unformatted_digits_survive_strip() {
        assert_eq!(
            normalize("27593051633", &CPF, opts(true, false)).as_deref(),
            Some("27593051633")
        );
    }

    #[test]
    fn formatting_char_at_data_position_kept() {
        // '.' at index 2 is a data position in the CPF mask.
        assert_eq!(strip_formatters("27.593051633", &CPF), "27.593051633");
        // '-' at index 3 is a formatting position and is dropped.
        assert_eq!(strip_formatters("275-93051633", &CPF), "27593051633");
    }

    #[test]
    fn misplaced_formatting_rejected_by_length_gate() {
        assert_eq!(normalize("27.593.051.633", &CPF, opts(true, false)), None);
    }

    #[test]
    fn foreign_char_at_formatting_position_kept() {
        assert_eq!(strip_formatters("275/930/516/33", &CPF), "275/930/516/33");
    }

    #[test]
    fn formatted_input_without_strip_fails_gate() {
        assert_eq!(normalize("275.930.516-33", &CPF, opts(false, false)), None);
    }

    #[test]
    fn pad_fills_to_length() {
        assert_eq!(
            normalize("1023106299", &CPF, opts(true, true)).as_deref(),
            Some("01023106299")
        );
    }

    #[test]
    fn short_input_without_pad_rejected() {
        assert_eq!(normalize("1023106299", &CPF, opts(true, false)), None);
        assert_eq!(normalize("34812338749", &CNPJ, opts(true, false)), None);
    }

    #[test]
    fn long_input_rejected_even_with_pad() {
        assert_eq!(normalize("275930516330", &CPF, opts(true, true)), None);
    }

    #[test]
    fn lengths_count_chars_not_bytes() {
        let raw = "¼0000000000";
        assert_eq!(raw.chars().count(), 11);
        assert_eq!(normalize(raw, &CPF, opts(true, false)).as_deref(), Some(raw));
    }

    #[test]
    fn pad_left_behaviour() {
        assert_eq!(pad_left("7", 3, '0'), "007");
        assert_eq!(pad_left("1234", 3, '0'), "1234");
        assert_eq!(pad_left("", 2, '*'), "**");
    }

    proptest! {
        /// Anything that survives normalization has exactly the canonical length.
        #[test]
        fn normalized_length_invariant(
            raw in "[0-9./\\- a-z]{0,20}",
            remove in any::<bool>(),
            pad in any::<bool>(),
        ) {
            for d in [&CPF, &CNPJ] {
                if let Some(v) = normalize(&raw, d, opts(remove, pad)) {
                    prop_assert_eq!(v.chars().count(), d.length);
                }
            }
        }

        /// Without padding, fewer than `length` characters never pass the gate.
        #[test]
        fn short_input_never_passes_without_pad(raw in "[0-9]{1,10}") {
            prop_assert!(normalize(&raw, &CPF, opts(true, false)).is_none());
        }

        /// Padding any short digit string reaches the canonical length.
        #[test]
        fn pad_reaches_length(raw in "[1-9][0-9]{0,12}") {
            let v = normalize(&raw, &CNPJ, opts(true, true));
            prop_assert_eq!(v.map(|s| s.len()), Some(14));
        }
    }
}
