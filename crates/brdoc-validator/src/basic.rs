//! # Basic Validations
//!
//! Character-level checks shared by every identifier kind. They run on a
//! value that already passed the length gate and before any checksum.

/// A normalized value is plausible when it is made only of ASCII digits
/// and is not a single repeated character.
///
/// Repeated-digit values such as `00000000000` are common placeholders and
/// are rejected even when their check digits happen to add up.
pub fn is_plausible(value: &str) -> bool {
    !all_chars_equal(value) && all_chars_are_digits(value)
}

/// `true` when the value has exactly one distinct character.
pub fn all_chars_equal(value: &str) -> bool {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => chars.all(|c| c == first),
        None => false,
    }
}

/// `true` when every character is an ASCII decimal digit.
pub fn all_chars_are_digits(value: &str) -> bool {
    value.chars().all(|c| c.is_ascii_digit())
}

/// Decode a value already checked by [`all_chars_are_digits`] into digits.
pub(crate) fn digits(value: &str) -> Vec<u32> {
    value.chars().filter_map(|c| c.to_digit(10)).collect()
}
