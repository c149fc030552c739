//! # Mod-11 Check Digits
//!
//! Both CPF and CNPJ append two verification digits computed by the same
//! weighted-sum rule. Pass 1 runs over the base digits; pass 2 runs over the
//! base digits followed by the pass-1 digit, with a weight vector one
//! element longer.
//!
//! ```text
//! sum = Σ digit[i] × weight[i]
//! r   = sum mod 11
//! dv  = 0        if r < 2
//!       11 - r   otherwise
//! ```

/// Compute one check digit over `digits` with `weights`.
///
/// `digits` and `weights` must have the same length.
pub fn check_digit(digits: &[u32], weights: &[u32]) -> u32 {
    debug_assert_eq!(digits.len(), weights.len());
    let sum: u32 = digits.iter().zip(weights).map(|(d, w)| d * w).sum();
    match sum % 11 {
        r if r < 2 => 0,
        r => 11 - r,
    }
}

/// A two-pass mod-11 scheme, defined by its two weight vectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mod11Scheme {
    /// Weights for the base digits.
    pub first: &'static [u32],
    /// Weights for the base digits plus the first check digit.
    pub second: &'static [u32],
}

impl Mod11Scheme {
    /// Number of base digits the scheme covers.
    pub const fn base_len(&self) -> usize {
        self.first.len()
    }

    /// Total length of a value under this scheme: base plus two check digits.
    pub const fn full_len(&self) -> usize {
        self.first.len() + 2
    }

    /// Derive both check digits for `base`.
    pub fn check_digits(&self, base: &[u32]) -> [u32; 2] {
        let first = check_digit(base, self.first);
        let mut extended = Vec::with_capacity(self.second.len());
        extended.extend_from_slice(base);
        extended.push(first);
        let second = check_digit(&extended, self.second);
        [first, second]
    }

    /// Whether the pass-1 digit derived from the base matches the value.
    pub fn first_digit_matches(&self, digits: &[u32]) -> bool {
        let base = self.base_len();
        digits.len() > base && check_digit(&digits[..base], self.first) == digits[base]
    }

    /// Whether the trailing two digits of `digits` are the check digits of
    /// the leading base digits.
    pub fn verify(&self, digits: &[u32]) -> bool {
        if digits.len() != self.full_len() {
            return false;
        }
        let base = self.base_len();
        self.check_digits(&digits[..base])[..] == digits[base..]
    }
}
