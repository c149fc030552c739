//! # CPF Tax Regions
//!
//! The ninth digit of a CPF records the fiscal region that issued it.
//! Each region covers one or more federative units.
//!
//! | Digit | Units |
//! |---|---|
//! | 0 | RS |
//! | 1 | DF, GO, MS, MT, TO |
//! | 2 | AC, AM, AP, PA, RO, RR |
//! | 3 | CE, MA, PI |
//! | 4 | AL, PB, PE, RN |
//! | 5 | BA, SE |
//! | 6 | MG |
//! | 7 | ES, RJ |
//! | 8 | SP |
//! | 9 | PR, SC |

use brdoc_core::State;

/// Index of the region digit in a normalized CPF.
pub const REGION_DIGIT_INDEX: usize = 8;

/// Federative units served by the fiscal region `digit`.
///
/// Returns `None` for anything other than `'0'..='9'`.
pub fn states_for_region(digit: char) -> Option<&'static [State]> {
    use State::*;

    let states: &'static [State] = match digit {
        '0' => &[Rs],
        '1' => &[Df, Go, Ms, Mt, To],
        '2' => &[Ac, Am, Ap, Pa, Ro, Rr],
        '3' => &[Ce, Ma, Pi],
        '4' => &[Al, Pb, Pe, Rn],
        '5' => &[Ba, Se],
        '6' => &[Mg],
        '7' => &[Es, Rj],
        '8' => &[Sp],
        '9' => &[Pr, Sc],
        _ => return None,
    };
    Some(states)
}

/// Whether a normalized CPF was issued by the region covering `state`.
///
/// Values shorter than the region digit never match.
pub fn matches_region(cpf: &str, state: State) -> bool {
    cpf.chars()
        .nth(REGION_DIGIT_INDEX)
        .and_then(states_for_region)
        .is_some_and(|states| states.contains(&state))
}
