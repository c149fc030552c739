//! # Identifier Descriptors
//!
//! Static metadata for each [`IdentifierKind`]: the display mask, the
//! canonical length, the padding character, and the characters treated as
//! formatting noise.
//!
//! ## Mask Sentinels
//!
//! In a mask, `N`, `X` and `A` mark data positions. Every other character
//! marks a formatting position. Formatter removal is position-driven: a
//! formatting character is only dropped when it sits at a formatting
//! position of the mask.

use crate::kind::IdentifierKind;

/// Mask characters that mark a data position.
pub const DATA_SENTINELS: [char; 3] = ['N', 'X', 'A'];

/// Immutable description of an identifier layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdentifierDescriptor {
    /// The kind this descriptor belongs to.
    pub kind: IdentifierKind,
    /// Display template, data positions marked with a sentinel.
    pub mask: &'static str,
    /// Canonical length of the unformatted identifier.
    pub length: usize,
    /// Character used to left-pad short input.
    pub padding_char: char,
    /// Characters considered formatting noise.
    pub formatting_chars: &'static [char],
}

impl IdentifierDescriptor {
    /// CPF: `NNN.NNN.NNN-NN`, 11 digits.
    pub const CPF: IdentifierDescriptor = IdentifierDescriptor {
        kind: IdentifierKind::Cpf,
        mask: "NNN.NNN.NNN-NN",
        length: 11,
        padding_char: '0',
        formatting_chars: &['.', '-'],
    };

    /// CNPJ: `NN.NNN.NNN/NNNN-NN`, 14 digits.
    pub const CNPJ: IdentifierDescriptor = IdentifierDescriptor {
        kind: IdentifierKind::Cnpj,
        mask: "NN.NNN.NNN/NNNN-NN",
        length: 14,
        padding_char: '0',
        formatting_chars: &['.', '/', '-'],
    };

    /// The descriptor for a given kind.
    pub const fn for_kind(kind: IdentifierKind) -> &'static IdentifierDescriptor {
        match kind {
            IdentifierKind::Cpf => &Self::CPF,
            IdentifierKind::Cnpj => &Self::CNPJ,
        }
    }

    /// Whether the mask holds a formatting character at `index`.
    ///
    /// Positions past the end of the mask are never formatting positions.
    pub fn is_formatting_position(&self, index: usize) -> bool {
        self.mask
            .chars()
            .nth(index)
            .is_some_and(|c| !DATA_SENTINELS.contains(&c))
    }

    /// Indices of all formatting positions in the mask, ascending.
    pub fn formatting_positions(&self) -> Vec<usize> {
        self.mask
            .chars()
            .enumerate()
            .filter(|(_, c)| !DATA_SENTINELS.contains(c))
            .map(|(i, _)| i)
            .collect()
    }

    /// Whether `c` is one of this identifier's formatting characters.
    pub fn is_formatting_char(&self, c: char) -> bool {
        self.formatting_chars.contains(&c)
    }
}
