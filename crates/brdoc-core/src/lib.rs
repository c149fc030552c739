#![deny(missing_docs)]

//! # brdoc-core: Foundational Types for Brazilian Identifier Validation
//!
//! This crate defines the data every validator in the workspace is bound
//! to. It has no internal crate dependencies, only `serde` and `thiserror`
//! from the external ecosystem.
//!
//! ## Design Principles
//!
//! 1. **Single [`IdentifierKind`] enum.** One definition of the supported
//!    identifier kinds, exhaustive `match` everywhere. Dispatch is a lookup
//!    on the tag, never runtime type inspection.
//!
//! 2. **Descriptors are constants.** [`IdentifierDescriptor::CPF`] and
//!    [`IdentifierDescriptor::CNPJ`] carry the mask, canonical length,
//!    padding character, and formatting characters. They are never mutated.
//!
//! 3. **Single [`State`] enum.** The 27 federative units with their
//!    uppercase abbreviations. Abbreviation parsing is case-insensitive.
//!
//! 4. **[`BrdocError`] hierarchy.** Usage errors are typed and kept apart
//!    from the boolean validity verdict. No `.unwrap()` outside tests.

pub mod descriptor;
pub mod error;
pub mod kind;
pub mod state;

pub use descriptor::IdentifierDescriptor;
pub use error::{BrdocError, BrdocResult, RegistryError, ValidationError};
pub use kind::IdentifierKind;
pub use state::{State, STATE_COUNT};
