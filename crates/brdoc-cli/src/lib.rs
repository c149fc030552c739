//! # brdoc-cli: CLI Tool for Brazilian Identifier Validation
//!
//! Provides the `brdoc` command-line interface over `brdoc-validator`.
//!
//! ## Subcommands
//!
//! - `brdoc cpf`: Validate one CPF, optionally against a state.
//! - `brdoc cnpj`: Validate one CNPJ.
//! - `brdoc batch`: Validate a file of candidates, one per line.
//!
//! ```bash
//! brdoc cpf 275.930.516-33
//! brdoc cpf 40466131224 --state RR
//! brdoc cnpj 16.788.314/0001-30 --format json
//! brdoc --config brdoc.yaml batch --kind cnpj companies.txt
//! ```

pub mod batch;
pub mod check;
pub mod config;
pub mod output;

/// Process exit statuses.
pub mod exit_code {
    /// Every candidate is valid.
    pub const VALID: u8 = 0;
    /// At least one candidate is invalid.
    pub const INVALID: u8 = 1;
    /// The request was malformed or its input unreadable.
    pub const USAGE: u8 = 2;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct() {
        assert_ne!(exit_code::VALID, exit_code::INVALID);
        assert_ne!(exit_code::INVALID, exit_code::USAGE);
        assert_ne!(exit_code::VALID, exit_code::USAGE);
    }

    #[test]
    fn public_modules_are_accessible() {
        let _ = std::any::type_name::<batch::BatchArgs>();
        let _ = std::any::type_name::<check::CpfArgs>();
        let _ = std::any::type_name::<check::CnpjArgs>();
        let _ = std::any::type_name::<config::CliConfig>();
        let _ = std::any::type_name::<output::Verdict>();
    }
}
