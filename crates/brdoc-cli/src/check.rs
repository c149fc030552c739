//! # Single-Value Checks
//!
//! `brdoc cpf` and `brdoc cnpj`: validate one candidate and exit with its
//! verdict.
//!
//! ```bash
//! brdoc cpf 275.930.516-33
//! brdoc cpf 40466131224 --state RR
//! brdoc cnpj 1065288000145 --pad --format json
//! ```

use anyhow::{Context, Result};
use clap::Args;

use brdoc_core::IdentifierKind;
use brdoc_validator::default_registry;

use crate::config::{NormalizeFlags, Settings};
use crate::exit_code;
use crate::output::Verdict;

/// Arguments for `brdoc cpf`.
#[derive(Args, Debug)]
pub struct CpfArgs {
    /// CPF to validate, formatted or not.
    pub value: String,

    /// Two-letter state abbreviation the CPF must have been issued for.
    #[arg(long)]
    pub state: Option<String>,

    #[command(flatten)]
    pub flags: NormalizeFlags,
}

/// Arguments for `brdoc cnpj`.
#[derive(Args, Debug)]
pub struct CnpjArgs {
    /// CNPJ to validate, formatted or not.
    pub value: String,

    #[command(flatten)]
    pub flags: NormalizeFlags,
}

/// Validate a CPF.
pub fn check_cpf(args: &CpfArgs, settings: &Settings) -> Result<Verdict> {
    let options = args.flags.apply(settings.defaults);
    let valid = default_registry()
        .validate_cpf(&args.value, args.state.as_deref(), options)
        .context("cannot validate CPF")?;
    Ok(Verdict {
        kind: IdentifierKind::Cpf,
        value: args.value.clone(),
        state: args.state.clone().filter(|s| !s.is_empty()),
        valid,
    })
}

/// Validate a CNPJ.
pub fn check_cnpj(args: &CnpjArgs, settings: &Settings) -> Result<Verdict> {
    let options = args.flags.apply(settings.defaults);
    let valid = default_registry()
        .validate_cnpj(&args.value, options)
        .context("cannot validate CNPJ")?;
    Ok(Verdict {
        kind: IdentifierKind::Cnpj,
        value: args.value.clone(),
        state: None,
        valid,
    })
}

/// Execute `brdoc cpf`.
pub fn run_cpf(args: &CpfArgs, settings: &Settings) -> Result<u8> {
    report(check_cpf(args, settings)?, settings)
}

/// Execute `brdoc cnpj`.
pub fn run_cnpj(args: &CnpjArgs, settings: &Settings) -> Result<u8> {
    report(check_cnpj(args, settings)?, settings)
}

fn report(verdict: Verdict, settings: &Settings) -> Result<u8> {
    println!("{}", verdict.render(settings.format)?);
    Ok(if verdict.valid {
        exit_code::VALID
    } else {
        exit_code::INVALID
    })
}
