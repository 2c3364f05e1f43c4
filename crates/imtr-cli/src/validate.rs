//! # Validate and Sequence Subcommands
//!
//! Format checks and best-effort sequence extraction. Both print their
//! answer; `validate` also exits nonzero on a mismatch so scripts can
//! branch on the status code.

use anyhow::Context;
use clap::Args;
use imtr_core::IdentifierKind;
use imtr_ident::{extract_sequence, validate};

/// Arguments for the validate subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Identifier kind to check against.
    #[arg(long)]
    pub kind: String,

    /// The identifier to check.
    pub identifier: String,
}

/// Arguments for the sequence subcommand.
#[derive(Args, Debug)]
pub struct SequenceArgs {
    /// The identifier to extract from.
    pub identifier: String,
}

pub fn run(args: ValidateArgs) -> anyhow::Result<()> {
    let kind: IdentifierKind = args
        .kind
        .parse()
        .with_context(|| format!("unsupported kind {:?}", args.kind))?;

    if validate(&args.identifier, kind) {
        println!("valid");
        Ok(())
    } else {
        println!("invalid");
        anyhow::bail!("{:?} does not match the {kind} format", args.identifier);
    }
}

pub fn run_sequence(args: SequenceArgs) -> anyhow::Result<()> {
    match extract_sequence(&args.identifier) {
        Some(sequence) => println!("{sequence}"),
        None => println!("none"),
    }
    Ok(())
}
