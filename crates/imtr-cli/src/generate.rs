//! # Generate Subcommand
//!
//! Identifier generation for every kind. Course codes take `--subject`;
//! the sequence defaults to 0 for the kinds that ignore it.

use anyhow::Context;
use clap::Args;
use imtr_core::IdentifierKind;
use imtr_ident::Generator;

/// Arguments for the generate subcommand.
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Identifier kind (e.g. `student`, `invoice`, `api_key`).
    #[arg(long)]
    pub kind: String,

    /// Reserved sequence number.
    #[arg(long, default_value_t = 0)]
    pub sequence: u32,

    /// Subject name, required for course codes.
    #[arg(long)]
    pub subject: Option<String>,
}

pub fn run(args: GenerateArgs) -> anyhow::Result<()> {
    let kind: IdentifierKind = args
        .kind
        .parse()
        .with_context(|| format!("unsupported kind {:?}", args.kind))?;

    let generator = Generator::system();
    let identifier = match (kind, &args.subject) {
        (IdentifierKind::Course, Some(subject)) => generator.course_code(subject, args.sequence)?,
        _ => generator.generate(kind, args.sequence)?,
    };

    tracing::debug!(kind = %kind, sequence = args.sequence, "generated identifier");
    println!("{identifier}");
    Ok(())
}
