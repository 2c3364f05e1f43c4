//! # imtr CLI Entry Point
//!
//! Assembles subcommands and dispatches to handler modules.

use clap::Parser;

/// IMTR platform CLI.
///
/// Mints and validates identifiers, inspects the role-permission table,
/// generates tokens, and signs webhook payloads.
#[derive(Parser, Debug)]
#[command(name = "imtr", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Generate an identifier.
    Generate(imtr_cli::generate::GenerateArgs),
    /// Check an identifier against a kind's format.
    Validate(imtr_cli::validate::ValidateArgs),
    /// Extract the trailing sequence number from an identifier.
    Sequence(imtr_cli::validate::SequenceArgs),
    /// Generate a random token.
    Token(imtr_cli::token::TokenArgs),
    /// Query the role-permission table.
    Permissions(imtr_cli::permissions::PermissionsArgs),
    /// Sign or verify a webhook payload.
    Webhook(imtr_cli::webhook::WebhookArgs),
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate(args) => imtr_cli::generate::run(args),
        Commands::Validate(args) => imtr_cli::validate::run(args),
        Commands::Sequence(args) => imtr_cli::validate::run_sequence(args),
        Commands::Token(args) => imtr_cli::token::run(args),
        Commands::Permissions(args) => imtr_cli::permissions::run(args),
        Commands::Webhook(args) => imtr_cli::webhook::run(args),
    }
}
