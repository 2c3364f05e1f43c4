//! # Webhook Subcommand
//!
//! HMAC-SHA256 signing and verification of webhook payloads.

use clap::{Args, Subcommand};
use imtr_crypto::{sign_webhook, verify_webhook};

/// Arguments for the webhook subcommand.
#[derive(Args, Debug)]
pub struct WebhookArgs {
    #[command(subcommand)]
    pub command: WebhookCommand,
}

#[derive(Subcommand, Debug)]
pub enum WebhookCommand {
    /// Sign a payload, printing the hex signature.
    Sign {
        /// Shared secret.
        #[arg(long)]
        secret: String,
        /// Payload to sign.
        payload: String,
    },
    /// Verify a hex signature over a payload.
    Verify {
        /// Shared secret.
        #[arg(long)]
        secret: String,
        /// Hex signature to check.
        #[arg(long)]
        signature: String,
        /// Payload the signature covers.
        payload: String,
    },
}

pub fn run(args: WebhookArgs) -> anyhow::Result<()> {
    match args.command {
        WebhookCommand::Sign { secret, payload } => {
            println!("{}", sign_webhook(secret.as_bytes(), payload.as_bytes()));
            Ok(())
        }
        WebhookCommand::Verify {
            secret,
            signature,
            payload,
        } => {
            if verify_webhook(secret.as_bytes(), payload.as_bytes(), &signature) {
                println!("valid");
                Ok(())
            } else {
                println!("invalid");
                anyhow::bail!("signature does not match payload");
            }
        }
    }
}
