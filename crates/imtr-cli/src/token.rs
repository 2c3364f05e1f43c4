//! # Token Subcommand
//!
//! Random token generation: sessions, API keys, M-Pesa references, raw
//! UUIDs, temporary passwords, and verification codes.

use clap::{Args, ValueEnum};
use imtr_ident::{api_key, session_id, temp_password, uuid_v4, verification_code, Generator};

/// Arguments for the token subcommand.
#[derive(Args, Debug)]
pub struct TokenArgs {
    /// Which token to generate.
    #[arg(value_enum)]
    pub which: TokenKind,
}

/// The tokens the CLI can mint.
#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum TokenKind {
    /// Login session token (`SES-` + 32 hex).
    Session,
    /// Integration API key (`IMTR-` + 32 hex).
    ApiKey,
    /// M-Pesa transaction reference.
    Mpesa,
    /// Raw v4 UUID.
    Uuid,
    /// Temporary password.
    Password,
    /// Numeric verification code.
    Code,
}

pub fn run(args: TokenArgs) -> anyhow::Result<()> {
    let token = match args.which {
        TokenKind::Session => session_id(),
        TokenKind::ApiKey => api_key(),
        TokenKind::Mpesa => Generator::system().mpesa_reference(),
        TokenKind::Uuid => uuid_v4(),
        TokenKind::Password => temp_password(),
        TokenKind::Code => verification_code(),
    };
    println!("{token}");
    Ok(())
}
