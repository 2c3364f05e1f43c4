//! # Permissions Subcommand
//!
//! Read-only queries over the canonical role-permission table.

use clap::{Args, Subcommand};
use imtr_access::{has_permission_named, permissions_for_name};
use imtr_core::Role;

/// Arguments for the permissions subcommand.
#[derive(Args, Debug)]
pub struct PermissionsArgs {
    #[command(subcommand)]
    pub command: PermissionsCommand,
}

#[derive(Subcommand, Debug)]
pub enum PermissionsCommand {
    /// List the permissions granted to a role.
    List {
        /// Role name, e.g. `STUDENT`.
        #[arg(long)]
        role: String,
        /// Emit a JSON array instead of one token per line.
        #[arg(long)]
        json: bool,
    },
    /// Check whether a role holds a permission.
    Check {
        /// Role name, e.g. `STUDENT`.
        #[arg(long)]
        role: String,
        /// Permission token, e.g. `profile:read`.
        #[arg(long)]
        permission: String,
    },
    /// List all roles.
    Roles,
}

pub fn run(args: PermissionsArgs) -> anyhow::Result<()> {
    match args.command {
        PermissionsCommand::List { role, json } => {
            let granted = permissions_for_name(&role);
            if json {
                let tokens: Vec<&str> = granted.iter().map(|p| p.as_str()).collect();
                println!("{}", serde_json::to_string(&tokens)?);
            } else {
                for permission in granted {
                    println!("{permission}");
                }
            }
        }
        PermissionsCommand::Check { role, permission } => {
            if has_permission_named(&role, &permission) {
                println!("granted");
            } else {
                println!("denied");
                anyhow::bail!("{role} does not hold {permission}");
            }
        }
        PermissionsCommand::Roles => {
            for role in Role::all_roles() {
                println!("{role}");
            }
        }
    }
    Ok(())
}
