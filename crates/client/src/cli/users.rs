//! User CLI commands.

use clap::{Parser, Subcommand};

/// User management commands.
#[derive(Debug, Parser)]
pub struct UsersCommand {
    #[command(subcommand)]
    pub action: UsersAction,
}

/// Available user actions.
#[derive(Debug, Subcommand)]
pub enum UsersAction {
    /// List all users.
    List,
    /// Create a new user.
    Create {
        /// Unique username.
        username: String,
        /// Full name.
        #[arg(long)]
        full_name: String,
        /// Email address.
        #[arg(long)]
        email: String,
        /// Address, may be repeated. The first one ships new orders.
        #[arg(long = "address")]
        addresses: Vec<String>,
    },
    /// Get a user by username.
    Get {
        /// Username.
        username: String,
    },
    /// Replace a user's details.
    Update {
        /// Username.
        username: String,
        /// Full name.
        #[arg(long)]
        full_name: String,
        /// Email address.
        #[arg(long)]
        email: String,
        /// Address, may be repeated.
        #[arg(long = "address")]
        addresses: Vec<String>,
    },
    /// Delete a user by username. Their orders are kept.
    Delete {
        /// Username.
        username: String,
    },
}
