//! Order CLI commands.

use clap::{Parser, Subcommand};

/// Order management commands.
#[derive(Debug, Parser)]
pub struct OrdersCommand {
    #[command(subcommand)]
    pub action: OrdersAction,
}

/// Available order actions.
#[derive(Debug, Subcommand)]
pub enum OrdersAction {
    /// List the orders of a user.
    List {
        /// Username.
        username: String,
        /// Only list orders with this status.
        #[arg(long)]
        status: Option<String>,
    },
    /// Place a new order.
    Create {
        /// Username.
        username: String,
        /// Order status.
        #[arg(long, default_value = "pending")]
        status: String,
        /// Line item, may be repeated.
        #[arg(long = "item")]
        items: Vec<String>,
    },
    /// Get one order.
    Get {
        /// Username.
        username: String,
        /// Order ID.
        id: String,
    },
    /// Replace the status and items of an order.
    Update {
        /// Username.
        username: String,
        /// Order ID.
        id: String,
        /// Order status.
        #[arg(long)]
        status: String,
        /// Line item, may be repeated.
        #[arg(long = "item")]
        items: Vec<String>,
    },
    /// Delete an order.
    Delete {
        /// Username.
        username: String,
        /// Order ID.
        id: String,
    },
}
