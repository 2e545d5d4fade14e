//! CLI command definitions.

pub mod orders;
pub mod users;

use clap::{Parser, Subcommand, ValueEnum};

/// CLI client for the shopdb API.
#[derive(Debug, Parser)]
#[command(name = "shopdb-client")]
#[command(about = "CLI client for the shopdb API", long_about = None)]
pub struct Cli {
    /// Server base URL.
    #[arg(long, env = "SHOPDB_URL", default_value = "http://localhost:3000")]
    pub base_url: String,

    /// Output format.
    #[arg(long, default_value = "pretty")]
    pub format: OutputFormat,

    /// Suppress non-essential output.
    #[arg(long)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Raw JSON output.
    Json,
    /// Human-readable output.
    #[default]
    Pretty,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// User profile management.
    Users(users::UsersCommand),
    /// Order management.
    Orders(orders::OrdersCommand),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_is_well_formed() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_order_create() {
        let cli = Cli::try_parse_from([
            "shopdb-client",
            "--format",
            "json",
            "orders",
            "create",
            "bob",
            "--status",
            "pending",
            "--item",
            "itemA",
            "--item",
            "itemB",
        ])
        .unwrap();

        let Commands::Orders(cmd) = cli.command else {
            panic!("expected orders command");
        };
        match cmd.action {
            orders::OrdersAction::Create {
                username,
                status,
                items,
            } => {
                assert_eq!(username, "bob");
                assert_eq!(status, "pending");
                assert_eq!(items, vec!["itemA", "itemB"]);
            }
            other => panic!("unexpected action {other:?}"),
        }
    }
}
