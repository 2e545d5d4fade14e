//! shopdb-client CLI entry point.

use clap::Parser;
use shopdb_client::cli::orders::OrdersAction;
use shopdb_client::cli::users::UsersAction;
use shopdb_client::cli::{Cli, Commands};
use shopdb_client::output::render;
use shopdb_client::ShopdbClient;
use shopdb_core::model::{OrderRequest, UpdateUserRequest, UserProfile};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = ShopdbClient::new(&cli.base_url);
    let format = cli.format;

    match cli.command {
        Commands::Users(users_cmd) => match users_cmd.action {
            UsersAction::List => {
                let users = client.list_users().await?;
                println!("{}", render(users.as_slice(), format));
            }
            UsersAction::Create {
                username,
                full_name,
                email,
                addresses,
            } => {
                let user = client
                    .create_user(&UserProfile {
                        username,
                        full_name,
                        email,
                        addresses,
                    })
                    .await?;
                if !cli.quiet {
                    println!("{}", render(&user, format));
                }
            }
            UsersAction::Get { username } => {
                let user = client.get_user(&username).await?;
                println!("{}", render(&user, format));
            }
            UsersAction::Update {
                username,
                full_name,
                email,
                addresses,
            } => {
                let user = client
                    .update_user(
                        &username,
                        &UpdateUserRequest {
                            full_name,
                            email,
                            addresses,
                        },
                    )
                    .await?;
                if !cli.quiet {
                    println!("{}", render(&user, format));
                }
            }
            UsersAction::Delete { username } => {
                let message = client.delete_user(&username).await?;
                if !cli.quiet {
                    println!("{}", render(&message, format));
                }
            }
        },
        Commands::Orders(orders_cmd) => match orders_cmd.action {
            OrdersAction::List { username, status } => {
                let orders = match status {
                    Some(status) => client.list_orders_by_status(&username, &status).await?,
                    None => client.list_orders(&username).await?,
                };
                println!("{}", render(orders.as_slice(), format));
            }
            OrdersAction::Create {
                username,
                status,
                items,
            } => {
                let order = client
                    .create_order(&username, &OrderRequest::new(status, items))
                    .await?;
                if cli.quiet {
                    println!("{}", order.id);
                } else {
                    println!("{}", render(&order, format));
                }
            }
            OrdersAction::Get { username, id } => {
                let order = client.get_order(&username, &id).await?;
                println!("{}", render(&order, format));
            }
            OrdersAction::Update {
                username,
                id,
                status,
                items,
            } => {
                let order = client
                    .update_order(&username, &id, &OrderRequest::new(status, items))
                    .await?;
                if !cli.quiet {
                    println!("{}", render(&order, format));
                }
            }
            OrdersAction::Delete { username, id } => {
                let message = client.delete_order(&username, &id).await?;
                if !cli.quiet {
                    println!("{}", render(&message, format));
                }
            }
        },
    }

    Ok(())
}
