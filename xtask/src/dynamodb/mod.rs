//! DynamoDB infrastructure management commands.

mod client;
mod config;
mod deploy;
mod error;
mod planning;
mod seed;

pub use error::{DynamodbError, Result};

use crate::prelude::*;
use aws_sdk_dynamodb::Client;
use dialoguer::Confirm;
use planning::{DeployPlan, DestroyPlan};

/// DynamoDB infrastructure management commands.
#[derive(Debug, clap::Parser)]
pub struct DynamodbCommand {
    #[command(subcommand)]
    pub action: DynamodbAction,
}

/// Available DynamoDB actions.
#[derive(Debug, clap::Subcommand)]
pub enum DynamodbAction {
    /// Deploy or destroy DynamoDB table infrastructure.
    Deploy(DeployCommand),

    /// Seed the table with demo users and orders.
    Seed(SeedCommand),
}

/// Deploy or update DynamoDB infrastructure.
#[derive(Debug, clap::Parser)]
#[command(long_about = "Deploy or destroy DynamoDB table infrastructure.

By default, this command creates or updates the shopdb DynamoDB table
with the pk/sk key schema, the statusIdx Global Secondary Index and
time-to-live on the ttl attribute.

The command shows a plan of changes before applying and asks for confirmation.

Environment variables:
  AWS_ENDPOINT_URL    - Use local DynamoDB (e.g., http://localhost:8000)
  AWS_REGION          - AWS region (defaults to us-east-1)
  AWS_PROFILE         - AWS profile to use for credentials")]
pub struct DeployCommand {
    /// Skip confirmation prompts.
    #[arg(long)]
    pub force: bool,

    /// Destroy the table instead of creating/updating.
    #[arg(long)]
    pub destroy: bool,

    /// Table name to use.
    #[arg(long, default_value = "shopdb")]
    pub table_name: String,
}

/// Seed the table with demo users and orders.
#[derive(Debug, clap::Parser)]
#[command(long_about = "Generate and insert demo users and orders into DynamoDB.

Every user gets one address and the requested number of orders. Orders
cycle through the pending, shipped, delivered and cancelled statuses so
the status index has something to return.")]
pub struct SeedCommand {
    /// Number of users to generate.
    #[arg(long, default_value = "5")]
    pub users: u32,

    /// Number of orders to generate for each user.
    #[arg(long, default_value = "3")]
    pub orders_per_user: u32,

    /// Table name to use.
    #[arg(long, default_value = "shopdb")]
    pub table_name: String,

    /// Skip confirmation prompts.
    #[arg(long)]
    pub force: bool,
}

/// Main entry point for dynamodb command.
pub async fn run(command: DynamodbCommand, global: crate::Global) -> Result<()> {
    let aws_config = client::AwsConfig::default();
    let out = Output::new(&global);

    out.field("Target:", aws_config.target_display());
    let dynamo_client = client::create_client(&aws_config).await;

    match command.action {
        DynamodbAction::Deploy(cmd) if cmd.destroy => run_destroy(&dynamo_client, cmd, &out).await,
        DynamodbAction::Deploy(cmd) => run_deploy(&dynamo_client, cmd, &out).await,
        DynamodbAction::Seed(cmd) => run_seed(&dynamo_client, cmd, &out).await,
    }
}

/// Prints unless `--silent` was given.
struct Output {
    silent: bool,
}

impl Output {
    fn new(global: &crate::Global) -> Self {
        Self {
            silent: global.is_silent(),
        }
    }

    fn line(&self, line: impl std::fmt::Display) {
        if !self.silent {
            aprintln!("{}", line);
        }
    }

    fn field(&self, label: &str, value: impl std::fmt::Display) {
        self.line(format!("{} {}", p_b(label), value));
    }

    /// Prints a plan, coloring each line by its leading marker.
    fn plan(&self, title: String, lines: Vec<String>) {
        self.line("");
        self.line(title);
        for line in lines {
            let colored = match line.chars().next() {
                Some('+') => p_g(&line),
                Some('-') => p_r(&line),
                Some('~') => p_y(&line),
                _ => line,
            };
            self.line(format!("  {}", colored));
        }
        self.line("");
    }
}

/// Asks for confirmation unless `force` is set. Declining cancels the command.
fn confirm(force: bool, prompt: &str, default: bool) -> Result<()> {
    if force {
        return Ok(());
    }

    let confirmed = Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?;

    if confirmed {
        Ok(())
    } else {
        Err(DynamodbError::UserCancelled)
    }
}

async fn run_destroy(dynamo_client: &Client, cmd: DeployCommand, out: &Output) -> Result<()> {
    let current_state = client::get_table_state(dynamo_client, &cmd.table_name).await?;
    let plan = planning::calculate_destroy_plan(current_state.as_ref(), &cmd.table_name);

    out.plan(p_y("Destroy Plan:"), planning::format_destroy_plan(&plan));

    if matches!(plan, DestroyPlan::AlreadyGone { .. }) {
        out.line(p_g("Nothing to destroy."));
        return Ok(());
    }

    confirm(
        cmd.force,
        "Are you sure you want to delete this table? ALL DATA WILL BE LOST",
        false,
    )?;

    out.line(p_b("Deleting table..."));
    deploy::execute_destroy_plan(dynamo_client, &plan).await?;
    out.line(p_g("Table destroyed successfully."));

    Ok(())
}

async fn run_deploy(dynamo_client: &Client, cmd: DeployCommand, out: &Output) -> Result<()> {
    let table_config = config::shopdb_table_config().with_table_name(&cmd.table_name);
    let current_state = client::get_table_state(dynamo_client, &cmd.table_name).await?;
    let plan = planning::calculate_deploy_plan(current_state.as_ref(), &table_config);

    out.plan(p_c("Deploy Plan:"), planning::format_deploy_plan(&plan));

    if matches!(plan, DeployPlan::NoChanges { .. }) {
        out.line(p_g("Infrastructure is up to date."));
        return Ok(());
    }

    confirm(cmd.force, "Apply these changes?", true)?;

    out.line(p_b("Applying changes..."));
    deploy::execute_deploy_plan(dynamo_client, &plan).await?;
    out.line(p_g("Infrastructure deployed successfully."));

    Ok(())
}

async fn run_seed(dynamo_client: &Client, cmd: SeedCommand, out: &Output) -> Result<()> {
    out.field("Table:", &cmd.table_name);
    out.field("Users:", cmd.users);
    out.field("Orders per user:", cmd.orders_per_user);

    if client::get_table_state(dynamo_client, &cmd.table_name)
        .await?
        .is_none()
    {
        return Err(DynamodbError::TableNotFound {
            table_name: cmd.table_name,
        });
    }

    let data = seed::generate_seed_data(cmd.users, cmd.orders_per_user);

    let preview = data
        .users
        .iter()
        .take(5)
        .map(|user| {
            let orders = data
                .orders
                .iter()
                .filter(|o| o.username == user.username)
                .count();
            format!("{} <{}> ({} orders)", user.username, user.email, orders)
        })
        .chain((data.users.len() > 5).then(|| format!("... and {} more", data.users.len() - 5)))
        .collect();
    out.plan(p_c("Users to create:"), preview);

    confirm(
        cmd.force,
        &format!("Insert {} items?", data.item_count()),
        true,
    )?;

    let inserted = seed::seed_table(dynamo_client, &cmd.table_name, &data).await?;
    out.line(format!("{} {} items inserted.", p_g("Success:"), inserted));

    Ok(())
}
