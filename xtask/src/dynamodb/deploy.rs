//! Table deployment operations (Imperative Shell).

use super::client;
use super::config::{AttributeType, GsiConfig, KeyAttribute, TableConfig};
use super::error::{DynamodbError, Result};
use super::planning::{DeployPlan, DestroyPlan, GsiStatus, TableStatus};
use aws_sdk_dynamodb::types::{
    AttributeDefinition, BillingMode, CreateGlobalSecondaryIndexAction, GlobalSecondaryIndex,
    GlobalSecondaryIndexUpdate, KeySchemaElement, KeyType, Projection, ProjectionType,
    ScalarAttributeType, TimeToLiveSpecification,
};
use aws_sdk_dynamodb::Client;
use std::time::Duration;

/// Execute a deploy plan.
pub async fn execute_deploy_plan(client: &Client, plan: &DeployPlan) -> Result<()> {
    match plan {
        DeployPlan::CreateTable { config } => {
            create_table(client, config).await?;
            wait_for_table_active(client, &config.table_name).await?;
            if let Some(ttl) = &config.ttl_attribute {
                enable_ttl(client, &config.table_name, ttl).await?;
            }
        }
        DeployPlan::UpdateTable {
            table_name,
            gsis_to_add,
            enable_ttl: ttl,
        } => {
            // DynamoDB accepts one index creation per UpdateTable call.
            for gsi in gsis_to_add {
                add_gsi(client, table_name, gsi).await?;
                wait_for_table_active(client, table_name).await?;
            }
            if let Some(ttl) = ttl {
                enable_ttl(client, table_name, ttl).await?;
            }
        }
        DeployPlan::NoChanges { .. } => {}
    }
    Ok(())
}

/// Execute a destroy plan.
pub async fn execute_destroy_plan(client: &Client, plan: &DestroyPlan) -> Result<()> {
    match plan {
        DestroyPlan::DeleteTable { table_name } => delete_table(client, table_name).await,
        DestroyPlan::AlreadyGone { .. } => Ok(()),
    }
}

async fn create_table(client: &Client, config: &TableConfig) -> Result<()> {
    let attribute_definitions = config
        .key_attributes()
        .into_iter()
        .map(attribute_definition)
        .collect::<Result<Vec<_>>>()?;

    let mut request = client
        .create_table()
        .table_name(&config.table_name)
        .set_key_schema(Some(key_schema(
            &config.partition_key,
            config.sort_key.as_ref(),
        )?))
        .set_attribute_definitions(Some(attribute_definitions))
        .billing_mode(BillingMode::PayPerRequest);

    for gsi in &config.gsis {
        request = request.global_secondary_indexes(
            GlobalSecondaryIndex::builder()
                .index_name(&gsi.name)
                .set_key_schema(Some(key_schema(&gsi.partition_key, gsi.sort_key.as_ref())?))
                .projection(projection())
                .build()
                .map_err(DynamodbError::sdk)?,
        );
    }

    request.send().await.map_err(DynamodbError::sdk)?;
    Ok(())
}

async fn add_gsi(client: &Client, table_name: &str, gsi: &GsiConfig) -> Result<()> {
    let attribute_definitions = std::iter::once(&gsi.partition_key)
        .chain(gsi.sort_key.as_ref())
        .map(attribute_definition)
        .collect::<Result<Vec<_>>>()?;

    let action = CreateGlobalSecondaryIndexAction::builder()
        .index_name(&gsi.name)
        .set_key_schema(Some(key_schema(&gsi.partition_key, gsi.sort_key.as_ref())?))
        .projection(projection())
        .build()
        .map_err(DynamodbError::sdk)?;

    client
        .update_table()
        .table_name(table_name)
        .set_attribute_definitions(Some(attribute_definitions))
        .global_secondary_index_updates(GlobalSecondaryIndexUpdate::builder().create(action).build())
        .send()
        .await
        .map_err(DynamodbError::sdk)?;

    Ok(())
}

async fn enable_ttl(client: &Client, table_name: &str, attribute: &str) -> Result<()> {
    let specification = TimeToLiveSpecification::builder()
        .enabled(true)
        .attribute_name(attribute)
        .build()
        .map_err(DynamodbError::sdk)?;

    client
        .update_time_to_live()
        .table_name(table_name)
        .time_to_live_specification(specification)
        .send()
        .await
        .map_err(DynamodbError::sdk)?;
    Ok(())
}

async fn delete_table(client: &Client, table_name: &str) -> Result<()> {
    client
        .delete_table()
        .table_name(table_name)
        .send()
        .await
        .map_err(DynamodbError::sdk)?;
    Ok(())
}

async fn wait_for_table_active(client: &Client, table_name: &str) -> Result<()> {
    let max_attempts = 60;
    let delay = Duration::from_secs(2);

    for _ in 0..max_attempts {
        if let Some(state) = client::get_table_state(client, table_name).await? {
            let all_gsis_active = state.gsis.iter().all(|g| g.status == GsiStatus::Active);
            if state.status == TableStatus::Active && all_gsis_active {
                return Ok(());
            }
        }
        tokio::time::sleep(delay).await;
    }

    Err(DynamodbError::TableActivationTimeout)
}

fn key_schema(
    partition_key: &KeyAttribute,
    sort_key: Option<&KeyAttribute>,
) -> Result<Vec<KeySchemaElement>> {
    std::iter::once((partition_key, KeyType::Hash))
        .chain(sort_key.map(|sk| (sk, KeyType::Range)))
        .map(|(attribute, key_type)| {
            KeySchemaElement::builder()
                .attribute_name(&attribute.name)
                .key_type(key_type)
                .build()
                .map_err(DynamodbError::sdk)
        })
        .collect()
}

fn attribute_definition(attribute: &KeyAttribute) -> Result<AttributeDefinition> {
    AttributeDefinition::builder()
        .attribute_name(&attribute.name)
        .attribute_type(to_scalar_type(attribute.attribute_type))
        .build()
        .map_err(DynamodbError::sdk)
}

fn projection() -> Projection {
    Projection::builder()
        .projection_type(ProjectionType::All)
        .build()
}

fn to_scalar_type(attr_type: AttributeType) -> ScalarAttributeType {
    match attr_type {
        AttributeType::String => ScalarAttributeType::S,
    }
}
