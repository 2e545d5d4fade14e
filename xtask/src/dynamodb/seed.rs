//! Seed command implementation.

use super::error::{DynamodbError, Result};
use aws_sdk_dynamodb::types::{PutRequest, WriteRequest};
use aws_sdk_dynamodb::Client;
use shopdb_core::model::{CustomerSnapshot, Order, UserProfile};
use shopdb_core::schema::{order_to_item, user_to_item};
use shopdb_core::storage::attributes::item_to_attributes;
use shopdb_core::storage::Item;
use std::collections::HashMap;
use std::time::Duration;

/// BatchWriteItem accepts at most 25 requests.
const BATCH_SIZE: usize = 25;

/// Attempts per batch before unprocessed items are reported as an error.
const MAX_BATCH_ATTEMPTS: u32 = 5;

const FIRST_NAMES: [&str; 8] = [
    "Alice", "Bob", "Carol", "Dave", "Erin", "Frank", "Grace", "Heidi",
];
const STREETS: [&str; 5] = ["Main St", "Elm St", "Oak Ave", "Pine Rd", "Cedar Ln"];
const STATUSES: [&str; 4] = ["pending", "shipped", "delivered", "cancelled"];
const PRODUCTS: [&str; 6] = ["keyboard", "mouse", "monitor", "cable", "headset", "webcam"];

/// Demo data to insert.
#[derive(Debug, Default)]
pub struct SeedData {
    pub users: Vec<UserProfile>,
    pub orders: Vec<Order>,
}

impl SeedData {
    /// Number of table items this data produces.
    pub fn item_count(&self) -> usize {
        self.users.len() + self.orders.len()
    }

    /// Every user and order encoded as a table item, users first.
    pub fn items(&self) -> Vec<Item> {
        self.users
            .iter()
            .map(user_to_item)
            .chain(self.orders.iter().map(order_to_item))
            .collect()
    }
}

/// Generate `user_count` users with `orders_per_user` orders each.
///
/// Usernames are deterministic (`alice`, `bob`, ..., `alice2`, ...) so reseeding
/// overwrites the same profiles. Order ids are fresh on every run.
pub fn generate_seed_data(user_count: u32, orders_per_user: u32) -> SeedData {
    let mut data = SeedData::default();

    for i in 0..user_count as usize {
        let first = FIRST_NAMES[i % FIRST_NAMES.len()];
        let round = i / FIRST_NAMES.len();
        let username = match round {
            0 => first.to_lowercase(),
            n => format!("{}{}", first.to_lowercase(), n + 1),
        };

        let user = UserProfile::new(
            &username,
            format!("{} Example", first),
            format!("{}@example.com", username),
        )
        .with_address(format!("{} {}", 100 + i, STREETS[i % STREETS.len()]));

        for j in 0..orders_per_user as usize {
            let status = STATUSES[(i + j) % STATUSES.len()];
            let items = (0..=j % 3)
                .map(|k| PRODUCTS[(i + j + k) % PRODUCTS.len()].to_string())
                .collect();
            data.orders.push(Order::new(
                &username,
                status,
                items,
                CustomerSnapshot::of(&user),
            ));
        }

        data.users.push(user);
    }

    data
}

/// Insert seed data into DynamoDB.
///
/// Items DynamoDB leaves unprocessed (throttling) are re-sent with a growing
/// delay. Only items that were actually written are counted.
pub async fn seed_table(client: &Client, table_name: &str, data: &SeedData) -> Result<usize> {
    let mut inserted = 0;

    for chunk in data.items().chunks(BATCH_SIZE) {
        let mut pending = chunk
            .iter()
            .map(put_request)
            .collect::<Result<Vec<_>>>()?;

        for attempt in 1..=MAX_BATCH_ATTEMPTS {
            let sent = pending.len();
            let output = client
                .batch_write_item()
                .request_items(table_name, pending)
                .send()
                .await
                .map_err(DynamodbError::sdk)?;

            pending = unprocessed_requests(output.unprocessed_items(), table_name);
            inserted += sent - pending.len();

            if pending.is_empty() {
                break;
            }
            if attempt == MAX_BATCH_ATTEMPTS {
                return Err(DynamodbError::UnprocessedItems {
                    inserted,
                    unprocessed: pending.len(),
                });
            }
            tokio::time::sleep(Duration::from_millis(100 * 2u64.pow(attempt))).await;
        }
    }

    Ok(inserted)
}

fn put_request(item: &Item) -> Result<WriteRequest> {
    let put = PutRequest::builder()
        .set_item(Some(item_to_attributes(item)))
        .build()
        .map_err(DynamodbError::sdk)?;
    Ok(WriteRequest::builder().put_request(put).build())
}

/// The write requests for `table_name` that a batch left unprocessed.
fn unprocessed_requests(
    unprocessed: Option<&HashMap<String, Vec<WriteRequest>>>,
    table_name: &str,
) -> Vec<WriteRequest> {
    unprocessed
        .and_then(|tables| tables.get(table_name))
        .cloned()
        .unwrap_or_default()
}
