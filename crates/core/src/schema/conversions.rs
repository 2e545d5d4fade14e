//! Item conversion functions.
//!
//! Pure functions for converting between table items and domain types.
//! The logical identifiers (username, order id) are not stored as attributes
//! of their own; they are recovered from the key prefixes.

use serde_json::Value;

use crate::model::{CustomerSnapshot, Order, UserProfile};
use crate::storage::{Item, StoreError};

use super::keys;

// ============================================================================
// User conversions
// ============================================================================

/// Non-key attributes of a user profile, as written by an update.
pub fn user_attributes(user: &UserProfile) -> Item {
    let mut item = Item::new();
    item.insert("fullName".to_string(), Value::from(user.full_name.clone()));
    item.insert("email".to_string(), Value::from(user.email.clone()));
    item.insert("addresses".to_string(), string_list(&user.addresses));
    item
}

/// Convert a user profile to a complete table item.
pub fn user_to_item(user: &UserProfile) -> Item {
    let mut item = Item::new();

    // Keys
    item.insert(keys::PK_ATTR.to_string(), Value::from(keys::user_pk()));
    item.insert(
        keys::SK_ATTR.to_string(),
        Value::from(keys::user_sk(&user.username)),
    );

    item.extend(user_attributes(user));
    item
}

/// Convert a table item to a user profile.
pub fn item_to_user(item: &Item) -> Result<UserProfile, StoreError> {
    let sk = get_string(item, keys::SK_ATTR)?;
    let username = keys::username_from_user_sk(&sk)
        .ok_or_else(|| StoreError::InvalidData(format!("Not a user profile key: {sk}")))?;

    Ok(UserProfile {
        username: username.to_string(),
        full_name: get_string(item, "fullName")?,
        email: get_string(item, "email")?,
        addresses: get_string_list(item, "addresses")?,
    })
}

// ============================================================================
// Order conversions
// ============================================================================

/// Non-key attributes of an order, as written by an update.
///
/// A missing address is written as null so an update clears a stale copy.
pub fn order_attributes(order: &Order) -> Item {
    let mut item = Item::new();
    item.insert(
        keys::ORDER_STATUS_ATTR.to_string(),
        Value::from(order.order_status.clone()),
    );
    item.insert("items".to_string(), string_list(&order.items));
    item.insert(
        "fullName".to_string(),
        Value::from(order.customer.full_name.clone()),
    );
    item.insert(
        "address".to_string(),
        order
            .customer
            .address
            .clone()
            .map_or(Value::Null, Value::from),
    );
    item
}

/// Convert an order to a complete table item.
///
/// Unlike [`order_attributes`], a missing address is omitted entirely.
pub fn order_to_item(order: &Order) -> Item {
    let mut item = Item::new();

    // Keys
    item.insert(
        keys::PK_ATTR.to_string(),
        Value::from(keys::order_pk(&order.username)),
    );
    item.insert(
        keys::SK_ATTR.to_string(),
        Value::from(keys::order_sk(&order.id)),
    );

    item.extend(
        order_attributes(order)
            .into_iter()
            .filter(|(_, value)| !value.is_null()),
    );
    item
}

/// Convert a table item to an order.
pub fn item_to_order(item: &Item) -> Result<Order, StoreError> {
    let pk = get_string(item, keys::PK_ATTR)?;
    let sk = get_string(item, keys::SK_ATTR)?;

    let username = keys::username_from_order_pk(&pk)
        .ok_or_else(|| StoreError::InvalidData(format!("Not an order partition key: {pk}")))?;
    let id = keys::order_id_from_sk(&sk)
        .ok_or_else(|| StoreError::InvalidData(format!("Not an order sort key: {sk}")))?;

    Ok(Order {
        username: username.to_string(),
        id: id.to_string(),
        order_status: get_string(item, keys::ORDER_STATUS_ATTR)?,
        items: get_string_list(item, "items")?,
        customer: CustomerSnapshot {
            full_name: get_string(item, "fullName")?,
            address: get_optional_string(item, "address"),
        },
    })
}

// ============================================================================
// Helper functions
// ============================================================================

fn string_list(values: &[String]) -> Value {
    Value::Array(values.iter().cloned().map(Value::from).collect())
}

/// Get a required string attribute.
fn get_string(item: &Item, key: &str) -> Result<String, StoreError> {
    item.get(key)
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| StoreError::InvalidData(format!("Missing or invalid field: {key}")))
}

/// Get an optional string attribute. Null and absent both read as `None`.
fn get_optional_string(item: &Item, key: &str) -> Option<String> {
    item.get(key).and_then(Value::as_str).map(str::to_string)
}

/// Get a list-of-strings attribute. An absent attribute reads as an empty list.
fn get_string_list(item: &Item, key: &str) -> Result<Vec<String>, StoreError> {
    let Some(value) = item.get(key) else {
        return Ok(Vec::new());
    };

    let invalid = || StoreError::InvalidData(format!("Missing or invalid field: {key}"));

    value
        .as_array()
        .ok_or_else(invalid)?
        .iter()
        .map(|v| v.as_str().map(str::to_string).ok_or_else(invalid))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_user() -> UserProfile {
        UserProfile::new("alice", "Alice A", "a@x.com").with_address("123 Main St")
    }

    fn sample_order() -> Order {
        Order::new(
            "alice",
            "pending",
            vec!["itemA".to_string(), "itemB".to_string()],
            CustomerSnapshot::of(&sample_user()),
        )
        .with_id("o-1")
    }

    #[test]
    fn test_user_item_has_correct_keys() {
        let item = user_to_item(&sample_user());
        assert_eq!(item.get("pk").unwrap(), "USER#");
        assert_eq!(item.get("sk").unwrap(), "PROFILE#alice");
        assert!(item.get("username").is_none());
    }

    #[test]
    fn test_user_round_trip() {
        let user = sample_user();
        let parsed = item_to_user(&user_to_item(&user)).unwrap();
        assert_eq!(user, parsed);
    }

    #[test]
    fn test_user_attributes_exclude_keys() {
        let attributes = user_attributes(&sample_user());
        assert!(attributes.get("pk").is_none());
        assert!(attributes.get("sk").is_none());
        assert_eq!(attributes.get("addresses").unwrap(), &json!(["123 Main St"]));
    }

    #[test]
    fn test_item_to_user_rejects_order_item() {
        let item = order_to_item(&sample_order());
        assert!(matches!(
            item_to_user(&item),
            Err(StoreError::InvalidData(_))
        ));
    }

    #[test]
    fn test_item_to_user_missing_email() {
        let mut item = user_to_item(&sample_user());
        item.remove("email");
        assert_eq!(
            item_to_user(&item),
            Err(StoreError::InvalidData(
                "Missing or invalid field: email".to_string()
            ))
        );
    }

    #[test]
    fn test_item_to_user_without_addresses() {
        let mut item = user_to_item(&sample_user());
        item.remove("addresses");
        assert!(item_to_user(&item).unwrap().addresses.is_empty());
    }

    #[test]
    fn test_order_item_has_correct_keys_and_index_attribute() {
        let item = order_to_item(&sample_order());
        assert_eq!(item.get("pk").unwrap(), "ORDER#alice");
        assert_eq!(item.get("sk").unwrap(), "ORDER#o-1");
        assert_eq!(item.get("orderStatus").unwrap(), "pending");
        assert_eq!(item.get("address").unwrap(), "123 Main St");
    }

    #[test]
    fn test_order_round_trip() {
        let order = sample_order();
        let parsed = item_to_order(&order_to_item(&order)).unwrap();
        assert_eq!(order, parsed);
    }

    #[test]
    fn test_order_without_address() {
        let user = UserProfile::new("eve", "Eve", "e@x.com");
        let order = Order::new("eve", "pending", vec![], CustomerSnapshot::of(&user));

        let item = order_to_item(&order);
        assert!(item.get("address").is_none());
        assert_eq!(item_to_order(&item).unwrap().customer.address, None);

        // Updates clear a previously stored address.
        let attributes = order_attributes(&order);
        assert_eq!(attributes.get("address"), Some(&Value::Null));
    }

    #[test]
    fn test_item_to_order_rejects_invalid_items_list() {
        let mut item = order_to_item(&sample_order());
        item.insert("items".to_string(), json!([1, 2]));
        assert!(item_to_order(&item).is_err());
    }

    #[test]
    fn test_item_to_order_rejects_user_item() {
        let item = user_to_item(&sample_user());
        assert!(item_to_order(&item).is_err());
    }
}
