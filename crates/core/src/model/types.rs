use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A user profile, identified by an externally supplied username.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub username: String,
    pub full_name: String,
    pub email: String,
    /// Ordered addresses. The first one is the address copied onto new orders.
    #[serde(default)]
    pub addresses: Vec<String>,
}

impl UserProfile {
    /// Creates a profile with no addresses.
    pub fn new(
        username: impl Into<String>,
        full_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            full_name: full_name.into(),
            email: email.into(),
            addresses: Vec::new(),
        }
    }

    /// Appends an address.
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.addresses.push(address.into());
        self
    }

    /// The address used for shipping, if the user has any.
    pub fn primary_address(&self) -> Option<&str> {
        self.addresses.first().map(String::as_str)
    }
}

/// Point-in-time copy of the owning user's details, stored on an order.
///
/// Taken whenever the order is written. Later edits to the user profile do not
/// reach orders that were written before them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerSnapshot {
    pub full_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl CustomerSnapshot {
    /// Copies the full name and primary address of a user.
    pub fn of(user: &UserProfile) -> Self {
        Self {
            full_name: user.full_name.clone(),
            address: user.primary_address().map(str::to_string),
        }
    }
}

/// An order placed by a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub username: String,
    pub id: String,
    /// Free-form status such as "pending" or "shipped".
    pub order_status: String,
    #[serde(default)]
    pub items: Vec<String>,
    #[serde(flatten)]
    pub customer: CustomerSnapshot,
}

impl Order {
    /// Creates an order with a freshly generated id.
    pub fn new(
        username: impl Into<String>,
        order_status: impl Into<String>,
        items: Vec<String>,
        customer: CustomerSnapshot,
    ) -> Self {
        Self {
            username: username.into(),
            id: Uuid::new_v4().to_string(),
            order_status: order_status.into(),
            items,
            customer,
        }
    }

    /// Sets a specific ID for this order (useful for testing).
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_user() -> UserProfile {
        UserProfile::new("bob", "Bob B", "b@x.com")
            .with_address("1 Elm St")
            .with_address("2 Oak Ave")
    }

    #[test]
    fn test_primary_address_is_first() {
        assert_eq!(sample_user().primary_address(), Some("1 Elm St"));
        assert_eq!(UserProfile::new("eve", "Eve", "e@x.com").primary_address(), None);
    }

    #[test]
    fn test_snapshot_copies_name_and_first_address() {
        let snapshot = CustomerSnapshot::of(&sample_user());
        assert_eq!(snapshot.full_name, "Bob B");
        assert_eq!(snapshot.address.as_deref(), Some("1 Elm St"));
    }

    #[test]
    fn test_snapshot_is_not_live() {
        let mut user = sample_user();
        let snapshot = CustomerSnapshot::of(&user);
        user.full_name = "Robert B".to_string();
        assert_eq!(snapshot.full_name, "Bob B");
    }

    #[test]
    fn test_new_orders_get_distinct_ids() {
        let snapshot = CustomerSnapshot::of(&sample_user());
        let a = Order::new("bob", "pending", vec![], snapshot.clone());
        let b = Order::new("bob", "pending", vec![], snapshot);
        assert_ne!(a.id, b.id);
        assert!(Uuid::parse_str(&a.id).is_ok());
    }

    #[test]
    fn test_user_json_shape() {
        let value = serde_json::to_value(sample_user()).unwrap();
        assert_eq!(
            value,
            json!({
                "username": "bob",
                "fullName": "Bob B",
                "email": "b@x.com",
                "addresses": ["1 Elm St", "2 Oak Ave"],
            })
        );
    }

    #[test]
    fn test_order_json_shape_flattens_snapshot() {
        let order = Order::new(
            "bob",
            "pending",
            vec!["itemA".to_string()],
            CustomerSnapshot::of(&sample_user()),
        )
        .with_id("o-1");

        let value = serde_json::to_value(&order).unwrap();
        assert_eq!(
            value,
            json!({
                "username": "bob",
                "id": "o-1",
                "orderStatus": "pending",
                "items": ["itemA"],
                "fullName": "Bob B",
                "address": "1 Elm St",
            })
        );

        let parsed: Order = serde_json::from_value(value).unwrap();
        assert_eq!(parsed, order);
    }

    #[test]
    fn test_order_without_address_omits_field() {
        let user = UserProfile::new("eve", "Eve", "e@x.com");
        let order = Order::new("eve", "pending", vec![], CustomerSnapshot::of(&user));
        let value = serde_json::to_value(&order).unwrap();
        assert!(value.get("address").is_none());
    }
}
