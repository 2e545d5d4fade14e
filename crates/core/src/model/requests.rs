//! API request bodies for user and order operations.
//!
//! Shared between the server and the client. Pure data, no I/O.

use serde::{Deserialize, Serialize};

use super::types::{CustomerSnapshot, Order, UserProfile};

/// Body of `POST /users`: the complete profile, username included.
pub type CreateUserRequest = UserProfile;

/// Body of `PUT /users/{username}`.
///
/// The username always comes from the path. A `username` field in the body is
/// ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    pub full_name: String,
    pub email: String,
    #[serde(default)]
    pub addresses: Vec<String>,
}

impl UpdateUserRequest {
    /// Builds the resulting profile for the given username.
    pub fn into_user(self, username: impl Into<String>) -> UserProfile {
        UserProfile {
            username: username.into(),
            full_name: self.full_name,
            email: self.email,
            addresses: self.addresses,
        }
    }
}

impl From<&UserProfile> for UpdateUserRequest {
    fn from(user: &UserProfile) -> Self {
        Self {
            full_name: user.full_name.clone(),
            email: user.email.clone(),
            addresses: user.addresses.clone(),
        }
    }
}

/// Body of `POST /orders/{username}` and `PUT /orders/{username}/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequest {
    pub order_status: String,
    #[serde(default)]
    pub items: Vec<String>,
}

impl OrderRequest {
    pub fn new(order_status: impl Into<String>, items: Vec<String>) -> Self {
        Self {
            order_status: order_status.into(),
            items,
        }
    }

    /// Builds a new order owned by `owner`, with a generated id.
    pub fn into_new_order(self, owner: &UserProfile) -> Order {
        Order::new(
            owner.username.clone(),
            self.order_status,
            self.items,
            CustomerSnapshot::of(owner),
        )
    }

    /// Builds the replacement for order `id` owned by `owner`, keeping the id.
    pub fn into_order(self, owner: &UserProfile, id: impl Into<String>) -> Order {
        Order {
            username: owner.username.clone(),
            id: id.into(),
            order_status: self.order_status,
            items: self.items,
            customer: CustomerSnapshot::of(owner),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn owner() -> UserProfile {
        UserProfile::new("bob", "Bob B", "b@x.com").with_address("1 Elm St")
    }

    #[test]
    fn test_update_user_ignores_body_username() {
        let request: UpdateUserRequest = serde_json::from_value(json!({
            "username": "mallory",
            "fullName": "Bob Builder",
            "email": "bob@x.com",
            "addresses": ["9 Pine Rd"],
        }))
        .unwrap();

        let user = request.into_user("bob");
        assert_eq!(user.username, "bob");
        assert_eq!(user.full_name, "Bob Builder");
        assert_eq!(user.addresses, vec!["9 Pine Rd".to_string()]);
    }

    #[test]
    fn test_update_user_addresses_default_to_empty() {
        let request: UpdateUserRequest =
            serde_json::from_value(json!({"fullName": "Bob", "email": "b@x.com"})).unwrap();
        assert!(request.addresses.is_empty());
    }

    #[test]
    fn test_create_user_requires_username() {
        let result: Result<CreateUserRequest, _> =
            serde_json::from_value(json!({"fullName": "Bob", "email": "b@x.com"}));
        assert!(result.is_err());
    }

    #[test]
    fn test_order_request_into_new_order_copies_owner() {
        let order = OrderRequest::new("pending", vec!["itemA".to_string()]).into_new_order(&owner());
        assert_eq!(order.username, "bob");
        assert_eq!(order.customer.full_name, "Bob B");
        assert_eq!(order.customer.address.as_deref(), Some("1 Elm St"));
        assert!(!order.id.is_empty());
    }

    #[test]
    fn test_order_request_into_order_keeps_id() {
        let order = OrderRequest::new("shipped", vec![]).into_order(&owner(), "o-42");
        assert_eq!(order.id, "o-42");
        assert_eq!(order.order_status, "shipped");
    }

    #[test]
    fn test_order_request_requires_status() {
        let result: Result<OrderRequest, _> = serde_json::from_value(json!({"items": ["a"]}));
        assert!(result.is_err());
    }
}
