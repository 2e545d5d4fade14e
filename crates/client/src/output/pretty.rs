//! Pretty output formatting.

use shopdb_core::model::{Order, UserProfile};

/// Human-readable rendering.
pub trait Pretty {
    fn pretty(&self) -> String;
}

impl Pretty for UserProfile {
    fn pretty(&self) -> String {
        format_user(self)
    }
}

impl Pretty for [UserProfile] {
    fn pretty(&self) -> String {
        format_users(self)
    }
}

impl Pretty for Order {
    fn pretty(&self) -> String {
        format_order(self)
    }
}

impl Pretty for [Order] {
    fn pretty(&self) -> String {
        format_orders(self)
    }
}

impl Pretty for String {
    fn pretty(&self) -> String {
        self.clone()
    }
}

/// Format a user for display.
pub fn format_user(user: &UserProfile) -> String {
    let mut output = format!("{}\n  Name: {}\n  Email: {}", user.username, user.full_name, user.email);
    for (i, address) in user.addresses.iter().enumerate() {
        output.push_str(&format!("\n  Address {}: {}", i + 1, address));
    }
    output
}

/// Format users for display.
pub fn format_users(users: &[UserProfile]) -> String {
    if users.is_empty() {
        return "No users found.".to_string();
    }
    let mut output = format!("USERS ({})\n", users.len());
    output.push_str(&"-".repeat(40));
    for user in users {
        output.push_str(&format!("\n{}", format_user(user)));
        output.push('\n');
    }
    output
}

/// Format an order for display.
pub fn format_order(order: &Order) -> String {
    let mut output = format!(
        "{} [{}]\n  Customer: {} ({})",
        order.id, order.order_status, order.customer.full_name, order.username
    );
    if let Some(address) = &order.customer.address {
        output.push_str(&format!("\n  Ship to: {}", address));
    }
    if order.items.is_empty() {
        output.push_str("\n  Items: none");
    } else {
        output.push_str(&format!("\n  Items: {}", order.items.join(", ")));
    }
    output
}

/// Format orders for display.
pub fn format_orders(orders: &[Order]) -> String {
    if orders.is_empty() {
        return "No orders found.".to_string();
    }
    let mut output = format!("ORDERS ({})\n", orders.len());
    output.push_str(&"-".repeat(40));
    for order in orders {
        output.push_str(&format!("\n{}", format_order(order)));
        output.push('\n');
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use shopdb_core::model::CustomerSnapshot;

    fn bob() -> UserProfile {
        UserProfile::new("bob", "Bob B", "b@x.com").with_address("1 Elm St")
    }

    #[test]
    fn test_format_user() {
        assert_eq!(
            format_user(&bob()),
            "bob\n  Name: Bob B\n  Email: b@x.com\n  Address 1: 1 Elm St"
        );
    }

    #[test]
    fn test_format_users_empty() {
        assert_eq!(format_users(&[]), "No users found.");
    }

    #[test]
    fn test_format_users_header() {
        let output = format_users(&[bob()]);
        assert!(output.starts_with("USERS (1)\n"));
        assert!(output.contains("Email: b@x.com"));
    }

    #[test]
    fn test_format_order() {
        let order = Order::new(
            "bob",
            "pending",
            vec!["itemA".to_string(), "itemB".to_string()],
            CustomerSnapshot::of(&bob()),
        )
        .with_id("o-1");

        assert_eq!(
            format_order(&order),
            "o-1 [pending]\n  Customer: Bob B (bob)\n  Ship to: 1 Elm St\n  Items: itemA, itemB"
        );
    }

    #[test]
    fn test_format_order_without_address_or_items() {
        let owner = UserProfile::new("eve", "Eve", "e@x.com");
        let order = Order::new("eve", "shipped", vec![], CustomerSnapshot::of(&owner)).with_id("o-2");

        let output = format_order(&order);
        assert!(!output.contains("Ship to"));
        assert!(output.ends_with("Items: none"));
    }

    #[test]
    fn test_format_orders_empty() {
        assert_eq!(format_orders(&[]), "No orders found.");
    }
}
