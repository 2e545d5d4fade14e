//! Key generation for the single-table layout.
//!
//! Pure functions for deriving partition keys, sort keys and query predicates.
//! Every access path goes through this module so the layout stays consistent.

use crate::storage::{TableKey, TableQuery};

// ============================================================================
// Attribute and index names
// ============================================================================

pub const PK_ATTR: &str = "pk";
pub const SK_ATTR: &str = "sk";
pub const ORDER_STATUS_ATTR: &str = "orderStatus";
pub const TTL_ATTR: &str = "ttl";

/// Global secondary index over (`orderStatus`, `pk`), projecting all attributes.
pub const STATUS_INDEX: &str = "statusIdx";

// ============================================================================
// Key prefixes
// ============================================================================

pub const USER_PREFIX: &str = "USER#";
pub const PROFILE_PREFIX: &str = "PROFILE#";
pub const ORDER_PREFIX: &str = "ORDER#";

// ============================================================================
// User keys
// ============================================================================

/// Partition key shared by every user profile.
///
/// Pattern: `USER#`
pub fn user_pk() -> String {
    USER_PREFIX.to_string()
}

/// Sort key for a user profile.
///
/// Pattern: `PROFILE#<username>`
pub fn user_sk(username: &str) -> String {
    format!("{PROFILE_PREFIX}{username}")
}

/// Primary key of a user profile.
pub fn user_key(username: &str) -> TableKey {
    TableKey::new(user_pk(), user_sk(username))
}

/// Query enumerating every user profile.
pub fn all_users_query() -> TableQuery {
    TableQuery::partition(PK_ATTR, user_pk())
}

/// Extracts the username from a profile sort key.
pub fn username_from_user_sk(sk: &str) -> Option<&str> {
    sk.strip_prefix(PROFILE_PREFIX)
}

// ============================================================================
// Order keys
// ============================================================================

/// Partition key holding every order of one user.
///
/// Pattern: `ORDER#<username>`
pub fn order_pk(username: &str) -> String {
    format!("{ORDER_PREFIX}{username}")
}

/// Sort key for an order.
///
/// Pattern: `ORDER#<order_id>`
pub fn order_sk(order_id: &str) -> String {
    format!("{ORDER_PREFIX}{order_id}")
}

/// Primary key of an order.
pub fn order_key(username: &str, order_id: &str) -> TableKey {
    TableKey::new(order_pk(username), order_sk(order_id))
}

/// Query for all orders of a user.
pub fn user_orders_query(username: &str) -> TableQuery {
    TableQuery::partition(PK_ATTR, order_pk(username))
}

/// Query for the orders of a user with the given status, through the status index.
pub fn orders_by_status_query(username: &str, status: &str) -> TableQuery {
    TableQuery::partition(ORDER_STATUS_ATTR, status)
        .and_sort(PK_ATTR, order_pk(username))
        .on_index(STATUS_INDEX)
}

/// Extracts the username from an order partition key.
pub fn username_from_order_pk(pk: &str) -> Option<&str> {
    pk.strip_prefix(ORDER_PREFIX)
}

/// Extracts the order id from an order sort key.
pub fn order_id_from_sk(sk: &str) -> Option<&str> {
    sk.strip_prefix(ORDER_PREFIX)
}
