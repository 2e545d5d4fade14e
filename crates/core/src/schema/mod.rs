//! The single-table layout: key builder and item codec.

mod conversions;
pub mod keys;

pub use conversions::{
    item_to_order, item_to_user, order_attributes, order_to_item, user_attributes, user_to_item,
};
pub use keys::{
    all_users_query, order_key, orders_by_status_query, user_key, user_orders_query,
    ORDER_STATUS_ATTR, PK_ATTR, SK_ATTR, STATUS_INDEX, TTL_ATTR,
};
