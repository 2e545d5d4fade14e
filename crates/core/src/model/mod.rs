mod requests;
mod types;

pub use requests::{CreateUserRequest, OrderRequest, UpdateUserRequest};
pub use types::{CustomerSnapshot, Order, UserProfile};
