pub mod api;
pub mod error;
pub mod health;

pub use error::AppError;
