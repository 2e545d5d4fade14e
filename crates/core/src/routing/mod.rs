//! Request routing: resource templates, methods and route resolution.
//!
//! Everything here is pure. The dispatcher in the server crate performs the
//! data access for a resolved [`Route`].

mod error;
mod request;
mod resource;
mod route;

pub use error::RouteError;
pub use request::{ApiRequest, ApiResponse, BAD_REQUEST_MESSAGE};
pub use resource::{Method, Resource};
pub use route::{resolve_route, OrderRoute, Route, UserRoute};
