//! Core for the shopdb project.
//!
//! Pure building blocks shared by the server, the client and the xtask:
//! the domain model, the single-table key layout, route resolution and the
//! table store abstraction.

pub mod model;
pub mod routing;
pub mod schema;
pub mod storage;
