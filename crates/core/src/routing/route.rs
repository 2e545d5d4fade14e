use std::collections::HashMap;

use super::{Method, Resource, RouteError};

/// A fully resolved data operation, with its path parameters extracted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    User(UserRoute),
    /// Every order operation is scoped to the user that owns the orders.
    Order {
        username: String,
        action: OrderRoute,
    },
}

/// Operations on user profiles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserRoute {
    List,
    Create,
    Get { username: String },
    Update { username: String },
    Delete { username: String },
}

/// Operations on the orders of one user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderRoute {
    List,
    Create,
    ListByStatus { status: String },
    Get { id: String },
    Update { id: String },
    Delete { id: String },
}

impl Route {
    /// Returns true if the route writes to the store.
    pub fn is_mutation(&self) -> bool {
        matches!(
            self,
            Route::User(UserRoute::Create | UserRoute::Update { .. } | UserRoute::Delete { .. })
                | Route::Order {
                    action: OrderRoute::Create
                        | OrderRoute::Update { .. }
                        | OrderRoute::Delete { .. },
                    ..
                }
        )
    }
}

/// Maps a resource and method onto a route.
///
/// This is a pure function: it never touches the store, so an unsupported
/// combination is rejected before any data access happens.
pub fn resolve_route(
    resource: Resource,
    method: Method,
    params: &HashMap<String, String>,
) -> Result<Route, RouteError> {
    let param = |name: &'static str| {
        params
            .get(name)
            .cloned()
            .ok_or(RouteError::MissingParameter(name))
    };
    let orders = |action: OrderRoute| -> Result<Route, RouteError> {
        Ok(Route::Order {
            username: param("username")?,
            action,
        })
    };

    match (resource, method) {
        (Resource::Users, Method::Get) => Ok(Route::User(UserRoute::List)),
        (Resource::Users, Method::Post) => Ok(Route::User(UserRoute::Create)),

        (Resource::User, Method::Get) => Ok(Route::User(UserRoute::Get {
            username: param("username")?,
        })),
        (Resource::User, Method::Put) => Ok(Route::User(UserRoute::Update {
            username: param("username")?,
        })),
        (Resource::User, Method::Delete) => Ok(Route::User(UserRoute::Delete {
            username: param("username")?,
        })),

        (Resource::UserOrders, Method::Get) => orders(OrderRoute::List),
        (Resource::UserOrders, Method::Post) => orders(OrderRoute::Create),

        (Resource::UserOrdersByStatus, Method::Get) => orders(OrderRoute::ListByStatus {
            status: param("status")?,
        }),

        (Resource::Order, Method::Get) => orders(OrderRoute::Get { id: param("id")? }),
        (Resource::Order, Method::Put) => orders(OrderRoute::Update { id: param("id")? }),
        (Resource::Order, Method::Delete) => orders(OrderRoute::Delete { id: param("id")? }),

        (resource, method) => Err(RouteError::MethodNotAllowed {
            resource: resource.template(),
            method: method.as_str(),
        }),
    }
}
