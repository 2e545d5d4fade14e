use thiserror::Error;

/// Reasons a request cannot be mapped onto a route.
///
/// All of them surface as 400 Bad Request.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RouteError {
    #[error("Unknown resource: {0}")]
    UnknownResource(String),
    #[error("Unsupported method: {0}")]
    UnsupportedMethod(String),
    #[error("{method} is not supported on {resource}")]
    MethodNotAllowed {
        resource: &'static str,
        method: &'static str,
    },
    #[error("Missing path parameter: {0}")]
    MissingParameter(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_error_display() {
        assert_eq!(
            RouteError::UnknownResource("/carts".to_string()).to_string(),
            "Unknown resource: /carts"
        );
        assert_eq!(
            RouteError::MethodNotAllowed {
                resource: "/users",
                method: "PUT"
            }
            .to_string(),
            "PUT is not supported on /users"
        );
        assert_eq!(
            RouteError::MissingParameter("username").to_string(),
            "Missing path parameter: username"
        );
    }
}
