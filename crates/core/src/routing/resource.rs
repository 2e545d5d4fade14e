use std::fmt;
use std::str::FromStr;

use super::RouteError;

/// The resource path templates served by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    /// `/users`
    Users,
    /// `/users/{username}`
    User,
    /// `/orders/{username}`
    UserOrders,
    /// `/orders/{username}/status/{status}`
    UserOrdersByStatus,
    /// `/orders/{username}/{id}`
    Order,
}

impl Resource {
    /// Every resource, in registration order.
    pub const ALL: [Resource; 5] = [
        Resource::Users,
        Resource::User,
        Resource::UserOrders,
        Resource::UserOrdersByStatus,
        Resource::Order,
    ];

    /// The path template, with `{name}` placeholders for path parameters.
    pub fn template(self) -> &'static str {
        match self {
            Resource::Users => "/users",
            Resource::User => "/users/{username}",
            Resource::UserOrders => "/orders/{username}",
            Resource::UserOrdersByStatus => "/orders/{username}/status/{status}",
            Resource::Order => "/orders/{username}/{id}",
        }
    }

    /// Looks up a resource by its exact path template.
    pub fn from_template(template: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.template() == template)
    }

    /// Returns true if the template carries path parameters.
    pub fn has_parameters(self) -> bool {
        self.template().contains('{')
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.template())
    }
}

/// HTTP methods understood by the router.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

impl FromStr for Method {
    type Err = RouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "GET" => Ok(Method::Get),
            "POST" => Ok(Method::Post),
            "PUT" => Ok(Method::Put),
            "DELETE" => Ok(Method::Delete),
            _ => Err(RouteError::UnsupportedMethod(s.to_string())),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_templates_round_trip() {
        for resource in Resource::ALL {
            assert_eq!(Resource::from_template(resource.template()), Some(resource));
        }
    }

    #[test]
    fn test_unknown_template() {
        assert_eq!(Resource::from_template("/orders"), None);
        assert_eq!(Resource::from_template("/users/alice"), None);
        assert_eq!(Resource::from_template(""), None);
    }

    #[test]
    fn test_has_parameters() {
        assert!(!Resource::Users.has_parameters());
        assert!(Resource::User.has_parameters());
        assert!(Resource::UserOrdersByStatus.has_parameters());
    }

    #[test]
    fn test_method_parsing() {
        assert_eq!("GET".parse::<Method>().unwrap(), Method::Get);
        assert_eq!("post".parse::<Method>().unwrap(), Method::Post);
        assert_eq!("Put".parse::<Method>().unwrap(), Method::Put);
        assert_eq!("DELETE".parse::<Method>().unwrap(), Method::Delete);
        assert_eq!(
            "PATCH".parse::<Method>(),
            Err(RouteError::UnsupportedMethod("PATCH".to_string()))
        );
    }
}
