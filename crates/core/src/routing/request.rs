//! Inbound request and outbound response shapes of the dispatcher.

use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use super::{resolve_route, Method, Resource, Route, RouteError};

/// Message body of a 400 for an unmatched resource or method.
pub const BAD_REQUEST_MESSAGE: &str = "Bad Request!";

/// An inbound API request, independent of the HTTP framework that received it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApiRequest {
    /// The matched path template, e.g. `/orders/{username}/{id}`.
    pub resource: String,
    pub method: String,
    pub path_parameters: HashMap<String, String>,
    pub body: Option<String>,
}

impl ApiRequest {
    pub fn new(resource: impl Into<String>, method: impl Into<String>) -> Self {
        Self {
            resource: resource.into(),
            method: method.into(),
            ..Default::default()
        }
    }

    /// Adds a path parameter.
    pub fn with_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.path_parameters.insert(name.into(), value.into());
        self
    }

    /// Sets the raw body.
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Sets the body to the JSON encoding of `value`.
    pub fn with_json<T: Serialize>(self, value: &T) -> Self {
        let body = serde_json::to_string(value).unwrap_or_default();
        self.with_body(body)
    }

    /// Resolves the request onto a route without touching any data.
    pub fn route(&self) -> Result<Route, RouteError> {
        let resource = Resource::from_template(&self.resource)
            .ok_or_else(|| RouteError::UnknownResource(self.resource.clone()))?;
        let method: Method = self.method.parse()?;
        resolve_route(resource, method, &self.path_parameters)
    }

    /// Parses the body as JSON.
    ///
    /// Returns a human-readable reason when the body is missing or malformed.
    pub fn json_body<T: DeserializeOwned>(&self) -> Result<T, String> {
        let body = self
            .body
            .as_deref()
            .filter(|b| !b.trim().is_empty())
            .ok_or_else(|| "missing body".to_string())?;
        serde_json::from_str(body).map_err(|e| e.to_string())
    }
}

/// The outcome of a dispatched request: a status code and a JSON body.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status_code: u16,
    pub body: Value,
}

impl ApiResponse {
    pub fn new(status_code: u16, body: Value) -> Self {
        Self { status_code, body }
    }

    /// 200 with a serialized entity or list.
    pub fn ok<T: Serialize>(body: &T) -> Self {
        Self::new(200, to_value(body))
    }

    /// 201 with the created entity.
    pub fn created<T: Serialize>(body: &T) -> Self {
        Self::new(201, to_value(body))
    }

    /// 200 with a plain message string.
    pub fn message(message: impl Into<String>) -> Self {
        Self::new(200, Value::String(message.into()))
    }

    /// 404 with a descriptive message.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(404, Value::String(message.into()))
    }

    /// 400 with a descriptive message.
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(400, Value::String(message.into()))
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code)
    }
}

fn to_value<T: Serialize>(body: &T) -> Value {
    serde_json::to_value(body).unwrap_or(Value::Null)
}
