//! The users/orders API.
//!
//! Every resource template is served by one of the handlers below, whatever
//! the method. They translate the HTTP request into an [`ApiRequest`] and let
//! the dispatcher decide what it means.

use std::collections::HashMap;

use axum::{
    body::Bytes,
    extract::{MatchedPath, Path, State},
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use shopdb_core::routing::{ApiRequest, ApiResponse, BAD_REQUEST_MESSAGE};

use crate::{handlers::AppError, state::AppState};

/// ANY on a template without path parameters (`/users`).
#[axum::debug_handler]
pub async fn collection(
    State(state): State<AppState>,
    method: Method,
    path: MatchedPath,
    body: Bytes,
) -> Result<Response, AppError> {
    dispatch(&state, path.as_str(), &method, HashMap::new(), &body).await
}

/// ANY on a template with path parameters.
#[axum::debug_handler]
pub async fn resource(
    State(state): State<AppState>,
    method: Method,
    path: MatchedPath,
    Path(params): Path<HashMap<String, String>>,
    body: Bytes,
) -> Result<Response, AppError> {
    dispatch(&state, path.as_str(), &method, params, &body).await
}

/// Any path outside the API templates.
pub async fn fallback() -> Response {
    (StatusCode::BAD_REQUEST, Json(BAD_REQUEST_MESSAGE)).into_response()
}

async fn dispatch(
    state: &AppState,
    template: &str,
    method: &Method,
    path_parameters: HashMap<String, String>,
    body: &[u8],
) -> Result<Response, AppError> {
    let body = match decode_body(body) {
        Ok(body) => body,
        Err(response) => {
            tracing::warn!(resource = template, method = %method, "Body is not valid UTF-8");
            return Ok(render(response));
        }
    };

    let request = ApiRequest {
        resource: template.to_string(),
        method: method.as_str().to_string(),
        path_parameters,
        body,
    };

    let response = state.dispatcher.dispatch(&request).await?;

    Ok(render(response))
}

/// An empty body is no body. Bytes that are not UTF-8 are rejected, never repaired.
fn decode_body(body: &[u8]) -> Result<Option<String>, ApiResponse> {
    if body.is_empty() {
        return Ok(None);
    }
    String::from_utf8(body.to_vec())
        .map(Some)
        .map_err(|err| ApiResponse::bad_request(format!("Invalid request body: {err}")))
}

fn render(response: ApiResponse) -> Response {
    let status =
        StatusCode::from_u16(response.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(response.body)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_render_keeps_status_and_body() {
        let response = render(ApiResponse::not_found("User bob not found"));
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = render(ApiResponse::created(&json!({"id": "1"})));
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    #[test]
    fn test_decode_body() {
        assert_eq!(decode_body(b""), Ok(None));
        assert_eq!(decode_body(b"{}"), Ok(Some("{}".to_string())));

        let rejected = decode_body(b"{\"fullName\": \"A\xFF\"}").unwrap_err();
        assert_eq!(rejected.status_code, 400);
        assert!(rejected.body.as_str().unwrap().starts_with("Invalid request body: "));
    }
}
