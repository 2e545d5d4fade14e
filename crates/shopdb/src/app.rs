use axum::{
    http::{header, Method, StatusCode},
    routing::{any, get},
    Router,
};
use shopdb_core::routing::Resource;
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::{
    config::Config,
    handlers::{api, health::livez},
    state::AppState,
};

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState, config: &Config) -> Router {
    // CORS configuration for API endpoints
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE]);

    // Each template is registered verbatim; the dispatcher decides which
    // methods it supports.
    let api_routes = Resource::ALL
        .into_iter()
        .fold(Router::<AppState>::new(), |router, resource| {
            if resource.has_parameters() {
                router.route(resource.template(), any(api::resource))
            } else {
                router.route(resource.template(), any(api::collection))
            }
        })
        .layer(cors);

    Router::new()
        .route("/livez", get(livez))
        .merge(api_routes)
        .fallback(api::fallback)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            config.request_timeout(),
        ))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
        response::Response,
    };
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use std::sync::Arc;
    use tower::ServiceExt;

    use shopdb_core::storage::StoreError;

    use crate::dispatch::test_support::FailingStore;

    fn app() -> Router {
        create_app(AppState::default(), &Config::default())
    }

    fn request(method: &str, uri: &str, body: Option<Value>) -> Request<Body> {
        let builder = Request::builder().method(method).uri(uri);
        match body {
            Some(body) => builder
                .header("content-type", "application/json")
                .body(Body::from(serde_json::to_string(&body).unwrap()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        }
    }

    async fn json_body(response: Response) -> Value {
        let body = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&body).unwrap()
    }

    async fn create_bob(app: &Router) {
        let response = app
            .clone()
            .oneshot(request(
                "POST",
                "/users",
                Some(json!({
                    "username": "bob",
                    "fullName": "Bob B",
                    "email": "b@x.com",
                    "addresses": ["1 Elm St"],
                })),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    #[tokio::test]
    async fn test_livez() {
        let response = app().oneshot(request("GET", "/livez", None)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_list_users_empty() {
        let response = app().oneshot(request("GET", "/users", None)).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await, json!([]));
    }

    #[tokio::test]
    async fn test_user_round_trip() {
        let app = app();
        let alice = json!({
            "username": "alice",
            "fullName": "Alice A",
            "email": "a@x.com",
            "addresses": ["123 Main St"],
        });

        let response = app
            .clone()
            .oneshot(request("POST", "/users", Some(alice.clone())))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let response = app
            .oneshot(request("GET", "/users/alice", None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await, alice);
    }

    #[tokio::test]
    async fn test_order_scenario() {
        let app = app();
        create_bob(&app).await;

        let response = app
            .clone()
            .oneshot(request(
                "POST",
                "/orders/bob",
                Some(json!({"items": ["itemA"], "orderStatus": "pending"})),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        let created = json_body(response).await;
        assert_eq!(created["fullName"], "Bob B");
        assert_eq!(created["address"], "1 Elm St");
        let id = created["id"].as_str().unwrap().to_string();

        let response = app
            .clone()
            .oneshot(request(
                "POST",
                "/orders/bob",
                Some(json!({"items": ["itemB"], "orderStatus": "shipped"})),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let response = app
            .clone()
            .oneshot(request("GET", "/orders/bob/status/pending", None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let pending = json_body(response).await;
        assert_eq!(pending.as_array().unwrap().len(), 1);
        assert_eq!(pending[0]["id"], id.as_str());

        let response = app
            .clone()
            .oneshot(request("DELETE", &format!("/orders/bob/{id}"), None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            json_body(response).await,
            json!(format!("Order with id {id} was deleted"))
        );

        let response = app
            .oneshot(request("GET", &format!("/orders/bob/{id}"), None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_orders_of_user_without_orders() {
        let app = app();
        create_bob(&app).await;

        let response = app
            .oneshot(request("GET", "/orders/bob", None))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await, json!([]));
    }

    #[tokio::test]
    async fn test_order_for_missing_user() {
        let response = app()
            .oneshot(request(
                "POST",
                "/orders/ghost",
                Some(json!({"items": [], "orderStatus": "pending"})),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(json_body(response).await, json!("User ghost not found"));
    }

    #[tokio::test]
    async fn test_unsupported_method_is_bad_request() {
        let response = app()
            .oneshot(request("DELETE", "/users", None))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(json_body(response).await, json!("Bad Request!"));
    }

    #[tokio::test]
    async fn test_unknown_path_is_bad_request() {
        let response = app()
            .oneshot(request("GET", "/carts/1", None))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(json_body(response).await, json!("Bad Request!"));
    }

    #[tokio::test]
    async fn test_malformed_body_is_bad_request() {
        let response = app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/users")
                    .body(Body::from("{not json"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_non_utf8_body_is_rejected_and_not_stored() {
        let app = app();
        let mut body = br#"{"username":"x","fullName":"A"#.to_vec();
        body.push(0xFF);
        body.extend_from_slice(br#"","email":"e"}"#);

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/users")
                    .header("content-type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let message = json_body(response).await;
        assert!(message
            .as_str()
            .unwrap()
            .starts_with("Invalid request body: "));

        let response = app.oneshot(request("GET", "/users/x", None)).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_store_fault_is_service_unavailable() {
        let state = AppState::with_store(Arc::new(FailingStore::new(
            StoreError::ConnectionFailed("connection refused".to_string()),
        )));
        let app = create_app(state, &Config::default());

        let response = app.oneshot(request("GET", "/users", None)).await.unwrap();

        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }
}
