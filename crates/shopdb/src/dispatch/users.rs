use shopdb_core::model::{CreateUserRequest, UpdateUserRequest, UserProfile};
use shopdb_core::routing::{ApiRequest, ApiResponse, UserRoute};
use shopdb_core::schema::{
    all_users_query, item_to_user, user_attributes, user_key, user_to_item,
};
use shopdb_core::storage::{Result, TableStore};

use super::parse_body;

pub(super) async fn handle(
    store: &dyn TableStore,
    action: UserRoute,
    request: &ApiRequest,
) -> Result<ApiResponse> {
    match action {
        UserRoute::List => list_users(store).await,
        UserRoute::Create => create_user(store, request).await,
        UserRoute::Get { username } => get_user(store, &username).await,
        UserRoute::Update { username } => update_user(store, &username, request).await,
        UserRoute::Delete { username } => delete_user(store, &username).await,
    }
}

/// Looks up a user profile by username.
pub(super) async fn find_user(store: &dyn TableStore, username: &str) -> Result<Option<UserProfile>> {
    store
        .get_item(&user_key(username))
        .await?
        .map(|item| item_to_user(&item))
        .transpose()
}

pub(super) fn user_not_found(username: &str) -> ApiResponse {
    ApiResponse::not_found(format!("User {username} not found"))
}

async fn list_users(store: &dyn TableStore) -> Result<ApiResponse> {
    let users = store
        .query(&all_users_query())
        .await?
        .iter()
        .map(item_to_user)
        .collect::<Result<Vec<_>>>()?;

    Ok(ApiResponse::ok(&users))
}

async fn create_user(store: &dyn TableStore, request: &ApiRequest) -> Result<ApiResponse> {
    let user: CreateUserRequest = match parse_body(request) {
        Ok(user) => user,
        Err(response) => return Ok(response),
    };

    store.put_item(user_to_item(&user)).await?;
    tracing::debug!(username = %user.username, "User created");

    Ok(ApiResponse::created(&user))
}

async fn get_user(store: &dyn TableStore, username: &str) -> Result<ApiResponse> {
    Ok(match find_user(store, username).await? {
        Some(user) => ApiResponse::ok(&user),
        None => user_not_found(username),
    })
}

async fn update_user(
    store: &dyn TableStore,
    username: &str,
    request: &ApiRequest,
) -> Result<ApiResponse> {
    if find_user(store, username).await?.is_none() {
        return Ok(user_not_found(username));
    }

    let body: UpdateUserRequest = match parse_body(request) {
        Ok(body) => body,
        Err(response) => return Ok(response),
    };
    let user = body.into_user(username);

    store
        .update_item(&user_key(username), user_attributes(&user))
        .await?;

    Ok(ApiResponse::ok(&user))
}

async fn delete_user(store: &dyn TableStore, username: &str) -> Result<ApiResponse> {
    if find_user(store, username).await?.is_none() {
        return Ok(user_not_found(username));
    }

    store.delete_item(&user_key(username)).await?;

    Ok(ApiResponse::message(format!("User {username} was deleted")))
}
