use shopdb_core::model::{Order, OrderRequest, UserProfile};
use shopdb_core::routing::{ApiRequest, ApiResponse, OrderRoute};
use shopdb_core::schema::{
    item_to_order, order_attributes, order_key, order_to_item, orders_by_status_query,
    user_orders_query,
};
use shopdb_core::storage::{Result, TableQuery, TableStore};

use super::parse_body;
use super::users::{find_user, user_not_found};

/// Handles an order route. The owning user is looked up first, whatever the
/// action.
pub(super) async fn handle(
    store: &dyn TableStore,
    username: &str,
    action: OrderRoute,
    request: &ApiRequest,
) -> Result<ApiResponse> {
    let Some(owner) = find_user(store, username).await? else {
        return Ok(user_not_found(username));
    };

    match action {
        OrderRoute::List => list_orders(store, &user_orders_query(username)).await,
        OrderRoute::ListByStatus { status } => {
            list_orders(store, &orders_by_status_query(username, &status)).await
        }
        OrderRoute::Create => create_order(store, &owner, request).await,
        OrderRoute::Get { id } => get_order(store, username, &id).await,
        OrderRoute::Update { id } => update_order(store, &owner, &id, request).await,
        OrderRoute::Delete { id } => delete_order(store, username, &id).await,
    }
}

async fn find_order(store: &dyn TableStore, username: &str, id: &str) -> Result<Option<Order>> {
    store
        .get_item(&order_key(username, id))
        .await?
        .map(|item| item_to_order(&item))
        .transpose()
}

fn order_not_found(id: &str) -> ApiResponse {
    ApiResponse::not_found(format!("Order with id {id} not found"))
}

async fn list_orders(store: &dyn TableStore, query: &TableQuery) -> Result<ApiResponse> {
    let orders = store
        .query(query)
        .await?
        .iter()
        .map(item_to_order)
        .collect::<Result<Vec<_>>>()?;

    Ok(ApiResponse::ok(&orders))
}

async fn create_order(
    store: &dyn TableStore,
    owner: &UserProfile,
    request: &ApiRequest,
) -> Result<ApiResponse> {
    let body: OrderRequest = match parse_body(request) {
        Ok(body) => body,
        Err(response) => return Ok(response),
    };
    let order = body.into_new_order(owner);

    store.put_item(order_to_item(&order)).await?;
    tracing::debug!(username = %order.username, order_id = %order.id, "Order created");

    Ok(ApiResponse::created(&order))
}

async fn get_order(store: &dyn TableStore, username: &str, id: &str) -> Result<ApiResponse> {
    Ok(match find_order(store, username, id).await? {
        Some(order) => ApiResponse::ok(&order),
        None => order_not_found(id),
    })
}

async fn update_order(
    store: &dyn TableStore,
    owner: &UserProfile,
    id: &str,
    request: &ApiRequest,
) -> Result<ApiResponse> {
    if find_order(store, &owner.username, id).await?.is_none() {
        return Ok(order_not_found(id));
    }

    let body: OrderRequest = match parse_body(request) {
        Ok(body) => body,
        Err(response) => return Ok(response),
    };
    // The snapshot is re-taken from the current profile.
    let order = body.into_order(owner, id);

    store
        .update_item(&order_key(&owner.username, id), order_attributes(&order))
        .await?;

    Ok(ApiResponse::ok(&order))
}

async fn delete_order(store: &dyn TableStore, username: &str, id: &str) -> Result<ApiResponse> {
    if find_order(store, username, id).await?.is_none() {
        return Ok(order_not_found(id));
    }

    store.delete_item(&order_key(username, id)).await?;

    Ok(ApiResponse::message(format!("Order with id {id} was deleted")))
}
