//! Order API operations.

use shopdb_core::model::{Order, OrderRequest};

use super::ShopdbClient;
use crate::error::Result;

impl ShopdbClient {
    /// List the orders of a user.
    pub async fn list_orders(&self, username: &str) -> Result<Vec<Order>> {
        let response = self
            .client
            .get(self.url(&["orders", username]))
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// List the orders of a user that have the given status.
    pub async fn list_orders_by_status(&self, username: &str, status: &str) -> Result<Vec<Order>> {
        let response = self
            .client
            .get(self.url(&["orders", username, "status", status]))
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Place a new order for a user.
    pub async fn create_order(&self, username: &str, request: &OrderRequest) -> Result<Order> {
        let response = self
            .client
            .post(self.url(&["orders", username]))
            .json(request)
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Get one order.
    pub async fn get_order(&self, username: &str, id: &str) -> Result<Order> {
        let response = self
            .client
            .get(self.url(&["orders", username, id]))
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Replace the status and items of an order.
    pub async fn update_order(
        &self,
        username: &str,
        id: &str,
        request: &OrderRequest,
    ) -> Result<Order> {
        let response = self
            .client
            .put(self.url(&["orders", username, id]))
            .json(request)
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Delete an order. Returns the server's confirmation message.
    pub async fn delete_order(&self, username: &str, id: &str) -> Result<String> {
        let response = self
            .client
            .delete(self.url(&["orders", username, id]))
            .send()
            .await?;
        self.handle_response(response).await
    }
}
