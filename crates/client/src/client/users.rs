//! User API operations.

use shopdb_core::model::{CreateUserRequest, UpdateUserRequest, UserProfile};

use super::ShopdbClient;
use crate::error::Result;

impl ShopdbClient {
    /// List all users.
    pub async fn list_users(&self) -> Result<Vec<UserProfile>> {
        let response = self.client.get(self.url(&["users"])).send().await?;
        self.handle_response(response).await
    }

    /// Create a new user.
    pub async fn create_user(&self, user: &CreateUserRequest) -> Result<UserProfile> {
        let response = self
            .client
            .post(self.url(&["users"]))
            .json(user)
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Get user by username.
    pub async fn get_user(&self, username: &str) -> Result<UserProfile> {
        let response = self
            .client
            .get(self.url(&["users", username]))
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Replace the details of a user.
    pub async fn update_user(
        &self,
        username: &str,
        request: &UpdateUserRequest,
    ) -> Result<UserProfile> {
        let response = self
            .client
            .put(self.url(&["users", username]))
            .json(request)
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Delete user by username. Returns the server's confirmation message.
    pub async fn delete_user(&self, username: &str) -> Result<String> {
        let response = self
            .client
            .delete(self.url(&["users", username]))
            .send()
            .await?;
        self.handle_response(response).await
    }
}
