//! User profile endpoints.

#[cfg(test)]
#[path = "users_test.rs"]
mod users_test;

use super::client::ApiClient;
use super::types::{Article, ProfileUpdate, UserSummary};
use crate::error::ApiError;

#[derive(Clone)]
pub struct UsersApi {
    client: ApiClient,
}

impl UsersApi {
    #[must_use]
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// # Errors
    ///
    /// Any pipeline error; `Status` 404 for an unknown username.
    pub async fn profile(&self, username: &str) -> Result<UserSummary, ApiError> {
        self.client.get(&format!("/users/{username}")).await
    }

    /// # Errors
    ///
    /// Any pipeline error.
    pub async fn articles(&self, username: &str) -> Result<Vec<Article>, ApiError> {
        self.client.get(&format!("/users/{username}/articles")).await
    }

    /// Update the signed-in user's profile and replace the cached user with
    /// the server's copy.
    ///
    /// # Errors
    ///
    /// Any pipeline error. The cache is only replaced on success.
    pub async fn update_profile(&self, update: &ProfileUpdate) -> Result<UserSummary, ApiError> {
        let user: UserSummary = self.client.put("/users/me", update).await?;
        self.client.session().replace_user(user.clone());
        Ok(user)
    }
}
