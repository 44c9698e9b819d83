//! Article endpoints.

#[cfg(test)]
#[path = "articles_test.rs"]
mod articles_test;

use super::client::ApiClient;
use super::types::{Article, ArticlePatch, NewArticle};
use crate::error::ApiError;

fn article_path(id: &str) -> String {
    format!("/articles/{id}/")
}

fn like_path(id: &str) -> String {
    format!("/articles/{id}/like/")
}

#[derive(Clone)]
pub struct ArticlesApi {
    client: ApiClient,
}

impl ArticlesApi {
    #[must_use]
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// # Errors
    ///
    /// Any pipeline error.
    pub async fn list(&self) -> Result<Vec<Article>, ApiError> {
        self.client.get("/articles/").await
    }

    /// # Errors
    ///
    /// Any pipeline error; `Status` 404 when the article does not exist.
    pub async fn get(&self, id: &str) -> Result<Article, ApiError> {
        self.client.get(&article_path(id)).await
    }

    /// # Errors
    ///
    /// Any pipeline error.
    pub async fn create(&self, article: &NewArticle) -> Result<Article, ApiError> {
        self.client.post("/articles/", article).await
    }

    /// # Errors
    ///
    /// Any pipeline error.
    pub async fn update(&self, id: &str, patch: &ArticlePatch) -> Result<Article, ApiError> {
        self.client.patch(&article_path(id), patch).await
    }

    /// # Errors
    ///
    /// Any pipeline error.
    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        self.client.delete(&article_path(id)).await
    }

    /// # Errors
    ///
    /// Any pipeline error.
    pub async fn like(&self, id: &str) -> Result<(), ApiError> {
        self.client.post_empty(&like_path(id)).await
    }

    /// # Errors
    ///
    /// Any pipeline error.
    pub async fn unlike(&self, id: &str) -> Result<(), ApiError> {
        self.client.delete(&like_path(id)).await
    }

    /// Articles written by the signed-in user.
    ///
    /// The backend has no dedicated endpoint, so this lists everything and
    /// keeps the cached user's articles. With no cached user the full list is
    /// returned.
    ///
    /// # Errors
    ///
    /// Any pipeline error.
    pub async fn mine(&self) -> Result<Vec<Article>, ApiError> {
        let articles = self.list().await?;
        Ok(match self.client.session().user() {
            Some(user) => articles.into_iter().filter(|a| a.is_authored_by(&user)).collect(),
            None => articles,
        })
    }
}
