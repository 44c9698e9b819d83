//! Comment endpoints.
//!
//! The backend has no comment routes yet. Every call fails immediately with
//! `ApiError::Unavailable` instead of issuing a request that cannot succeed.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "comments_test.rs"]
mod comments_test;

use super::types::{Comment, NewComment};
use crate::error::ApiError;

const FEATURE: &str = "comments";

#[derive(Clone, Copy, Debug, Default)]
pub struct CommentsApi;

impl CommentsApi {
    /// # Errors
    ///
    /// Always `Unavailable`.
    pub async fn for_article(&self, article_id: &str) -> Result<Vec<Comment>, ApiError> {
        let _ = article_id;
        Err(ApiError::Unavailable(FEATURE))
    }

    /// # Errors
    ///
    /// Always `Unavailable`.
    pub async fn create(&self, article_id: &str, comment: &NewComment) -> Result<Comment, ApiError> {
        let _ = (article_id, comment);
        Err(ApiError::Unavailable(FEATURE))
    }

    /// # Errors
    ///
    /// Always `Unavailable`.
    pub async fn delete(&self, article_id: &str, comment_id: &str) -> Result<(), ApiError> {
        let _ = (article_id, comment_id);
        Err(ApiError::Unavailable(FEATURE))
    }
}
