//! Wire DTOs for the blog REST backend.
//!
//! DESIGN
//! ======
//! The backend is loose about shapes: ids arrive as strings or integers, an
//! article's author is either a bare username or a nested user object, and
//! publication state shows up as `status` or the older `is_published` flag.
//! The deserializers here absorb that so the rest of the client sees one shape.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// The signed-in user as cached by the session, and any user shown in a profile.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserSummary {
    /// Backend identifier, normalized to a string.
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    /// ISO 8601 timestamp of account creation.
    #[serde(default)]
    pub created_at: String,
}

impl UserSummary {
    /// Name to show in headers: full name when set, otherwise the username.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.full_name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(&self.username)
    }
}

/// Author reference embedded in an article.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AuthorRef {
    /// Full author object.
    User(ArticleAuthor),
    /// Bare username string.
    Name(String),
}

/// Author fields the article endpoints embed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ArticleAuthor {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

impl AuthorRef {
    /// Author id when the backend sent a full object.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        match self {
            Self::User(author) => Some(&author.id),
            Self::Name(_) => None,
        }
    }

    #[must_use]
    pub fn username(&self) -> &str {
        match self {
            Self::User(author) => &author.username,
            Self::Name(name) => name,
        }
    }

    #[must_use]
    pub fn display_name(&self) -> &str {
        match self {
            Self::User(author) => author
                .full_name
                .as_deref()
                .filter(|name| !name.trim().is_empty())
                .unwrap_or(&author.username),
            Self::Name(name) => name,
        }
    }

    #[must_use]
    pub fn avatar_url(&self) -> Option<&str> {
        match self {
            Self::User(author) => author.avatar_url.as_deref(),
            Self::Name(_) => None,
        }
    }
}

/// Publication state of an article.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArticleStatus {
    #[default]
    Draft,
    Published,
}

impl ArticleStatus {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Draft => "Draft",
            Self::Published => "Published",
        }
    }
}

/// An article as returned by the backend. The client only holds copies.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Article {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default)]
    pub author: Option<AuthorRef>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ArticleStatus>,
    /// Older backends report publication as a flag instead of `status`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_published: Option<bool>,
    #[serde(default, deserialize_with = "deserialize_count")]
    pub likes_count: u64,
    #[serde(default, deserialize_with = "deserialize_count")]
    pub views_count: u64,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

impl Article {
    /// Publication state, preferring `status` over the legacy flag.
    #[must_use]
    pub fn publication(&self) -> ArticleStatus {
        match (self.status, self.is_published) {
            (Some(status), _) => status,
            (None, Some(true)) => ArticleStatus::Published,
            (None, _) => ArticleStatus::Draft,
        }
    }

    #[must_use]
    pub fn published(&self) -> bool {
        self.publication() == ArticleStatus::Published
    }

    /// Whether `user` wrote this article, matching by id or by bare username.
    #[must_use]
    pub fn is_authored_by(&self, user: &UserSummary) -> bool {
        match &self.author {
            Some(AuthorRef::User(author)) => author.id == user.id,
            Some(AuthorRef::Name(name)) => *name == user.username,
            None => false,
        }
    }
}

/// Login form payload for `POST /auth/login/`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct AuthCredentials {
    pub email: String,
    pub password: String,
}

/// Registration payload for `POST /auth/register/`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct RegisterRequest {
    pub email: String,
    pub username: String,
    pub password: String,
}

/// Token pair returned by login and register.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct AuthResponse {
    pub access: String,
    pub refresh: String,
    #[serde(default)]
    pub user: Option<UserSummary>,
}

#[derive(Debug, Serialize)]
pub(crate) struct RefreshRequest<'a> {
    pub refresh: &'a str,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RefreshResponse {
    pub access: String,
}

/// Body for creating an article.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NewArticle {
    pub title: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,
    pub status: ArticleStatus,
}

/// Partial update for `PATCH /articles/{id}/`. Unset fields are left alone.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ArticlePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ArticleStatus>,
}

impl From<NewArticle> for ArticlePatch {
    fn from(article: NewArticle) -> Self {
        Self {
            title: Some(article.title),
            content: Some(article.content),
            excerpt: article.excerpt,
            status: Some(article.status),
        }
    }
}

/// Partial update for `PUT /users/me`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

/// A comment on an article. The backend has no comment endpoints yet.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub content: String,
    pub author: ArticleAuthor,
    #[serde(deserialize_with = "deserialize_id")]
    pub article_id: String,
    pub created_at: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NewComment {
    pub content: String,
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(id) => Ok(id),
        serde_json::Value::Number(number) if number.is_i64() || number.is_u64() => Ok(number.to_string()),
        other => Err(D::Error::custom(format!("expected string or integer id, got {other}"))),
    }
}

fn deserialize_count<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Null => Ok(0),
        serde_json::Value::Number(number) => {
            if let Some(int) = number.as_u64() {
                return Ok(int);
            }
            #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            if let Some(float) = number.as_f64()
                && float.is_finite()
                && float.fract() == 0.0
                && float >= 0.0
                && float <= u64::MAX as f64
            {
                return Ok(float as u64);
            }
            Err(D::Error::custom("expected non-negative integer count"))
        }
        _ => Err(D::Error::custom("expected number")),
    }
}
