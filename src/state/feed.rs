//! Home feed ordering.
//!
//! DESIGN
//! ======
//! The list endpoint returns articles in backend order; the feed re-sorts the
//! fetched copy locally. Sorting is stable so ties keep backend order.

#[cfg(test)]
#[path = "feed_test.rs"]
mod feed_test;

use std::cmp::Reverse;

use crate::net::types::Article;
use crate::util::format::parse_timestamp;

/// Feed sort selected in the filter control.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ArticleSort {
    /// Newest first.
    #[default]
    Latest,
    /// Most likes first, then most views.
    Popular,
    /// Author username, A to Z.
    Author,
}

impl ArticleSort {
    pub const ALL: [Self; 3] = [Self::Latest, Self::Popular, Self::Author];

    /// Value used for the `<option>` element.
    #[must_use]
    pub fn value(self) -> &'static str {
        match self {
            Self::Latest => "date",
            Self::Popular => "popularity",
            Self::Author => "author",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Latest => "Latest",
            Self::Popular => "Most Popular",
            Self::Author => "Author",
        }
    }

    /// Parse an `<option>` value; unknown values fall back to `Latest`.
    #[must_use]
    pub fn from_value(value: &str) -> Self {
        Self::ALL.into_iter().find(|sort| sort.value() == value).unwrap_or_default()
    }
}

/// Reorder `articles` in place.
pub fn sort_articles(articles: &mut [Article], sort: ArticleSort) {
    match sort {
        ArticleSort::Latest => {
            // Unparseable timestamps sort last.
            articles.sort_by_key(|a| Reverse(parse_timestamp(&a.created_at)));
        }
        ArticleSort::Popular => {
            articles.sort_by_key(|a| Reverse((a.likes_count, a.views_count)));
        }
        ArticleSort::Author => {
            articles.sort_by_cached_key(|a| {
                a.author
                    .as_ref()
                    .map_or_else(|| "\u{10ffff}".to_owned(), |author| author.username().to_lowercase())
            });
        }
    }
}
