//! Feed card for a single article.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::net::types::Article;
use crate::util::format::{initial, time_ago};

/// A clickable summary of an article.
#[component]
pub fn ArticleCard(article: Article) -> impl IntoView {
    let href = format!("/article/{}", article.id);
    let author = article.author.as_ref().map_or("Anonymous", |a| a.display_name()).to_owned();
    let author_initial = initial(&author, 'A');
    let published = time_ago(&article.created_at);
    let title = if article.title.trim().is_empty() { "Untitled".to_owned() } else { article.title.clone() };
    let excerpt = article
        .excerpt
        .clone()
        .filter(|text| !text.trim().is_empty())
        .unwrap_or_else(|| "No excerpt available".to_owned());

    view! {
        <A href=href attr:class="article-card">
            <div class="article-card__author">
                <span class="avatar avatar--small">{author_initial}</span>
                <span class="article-card__author-name">{author}</span>
                <span class="article-card__date">{published}</span>
            </div>
            <h2 class="article-card__title">{title}</h2>
            <p class="article-card__excerpt">{excerpt}</p>
            <div class="article-card__stats">
                <span title="Likes">"♥ " {article.likes_count}</span>
                <span title="Views">"👁 " {article.views_count}</span>
            </div>
        </A>
    }
}
