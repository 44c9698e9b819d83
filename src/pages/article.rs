//! Single article view with likes and comments.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use crate::components::comment_list::CommentList;
use crate::components::like_button::LikeButton;
use crate::net::types::Article;
use crate::services::use_services;
use crate::util::format::{initial, load_failure, long_date};
use crate::util::markdown::render_markdown_html;

#[component]
pub fn ArticlePage() -> impl IntoView {
    let services = use_services();
    let params = use_params_map();
    let article = RwSignal::new(None::<Article>);
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);

    Effect::new(move || {
        let Some(id) = params.with(|p| p.get("id")) else {
            return;
        };
        loading.set(true);
        error.set(None);
        let api = services.with_value(|s| s.articles.clone());
        leptos::task::spawn_local(async move {
            match api.get(&id).await {
                Ok(found) => {
                    article.try_set(Some(found));
                }
                Err(e) => {
                    log::warn!("article: loading {id} failed: {e}");
                    let message = load_failure(&e, "Article not found", "Failed to load article. Please try again later.");
                    error.try_set(Some(message));
                }
            }
            loading.try_set(false);
        });
    });

    view! {
        {move || {
            if loading.get() {
                return view! { <p class="article-page__status">"Loading..."</p> }.into_any();
            }
            match (error.get(), article.get()) {
                (None, Some(article)) => view! { <ArticleView article=article /> }.into_any(),
                (message, _) => {
                    view! {
                        <div class="article-page article-page--error">
                            <p class="article-page__error">{message.unwrap_or_default()}</p>
                            <A href="/" attr:class="btn">
                                "Go Back Home"
                            </A>
                        </div>
                    }
                        .into_any()
                }
            }
        }}
    }
}

#[component]
fn ArticleView(article: Article) -> impl IntoView {
    let username = article.author.as_ref().map_or("unknown", |a| a.username()).to_owned();
    let display_name = article.author.as_ref().map_or("Unknown User", |a| a.display_name()).to_owned();
    let avatar = article.author.as_ref().and_then(|a| a.avatar_url()).map(str::to_owned);
    let author_initial = initial(&username, 'U');
    let body = render_markdown_html(&article.content);

    view! {
        <article class="article-page">
            <header class="article-page__header">
                <h1 class="article-page__title">{article.title.clone()}</h1>
                <A href=format!("/profile/{username}") attr:class="article-page__author">
                    {match avatar {
                        Some(src) => view! { <img class="avatar" src=src alt=display_name.clone() /> }.into_any(),
                        None => view! { <span class="avatar">{author_initial}</span> }.into_any(),
                    }}
                    <span class="article-page__author-name">{display_name.clone()}</span>
                    <span class="article-page__author-handle">"@" {username.clone()}</span>
                </A>
                <div class="article-page__meta">
                    <span>{long_date(&article.created_at)}</span>
                    <span>{article.views_count} " views"</span>
                    <span class="article-page__status">{article.publication().label()}</span>
                </div>
                <div class="article-page__actions">
                    <LikeButton article_id=article.id.clone() initial_likes=article.likes_count />
                </div>
            </header>
            <div class="article-page__body" inner_html=body></div>
            <CommentList article_id=article.id.clone() />
        </article>
    }
}
