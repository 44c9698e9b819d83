//! Dashboard listing the signed-in user's articles with edit and delete.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route. It loads the user's articles once
//! the guard allows rendering and removes deleted rows locally on success.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::protected_route::ProtectedRoute;
use crate::net::types::Article;
use crate::services::{ServicesHandle, use_services};
use crate::util::format::{short_date, truncate_chars};

const PREVIEW_CHARS: usize = 150;

/// Opening of the body shown under each row's title.
fn content_preview(content: &str) -> String {
    truncate_chars(content, PREVIEW_CHARS)
}

/// Whether the row for `id` is the one with a delete in flight.
fn is_row_deleting(deleting: Option<&str>, id: &str) -> bool {
    deleting == Some(id)
}

/// Drop the article with `id` from `articles`.
fn remove_article(articles: &mut Vec<Article>, id: &str) {
    articles.retain(|article| article.id != id);
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <ProtectedRoute>
            <DashboardContent />
        </ProtectedRoute>
    }
}

#[component]
fn DashboardContent() -> impl IntoView {
    let services = use_services();
    let articles = RwSignal::new(Vec::<Article>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);
    let confirm_delete = RwSignal::new(None::<String>);
    let deleting = RwSignal::new(None::<String>);

    let api = services.with_value(|s| s.articles.clone());
    leptos::task::spawn_local(async move {
        match api.mine().await {
            Ok(list) => {
                articles.try_set(list);
            }
            Err(e) => {
                log::warn!("dashboard: loading articles failed: {e}");
                error.try_set(Some("Failed to load your articles".to_owned()));
            }
        }
        loading.try_set(false);
    });

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <h1>"My Dashboard"</h1>
                <A href="/editor" attr:class="btn">
                    "New Article"
                </A>
            </header>
            <Show when=move || error.get().is_some()>
                <p class="dashboard-page__error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <Show when=move || confirm_delete.get().is_some()>
                <div class="dialog" role="alertdialog">
                    <h2>"Delete Article"</h2>
                    <p>"Are you sure you want to delete this article? This action cannot be undone."</p>
                    <button class="btn btn--ghost" on:click=move |_| confirm_delete.set(None)>
                        "Cancel"
                    </button>
                    <button
                        class="btn btn--danger"
                        on:click=move |_| {
                            if let Some(id) = confirm_delete.get_untracked() {
                                confirm_delete.set(None);
                                delete_article(services, articles, deleting, error, id);
                            }
                        }
                    >
                        "Delete"
                    </button>
                </div>
            </Show>
            {move || {
                if loading.get() {
                    return view! { <p class="dashboard-page__status">"Loading..."</p> }.into_any();
                }
                let list = articles.get();
                if list.is_empty() {
                    return view! {
                        <div class="dashboard-page__empty">
                            <p>"You haven't written any articles yet."</p>
                            <A href="/editor" attr:class="btn">
                                "Write Your First Article"
                            </A>
                        </div>
                    }
                        .into_any();
                }
                view! {
                    <div class="dashboard-page__rows">
                        {list
                            .into_iter()
                            .map(|article| view! { <DashboardRow article=article confirm_delete=confirm_delete deleting=deleting /> })
                            .collect_view()}
                    </div>
                }
                    .into_any()
            }}
        </div>
    }
}

#[component]
fn DashboardRow(
    article: Article,
    confirm_delete: RwSignal<Option<String>>,
    deleting: RwSignal<Option<String>>,
) -> impl IntoView {
    let id = article.id.clone();
    let row_id = id.clone();
    let is_deleting = Memo::new(move |_| is_row_deleting(deleting.get().as_deref(), &row_id));
    let published = article.published();

    view! {
        <div class="dashboard-row">
            <div class="dashboard-row__main">
                <h3 class="dashboard-row__title">{article.title.clone()}</h3>
                <span class="badge" class:badge--published=published>
                    {article.publication().label()}
                </span>
                <p class="dashboard-row__preview">{content_preview(&article.content)}</p>
                <span class="dashboard-row__date">{short_date(&article.created_at)}</span>
            </div>
            <div class="dashboard-row__actions">
                <A href=format!("/editor?id={id}") attr:class="btn btn--ghost" attr:title="Edit">
                    "Edit"
                </A>
                <button
                    class="btn btn--ghost"
                    title="Delete"
                    disabled=move || is_deleting.get()
                    on:click=move |_| confirm_delete.set(Some(id.clone()))
                >
                    {move || if is_deleting.get() { "Deleting..." } else { "Delete" }}
                </button>
            </div>
        </div>
    }
}

fn delete_article(
    services: ServicesHandle,
    articles: RwSignal<Vec<Article>>,
    deleting: RwSignal<Option<String>>,
    error: RwSignal<Option<String>>,
    id: String,
) {
    deleting.set(Some(id.clone()));
    let api = services.with_value(|s| s.articles.clone());
    leptos::task::spawn_local(async move {
        match api.delete(&id).await {
            Ok(()) => {
                articles.try_update(|list| remove_article(list, &id));
            }
            Err(e) => {
                log::warn!("dashboard: deleting {id} failed: {e}");
                error.try_set(Some("Failed to delete article".to_owned()));
            }
        }
        deleting.try_set(None);
    });
}
