//! Article editor for new drafts and edits (`/editor?id=...`).
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected route. With an `id` query parameter the article is loaded and
//! saved with PATCH; without one, the first save creates it. Saving a draft
//! stays in the editor, publishing navigates to the article.

#[cfg(test)]
#[path = "editor_test.rs"]
mod editor_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::components::protected_route::ProtectedRoute;
use crate::net::types::{ArticlePatch, ArticleStatus, NewArticle};
use crate::services::use_services;
use crate::util::format::excerpt_or_title;
use crate::util::markdown::render_markdown_html;

/// Which editor button was pressed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum EditorAction {
    SaveDraft,
    Publish,
}

/// Build the request body, enforcing that drafts have a title and published
/// articles have a title and content.
fn build_article(title: &str, excerpt: &str, content: &str, action: EditorAction) -> Result<NewArticle, &'static str> {
    if title.trim().is_empty() {
        return Err(match action {
            EditorAction::SaveDraft => "Please enter a title",
            EditorAction::Publish => "Title and content required",
        });
    }
    if action == EditorAction::Publish && content.trim().is_empty() {
        return Err("Title and content required");
    }
    Ok(NewArticle {
        title: title.to_owned(),
        content: content.to_owned(),
        excerpt: Some(excerpt_or_title(excerpt, title)),
        status: match action {
            EditorAction::SaveDraft => ArticleStatus::Draft,
            EditorAction::Publish => ArticleStatus::Published,
        },
    })
}

#[component]
pub fn EditorPage() -> impl IntoView {
    view! {
        <ProtectedRoute>
            <EditorContent />
        </ProtectedRoute>
    }
}

#[component]
fn EditorContent() -> impl IntoView {
    let services = use_services();
    let navigate = use_navigate();
    let query = use_query_map();
    let article_id = Memo::new(move |_| query.with(|q| q.get("id")).filter(|id| !id.is_empty()));

    let title = RwSignal::new(String::new());
    let excerpt = RwSignal::new(String::new());
    let content = RwSignal::new(String::new());
    let loading = RwSignal::new(false);
    let busy = RwSignal::new(false);
    let message = RwSignal::new(None::<String>);
    let preview = RwSignal::new(false);

    let navigate_fresh = navigate.clone();
    Effect::new(move || {
        let Some(id) = article_id.get() else {
            return;
        };
        loading.set(true);
        let api = services.with_value(|s| s.articles.clone());
        let navigate = navigate_fresh.clone();
        leptos::task::spawn_local(async move {
            match api.get(&id).await {
                Ok(article) => {
                    title.try_set(article.title);
                    excerpt.try_set(article.excerpt.unwrap_or_default());
                    content.try_set(article.content);
                }
                Err(e) => {
                    log::warn!("editor: loading {id} failed: {e}");
                    message.try_set(Some("Failed to load article".to_owned()));
                    navigate("/editor", NavigateOptions::default());
                }
            }
            loading.try_set(false);
        });
    });

    let save = move |action: EditorAction| {
        if busy.get_untracked() {
            return;
        }
        let article = match build_article(&title.get_untracked(), &excerpt.get_untracked(), &content.get_untracked(), action) {
            Ok(article) => article,
            Err(text) => {
                message.set(Some(text.to_owned()));
                return;
            }
        };
        busy.set(true);
        message.set(None);

        let api = services.with_value(|s| s.articles.clone());
        let existing = article_id.get_untracked();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let saved = match &existing {
                Some(id) => api.update(id, &ArticlePatch::from(article)).await,
                None => api.create(&article).await,
            };
            match saved {
                Ok(saved) if action == EditorAction::Publish => {
                    navigate(&format!("/article/{}", saved.id), NavigateOptions::default());
                }
                Ok(saved) => {
                    message.try_set(Some("Draft saved".to_owned()));
                    if existing.is_none() {
                        navigate(&format!("/editor?id={}", saved.id), NavigateOptions::default());
                    }
                }
                Err(e) => {
                    log::warn!("editor: save failed: {e}");
                    let text = match action {
                        EditorAction::SaveDraft => "Failed to save draft",
                        EditorAction::Publish => "Failed to publish",
                    };
                    message.try_set(Some(text.to_owned()));
                }
            }
            busy.try_set(false);
        });
    };
    let save_draft = save.clone();

    view! {
        <div class="editor-page">
            <header class="editor-page__header">
                <h1>"Write your story"</h1>
                <button
                    class="btn btn--ghost"
                    disabled=move || busy.get() || loading.get()
                    on:click=move |_| save_draft(EditorAction::SaveDraft)
                >
                    "Save"
                </button>
                <button
                    class="btn"
                    disabled=move || busy.get() || loading.get()
                    on:click=move |_| save(EditorAction::Publish)
                >
                    "Publish"
                </button>
            </header>
            <Show when=move || message.get().is_some()>
                <p class="editor-page__message">{move || message.get().unwrap_or_default()}</p>
            </Show>
            <input
                class="editor-page__title"
                type="text"
                placeholder="Article title..."
                prop:value=move || title.get()
                on:input=move |ev| title.set(event_target_value(&ev))
            />
            <textarea
                class="editor-page__excerpt"
                placeholder="Excerpt..."
                prop:value=move || excerpt.get()
                on:input=move |ev| excerpt.set(event_target_value(&ev))
            ></textarea>
            <textarea
                class="editor-page__content"
                placeholder="Write your story..."
                prop:value=move || content.get()
                on:input=move |ev| content.set(event_target_value(&ev))
            ></textarea>
            <button class="btn btn--ghost" on:click=move |_| preview.update(|open| *open = !*open)>
                {move || if preview.get() { "Close preview" } else { "Preview" }}
            </button>
            <Show when=move || preview.get()>
                <div class="editor-page__preview">
                    <h2>
                        {move || {
                            let text = title.get();
                            if text.trim().is_empty() { "Untitled".to_owned() } else { text }
                        }}
                    </h2>
                    <p class="editor-page__preview-excerpt">{move || excerpt.get()}</p>
                    <div inner_html=move || render_markdown_html(&content.get())></div>
                </div>
            </Show>
        </div>
    }
}
