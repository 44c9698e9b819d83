//! Like toggle for an article.
//!
//! DESIGN
//! ======
//! The count only moves after the backend confirms the like or unlike. A
//! failure leaves the count alone and shows an inline error. Signed-out users
//! who click are sent to login by the request pipeline's 401 handling.

use leptos::prelude::*;

use crate::services::use_services;

#[component]
pub fn LikeButton(
    article_id: String,
    initial_likes: u64,
    #[prop(optional)] initially_liked: bool,
) -> impl IntoView {
    let services = use_services();
    let likes = RwSignal::new(initial_likes);
    let liked = RwSignal::new(initially_liked);
    let busy = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let on_click = move |_| {
        if busy.get_untracked() {
            return;
        }
        busy.set(true);
        error.set(None);
        let articles = services.with_value(|s| s.articles.clone());
        let id = article_id.clone();
        let unlike = liked.get_untracked();
        leptos::task::spawn_local(async move {
            let result = if unlike { articles.unlike(&id).await } else { articles.like(&id).await };
            match result {
                Ok(()) => {
                    likes.try_update(|count| *count = if unlike { count.saturating_sub(1) } else { *count + 1 });
                    liked.try_set(!unlike);
                }
                Err(e) => {
                    log::warn!("like: article {id} failed: {e}");
                    error.try_set(Some("Failed to update like. Please try again.".to_owned()));
                }
            }
            busy.try_set(false);
        });
    };

    view! {
        <span class="like-button">
            <button
                class="btn like-button__toggle"
                class:like-button__toggle--liked=move || liked.get()
                disabled=move || busy.get()
                on:click=on_click
            >
                {move || if liked.get() { "♥ " } else { "♡ " }}
                {move || likes.get()}
            </button>
            <Show when=move || error.get().is_some()>
                <span class="like-button__error">{move || error.get().unwrap_or_default()}</span>
            </Show>
        </span>
    }
}
