//! Comment section for an article page.
//!
//! The backend exposes no comment endpoints yet. The list still asks the
//! comments service so the section lights up once it does; until then it
//! shows a placeholder notice.

#[cfg(test)]
#[path = "comment_list_test.rs"]
mod comment_list_test;

use leptos::prelude::*;

use crate::error::ApiError;
use crate::net::types::Comment;
use crate::services::use_services;

const COMING_SOON: &str = "Comments are coming soon.";

/// Notice shown in place of the list when comments cannot be loaded.
fn comments_notice(err: &ApiError) -> &'static str {
    match err {
        ApiError::Unavailable(_) => COMING_SOON,
        _ => "Comments could not be loaded.",
    }
}

#[component]
pub fn CommentList(article_id: String) -> impl IntoView {
    let services = use_services();
    let comments = RwSignal::new(Vec::<Comment>::new());
    let notice = RwSignal::new(None::<&'static str>);

    let api = services.with_value(|s| s.comments);
    leptos::task::spawn_local(async move {
        match api.for_article(&article_id).await {
            Ok(found) => {
                comments.try_set(found);
            }
            Err(e) => {
                log::debug!("comments: {e}");
                notice.try_set(Some(comments_notice(&e)));
            }
        }
    });

    view! {
        <section class="comments">
            <h3 class="comments__title">"Comments"</h3>
            <Show
                when=move || notice.get().is_none()
                fallback=move || {
                    view! { <p class="comments__notice">{move || notice.get().unwrap_or_default()}</p> }
                }
            >
                <ul class="comments__list">
                    {move || {
                        comments
                            .get()
                            .into_iter()
                            .map(|comment| {
                                view! {
                                    <li class="comments__item">
                                        <span class="comments__author">{comment.author.username}</span>
                                        <p>{comment.content}</p>
                                    </li>
                                }
                            })
                            .collect_view()
                    }}
                </ul>
            </Show>
        </section>
    }
}
