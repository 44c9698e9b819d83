//! Public profile page for `/profile/:username`.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::article_card::ArticleCard;
use crate::net::types::{Article, UserSummary};
use crate::services::use_services;
use crate::util::format::{initial, joined_label, load_failure};

/// `1 article`, `3 articles`.
fn article_count_label(count: usize) -> String {
    if count == 1 { "1 article".to_owned() } else { format!("{count} articles") }
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let services = use_services();
    let params = use_params_map();
    let profile = RwSignal::new(None::<(UserSummary, Vec<Article>)>);
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);

    Effect::new(move || {
        let Some(username) = params.with(|p| p.get("username")) else {
            return;
        };
        loading.set(true);
        error.set(None);
        let users = services.with_value(|s| s.users.clone());
        leptos::task::spawn_local(async move {
            let (user, articles) = futures::join!(users.profile(&username), users.articles(&username));
            match user.and_then(|user| articles.map(|articles| (user, articles))) {
                Ok(loaded) => {
                    profile.try_set(Some(loaded));
                }
                Err(e) => {
                    log::warn!("profile: loading {username} failed: {e}");
                    error.try_set(Some(load_failure(&e, "User not found", "Failed to load profile")));
                }
            }
            loading.try_set(false);
        });
    });

    move || {
        if loading.get() {
            return view! { <p class="profile-page__status">"Loading..."</p> }.into_any();
        }
        match (error.get(), profile.get()) {
            (None, Some((user, articles))) => view! { <ProfileView user=user articles=articles /> }.into_any(),
            (message, _) => view! { <p class="profile-page__error">{message.unwrap_or_default()}</p> }.into_any(),
        }
    }
}

#[component]
fn ProfileView(user: UserSummary, articles: Vec<Article>) -> impl IntoView {
    let avatar = match user.avatar_url.clone() {
        Some(src) => view! { <img class="avatar avatar--large" src=src alt=user.username.clone() /> }.into_any(),
        None => view! { <span class="avatar avatar--large">{initial(&user.username, 'U')}</span> }.into_any(),
    };
    let count = article_count_label(articles.len());

    view! {
        <div class="profile-page">
            <header class="profile-page__header">
                {avatar}
                <div class="profile-page__identity">
                    <h1>{user.display_name().to_owned()}</h1>
                    <p class="profile-page__handle">"@" {user.username.clone()}</p>
                    {user.bio.clone().map(|bio| view! { <p class="profile-page__bio">{bio}</p> })}
                    <div class="profile-page__meta">
                        <span>{joined_label(&user.created_at)}</span>
                        <span>{count}</span>
                    </div>
                </div>
            </header>
            <section class="profile-page__articles">
                <h2>"Published Articles"</h2>
                {if articles.is_empty() {
                    view! { <p class="profile-page__empty">"No articles published yet."</p> }.into_any()
                } else {
                    articles
                        .into_iter()
                        .map(|article| view! { <ArticleCard article=article /> })
                        .collect_view()
                        .into_any()
                }}
            </section>
        </div>
    }
}
