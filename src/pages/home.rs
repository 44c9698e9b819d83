//! Home feed listing every article with a sort control.

use leptos::prelude::*;

use crate::components::article_card::ArticleCard;
use crate::components::article_filters::ArticleFilters;
use crate::net::types::Article;
use crate::services::use_services;
use crate::state::feed::{ArticleSort, sort_articles};

#[component]
pub fn HomePage() -> impl IntoView {
    let services = use_services();
    let articles = RwSignal::new(Vec::<Article>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);
    let sort = RwSignal::new(ArticleSort::default());

    let api = services.with_value(|s| s.articles.clone());
    leptos::task::spawn_local(async move {
        match api.list().await {
            Ok(list) => {
                articles.try_set(list);
            }
            Err(e) => {
                log::warn!("home: loading articles failed: {e}");
                error.try_set(Some("Failed to load articles. Please try again later.".to_owned()));
            }
        }
        loading.try_set(false);
    });

    let sorted = Memo::new(move |_| {
        let mut list = articles.get();
        sort_articles(&mut list, sort.get());
        list
    });

    view! {
        <section class="feed">
            <header class="feed__header">
                <h2>"Recent Articles"</h2>
                <ArticleFilters sort=sort />
            </header>
            {move || {
                if loading.get() {
                    return view! { <p class="feed__status">"Loading articles..."</p> }.into_any();
                }
                if let Some(message) = error.get() {
                    return view! { <p class="feed__error">{message}</p> }.into_any();
                }
                let list = sorted.get();
                if list.is_empty() {
                    return view! {
                        <p class="feed__status">"No articles found. Be the first to write one!"</p>
                    }
                        .into_any();
                }
                view! {
                    <div class="feed__cards">
                        {list.into_iter().map(|article| view! { <ArticleCard article=article /> }).collect_view()}
                    </div>
                }
                    .into_any()
            }}
        </section>
    }
}
