//! Sort selector for the home feed.

use leptos::prelude::*;

use crate::state::feed::ArticleSort;

#[component]
pub fn ArticleFilters(sort: RwSignal<ArticleSort>) -> impl IntoView {
    view! {
        <label class="article-filters">
            <span class="article-filters__label">"Sort by:"</span>
            <select
                class="article-filters__select"
                prop:value=move || sort.get().value()
                on:change=move |ev| sort.set(ArticleSort::from_value(&event_target_value(&ev)))
            >
                {ArticleSort::ALL
                    .into_iter()
                    .map(|option| {
                        view! { <option value=option.value()>{option.label()}</option> }
                    })
                    .collect_view()}
            </select>
        </label>
    }
}
