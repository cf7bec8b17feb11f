//! Controlled search input.

use leptos::prelude::*;

#[component]
pub fn SearchBar(value: RwSignal<String>, #[prop(optional)] placeholder: &'static str) -> impl IntoView {
    view! {
        <input
            class="search-bar"
            type="search"
            placeholder=placeholder
            prop:value=move || value.get()
            on:input=move |ev| value.set(event_target_value(&ev))
        />
    }
}
