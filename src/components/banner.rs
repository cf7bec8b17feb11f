//! Dismissable inline message banner for per-call errors and confirmations.

use leptos::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BannerKind {
    #[default]
    Error,
    Success,
}

/// Shows while `message` holds text; the dismiss button clears it.
#[component]
pub fn Banner(message: RwSignal<Option<String>>, #[prop(optional)] kind: BannerKind) -> impl IntoView {
    let class = match kind {
        BannerKind::Error => "banner banner--error",
        BannerKind::Success => "banner banner--success",
    };

    view! {
        <Show when=move || message.get().is_some()>
            <div class=class>
                <span class="banner__text">{move || message.get().unwrap_or_default()}</span>
                <button class="banner__dismiss" on:click=move |_| message.set(None)>
                    "\u{d7}"
                </button>
            </div>
        </Show>
    }
}
