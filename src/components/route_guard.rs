//! Route guards restricting navigation based on session state.
//!
//! Guarded shells have three states: while the session restores we show a
//! placeholder, an authorized session renders the wrapped page, and anything
//! else redirects (to `/login` when anonymous, `/dashboard` when
//! authenticated but not admin). The decision itself lives in
//! `state::session` so it is unit-tested without a DOM.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::session::{GuardOutcome, Session};

/// Wraps pages that require an authenticated session; `admin_only` also
/// requires the admin role.
#[component]
pub fn Protected(#[prop(optional)] admin_only: bool, children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<Session>();
    let navigate = use_navigate();

    Effect::new(move || match session.guard(admin_only) {
        GuardOutcome::RedirectLogin => navigate("/login", NavigateOptions::default()),
        GuardOutcome::RedirectDashboard => navigate("/dashboard", NavigateOptions::default()),
        GuardOutcome::Loading | GuardOutcome::Allow => {}
    });

    view! {
        <Show
            when=move || session.guard(admin_only) == GuardOutcome::Allow
            fallback=|| view! { <div class="page-loading"><p>"Loading..."</p></div> }
        >
            {children()}
        </Show>
    }
}

/// Wraps the landing and auth pages; an already-authenticated user is sent
/// to the dashboard instead.
#[component]
pub fn PublicOnly(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<Session>();
    let navigate = use_navigate();

    Effect::new(move || {
        if session.public_guard() == GuardOutcome::RedirectDashboard {
            navigate("/dashboard", NavigateOptions::default());
        }
    });

    view! {
        <Show
            when=move || session.public_guard() == GuardOutcome::Allow
            fallback=|| view! { <div class="page-loading"><p>"Loading..."</p></div> }
        >
            {children()}
        </Show>
    }
}
