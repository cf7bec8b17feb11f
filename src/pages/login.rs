//! Login page: email/password form against the auth endpoint.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::layout::BookGlyph;
use crate::net::api::Api;
use crate::net::types::Role;
use crate::state::session::Session;

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let api = expect_context::<Api>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let submitting = RwSignal::new(false);

    let submit = Callback::new(move |()| {
        if submitting.get_untracked() {
            return;
        }
        error.set(None);
        submitting.set(true);
        let api = api.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let result = session
                .login(&api, email.get_untracked().trim(), &password.get_untracked())
                .await;
            submitting.set(false);
            match result {
                Ok(user) => {
                    // Admins land on their panel, everyone else on the
                    // dashboard.
                    let target = if user.role == Role::Admin { "/admin" } else { "/dashboard" };
                    navigate(target, NavigateOptions::default());
                }
                Err(err) => error.set(Some(err.to_string())),
            }
        });
    });

    view! {
        <div class="auth-page">
            <div class="auth-page__inner">
                <div class="auth-page__header">
                    <div class="auth-page__brand">
                        <BookGlyph/>
                        <span class="auth-page__brand-name">"MyBookSpace"</span>
                    </div>
                    <h2>"Welcome Back"</h2>
                    <p>"Sign in to your account"</p>
                </div>

                <div class="auth-card">
                    {move || {
                        error
                            .get()
                            .map(|message| view! { <div class="auth-card__error">{message}</div> })
                    }}

                    <form
                        class="auth-card__form"
                        on:submit=move |ev| {
                            ev.prevent_default();
                            submit.run(());
                        }
                    >
                        <label class="auth-card__label">
                            "Email"
                            <input
                                class="auth-card__input"
                                type="email"
                                required
                                placeholder="you@example.com"
                                prop:value=move || email.get()
                                on:input=move |ev| email.set(event_target_value(&ev))
                            />
                        </label>

                        <label class="auth-card__label">
                            "Password"
                            <input
                                class="auth-card__input"
                                type="password"
                                required
                                placeholder="\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}"
                                prop:value=move || password.get()
                                on:input=move |ev| password.set(event_target_value(&ev))
                            />
                        </label>

                        <button class="btn btn--primary btn--block" type="submit" disabled=move || submitting.get()>
                            {move || if submitting.get() { "Signing in..." } else { "Sign In" }}
                        </button>
                    </form>

                    <p class="auth-card__switch">
                        "Don't have an account? "
                        <a href="/signup">"Sign up"</a>
                    </p>
                </div>
            </div>
        </div>
    }
}
