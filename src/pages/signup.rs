//! Registration page.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::layout::BookGlyph;
use crate::net::api::Api;

const MIN_PASSWORD_LEN: usize = 6;

/// Client-side checks before the request goes out.
fn validate(password: &str, confirm: &str) -> Result<(), String> {
    if password != confirm {
        return Err("Passwords do not match".to_owned());
    }
    if password.len() < MIN_PASSWORD_LEN {
        return Err(format!("Password must be at least {MIN_PASSWORD_LEN} characters"));
    }
    Ok(())
}

#[component]
pub fn SignupPage() -> impl IntoView {
    let api = expect_context::<Api>();
    let navigate = use_navigate();

    let first_name = RwSignal::new(String::new());
    let last_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let submitting = RwSignal::new(false);

    let submit = Callback::new(move |()| {
        if submitting.get_untracked() {
            return;
        }
        error.set(None);
        if let Err(message) = validate(&password.get_untracked(), &confirm.get_untracked()) {
            error.set(Some(message));
            return;
        }
        submitting.set(true);
        let api = api.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let result = api
                .register(
                    email.get_untracked().trim(),
                    &password.get_untracked(),
                    first_name.get_untracked().trim(),
                    last_name.get_untracked().trim(),
                )
                .await;
            submitting.set(false);
            match result {
                Ok(()) => navigate("/login", NavigateOptions::default()),
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
                    <h2>"Create Account"</h2>
                    <p>"Join our library community"</p>
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
                        <div class="auth-card__grid">
                            <label class="auth-card__label">
                                "First Name"
                                <input
                                    class="auth-card__input"
                                    type="text"
                                    required
                                    placeholder="Jane"
                                    prop:value=move || first_name.get()
                                    on:input=move |ev| first_name.set(event_target_value(&ev))
                                />
                            </label>
                            <label class="auth-card__label">
                                "Last Name"
                                <input
                                    class="auth-card__input"
                                    type="text"
                                    required
                                    placeholder="Doe"
                                    prop:value=move || last_name.get()
                                    on:input=move |ev| last_name.set(event_target_value(&ev))
                                />
                            </label>
                        </div>

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
                                prop:value=move || password.get()
                                on:input=move |ev| password.set(event_target_value(&ev))
                            />
                            <span class="auth-card__hint">"At least 6 characters"</span>
                        </label>

                        <label class="auth-card__label">
                            "Confirm Password"
                            <input
                                class="auth-card__input"
                                type="password"
                                required
                                prop:value=move || confirm.get()
                                on:input=move |ev| confirm.set(event_target_value(&ev))
                            />
                        </label>

                        <button class="btn btn--primary btn--block" type="submit" disabled=move || submitting.get()>
                            {move || if submitting.get() { "Creating Account..." } else { "Sign Up" }}
                        </button>
                    </form>

                    <p class="auth-card__switch">
                        "Already have an account? "
                        <a href="/login">"Sign in"</a>
                    </p>
                </div>
            </div>
        </div>
    }
}
