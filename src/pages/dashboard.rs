//! Member dashboard: loan counters and a few catalog picks.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::book_card::BookCard;
use crate::components::layout::Layout;
use crate::components::stats_card::{StatTone, StatsCard};
use crate::net::api::Api;
use crate::state::loans;
use crate::state::session::Session;
use crate::util::clock;

const RECOMMENDED_COUNT: usize = 3;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let api = expect_context::<Api>();
    let navigate = use_navigate();

    let books = LocalResource::new({
        let api = api.clone();
        move || {
            let api = api.clone();
            async move {
                api.list_books().await.unwrap_or_else(|err| {
                    log::error!("could not load catalog: {err}");
                    Vec::new()
                })
            }
        }
    });
    let my_loans = LocalResource::new({
        let api = api.clone();
        move || {
            let api = api.clone();
            async move {
                api.my_loans().await.unwrap_or_else(|err| {
                    log::error!("could not load loans: {err}");
                    Vec::new()
                })
            }
        }
    });

    let greeting = move || {
        session
            .current_user()
            .map_or_else(|| "User".to_owned(), |user| user.greeting_name())
    };

    let on_open = Callback::new(move |id: i64| {
        navigate(&format!("/book/{id}"), NavigateOptions::default());
    });

    view! {
        <Layout>
            <div class="page dashboard">
                <div class="page__intro">
                    <h2>{move || format!("Welcome Back, {}", greeting())}</h2>
                    <p>"Discover your next great read"</p>
                </div>

                <Suspense fallback=move || view! { <p class="page__loading">"Loading..."</p> }>
                    <div class="stats-row">
                        {move || {
                            my_loans
                                .get()
                                .map(|loans| {
                                    let summary = loans::summarize(&loans, clock::today_days());
                                    view! {
                                        <StatsCard
                                            label="Active Loans"
                                            value=summary.active.to_string()
                                            subtitle="Books currently borrowed".to_owned()
                                        />
                                        <StatsCard
                                            label="Due This Week"
                                            value=summary.due_this_week.to_string()
                                            subtitle="Books to return soon".to_owned()
                                            tone=StatTone::Warn
                                        />
                                        <StatsCard
                                            label="Overdue"
                                            value=summary.overdue.to_string()
                                            subtitle="Requires attention".to_owned()
                                            tone=StatTone::Danger
                                        />
                                    }
                                })
                        }}
                    </div>

                    <div class="dashboard__recommended">
                        <div class="dashboard__recommended-head">
                            <h3>"Recommended for You"</h3>
                            <a class="dashboard__view-all" href="/browse">
                                "View All \u{2192}"
                            </a>
                        </div>
                        <div class="card-grid">
                            {move || {
                                books
                                    .get()
                                    .map(|books| {
                                        if books.is_empty() {
                                            view! {
                                                <p class="page__empty">"No books available yet"</p>
                                            }
                                                .into_any()
                                        } else {
                                            books
                                                .into_iter()
                                                .take(RECOMMENDED_COUNT)
                                                .map(|book| {
                                                    view! { <BookCard book=book on_open=on_open/> }
                                                })
                                                .collect_view()
                                                .into_any()
                                        }
                                    })
                            }}
                        </div>
                    </div>
                </Suspense>
            </div>
        </Layout>
    }
}
