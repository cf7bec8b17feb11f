//! Profile page: identity card plus the member's borrowing summary.

use leptos::prelude::*;

use crate::components::layout::Layout;
use crate::components::stats_card::{StatTone, StatsCard};
use crate::net::api::Api;
use crate::state::loans;
use crate::state::session::Session;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let session = expect_context::<Session>();
    let api = expect_context::<Api>();

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

    let initials = move || {
        session
            .current_user()
            .map_or_else(|| "U".to_owned(), |user| user.initials())
    };
    let display_name = move || {
        session
            .current_user()
            .map_or_else(|| "User".to_owned(), |user| user.display_name())
    };
    let email = move || {
        session
            .current_user()
            .map_or_else(String::new, |user| user.email)
    };

    view! {
        <Layout>
            <div class="page profile">
                <div class="profile__identity">
                    <div class="profile__avatar">{initials}</div>
                    <div>
                        <h2 class="profile__name">{display_name}</h2>
                        <p class="profile__email">{email}</p>
                        <Show when=move || session.is_admin()>
                            <span class="badge badge--accent">"Admin"</span>
                        </Show>
                    </div>
                </div>

                <Suspense fallback=move || view! { <p class="page__loading">"Loading profile..."</p> }>
                    <div class="stats-row">
                        {move || {
                            my_loans
                                .get()
                                .map(|all| {
                                    let active = loans::active(&all).len();
                                    let fines = loans::total_fines(&all);
                                    view! {
                                        <StatsCard
                                            label="Active Loans"
                                            value=active.to_string()
                                            subtitle="Currently borrowed".to_owned()
                                        />
                                        <StatsCard
                                            label="Total Fines"
                                            value=format!("${fines:.2}")
                                            subtitle="Accrued across all loans".to_owned()
                                            tone=StatTone::Danger
                                        />
                                        <StatsCard
                                            label="Loans On Record"
                                            value=all.len().to_string()
                                            subtitle="Including returned books".to_owned()
                                        />
                                    }
                                })
                        }}
                    </div>
                </Suspense>
            </div>
        </Layout>
    }
}
