//! The member's active loans: renew and return.

use leptos::prelude::*;

use crate::components::banner::{Banner, BannerKind};
use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::layout::Layout;
use crate::components::loan_card::LoanCard;
use crate::net::api::Api;
use crate::state::loans;

#[component]
pub fn MyLoansPage() -> impl IntoView {
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

    let error = RwSignal::new(None::<String>);
    let notice = RwSignal::new(None::<String>);
    // Loan awaiting return confirmation.
    let returning = RwSignal::new(None::<i64>);

    let on_renew = {
        let api = api.clone();
        Callback::new(move |id: i64| {
            error.set(None);
            notice.set(None);
            let api = api.clone();
            leptos::task::spawn_local(async move {
                match api.renew_loan(id).await {
                    Ok(_) => {
                        notice.set(Some("Loan renewed successfully!".to_owned()));
                        my_loans.refetch();
                    }
                    Err(err) => error.set(Some(err.to_string())),
                }
            });
        })
    };

    let on_return_requested = Callback::new(move |id: i64| {
        returning.set(Some(id));
    });

    let on_return_confirmed = {
        let api = api.clone();
        Callback::new(move |()| {
            let Some(id) = returning.get_untracked() else { return };
            returning.set(None);
            error.set(None);
            notice.set(None);
            let api = api.clone();
            leptos::task::spawn_local(async move {
                match api.return_book(id).await {
                    Ok(final_fine) => {
                        if final_fine > 0.0 {
                            notice.set(Some(format!(
                                "Book returned. Final fine: ${final_fine:.2}"
                            )));
                        } else {
                            notice.set(Some("Book returned successfully!".to_owned()));
                        }
                        my_loans.refetch();
                    }
                    Err(err) => error.set(Some(err.to_string())),
                }
            });
        })
    };

    view! {
        <Layout>
            <div class="page my-loans">
                <div class="page__intro">
                    <h2>"My Loans"</h2>
                    <p>"Manage your borrowed books"</p>
                </div>

                <Banner message=error/>
                <Banner message=notice kind=BannerKind::Success/>

                <div class="panel">
                    <h3 class="panel__title">"Active Loans"</h3>
                    <p class="panel__subtitle">"Books you currently have borrowed"</p>

                    <Suspense fallback=move || view! { <p class="page__loading">"Loading loans..."</p> }>
                        {move || {
                            my_loans
                                .get()
                                .map(|all| {
                                    let active = loans::active(&all);
                                    if active.is_empty() {
                                        view! {
                                            <p class="page__empty">"You don't have any active loans"</p>
                                        }
                                            .into_any()
                                    } else {
                                        view! {
                                            <div class="loan-grid">
                                                {active
                                                    .into_iter()
                                                    .map(|loan| {
                                                        view! {
                                                            <LoanCard
                                                                loan=loan
                                                                on_renew=on_renew
                                                                on_return=on_return_requested
                                                            />
                                                        }
                                                    })
                                                    .collect_view()}
                                            </div>
                                        }
                                            .into_any()
                                    }
                                })
                        }}
                    </Suspense>
                </div>

                <Show when=move || returning.get().is_some()>
                    <ConfirmDialog
                        title="Return Book"
                        message="Are you sure you want to return this book?"
                        confirm_label="Return"
                        on_confirm=on_return_confirmed
                        on_cancel=Callback::new(move |()| returning.set(None))
                    />
                </Show>
            </div>
        </Layout>
    }
}
