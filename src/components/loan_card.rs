//! Loan card: the borrowed book, dates, status, fine, and renew/return
//! actions.

use leptos::prelude::*;

use crate::net::types::{Loan, LoanStatus};
use crate::state::loans;

#[component]
pub fn LoanCard(loan: Loan, on_renew: Callback<i64>, on_return: Callback<i64>) -> impl IntoView {
    let id = loan.id;
    let renewable = loans::can_renew(&loan);
    let show_actions = loans::is_active(&loan);
    let borrowed = loans::format_date(&loan.loan_date);
    let due = loans::format_date(&loan.expiration_date);
    let fine = loan.fine_amount;
    let renewals = loan.renewals;

    let (title, author, cover) = match &loan.book {
        Some(book) => (book.title.clone(), book.author.clone(), book.cover_url.clone()),
        None => ("Unknown Book".to_owned(), "Unknown Author".to_owned(), None),
    };
    let alt = title.clone();

    let (badge_class, badge_text) = match loan.status {
        LoanStatus::OnLoan => ("badge badge--success", "Active"),
        LoanStatus::Overdue => ("badge badge--danger", "Overdue"),
        LoanStatus::Returned => ("badge", "Returned"),
    };

    view! {
        <div class="loan-card">
            {match cover {
                Some(url) => view! { <img class="loan-card__cover" src=url alt=alt/> }.into_any(),
                None => view! { <div class="loan-card__placeholder">"No cover"</div> }.into_any(),
            }}
            <div class="loan-card__details">
                <div class="loan-card__head">
                    <div>
                        <h4 class="loan-card__title">{title}</h4>
                        <p class="loan-card__author">{author}</p>
                    </div>
                    <span class=badge_class>{badge_text}</span>
                </div>
                <div class="loan-card__dates">
                    <p>
                        <strong>"Borrowed: "</strong>
                        {borrowed}
                    </p>
                    <p>
                        <strong>"Due: "</strong>
                        {due}
                    </p>
                    {(fine > 0.0)
                        .then(|| {
                            view! {
                                <p class="loan-card__fine">
                                    <strong>"Fine: "</strong>
                                    {format!("${fine:.2}")}
                                </p>
                            }
                        })}
                    <p class="loan-card__renewals">
                        {format!("Renewals: {renewals}/{}", loans::MAX_RENEWALS)}
                    </p>
                </div>
                <Show when=move || show_actions>
                    <div class="loan-card__actions">
                        <button
                            class="btn btn--outline"
                            disabled=!renewable
                            on:click=move |_| on_renew.run(id)
                        >
                            "Renew"
                        </button>
                        <button class="btn btn--primary" on:click=move |_| on_return.run(id)>
                            "Return"
                        </button>
                    </div>
                </Show>
            </div>
        </div>
    }
}
