//! Admin panel: inventory management, the full loan ledger, and fines.

use leptos::prelude::*;

use crate::components::banner::{Banner, BannerKind};
use crate::components::book_form_dialog::BookFormDialog;
use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::layout::Layout;
use crate::components::stats_card::{StatTone, StatsCard};
use crate::net::api::Api;
use crate::net::types::{Book, Loan, LoanStatus};
use crate::state::admin::{self, AdminTab};
use crate::state::loans;
use crate::util::clock;

#[component]
pub fn AdminPage() -> impl IntoView {
    let api = expect_context::<Api>();

    let books = LocalResource::new({
        let api = api.clone();
        move || {
            let api = api.clone();
            async move {
                api.list_books().await.unwrap_or_else(|err| {
                    log::error!("could not load inventory: {err}");
                    Vec::new()
                })
            }
        }
    });
    let all_loans = LocalResource::new({
        let api = api.clone();
        move || {
            let api = api.clone();
            async move {
                api.all_loans().await.unwrap_or_else(|err| {
                    log::error!("could not load loan ledger: {err}");
                    Vec::new()
                })
            }
        }
    });
    // Server-side counters, with local computation as the fallback.
    let catalog_stats = LocalResource::new({
        let api = api.clone();
        move || {
            let api = api.clone();
            async move { api.catalog_stats().await.ok() }
        }
    });
    let loan_stats = LocalResource::new({
        let api = api.clone();
        move || {
            let api = api.clone();
            async move { api.loan_stats().await.ok() }
        }
    });

    let tab = RwSignal::new(AdminTab::Inventory);
    let error = RwSignal::new(None::<String>);
    let notice = RwSignal::new(None::<String>);
    let show_form = RwSignal::new(false);
    let editing = RwSignal::new(None::<Book>);
    let deleting = RwSignal::new(None::<Book>);

    let open_add = Callback::new(move |()| {
        editing.set(None);
        show_form.set(true);
    });
    let open_edit = Callback::new(move |book: Book| {
        editing.set(Some(book));
        show_form.set(true);
    });
    let on_saved = Callback::new(move |()| {
        show_form.set(false);
        notice.set(Some("Book saved".to_owned()));
        books.refetch();
        catalog_stats.refetch();
    });
    let on_form_cancel = Callback::new(move |()| show_form.set(false));

    let on_delete_confirmed = {
        let api = api.clone();
        Callback::new(move |()| {
            let Some(book) = deleting.get_untracked() else { return };
            deleting.set(None);
            error.set(None);
            let api = api.clone();
            leptos::task::spawn_local(async move {
                match api.delete_book(book.id).await {
                    Ok(()) => {
                        notice.set(Some(format!("Deleted \"{}\"", book.title)));
                        books.refetch();
                        catalog_stats.refetch();
                    }
                    Err(err) => error.set(Some(err.to_string())),
                }
            });
        })
    };

    let current_catalog_stats = move || {
        catalog_stats
            .get()
            .flatten()
            .unwrap_or_else(|| admin::catalog_fallback(&books.get().unwrap_or_default()))
    };
    let current_loan_stats = move || {
        loan_stats.get().flatten().unwrap_or_else(|| {
            admin::loans_fallback(&all_loans.get().unwrap_or_default(), clock::today_days())
        })
    };

    view! {
        <Layout>
            <div class="page admin">
                <div class="page__intro">
                    <h2>"Manage your library system and monitor activity"</h2>
                </div>

                <Banner message=error/>
                <Banner message=notice kind=BannerKind::Success/>

                <Suspense fallback=move || view! { <p class="page__loading">"Loading..."</p> }>
                    <div class="stats-row">
                        {move || {
                            let catalog = current_catalog_stats();
                            let loans = current_loan_stats();
                            view! {
                                <StatsCard
                                    label="Books in Inventory"
                                    value=catalog.total_books.to_string()
                                    subtitle=format!("{} total copies", catalog.total_copies)
                                />
                                <StatsCard
                                    label="Active Loans"
                                    value=loans.active.to_string()
                                    subtitle=format!("{} overdue", loans.overdue)
                                    tone=StatTone::Warn
                                />
                                <StatsCard
                                    label="Pending Fines"
                                    value=format!("${:.2}", loans.pending_fines)
                                    subtitle=format!("{} unpaid", loans.unpaid)
                                    tone=StatTone::Danger
                                />
                            }
                        }}
                    </div>

                    <div class="tab-bar">
                        {[AdminTab::Inventory, AdminTab::Loans, AdminTab::Fines]
                            .into_iter()
                            .map(|this_tab| {
                                let tab_class = move || {
                                    if tab.get() == this_tab {
                                        "tab-bar__tab tab-bar__tab--active"
                                    } else {
                                        "tab-bar__tab"
                                    }
                                };
                                view! {
                                    <button class=tab_class on:click=move |_| tab.set(this_tab)>
                                        {this_tab.label()}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>

                    <Show when=move || tab.get() == AdminTab::Inventory>
                        <InventoryTable
                            books=Signal::derive(move || books.get().unwrap_or_default())
                            on_add=open_add
                            on_edit=open_edit
                            on_delete=Callback::new(move |book: Book| deleting.set(Some(book)))
                        />
                    </Show>
                    <Show when=move || tab.get() == AdminTab::Loans>
                        <LoansTable loans=Signal::derive(move || all_loans.get().unwrap_or_default())/>
                    </Show>
                    <Show when=move || tab.get() == AdminTab::Fines>
                        <FinesTable loans=Signal::derive(move || all_loans.get().unwrap_or_default())/>
                    </Show>
                </Suspense>

                <Show when=move || show_form.get()>
                    <BookFormDialog
                        book=editing.get_untracked()
                        on_saved=on_saved
                        on_cancel=on_form_cancel
                    />
                </Show>

                <Show when=move || deleting.get().is_some()>
                    <ConfirmDialog
                        title="Delete Book"
                        message=deleting
                            .get_untracked()
                            .map_or_else(String::new, |book| {
                                format!("Remove \"{}\" from the catalog?", book.title)
                            })
                        confirm_label="Delete"
                        on_confirm=on_delete_confirmed
                        on_cancel=Callback::new(move |()| deleting.set(None))
                    />
                </Show>
            </div>
        </Layout>
    }
}

#[component]
fn InventoryTable(
    books: Signal<Vec<Book>>,
    on_add: Callback<()>,
    on_edit: Callback<Book>,
    on_delete: Callback<Book>,
) -> impl IntoView {
    view! {
        <div class="panel panel--table">
            <div class="panel__head">
                <div>
                    <h3 class="panel__title">"Book Inventory Management"</h3>
                    <p class="panel__subtitle">"Manage book inventory, stock levels, and availability"</p>
                </div>
                <button class="btn btn--primary" on:click=move |_| on_add.run(())>
                    "+ Add New Book"
                </button>
            </div>
            <table class="table">
                <thead>
                    <tr>
                        <th>"Book"</th>
                        <th>"Author"</th>
                        <th>"Genre"</th>
                        <th>"Available"</th>
                        <th>"Total"</th>
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        books
                            .get()
                            .into_iter()
                            .map(|book| {
                                let edit_book = book.clone();
                                let delete_book = book.clone();
                                view! {
                                    <tr>
                                        <td>
                                            <p class="table__primary">{book.title.clone()}</p>
                                            <p class="table__secondary">{book.isbn.clone()}</p>
                                        </td>
                                        <td>{book.author.clone()}</td>
                                        <td>{book.genre.clone().unwrap_or_else(|| "\u{2014}".to_owned())}</td>
                                        <td>
                                            <span class="count-pill">{book.available_copies}</span>
                                        </td>
                                        <td>
                                            <span class="count-pill count-pill--dark">{book.total_copies}</span>
                                        </td>
                                        <td class="table__actions">
                                            <button
                                                class="table__action"
                                                on:click=move |_| on_edit.run(edit_book.clone())
                                            >
                                                "Edit"
                                            </button>
                                            <button
                                                class="table__action table__action--danger"
                                                on:click=move |_| on_delete.run(delete_book.clone())
                                            >
                                                "Delete"
                                            </button>
                                        </td>
                                    </tr>
                                }
                            })
                            .collect_view()
                    }}
                </tbody>
            </table>
        </div>
    }
}

fn status_badge(status: LoanStatus) -> (&'static str, &'static str) {
    match status {
        LoanStatus::OnLoan => ("badge badge--success", "On Loan"),
        LoanStatus::Overdue => ("badge badge--danger", "Overdue"),
        LoanStatus::Returned => ("badge", "Returned"),
    }
}

fn loan_row(loan: &Loan) -> impl IntoView + use<> {
    let (badge_class, badge_text) = status_badge(loan.status);
    let title = loan
        .book
        .as_ref()
        .map_or_else(|| "Unknown Book".to_owned(), |book| book.title.clone());
    let borrower = loan
        .user
        .as_ref()
        .map_or_else(|| "\u{2014}".to_owned(), |user| user.email.clone());
    let fine = loan.fine_amount;

    view! {
        <tr>
            <td>
                <p class="table__primary">{title}</p>
            </td>
            <td>{borrower}</td>
            <td>{loans::format_date(&loan.loan_date)}</td>
            <td>{loans::format_date(&loan.expiration_date)}</td>
            <td>
                <span class=badge_class>{badge_text}</span>
            </td>
            <td>
                {if fine > 0.0 {
                    format!("${fine:.2}")
                } else {
                    "\u{2014}".to_owned()
                }}
            </td>
        </tr>
    }
}

#[component]
fn LoansTable(loans: Signal<Vec<Loan>>) -> impl IntoView {
    view! {
        <div class="panel panel--table">
            <div class="panel__head">
                <div>
                    <h3 class="panel__title">"Loan Ledger"</h3>
                    <p class="panel__subtitle">"Every loan across the library"</p>
                </div>
            </div>
            <table class="table">
                <thead>
                    <tr>
                        <th>"Book"</th>
                        <th>"Borrower"</th>
                        <th>"Borrowed"</th>
                        <th>"Due"</th>
                        <th>"Status"</th>
                        <th>"Fine"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        let all = loans.get();
                        if all.is_empty() {
                            view! {
                                <tr>
                                    <td class="table__empty" colspan="6">
                                        "No loans recorded"
                                    </td>
                                </tr>
                            }
                                .into_any()
                        } else {
                            all.iter().map(loan_row).collect_view().into_any()
                        }
                    }}
                </tbody>
            </table>
        </div>
    }
}

#[component]
fn FinesTable(loans: Signal<Vec<Loan>>) -> impl IntoView {
    let fined = move || loans::fined(&loans.get());

    view! {
        <div class="panel panel--table">
            <div class="panel__head">
                <div>
                    <h3 class="panel__title">"Fines & Payments"</h3>
                    <p class="panel__subtitle">"Loans with outstanding fines"</p>
                </div>
            </div>
            <table class="table">
                <thead>
                    <tr>
                        <th>"Book"</th>
                        <th>"Borrower"</th>
                        <th>"Borrowed"</th>
                        <th>"Due"</th>
                        <th>"Status"</th>
                        <th>"Fine"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        let fined = fined();
                        if fined.is_empty() {
                            view! {
                                <tr>
                                    <td class="table__empty" colspan="6">
                                        "No outstanding fines"
                                    </td>
                                </tr>
                            }
                                .into_any()
                        } else {
                            fined.iter().map(loan_row).collect_view().into_any()
                        }
                    }}
                </tbody>
            </table>
            <p class="panel__footer">
                {move || format!("Total outstanding: ${:.2}", loans::total_fines(&fined()))}
            </p>
        </div>
    }
}
