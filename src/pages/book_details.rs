//! Single-book page with the borrow action.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::banner::{Banner, BannerKind};
use crate::components::layout::Layout;
use crate::net::api::Api;
use crate::net::types::Book;

#[component]
pub fn BookDetailsPage() -> impl IntoView {
    let api = expect_context::<Api>();
    let params = use_params_map();

    let book = LocalResource::new({
        let api = api.clone();
        move || {
            let api = api.clone();
            let id = params.get().get("id").and_then(|raw| raw.parse::<i64>().ok());
            async move {
                match id {
                    Some(id) => match api.get_book(id).await {
                        Ok(book) => Some(book),
                        Err(err) => {
                            log::error!("could not load book {id}: {err}");
                            None
                        }
                    },
                    None => None,
                }
            }
        }
    });

    let error = RwSignal::new(None::<String>);
    let notice = RwSignal::new(None::<String>);
    let borrowing = RwSignal::new(false);

    let on_borrow = {
        let api = api.clone();
        Callback::new(move |id: i64| {
            if borrowing.get_untracked() {
                return;
            }
            borrowing.set(true);
            error.set(None);
            notice.set(None);
            let api = api.clone();
            leptos::task::spawn_local(async move {
                match api.reserve_book(id).await {
                    Ok(_) => {
                        notice.set(Some("Book borrowed successfully!".to_owned()));
                        book.refetch();
                    }
                    Err(err) => error.set(Some(err.to_string())),
                }
                borrowing.set(false);
            });
        })
    };

    view! {
        <Layout>
            <div class="page book-details">
                <a class="book-details__back" href="/browse">
                    "\u{2190} Back to Browse"
                </a>

                <Banner message=error/>
                <Banner message=notice kind=BannerKind::Success/>

                <Suspense fallback=move || {
                    view! { <p class="page__loading">"Loading book details..."</p> }
                }>
                    {move || {
                        book.get()
                            .map(|loaded| match loaded {
                                Some(book) => {
                                    view! { <BookDetailsCard book=book borrowing=borrowing on_borrow=on_borrow/> }
                                        .into_any()
                                }
                                None => {
                                    view! {
                                        <div class="book-details__missing">
                                            <p>"Book not found"</p>
                                        </div>
                                    }
                                        .into_any()
                                }
                            })
                    }}
                </Suspense>
            </div>
        </Layout>
    }
}

#[component]
fn BookDetailsCard(book: Book, borrowing: RwSignal<bool>, on_borrow: Callback<i64>) -> impl IntoView {
    let id = book.id;
    let available = book.is_available();
    let alt = book.title.clone();
    let availability_badge = if available {
        ("availability__state availability__state--ok", "Available")
    } else {
        ("availability__state availability__state--out", "Unavailable")
    };

    view! {
        <div class="book-details__card">
            <div class="book-details__cover">
                {match book.cover_url {
                    Some(url) => view! { <img src=url alt=alt/> }.into_any(),
                    None => view! { <div class="book-details__placeholder">"No cover"</div> }.into_any(),
                }}
            </div>

            <div class="book-details__info">
                <div>
                    <h1 class="book-details__title">{book.title}</h1>
                    <p class="book-details__author">{book.author}</p>
                </div>

                <div class="book-details__meta">
                    <div class="book-details__meta-item">
                        <span class="book-details__meta-label">"ISBN"</span>
                        <span>{if book.isbn.is_empty() { "N/A".to_owned() } else { book.isbn }}</span>
                    </div>
                    <div class="book-details__meta-item">
                        <span class="book-details__meta-label">"Genre"</span>
                        <span>{book.genre.unwrap_or_else(|| "N/A".to_owned())}</span>
                    </div>
                </div>

                <div class="availability">
                    <div>
                        <p class="availability__label">"Availability"</p>
                        <p class="availability__count">
                            {format!("{} / {}", book.available_copies, book.total_copies)}
                        </p>
                        <p class="availability__hint">
                            {if available { "Copies available" } else { "Out of stock" }}
                        </p>
                    </div>
                    <span class=availability_badge.0>{availability_badge.1}</span>
                </div>

                {book
                    .description
                    .map(|description| {
                        view! {
                            <div class="book-details__description">
                                <h3>"Description"</h3>
                                <p>{description}</p>
                            </div>
                        }
                    })}

                <button
                    class="btn btn--primary btn--block"
                    disabled=move || !available || borrowing.get()
                    on:click=move |_| on_borrow.run(id)
                >
                    {move || {
                        if borrowing.get() {
                            "Borrowing..."
                        } else if available {
                            "Borrow This Book"
                        } else {
                            "Out of Stock"
                        }
                    }}
                </button>
            </div>
        </div>
    }
}
