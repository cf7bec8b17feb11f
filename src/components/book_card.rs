//! Catalog card: cover, title/author, availability badge, optional borrow
//! action.

use leptos::prelude::*;

use crate::net::types::Book;

#[component]
pub fn BookCard(
    book: Book,
    on_open: Callback<i64>,
    /// When present, the card renders a borrow button (disabled while the
    /// book has no available copies).
    #[prop(optional, into)]
    on_borrow: Option<Callback<i64>>,
) -> impl IntoView {
    let id = book.id;
    let available = book.is_available();
    let badge_class = if available { "badge badge--success" } else { "badge badge--danger" };
    let badge_text = if available {
        format!("{} Available", book.available_copies)
    } else {
        "Unavailable".to_owned()
    };
    let alt = book.title.clone();

    view! {
        <div class="book-card">
            <div class="book-card__cover" on:click=move |_| on_open.run(id)>
                {match book.cover_url {
                    Some(url) => view! { <img class="book-card__image" src=url alt=alt/> }.into_any(),
                    None => view! { <div class="book-card__placeholder">"No cover"</div> }.into_any(),
                }}
            </div>
            <div class="book-card__body">
                <h4 class="book-card__title" on:click=move |_| on_open.run(id)>
                    {book.title}
                </h4>
                <p class="book-card__author">{book.author}</p>
                <div class="book-card__meta">
                    <span class=badge_class>{badge_text}</span>
                    {book.genre.map(|genre| view! { <span class="book-card__genre">{genre}</span> })}
                </div>
                {on_borrow.map(|callback| {
                    view! {
                        <button
                            class="btn btn--primary btn--block"
                            disabled=!available
                            on:click=move |_| callback.run(id)
                        >
                            {if available { "Borrow Book" } else { "Not Available" }}
                        </button>
                    }
                })}
            </div>
        </div>
    }
}
