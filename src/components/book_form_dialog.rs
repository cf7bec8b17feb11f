//! Modal form for adding or editing a catalog entry, with ISBN-based
//! prefill from the catalog's preview endpoint.

use leptos::prelude::*;

use crate::net::api::Api;
use crate::net::types::{Book, BookInput};

/// Validate the form fields into a create/update payload.
fn build_input(
    isbn: &str,
    title: &str,
    author: &str,
    genre: &str,
    copies: &str,
    description: &str,
    cover_url: &str,
) -> Result<BookInput, String> {
    let isbn = isbn.trim();
    if isbn.is_empty() {
        return Err("ISBN is required".to_owned());
    }
    let title = title.trim();
    if title.is_empty() {
        return Err("Title is required".to_owned());
    }
    let author = author.trim();
    if author.is_empty() {
        return Err("Author is required".to_owned());
    }
    let total_copies: u32 = copies
        .trim()
        .parse()
        .ok()
        .filter(|count| *count >= 1)
        .ok_or_else(|| "Total copies must be a number of at least 1".to_owned())?;

    let optional = |value: &str| {
        let value = value.trim();
        if value.is_empty() { None } else { Some(value.to_owned()) }
    };

    Ok(BookInput {
        isbn: isbn.to_owned(),
        title: title.to_owned(),
        author: author.to_owned(),
        genre: optional(genre),
        total_copies,
        description: optional(description),
        cover_url: optional(cover_url),
    })
}

#[component]
pub fn BookFormDialog(
    /// Existing entry to edit; `None` creates a new book.
    #[prop(optional_no_strip)]
    book: Option<Book>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let api = expect_context::<Api>();
    let editing = book.as_ref().map(|book| book.id);
    let heading = if editing.is_some() { "Edit Book" } else { "Add New Book" };

    let isbn = RwSignal::new(book.as_ref().map(|b| b.isbn.clone()).unwrap_or_default());
    let title = RwSignal::new(book.as_ref().map(|b| b.title.clone()).unwrap_or_default());
    let author = RwSignal::new(book.as_ref().map(|b| b.author.clone()).unwrap_or_default());
    let genre = RwSignal::new(
        book.as_ref()
            .and_then(|b| b.genre.clone())
            .unwrap_or_default(),
    );
    let copies = RwSignal::new(
        book.as_ref()
            .map_or_else(|| "1".to_owned(), |b| b.total_copies.to_string()),
    );
    let description = RwSignal::new(
        book.as_ref()
            .and_then(|b| b.description.clone())
            .unwrap_or_default(),
    );
    let cover_url = RwSignal::new(
        book.as_ref()
            .and_then(|b| b.cover_url.clone())
            .unwrap_or_default(),
    );

    let error = RwSignal::new(None::<String>);
    let looking_up = RwSignal::new(false);
    let saving = RwSignal::new(false);

    let lookup = {
        let api = api.clone();
        Callback::new(move |()| {
            let raw = isbn.get_untracked().trim().to_owned();
            if raw.is_empty() {
                error.set(Some("Enter an ISBN to look up".to_owned()));
                return;
            }
            if looking_up.get_untracked() {
                return;
            }
            looking_up.set(true);
            error.set(None);
            let api = api.clone();
            leptos::task::spawn_local(async move {
                match api.preview_by_isbn(&raw).await {
                    Ok(preview) => {
                        if let Some(value) = preview.title {
                            title.set(value);
                        }
                        if let Some(value) = preview.author {
                            author.set(value);
                        }
                        if let Some(value) = preview.description {
                            description.set(value);
                        }
                        if let Some(value) = preview.cover_url {
                            cover_url.set(value);
                        }
                    }
                    Err(err) => error.set(Some(err.to_string())),
                }
                looking_up.set(false);
            });
        })
    };

    let submit = Callback::new(move |()| {
        if saving.get_untracked() {
            return;
        }
        let input = match build_input(
            &isbn.get_untracked(),
            &title.get_untracked(),
            &author.get_untracked(),
            &genre.get_untracked(),
            &copies.get_untracked(),
            &description.get_untracked(),
            &cover_url.get_untracked(),
        ) {
            Ok(input) => input,
            Err(message) => {
                error.set(Some(message));
                return;
            }
        };
        saving.set(true);
        error.set(None);
        let api = api.clone();
        leptos::task::spawn_local(async move {
            let result = match editing {
                Some(id) => api.update_book(id, &input).await,
                None => api.create_book(&input).await,
            };
            saving.set(false);
            match result {
                Ok(()) => on_saved.run(()),
                Err(err) => error.set(Some(err.to_string())),
            }
        });
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog dialog--wide" on:click=move |ev| ev.stop_propagation()>
                <h2>{heading}</h2>

                <label class="dialog__label">
                    "ISBN"
                    <div class="dialog__isbn-row">
                        <input
                            class="dialog__input"
                            type="text"
                            placeholder="978-0-14-143951-8"
                            prop:value=move || isbn.get()
                            on:input=move |ev| isbn.set(event_target_value(&ev))
                        />
                        <button
                            class="btn btn--outline"
                            disabled=move || looking_up.get()
                            on:click=move |_| lookup.run(())
                        >
                            {move || if looking_up.get() { "Looking up..." } else { "Autofill" }}
                        </button>
                    </div>
                    <span class="dialog__hint">"Enter an ISBN to auto-fill details from OpenLibrary"</span>
                </label>

                <div class="dialog__grid">
                    <label class="dialog__label">
                        "Title"
                        <input
                            class="dialog__input"
                            type="text"
                            prop:value=move || title.get()
                            on:input=move |ev| title.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="dialog__label">
                        "Author"
                        <input
                            class="dialog__input"
                            type="text"
                            prop:value=move || author.get()
                            on:input=move |ev| author.set(event_target_value(&ev))
                        />
                    </label>
                </div>

                <div class="dialog__grid">
                    <label class="dialog__label">
                        "Genre"
                        <input
                            class="dialog__input"
                            type="text"
                            placeholder="Fiction"
                            prop:value=move || genre.get()
                            on:input=move |ev| genre.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="dialog__label">
                        "Total Copies"
                        <input
                            class="dialog__input"
                            type="number"
                            min="1"
                            prop:value=move || copies.get()
                            on:input=move |ev| copies.set(event_target_value(&ev))
                        />
                    </label>
                </div>

                <label class="dialog__label">
                    "Description"
                    <textarea
                        class="dialog__input dialog__input--area"
                        prop:value=move || description.get()
                        on:input=move |ev| description.set(event_target_value(&ev))
                    ></textarea>
                </label>

                <label class="dialog__label">
                    "Cover URL"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || cover_url.get()
                        on:input=move |ev| cover_url.set(event_target_value(&ev))
                    />
                </label>

                {move || {
                    error
                        .get()
                        .map(|message| view! { <p class="dialog__error">{message}</p> })
                }}

                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button
                        class="btn btn--primary"
                        disabled=move || saving.get()
                        on:click=move |_| submit.run(())
                    >
                        {move || {
                            if saving.get() {
                                "Saving..."
                            } else if editing.is_some() {
                                "Save Changes"
                            } else {
                                "Add Book"
                            }
                        }}
                    </button>
                </div>
            </div>
        </div>
    }
}
