//! Catalog browsing: search, genre and availability filters, borrow.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::banner::{Banner, BannerKind};
use crate::components::book_card::BookCard;
use crate::components::layout::Layout;
use crate::components::search_bar::SearchBar;
use crate::net::api::Api;
use crate::state::books::{self, Availability, CatalogFilter};

#[component]
pub fn BrowsePage() -> impl IntoView {
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

    let search = RwSignal::new(String::new());
    let genre = RwSignal::new(String::new());
    let availability = RwSignal::new(Availability::All);
    let error = RwSignal::new(None::<String>);
    let notice = RwSignal::new(None::<String>);

    let filtered = move || {
        let filter = CatalogFilter {
            search: search.get(),
            genre: genre.get(),
            availability: availability.get(),
        };
        books::apply(&filter, &books.get().unwrap_or_default())
    };

    let on_open = Callback::new(move |id: i64| {
        navigate(&format!("/book/{id}"), NavigateOptions::default());
    });

    let on_borrow = {
        let api = api.clone();
        Callback::new(move |id: i64| {
            error.set(None);
            notice.set(None);
            let api = api.clone();
            leptos::task::spawn_local(async move {
                match api.reserve_book(id).await {
                    Ok(_) => {
                        notice.set(Some("Book borrowed successfully!".to_owned()));
                        books.refetch();
                    }
                    Err(err) => error.set(Some(err.to_string())),
                }
            });
        })
    };

    view! {
        <Layout>
            <div class="page browse">
                <div class="page__intro">
                    <h2>"Browse Books"</h2>
                    <p>"Explore our books collection"</p>
                </div>

                <Banner message=error/>
                <Banner message=notice kind=BannerKind::Success/>

                <div class="filter-panel">
                    <SearchBar value=search placeholder="Search by title, author, or ISBN..."/>
                    <div class="filter-panel__row">
                        <select
                            class="filter-panel__select"
                            on:change=move |ev| genre.set(event_target_value(&ev))
                        >
                            <option value="">"All Genres"</option>
                            {move || {
                                books::genres(&books.get().unwrap_or_default())
                                    .into_iter()
                                    .map(|name| {
                                        let selected = genre.get() == name;
                                        view! {
                                            <option value=name.clone() selected=selected>
                                                {name.clone()}
                                            </option>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </select>
                        <select
                            class="filter-panel__select"
                            on:change=move |ev| {
                                availability.set(Availability::from_key(&event_target_value(&ev)));
                            }
                        >
                            <option value="">"All Books"</option>
                            <option value="available">"Available"</option>
                            <option value="unavailable">"Unavailable"</option>
                        </select>
                    </div>
                </div>

                <Suspense fallback=move || view! { <p class="page__loading">"Loading books..."</p> }>
                    <p class="browse__count">
                        {move || format!("Showing {} Books", filtered().len())}
                    </p>
                    {move || {
                        let hits = filtered();
                        if hits.is_empty() {
                            view! {
                                <p class="page__empty">"No books found matching your criteria"</p>
                            }
                                .into_any()
                        } else {
                            view! {
                                <div class="card-grid">
                                    {hits
                                        .into_iter()
                                        .map(|book| {
                                            view! {
                                                <BookCard book=book on_open=on_open on_borrow=on_borrow/>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            }
                                .into_any()
                        }
                    }}
                </Suspense>
            </div>
        </Layout>
    }
}
