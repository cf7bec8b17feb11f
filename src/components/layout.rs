//! Application shell for authenticated pages: sidebar navigation plus a
//! header with the page title and the user menu.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::state::session::Session;

const NAV_ITEMS: [(&str, &str); 4] = [
    ("/dashboard", "Dashboard"),
    ("/browse", "Browse Books"),
    ("/loans", "My Loans"),
    ("/profile", "Profile"),
];

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    let session = expect_context::<Session>();
    let location = use_location();
    let navigate = use_navigate();
    let menu_open = RwSignal::new(false);

    let pathname = location.pathname;
    let title = move || match pathname.get().as_str() {
        "/dashboard" => "Dashboard",
        "/browse" => "Browse Books",
        "/loans" => "My Loans",
        "/profile" => "Profile",
        "/admin" => "Admin Panel",
        _ => "MyBookSpace",
    };

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

    let on_logout = Callback::new(move |()| {
        session.logout();
        navigate("/login", NavigateOptions::default());
    });

    view! {
        <div class="shell">
            <aside class="sidebar">
                <a class="sidebar__brand" href="/dashboard">
                    <BookGlyph/>
                    <span class="sidebar__brand-name">"MyBookSpace"</span>
                </a>
                <nav class="sidebar__nav">
                    {NAV_ITEMS
                        .into_iter()
                        .map(|(href, label)| {
                            let link_class = move || {
                                if pathname.get() == href {
                                    "sidebar__link sidebar__link--active"
                                } else {
                                    "sidebar__link"
                                }
                            };
                            view! {
                                <a class=link_class href=href>
                                    {label}
                                </a>
                            }
                        })
                        .collect::<Vec<_>>()}
                </nav>
            </aside>

            <div class="shell__main">
                <header class="topbar">
                    <h1 class="topbar__title">{title}</h1>
                    <div class="topbar__menu">
                        <button
                            class="topbar__avatar"
                            on:click=move |_| menu_open.update(|open| *open = !*open)
                        >
                            {initials}
                        </button>
                        <Show when=move || menu_open.get()>
                            <div class="user-menu">
                                <div class="user-menu__identity">
                                    <p class="user-menu__name">{display_name}</p>
                                    <p class="user-menu__email">{email}</p>
                                    <Show when=move || session.is_admin()>
                                        <span class="badge badge--accent">"Admin"</span>
                                    </Show>
                                </div>
                                <a class="user-menu__item" href="/profile" on:click=move |_| menu_open.set(false)>
                                    "Profile"
                                </a>
                                <Show when=move || session.is_admin()>
                                    <a class="user-menu__item" href="/admin" on:click=move |_| menu_open.set(false)>
                                        "Admin Panel"
                                    </a>
                                </Show>
                                <button
                                    class="user-menu__item user-menu__item--logout"
                                    on:click=move |_| on_logout.run(())
                                >
                                    "Logout"
                                </button>
                            </div>
                        </Show>
                    </div>
                </header>

                <main class="shell__content">{children()}</main>
            </div>
        </div>
    }
}

/// Inline open-book mark used by the sidebar and the auth pages.
#[component]
pub fn BookGlyph() -> impl IntoView {
    view! {
        <span class="brand-glyph">
            <svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" aria-hidden="true">
                <path d="M12 6.25v13M12 6.25C10.8 5.5 9.25 5 7.5 5S4.2 5.5 3 6.25v13C4.2 18.5 5.75 18 7.5 18s3.3.5 4.5 1.25m0-13C13.2 5.5 14.75 5 16.5 5s3.3.5 4.5 1.25v13C19.8 18.5 18.25 18 16.5 18s-3.3.5-4.5 1.25"></path>
            </svg>
        </span>
    }
}
