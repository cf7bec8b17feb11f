//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::components::route_guard::{Protected, PublicOnly};
use crate::net::api::Api;
use crate::pages::{
    admin::AdminPage, book_details::BookDetailsPage, browse::BrowsePage, dashboard::DashboardPage,
    landing::LandingPage, login::LoginPage, my_loans::MyLoansPage, profile::ProfilePage,
    signup::SignupPage,
};
use crate::state::session::Session;

/// Root application component.
///
/// Provides the session store and API client as contexts and sets up
/// client-side routing. The session is rehydrated from local storage before
/// the first route renders.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = Session::new();
    provide_context(session);
    provide_context(Api::from_env());
    session.restore();

    view! {
        <Title text="MyBookSpace"/>

        <Router>
            <Routes fallback=|| view! { <Redirect path="/"/> }>
                <Route
                    path=StaticSegment("")
                    view=|| view! { <PublicOnly><LandingPage/></PublicOnly> }
                />
                <Route
                    path=StaticSegment("login")
                    view=|| view! { <PublicOnly><LoginPage/></PublicOnly> }
                />
                <Route
                    path=StaticSegment("signup")
                    view=|| view! { <PublicOnly><SignupPage/></PublicOnly> }
                />
                <Route
                    path=StaticSegment("register")
                    view=|| view! { <PublicOnly><SignupPage/></PublicOnly> }
                />
                <Route
                    path=StaticSegment("dashboard")
                    view=|| view! { <Protected><DashboardPage/></Protected> }
                />
                <Route
                    path=StaticSegment("browse")
                    view=|| view! { <Protected><BrowsePage/></Protected> }
                />
                <Route
                    path=(StaticSegment("book"), ParamSegment("id"))
                    view=|| view! { <Protected><BookDetailsPage/></Protected> }
                />
                <Route
                    path=StaticSegment("loans")
                    view=|| view! { <Protected><MyLoansPage/></Protected> }
                />
                <Route
                    path=StaticSegment("profile")
                    view=|| view! { <Protected><ProfilePage/></Protected> }
                />
                <Route
                    path=StaticSegment("admin")
                    view=|| view! { <Protected admin_only=true><AdminPage/></Protected> }
                />
            </Routes>
        </Router>
    }
}
