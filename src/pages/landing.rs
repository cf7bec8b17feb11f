//! Public landing page.

use leptos::prelude::*;

use crate::components::layout::BookGlyph;

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <div class="landing">
            <div class="landing__hero">
                <div class="landing__brand">
                    <BookGlyph/>
                    <span class="landing__brand-name">"MyBookSpace"</span>
                </div>
                <h1 class="landing__headline">"Your community library, one shelf away"</h1>
                <p class="landing__tagline">
                    "Browse the catalog, borrow in a click, and keep track of every due date."
                </p>
                <div class="landing__actions">
                    <a class="btn btn--primary" href="/login">
                        "Sign In"
                    </a>
                    <a class="btn btn--outline" href="/signup">
                        "Create Account"
                    </a>
                </div>
            </div>
            <div class="landing__features">
                <div class="landing__feature">
                    <h3>"Browse"</h3>
                    <p>"Search the whole collection by title, author, or ISBN."</p>
                </div>
                <div class="landing__feature">
                    <h3>"Borrow"</h3>
                    <p>"Reserve available copies instantly and renew online."</p>
                </div>
                <div class="landing__feature">
                    <h3>"Track"</h3>
                    <p>"Due dates, renewals, and fines in one place."</p>
                </div>
            </div>
        </div>
    }
}
