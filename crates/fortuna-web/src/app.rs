//! Main App Component

use leptos::prelude::*;
use leptos_router::{components::*, path};

use crate::components::Navbar;
use crate::pages::LandingPage;
use crate::services::provide_services;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    provide_services();

    view! {
        <Router>
            <Navbar />
            <main class="app">
                <Routes fallback=|| view! { <p>"Page not found"</p> }>
                    <Route path=path!("/") view=LandingPage />
                </Routes>
            </main>
        </Router>
    }
}
