//! Top navigation bar

use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};

use crate::services::{track_click, use_services};

/// OAuth entry point on the API server
pub const LOGIN_URL: &str = "http://localhost:8080/oauth2/authorization/google";

/// (label, route) for each page link; the label doubles as the metric trigger id
const PAGES: [(&str, &str); 2] = [("News", "/"), ("Matches", "/")];

const BRAND_TRIGGER: &str = "Fortuna Name";
const LOGIN_TRIGGER: &str = "Login";

#[component]
pub fn Navbar() -> impl IntoView {
    let services = use_services();
    let pathname = use_location().pathname;
    let navigate = use_navigate();

    // Every click is tagged with the screen it happened on.
    let click = move |trigger_id: &'static str, route: &'static str| {
        track_click(services, trigger_id, pathname.get_untracked());
        navigate(route, Default::default());
    };

    let login = move |_| {
        track_click(services, LOGIN_TRIGGER, pathname.get_untracked());
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.location().set_href(LOGIN_URL) {
                tracing::error!(error = ?e, "Login redirect failed");
            }
        }
    };

    let links = PAGES
        .into_iter()
        .map(|(label, route)| {
            let click = click.clone();
            view! {
                <button class="nav-link" on:click=move |_| click(label, route)>
                    {label}
                </button>
            }
        })
        .collect_view();

    let brand_click = click.clone();

    view! {
        <nav class="navbar">
            <a
                class="brand"
                aria-label="fortuna-site-name"
                on:click=move |_| brand_click(BRAND_TRIGGER, "/")
            >
                "FORTUNA"
            </a>
            <div class="nav-links">{links}</div>
            <button class="btn login" on:click=login>
                "Login"
            </button>
        </nav>
    }
}
