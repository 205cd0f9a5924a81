mod about;
mod achievements;
mod certificates;
mod contact;
mod hero;
mod modal;
mod navbar;
mod projects;
mod reveal;
mod skills;

use std::future::Future;
use std::time::Duration;

use futures::channel::oneshot;
use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, ScrollBehavior, ScrollToOptions};

use crate::sections::scroll_target;

use about::About;
use achievements::Achievements;
use certificates::Certificates;
use contact::Contact;
use hero::Hero;
use navbar::Navbar;
use projects::Projects;
use skills::Skills;

pub const OWNER: &str = "Mounica";
pub const RESUME_PATH: &str = "/Pulagorla_Mounica_Resume.pdf";

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Title formatter=|title| format!("{OWNER} - {title}") />
        <Meta name="color-scheme" content="dark" />

        <Router>
            <Navbar />
            <main class="min-h-screen bg-black text-blue-100">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=path!("/") view=HomePage />
                </Routes>
            </main>
            <Footer />
        </Router>
    }
}

#[component]
fn HomePage() -> impl IntoView {
    view! {
        <Title text="Portfolio" />
        <Hero />
        <About />
        <Skills />
        <Achievements />
        <Certificates />
        <Projects />
        <Contact />
    }
}

#[component]
fn Footer() -> impl IntoView {
    let year = &env!("BUILD_TIME")[..4];
    view! {
        <footer class="bg-black border-t border-blue-500/20 py-8 text-center text-sm text-gray-400">
            <p>{format!("© {year} {OWNER}. Built with Rust and Leptos.")}</p>
        </footer>
    }
}

/// Scrolls the window so the section with `id` sits just below the navbar.
/// Returns false when no such element is on the page.
pub fn scroll_to_section(id: &str) -> bool {
    let Some(el) = section_element(id) else {
        return false;
    };
    smooth_scroll(scroll_target(el.offset_top() as f64));
    true
}

pub fn scroll_to_top() {
    smooth_scroll(0.0);
}

fn smooth_scroll(top: f64) {
    let options = ScrollToOptions::new();
    options.set_left(0.0);
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window().scroll_to_with_scroll_to_options(&options);
}

pub fn section_element(id: &str) -> Option<HtmlElement> {
    document()
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

/// Resolves after `duration` using the browser timer.
pub fn sleep(duration: Duration) -> impl Future<Output = ()> {
    let (tx, rx) = oneshot::channel::<()>();
    set_timeout(
        move || {
            // receiver is gone when the race was already decided
            let _ = tx.send(());
        },
        duration,
    );
    async move {
        let _ = rx.await;
    }
}
