//! Rejuvana Living - Leptos frontend
//!
//! Single-page site: home (hero, about, guides, contact), the social
//! directory and the legal pages. Page switching is driven by the core view
//! model rather than a router.

pub mod api;
pub mod components;
pub mod pages;
pub mod settings;
pub mod state;

use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Title};
use rejuvana::Page;

use components::{Footer, Navbar};
use pages::{directory::DirectoryPage, home::HomePage, legal::LegalPage};
use state::SiteState;

/// Main application component
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let state = SiteState::new();
    provide_context(state);
    on_cleanup(move || state.cancel_pending_scroll());

    // Deep links such as /#directory or /#gallery
    Effect::new(move |_| {
        state.navigate_to_location();
    });

    let title = move || match state.page() {
        page if page.is_legal() => {
            format!("{} | Rejuvana Living", pages::legal::document_title(page))
        }
        Page::Directory => "Rejuvana Pulse | Rejuvana Living".to_string(),
        _ => "Rejuvana Living | Longevity & Wellness".to_string(),
    };

    view! {
        <Title text=title />
        <div class="relative min-h-screen bg-[#FDFCFB]">
            <Navbar />
            <main class="relative z-10">
                {move || match state.page() {
                    page if page.is_legal() => view! { <LegalPage page=page /> }.into_any(),
                    Page::Directory => view! { <DirectoryPage /> }.into_any(),
                    _ => view! { <HomePage /> }.into_any(),
                }}
            </main>
            <Footer />
        </div>
    }
}
