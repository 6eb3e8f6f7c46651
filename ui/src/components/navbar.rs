//! Fixed site navigation

use crate::state::SiteState;
use leptos::ev;
use leptos::prelude::*;
use rejuvana::navigation::navbar_is_solid;
use rejuvana::{NavigationRequest, Page, Section};

const LINK_CLASS: &str =
    "text-sm font-bold uppercase tracking-widest transition-colors hover:text-teal-600";

/// Scroll-aware navbar with a collapsible mobile menu
#[component]
pub fn Navbar() -> impl IntoView {
    let state = expect_context::<SiteState>();
    let menu_open = RwSignal::new(false);

    let listener = window_event_listener(ev::scroll, move |_| {
        state.scroll_y.set(window().scroll_y().unwrap_or(0.0));
    });
    on_cleanup(move || listener.remove());

    let go = move |request: NavigationRequest| {
        menu_open.set(false);
        state.navigate(request);
    };

    let solid = move || navbar_is_solid(state.page(), state.scroll_y.get());
    let link_color = move |page: Page| {
        if state.page() == page {
            "text-teal-600"
        } else {
            "text-slate-600"
        }
    };

    let links = move |mobile: bool| {
        let class = if mobile {
            format!("text-left {}", LINK_CLASS)
        } else {
            LINK_CLASS.to_string()
        };
        let (c1, c2, c4) = (class.clone(), class.clone(), class.clone());
        view! {
            <button class=c1 on:click=move |_| go(Section::About.into())>"About"</button>
            <button class=c2 on:click=move |_| go(Section::Gallery.into())>"Wellness Guides"</button>
            <button
                class=move || format!("{} {}", class, link_color(Page::Directory))
                on:click=move |_| go(Page::Directory.into())
            >
                "Social Directory"
            </button>
            <button class=c4 on:click=move |_| go(Section::JoinCommunity.into())>"Contact"</button>
            <button
                class="px-8 py-3 bg-teal-600 text-white rounded-full text-sm font-bold shadow-lg hover:bg-teal-700 transition-all active:scale-95"
                on:click=move |_| go(Section::JoinCommunity.into())
            >
                "Join Community"
            </button>
        }
    };

    view! {
        <nav class=move || {
            if solid() {
                "fixed top-0 left-0 right-0 z-50 transition-all duration-300 bg-white/95 backdrop-blur-md py-3 shadow-md"
            } else {
                "fixed top-0 left-0 right-0 z-50 transition-all duration-300 bg-transparent py-6"
            }
        }>
            <div class="container mx-auto px-6 md:px-12 flex items-center justify-between">
                <button
                    class="flex items-center gap-3 transition-transform active:scale-95"
                    on:click=move |_| go(Page::Home.into())
                >
                    <span class="text-2xl font-serif font-bold text-slate-900">"Rejuvana"</span>
                    <span class="text-xs font-bold uppercase tracking-[0.3em] text-teal-600">"Living"</span>
                </button>

                <div class="hidden md:flex items-center gap-10 text-slate-600">{links(false)}</div>

                <button
                    class="md:hidden text-slate-800"
                    aria-label="Toggle menu"
                    on:click=move |_| menu_open.update(|open| *open = !*open)
                >
                    <svg xmlns="http://www.w3.org/2000/svg" fill="none" viewBox="0 0 24 24" stroke-width="2" stroke="currentColor" class="w-8 h-8">
                        <path
                            stroke-linecap="round"
                            stroke-linejoin="round"
                            d=move || {
                                if menu_open.get() {
                                    "M6 18L18 6M6 6l12 12"
                                } else {
                                    "M3.75 6.75h16.5M3.75 12h16.5m-16.5 5.25h16.5"
                                }
                            }
                        />
                    </svg>
                </button>
            </div>

            <Show when=move || menu_open.get()>
                <div class="md:hidden bg-white border-t border-slate-100">
                    <div class="flex flex-col p-6 gap-6 text-slate-600">{links(true)}</div>
                </div>
            </Show>
        </nav>
    }
}
