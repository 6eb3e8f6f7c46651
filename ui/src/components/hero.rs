//! Landing hero with rotating tag-lines

use crate::state::SiteState;
use leptos::prelude::*;
use rejuvana::content::{next_phrase, HERO_PHRASES, HERO_ROTATION};
use rejuvana::Section;

#[component]
pub fn Hero() -> impl IntoView {
    let state = expect_context::<SiteState>();
    let phrase = RwSignal::new(0usize);

    match set_interval_with_handle(
        move || {
            phrase.try_update(|i| *i = next_phrase(*i));
        },
        HERO_ROTATION,
    ) {
        Ok(handle) => on_cleanup(move || handle.clear()),
        Err(e) => tracing::warn!("Hero rotation disabled: {:?}", e),
    }

    view! {
        <section class="relative min-h-screen flex items-center overflow-hidden">
            <div class="absolute inset-0">
                <img
                    src="https://images.unsplash.com/photo-1506126613408-eca07ce68773?auto=format&fit=crop&q=80&w=2000"
                    alt="Calm morning meditation"
                    class="w-full h-full object-cover"
                />
                <div class="absolute inset-0 bg-gradient-to-r from-white/95 via-white/80 to-transparent"></div>
            </div>

            <div class="container mx-auto px-6 md:px-12 relative z-10 pt-24">
                <div class="max-w-3xl">
                    <h1 class="text-5xl md:text-7xl font-serif text-slate-900 leading-tight mb-8 min-h-[2.5em]">
                        {move || HERO_PHRASES[phrase.get() % HERO_PHRASES.len()]}
                    </h1>
                    <p class="text-xl text-slate-600 leading-relaxed mb-12 max-w-2xl">
                        "Rejuvana Living is your companion in the pursuit of a vital, long, and balanced life. We combine ancient wisdom with modern science to help you age better, every day."
                    </p>
                    <button
                        class="px-10 py-5 bg-teal-600 text-white rounded-full font-bold shadow-xl hover:bg-teal-700 transition-all active:scale-95"
                        on:click=move |_| state.navigate(Section::JoinCommunity)
                    >
                        "Join the Community"
                    </button>
                </div>
            </div>
        </section>
    }
}
