//! Wellness guide gallery and detail modal

use crate::components::LoadingOverlay;
use leptos::prelude::*;
use rejuvana::content::{guide, visible_guides, WellnessCard, CARD_REVEAL_DELAY, IMAGE_FALLBACK_URL};
use leptos::leptos_dom::helpers::TimeoutHandle;
use web_sys::HtmlImageElement;

/// Swap a broken image for the fallback, once
fn use_fallback_image(ev: &web_sys::Event) {
    let img = event_target::<HtmlImageElement>(ev);
    if img.src() != IMAGE_FALLBACK_URL {
        img.set_src(IMAGE_FALLBACK_URL);
    }
}

#[component]
fn GuideCard(card: &'static WellnessCard, on_open: Callback<u32>) -> impl IntoView {
    let id = card.id;

    view! {
        <div class="group bg-white rounded-3xl overflow-hidden shadow-sm hover:shadow-xl hover:-translate-y-2 transition-all duration-500 border border-slate-100 flex flex-col">
            <div class="relative h-64 overflow-hidden bg-slate-200">
                <img
                    src=card.image_url
                    alt=card.title
                    on:error=move |ev| use_fallback_image(&ev)
                    class="w-full h-full object-cover transition-transform duration-700 group-hover:scale-110"
                />
            </div>
            <div class="p-8 flex-1 flex flex-col">
                <h3 class="text-2xl font-bold text-slate-900 mb-4 group-hover:text-teal-600 transition-colors">
                    {card.title}
                </h3>
                <p class="text-slate-600 leading-relaxed mb-6 flex-1">{card.description}</p>
                <button
                    class="flex items-center gap-2 text-sm font-bold text-slate-900 group-hover:gap-4 transition-all"
                    on:click=move |_| on_open.run(id)
                >
                    "Read More"
                    <svg xmlns="http://www.w3.org/2000/svg" fill="none" viewBox="0 0 24 24" stroke-width="2.5" stroke="currentColor" class="w-4 h-4">
                        <path stroke-linecap="round" stroke-linejoin="round" d="M13.5 4.5L21 12m0 0l-7.5 7.5M21 12H3" />
                    </svg>
                </button>
            </div>
        </div>
    }
}

#[component]
fn GuideModal(card: &'static WellnessCard, on_close: Callback<()>) -> impl IntoView {
    view! {
        <div class="fixed inset-0 z-[100] flex items-center justify-center p-4 md:p-8">
            <div
                class="absolute inset-0 bg-slate-900/60 backdrop-blur-sm"
                on:click=move |_| on_close.run(())
            ></div>
            <div class="relative w-full max-w-4xl max-h-[90vh] bg-white rounded-[2rem] overflow-hidden shadow-2xl flex flex-col">
                <button
                    class="absolute top-6 right-6 z-10 p-2 bg-white/20 hover:bg-white/40 backdrop-blur-md rounded-full text-white transition-all shadow-lg"
                    aria-label="Close"
                    on:click=move |_| on_close.run(())
                >
                    <svg xmlns="http://www.w3.org/2000/svg" fill="none" viewBox="0 0 24 24" stroke-width="2.5" stroke="currentColor" class="w-6 h-6">
                        <path stroke-linecap="round" stroke-linejoin="round" d="M6 18L18 6M6 6l12 12" />
                    </svg>
                </button>

                <div class="h-64 md:h-80 w-full relative">
                    <img
                        src=card.image_url
                        alt=card.title
                        on:error=move |ev| use_fallback_image(&ev)
                        class="w-full h-full object-cover"
                    />
                    <div class="absolute inset-0 bg-gradient-to-t from-black/60 to-transparent"></div>
                    <div class="absolute bottom-8 left-8">
                        <span class="inline-block px-3 py-1 bg-teal-500 text-white text-[10px] font-bold uppercase tracking-[0.2em] rounded-full mb-3">
                            {card.category}
                        </span>
                        <h2 class="text-3xl md:text-4xl font-serif font-bold text-white">{card.title}</h2>
                    </div>
                </div>

                <div class="p-8 md:p-12 overflow-y-auto">
                    <h4 class="text-teal-600 font-bold text-sm uppercase tracking-widest mb-4">"In-Depth Guide"</h4>
                    <p class="text-xl text-slate-600 leading-relaxed font-medium mb-8">{card.description}</p>
                    <div class="w-full h-px bg-slate-100 mb-8"></div>
                    <p class="text-lg text-slate-700 leading-relaxed whitespace-pre-wrap">{card.long_body}</p>

                    <div class="mt-12 flex justify-end">
                        <button
                            class="px-8 py-3 bg-teal-600 text-white font-bold rounded-xl hover:bg-teal-700 transition-all shadow-lg shadow-teal-100"
                            on:click=move |_| on_close.run(())
                        >
                            "Got it, thanks!"
                        </button>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn Gallery() -> impl IntoView {
    let show_all = RwSignal::new(false);
    let revealing = RwSignal::new(false);
    let selected = RwSignal::new(None::<u32>);
    let pending = StoredValue::new(None::<TimeoutHandle>);

    on_cleanup(move || {
        if let Some(handle) = pending.try_get_value().flatten() {
            handle.clear();
        }
    });

    let open = Callback::new(move |id: u32| {
        // One reveal at a time
        if let Some(handle) = pending.get_value() {
            handle.clear();
        }
        revealing.set(true);
        let handle = set_timeout_with_handle(
            move || {
                revealing.try_set(false);
                selected.try_set(Some(id));
            },
            CARD_REVEAL_DELAY,
        );
        match handle {
            Ok(handle) => pending.set_value(Some(handle)),
            Err(e) => {
                tracing::warn!("Could not schedule guide reveal: {:?}", e);
                revealing.set(false);
                selected.set(Some(id));
            }
        }
    });
    let close = Callback::new(move |_: ()| selected.set(None));

    view! {
        <section id="gallery" class="py-24 bg-slate-50 relative">
            <div class="container mx-auto px-6 md:px-12">
                <div class="max-w-3xl mx-auto text-center mb-16">
                    <h2 class="text-4xl md:text-5xl font-serif font-bold text-slate-900 mb-6">
                        "Explore the Rejuvana Guides"
                    </h2>
                    <p class="text-lg text-slate-600">
                        "Curated content and tools designed to optimize every pillar of your health span."
                    </p>
                </div>

                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
                    <For
                        each=move || visible_guides(show_all.get()).iter()
                        key=|card| card.id
                        children=move |card| view! { <GuideCard card=card on_open=open /> }
                    />
                </div>

                <div class="mt-16 text-center">
                    <button
                        class="px-12 py-5 bg-slate-900 text-white rounded-full font-bold hover:bg-slate-800 transition-all active:scale-95 shadow-lg hover:shadow-xl"
                        on:click=move |_| show_all.update(|all| *all = !*all)
                    >
                        {move || if show_all.get() { "Show Fewer Resources" } else { "View All Resources" }}
                    </button>
                </div>
            </div>

            <Show when=move || revealing.get()>
                <LoadingOverlay message="Fetching data..." />
            </Show>

            {move || {
                selected
                    .get()
                    .and_then(guide)
                    .map(|card| view! { <GuideModal card=card on_close=close /> })
            }}
        </section>
    }
}
