//! Social directory ("Rejuvana Pulse")

use crate::api::BrowserFeedSource;
use crate::components::PostSkeleton;
use crate::state::SiteState;
use chrono::{DateTime, Local, Utc};
use leptos::prelude::*;
use leptos::task::spawn_local;
use rejuvana::feed::{relative_label, GroundingSource, CLOCK_TICK};
use rejuvana::{FeedSource, FeedSynchronizer, SocialPost};

const SKELETON_COUNT: usize = 6;
const AVATAR_URL: &str = "https://ui-avatars.com/api/?name=RL&background=14b8a6&color=fff&bold=true";

#[component]
fn PostCard(post: SocialPost, now: RwSignal<DateTime<Utc>>) -> impl IntoView {
    let timestamp = post.timestamp;

    view! {
        <a
            href=post.permalink
            target="_blank"
            rel="noopener noreferrer"
            class="group bg-white rounded-[2.5rem] overflow-hidden shadow-sm border border-slate-100 flex flex-col hover:shadow-2xl hover:-translate-y-2 transition-all duration-500"
        >
            <div class="p-6 flex items-center gap-4 border-b border-slate-50">
                <div class="w-10 h-10 rounded-full bg-slate-900 border border-slate-200 overflow-hidden">
                    <img src=AVATAR_URL alt="Avatar" />
                </div>
                <div>
                    <h4 class="text-sm font-bold text-slate-900 group-hover:text-teal-600 transition-colors">
                        {format!("@{}", post.author_handle)}
                    </h4>
                    <p class="text-[10px] text-slate-400 uppercase tracking-widest font-bold flex items-center gap-2">
                        {move || relative_label(timestamp, now.get())}
                        <span class="w-1.5 h-1.5 bg-teal-500 rounded-full animate-pulse"></span>
                    </p>
                </div>
            </div>
            <div class="aspect-square bg-slate-100 relative overflow-hidden">
                <img
                    src=post.image_url
                    alt="Verified Social Content"
                    loading="lazy"
                    class="w-full h-full object-cover transition-transform duration-700 group-hover:scale-105"
                />
            </div>
            <div class="p-7 flex-1 flex flex-col">
                <div class="flex items-center gap-6 mb-5 text-slate-400">
                    <span class="text-sm font-bold text-slate-800">{format!("♥ {}", post.like_count_display)}</span>
                    <span class="text-sm font-bold text-slate-800">{format!("💬 {}", post.comment_count)}</span>
                </div>
                <p class="text-sm text-slate-600 leading-relaxed line-clamp-4 mb-6">{post.caption}</p>
                <div class="mt-auto pt-6 border-t border-slate-50">
                    <span class="text-[10px] font-bold text-teal-600 uppercase tracking-[0.2em]">"Verified Brand Update"</span>
                </div>
            </div>
        </a>
    }
}

#[component]
fn SourceStrip(sources: Vec<GroundingSource>) -> impl IntoView {
    view! {
        <div class="mt-16 text-left bg-slate-50/50 backdrop-blur-sm p-8 rounded-[3rem] border border-slate-100 max-w-3xl mx-auto">
            <p class="text-[10px] font-bold text-slate-400 uppercase tracking-widest mb-6 px-2">
                "Verified Information Sources:"
            </p>
            <div class="flex flex-wrap gap-3">
                {sources
                    .into_iter()
                    .map(|source| {
                        let label = source.label().to_string();
                        view! {
                            <a
                                href=source.uri
                                target="_blank"
                                rel="noopener noreferrer"
                                class="px-4 py-2 bg-white border border-slate-200 rounded-full text-xs text-teal-600 hover:text-teal-700 font-bold transition-all shadow-sm hover:shadow-md"
                            >
                                {label}
                            </a>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
pub fn DirectoryPage() -> impl IntoView {
    let state = expect_context::<SiteState>();
    let feed = RwSignal::new(FeedSynchronizer::new(state.settings().feed.account()));
    let now = RwSignal::new(Utc::now());

    let sync = move |manual: bool| {
        let Some(Some(ticket)) = feed.try_update(|f| f.begin(manual)) else {
            return;
        };
        let source = BrowserFeedSource::new(&state.settings());
        spawn_local(async move {
            let outcome = source.fetch_latest().await;
            feed.try_update(|f| f.complete(ticket, outcome, Utc::now()));
        });
    };

    sync(false);

    match set_interval_with_handle(
        move || {
            now.try_set(Utc::now());
        },
        CLOCK_TICK,
    ) {
        Ok(handle) => on_cleanup(move || handle.clear()),
        Err(e) => tracing::warn!("Relative timestamps will not refresh: {:?}", e),
    }
    on_cleanup(move || {
        feed.try_update(|f| f.cancel());
    });

    let syncing = move || feed.with(|f| f.is_background_syncing());

    view! {
        <div class="min-h-screen bg-[#FDFCFB] pt-32 pb-32">
            <div class="container mx-auto px-6 md:px-12">
                <header class="max-w-4xl mx-auto text-center mb-24">
                    <div class="flex items-center justify-center mb-8">
                        <div class="inline-flex items-center gap-2.5 px-5 py-2.5 bg-teal-50 text-teal-700 text-[10px] font-bold uppercase tracking-[0.2em] rounded-full shadow-sm">
                            <span class="relative flex h-2 w-2">
                                <span class="animate-ping absolute inline-flex h-full w-full rounded-full bg-teal-400 opacity-75"></span>
                                <span class="relative inline-flex rounded-full h-2 w-2 bg-teal-500"></span>
                            </span>
                            "Live Synchronized"
                        </div>
                    </div>
                    <h1 class="text-6xl md:text-7xl font-serif font-bold text-slate-900 mb-8 tracking-tight">
                        "Rejuvana Pulse"
                    </h1>
                    <p class="text-xl text-slate-600 leading-relaxed max-w-2xl mx-auto mb-12">
                        "Real-time insights and community updates grounded in our active digital presence. Science-backed longevity, delivered daily."
                    </p>

                    <div class="flex flex-col sm:flex-row items-center justify-center gap-4">
                        <button
                            disabled=move || !feed.with(|f| f.can_refresh())
                            on:click=move |_| sync(true)
                            class=move || {
                                if syncing() {
                                    "flex items-center gap-3 px-10 py-4 rounded-full font-bold text-sm transition-all shadow-xl active:scale-95 bg-slate-100 text-slate-400"
                                } else {
                                    "flex items-center gap-3 px-10 py-4 rounded-full font-bold text-sm transition-all shadow-xl active:scale-95 bg-teal-600 text-white hover:bg-teal-700 shadow-teal-100"
                                }
                            }
                        >
                            {move || if syncing() { "Synchronizing..." } else { "Sync Real-Time Feed" }}
                        </button>
                        {move || {
                            feed.with(|f| f.last_synced_at())
                                .map(|at| {
                                    view! {
                                        <span class="text-xs font-bold text-slate-400 uppercase tracking-widest px-6 py-4 bg-slate-50 rounded-full border border-slate-100">
                                            {format!("Last Sync: {}", at.with_timezone(&Local).format("%-I:%M:%S %p"))}
                                        </span>
                                    }
                                })
                        }}
                    </div>

                    {move || {
                        let sources = feed.with(|f| f.sources().to_vec());
                        (!sources.is_empty()).then(|| view! { <SourceStrip sources=sources /> })
                    }}
                </header>

                {move || {
                    feed.with(|f| f.last_error().map(str::to_string))
                        .map(|notice| {
                            view! {
                                <div class="mb-12 p-6 bg-amber-50 border border-amber-100 rounded-[2.5rem] text-amber-700 text-center text-sm font-bold flex items-center justify-center gap-4">
                                    <span class="w-2.5 h-2.5 bg-amber-400 rounded-full animate-pulse"></span>
                                    {notice}
                                </div>
                            }
                        })
                }}

                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-10">
                    {move || {
                        if feed.with(|f| f.is_loading()) {
                            (0..SKELETON_COUNT)
                                .map(|_| view! { <PostSkeleton /> })
                                .collect_view()
                                .into_any()
                        } else {
                            feed.with(|f| f.posts().to_vec())
                                .into_iter()
                                .map(|post| view! { <PostCard post=post now=now /> })
                                .collect_view()
                                .into_any()
                        }
                    }}
                </div>
            </div>
        </div>
    }
}
