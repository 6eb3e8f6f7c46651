//! Loading indicators

use leptos::prelude::*;

/// Spinner loading indicator
#[component]
pub fn LoadingSpinner(#[prop(default = "w-5 h-5")] size: &'static str) -> impl IntoView {
    view! {
        <svg
            class=format!("{} animate-spin text-teal-600", size)
            xmlns="http://www.w3.org/2000/svg"
            fill="none"
            viewBox="0 0 24 24"
        >
            <circle
                class="opacity-25"
                cx="12"
                cy="12"
                r="10"
                stroke="currentColor"
                stroke-width="4"
            ></circle>
            <path
                class="opacity-75"
                fill="currentColor"
                d="M4 12a8 8 0 018-8V0C5.373 0 0 5.373 0 12h4zm2 5.291A7.962 7.962 0 014 12H0c0 3.042 1.135 5.824 3 7.938l3-2.647z"
            ></path>
        </svg>
    }
}

/// Full-page loading overlay
#[component]
pub fn LoadingOverlay(#[prop(default = "Loading...")] message: &'static str) -> impl IntoView {
    view! {
        <div class="fixed inset-0 bg-white/80 backdrop-blur-sm flex items-center justify-center z-[60]">
            <div class="flex flex-col items-center gap-4">
                <LoadingSpinner size="w-12 h-12" />
                <p class="text-slate-600 font-medium">{message}</p>
            </div>
        </div>
    }
}

/// Placeholder card shown while the directory loads
#[component]
pub fn PostSkeleton() -> impl IntoView {
    view! {
        <div class="bg-white rounded-[2.5rem] overflow-hidden shadow-sm border border-slate-100 animate-pulse flex flex-col h-full">
            <div class="p-6 flex items-center gap-4 border-b border-slate-50">
                <div class="w-10 h-10 bg-slate-100 rounded-full"></div>
                <div class="space-y-2">
                    <div class="w-24 h-3 bg-slate-100 rounded"></div>
                    <div class="w-16 h-2 bg-slate-50 rounded"></div>
                </div>
            </div>
            <div class="aspect-square bg-slate-50"></div>
            <div class="p-7 flex-1 space-y-4">
                <div class="w-3/4 h-3 bg-slate-100 rounded"></div>
                <div class="w-full h-3 bg-slate-100 rounded"></div>
                <div class="w-1/2 h-3 bg-slate-100 rounded"></div>
            </div>
        </div>
    }
}
