//! Site footer

use crate::state::SiteState;
use chrono::Datelike;
use leptos::prelude::*;
use rejuvana::{NavigationRequest, Page, Section};

const SOCIAL_LINKS: [(&str, &str); 6] = [
    ("Instagram", "https://www.instagram.com/rejuvanaliving/"),
    ("Facebook", "https://www.facebook.com/rejuvanaliving"),
    ("YouTube", "https://www.youtube.com/@rejuvanaliving"),
    ("TikTok", "https://www.tiktok.com/@rejuvanaliving"),
    ("LinkedIn", "https://www.linkedin.com/company/rejuvanaliving/"),
    ("Pinterest", "https://www.pinterest.com/rejuvanaliving/"),
];

#[component]
fn FooterLink(label: &'static str, request: NavigationRequest) -> impl IntoView {
    let state = expect_context::<SiteState>();
    let request = StoredValue::new(request);

    view! {
        <li>
            <button
                class="text-slate-400 hover:text-teal-400 transition-colors text-sm"
                on:click=move |_| state.navigate(request.get_value())
            >
                {label}
            </button>
        </li>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    let year = chrono::Local::now().year();

    view! {
        <footer class="bg-slate-900 text-white pt-24 pb-12">
            <div class="container mx-auto px-6 md:px-12">
                <div class="grid grid-cols-1 md:grid-cols-4 gap-16 mb-20">
                    <div>
                        <div class="flex items-center gap-3 mb-6">
                            <span class="text-2xl font-serif font-bold">"Rejuvana"</span>
                            <span class="text-xs font-bold uppercase tracking-[0.3em] text-teal-400">"Living"</span>
                        </div>
                        <p class="text-slate-400 text-sm leading-relaxed">
                            "Pioneering the future of holistic longevity and science-backed wellness for a life well-lived."
                        </p>
                    </div>

                    <div>
                        <h4 class="text-xs font-bold uppercase tracking-[0.2em] text-teal-400 mb-8">"Platform"</h4>
                        <ul class="space-y-4">
                            <FooterLink label="Home" request=Page::Home.into() />
                            <FooterLink label="Social Directory" request=Page::Directory.into() />
                            <FooterLink label="About Us" request=Section::About.into() />
                            <FooterLink label="Wellness Guides" request=Section::Gallery.into() />
                        </ul>
                    </div>

                    <div>
                        <h4 class="text-xs font-bold uppercase tracking-[0.2em] text-teal-400 mb-8">"Knowledge"</h4>
                        <ul class="space-y-4">
                            <FooterLink label="Privacy Policy" request=Page::Privacy.into() />
                            <FooterLink label="Terms of Service" request=Page::Terms.into() />
                            <FooterLink label="Cookie Policy" request=Page::Cookies.into() />
                            <FooterLink label="Contact Support" request=Section::JoinCommunity.into() />
                        </ul>
                    </div>

                    <div>
                        <h4 class="text-xs font-bold uppercase tracking-[0.2em] text-teal-400 mb-8">"Connect"</h4>
                        <ul class="space-y-4">
                            {SOCIAL_LINKS
                                .into_iter()
                                .map(|(name, href)| {
                                    view! {
                                        <li>
                                            <a
                                                href=href
                                                target="_blank"
                                                rel="noopener noreferrer"
                                                class="text-slate-400 hover:text-teal-400 transition-colors text-sm"
                                            >
                                                {name}
                                            </a>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </div>
                </div>

                <div class="pt-10 border-t border-slate-800 text-center text-slate-500 text-xs tracking-wide">
                    {format!("© {} Rejuvana Living. Empowering through preventive wellness.", year)}
                </div>
            </div>
        </footer>
    }
}
