//! Privacy, terms and cookie documents

use crate::state::SiteState;
use leptos::prelude::*;
use rejuvana::Page;

struct Clause {
    heading: &'static str,
    body: &'static str,
    bullets: &'static [&'static str],
}

struct LegalDocument {
    title: &'static str,
    stamp: &'static str,
    /// Highlighted note above the numbered clauses
    notice: Option<(&'static str, &'static str)>,
    clauses: &'static [Clause],
    footer: Option<&'static str>,
}

static PRIVACY: LegalDocument = LegalDocument {
    title: "Privacy Policy",
    stamp: "Last Updated: December 2025",
    notice: None,
    clauses: &[
        Clause {
            heading: "1. Introduction",
            body: "At Rejuvana Living, your privacy is paramount. This policy explains how we collect, use, and protect your personal information when you interact with our wellness platform, community directory, and AI-powered services.",
            bullets: &[],
        },
        Clause {
            heading: "2. Information We Collect",
            body: "We collect information to provide a more personalized longevity experience:",
            bullets: &[
                "Direct Identifiers: Name, email address, and wellness goals provided via our contact forms.",
                "Social Integration: Public social media data fetched via our AI-powered Social Directory to curate community insights.",
                "Technical Data: IP addresses and browser characteristics for performance optimization.",
            ],
        },
        Clause {
            heading: "3. How We Use Data",
            body: "Your data is used strictly for:",
            bullets: &[
                "Customizing your wellness journey and providing relevant guides.",
                "Syncing our community directory with real-time health-span insights.",
                "Improving our AI models' ability to surface high-fidelity longevity content.",
            ],
        },
        Clause {
            heading: "4. Data Sharing",
            body: "Rejuvana Living does not sell your data. We only share information with trusted service providers necessary for platform operation (e.g., Google Gemini API for real-time data grounding) or when required by law.",
            bullets: &[],
        },
    ],
    footer: Some("If you have any questions regarding your data rights, please reach out to our privacy officer at privacy@rejuvanaliving.com."),
};

static TERMS: LegalDocument = LegalDocument {
    title: "Terms of Service",
    stamp: "Version 1.1 • December 2025",
    notice: Some((
        "Medical Disclaimer",
        "Rejuvana Living provides educational content regarding longevity and wellness. Our content is NOT medical advice. Always consult a licensed healthcare professional before beginning any new health, supplement, or exercise protocol.",
    )),
    clauses: &[
        Clause {
            heading: "1. Agreement to Terms",
            body: "By accessing Rejuvana Living, you agree to be bound by these Terms of Service and all applicable laws and regulations.",
            bullets: &[],
        },
        Clause {
            heading: "2. Use License",
            body: "Permission is granted to temporarily view the materials (information or software) on Rejuvana Living for personal, non-commercial transitory viewing only.",
            bullets: &[],
        },
        Clause {
            heading: "3. Limitations",
            body: "In no event shall Rejuvana Living or its suppliers be liable for any damages (including, without limitation, damages for loss of data or profit) arising out of the use or inability to use the materials on our platform.",
            bullets: &[],
        },
        Clause {
            heading: "4. Governing Law",
            body: "These terms and conditions are governed by and construed in accordance with the laws of the jurisdiction in which Rejuvana Living operates.",
            bullets: &[],
        },
    ],
    footer: None,
};

static COOKIES: LegalDocument = LegalDocument {
    title: "Cookie Policy",
    stamp: "Last Updated: October 2023",
    notice: None,
    clauses: &[
        Clause {
            heading: "What Are Cookies?",
            body: "Cookies are small text files stored on your device that help us improve your browsing experience. At Rejuvana Living, we use cookies to understand how you interact with our wellness guides.",
            bullets: &[],
        },
        Clause {
            heading: "Types of Cookies We Use",
            body: "",
            bullets: &[
                "Essential Cookies: Necessary for the platform to function, such as maintaining your session and security settings.",
                "Performance Cookies: Help us understand how visitors use the site (e.g., which wellness guides are most popular) so we can improve content delivery.",
                "Functional Cookies: Enable advanced features like our real-time community directory synchronization.",
            ],
        },
        Clause {
            heading: "Managing Cookies",
            body: "Most web browsers allow you to control cookies through their settings. Please note that disabling essential cookies may impact the functionality of our interactive wellness tools.",
            bullets: &[],
        },
    ],
    footer: None,
};

fn document(page: Page) -> Option<&'static LegalDocument> {
    match page {
        Page::Privacy => Some(&PRIVACY),
        Page::Terms => Some(&TERMS),
        Page::Cookies => Some(&COOKIES),
        Page::Home | Page::Directory => None,
    }
}

/// Heading of a legal page, used for the document title
pub fn document_title(page: Page) -> &'static str {
    document(page).map(|doc| doc.title).unwrap_or("Rejuvana Living")
}

#[component]
pub fn LegalPage(page: Page) -> impl IntoView {
    let state = expect_context::<SiteState>();
    let Some(doc) = document(page) else {
        return view! { <div class="min-h-screen"></div> }.into_any();
    };

    view! {
        <div class="min-h-screen bg-[#FDFCFB] pt-40 pb-32">
            <div class="container mx-auto px-6 md:px-12 max-w-4xl">
                <button
                    class="mb-12 text-sm font-bold text-teal-600 hover:text-teal-700 uppercase tracking-widest"
                    on:click=move |_| state.navigate(Page::Home)
                >
                    "← Back to Home"
                </button>

                <h1 class="text-5xl md:text-6xl font-serif font-bold text-slate-900 mb-4">{doc.title}</h1>
                <p class="text-xs font-bold text-slate-400 uppercase tracking-widest mb-16">{doc.stamp}</p>

                {doc.notice.map(|(heading, body)| {
                    view! {
                        <div class="mb-12 p-8 bg-amber-50 border border-amber-100 rounded-[2rem]">
                            <h2 class="text-lg font-bold text-amber-800 mb-2">{heading}</h2>
                            <p class="text-amber-700 leading-relaxed">{body}</p>
                        </div>
                    }
                })}

                <div class="space-y-12 text-lg text-slate-600 leading-relaxed">
                    {doc
                        .clauses
                        .iter()
                        .map(|clause| {
                            view! {
                                <section>
                                    <h2 class="text-2xl font-serif font-bold text-slate-900 mb-4">{clause.heading}</h2>
                                    {(!clause.body.is_empty()).then(|| view! { <p>{clause.body}</p> })}
                                    {(!clause.bullets.is_empty()).then(|| {
                                        view! {
                                            <ul class="list-disc pl-6 mt-4 space-y-2">
                                                {clause.bullets.iter().map(|b| view! { <li>{*b}</li> }).collect_view()}
                                            </ul>
                                        }
                                    })}
                                </section>
                            }
                        })
                        .collect_view()}
                </div>

                {doc.footer.map(|text| {
                    view! {
                        <div class="mt-16 p-8 bg-teal-50 rounded-[2rem]">
                            <h3 class="text-lg font-bold text-teal-800 mb-2">"Questions?"</h3>
                            <p class="text-teal-700">{text}</p>
                        </div>
                    }
                })}
            </div>
        </div>
    }
    .into_any()
}
