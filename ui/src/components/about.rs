use leptos::prelude::*;

const FEATURES: [(&str, &str); 3] = [
    (
        "Evidence-Based",
        "We bridge the gap between clinical research and daily lifestyle, ensuring our recommendations are backed by science.",
    ),
    (
        "Personalized Paths",
        "Every body is unique. We provide the frameworks for you to discover the specific habits that work for your biology.",
    ),
    (
        "Sustainable Growth",
        "No crash diets or extreme regimes. Just small, consistent adjustments that lead to long-term health and vitality.",
    ),
];

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id="about" class="py-32 bg-white">
            <div class="container mx-auto px-6 md:px-12">
                <div class="grid grid-cols-1 lg:grid-cols-2 gap-20 items-center mb-24">
                    <div>
                        <h2 class="text-4xl md:text-5xl font-serif font-bold text-slate-900 mb-8 leading-tight">
                            "Why Rejuvana Living Matters for Your Future"
                        </h2>
                        <p class="text-lg text-slate-600 leading-relaxed mb-6">
                            "We believe that longevity isn't just about adding years to your life, but adding life to your years. Preventive health is the most powerful tool we have."
                        </p>
                        <p class="text-lg text-slate-600 leading-relaxed">
                            "Our approach focuses on the small, compounding habits that create radical transformations. From the air you breathe to the thoughts you think, Rejuvana Living guides you toward your peak biological potential."
                        </p>
                    </div>
                    <div class="relative">
                        <img
                            src="https://images.unsplash.com/photo-1544367567-0f2fcb009e0b?auto=format&fit=crop&q=80&w=1200"
                            alt="Mindfulness practice"
                            class="rounded-[3rem] shadow-2xl w-full object-cover aspect-[4/5]"
                        />
                    </div>
                </div>

                <div class="grid grid-cols-1 md:grid-cols-3 gap-10">
                    {FEATURES
                        .into_iter()
                        .map(|(title, body)| {
                            view! {
                                <div class="p-10 rounded-[2.5rem] bg-[#FDFCFB] border border-slate-100 hover:shadow-xl transition-shadow">
                                    <h3 class="text-xl font-serif text-slate-900 mb-4">{title}</h3>
                                    <p class="text-slate-600 leading-relaxed">{body}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
