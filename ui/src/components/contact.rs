//! Contact form posting leads to the CRM

use crate::api::BrowserLeadSink;
use crate::components::LoadingSpinner;
use crate::state::SiteState;
use chrono::Utc;
use leptos::leptos_dom::helpers::TimeoutHandle;
use leptos::prelude::*;
use leptos::task::spawn_local;
use rejuvana::lead::{SubmissionState, ERROR_RESET_DELAY, MESSAGE_MAX_CHARS};
use rejuvana::{LeadSink, LeadSubmission};

const INPUT_CLASS: &str = "w-full px-6 py-4 rounded-2xl bg-slate-50 border border-slate-200 focus:outline-none focus:ring-2 focus:ring-teal-500 focus:bg-white transition-all";

#[component]
pub fn Contact() -> impl IntoView {
    let state = expect_context::<SiteState>();
    let submission = RwSignal::new(LeadSubmission::new(state.settings().lead));
    let error_reset = StoredValue::new(None::<TimeoutHandle>);

    on_cleanup(move || {
        if let Some(handle) = error_reset.try_update_value(Option::take).flatten() {
            handle.clear();
        }
        submission.try_update(|s| s.cancel());
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let (ticket, contact) = match submission.try_update(|s| s.begin()) {
            Some(Ok(started)) => started,
            Some(Err(e)) => {
                tracing::debug!("Lead not submitted: {}", e);
                return;
            }
            None => return,
        };
        let sink = BrowserLeadSink::new(&state.settings());

        spawn_local(async move {
            let outcome = sink.create_contact(&contact).await;
            let failed = outcome.is_err();
            let applied = submission
                .try_update(|s| s.complete(ticket, outcome, Utc::now()))
                .unwrap_or(false);

            if !(applied && failed) {
                return;
            }
            match set_timeout_with_handle(
                move || {
                    submission.try_update(|s| s.expire_error(Utc::now()));
                },
                ERROR_RESET_DELAY,
            ) {
                Ok(handle) => {
                    let previous = error_reset.try_update_value(|slot| slot.replace(handle));
                    if let Some(stale) = previous.flatten() {
                        stale.clear();
                    }
                }
                Err(e) => tracing::warn!("Could not schedule error reset: {:?}", e),
            }
        });
    };

    let syncing = move || submission.with(|s| s.is_syncing());
    let succeeded = move || submission.with(|s| *s.state() == SubmissionState::Success);

    view! {
        <section id="join-community" class="py-24 bg-slate-50 relative">
            <div class="container mx-auto px-6 md:px-12">
                <div class="max-w-5xl mx-auto bg-slate-900 rounded-[3rem] overflow-hidden shadow-2xl flex flex-col md:flex-row">
                    <div class="md:w-5/12 p-12 lg:p-16 text-white bg-teal-600 flex flex-col justify-between">
                        <div>
                            <h2 class="text-4xl font-serif font-bold mb-6 tracking-tight">"Join the Community"</h2>
                            <p class="text-teal-50 text-lg mb-12 opacity-90 leading-relaxed">
                                "Your path to longevity starts with a single conversation. Connect with our dedicated support team and we will guide your first steps."
                            </p>
                            <div>
                                <p class="text-xs uppercase tracking-widest text-teal-100 font-bold mb-1">"Expert Support"</p>
                                <span class="text-lg font-medium">"hello@rejuvanaliving.com"</span>
                            </div>
                        </div>
                        <div class="pt-10 border-t border-white/10 hidden md:block">
                            <p class="text-sm text-teal-100/60 italic leading-relaxed">
                                "\"The secret of health for both mind and body is not to mourn for the past, but to live the present moment wisely and earnestly.\""
                            </p>
                        </div>
                    </div>

                    <div class="md:w-7/12 p-12 lg:p-16 bg-white">
                        <form class="space-y-6" on:submit=on_submit>
                            <div>
                                <label class="block text-sm font-bold text-slate-700 mb-2">"Full Name"</label>
                                <input
                                    type="text"
                                    required
                                    class=INPUT_CLASS
                                    placeholder="How should we address you?"
                                    prop:value=move || submission.with(|s| s.form().name().to_string())
                                    on:input=move |ev| {
                                        let value = event_target_value(&ev);
                                        submission.update(|s| s.form_mut().set_name(value));
                                    }
                                />
                            </div>
                            <div>
                                <label class="block text-sm font-bold text-slate-700 mb-2">"Email Address"</label>
                                <input
                                    type="email"
                                    required
                                    class=INPUT_CLASS
                                    placeholder="Where can we reach you?"
                                    prop:value=move || submission.with(|s| s.form().email().to_string())
                                    on:input=move |ev| {
                                        let value = event_target_value(&ev);
                                        submission.update(|s| s.form_mut().set_email(value));
                                    }
                                />
                            </div>
                            <div>
                                <div class="flex justify-between items-baseline mb-2">
                                    <label class="block text-sm font-bold text-slate-700">"Message"</label>
                                    <span class="text-xs text-slate-400">
                                        {move || format!("{} characters left", submission.with(|s| s.form().remaining_chars()))}
                                    </span>
                                </div>
                                <textarea
                                    rows="4"
                                    required
                                    maxlength=MESSAGE_MAX_CHARS.to_string()
                                    class=format!("{} resize-none", INPUT_CLASS)
                                    placeholder="Tell us about your wellness aspirations..."
                                    prop:value=move || submission.with(|s| s.form().message().to_string())
                                    on:input=move |ev| {
                                        let value = event_target_value(&ev);
                                        submission.update(|s| s.form_mut().set_message(value));
                                    }
                                ></textarea>
                            </div>

                            <button
                                type="submit"
                                disabled=move || syncing() || !submission.with(|s| s.form().is_complete())
                                class="w-full py-5 bg-teal-600 text-white rounded-2xl font-bold text-lg hover:bg-teal-700 transition-all flex items-center justify-center gap-3 active:scale-[0.98] disabled:opacity-70 shadow-lg shadow-teal-100"
                            >
                                <Show
                                    when=syncing
                                    fallback=|| view! { <span>"Begin Your Wellness Journey"</span> }
                                >
                                    <LoadingSpinner size="w-6 h-6" />
                                    <span>"Preparing your path..."</span>
                                </Show>
                            </button>

                            {move || {
                                submission
                                    .with(|s| s.error_message().map(str::to_string))
                                    .map(|message| {
                                        view! {
                                            <p class="text-center text-red-500 font-bold text-sm">{message}</p>
                                        }
                                    })
                            }}
                        </form>
                    </div>
                </div>
            </div>

            <Show when=succeeded>
                <div class="fixed inset-0 z-[100] flex items-center justify-center p-6">
                    <div
                        class="absolute inset-0 bg-slate-900/80 backdrop-blur-md"
                        on:click=move |_| {
                            submission.update(|s| {
                                s.dismiss();
                            });
                        }
                    ></div>
                    <div class="relative bg-white rounded-[3rem] p-10 md:p-16 max-w-xl w-full text-center shadow-2xl">
                        <h3 class="text-3xl md:text-4xl font-serif font-bold text-slate-900 mb-6">
                            "Your Journey Begins Today"
                        </h3>
                        <p class="text-xl text-slate-600 leading-relaxed mb-10">
                            "Great! You have taken your first significant step in Longevity and Healthier living. Our experts have received your inquiry and will connect with you shortly."
                        </p>
                        <button
                            class="w-full py-5 bg-slate-900 text-white rounded-2xl font-bold text-lg hover:bg-slate-800 transition-all active:scale-95 shadow-xl"
                            on:click=move |_| {
                                submission.update(|s| {
                                    s.dismiss();
                                });
                            }
                        >
                            "Continue Your Path"
                        </button>
                    </div>
                </div>
            </Show>
        </section>
    }
}
