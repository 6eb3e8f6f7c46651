use crate::components::{About, Contact, Gallery, Hero};
use leptos::prelude::*;

/// Landing page; hosts every navigable section
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Hero />
        <About />
        <Gallery />
        <Contact />
    }
}
