//! Placeholder Panel Component
//!
//! "Coming soon" panel for sections without a real view yet.

use leptos::prelude::*;

#[component]
pub fn ComingSoon(
    #[prop(into)] title: String,
    #[prop(into)] blurb: String,
) -> impl IntoView {
    view! {
        <div class="page coming-soon">
            <h2 class="page-title">{title}</h2>
            <p class="page-subtitle">{blurb}</p>
            <button class="btn btn-primary">"Coming Soon"</button>
        </div>
    }
}
