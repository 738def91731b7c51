//! Toast Banner Component
//!
//! Transient notification banner fed by the context toast signal.

use leptos::prelude::*;

use crate::context::{use_app_context, ToastSeverity};

#[component]
pub fn ToastBanner() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        {move || ctx.toast.get().map(|toast| {
            let class = match toast.severity {
                ToastSeverity::Default => "toast",
                ToastSeverity::Destructive => "toast toast-destructive",
            };
            view! {
                <div class=class>
                    <span class="toast-message">{toast.message}</span>
                </div>
            }
        })}
    }
}
