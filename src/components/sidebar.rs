//! Sidebar Component
//!
//! Left navigation column with logo, nav buttons and user footer.

use leptos::prelude::*;

use crate::context::{use_app_context, Tab};

const NAV_ITEMS: &[(Tab, &str, &str)] = &[
    (Tab::Dashboard, "Dashboard", "📊"),
    (Tab::Leads, "Leads", "🎯"),
    (Tab::Contacts, "Contacts", "👤"),
    (Tab::Companies, "Companies", "🏢"),
    (Tab::Deals, "Deals", "📈"),
    (Tab::Calendar, "Calendar", "📅"),
    (Tab::Reports, "Reports", "📋"),
    (Tab::Email, "Email", "✉"),
    (Tab::Settings, "Settings", "⚙"),
];

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div class="sidebar">
            <div class="sidebar-logo">
                <div class="logo-mark">"👥"</div>
                <div>
                    <h1 class="logo-title">"CRM Pro"</h1>
                    <p class="logo-subtitle">"Sales Management"</p>
                </div>
            </div>

            <nav class="sidebar-nav">
                {NAV_ITEMS.iter().map(|&(tab, label, icon)| {
                    let is_active = move || ctx.active_tab.get() == tab;
                    view! {
                        <button
                            class=move || if is_active() { "nav-btn active" } else { "nav-btn" }
                            on:click=move |_| ctx.switch_tab(tab)
                        >
                            <span class="nav-icon">{icon}</span>
                            {label}
                        </button>
                    }
                }).collect_view()}
            </nav>

            <div class="sidebar-footer">
                <div class="user-chip">
                    <div class="user-avatar">"JD"</div>
                    <div class="user-meta">
                        <p class="user-name">"John Doe"</p>
                        <p class="user-role">"Sales Manager"</p>
                    </div>
                </div>
            </div>
        </div>
    }
}
