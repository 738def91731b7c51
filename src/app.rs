//! CRM Pro Frontend App
//!
//! Root component: sidebar navigation plus the active view.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{
    ComingSoon, Dashboard, LeadsView, PipelineBoardView, Reports, Sidebar, ToastBanner,
};
use crate::context::{AppContext, Tab, Toast};
use crate::store::AppState;

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::new());
    provide_context(store);

    let (active_tab, set_active_tab) = signal(Tab::Dashboard);
    let (toast, set_toast) = signal::<Option<Toast>>(None);
    provide_context(AppContext::new((active_tab, set_active_tab), (toast, set_toast)));

    view! {
        <div class="app-layout">
            <Sidebar />

            <main class="main-content">
                {move || match active_tab.get() {
                    Tab::Dashboard => view! { <Dashboard /> }.into_any(),
                    Tab::Leads => view! { <LeadsView /> }.into_any(),
                    Tab::Deals => view! { <PipelineBoardView /> }.into_any(),
                    Tab::Reports => view! { <Reports /> }.into_any(),
                    Tab::Contacts => view! {
                        <ComingSoon
                            title="Contacts Management"
                            blurb="Manage your customer contacts and relationships"
                        />
                    }.into_any(),
                    Tab::Companies => view! {
                        <ComingSoon
                            title="Companies Management"
                            blurb="Organize and track company information"
                        />
                    }.into_any(),
                    Tab::Calendar => view! {
                        <ComingSoon
                            title="Calendar & Tasks"
                            blurb="Schedule meetings and manage tasks"
                        />
                    }.into_any(),
                    Tab::Email => view! {
                        <ComingSoon
                            title="Email Integration"
                            blurb="Manage email campaigns and communication"
                        />
                    }.into_any(),
                    Tab::Settings => view! {
                        <ComingSoon
                            title="Settings"
                            blurb="Configure your CRM preferences"
                        />
                    }.into_any(),
                }}
            </main>

            <ToastBanner />
        </div>
    }
}
