//! Leads Management Component
//!
//! Search and status filtering over the lead list, lead cards with contact
//! details, and the add/edit lead dialog.

use leptos::prelude::*;

use crate::components::delete_confirm_button::DeleteConfirmButton;
use crate::components::forms::{LeadFormDialog, LeadFormTarget};
use crate::context::{use_app_context, ToastSeverity};
use crate::filter::{filter_leads, StatusFilter};
use crate::models::{initials, Lead, LeadStatus};
use crate::store::{store_remove_lead, use_app_store, AppStateStoreFields};

#[component]
fn LeadCard(
    lead: Lead,
    set_form_target: WriteSignal<Option<LeadFormTarget>>,
) -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();
    let id = lead.id;
    let edit_lead = lead.clone();

    view! {
        <div class="card lead-card">
            <div class="lead-card-head">
                <div class="lead-identity">
                    <div class="lead-avatar">{initials(&lead.name)}</div>
                    <div>
                        <h3 class="lead-name">{lead.name.clone()}</h3>
                        <p class="lead-company">{lead.company.clone()}</p>
                    </div>
                </div>
                <div class="lead-score">
                    <span class="score-star">"★"</span>
                    <span>{lead.score}</span>
                </div>
            </div>

            <div class="lead-status-row">
                <span class=lead.status.badge_class()>{lead.status.label()}</span>
                <span class="lead-value">{lead.value.clone()}</span>
            </div>

            <div class="lead-contact">
                <div class="lead-contact-row">
                    <span class="meta-icon">"✉"</span>
                    <span class="truncate">{lead.email.clone()}</span>
                </div>
                <div class="lead-contact-row">
                    <span class="meta-icon">"☎"</span>
                    <span>{lead.phone.clone()}</span>
                </div>
                <div class="lead-contact-row">
                    <span class="meta-icon">"📍"</span>
                    <span>{lead.location.clone()}</span>
                </div>
            </div>

            <div class="lead-footer">
                <span>{format!("Source: {}", lead.source)}</span>
                <span>{format!("Last contact: {}", lead.last_contact)}</span>
            </div>

            <div class="lead-actions">
                <button
                    class="btn btn-outline btn-sm"
                    on:click=move |_| set_form_target.set(Some(LeadFormTarget::Edit(edit_lead.clone())))
                >
                    "Edit"
                </button>
                <DeleteConfirmButton
                    button_class="btn btn-outline btn-sm delete-btn"
                    on_confirm=Callback::new(move |_| {
                        store_remove_lead(&store, id);
                        ctx.notify("Lead deleted.", ToastSeverity::Destructive);
                    })
                />
            </div>
        </div>
    }
}

#[component]
pub fn LeadsView() -> impl IntoView {
    let store = use_app_store();

    let (search, set_search) = signal(String::new());
    let (status_filter, set_status_filter) = signal(StatusFilter::All);
    let (form_target, set_form_target) = signal::<Option<LeadFormTarget>>(None);

    let filtered = move || {
        filter_leads(&store.leads().get(), &search.get(), status_filter.get())
    };

    view! {
        <div class="page leads-page">
            <div class="page-header">
                <div>
                    <h1 class="page-title">"Leads Management"</h1>
                    <p class="page-subtitle">"Manage and track your sales leads"</p>
                </div>
                <button
                    class="btn btn-primary"
                    on:click=move |_| set_form_target.set(Some(LeadFormTarget::Create))
                >
                    "+ Add Lead"
                </button>
            </div>

            <div class="card filter-bar">
                <input
                    type="text"
                    class="search-input"
                    placeholder="Search leads..."
                    prop:value=move || search.get()
                    on:input=move |ev| set_search.set(event_target_value(&ev))
                />
                <select
                    class="status-select"
                    on:change=move |ev| {
                        set_status_filter.set(StatusFilter::from_select_value(&event_target_value(&ev)))
                    }
                >
                    <option value="all">"All Status"</option>
                    {LeadStatus::ALL.iter().map(|&status| view! {
                        <option value=status.id_str()>{status.label()}</option>
                    }).collect_view()}
                </select>
            </div>

            <div class="lead-grid">
                {move || filtered().into_iter().map(|lead| view! {
                    <LeadCard lead=lead set_form_target=set_form_target />
                }).collect_view()}
            </div>

            {move || {
                if filtered().is_empty() {
                    Some(view! { <p class="empty-message">"No leads match the current filters"</p> })
                } else {
                    None
                }
            }}

            <div class="stat-grid">
                <div class="card stat-card centered">
                    <div class="stat-value stage-blue-text">"156"</div>
                    <div class="stat-label">"Total Leads"</div>
                </div>
                <div class="card stat-card centered">
                    <div class="stat-value stage-green-text">"42"</div>
                    <div class="stat-label">"Qualified"</div>
                </div>
                <div class="card stat-card centered">
                    <div class="stat-value stage-orange-text">"28"</div>
                    <div class="stat-label">"In Progress"</div>
                </div>
                <div class="card stat-card centered">
                    <div class="stat-value stage-purple-text">"86"</div>
                    <div class="stat-label">"Avg. Score"</div>
                </div>
            </div>

            {move || form_target.get().map(|target| view! {
                <LeadFormDialog
                    target=target
                    on_close=Callback::new(move |_| set_form_target.set(None))
                />
            })}
        </div>
    }
}
