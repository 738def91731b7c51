//! Lead Form Dialog
//!
//! Modal for creating or editing a lead, mirroring the deal form: validate
//! first, then the simulated submit delay, then the store mutation.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::{use_app_context, ToastSeverity};
use crate::models::{Lead, LeadDraft, LeadStatus, LEAD_SOURCES};
use crate::store::{store_add_lead, store_update_lead, use_app_store};

const SUBMIT_DELAY_MS: u32 = 1000;

/// What the dialog edits
#[derive(Clone, Debug, PartialEq)]
pub enum LeadFormTarget {
    Create,
    Edit(Lead),
}

/// Field-level validation errors
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LeadFormErrors {
    pub name: Option<String>,
    pub company: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub value: Option<String>,
}

impl LeadFormErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.company.is_none()
            && self.email.is_none()
            && self.phone.is_none()
            && self.location.is_none()
            && self.value.is_none()
    }
}

/// Shape check equivalent to /\S+@\S+\.\S+/: something before the @,
/// a domain with a dot and something after it, no whitespace.
fn email_looks_valid(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

pub fn validate_lead(
    name: &str,
    company: &str,
    email: &str,
    phone: &str,
    location: &str,
    value: &str,
) -> LeadFormErrors {
    let mut errors = LeadFormErrors::default();
    if name.trim().is_empty() {
        errors.name = Some("Name is required".to_string());
    }
    if company.trim().is_empty() {
        errors.company = Some("Company is required".to_string());
    }
    if email.trim().is_empty() {
        errors.email = Some("Email is required".to_string());
    } else if !email_looks_valid(email.trim()) {
        errors.email = Some("Email is invalid".to_string());
    }
    if phone.trim().is_empty() {
        errors.phone = Some("Phone is required".to_string());
    }
    if location.trim().is_empty() {
        errors.location = Some("Location is required".to_string());
    }
    if value.trim().is_empty() {
        errors.value = Some("Deal value is required".to_string());
    }
    errors
}

#[component]
pub fn LeadFormDialog(
    target: LeadFormTarget,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();

    let edit_id = match &target {
        LeadFormTarget::Create => None,
        LeadFormTarget::Edit(lead) => Some(lead.id),
    };
    let initial = match &target {
        LeadFormTarget::Create => LeadDraft::default(),
        LeadFormTarget::Edit(lead) => LeadDraft {
            name: lead.name.clone(),
            company: lead.company.clone(),
            email: lead.email.clone(),
            phone: lead.phone.clone(),
            location: lead.location.clone(),
            status: lead.status,
            score: lead.score,
            source: lead.source.clone(),
            value: lead.value.clone(),
        },
    };

    let (name, set_name) = signal(initial.name.clone());
    let (company, set_company) = signal(initial.company.clone());
    let (email, set_email) = signal(initial.email.clone());
    let (phone, set_phone) = signal(initial.phone.clone());
    let (location, set_location) = signal(initial.location.clone());
    let (status, set_status) = signal(initial.status);
    let (score, set_score) = signal(initial.score.to_string());
    let (source, set_source) = signal(initial.source.clone());
    let (value, set_value) = signal(initial.value.clone());

    let (errors, set_errors) = signal(LeadFormErrors::default());
    let (saving, set_saving) = signal(false);

    let is_edit = edit_id.is_some();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if saving.get_untracked() {
            return;
        }

        let found = validate_lead(
            &name.get_untracked(),
            &company.get_untracked(),
            &email.get_untracked(),
            &phone.get_untracked(),
            &location.get_untracked(),
            &value.get_untracked(),
        );
        if !found.is_empty() {
            set_errors.set(found);
            return;
        }
        set_errors.set(LeadFormErrors::default());
        set_saving.set(true);

        let draft = LeadDraft {
            name: name.get_untracked(),
            company: company.get_untracked(),
            email: email.get_untracked(),
            phone: phone.get_untracked(),
            location: location.get_untracked(),
            status: status.get_untracked(),
            score: score.get_untracked().trim().parse::<i32>().unwrap_or(0).clamp(0, 100) as u8,
            source: source.get_untracked(),
            value: value.get_untracked(),
        };

        spawn_local(async move {
            TimeoutFuture::new(SUBMIT_DELAY_MS).await;
            match edit_id {
                Some(id) => {
                    store_update_lead(&store, id, draft);
                    ctx.notify("Lead updated successfully.", ToastSeverity::Default);
                }
                None => {
                    store_add_lead(&store, draft);
                    ctx.notify("New lead added successfully.", ToastSeverity::Default);
                }
            }
            set_saving.set(false);
            on_close.run(());
        });
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2 class="dialog-title">
                    {if is_edit { "Edit Lead" } else { "Add New Lead" }}
                </h2>

                <form class="form" on:submit=on_submit>
                    <div class="form-row">
                        <div class="form-field">
                            <label for="lead-name">"Name *"</label>
                            <input
                                id="lead-name"
                                type="text"
                                placeholder="Sarah Johnson"
                                prop:value=move || name.get()
                                on:input=move |ev| {
                                    set_name.set(event_target_value(&ev));
                                    set_errors.update(|e| e.name = None);
                                }
                            />
                            {move || errors.get().name.map(|msg| view! {
                                <p class="field-error">{msg}</p>
                            })}
                        </div>
                        <div class="form-field">
                            <label for="lead-company">"Company *"</label>
                            <input
                                id="lead-company"
                                type="text"
                                placeholder="TechStart Inc"
                                prop:value=move || company.get()
                                on:input=move |ev| {
                                    set_company.set(event_target_value(&ev));
                                    set_errors.update(|e| e.company = None);
                                }
                            />
                            {move || errors.get().company.map(|msg| view! {
                                <p class="field-error">{msg}</p>
                            })}
                        </div>
                    </div>

                    <div class="form-row">
                        <div class="form-field">
                            <label for="lead-email">"Email *"</label>
                            <input
                                id="lead-email"
                                type="email"
                                placeholder="sarah@techstart.com"
                                prop:value=move || email.get()
                                on:input=move |ev| {
                                    set_email.set(event_target_value(&ev));
                                    set_errors.update(|e| e.email = None);
                                }
                            />
                            {move || errors.get().email.map(|msg| view! {
                                <p class="field-error">{msg}</p>
                            })}
                        </div>
                        <div class="form-field">
                            <label for="lead-phone">"Phone *"</label>
                            <input
                                id="lead-phone"
                                type="text"
                                placeholder="+1 (555) 123-4567"
                                prop:value=move || phone.get()
                                on:input=move |ev| {
                                    set_phone.set(event_target_value(&ev));
                                    set_errors.update(|e| e.phone = None);
                                }
                            />
                            {move || errors.get().phone.map(|msg| view! {
                                <p class="field-error">{msg}</p>
                            })}
                        </div>
                    </div>

                    <div class="form-row">
                        <div class="form-field">
                            <label for="lead-location">"Location *"</label>
                            <input
                                id="lead-location"
                                type="text"
                                placeholder="San Francisco, CA"
                                prop:value=move || location.get()
                                on:input=move |ev| {
                                    set_location.set(event_target_value(&ev));
                                    set_errors.update(|e| e.location = None);
                                }
                            />
                            {move || errors.get().location.map(|msg| view! {
                                <p class="field-error">{msg}</p>
                            })}
                        </div>
                        <div class="form-field">
                            <label for="lead-value">"Deal Value *"</label>
                            <input
                                id="lead-value"
                                type="text"
                                placeholder="$45,000"
                                prop:value=move || value.get()
                                on:input=move |ev| {
                                    set_value.set(event_target_value(&ev));
                                    set_errors.update(|e| e.value = None);
                                }
                            />
                            {move || errors.get().value.map(|msg| view! {
                                <p class="field-error">{msg}</p>
                            })}
                        </div>
                    </div>

                    <div class="form-row">
                        <div class="form-field">
                            <label for="lead-status">"Status"</label>
                            <select
                                id="lead-status"
                                on:change=move |ev| {
                                    if let Some(selected) = LeadStatus::from_id_str(&event_target_value(&ev)) {
                                        set_status.set(selected);
                                    }
                                }
                            >
                                {LeadStatus::ALL.iter().map(|&option| view! {
                                    <option
                                        value=option.id_str()
                                        selected=move || status.get() == option
                                    >
                                        {option.label()}
                                    </option>
                                }).collect_view()}
                            </select>
                        </div>
                        <div class="form-field">
                            <label for="lead-source">"Source"</label>
                            <select
                                id="lead-source"
                                on:change=move |ev| set_source.set(event_target_value(&ev))
                            >
                                {LEAD_SOURCES.iter().map(|&option| view! {
                                    <option
                                        value=option
                                        selected=move || source.get() == option
                                    >
                                        {option}
                                    </option>
                                }).collect_view()}
                            </select>
                        </div>
                    </div>

                    <div class="form-field">
                        <label for="lead-score">"Score (0-100)"</label>
                        <input
                            id="lead-score"
                            type="number"
                            min="0"
                            max="100"
                            prop:value=move || score.get()
                            on:input=move |ev| set_score.set(event_target_value(&ev))
                        />
                    </div>

                    <div class="dialog-actions">
                        <button type="submit" class="btn btn-primary" disabled=move || saving.get()>
                            {move || if saving.get() {
                                "Loading...".to_string()
                            } else if is_edit {
                                "Update Lead".to_string()
                            } else {
                                "Save Lead".to_string()
                            }}
                        </button>
                        <button type="button" class="btn btn-outline" on:click=move |_| on_close.run(())>
                            "Cancel"
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_shapes() {
        assert!(email_looks_valid("sarah@techstart.com"));
        assert!(email_looks_valid("m.chen@globalsol.com"));
        assert!(!email_looks_valid("sarah"));
        assert!(!email_looks_valid("sarah@techstart"));
        assert!(!email_looks_valid("@techstart.com"));
        assert!(!email_looks_valid("sarah smith@techstart.com"));
    }

    #[test]
    fn test_required_fields() {
        let errors = validate_lead("", "", "", "", "", "");
        assert!(errors.name.is_some());
        assert!(errors.company.is_some());
        assert!(errors.email.is_some());
        assert!(errors.phone.is_some());
        assert!(errors.location.is_some());
        assert!(errors.value.is_some());
    }

    #[test]
    fn test_malformed_email_rejected() {
        let errors = validate_lead(
            "Sarah Johnson",
            "TechStart Inc",
            "not-an-email",
            "+1 (555) 123-4567",
            "San Francisco, CA",
            "$45,000",
        );
        assert_eq!(errors.email.as_deref(), Some("Email is invalid"));
        assert!(errors.name.is_none());
    }

    #[test]
    fn test_complete_lead_passes() {
        let errors = validate_lead(
            "Sarah Johnson",
            "TechStart Inc",
            "sarah@techstart.com",
            "+1 (555) 123-4567",
            "San Francisco, CA",
            "$45,000",
        );
        assert!(errors.is_empty());
    }
}
