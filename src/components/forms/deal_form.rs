//! Deal Form Dialog
//!
//! Modal for creating or editing a deal. Field-level validation blocks
//! submission; the submit path simulates a short network delay before the
//! mutation is applied and the success toast is shown.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::{use_app_context, ToastSeverity};
use crate::models::{Deal, DealDraft, StageId};
use crate::store::{store_add_deal, store_update_deal, use_app_store, AppStateStoreFields};

/// Simulated submit latency, purely for the loading indicator
const SUBMIT_DELAY_MS: u32 = 1000;

/// What the dialog edits
#[derive(Clone, Debug, PartialEq)]
pub enum DealFormTarget {
    Create,
    Edit(Deal),
}

/// Field-level validation errors
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DealFormErrors {
    pub title: Option<String>,
    pub company: Option<String>,
    pub value: Option<String>,
    pub probability: Option<String>,
    pub close_date: Option<String>,
    pub contact: Option<String>,
}

impl DealFormErrors {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.company.is_none()
            && self.value.is_none()
            && self.probability.is_none()
            && self.close_date.is_none()
            && self.contact.is_none()
    }
}

/// Validate raw form fields. `probability` is the raw parsed integer so an
/// out-of-range entry is still representable here.
pub fn validate_deal(
    title: &str,
    company: &str,
    value: f64,
    probability: i32,
    close_date: &str,
    contact: &str,
) -> DealFormErrors {
    let mut errors = DealFormErrors::default();
    if title.trim().is_empty() {
        errors.title = Some("Deal title is required".to_string());
    }
    if company.trim().is_empty() {
        errors.company = Some("Company is required".to_string());
    }
    if value <= 0.0 {
        errors.value = Some("Deal value must be greater than 0".to_string());
    }
    if close_date.is_empty() {
        errors.close_date = Some("Close date is required".to_string());
    }
    if contact.trim().is_empty() {
        errors.contact = Some("Contact person is required".to_string());
    }
    if !(0..=100).contains(&probability) {
        errors.probability = Some("Probability must be between 0 and 100".to_string());
    }
    errors
}

#[component]
pub fn DealFormDialog(
    target: DealFormTarget,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();

    let edit_id = match &target {
        DealFormTarget::Create => None,
        DealFormTarget::Edit(deal) => Some(deal.id),
    };
    let initial = match &target {
        DealFormTarget::Create => DealDraft {
            probability: 50,
            stage: Some(StageId::Qualified),
            ..Default::default()
        },
        DealFormTarget::Edit(deal) => DealDraft {
            title: deal.title.clone(),
            company: deal.company.clone(),
            value: deal.value,
            probability: deal.probability,
            close_date: deal.close_date.clone(),
            contact: deal.contact.clone(),
            stage: store
                .board()
                .read_untracked()
                .find_deal(deal.id)
                .map(|(stage, _)| stage),
            description: deal.description.clone(),
            notes: deal.notes.clone(),
        },
    };

    let (title, set_title) = signal(initial.title.clone());
    let (company, set_company) = signal(initial.company.clone());
    let (value, set_value) = signal(if initial.value > 0.0 {
        initial.value.to_string()
    } else {
        String::new()
    });
    let (probability, set_probability) = signal(initial.probability.to_string());
    let (close_date, set_close_date) = signal(initial.close_date.clone());
    let (contact, set_contact) = signal(initial.contact.clone());
    let (stage, set_stage) = signal(initial.stage.unwrap_or(StageId::Qualified));
    let (description, set_description) = signal(initial.description.clone());
    let (notes, set_notes) = signal(initial.notes.clone());

    let (errors, set_errors) = signal(DealFormErrors::default());
    let (saving, set_saving) = signal(false);

    let is_edit = edit_id.is_some();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if saving.get_untracked() {
            return;
        }

        let parsed_value = value.get_untracked().trim().parse::<f64>().unwrap_or(0.0);
        let parsed_probability = probability.get_untracked().trim().parse::<i32>().unwrap_or(0);

        let found = validate_deal(
            &title.get_untracked(),
            &company.get_untracked(),
            parsed_value,
            parsed_probability,
            &close_date.get_untracked(),
            &contact.get_untracked(),
        );
        if !found.is_empty() {
            set_errors.set(found);
            return;
        }
        set_errors.set(DealFormErrors::default());
        set_saving.set(true);

        let draft = DealDraft {
            title: title.get_untracked(),
            company: company.get_untracked(),
            value: parsed_value,
            probability: parsed_probability as u8,
            close_date: close_date.get_untracked(),
            contact: contact.get_untracked(),
            stage: Some(stage.get_untracked()),
            description: description.get_untracked(),
            notes: notes.get_untracked(),
        };

        spawn_local(async move {
            TimeoutFuture::new(SUBMIT_DELAY_MS).await;
            match edit_id {
                Some(id) => {
                    store_update_deal(&store, id, draft);
                    ctx.notify("Deal updated successfully.", ToastSeverity::Default);
                }
                None => {
                    store_add_deal(&store, draft);
                    ctx.notify("New deal added successfully.", ToastSeverity::Default);
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
                    {if is_edit { "Edit Deal" } else { "Add New Deal" }}
                </h2>

                <form class="form" on:submit=on_submit>
                    <div class="form-row">
                        <div class="form-field">
                            <label for="deal-title">"Deal Title *"</label>
                            <input
                                id="deal-title"
                                type="text"
                                placeholder="Enterprise Software License"
                                prop:value=move || title.get()
                                on:input=move |ev| {
                                    set_title.set(event_target_value(&ev));
                                    set_errors.update(|e| e.title = None);
                                }
                            />
                            {move || errors.get().title.map(|msg| view! {
                                <p class="field-error">{msg}</p>
                            })}
                        </div>
                        <div class="form-field">
                            <label for="deal-company">"Company *"</label>
                            <input
                                id="deal-company"
                                type="text"
                                placeholder="Acme Corp"
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
                            <label for="deal-value">"Deal Value ($) *"</label>
                            <input
                                id="deal-value"
                                type="number"
                                placeholder="50000"
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
                        <div class="form-field">
                            <label for="deal-probability">"Probability (%) *"</label>
                            <input
                                id="deal-probability"
                                type="number"
                                min="0"
                                max="100"
                                placeholder="75"
                                prop:value=move || probability.get()
                                on:input=move |ev| {
                                    set_probability.set(event_target_value(&ev));
                                    set_errors.update(|e| e.probability = None);
                                }
                            />
                            {move || errors.get().probability.map(|msg| view! {
                                <p class="field-error">{msg}</p>
                            })}
                        </div>
                    </div>

                    <div class="form-row">
                        <div class="form-field">
                            <label for="deal-contact">"Contact Person *"</label>
                            <input
                                id="deal-contact"
                                type="text"
                                placeholder="John Smith"
                                prop:value=move || contact.get()
                                on:input=move |ev| {
                                    set_contact.set(event_target_value(&ev));
                                    set_errors.update(|e| e.contact = None);
                                }
                            />
                            {move || errors.get().contact.map(|msg| view! {
                                <p class="field-error">{msg}</p>
                            })}
                        </div>
                        <div class="form-field">
                            <label for="deal-close-date">"Expected Close Date *"</label>
                            <input
                                id="deal-close-date"
                                type="date"
                                prop:value=move || close_date.get()
                                on:input=move |ev| {
                                    set_close_date.set(event_target_value(&ev));
                                    set_errors.update(|e| e.close_date = None);
                                }
                            />
                            {move || errors.get().close_date.map(|msg| view! {
                                <p class="field-error">{msg}</p>
                            })}
                        </div>
                    </div>

                    <div class="form-field">
                        <label for="deal-stage">"Deal Stage"</label>
                        <select
                            id="deal-stage"
                            on:change=move |ev| {
                                if let Some(selected) = StageId::from_id_str(&event_target_value(&ev)) {
                                    set_stage.set(selected);
                                }
                            }
                        >
                            {StageId::ALL.iter().map(|&option| view! {
                                <option
                                    value=option.id_str()
                                    selected=move || stage.get() == option
                                >
                                    {option.label()}
                                </option>
                            }).collect_view()}
                        </select>
                    </div>

                    <div class="form-field">
                        <label for="deal-description">"Description"</label>
                        <textarea
                            id="deal-description"
                            rows="2"
                            placeholder="Brief description of the deal..."
                            prop:value=move || description.get()
                            on:input=move |ev| set_description.set(event_target_value(&ev))
                        ></textarea>
                    </div>

                    <div class="form-field">
                        <label for="deal-notes">"Notes"</label>
                        <textarea
                            id="deal-notes"
                            rows="3"
                            placeholder="Additional notes about this deal..."
                            prop:value=move || notes.get()
                            on:input=move |ev| set_notes.set(event_target_value(&ev))
                        ></textarea>
                    </div>

                    <div class="dialog-actions">
                        <button type="submit" class="btn btn-primary" disabled=move || saving.get()>
                            {move || if saving.get() {
                                "Loading...".to_string()
                            } else if is_edit {
                                "Update Deal".to_string()
                            } else {
                                "Save Deal".to_string()
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
    use crate::pipeline::PipelineBoard;

    fn valid_fields() -> (String, String, f64, i32, String, String) {
        (
            "CRM Implementation".to_string(),
            "StartupXYZ".to_string(),
            45000.0,
            60,
            "2024-01-30".to_string(),
            "Emily Rodriguez".to_string(),
        )
    }

    #[test]
    fn test_valid_fields_pass() {
        let (title, company, value, probability, close_date, contact) = valid_fields();
        let errors = validate_deal(&title, &company, value, probability, &close_date, &contact);
        assert!(errors.is_empty());
    }

    #[test]
    fn test_required_fields() {
        let errors = validate_deal("", "  ", 1000.0, 50, "", "");
        assert!(errors.title.is_some());
        assert!(errors.company.is_some());
        assert!(errors.close_date.is_some());
        assert!(errors.contact.is_some());
        assert!(errors.value.is_none());
    }

    #[test]
    fn test_probability_range() {
        let (title, company, value, _, close_date, contact) = valid_fields();
        let errors = validate_deal(&title, &company, value, 101, &close_date, &contact);
        assert!(errors.probability.is_some());
        let errors = validate_deal(&title, &company, value, -1, &close_date, &contact);
        assert!(errors.probability.is_some());
        let errors = validate_deal(&title, &company, value, 0, &close_date, &contact);
        assert!(errors.probability.is_none());
    }

    #[test]
    fn test_zero_value_rejected_then_corrected() {
        let (title, company, _, probability, close_date, contact) = valid_fields();
        let mut board = PipelineBoard::new();

        // value = 0 is rejected; nothing is mutated
        let errors = validate_deal(&title, &company, 0.0, probability, &close_date, &contact);
        assert!(errors.value.is_some());
        assert_eq!(board.deal_count(crate::models::StageId::Qualified), 0);

        // corrected to 1, the submit applies exactly one record
        let errors = validate_deal(&title, &company, 1.0, probability, &close_date, &contact);
        assert!(errors.is_empty());
        board.add_deal(DealDraft {
            title,
            company,
            value: 1.0,
            probability: probability as u8,
            close_date,
            contact,
            stage: None,
            ..Default::default()
        });
        assert_eq!(board.deal_count(crate::models::StageId::Qualified), 1);
        assert_eq!(board.stage_total(crate::models::StageId::Qualified), 1.0);
    }
}
