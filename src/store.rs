//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Components never
//! mutate board or lead state directly; they go through the store_* helpers
//! below, which are the only writers.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{DealDraft, Lead, LeadDraft, StageId};
use crate::pipeline::PipelineBoard;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// The pipeline board, owning all deals
    pub board: PipelineBoard,
    /// All leads
    pub leads: Vec<Lead>,
    /// Next fresh lead id
    pub next_lead_id: u32,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            board: PipelineBoard::with_sample_deals(),
            leads: crate::models::sample_leads(),
            next_lead_id: 5,
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Move a deal between stages (or within one). Returns false when the deal
/// is not in the declared source stage; the board is untouched then.
pub fn store_move_deal(
    store: &AppStore,
    deal_id: u32,
    source: StageId,
    destination: StageId,
    dest_index: usize,
) -> bool {
    store.board().write().move_deal(deal_id, source, destination, dest_index)
}

/// Add a deal from a validated draft; returns the fresh id
pub fn store_add_deal(store: &AppStore, draft: DealDraft) -> u32 {
    store.board().write().add_deal(draft)
}

/// Update a deal's fields in place (stage membership unchanged)
pub fn store_update_deal(store: &AppStore, deal_id: u32, draft: DealDraft) -> bool {
    store.board().write().update_deal(deal_id, draft)
}

/// Remove a deal from the board by ID
pub fn store_remove_deal(store: &AppStore, deal_id: u32) -> bool {
    store.board().write().remove_deal(deal_id)
}

/// Add a lead from a validated draft; returns the fresh id
pub fn store_add_lead(store: &AppStore, draft: LeadDraft) -> u32 {
    let id = store.next_lead_id().get_untracked();
    store.next_lead_id().set(id + 1);
    store.leads().write().push(Lead {
        id,
        name: draft.name,
        company: draft.company,
        email: draft.email,
        phone: draft.phone,
        location: draft.location,
        status: draft.status,
        score: draft.score,
        source: draft.source,
        value: draft.value,
        last_contact: "Just now".to_string(),
    });
    id
}

/// Update a lead in the store by ID
pub fn store_update_lead(store: &AppStore, lead_id: u32, draft: LeadDraft) {
    if let Some(lead) = store.leads().write().iter_mut().find(|lead| lead.id == lead_id) {
        lead.name = draft.name;
        lead.company = draft.company;
        lead.email = draft.email;
        lead.phone = draft.phone;
        lead.location = draft.location;
        lead.status = draft.status;
        lead.score = draft.score;
        lead.source = draft.source;
        lead.value = draft.value;
    }
}

/// Remove a lead from the store by ID
pub fn store_remove_lead(store: &AppStore, lead_id: u32) {
    store.leads().write().retain(|lead| lead.id != lead_id);
}
