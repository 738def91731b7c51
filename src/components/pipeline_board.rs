//! Sales Pipeline Board Component
//!
//! Stage stat cards plus the four drag-and-drop stage columns. All board
//! mutation goes through the store helpers; this component only translates
//! gestures into move intents.

use board_dnd::{bind_global_mouseup, create_dnd_signals, DropSlot};
use leptos::prelude::*;

use crate::components::forms::{DealFormDialog, DealFormTarget};
use crate::components::stage_column::StageColumn;
use crate::models::{format_currency, StageId};
use crate::store::{store_move_deal, use_app_store, AppStateStoreFields};

#[component]
pub fn PipelineBoardView() -> impl IntoView {
    let store = use_app_store();
    let dnd = create_dnd_signals();

    // Stage declared by the card under drag; compared against where the deal
    // actually is when the drop lands.
    let (drag_source, set_drag_source) = signal::<Option<StageId>>(None);

    let (form_target, set_form_target) = signal::<Option<DealFormTarget>>(None);

    let on_drop = move |deal_id: u32, slot: DropSlot| {
        let Some(destination) = StageId::from_index(slot.column) else {
            return;
        };
        let Some(source) = drag_source.get_untracked() else {
            return;
        };
        set_drag_source.set(None);

        // Slots are indexed over the list that still shows the dragged card;
        // the board inserts after removal, so shift down when moving within
        // one stage past the card's own position.
        let mut dest_index = slot.index;
        if source == destination {
            if let Some(current) = store
                .board()
                .read_untracked()
                .deals_in(source)
                .iter()
                .position(|d| d.id == deal_id)
            {
                if dest_index > current {
                    dest_index -= 1;
                }
            }
        }

        if !store_move_deal(&store, deal_id, source, destination, dest_index) {
            // Stale drag state: deal is no longer where the gesture started.
            // The board is untouched; just flag it.
            web_sys::console::warn_1(
                &format!(
                    "[BOARD] move ignored: deal {} not in stage {}",
                    deal_id,
                    source.id_str()
                )
                .into(),
            );
        }
    };
    bind_global_mouseup(dnd, on_drop);

    view! {
        <div class="page pipeline-page">
            <div class="page-header">
                <div>
                    <h1 class="page-title">"Sales Pipeline"</h1>
                    <p class="page-subtitle">"Manage deals through your sales process"</p>
                </div>
                <button
                    class="btn btn-primary"
                    on:click=move |_| set_form_target.set(Some(DealFormTarget::Create))
                >
                    "+ Add Deal"
                </button>
            </div>

            // Per-stage totals
            <div class="stat-grid">
                {StageId::ALL.iter().map(|&stage| {
                    let total = move || format_currency(store.board().read().stage_total(stage));
                    let count = move || store.board().read().deal_count(stage);
                    view! {
                        <div class="card stat-card">
                            <div>
                                <p class="stat-label">{stage.label()}</p>
                                <p class="stat-value">{total}</p>
                                <p class="stat-note">{move || format!("{} deals", count())}</p>
                            </div>
                            <div class=format!("stat-icon {}", stage.color())>"📈"</div>
                        </div>
                    }
                }).collect_view()}
            </div>

            // Board columns
            <div class="board-grid">
                {StageId::ALL.iter().map(|&stage| {
                    view! {
                        <StageColumn
                            stage=stage
                            dnd=dnd
                            set_drag_source=set_drag_source
                            set_form_target=set_form_target
                        />
                    }
                }).collect_view()}
            </div>

            {move || form_target.get().map(|target| view! {
                <DealFormDialog
                    target=target
                    on_close=Callback::new(move |_| set_form_target.set(None))
                />
            })}
        </div>
    }
}
