//! Stage Column Component
//!
//! One pipeline stage: header with color dot and count badge, drop slots
//! between cards, and a tail slot for appending.

use board_dnd::{make_on_mouseleave, make_on_slot_mouseenter, DndSignals, DropSlot};
use leptos::prelude::*;

use crate::components::deal_card::DealCard;
use crate::components::forms::DealFormTarget;
use crate::models::StageId;
use crate::store::{use_app_store, AppStateStoreFields};

/// Thin drop indicator shown between cards while a drag is active
#[component]
fn DropSlotBar(dnd: DndSignals, column: usize, index: usize) -> impl IntoView {
    let is_active = move || {
        dnd.drop_slot_read.get() == Some(DropSlot { column, index })
    };
    let is_visible = move || dnd.dragging_id_read.get().is_some();

    view! {
        <div
            class=move || {
                let mut c = "drop-slot".to_string();
                if is_active() { c.push_str(" active"); }
                if !is_visible() { c.push_str(" hidden"); }
                c
            }
            on:mouseenter=make_on_slot_mouseenter(dnd, column, index)
            on:mouseleave=make_on_mouseleave(dnd)
        />
    }
}

#[component]
pub fn StageColumn(
    stage: StageId,
    dnd: DndSignals,
    set_drag_source: WriteSignal<Option<StageId>>,
    set_form_target: WriteSignal<Option<DealFormTarget>>,
) -> impl IntoView {
    let store = use_app_store();
    let column = stage.index();

    let deals = move || store.board().read().deals_in(stage).to_vec();
    let count = move || store.board().read().deal_count(stage);

    view! {
        <div class="stage-column">
            <div class="stage-header">
                <span class=format!("stage-dot {}", stage.color())></span>
                <h3 class="stage-title">{stage.label()}</h3>
                <span class="badge badge-count">{count}</span>
            </div>

            <div
                class=move || {
                    if dnd.dragging_id_read.get().is_some() {
                        "stage-drop-area dragging"
                    } else {
                        "stage-drop-area"
                    }
                }
            >
                // Re-render the whole column on change so slot indices stay
                // in step with the current order
                {move || deals().into_iter().enumerate().map(|(index, deal)| {
                    view! {
                        <DropSlotBar dnd=dnd column=column index=index />
                        <DealCard
                            deal=deal
                            stage=stage
                            dnd=dnd
                            set_drag_source=set_drag_source
                            set_form_target=set_form_target
                        />
                    }
                }).collect_view()}
                // Tail slot: append at the end of this stage
                <DropSlotBar dnd=dnd column=column index=usize::MAX />
            </div>
        </div>
    }
}
