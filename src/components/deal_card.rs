//! Deal Card Component
//!
//! Draggable card showing one deal: title, company, value, probability,
//! contact and close date, with edit/delete actions.

use board_dnd::{make_on_mousedown, DndSignals};
use leptos::prelude::*;

use crate::components::delete_confirm_button::DeleteConfirmButton;
use crate::components::forms::DealFormTarget;
use crate::context::{use_app_context, ToastSeverity};
use crate::models::{format_currency, Deal, StageId};
use crate::store::{store_remove_deal, use_app_store};

/// Format an ISO date for display via the browser locale
fn format_close_date(iso: &str) -> String {
    let parsed = js_sys::Date::new(&iso.into());
    if parsed.get_time().is_nan() {
        return iso.to_string();
    }
    parsed.to_locale_date_string("en-US", &wasm_bindgen::JsValue::UNDEFINED).into()
}

#[component]
pub fn DealCard(
    deal: Deal,
    stage: StageId,
    dnd: DndSignals,
    set_drag_source: WriteSignal<Option<StageId>>,
    set_form_target: WriteSignal<Option<DealFormTarget>>,
) -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();
    let id = deal.id;

    let is_dragging = move || dnd.dragging_id_read.get() == Some(id);

    let on_card_mousedown = make_on_mousedown(dnd, id);
    let edit_deal = deal.clone();

    view! {
        <div
            class=move || if is_dragging() { "card deal-card dragging" } else { "card deal-card" }
            on:mousedown=move |ev| {
                set_drag_source.set(Some(stage));
                on_card_mousedown(ev);
            }
        >
            <div class="deal-card-head">
                <div>
                    <h4 class="deal-title">{deal.title.clone()}</h4>
                    <p class="deal-company">{deal.company.clone()}</p>
                </div>
                <div class="deal-actions">
                    <button
                        class="icon-btn"
                        on:click=move |ev| {
                            ev.stop_propagation();
                            set_form_target.set(Some(DealFormTarget::Edit(edit_deal.clone())));
                        }
                    >
                        "✎"
                    </button>
                    <DeleteConfirmButton
                        button_class="icon-btn delete-btn"
                        on_confirm=Callback::new(move |_| {
                            if store_remove_deal(&store, id) {
                                ctx.notify("Deal deleted.", ToastSeverity::Destructive);
                            }
                        })
                    />
                </div>
            </div>

            <div class="deal-value-row">
                <span class="deal-value">{format_currency(deal.value)}</span>
                <span class="badge badge-outline">{format!("{}%", deal.probability)}</span>
            </div>

            <div class="progress">
                <div
                    class="progress-fill"
                    style=format!("width: {}%;", deal.probability)
                ></div>
            </div>

            <div class="deal-meta">
                <div class="deal-meta-row">
                    <span class="meta-icon">"👤"</span>
                    <span>{deal.contact.clone()}</span>
                </div>
                <div class="deal-meta-row">
                    <span class="meta-icon">"📅"</span>
                    <span>{format_close_date(&deal.close_date)}</span>
                </div>
            </div>
        </div>
    }
}
