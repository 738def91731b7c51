//! Form Dialogs
//!
//! Modal create/edit forms for deals and leads. Validation happens before
//! any state mutation; a rejected form never produces a partial record.

mod deal_form;
mod lead_form;

pub use deal_form::{DealFormDialog, DealFormTarget};
pub use lead_form::{LeadFormDialog, LeadFormTarget};
