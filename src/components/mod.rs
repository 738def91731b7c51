//! UI Components
//!
//! Reusable Leptos components.

mod dashboard;
mod deal_card;
mod delete_confirm_button;
mod forms;
mod leads_view;
mod pipeline_board;
mod placeholder;
mod reports;
mod sidebar;
mod stage_column;
mod toast;

pub use dashboard::Dashboard;
pub use deal_card::DealCard;
pub use delete_confirm_button::DeleteConfirmButton;
pub use forms::{DealFormDialog, LeadFormDialog};
pub use leads_view::LeadsView;
pub use pipeline_board::PipelineBoardView;
pub use placeholder::ComingSoon;
pub use reports::Reports;
pub use sidebar::Sidebar;
pub use stage_column::StageColumn;
pub use toast::ToastBanner;
