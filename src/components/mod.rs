//! UI Components
//!
//! Leptos components for the dashboard pages.

mod analytics_bars;
mod dashboard;
mod delete_confirm_button;
mod landing;
mod login_form;
mod new_task_form;
mod product_table;
mod sidebar;
mod signup_form;
mod stat_cards;
mod task_panel;
mod task_row;
mod toast_host;

pub use analytics_bars::AnalyticsBars;
pub use dashboard::DashboardPage;
pub use delete_confirm_button::DeleteConfirmButton;
pub use landing::LandingPage;
pub use login_form::LoginPage;
pub use new_task_form::NewTaskForm;
pub use product_table::ProductTable;
pub use sidebar::Sidebar;
pub use signup_form::SignupPage;
pub use stat_cards::StatCards;
pub use task_panel::TaskPanel;
pub use task_row::TaskRow;
pub use toast_host::ToastHost;
