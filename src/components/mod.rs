//! UI Components
//!
//! Reusable Leptos components and page views.

mod branch_tree_view;
mod confirm_dialog;
mod date_fields;
mod dynamic_form;
mod field_inputs;
mod layout;
mod login_page;
mod pagination;
mod signature_field;
mod snackbar;
mod task_admin_page;
mod task_form;
mod task_preview;
mod tree_admin_page;
mod tree_select;

pub use branch_tree_view::BranchTreeView;
pub use confirm_dialog::ConfirmDialog;
pub use dynamic_form::{DynamicForm, FieldConfig};
pub use layout::Layout;
pub use login_page::LoginPage;
pub use snackbar::SnackbarHost;
pub use task_admin_page::TaskAdminPage;
pub use task_preview::TaskPreview;
pub use tree_admin_page::TreeAdminPage;
