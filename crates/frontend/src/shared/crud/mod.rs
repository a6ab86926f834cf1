//! Generic list / form / table building blocks instantiated per resource.

pub mod delete_confirm;
pub mod form_state;
pub mod form_view;
pub mod form_view_model;
pub mod list_state;
pub mod list_view_model;
pub mod options;
pub mod page;
pub mod sequence;
pub mod table;

pub use delete_confirm::{use_delete_confirm, DeleteConfirmService};
pub use form_state::FormMode;
pub use form_view::{FieldsView, ResourceForm};
pub use form_view_model::FormViewModel;
pub use list_view_model::ListViewModel;
pub use page::{CrudPage, Pane, PageState};
pub use table::{counted, status_cell, text_cell, Column, ResourceTable};
