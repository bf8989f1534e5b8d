pub mod header;
pub mod loading_overlay;
pub mod toast_overlay;
pub mod user_form;
pub mod users_table;

pub use header::view_header;
pub use loading_overlay::view_loading_overlay;
pub use toast_overlay::view_toast_overlay;
pub use user_form::view_user_form;
pub use users_table::view_users_table;
