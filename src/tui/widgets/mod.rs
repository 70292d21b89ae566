//! TUI Widgets

mod records;
mod toast;
mod upload_form;

pub use records::{record_line_count, record_lines, render_records};
pub use toast::render_toasts;
pub use upload_form::render_upload_form;
