//! Help line and keyboard shortcut popup

mod help_content;
pub mod help_line_render;
pub mod help_popup_render;
mod help_state;

pub use help_content::{HELP_ENTRIES, HELP_FOOTER};
pub use help_state::HelpPopupState;
