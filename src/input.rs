pub mod input_render;
mod input_state;

pub use input_state::InputState;

pub const PLACEHOLDER: &str = "Enter a keyword or phrase...";
