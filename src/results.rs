//! Results grid
//!
//! Renders the current batch as a grid of cards and handles scrolling when
//! the results pane has focus.

pub mod results_events;
pub mod results_render;

pub use results_render::{CARD_HEIGHT, card_columns, competition_style};
