//! keyscout: a keyword research mock with a terminal UI
//!
//! Type a keyword, press Enter, and after a short delay a grid of twenty
//! generated keyword ideas appears, each with a search volume and a
//! color-coded competition level. All data is synthesized locally.

pub mod app;
pub mod config;
pub mod error;
pub mod headless;
pub mod help;
pub mod input;
pub mod logging;
pub mod research;
pub mod results;
pub mod scroll;
pub mod search;
pub mod widgets;

mod test_utils;
