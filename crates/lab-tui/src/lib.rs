//! Terminal UI for the Analysis Lab.
//!
//! Renders the engine's session state with ratatui, maps key presses to
//! intents, and plays cue sounds through the terminal bell.

pub mod app;
pub mod sound;
pub mod terminal;
pub mod views;
