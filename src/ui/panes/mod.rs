//! TUI pane rendering modules
//!
//! Each pane module exports a primary `render_*` function that draws from
//! borrowed app state and keeps no state of its own.
//!
//! # Pane Modules
//!
//! - [`visualizer`]: the sequence as bars, circles or squares, highlighted by step
//! - [`input`]: text entry for user sequences and validation errors
//! - [`info`]: algorithm description, complexity and live counters
//! - [`status`]: status bar with keybindings and playback state

pub mod info;
pub mod input;
pub mod status;
pub mod visualizer;

// Re-export render functions for convenience
pub use info::{render_info_pane, INFO_PANE_HEIGHT};
pub use input::{input_pane_height, render_input_pane, InputRenderData};
pub use status::{render_status_bar, StatusRenderData};
pub use visualizer::{render_visualizer_pane, VisualizerRenderData};
