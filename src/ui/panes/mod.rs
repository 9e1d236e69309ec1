//! TUI pane rendering modules
//!
//! - [`bars`]: the array being sorted, one coloured bar per slot
//! - [`tree`]: the laid-out tree on a braille canvas and the traversal line
//! - [`status`]: status bar with step count, delay and keybindings
//!
//! Each pane exports a `render_*` function that draws from borrowed state
//! and keeps none of its own.

pub mod bars;
pub mod status;
pub mod tree;

pub use bars::render_bars_pane;
pub use status::{render_status_bar, StatusRenderData};
pub use tree::{render_result_pane, render_tree_pane, TreeRenderData};
