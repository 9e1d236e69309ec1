//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into three layers:
//!
//! - **[`app`]**: application state, keyboard event loop, one run scheduler
//!   per view
//! - **[`panes`]**: stateless render functions for the bar chart, the tree
//!   canvas and the status bar
//! - **[`theme`]**: centralized color palette used by all panes
//!
//! The entry point for consumers is [`App`]: construct it with
//! [`AppSettings`] and a random generator, then call [`App::run`] to start
//! the event loop. The UI only consumes snapshots; it never drives an
//! algorithm directly.
//!
//! [`App::run`]: app::App::run

pub mod app;
pub mod panes;
pub mod theme;

pub use app::{App, AppSettings};
