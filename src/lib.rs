//! # Introduction
//!
//! algotty runs classic sorting algorithms and binary tree traversals one
//! observable step at a time and draws each step in the terminal with
//! [ratatui](https://docs.rs/ratatui).
//!
//! ## Pipeline
//!
//! ```text
//! Input → Engine (step generator) → Scheduler (pacing, cancel) → Snapshots → TUI
//! Tree  → Graph (path ids) → Layered layout → Nudge → TUI
//! ```
//!
//! 1. [`engine`]: seven instrumented sorts and three traversals, written as
//!    lazy state machines that yield [`snapshot::SortSnapshot`]s and
//!    [`snapshot::TraversalSnapshot`]s; input validation and error types.
//! 2. [`scheduler`]: owns at most one active run, paces it between 50 ms and
//!    2000 ms per step and cancels it with a neutral final snapshot.
//! 3. [`tree`]: arena binary trees (BST insertion, complete trees) and their
//!    conversion into path-identified nodes and edges.
//! 4. [`layout`]: layered layout of a forest plus the left/right nudge pass.
//! 5. [`snapshot`]: the renderable states every engine emits.
//! 6. [`config`]: the command line.
//! 7. [`ui`]: ratatui-based TUI; not part of the stable library API.
//!
//! ## Headless use
//!
//! ```no_run
//! use algotty::engine::sorting::SortKind;
//! use algotty::scheduler::{run_sort, EventKind};
//! use std::ops::ControlFlow;
//!
//! let outcome = run_sort(SortKind::Heap, &[5, 3, 1], 50, |event| {
//!     if let EventKind::Step(snapshot) = &event.kind {
//!         println!("{:?}", snapshot);
//!     }
//!     ControlFlow::Continue(())
//! })?;
//! println!("{:?}", outcome);
//! # Ok::<(), algotty::engine::errors::EngineError>(())
//! ```

pub mod config;
pub mod engine;
pub mod layout;
pub mod scheduler;
pub mod snapshot;
pub mod tree;
pub mod ui;
