//! Stepping engines
//!
//! This module provides the algorithms that produce snapshots:
//! - [`sorting`]: seven instrumented sorting algorithms behind [`sorting::SortRun`]
//! - [`traversal`]: preorder / inorder / postorder replay via [`traversal::TraversalRun`]
//! - [`input`]: validation of caller parameters
//! - [`errors`]: the [`errors::EngineError`] taxonomy
//!
//! # Execution Model
//!
//! Engines are plain iterators: each `next()` performs the work up to the
//! next observable event and returns its snapshot. They know nothing about
//! time; the [`scheduler`](crate::scheduler) decides when to pull the next
//! step and guarantees that only one run is live at a time.

pub mod constants;
pub mod errors;
pub mod input;
pub mod sorting;
pub mod traversal;
