//! Instrumented sorting algorithms
//!
//! Each algorithm is written as an explicit state machine implementing
//! [`SortAlgorithm`]. A call to [`SortAlgorithm::advance`] performs the work
//! up to the next observable event, records it in the shared [`SortState`]
//! and returns the [`SortAction`] describing it; the caller then copies the
//! state into a [`SortSnapshot`]. Nothing runs between two calls, so the
//! pacing loop decides when the algorithm makes progress.
//!
//! [`SortRun`] wraps one algorithm and adds the framing every run shares:
//! an `Initial` snapshot of the untouched input and a closing `Done`
//! snapshot with all markers cleared.
//!
//! Recursive algorithms (merge, quick, heap) keep their pending work on
//! explicit stacks, so deep inputs never grow the call stack.

mod bubble;
mod heap;
mod insertion;
mod merge;
mod quick;
mod selection;
mod shell;

use crate::engine::errors::EngineError;
use crate::snapshot::{Completion, IndexRange, SortAction, SortSnapshot};
use std::fmt;
use std::str::FromStr;

/// The seven supported algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortKind {
    Bubble,
    Selection,
    Insertion,
    Merge,
    Quick,
    Heap,
    Shell,
}

impl SortKind {
    pub const ALL: [SortKind; 7] = [
        SortKind::Bubble,
        SortKind::Selection,
        SortKind::Insertion,
        SortKind::Merge,
        SortKind::Quick,
        SortKind::Heap,
        SortKind::Shell,
    ];

    /// Display name, e.g. "Bubble Sort"
    pub fn title(self) -> &'static str {
        match self {
            SortKind::Bubble => "Bubble Sort",
            SortKind::Selection => "Selection Sort",
            SortKind::Insertion => "Insertion Sort",
            SortKind::Merge => "Merge Sort",
            SortKind::Quick => "Quick Sort",
            SortKind::Heap => "Heap Sort",
            SortKind::Shell => "Shell Sort",
        }
    }

    /// Short lowercase key used on the command line
    pub fn key(self) -> &'static str {
        match self {
            SortKind::Bubble => "bubble",
            SortKind::Selection => "selection",
            SortKind::Insertion => "insertion",
            SortKind::Merge => "merge",
            SortKind::Quick => "quick",
            SortKind::Heap => "heap",
            SortKind::Shell => "shell",
        }
    }

    fn algorithm(self, len: usize) -> Box<dyn SortAlgorithm + Send> {
        match self {
            SortKind::Bubble => Box::new(bubble::Bubble::new(len)),
            SortKind::Selection => Box::new(selection::Selection::new(len)),
            SortKind::Insertion => Box::new(insertion::Insertion::new(len)),
            SortKind::Merge => Box::new(merge::Merge::new(len)),
            SortKind::Quick => Box::new(quick::Quick::new(len)),
            SortKind::Heap => Box::new(heap::Heap::new(len)),
            SortKind::Shell => Box::new(shell::Shell::new(len)),
        }
    }
}

impl fmt::Display for SortKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

impl FromStr for SortKind {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        SortKind::ALL
            .into_iter()
            .find(|kind| kind.key() == wanted)
            .ok_or_else(|| {
                EngineError::invalid("sort kind", format!("unknown algorithm '{}'", s))
            })
    }
}

/// Mutable render state shared between an algorithm and its run
#[derive(Debug, Clone, Default)]
pub struct SortState {
    pub(crate) array: Vec<i64>,
    pub(crate) comparing: Vec<usize>,
    pub(crate) merging: Vec<IndexRange>,
    pub(crate) marker: Option<usize>,
}

impl SortState {
    fn new(array: Vec<i64>) -> Self {
        SortState {
            array,
            ..SortState::default()
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.array.len()
    }

    pub(crate) fn compare(&mut self, a: usize, b: usize) {
        self.comparing.clear();
        self.comparing.push(a);
        self.comparing.push(b);
    }

    pub(crate) fn swap(&mut self, a: usize, b: usize) {
        self.array.swap(a, b);
    }

    fn clear_markers(&mut self) {
        self.comparing.clear();
        self.merging.clear();
        self.marker = None;
    }

    fn snapshot(&self, action: SortAction) -> SortSnapshot {
        SortSnapshot {
            array: self.array.clone(),
            comparing: self.comparing.clone(),
            merging: self.merging.clone(),
            marker: self.marker,
            action,
        }
    }
}

/// A sorting algorithm driven one observable event at a time
pub trait SortAlgorithm {
    /// Run until the next observable event and describe it, or return
    /// `None` once the array is sorted
    fn advance(&mut self, state: &mut SortState) -> Option<SortAction>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    Initial,
    Running,
    Exhausted,
}

/// One sorting run over a private copy of the input
///
/// Iterating yields the snapshots in order; the run is finished once the
/// iterator returns `None`.
pub struct SortRun {
    kind: SortKind,
    state: SortState,
    algorithm: Box<dyn SortAlgorithm + Send>,
    stage: Stage,
}

impl SortRun {
    pub fn new(kind: SortKind, input: &[i64]) -> Self {
        SortRun {
            kind,
            state: SortState::new(input.to_vec()),
            algorithm: kind.algorithm(input.len()),
            stage: Stage::Initial,
        }
    }

    /// Current contents of the working array
    pub fn array(&self) -> &[i64] {
        &self.state.array
    }

    pub fn is_finished(&self) -> bool {
        self.stage == Stage::Exhausted
    }

    /// The sorted array, once the run has finished
    pub fn completion(&self) -> Option<Completion> {
        self.is_finished()
            .then(|| Completion::Sorted(self.state.array.clone()))
    }
}

impl Iterator for SortRun {
    type Item = SortSnapshot;

    fn next(&mut self) -> Option<SortSnapshot> {
        match self.stage {
            Stage::Initial => {
                self.stage = if self.state.len() < 2 {
                    Stage::Exhausted
                } else {
                    Stage::Running
                };
                Some(self.state.snapshot(SortAction::Initial))
            }
            Stage::Running => match self.algorithm.advance(&mut self.state) {
                Some(action) => Some(self.state.snapshot(action)),
                None => {
                    self.state.clear_markers();
                    self.stage = Stage::Exhausted;
                    Some(self.state.snapshot(SortAction::Done))
                }
            },
            Stage::Exhausted => None,
        }
    }
}

impl fmt::Debug for SortRun {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SortRun")
            .field("kind", &self.kind)
            .field("state", &self.state)
            .field("stage", &self.stage)
            .finish()
    }
}

#[cfg(test)]
pub(crate) fn collect(kind: SortKind, input: &[i64]) -> Vec<SortSnapshot> {
    SortRun::new(kind, input).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_round_trips_through_key() {
        for kind in SortKind::ALL {
            assert_eq!(kind.key().parse::<SortKind>().unwrap(), kind);
        }
        assert!("bogo".parse::<SortKind>().is_err());
        assert_eq!(" Quick ".parse::<SortKind>().unwrap(), SortKind::Quick);
    }

    #[test]
    fn test_short_inputs_emit_only_initial() {
        for kind in SortKind::ALL {
            for input in [&[][..], &[42][..]] {
                let mut run = SortRun::new(kind, input);
                let snaps: Vec<_> = run.by_ref().collect();
                assert_eq!(snaps.len(), 1, "{} on {:?}", kind, input);
                assert_eq!(snaps[0].action, SortAction::Initial);
                assert!(snaps[0].is_neutral());
                assert_eq!(run.completion(), Some(Completion::Sorted(input.to_vec())));
            }
        }
    }

    #[test]
    fn test_every_run_starts_initial_and_ends_done() {
        let input = [9, 4, 7, 1, 4, 0, 12, 3];
        for kind in SortKind::ALL {
            let snaps = collect(kind, &input);
            let first = snaps.first().unwrap();
            let last = snaps.last().unwrap();
            assert_eq!(first.action, SortAction::Initial);
            assert_eq!(first.array, input.to_vec());
            assert_eq!(last.action, SortAction::Done);
            assert!(last.is_neutral(), "{} left markers behind", kind);
            assert_eq!(last.array, vec![0, 1, 3, 4, 4, 7, 9, 12], "{}", kind);
        }
    }

    #[test]
    fn test_completion_only_after_exhaustion() {
        let mut run = SortRun::new(SortKind::Heap, &[3, 2, 1]);
        assert!(run.completion().is_none());
        run.next();
        assert!(run.completion().is_none());
        run.by_ref().for_each(drop);
        assert_eq!(run.completion(), Some(Completion::Sorted(vec![1, 2, 3])));
    }
}
