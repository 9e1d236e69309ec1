// Top-down merge sort driven by an explicit worklist
//
// While two runs are merged, the range reads as
// `placed ++ remaining-left ++ remaining-right`, so every snapshot is a
// permutation of the input. Taking from the right run rotates its head in
// front of the remaining left elements.
//
// Equal heads take from the left run, keeping the merge stable.

use super::{SortAction, SortAlgorithm, SortState};
use crate::snapshot::IndexRange;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Task {
    Sort { lo: usize, hi: usize },
    Merge { lo: usize, mid: usize, hi: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Compare,
    Resolve,
    Tail,
}

#[derive(Debug)]
struct Cursor {
    hi: usize,
    /// Next slot to fill
    k: usize,
    left_rest: usize,
    right_rest: usize,
    phase: Phase,
}

#[derive(Debug)]
pub(super) struct Merge {
    work: Vec<Task>,
    cursor: Option<Cursor>,
}

impl Merge {
    pub(super) fn new(len: usize) -> Self {
        Merge {
            work: vec![Task::Sort { lo: 0, hi: len }],
            cursor: None,
        }
    }

    fn step_cursor(cursor: &mut Cursor, state: &mut SortState) -> Option<SortAction> {
        loop {
            match cursor.phase {
                Phase::Compare => {
                    if cursor.left_rest > 0 && cursor.right_rest > 0 {
                        state.compare(cursor.k, cursor.k + cursor.left_rest);
                        cursor.phase = Phase::Resolve;
                        return Some(SortAction::Compare);
                    }
                    cursor.phase = Phase::Tail;
                }
                Phase::Resolve => {
                    let right_head = cursor.k + cursor.left_rest;
                    if state.array[right_head] < state.array[cursor.k] {
                        state.array[cursor.k..=right_head].rotate_right(1);
                        cursor.right_rest -= 1;
                    } else {
                        cursor.left_rest -= 1;
                    }
                    cursor.k += 1;
                    cursor.phase = Phase::Compare;
                    return Some(SortAction::Place);
                }
                Phase::Tail => {
                    if cursor.k < cursor.hi {
                        state.comparing.clear();
                        state.comparing.push(cursor.k);
                        cursor.k += 1;
                        return Some(SortAction::Place);
                    }
                    return None;
                }
            }
        }
    }
}

impl SortAlgorithm for Merge {
    fn advance(&mut self, state: &mut SortState) -> Option<SortAction> {
        loop {
            if let Some(cursor) = self.cursor.as_mut() {
                if let Some(action) = Self::step_cursor(cursor, state) {
                    return Some(action);
                }
                state.merging.clear();
                state.comparing.clear();
                self.cursor = None;
            }

            match self.work.pop()? {
                Task::Sort { lo, hi } => {
                    if hi - lo < 2 {
                        continue;
                    }
                    let mid = lo + (hi - lo) / 2;
                    // popped in reverse: left half, right half, then the merge
                    self.work.push(Task::Merge { lo, mid, hi });
                    self.work.push(Task::Sort { lo: mid, hi });
                    self.work.push(Task::Sort { lo, hi: mid });
                }
                Task::Merge { lo, mid, hi } => {
                    state.merging = vec![IndexRange::new(lo, mid), IndexRange::new(mid, hi)];
                    state.comparing.clear();
                    self.cursor = Some(Cursor {
                        hi,
                        k: lo,
                        left_rest: mid - lo,
                        right_rest: hi - mid,
                        phase: Phase::Compare,
                    });
                    return Some(SortAction::MergeGroups);
                }
            }
        }
    }
}
