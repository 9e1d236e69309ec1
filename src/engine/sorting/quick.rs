// Quick sort with Lomuto partitioning; the last element of a range is the pivot

use super::{SortAction, SortAlgorithm, SortState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    NextRange,
    Scan,
    Resolve,
    PivotSwap,
}

#[derive(Debug)]
pub(super) struct Quick {
    /// Pending half-open ranges; the top is partitioned next
    ranges: Vec<(usize, usize)>,
    lo: usize,
    hi: usize,
    /// First slot of the "greater or equal" region (`i + 1` in Lomuto terms)
    store: usize,
    j: usize,
    phase: Phase,
}

impl Quick {
    pub(super) fn new(len: usize) -> Self {
        Quick {
            ranges: vec![(0, len)],
            lo: 0,
            hi: 0,
            store: 0,
            j: 0,
            phase: Phase::NextRange,
        }
    }
}

impl SortAlgorithm for Quick {
    fn advance(&mut self, state: &mut SortState) -> Option<SortAction> {
        loop {
            match self.phase {
                Phase::NextRange => {
                    let (lo, hi) = self.ranges.pop()?;
                    if hi - lo < 2 {
                        continue;
                    }
                    self.lo = lo;
                    self.hi = hi;
                    self.store = lo;
                    self.j = lo;
                    state.marker = Some(hi - 1);
                    self.phase = Phase::Scan;
                }
                Phase::Scan => {
                    if self.j < self.hi - 1 {
                        state.compare(self.store, self.j);
                        self.phase = Phase::Resolve;
                        return Some(SortAction::Compare);
                    }
                    self.phase = Phase::PivotSwap;
                }
                Phase::Resolve => {
                    let pivot = self.hi - 1;
                    let j = self.j;
                    self.j += 1;
                    self.phase = Phase::Scan;
                    if state.array[j] < state.array[pivot] {
                        state.swap(self.store, j);
                        self.store += 1;
                        return Some(SortAction::Swap);
                    }
                }
                Phase::PivotSwap => {
                    let p = self.store;
                    state.swap(p, self.hi - 1);
                    state.marker = Some(p);
                    // right range pushed first so the left one is sorted first
                    self.ranges.push((p + 1, self.hi));
                    self.ranges.push((self.lo, p));
                    self.phase = Phase::NextRange;
                    return Some(SortAction::Swap);
                }
            }
        }
    }
}
