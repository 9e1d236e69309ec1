// Bubble sort: compare neighbours, swap when out of order

use super::{SortAction, SortAlgorithm, SortState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Compare,
    Resolve,
}

#[derive(Debug)]
pub(super) struct Bubble {
    len: usize,
    pass: usize,
    j: usize,
    phase: Phase,
}

impl Bubble {
    pub(super) fn new(len: usize) -> Self {
        Bubble {
            len,
            pass: 0,
            j: 0,
            phase: Phase::Compare,
        }
    }
}

impl SortAlgorithm for Bubble {
    fn advance(&mut self, state: &mut SortState) -> Option<SortAction> {
        loop {
            match self.phase {
                Phase::Compare => {
                    if self.pass + 1 >= self.len {
                        return None;
                    }
                    if self.j + 1 >= self.len - self.pass {
                        self.pass += 1;
                        self.j = 0;
                        continue;
                    }
                    state.compare(self.j, self.j + 1);
                    self.phase = Phase::Resolve;
                    return Some(SortAction::Compare);
                }
                Phase::Resolve => {
                    let j = self.j;
                    self.j += 1;
                    self.phase = Phase::Compare;
                    if state.array[j] > state.array[j + 1] {
                        state.swap(j, j + 1);
                        return Some(SortAction::Swap);
                    }
                }
            }
        }
    }
}
