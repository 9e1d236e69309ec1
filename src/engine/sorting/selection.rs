// Selection sort with a visible running minimum

use super::{SortAction, SortAlgorithm, SortState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    StartPass,
    Scan,
    Resolve,
    Commit,
    EndPass,
}

#[derive(Debug)]
pub(super) struct Selection {
    len: usize,
    i: usize,
    j: usize,
    min_index: usize,
    phase: Phase,
}

impl Selection {
    pub(super) fn new(len: usize) -> Self {
        Selection {
            len,
            i: 0,
            j: 0,
            min_index: 0,
            phase: Phase::StartPass,
        }
    }
}

impl SortAlgorithm for Selection {
    fn advance(&mut self, state: &mut SortState) -> Option<SortAction> {
        loop {
            match self.phase {
                Phase::StartPass => {
                    if self.i + 1 >= self.len {
                        return None;
                    }
                    self.min_index = self.i;
                    state.marker = Some(self.i);
                    self.j = self.i + 1;
                    self.phase = Phase::Scan;
                }
                Phase::Scan => {
                    if self.j < self.len {
                        state.compare(self.min_index, self.j);
                        self.phase = Phase::Resolve;
                        return Some(SortAction::Compare);
                    }
                    if self.min_index == self.i {
                        self.phase = Phase::EndPass;
                        continue;
                    }
                    // The preview and the committed state hold the same array;
                    // the preview still highlights the pair being exchanged.
                    state.swap(self.i, self.min_index);
                    state.compare(self.i, self.min_index);
                    self.phase = Phase::Commit;
                    return Some(SortAction::SwapPreview);
                }
                Phase::Resolve => {
                    if state.array[self.j] < state.array[self.min_index] {
                        self.min_index = self.j;
                        state.marker = Some(self.j);
                    }
                    self.j += 1;
                    self.phase = Phase::Scan;
                }
                Phase::Commit => {
                    state.comparing.clear();
                    self.phase = Phase::EndPass;
                    return Some(SortAction::Swap);
                }
                Phase::EndPass => {
                    state.marker = None;
                    self.i += 1;
                    self.phase = Phase::StartPass;
                }
            }
        }
    }
}
