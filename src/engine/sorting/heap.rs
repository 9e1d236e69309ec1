// Heap sort: bottom-up max-heap construction, then in-place extraction

use super::{SortAction, SortAlgorithm, SortState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    /// Heapify roots `remaining - 1` down to 0
    Build { remaining: usize },
    /// Move the root behind `end`, then restore the heap on `0..end`
    Extract { end: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SiftStep {
    CheckLeft,
    ResolveLeft,
    CheckRight,
    ResolveRight,
    Settle,
}

/// Iterative sift-down of `node` within the first `size` slots
#[derive(Debug)]
struct Sift {
    size: usize,
    node: usize,
    largest: usize,
    step: SiftStep,
}

impl Sift {
    fn new(size: usize, node: usize) -> Self {
        Sift {
            size,
            node,
            largest: node,
            step: SiftStep::CheckLeft,
        }
    }

    fn advance(&mut self, state: &mut SortState) -> Option<SortAction> {
        loop {
            let left = 2 * self.node + 1;
            let right = left + 1;
            match self.step {
                SiftStep::CheckLeft => {
                    self.step = SiftStep::CheckRight;
                    if left < self.size {
                        state.compare(self.largest, left);
                        self.step = SiftStep::ResolveLeft;
                        return Some(SortAction::Compare);
                    }
                }
                SiftStep::ResolveLeft => {
                    if state.array[left] > state.array[self.largest] {
                        self.largest = left;
                    }
                    self.step = SiftStep::CheckRight;
                }
                SiftStep::CheckRight => {
                    self.step = SiftStep::Settle;
                    if right < self.size {
                        state.compare(self.largest, right);
                        self.step = SiftStep::ResolveRight;
                        return Some(SortAction::Compare);
                    }
                }
                SiftStep::ResolveRight => {
                    if state.array[right] > state.array[self.largest] {
                        self.largest = right;
                    }
                    self.step = SiftStep::Settle;
                }
                SiftStep::Settle => {
                    if self.largest == self.node {
                        return None;
                    }
                    state.swap(self.node, self.largest);
                    self.node = self.largest;
                    self.step = SiftStep::CheckLeft;
                    return Some(SortAction::Swap);
                }
            }
        }
    }
}

#[derive(Debug)]
pub(super) struct Heap {
    stage: Stage,
    len: usize,
    sift: Option<Sift>,
}

impl Heap {
    pub(super) fn new(len: usize) -> Self {
        Heap {
            stage: Stage::Build { remaining: len / 2 },
            len,
            sift: None,
        }
    }
}

impl SortAlgorithm for Heap {
    fn advance(&mut self, state: &mut SortState) -> Option<SortAction> {
        loop {
            if let Some(sift) = self.sift.as_mut() {
                if let Some(action) = sift.advance(state) {
                    return Some(action);
                }
                self.sift = None;
            }

            match self.stage {
                Stage::Build { remaining: 0 } => {
                    self.stage = Stage::Extract {
                        end: self.len.saturating_sub(1),
                    };
                }
                Stage::Build { remaining } => {
                    self.stage = Stage::Build {
                        remaining: remaining - 1,
                    };
                    self.sift = Some(Sift::new(self.len, remaining - 1));
                }
                Stage::Extract { end: 0 } => return None,
                Stage::Extract { end } => {
                    state.swap(0, end);
                    self.stage = Stage::Extract { end: end - 1 };
                    self.sift = Some(Sift::new(end, 0));
                    return Some(SortAction::Swap);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::{collect, SortKind};
    use crate::snapshot::SortAction;

    #[test]
    fn test_build_checks_left_then_right() {
        let snaps = collect(SortKind::Heap, &[1, 2, 3]);
        // root 0 against child 1, then the larger of the two against child 2
        assert_eq!(snaps[1].comparing, vec![0, 1]);
        assert_eq!(snaps[2].comparing, vec![1, 2]);
        assert_eq!(snaps[3].action, SortAction::Swap);
        assert_eq!(snaps[3].array, vec![3, 2, 1]);
    }

    #[test]
    fn test_heap_trace_ends_sorted() {
        let snaps = collect(SortKind::Heap, &[1, 2, 3]);
        let actions: Vec<_> = snaps.iter().map(|s| s.action).collect();
        assert_eq!(
            actions,
            vec![
                SortAction::Initial,
                SortAction::Compare,
                SortAction::Compare,
                SortAction::Swap,
                // extract 3: [1, 2, 3], heap on 0..2
                SortAction::Swap,
                SortAction::Compare,
                SortAction::Swap,
                // extract 2: [1, 2, 3], heap on 0..1
                SortAction::Swap,
                SortAction::Done,
            ]
        );
        assert_eq!(snaps.last().unwrap().array, vec![1, 2, 3]);
    }

    #[test]
    fn test_every_swap_involves_parent_and_child_or_root() {
        let snaps = collect(SortKind::Heap, &[7, 3, 9, 1, 8, 2, 6]);
        for pair in snaps.windows(2) {
            if pair[1].action == SortAction::Swap {
                let diff: Vec<_> = (0..pair[0].array.len())
                    .filter(|&i| pair[0].array[i] != pair[1].array[i])
                    .collect();
                assert!(diff.len() == 2 || diff.is_empty());
            }
        }
    }
}
