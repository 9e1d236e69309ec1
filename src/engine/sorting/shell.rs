// Shell sort with the halving gap sequence n/2, n/4, ..., 1

use super::{SortAction, SortAlgorithm, SortState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    StartItem,
    Check,
    Resolve,
    Place,
}

#[derive(Debug)]
pub(super) struct Shell {
    len: usize,
    gap: usize,
    i: usize,
    j: usize,
    held: i64,
    phase: Phase,
}

impl Shell {
    pub(super) fn new(len: usize) -> Self {
        let gap = len / 2;
        Shell {
            len,
            gap,
            i: gap,
            j: gap,
            held: 0,
            phase: Phase::StartItem,
        }
    }

    #[cfg(test)]
    pub(super) fn gaps(len: usize) -> Vec<usize> {
        std::iter::successors(Some(len / 2), |g| Some(g / 2))
            .take_while(|&g| g > 0)
            .collect()
    }
}

impl SortAlgorithm for Shell {
    fn advance(&mut self, state: &mut SortState) -> Option<SortAction> {
        loop {
            match self.phase {
                Phase::StartItem => {
                    if self.gap == 0 {
                        return None;
                    }
                    if self.i >= self.len {
                        self.gap /= 2;
                        self.i = self.gap;
                        continue;
                    }
                    self.held = state.array[self.i];
                    self.j = self.i;
                    self.phase = Phase::Check;
                }
                Phase::Check => {
                    if self.j >= self.gap {
                        state.compare(self.j - self.gap, self.j);
                        self.phase = Phase::Resolve;
                        return Some(SortAction::Compare);
                    }
                    self.phase = Phase::Place;
                }
                Phase::Resolve => {
                    let lower = self.j - self.gap;
                    if state.array[lower] > self.held {
                        state.array[self.j] = state.array[lower];
                        self.j = lower;
                        self.phase = Phase::Check;
                        return Some(SortAction::Shift);
                    }
                    self.phase = Phase::Place;
                }
                Phase::Place => {
                    let moved = self.j != self.i;
                    state.array[self.j] = self.held;
                    self.i += 1;
                    self.phase = Phase::StartItem;
                    if moved {
                        return Some(SortAction::Place);
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::{collect, SortKind};
    use super::Shell;
    use crate::snapshot::SortAction;

    #[test]
    fn test_gap_sequence_halves() {
        assert_eq!(Shell::gaps(10), vec![5, 2, 1]);
        assert_eq!(Shell::gaps(8), vec![4, 2, 1]);
        assert_eq!(Shell::gaps(1), Vec::<usize>::new());
    }

    #[test]
    fn test_comparisons_use_gap_distance() {
        let snaps = collect(SortKind::Shell, &[4, 3, 2, 1]);
        let compares: Vec<_> = snaps
            .iter()
            .filter(|s| s.action == SortAction::Compare)
            .map(|s| s.comparing.clone())
            .collect();
        // gap 2 first
        assert_eq!(compares[0], vec![0, 2]);
        assert_eq!(compares[1], vec![1, 3]);
        assert!(compares.iter().skip(2).all(|c| c[1] - c[0] == 1));
        assert_eq!(snaps.last().unwrap().array, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_place_only_when_moved() {
        let snaps = collect(SortKind::Shell, &[1, 2, 3, 4, 5]);
        assert!(snaps
            .iter()
            .all(|s| s.action != SortAction::Place && s.action != SortAction::Shift));
    }
}
