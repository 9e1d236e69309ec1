// Insertion sort, shifting one slot per step

use super::{SortAction, SortAlgorithm, SortState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    StartPass,
    Check,
    Shift,
}

#[derive(Debug)]
pub(super) struct Insertion {
    len: usize,
    i: usize,
    key: i64,
    /// Slot the key will land in if the scan stops now
    hole: usize,
    phase: Phase,
}

impl Insertion {
    pub(super) fn new(len: usize) -> Self {
        Insertion {
            len,
            i: 1,
            key: 0,
            hole: 0,
            phase: Phase::StartPass,
        }
    }
}

impl SortAlgorithm for Insertion {
    fn advance(&mut self, state: &mut SortState) -> Option<SortAction> {
        loop {
            match self.phase {
                Phase::StartPass => {
                    if self.i >= self.len {
                        return None;
                    }
                    self.key = state.array[self.i];
                    self.hole = self.i;
                    self.phase = Phase::Check;
                }
                Phase::Check => {
                    if self.hole > 0 && state.array[self.hole - 1] > self.key {
                        state.compare(self.hole - 1, self.hole);
                        self.phase = Phase::Shift;
                        return Some(SortAction::Compare);
                    }
                    state.array[self.hole] = self.key;
                    self.i += 1;
                    self.phase = Phase::StartPass;
                    return Some(SortAction::Place);
                }
                Phase::Shift => {
                    state.array[self.hole] = state.array[self.hole - 1];
                    self.hole -= 1;
                    self.phase = Phase::Check;
                    return Some(SortAction::Shift);
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
    fn test_each_shift_is_its_own_snapshot() {
        let snaps = collect(SortKind::Insertion, &[3, 2, 1]);
        let arrays: Vec<_> = snaps
            .iter()
            .filter(|s| s.action == SortAction::Shift || s.action == SortAction::Place)
            .map(|s| (s.action, s.array.clone()))
            .collect();
        assert_eq!(
            arrays,
            vec![
                (SortAction::Shift, vec![3, 3, 1]),
                (SortAction::Place, vec![2, 3, 1]),
                (SortAction::Shift, vec![2, 3, 3]),
                (SortAction::Shift, vec![2, 2, 3]),
                (SortAction::Place, vec![1, 2, 3]),
            ]
        );
    }

    #[test]
    fn test_place_emitted_for_every_pass() {
        let snaps = collect(SortKind::Insertion, &[1, 2, 3, 4]);
        let places = snaps
            .iter()
            .filter(|s| s.action == SortAction::Place)
            .count();
        assert_eq!(places, 3);
        assert!(snaps.iter().all(|s| s.action != SortAction::Compare));
    }

    #[test]
    fn test_equal_keys_stay_put() {
        let snaps = collect(SortKind::Insertion, &[2, 2, 2]);
        assert!(snaps.iter().all(|s| s.action != SortAction::Shift));
    }
}
