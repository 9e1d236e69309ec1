// Snapshot model emitted by the sorting and traversal engines

use crate::tree::NodeId;
use std::fmt;

/// Half-open index range `[start, end)` inside the array being sorted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IndexRange {
    pub start: usize,
    pub end: usize,
}

impl IndexRange {
    pub fn new(start: usize, end: usize) -> Self {
        IndexRange { start, end }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, index: usize) -> bool {
        index >= self.start && index < self.end
    }
}

impl fmt::Display for IndexRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// What happened in the step that produced a sort snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortAction {
    /// Untouched copy of the caller's input
    Initial,
    /// Two slots are about to be compared
    Compare,
    /// Two slots were exchanged
    Swap,
    /// Selection sort shows the exchange before committing it
    SwapPreview,
    /// One element moved one position (or one gap) to the right
    Shift,
    /// A held element was written to its slot
    Place,
    /// Merge sort is about to merge the two ranges in `merging`
    MergeGroups,
    /// Final sorted state, all markers cleared
    Done,
    /// Markers cleared on a run that stopped early
    Reset,
}

/// One renderable state of a sorting run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortSnapshot {
    pub array: Vec<i64>,
    /// Indices under comparison (at most two)
    pub comparing: Vec<usize>,
    /// The two ranges being merged (merge sort only)
    pub merging: Vec<IndexRange>,
    /// Pivot (quick sort) or running minimum (selection sort)
    pub marker: Option<usize>,
    pub action: SortAction,
}

impl SortSnapshot {
    /// A snapshot showing `array` with no highlighting at all
    pub fn neutral(array: Vec<i64>, action: SortAction) -> Self {
        SortSnapshot {
            array,
            comparing: Vec::new(),
            merging: Vec::new(),
            marker: None,
            action,
        }
    }

    pub fn is_neutral(&self) -> bool {
        self.comparing.is_empty() && self.merging.is_empty() && self.marker.is_none()
    }

    /// Same array, markers cleared
    pub fn cleared(&self) -> Self {
        SortSnapshot::neutral(self.array.clone(), SortAction::Reset)
    }
}

impl fmt::Display for SortAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SortAction::Initial => "initial",
            SortAction::Compare => "compare",
            SortAction::Swap => "swap",
            SortAction::SwapPreview => "swap?",
            SortAction::Shift => "shift",
            SortAction::Place => "place",
            SortAction::MergeGroups => "merge",
            SortAction::Done => "done",
            SortAction::Reset => "reset",
        };
        f.pad(name)
    }
}

/// One line: action, array, then whichever markers are set
impl fmt::Display for SortSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:<8}{:?}", self.action, self.array)?;
        if !self.comparing.is_empty() {
            write!(f, " cmp={:?}", self.comparing)?;
        }
        if let [left, right] = self.merging.as_slice() {
            write!(f, " merge={}+{}", left, right)?;
        }
        if let Some(marker) = self.marker {
            write!(f, " mark={}", marker)?;
        }
        Ok(())
    }
}

/// A node highlighted by a traversal tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Visit {
    pub node: NodeId,
    pub value: i64,
}

/// One renderable state of a traversal run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TraversalSnapshot {
    /// Values visited so far, in traversal order
    pub visited: Vec<i64>,
    pub current: Option<Visit>,
    pub previous: Option<Visit>,
}

impl TraversalSnapshot {
    pub fn is_neutral(&self) -> bool {
        self.current.is_none() && self.previous.is_none()
    }

    pub fn cleared(&self) -> Self {
        TraversalSnapshot {
            visited: self.visited.clone(),
            current: None,
            previous: None,
        }
    }

    /// Progress line in the same format as the final result
    pub fn progress(&self) -> String {
        join_order(&self.visited)
    }
}

impl fmt::Display for TraversalSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.current {
            Some(visit) => write!(f, "visit {:<6}", visit.value)?,
            None => f.write_str("clear       ")?,
        }
        f.write_str(&self.progress())
    }
}

/// Any snapshot a run can emit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Snapshot {
    Sort(SortSnapshot),
    Traversal(TraversalSnapshot),
}

impl Snapshot {
    /// The same state with every highlight removed
    pub fn cleared(&self) -> Self {
        match self {
            Snapshot::Sort(s) => Snapshot::Sort(s.cleared()),
            Snapshot::Traversal(t) => Snapshot::Traversal(t.cleared()),
        }
    }

    pub fn is_neutral(&self) -> bool {
        match self {
            Snapshot::Sort(s) => s.is_neutral(),
            Snapshot::Traversal(t) => t.is_neutral(),
        }
    }
}

impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Snapshot::Sort(s) => s.fmt(f),
            Snapshot::Traversal(t) => t.fmt(f),
        }
    }
}

/// Result reported once a run finishes on its own
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    Sorted(Vec<i64>),
    Traversed { order: Vec<i64>, summary: String },
}

impl fmt::Display for Completion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Completion::Sorted(array) => write!(f, "sorted {:?}", array),
            Completion::Traversed { summary, .. } => f.write_str(summary),
        }
    }
}

/// Format a visitation order the way results are reported
pub fn join_order(values: &[i64]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(crate::engine::constants::ORDER_SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neutral_sort_snapshot() {
        let snap = SortSnapshot {
            array: vec![3, 1],
            comparing: vec![0, 1],
            merging: vec![IndexRange::new(0, 1), IndexRange::new(1, 2)],
            marker: Some(1),
            action: SortAction::Compare,
        };
        assert!(!snap.is_neutral());
        let cleared = snap.cleared();
        assert!(cleared.is_neutral());
        assert_eq!(cleared.array, vec![3, 1]);
        assert_eq!(cleared.action, SortAction::Reset);
    }

    #[test]
    fn test_display_lines() {
        let snap = SortSnapshot {
            array: vec![3, 1],
            comparing: vec![0, 1],
            merging: Vec::new(),
            marker: Some(1),
            action: SortAction::Compare,
        };
        assert_eq!(snap.to_string(), "compare [3, 1] cmp=[0, 1] mark=1");

        let tick = TraversalSnapshot {
            visited: vec![5, 3],
            current: None,
            previous: None,
        };
        assert_eq!(tick.to_string(), "clear       5 -> 3");
    }

    #[test]
    fn test_join_order() {
        assert_eq!(join_order(&[5, 3, 1]), "5 -> 3 -> 1");
        assert_eq!(join_order(&[]), "");
    }

    #[test]
    fn test_index_range() {
        let r = IndexRange::new(2, 5);
        assert_eq!(r.len(), 3);
        assert!(r.contains(2));
        assert!(!r.contains(5));
        assert_eq!(r.to_string(), "2..5");
    }
}
