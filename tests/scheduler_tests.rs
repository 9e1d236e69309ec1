//! Run scheduler: pacing, single-run policy and cancellation
//!
//! Everything is driven through `pump` with synthetic instants, so no test
//! sleeps except the blocking helpers at the minimum delay.

use algotty::engine::errors::EngineError;
use algotty::engine::sorting::SortKind;
use algotty::engine::traversal::TraversalKind;
use algotty::scheduler::{
    run_sort, run_traversal, EventKind, Launch, Outcome, RunEvent, RunRequest, RunScheduler,
};
use algotty::snapshot::{Completion, Snapshot};
use algotty::tree::BinaryTree;
use std::ops::ControlFlow;
use std::time::{Duration, Instant};

/// Pump every `delay` until the run ends or `limit` events were seen
fn drain(scheduler: &mut RunScheduler, delay: Duration, limit: usize) -> Vec<RunEvent> {
    let mut now = Instant::now();
    let mut events = Vec::new();
    while events.len() < limit {
        match scheduler.pump(now) {
            Some(event) => events.push(event),
            None if !scheduler.is_active() => break,
            None => {}
        }
        now += delay;
    }
    events
}

#[test]
fn test_cancel_at_every_point_ends_neutral() {
    let input = [9, 2, 7, 4, 1, 8];
    for kind in SortKind::ALL {
        let total = drain_run_len(kind, &input);
        for cut in 0..total {
            let mut scheduler = RunScheduler::new();
            scheduler.start(RunRequest::sort(kind, &input), 50).unwrap();
            let mut events = drain(&mut scheduler, Duration::from_millis(50), cut);
            events.extend(scheduler.cancel());
            events.extend(drain(&mut scheduler, Duration::from_millis(50), 100));

            let last = events.last().unwrap();
            match &last.kind {
                EventKind::Cancelled(snapshot) => assert!(snapshot.is_neutral()),
                other => panic!("{} cut at {}: {:?}", kind, cut, other),
            }
            assert_eq!(events.iter().filter(|e| e.is_terminal()).count(), 1);
        }
    }
}

#[test]
fn test_cancel_traversal_at_every_point_keeps_visited() {
    let tree = BinaryTree::from_values(&[5, 3, 8, 1, 4, 9]);
    for kind in TraversalKind::ALL {
        let total = {
            let mut scheduler = RunScheduler::new();
            scheduler.start(RunRequest::traversal(kind, &tree), 50).unwrap();
            drain(&mut scheduler, Duration::from_millis(50), usize::MAX).len()
        };
        for cut in 0..total {
            let mut scheduler = RunScheduler::new();
            scheduler.start(RunRequest::traversal(kind, &tree), 50).unwrap();
            let delivered = drain(&mut scheduler, Duration::from_millis(50), cut);
            let visited = delivered
                .iter()
                .rev()
                .find_map(|e| match &e.kind {
                    EventKind::Step(Snapshot::Traversal(t)) => Some(t.visited.clone()),
                    _ => None,
                })
                .unwrap_or_default();

            let cancelled = scheduler.cancel().unwrap();
            match &cancelled.kind {
                EventKind::Cancelled(Snapshot::Traversal(t)) => {
                    assert_eq!(t.visited, visited, "{} cut at {}", kind, cut);
                    assert!(t.current.is_none());
                    assert!(t.previous.is_none());
                }
                other => panic!("{} cut at {}: {:?}", kind, cut, other),
            }
            assert!(drain(&mut scheduler, Duration::from_millis(50), 100).is_empty());
        }
    }
}

fn drain_run_len(kind: SortKind, input: &[i64]) -> usize {
    let mut scheduler = RunScheduler::new();
    scheduler.start(RunRequest::sort(kind, input), 50).unwrap();
    drain(&mut scheduler, Duration::from_millis(50), usize::MAX).len()
}

#[test]
fn test_reject_applies_to_traversals_too() {
    let tree = BinaryTree::from_values(&[2, 1, 3]);
    let mut scheduler = RunScheduler::new();
    scheduler
        .start(RunRequest::traversal(TraversalKind::Preorder, &tree), 1000)
        .unwrap();

    let again = scheduler.start(RunRequest::traversal(TraversalKind::Inorder, &tree), 1000);
    assert!(matches!(again, Err(EngineError::RunAlreadyActive { .. })));
    let sort = scheduler.start(RunRequest::sort(SortKind::Bubble, &[1, 2]), 1000);
    assert!(matches!(sort, Err(EngineError::RunAlreadyActive { .. })));

    scheduler.cancel();
    assert!(scheduler
        .start(RunRequest::traversal(TraversalKind::Inorder, &tree), 1000)
        .is_ok());
}

#[test]
fn test_new_run_after_completion() {
    let mut scheduler = RunScheduler::new();
    scheduler.start(RunRequest::sort(SortKind::Heap, &[2, 1]), 50).unwrap();
    let first = drain(&mut scheduler, Duration::from_millis(50), usize::MAX);
    assert!(matches!(
        first.last().unwrap().kind,
        EventKind::Completed(Completion::Sorted(_))
    ));

    let launch = scheduler.start(RunRequest::sort(SortKind::Heap, &[2, 1]), 50).unwrap();
    let Launch::Started(token) = launch else {
        panic!("second run did not start");
    };
    assert_ne!(first[0].run, token.id());
    assert_eq!(scheduler.active_run(), Some(token.id()));
}

#[test]
fn test_delay_bounds_are_inclusive() {
    let mut scheduler = RunScheduler::new();
    assert!(scheduler.start(RunRequest::sort(SortKind::Shell, &[1]), 50).is_ok());
    scheduler.cancel();
    assert!(scheduler.start(RunRequest::sort(SortKind::Shell, &[1]), 2000).is_ok());
    scheduler.cancel();
    assert!(scheduler.start(RunRequest::sort(SortKind::Shell, &[1]), 2001).is_err());
}

#[test]
fn test_events_carry_their_run() {
    let mut scheduler = RunScheduler::new();
    let Launch::Started(token) = scheduler.start(RunRequest::sort(SortKind::Merge, &[3, 1, 2]), 50).unwrap()
    else {
        panic!("run did not start");
    };
    let events = drain(&mut scheduler, Duration::from_millis(50), usize::MAX);
    assert!(events.iter().all(|e| e.run == token.id()));
    assert_eq!(events.iter().filter(|e| e.is_terminal()).count(), 1);
}

#[test]
fn test_run_sort_delivers_everything_in_order() {
    let mut arrays = Vec::new();
    let outcome = run_sort(SortKind::Insertion, &[3, 1, 2], 50, |event| {
        if let EventKind::Step(Snapshot::Sort(s)) = &event.kind {
            arrays.push(s.array.clone());
        }
        ControlFlow::Continue(())
    })
    .unwrap();
    assert_eq!(outcome, Outcome::Completed(Completion::Sorted(vec![1, 2, 3])));
    assert_eq!(arrays.first().unwrap(), &vec![3, 1, 2]);
    assert_eq!(arrays.last().unwrap(), &vec![1, 2, 3]);
}

#[test]
fn test_run_traversal_on_empty_tree_reports_no_data() {
    let mut called = false;
    let outcome = run_traversal(TraversalKind::Postorder, &BinaryTree::new(), 50, |_| {
        called = true;
        ControlFlow::Continue(())
    })
    .unwrap();
    assert_eq!(outcome, Outcome::NoData);
    assert!(!called);
}

#[test]
fn test_run_helpers_validate_before_running() {
    let err = run_sort(SortKind::Quick, &[2, 1], 10, |_| ControlFlow::Continue(())).unwrap_err();
    assert_eq!(err.parameter(), Some("delay"));
}
