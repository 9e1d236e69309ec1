//! Run scheduler: paces one sorting or traversal run at a time
//!
//! The scheduler owns the active engine and hands out its snapshots no faster
//! than the configured delay. It never sleeps on its own: [`RunScheduler::pump`]
//! is given the current instant and emits at most one [`RunEvent`] when the
//! next step is due. The terminal UI calls it from its event loop, the
//! blocking helpers [`run_sort`] and [`run_traversal`] call it from a sleep
//! loop, and tests call it with synthetic instants.
//!
//! Only one run is live per scheduler. Starting another while one is active
//! is rejected with [`EngineError::RunAlreadyActive`]; the caller cancels
//! first. Cancelling (directly or through a [`RunToken`]) delivers exactly one
//! `Cancelled` event carrying a snapshot with every highlight cleared, and
//! nothing else for that run afterwards.

mod token;

pub use token::{RunId, RunToken};

use crate::engine::errors::EngineError;
use crate::engine::input::validate_delay;
use crate::engine::sorting::{SortKind, SortRun};
use crate::engine::traversal::{TraversalKind, TraversalRun};
use crate::snapshot::{join_order, Completion, Snapshot, SortAction, SortSnapshot, TraversalSnapshot};
use crate::tree::BinaryTree;
use std::ops::ControlFlow;
use std::thread;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// What to run; holds its own copy of the caller's data
#[derive(Debug, Clone)]
pub enum RunRequest {
    Sort { kind: SortKind, input: Vec<i64> },
    Traversal { kind: TraversalKind, tree: BinaryTree },
}

impl RunRequest {
    pub fn sort(kind: SortKind, input: &[i64]) -> Self {
        RunRequest::Sort {
            kind,
            input: input.to_vec(),
        }
    }

    pub fn traversal(kind: TraversalKind, tree: &BinaryTree) -> Self {
        RunRequest::Traversal {
            kind,
            tree: tree.clone(),
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            RunRequest::Sort { kind, .. } => kind.title(),
            RunRequest::Traversal { kind, .. } => kind.title(),
        }
    }
}

/// Result of a successful `start`
#[derive(Debug, Clone)]
pub enum Launch {
    Started(RunToken),
    /// The tree was empty; no run was created
    NoData,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventKind {
    Step(Snapshot),
    Completed(Completion),
    /// Final event of a cancelled run, highlights cleared
    Cancelled(Snapshot),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunEvent {
    pub run: RunId,
    pub kind: EventKind,
}

impl RunEvent {
    /// Whether this is the last event of its run
    pub fn is_terminal(&self) -> bool {
        !matches!(self.kind, EventKind::Step(_))
    }
}

/// How a driven run ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Completed(Completion),
    Cancelled,
    /// Nothing to run (empty tree, or no active run)
    NoData,
}

#[derive(Debug)]
enum Engine {
    Sort(SortRun),
    Traversal(TraversalRun),
}

impl Engine {
    fn next_snapshot(&mut self) -> Option<Snapshot> {
        match self {
            Engine::Sort(run) => run.next().map(Snapshot::Sort),
            Engine::Traversal(run) => run.next().map(Snapshot::Traversal),
        }
    }

    fn is_finished(&self) -> bool {
        match self {
            Engine::Sort(run) => run.is_finished(),
            Engine::Traversal(run) => run.is_finished(),
        }
    }

    /// Highlight-free view of the engine's current data
    fn neutral(&self) -> Snapshot {
        match self {
            Engine::Sort(run) => {
                Snapshot::Sort(SortSnapshot::neutral(run.array().to_vec(), SortAction::Reset))
            }
            Engine::Traversal(_) => Snapshot::Traversal(TraversalSnapshot::default()),
        }
    }

    fn completion(&self) -> Completion {
        match self {
            Engine::Sort(run) => Completion::Sorted(run.array().to_vec()),
            Engine::Traversal(run) => {
                let order = run.values();
                Completion::Traversed {
                    summary: join_order(&order),
                    order,
                }
            }
        }
    }
}

#[derive(Debug)]
struct ActiveRun {
    token: RunToken,
    title: &'static str,
    engine: Engine,
    delay: Duration,
    next_due: Instant,
    last: Option<Snapshot>,
    steps: usize,
}

/// Owner of the (at most one) active run
#[derive(Debug, Default)]
pub struct RunScheduler {
    active: Option<ActiveRun>,
    next_id: u64,
}

impl RunScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and begin a run; its first step is due immediately
    pub fn start(&mut self, request: RunRequest, delay_ms: u64) -> Result<Launch, EngineError> {
        let delay = validate_delay(delay_ms)?;
        if let Some(active) = &self.active {
            warn!(
                active = %active.token.id(),
                requested = request.title(),
                "start rejected, a run is already active"
            );
            return Err(EngineError::RunAlreadyActive {
                active: active.token.id(),
            });
        }

        let title = request.title();
        let engine = match request {
            RunRequest::Sort { kind, input } => Engine::Sort(SortRun::new(kind, &input)),
            RunRequest::Traversal { kind, tree } => match TraversalRun::new(kind, &tree) {
                Some(run) => Engine::Traversal(run),
                None => {
                    debug!(traversal = title, "empty tree, nothing to run");
                    return Ok(Launch::NoData);
                }
            },
        };

        self.next_id += 1;
        let token = RunToken::new(RunId(self.next_id));
        info!(run = %token.id(), algorithm = title, delay_ms, "run started");
        self.active = Some(ActiveRun {
            token: token.clone(),
            title,
            engine,
            delay,
            next_due: Instant::now(),
            last: None,
            steps: 0,
        });
        Ok(Launch::Started(token))
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    pub fn active_run(&self) -> Option<RunId> {
        self.active.as_ref().map(|a| a.token.id())
    }

    /// Steps delivered so far by the active run
    pub fn steps(&self) -> usize {
        self.active.as_ref().map_or(0, |a| a.steps)
    }

    /// When the next event becomes available
    pub fn next_due(&self) -> Option<Instant> {
        self.active.as_ref().map(|a| a.next_due)
    }

    /// Deliver the next event if it is due at `now`
    pub fn pump(&mut self, now: Instant) -> Option<RunEvent> {
        let active = self.active.as_mut()?;
        if active.token.is_cancelled() {
            return self.cancel();
        }
        if now < active.next_due {
            return None;
        }

        if let Some(snapshot) = active.engine.next_snapshot() {
            active.steps += 1;
            active.next_due = if active.engine.is_finished() {
                now
            } else {
                now + active.delay
            };
            active.last = Some(snapshot.clone());
            debug!(run = %active.token.id(), step = active.steps, "step");
            return Some(RunEvent {
                run: active.token.id(),
                kind: EventKind::Step(snapshot),
            });
        }

        let finished = self.active.take()?;
        let completion = finished.engine.completion();
        info!(
            run = %finished.token.id(),
            algorithm = finished.title,
            steps = finished.steps,
            result = %completion,
            "run completed"
        );
        Some(RunEvent {
            run: finished.token.id(),
            kind: EventKind::Completed(completion),
        })
    }

    /// Stop the active run now and return its neutral final event
    pub fn cancel(&mut self) -> Option<RunEvent> {
        let run = self.active.take()?;
        run.token.cancel();
        let neutral = match &run.last {
            Some(last) => last.cleared(),
            None => run.engine.neutral(),
        };
        info!(
            run = %run.token.id(),
            algorithm = run.title,
            steps = run.steps,
            "run cancelled"
        );
        Some(RunEvent {
            run: run.token.id(),
            kind: EventKind::Cancelled(neutral),
        })
    }

    /// Block until the active run ends, sleeping between steps
    ///
    /// Every event goes to `sink`. Returning `Break` from the sink cancels the
    /// run; the sink then receives the `Cancelled` event as the last call.
    pub fn drive<F>(&mut self, mut sink: F) -> Outcome
    where
        F: FnMut(&RunEvent) -> ControlFlow<()>,
    {
        loop {
            let Some(due) = self.next_due() else {
                return Outcome::NoData;
            };
            let now = Instant::now();
            if due > now {
                thread::sleep(due - now);
            }
            let Some(event) = self.pump(Instant::now()) else {
                continue;
            };

            let flow = sink(&event);
            match event.kind {
                EventKind::Completed(completion) => return Outcome::Completed(completion),
                EventKind::Cancelled(_) => return Outcome::Cancelled,
                EventKind::Step(_) => {}
            }
            if flow.is_break() {
                if let Some(cancelled) = self.cancel() {
                    // Terminal event; the sink has nothing left to stop
                    let _ = sink(&cancelled);
                }
                return Outcome::Cancelled;
            }
        }
    }
}

fn run_blocking<F>(request: RunRequest, delay_ms: u64, sink: F) -> Result<Outcome, EngineError>
where
    F: FnMut(&RunEvent) -> ControlFlow<()>,
{
    let mut scheduler = RunScheduler::new();
    match scheduler.start(request, delay_ms)? {
        Launch::Started(_) => Ok(scheduler.drive(sink)),
        Launch::NoData => Ok(Outcome::NoData),
    }
}

/// Sort a copy of `input`, pacing snapshots `delay_ms` apart
pub fn run_sort<F>(
    kind: SortKind,
    input: &[i64],
    delay_ms: u64,
    sink: F,
) -> Result<Outcome, EngineError>
where
    F: FnMut(&RunEvent) -> ControlFlow<()>,
{
    run_blocking(RunRequest::sort(kind, input), delay_ms, sink)
}

/// Traverse `tree`, pacing ticks `delay_ms` apart
pub fn run_traversal<F>(
    kind: TraversalKind,
    tree: &BinaryTree,
    delay_ms: u64,
    sink: F,
) -> Result<Outcome, EngineError>
where
    F: FnMut(&RunEvent) -> ControlFlow<()>,
{
    run_blocking(RunRequest::traversal(kind, tree), delay_ms, sink)
}
