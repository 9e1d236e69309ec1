//! Main TUI application state and logic

use crate::engine::constants::{
    DEFAULT_ARRAY_LEN, DEFAULT_SORT_DELAY_MS, DEFAULT_TRAVERSAL_DELAY_MS, DELAY_STEP_MS,
    MAX_DELAY_MS, MAX_TREE_LEVELS, MIN_DELAY_MS,
};
use crate::engine::errors::EngineError;
use crate::engine::input::random_values;
use crate::engine::sorting::SortKind;
use crate::engine::traversal::TraversalKind;
use crate::scheduler::{EventKind, Launch, RunEvent, RunRequest, RunScheduler};
use crate::snapshot::{Completion, Snapshot, SortAction, SortSnapshot, TraversalSnapshot};
use crate::tree::session::TreeSession;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use rand::rngs::SmallRng;
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};
use tracing::debug;

/// Which visual surface is on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Sort,
    Tree,
}

impl View {
    pub fn next(self) -> Self {
        match self {
            View::Sort => View::Tree,
            View::Tree => View::Sort,
        }
    }
}

/// Starting values for the interactive session
#[derive(Debug, Clone)]
pub struct AppSettings {
    pub sort_delay_ms: u64,
    pub traversal_delay_ms: u64,
    pub array_len: usize,
}

impl Default for AppSettings {
    fn default() -> Self {
        AppSettings {
            sort_delay_ms: DEFAULT_SORT_DELAY_MS,
            traversal_delay_ms: DEFAULT_TRAVERSAL_DELAY_MS,
            array_len: DEFAULT_ARRAY_LEN,
        }
    }
}

/// The main application state
///
/// Each view has its own scheduler, so a sort and a traversal may run side
/// by side while each view still runs at most one thing at a time.
pub struct App {
    pub view: View,
    pub should_quit: bool,
    pub status_message: String,

    /// Sorting view: the array the next sort starts from and what is drawn
    pub array: Vec<i64>,
    pub sort_frame: SortSnapshot,
    pub sort_title: &'static str,
    pub sort_delay_ms: u64,
    sort_runs: RunScheduler,
    array_len: usize,

    /// Tree view
    pub tree: TreeSession,
    pub traversal_frame: TraversalSnapshot,
    pub traversal_result: Option<String>,
    pub traversal_title: &'static str,
    pub traversal_delay_ms: u64,
    tree_runs: RunScheduler,
    /// Digits typed before Enter
    pub input_buffer: String,
    levels: u32,

    rng: SmallRng,
}

impl App {
    pub fn new(settings: AppSettings, mut rng: SmallRng) -> Self {
        let array = random_values(settings.array_len, &mut rng);
        App {
            view: View::Sort,
            should_quit: false,
            status_message: String::from("Ready! Press 1-7 to sort"),
            sort_frame: SortSnapshot::neutral(array.clone(), SortAction::Initial),
            array,
            sort_title: "Sorting",
            sort_delay_ms: settings.sort_delay_ms,
            sort_runs: RunScheduler::new(),
            array_len: settings.array_len,
            tree: TreeSession::default(),
            traversal_frame: TraversalSnapshot::default(),
            traversal_result: None,
            traversal_title: "Binary Tree",
            traversal_delay_ms: settings.traversal_delay_ms,
            tree_runs: RunScheduler::new(),
            input_buffer: String::new(),
            levels: 0,
            rng,
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.pump(Instant::now());

            // Short poll so that runs keep stepping while no key is pressed
            if event::poll(Duration::from_millis(20))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        self.sort_runs.cancel();
        self.tree_runs.cancel();
        Ok(())
    }

    /// Deliver every event that is due at `now`
    pub fn pump(&mut self, now: Instant) {
        while let Some(event) = self.sort_runs.pump(now) {
            self.apply_sort_event(event);
        }
        while let Some(event) = self.tree_runs.pump(now) {
            self.apply_tree_event(event);
        }
    }

    pub fn is_running(&self, view: View) -> bool {
        match view {
            View::Sort => self.sort_runs.is_active(),
            View::Tree => self.tree_runs.is_active(),
        }
    }

    fn steps(&self) -> usize {
        match self.view {
            View::Sort => self.sort_runs.steps(),
            View::Tree => self.tree_runs.steps(),
        }
    }

    fn delay_ms(&self) -> u64 {
        match self.view {
            View::Sort => self.sort_delay_ms,
            View::Tree => self.traversal_delay_ms,
        }
    }

    fn apply_sort_event(&mut self, event: RunEvent) {
        match event.kind {
            EventKind::Step(Snapshot::Sort(snapshot)) => self.sort_frame = snapshot,
            EventKind::Completed(Completion::Sorted(array)) => {
                self.status_message = format!("{} finished", self.sort_title);
                self.array = array;
            }
            EventKind::Cancelled(Snapshot::Sort(snapshot)) => {
                self.status_message = format!("{} cancelled", self.sort_title);
                self.array = snapshot.array.clone();
                self.sort_frame = snapshot;
            }
            other => debug!(?other, "ignored event on the sorting view"),
        }
    }

    fn apply_tree_event(&mut self, event: RunEvent) {
        match event.kind {
            EventKind::Step(Snapshot::Traversal(snapshot)) => self.traversal_frame = snapshot,
            EventKind::Completed(Completion::Traversed { summary, .. }) => {
                self.status_message = format!("{} finished", self.traversal_title);
                self.traversal_result = Some(summary);
            }
            EventKind::Cancelled(Snapshot::Traversal(snapshot)) => {
                self.status_message = format!("{} cancelled", self.traversal_title);
                self.traversal_frame = snapshot;
            }
            other => debug!(?other, "ignored event on the tree view"),
        }
    }

    fn start_sort(&mut self, kind: SortKind) {
        match self
            .sort_runs
            .start(RunRequest::sort(kind, &self.array), self.sort_delay_ms)
        {
            Ok(_) => {
                self.sort_title = kind.title();
                self.status_message = format!("Running {}", kind.title());
            }
            Err(err) => self.status_message = err.to_string(),
        }
    }

    fn start_traversal(&mut self, kind: TraversalKind) {
        let request = RunRequest::traversal(kind, self.tree.tree());
        match self.tree_runs.start(request, self.traversal_delay_ms) {
            Ok(Launch::Started(_)) => {
                self.traversal_title = kind.title();
                self.traversal_frame = TraversalSnapshot::default();
                self.traversal_result = None;
                self.status_message = format!("Running {}", kind.title());
            }
            Ok(Launch::NoData) => self.status_message = String::from("The tree is empty"),
            Err(err) => self.status_message = err.to_string(),
        }
    }

    fn cancel_active(&mut self) {
        let event = match self.view {
            View::Sort => self.sort_runs.cancel(),
            View::Tree => self.tree_runs.cancel(),
        };
        match event {
            Some(event) if self.view == View::Sort => self.apply_sort_event(event),
            Some(event) => self.apply_tree_event(event),
            None => self.status_message = String::from("Nothing is running"),
        }
    }

    fn change_delay(&mut self, up: bool) {
        let delay = match self.view {
            View::Sort => &mut self.sort_delay_ms,
            View::Tree => &mut self.traversal_delay_ms,
        };
        *delay = if up {
            (*delay + DELAY_STEP_MS).min(MAX_DELAY_MS)
        } else {
            delay.saturating_sub(DELAY_STEP_MS).max(MIN_DELAY_MS)
        };
        let value = *delay;
        self.status_message = format!("Delay {} ms, used by the next run", value);
    }

    /// Tree mutations are refused while a traversal holds highlights on it
    fn mutate_tree<F>(&mut self, change: F) -> bool
    where
        F: FnOnce(&mut TreeSession) -> Result<(), EngineError>,
    {
        if self.tree_runs.is_active() {
            self.status_message = String::from("Cancel the traversal before changing the tree");
            return false;
        }
        match change(&mut self.tree) {
            Ok(()) => {
                self.traversal_frame = TraversalSnapshot::default();
                self.traversal_result = None;
                self.status_message = format!("Tree has {} nodes", self.tree.tree().len());
                true
            }
            Err(err) => {
                self.status_message = err.to_string();
                false
            }
        }
    }

    fn submit_input(&mut self) {
        let text = std::mem::take(&mut self.input_buffer);
        match text.parse::<i64>() {
            Ok(value) => {
                self.mutate_tree(|tree| tree.insert(value));
            }
            Err(_) => self.status_message = format!("'{}' is not a number", text),
        }
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(frame.area());

        match self.view {
            View::Sort => super::panes::render_bars_pane(
                frame,
                rows[0],
                self.sort_title,
                &self.sort_frame,
                self.sort_runs.is_active(),
            ),
            View::Tree => {
                let parts = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([Constraint::Min(0), Constraint::Length(3)])
                    .split(rows[0]);
                super::panes::render_tree_pane(
                    frame,
                    parts[0],
                    &super::panes::TreeRenderData {
                        layout: self.tree.layout(),
                        config: self.tree.config(),
                        traversal: &self.traversal_frame,
                        title: self.traversal_title,
                        is_running: self.tree_runs.is_active(),
                    },
                );
                super::panes::render_result_pane(
                    frame,
                    parts[1],
                    &self.traversal_frame,
                    self.traversal_result.as_deref(),
                    &self.input_buffer,
                );
            }
        }

        super::panes::render_status_bar(
            frame,
            rows[1],
            &super::panes::StatusRenderData {
                view: self.view,
                message: &self.status_message,
                steps: self.steps(),
                delay_ms: self.delay_ms(),
                is_running: self.is_running(self.view),
            },
        );
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            KeyCode::Tab => {
                self.view = self.view.next();
                self.input_buffer.clear();
            }
            KeyCode::Char('+') | KeyCode::Char('=') => self.change_delay(true),
            KeyCode::Char('-') => self.change_delay(false),
            KeyCode::Char('c') => self.cancel_active(),
            _ => match self.view {
                View::Sort => self.handle_sort_key(key),
                View::Tree => self.handle_tree_key(key),
            },
        }
    }

    fn handle_sort_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char(c @ '1'..='7') => {
                let index = (c as usize) - ('1' as usize);
                self.start_sort(SortKind::ALL[index]);
            }
            KeyCode::Char('r') => {
                if self.sort_runs.is_active() {
                    self.status_message = String::from("Cancel the sort before shuffling");
                    return;
                }
                self.array = random_values(self.array_len, &mut self.rng);
                self.sort_frame = SortSnapshot::neutral(self.array.clone(), SortAction::Initial);
                self.sort_title = "Sorting";
                self.status_message = String::from("New random array");
            }
            _ => {}
        }
    }

    fn handle_tree_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('p') => self.start_traversal(TraversalKind::Preorder),
            KeyCode::Char('i') => self.start_traversal(TraversalKind::Inorder),
            KeyCode::Char('o') => self.start_traversal(TraversalKind::Postorder),
            KeyCode::Char(c @ '0'..='9') => self.input_buffer.push(c),
            KeyCode::Backspace => {
                self.input_buffer.pop();
            }
            KeyCode::Enter if !self.input_buffer.is_empty() => self.submit_input(),
            KeyCode::Char('x') => {
                self.mutate_tree(|tree| {
                    tree.clear();
                    Ok(())
                });
            }
            KeyCode::Char('l') => {
                let levels = self.levels % MAX_TREE_LEVELS + 1;
                if self.mutate_tree(|tree| tree.generate_complete(levels)) {
                    self.levels = levels;
                }
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use rand::SeedableRng;

    fn app() -> App {
        App::new(AppSettings::default(), SmallRng::seed_from_u64(1))
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn test_sort_runs_to_sorted_array() {
        let mut app = app();
        let mut expected = app.array.clone();
        expected.sort();

        press(&mut app, KeyCode::Char('5'));
        assert!(app.is_running(View::Sort));
        let mut now = Instant::now();
        for _ in 0..10_000 {
            app.pump(now);
            if !app.is_running(View::Sort) {
                break;
            }
            now += Duration::from_millis(app.sort_delay_ms);
        }
        assert_eq!(app.array, expected);
        assert!(app.sort_frame.is_neutral());
    }

    #[test]
    fn test_cancel_leaves_neutral_frame() {
        let mut app = app();
        press(&mut app, KeyCode::Char('1'));
        let now = Instant::now();
        app.pump(now);
        app.pump(now + Duration::from_millis(app.sort_delay_ms));
        press(&mut app, KeyCode::Char('c'));
        assert!(!app.is_running(View::Sort));
        assert!(app.sort_frame.is_neutral());
        assert_eq!(app.sort_frame.action, SortAction::Reset);
    }

    #[test]
    fn test_second_sort_is_refused_while_running() {
        let mut app = app();
        press(&mut app, KeyCode::Char('1'));
        press(&mut app, KeyCode::Char('2'));
        assert!(app.status_message.contains("still active"));
        assert_eq!(app.sort_title, SortKind::Bubble.title());
    }

    #[test]
    fn test_delay_keys_stay_in_bounds() {
        let mut app = app();
        for _ in 0..100 {
            press(&mut app, KeyCode::Char('+'));
        }
        assert_eq!(app.sort_delay_ms, MAX_DELAY_MS);
        for _ in 0..100 {
            press(&mut app, KeyCode::Char('-'));
        }
        assert_eq!(app.sort_delay_ms, MIN_DELAY_MS);
    }

    #[test]
    fn test_typed_values_build_the_tree() {
        let mut app = app();
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Char('4'));
        press(&mut app, KeyCode::Char('2'));
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('7'));
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.tree.values(), &[42, 7]);
        assert!(app.input_buffer.is_empty());

        press(&mut app, KeyCode::Char('i'));
        let mut now = Instant::now();
        while app.is_running(View::Tree) {
            app.pump(now);
            now += Duration::from_millis(app.traversal_delay_ms);
        }
        assert_eq!(app.traversal_result.as_deref(), Some("7 -> 42"));
    }

    #[test]
    fn test_tree_is_locked_during_traversal() {
        let mut app = app();
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Char('l'));
        press(&mut app, KeyCode::Char('l'));
        assert_eq!(app.tree.tree().len(), 3);

        press(&mut app, KeyCode::Char('p'));
        press(&mut app, KeyCode::Char('x'));
        assert_eq!(app.tree.tree().len(), 3);
        press(&mut app, KeyCode::Char('c'));
        press(&mut app, KeyCode::Char('x'));
        assert!(app.tree.tree().is_empty());
    }
}
