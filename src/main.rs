// algotty: step-by-step sorting and tree traversal visualizer

use std::fs::File;
use std::io;
use std::ops::ControlFlow;
use std::path::Path;
use std::sync::Mutex;

use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing_subscriber::EnvFilter;

use algotty::config::{sort_input, Cli, Command};
use algotty::engine::input::validate_delay;
use algotty::layout::LayoutConfig;
use algotty::scheduler::{run_sort, run_traversal, EventKind, Outcome, RunEvent};
use algotty::ui::{App, AppSettings};

fn init_logging(log_file: Option<&Path>, interactive: bool) -> io::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    match log_file {
        Some(path) => {
            let file = File::create(path)?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        // The TUI owns the terminal; without a file it stays silent
        None if interactive => {}
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(io::stderr)
                .init();
        }
    }
    Ok(())
}

fn print_event(event: &RunEvent) -> ControlFlow<()> {
    match &event.kind {
        EventKind::Step(snapshot) => println!("{}", snapshot),
        EventKind::Completed(completion) => println!("completed: {}", completion),
        EventKind::Cancelled(snapshot) => println!("cancelled: {}", snapshot),
    }
    ControlFlow::Continue(())
}

fn report(outcome: Outcome) {
    if outcome == Outcome::NoData {
        println!("(empty tree, nothing to traverse)");
    }
}

fn run_headless(cli: &Cli, command: &Command) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Command::Sort {
            kind,
            values,
            length,
        } => {
            let mut rng = cli.rng();
            let input = sort_input(values.as_deref(), *length, &mut rng)?;
            report(run_sort(*kind, &input, cli.sort_delay(), print_event)?);
        }
        Command::Traverse { kind, tree } => {
            let session = tree.build(LayoutConfig::default())?;
            report(run_traversal(
                *kind,
                session.tree(),
                cli.traversal_delay(),
                print_event,
            )?);
        }
        Command::Layout { tree, direction } => {
            let config = LayoutConfig {
                direction: *direction,
                ..LayoutConfig::default()
            };
            let session = tree.build(config)?;
            if session.layout().is_empty() {
                println!("(empty tree)");
            }
            for node in &session.layout().nodes {
                let (left, top) = node.top_left(session.config());
                println!(
                    "{:<8} {:>6} rank={} order={} x={:.1} y={:.1} box=({:.1}, {:.1})",
                    node.id, node.label, node.rank, node.order, node.x, node.y, left, top
                );
            }
        }
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(cli.log_file.as_deref(), cli.command.is_none())?;

    if let Some(command) = &cli.command {
        if let Err(e) = run_headless(&cli, command) {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
        return Ok(());
    }

    if let Some(delay_ms) = cli.delay_ms {
        validate_delay(delay_ms)?;
    }
    let settings = AppSettings {
        sort_delay_ms: cli.sort_delay(),
        traversal_delay_ms: cli.traversal_delay(),
        ..AppSettings::default()
    };
    let mut app = App::new(settings, cli.rng());

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}
