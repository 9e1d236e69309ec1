//! Command line and the settings derived from it
//!
//! The CLI only parses. Bounds are checked by [`crate::engine::input`] and
//! the scheduler, so the terminal UI and the headless commands reject the
//! same inputs with the same messages.

use crate::engine::constants::{DEFAULT_ARRAY_LEN, DEFAULT_SORT_DELAY_MS, DEFAULT_TRAVERSAL_DELAY_MS};
use crate::engine::errors::EngineError;
use crate::engine::input::{parse_values, random_values, validate_array_len};
use crate::engine::sorting::SortKind;
use crate::engine::traversal::TraversalKind;
use crate::layout::{LayoutConfig, RankDir};
use crate::tree::session::TreeSession;
use clap::{Args, Parser, Subcommand};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "algotty",
    about = "Watch sorting algorithms and tree traversals run step by step",
    version
)]
pub struct Cli {
    /// Headless command; without one the interactive UI starts
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Milliseconds between steps (50..=2000)
    #[arg(long = "delay-ms", global = true)]
    pub delay_ms: Option<u64>,

    /// Seed for randomly generated arrays
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Write logs to this file (the UI logs nowhere otherwise)
    #[arg(long = "log-file", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Sort an array and print every snapshot
    Sort {
        /// bubble, selection, insertion, merge, quick, heap or shell
        kind: SortKind,
        /// Comma separated integers; random when omitted
        #[arg(long)]
        values: Option<String>,
        /// Length of the random array
        #[arg(long, conflicts_with = "values")]
        length: Option<usize>,
    },
    /// Traverse a tree and print every tick
    Traverse {
        /// preorder, inorder or postorder
        kind: TraversalKind,
        #[command(flatten)]
        tree: TreeArgs,
    },
    /// Print the laid-out coordinates of a tree
    Layout {
        #[command(flatten)]
        tree: TreeArgs,
        /// TB (top to bottom) or LR (left to right)
        #[arg(long, default_value = "TB")]
        direction: RankDir,
    },
}

/// Where a tree comes from: inserted values or a complete tree
#[derive(Debug, Clone, Args)]
#[group(required = true, multiple = false)]
pub struct TreeArgs {
    /// Values inserted into a binary search tree, in order
    #[arg(long)]
    pub values: Option<String>,
    /// Levels of a complete tree labelled 1, 2, 3, ...
    #[arg(long)]
    pub levels: Option<u32>,
}

impl TreeArgs {
    pub fn build(&self, config: LayoutConfig) -> Result<TreeSession, EngineError> {
        let mut session = TreeSession::new(config);
        match (&self.values, self.levels) {
            (Some(text), _) => {
                for value in parse_values(text)? {
                    session.insert(value)?;
                }
            }
            (None, Some(levels)) => session.generate_complete(levels)?,
            (None, None) => {}
        }
        Ok(session)
    }
}

impl Cli {
    pub fn sort_delay(&self) -> u64 {
        self.delay_ms.unwrap_or(DEFAULT_SORT_DELAY_MS)
    }

    pub fn traversal_delay(&self) -> u64 {
        self.delay_ms.unwrap_or(DEFAULT_TRAVERSAL_DELAY_MS)
    }

    pub fn rng(&self) -> SmallRng {
        match self.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        }
    }
}

/// The array to sort: parsed from `values`, or random of length `length`
pub fn sort_input(
    values: Option<&str>,
    length: Option<usize>,
    rng: &mut SmallRng,
) -> Result<Vec<i64>, EngineError> {
    match values {
        Some(text) => parse_values(text),
        None => {
            let len = validate_array_len(length.unwrap_or(DEFAULT_ARRAY_LEN))?;
            Ok(random_values(len, rng))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parses_sort_command() {
        let cli = Cli::try_parse_from(["algotty", "sort", "quick", "--values", "5,3,1", "--delay-ms", "50"]).unwrap();
        assert_eq!(cli.sort_delay(), 50);
        match cli.command {
            Some(Command::Sort { kind, values, length }) => {
                assert_eq!(kind, SortKind::Quick);
                assert_eq!(values.as_deref(), Some("5,3,1"));
                assert_eq!(length, None);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_tree_source_is_required_and_exclusive() {
        assert!(Cli::try_parse_from(["algotty", "traverse", "inorder"]).is_err());
        assert!(Cli::try_parse_from(["algotty", "layout", "--values", "1", "--levels", "2"]).is_err());
        assert!(Cli::try_parse_from(["algotty", "traverse", "bogus", "--levels", "2"]).is_err());
    }

    #[test]
    fn test_defaults_without_subcommand() {
        let cli = Cli::try_parse_from(["algotty"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.sort_delay(), DEFAULT_SORT_DELAY_MS);
        assert_eq!(cli.traversal_delay(), DEFAULT_TRAVERSAL_DELAY_MS);
    }

    #[test]
    fn test_seeded_sort_input_is_reproducible() {
        let mut a = SmallRng::seed_from_u64(7);
        let mut b = SmallRng::seed_from_u64(7);
        let first = sort_input(None, Some(10), &mut a).unwrap();
        assert_eq!(first, sort_input(None, Some(10), &mut b).unwrap());
        assert_eq!(first.len(), 10);
        assert!(sort_input(None, Some(21), &mut a).is_err());
        assert_eq!(sort_input(Some("4 2"), None, &mut a).unwrap(), vec![4, 2]);
    }

    #[test]
    fn test_tree_args_build_session() {
        let args = TreeArgs {
            values: None,
            levels: Some(3),
        };
        let session = args.build(LayoutConfig::default()).unwrap();
        assert_eq!(session.tree().len(), 7);
        assert_eq!(session.layout().depth(), 3);
    }
}
