// Constants for the stepping engines and the layout

/// Smallest accepted pause between two steps of a paced run
pub const MIN_DELAY_MS: u64 = 50;

/// Largest accepted pause between two steps of a paced run
pub const MAX_DELAY_MS: u64 = 2000;

/// Default pause for sorting runs
pub const DEFAULT_SORT_DELAY_MS: u64 = 300;

/// Default pause for traversal runs (one highlighted node per second)
pub const DEFAULT_TRAVERSAL_DELAY_MS: u64 = 1000;

/// Step applied by the `+`/`-` keys
pub const DELAY_STEP_MS: u64 = 50;

/// Bounds on generated array lengths
pub const MIN_ARRAY_LEN: usize = 5;
pub const MAX_ARRAY_LEN: usize = 20;
pub const DEFAULT_ARRAY_LEN: usize = 8;

/// Generated values are drawn from `1..=RANDOM_VALUE_MAX`
pub const RANDOM_VALUE_MAX: i64 = 100;

/// Maximum number of values a tree session accepts
pub const MAX_TREE_VALUES: usize = 30;

/// Bounds on the level count of a generated complete tree
pub const MIN_TREE_LEVELS: u32 = 1;
pub const MAX_TREE_LEVELS: u32 = 5;

/// Separator used when reporting a traversal order
pub const ORDER_SEPARATOR: &str = " -> ";

/// Default layout geometry, in logical units
pub const NODE_WIDTH: f64 = 80.0;
pub const NODE_HEIGHT: f64 = 80.0;
pub const RANK_SEPARATION: f64 = 100.0;
pub const NODE_SEPARATION: f64 = 50.0;

/// Horizontal offset applied to left/right children after layout
pub const SIDE_NUDGE: f64 = 15.0;
