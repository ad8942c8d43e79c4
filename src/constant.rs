/// Application name and metadata constants
pub const APP_NAME: &str = "Diff Panes";
pub const BIN_NAME: &str = "diff-panes";

/// Minimum similarity for a removed/added pair to be shown as one modified line
pub const SIMILARITY_THRESHOLD: f64 = 0.3;

// Controller defaults
pub const DEFAULT_DEBOUNCE_MS: u64 = 300;
pub const DEFAULT_ROW_HEIGHT: f32 = 20.0;

/// How many nested JSON string layers `Parse` will peel before giving up
pub const MAX_PARSE_DEPTH: usize = 10;
