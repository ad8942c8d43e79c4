//! Line-level diffing for two side-by-side panes
//!
//! The pipeline is: split both texts into lines, run a line diff, expand
//! every removed-then-added block through the similarity pairing, and emit
//! one [`DiffRow`] per synchronized visual line.

mod inline;
mod line_diff;
mod pairing;
mod similarity;
mod stats;
mod types;

pub use inline::{InlineSpan, SpanKind, compute_inline_diffs};
pub use line_diff::{compute_line_diff, split_lines};
pub use pairing::{PairedLine, pair_lines};
pub use similarity::similarity;
pub use stats::{DiffStats, calculate_stats};
pub use types::{DiffResult, DiffRow, LineKind, Side, SideLine};
