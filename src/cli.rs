use clap::Parser;
use diff_panes::constant::BIN_NAME;
use diff_panes::transform::ContentTransform;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = BIN_NAME,
    version,
    about = "Side-by-side line diff of two files"
)]
pub struct Cli {
    /// Original file, shown in the left column
    pub left: PathBuf,

    /// Changed file, shown in the right column
    pub right: PathBuf,

    /// Print rows and statistics as JSON
    #[arg(long)]
    pub json: bool,

    /// Rewrite content before diffing: format, escape, unescape, compact or parse
    #[arg(long, value_name = "NAME")]
    pub transform: Option<ContentTransform>,
}
