//! CLI argument definitions

use clap::{Parser, Subcommand};
use clap_complete::Shell;

use super::list::ListArgs;
use super::svg::SvgArgs;

#[derive(Parser)]
#[command(name = "dayclock")]
#[command(version)]
#[command(about = "Terminal hour clock that draws the current hour's tasks as arcs")]
#[command(
    long_about = "Run without a subcommand to open the interactive clock. Tasks live only \
for the lifetime of the process."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the task table and the active task's countdown
    List(ListArgs),

    /// Render the clock face as an SVG document
    Svg(SvgArgs),

    /// Generate shell completions
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
