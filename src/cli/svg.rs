//! `dayclock svg` command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::fs;
use std::path::PathBuf;

use super::ScheduleArgs;
use crate::clock::render_svg;

#[derive(Args)]
pub struct SvgArgs {
    #[command(flatten)]
    schedule: ScheduleArgs,

    /// Write to this file instead of stdout
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,
}

pub async fn run(args: SvgArgs) -> Result<()> {
    let config = super::load_config()?;
    let store = args.schedule.build_store(&config)?;
    let face = store.face(&config.clock.layout());
    let svg = render_svg(&face, config.clock.palette.as_slice());

    match args.output {
        Some(path) => {
            fs::write(&path, svg)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::info!("Wrote clock face to {}", path.display());
        }
        None => print!("{}", svg),
    }
    Ok(())
}
