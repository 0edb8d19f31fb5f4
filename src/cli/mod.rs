//! CLI command implementations

pub mod definition;
pub mod list;
pub mod svg;

pub use definition::{Cli, Commands};

use anyhow::{bail, Context, Result};
use chrono::{Local, NaiveDateTime, NaiveTime};
use clap::Args;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::config::Config;
use crate::task::{NewTask, TaskStore};

/// Arguments shared by commands that build a one-off schedule
#[derive(Args, Debug, Default)]
pub struct ScheduleArgs {
    /// Time to evaluate the clock at, HH:MM or HH:MM:SS (defaults to now)
    #[arg(long, value_parser = parse_at)]
    pub at: Option<NaiveTime>,

    /// Add a task: NAME,START,END[,ICON]. Repeatable; validated like the form
    #[arg(short = 't', long = "task", value_name = "SPEC")]
    pub tasks: Vec<NewTask>,

    /// Start from an empty schedule instead of the example tasks
    #[arg(long)]
    pub no_seed: bool,
}

fn parse_at(value: &str) -> std::result::Result<NaiveTime, String> {
    NaiveTime::parse_from_str(value, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M"))
        .map_err(|_| format!("expected HH:MM or HH:MM:SS, got '{value}'"))
}

impl ScheduleArgs {
    pub fn now(&self) -> NaiveDateTime {
        let now = Local::now().naive_local();
        match self.at {
            Some(time) => now.date().and_time(time),
            None => now,
        }
    }

    /// Build the store the command works on, adding `--task` entries in order.
    ///
    /// The example tasks are only added when neither `--no-seed` nor the
    /// config turns them off.
    pub fn build_store(&self, config: &Config) -> Result<TaskStore> {
        let now = self.now();
        let mut store = if self.no_seed || !config.seed_example_tasks {
            TaskStore::new(now)
        } else {
            TaskStore::seeded(now)
        };

        for task in &self.tasks {
            if let Err(err) = store.add_task(task.clone()) {
                bail!("Cannot add '{}': {}", task.name, err);
            }
        }
        Ok(store)
    }
}

/// Load config, reporting which file was bad
pub fn load_config() -> Result<Config> {
    Config::load().context("Failed to load configuration")
}

/// Truncate to `max` terminal columns, ending in "..." when cut
pub fn truncate(s: &str, max: usize) -> String {
    if s.width() <= max {
        return s.to_string();
    }
    let budget = if max <= 3 { max } else { max - 3 };
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }
    if max > 3 {
        out.push_str("...");
    }
    out
}
