//! `dayclock list` command implementation

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use super::ScheduleArgs;
use crate::clock::{active_task, task_progress, TaskProgress};
use crate::task::{Task, TaskStore};

const TABLE_COL_ID: usize = 4;
const TABLE_COL_NAME: usize = 24;
const TABLE_COL_TIME: usize = 13;
const TABLE_COL_ICON: usize = 14;

#[derive(Args)]
pub struct ListArgs {
    #[command(flatten)]
    schedule: ScheduleArgs,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct ListJson<'a> {
    now: chrono::NaiveDateTime,
    tasks: &'a [Task],
    active: Option<TaskProgress>,
}

pub async fn run(args: ListArgs) -> Result<()> {
    let config = super::load_config()?;
    let store = args.schedule.build_store(&config)?;

    if args.json {
        println!("{}", render_json(&store)?);
    } else {
        print!("{}", render_table(&store));
    }
    Ok(())
}

fn current_progress(store: &TaskStore) -> Option<TaskProgress> {
    active_task(store.tasks(), store.now()).and_then(|t| task_progress(t, store.now()))
}

fn render_json(store: &TaskStore) -> Result<String> {
    let out = ListJson {
        now: store.now(),
        tasks: store.tasks(),
        active: current_progress(store),
    };
    Ok(serde_json::to_string_pretty(&out)?)
}

fn render_table(store: &TaskStore) -> String {
    if store.is_empty() {
        return "No tasks scheduled yet.\n".to_string();
    }

    let active_id = active_task(store.tasks(), store.now()).map(|t| t.id);
    let mut out = format!(
        "  {:<w_id$} {:<w_name$} {:<w_time$} {:<w_icon$}\n",
        "ID",
        "NAME",
        "TIME",
        "ICON",
        w_id = TABLE_COL_ID,
        w_name = TABLE_COL_NAME,
        w_time = TABLE_COL_TIME,
        w_icon = TABLE_COL_ICON,
    );
    out.push_str(&"-".repeat(TABLE_COL_ID + TABLE_COL_NAME + TABLE_COL_TIME + TABLE_COL_ICON + 5));
    out.push('\n');

    for task in store.tasks() {
        let marker = if Some(task.id) == active_id { "▶" } else { " " };
        let time = format!("{} - {}", task.start_time, task.end_time);
        let icon = format!("{} {}", task.icon.glyph(), task.icon.name());
        out.push_str(&format!(
            "{} {:<w_id$} {:<w_name$} {:<w_time$} {:<w_icon$}\n",
            marker,
            task.id,
            super::truncate(&task.name, TABLE_COL_NAME),
            time,
            icon,
            w_id = TABLE_COL_ID,
            w_name = TABLE_COL_NAME,
            w_time = TABLE_COL_TIME,
            w_icon = TABLE_COL_ICON,
        ));
    }

    out.push('\n');
    match current_progress(store) {
        Some(progress) => out.push_str(&format!(
            "{}: {} remaining, {} min left\n",
            progress.name,
            progress.remaining_label(),
            progress.time_left
        )),
        None => out.push_str("Free Time!\n"),
    }
    out
}
