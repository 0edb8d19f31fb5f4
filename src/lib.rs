//! Day Clock library - task arcs, countdown and validation for the hour clock

pub mod cli;
pub mod clock;
pub mod config;
pub mod schedule;
pub mod task;
pub mod tui;
