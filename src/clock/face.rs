//! Derived clock face: arcs for the current hour, hand position and progress

use chrono::{NaiveDateTime, Timelike};
use serde::Serialize;

use super::geometry::{describe_arc, polar_to_cartesian, ArcPath, Point};
use crate::task::{Icon, Task, TaskId};

/// Size of the face in drawing units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceLayout {
    pub size: f64,
    pub stroke_width: f64,
}

impl Default for FaceLayout {
    fn default() -> Self {
        Self {
            size: 320.0,
            stroke_width: 30.0,
        }
    }
}

impl FaceLayout {
    pub fn center(&self) -> f64 {
        self.size / 2.0
    }

    /// Radius of the ring the task arcs are drawn on
    pub fn radius(&self) -> f64 {
        self.center() - self.stroke_width
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TaskArc {
    pub id: TaskId,
    pub name: String,
    pub icon: Icon,
    pub start_angle: f64,
    pub end_angle: f64,
    pub path: ArcPath,
    pub icon_pos: Point,
    /// Index into the colour palette, modulo its length
    pub color_index: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaskProgress {
    pub name: String,
    pub remaining_percentage: f64,
    /// Whole minutes left, rounded
    pub time_left: i64,
}

impl TaskProgress {
    /// Whole percent, halves rounded up
    pub fn remaining_label(&self) -> String {
        format!("{}%", (self.remaining_percentage + 0.5).floor())
    }
}

/// Everything drawn for one instant
#[derive(Debug, Clone, PartialEq)]
pub struct ClockFace {
    pub layout: FaceLayout,
    pub now: NaiveDateTime,
    pub arcs: Vec<TaskArc>,
    pub hand_angle: f64,
    pub hand_tip: Point,
    pub hand_tail: Point,
    pub active: Option<TaskId>,
    pub progress: Option<TaskProgress>,
}

impl ClockFace {
    pub fn derive(tasks: &[Task], now: NaiveDateTime, layout: &FaceLayout) -> Self {
        let center = layout.center();
        let radius = layout.radius();

        let arcs = tasks_for_hour(tasks, now.hour())
            .into_iter()
            .enumerate()
            .map(|(index, task)| {
                let (start_angle, end_angle) = task_angles(task);
                let icon_angle = start_angle + (end_angle - start_angle) / 2.0;
                TaskArc {
                    id: task.id,
                    name: task.name.clone(),
                    icon: task.icon,
                    start_angle,
                    end_angle,
                    path: describe_arc(center, center, radius, start_angle, end_angle),
                    icon_pos: polar_to_cartesian(center, center, radius, icon_angle),
                    color_index: index,
                }
            })
            .collect();

        let angle = hand_angle(now);
        let hand_radius = radius - layout.stroke_width / 2.0 - 5.0;
        let active = active_task(tasks, now);

        Self {
            layout: *layout,
            now,
            arcs,
            hand_angle: angle,
            hand_tip: polar_to_cartesian(center, center, hand_radius, angle),
            hand_tail: polar_to_cartesian(center, center, -20.0, angle),
            active: active.map(|t| t.id),
            progress: active.and_then(|t| task_progress(t, now)),
        }
    }
}

/// Tasks starting in `hour`, ordered by start time
pub fn tasks_for_hour(tasks: &[Task], hour: u32) -> Vec<&Task> {
    let mut in_hour: Vec<&Task> = tasks
        .iter()
        .filter(|t| t.start_hour() == Some(hour))
        .collect();
    in_hour.sort_by_key(|t| t.interval().start);
    in_hour
}

/// Start and end angle of a task's arc.
///
/// Only the minute-within-hour is used, so a task ending in the next hour
/// is not wrapped.
pub fn task_angles(task: &Task) -> (f64, f64) {
    let (start, end) = task.minute_span();
    (
        f64::from(start) / 60.0 * 360.0,
        f64::from(end) / 60.0 * 360.0,
    )
}

pub fn hand_angle(now: NaiveDateTime) -> f64 {
    let minute = f64::from(now.minute()) + f64::from(now.second()) / 60.0;
    minute / 60.0 * 360.0
}

/// First task, in list order, whose interval contains the current minute
pub fn active_task(tasks: &[Task], now: NaiveDateTime) -> Option<&Task> {
    let minute = now.hour() * 60 + now.minute();
    tasks.iter().find(|t| t.interval().contains(minute))
}

pub fn task_progress(task: &Task, now: NaiveDateTime) -> Option<TaskProgress> {
    let span = task.interval();
    let duration = span.duration() as f64;
    if duration <= 0.0 {
        return None;
    }

    let now_minutes =
        f64::from(now.hour() * 60 + now.minute()) + f64::from(now.second()) / 60.0;
    let elapsed = now_minutes - f64::from(span.start);
    let elapsed_percentage = (elapsed / duration * 100.0).clamp(0.0, 100.0);

    Some(TaskProgress {
        name: task.name.clone(),
        remaining_percentage: 100.0 - elapsed_percentage,
        time_left: (duration - elapsed).round() as i64,
    })
}
