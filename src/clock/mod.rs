//! Clock face computation
//!
//! Everything here is a pure function of the task list and the current time,
//! except the ticker which produces those time snapshots.

pub mod face;
pub mod geometry;
pub mod svg;
pub mod ticker;

pub use face::{
    active_task, hand_angle, task_angles, task_progress, tasks_for_hour, ClockFace, FaceLayout,
    TaskArc, TaskProgress,
};
pub use geometry::{describe_arc, polar_to_cartesian, ArcPath, Point};
pub use svg::{render_svg, DEFAULT_PALETTE};
pub use ticker::{FixedTime, SystemClock, TickHandle, Ticker, TimeSource};
