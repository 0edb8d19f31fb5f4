//! Interval model for tasks within an hour
//!
//! This module provides the time arithmetic behind the clock:
//! - "HH:MM" parsing into minutes since midnight
//! - Half-open interval overlap checks
//! - Validation of new tasks against the existing schedule

pub mod interval;
pub mod validation;

pub use interval::{
    hour_component, intervals_overlap, minute_component, parse_clock_time, time_to_minutes,
    Interval,
};
pub use validation::{validate_new_task, ValidationError};
