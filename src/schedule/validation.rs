//! Validation of task submissions

use thiserror::Error;

use super::interval::{hour_component, parse_clock_time, Interval};
use crate::task::{NewTask, Task};

/// Why a task submission was refused. The messages are shown to the user as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please fill out all fields.")]
    MissingFields,

    #[error("'{0}' is not a valid time, use HH:MM.")]
    InvalidTime(String),

    #[error("Tasks must start and end within the same hour.")]
    SameHourViolation,

    #[error("End time must be after start time.")]
    OrderViolation,

    #[error("This task overlaps with an existing one.")]
    OverlapViolation { conflicting: String },
}

/// Check a candidate task against the schedule rules and the existing tasks.
///
/// Overlap is checked against every existing task, not only those in the
/// candidate's hour.
pub fn validate_new_task(candidate: &NewTask, existing: &[Task]) -> Result<(), ValidationError> {
    if candidate.name.trim().is_empty()
        || candidate.start_time.trim().is_empty()
        || candidate.end_time.trim().is_empty()
    {
        return Err(ValidationError::MissingFields);
    }

    for time in [&candidate.start_time, &candidate.end_time] {
        if parse_clock_time(time).is_none() {
            return Err(ValidationError::InvalidTime(time.trim().to_string()));
        }
    }

    if hour_component(&candidate.start_time) != hour_component(&candidate.end_time) {
        return Err(ValidationError::SameHourViolation);
    }

    let span = Interval::from_times(&candidate.start_time, &candidate.end_time);
    if span.start >= span.end {
        return Err(ValidationError::OrderViolation);
    }

    if let Some(task) = existing.iter().find(|t| t.interval().overlaps(&span)) {
        return Err(ValidationError::OverlapViolation {
            conflicting: task.name.clone(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::{Icon, TaskId};

    fn existing(id: u64, start: &str, end: &str) -> Task {
        Task {
            id: TaskId(id),
            name: format!("task {id}"),
            start_time: start.to_string(),
            end_time: end.to_string(),
            icon: Icon::Coffee,
        }
    }

    #[test]
    fn test_accepts_touching_boundaries() {
        let tasks = vec![existing(1, "08:00", "08:10")];
        let candidate = NewTask::new("Next", "08:10", "08:20", Icon::Music);
        assert_eq!(validate_new_task(&candidate, &tasks), Ok(()));
    }

    #[test]
    fn test_rejects_overlap() {
        let tasks = vec![existing(1, "08:00", "08:10")];
        let candidate = NewTask::new("Clash", "08:05", "08:15", Icon::Music);
        assert_eq!(
            validate_new_task(&candidate, &tasks),
            Err(ValidationError::OverlapViolation {
                conflicting: "task 1".to_string()
            })
        );
    }

    #[test]
    fn test_rejects_cross_hour() {
        let candidate = NewTask::new("Late", "07:50", "08:10", Icon::Bed);
        assert_eq!(
            validate_new_task(&candidate, &[]),
            Err(ValidationError::SameHourViolation)
        );
    }

    #[test]
    fn test_rejects_reversed_and_empty_spans() {
        let reversed = NewTask::new("Back", "08:20", "08:10", Icon::Bed);
        assert_eq!(
            validate_new_task(&reversed, &[]),
            Err(ValidationError::OrderViolation)
        );

        let empty = NewTask::new("Blink", "08:20", "08:20", Icon::Bed);
        assert_eq!(
            validate_new_task(&empty, &[]),
            Err(ValidationError::OrderViolation)
        );
    }

    #[test]
    fn test_missing_fields_checked_first() {
        let candidate = NewTask::new("   ", "07:50", "08:10", Icon::Bed);
        assert_eq!(
            validate_new_task(&candidate, &[]),
            Err(ValidationError::MissingFields)
        );

        let candidate = NewTask::new("Nap", "", "08:10", Icon::Bed);
        assert_eq!(
            validate_new_task(&candidate, &[]),
            Err(ValidationError::MissingFields)
        );
    }

    #[test]
    fn test_rejects_malformed_time() {
        let candidate = NewTask::new("Nap", "8", "08:10", Icon::Bed);
        assert_eq!(
            validate_new_task(&candidate, &[]),
            Err(ValidationError::InvalidTime("8".to_string()))
        );
    }

    #[test]
    fn test_overlap_checked_across_hours() {
        let tasks = vec![existing(1, "09:15", "09:30")];
        let candidate = NewTask::new("Prep", "09:00", "09:20", Icon::Briefcase);
        assert!(matches!(
            validate_new_task(&candidate, &tasks),
            Err(ValidationError::OverlapViolation { .. })
        ));

        let other_hour = NewTask::new("Prep", "10:15", "10:30", Icon::Briefcase);
        assert_eq!(validate_new_task(&other_hour, &tasks), Ok(()));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ValidationError::SameHourViolation.to_string(),
            "Tasks must start and end within the same hour."
        );
        assert_eq!(
            ValidationError::OverlapViolation {
                conflicting: "x".to_string()
            }
            .to_string(),
            "This task overlaps with an existing one."
        );
    }
}
