//! Task store
//!
//! Owns the task list (newest first) and the current time. State only changes
//! through [`TaskStore::add_task`], [`TaskStore::delete_task`] and
//! [`TaskStore::tick`]; everything drawn on screen is derived from it.

use chrono::NaiveDateTime;
use tracing::{debug, warn};

use super::model::{Icon, NewTask, Task, TaskId};
use crate::clock::{ClockFace, FaceLayout};
use crate::schedule::{validate_new_task, ValidationError};

#[derive(Debug, Clone)]
pub struct TaskStore {
    tasks: Vec<Task>,
    next_id: u64,
    now: NaiveDateTime,
}

impl TaskStore {
    /// Empty store
    pub fn new(now: NaiveDateTime) -> Self {
        Self {
            tasks: Vec::new(),
            next_id: 1,
            now,
        }
    }

    /// Store holding the three example tasks
    pub fn seeded(now: NaiveDateTime) -> Self {
        let mut store = Self::new(now);
        store.tasks = vec![
            Task {
                id: TaskId(1),
                name: "Morning Coffee".to_string(),
                start_time: "08:00".to_string(),
                end_time: "08:10".to_string(),
                icon: Icon::Coffee,
            },
            Task {
                id: TaskId(2),
                name: "Team Standup".to_string(),
                start_time: "09:15".to_string(),
                end_time: "09:30".to_string(),
                icon: Icon::Briefcase,
            },
            Task {
                id: TaskId(3),
                name: "Read a Chapter".to_string(),
                start_time: "08:30".to_string(),
                end_time: "08:55".to_string(),
                icon: Icon::BookOpen,
            },
        ];
        store.next_id = 4;
        store
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn now(&self) -> NaiveDateTime {
        self.now
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Validate and insert a task at the front of the list.
    ///
    /// On error the store is left untouched.
    pub fn add_task(&mut self, new_task: NewTask) -> Result<TaskId, ValidationError> {
        if let Err(err) = validate_new_task(&new_task, &self.tasks) {
            if let ValidationError::OverlapViolation { conflicting } = &err {
                warn!(
                    "Overlap detected: '{}' conflicts with '{}'",
                    new_task.name, conflicting
                );
            }
            return Err(err);
        }

        let id = TaskId(self.next_id);
        self.next_id += 1;
        let task = new_task.into_task(id);
        debug!(
            "Added task {} '{}' {}-{}",
            id, task.name, task.start_time, task.end_time
        );
        self.tasks.insert(0, task);
        Ok(id)
    }

    /// Remove a task by ID. Unknown IDs are ignored.
    pub fn delete_task(&mut self, id: TaskId) -> Option<Task> {
        let pos = self.tasks.iter().position(|t| t.id == id)?;
        let removed = self.tasks.remove(pos);
        debug!("Deleted task {} '{}'", removed.id, removed.name);
        Some(removed)
    }

    pub fn tick(&mut self, now: NaiveDateTime) {
        self.now = now;
    }

    /// Snapshot of everything the clock face shows at the current time
    pub fn face(&self, layout: &FaceLayout) -> ClockFace {
        ClockFace::derive(&self.tasks, self.now, layout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap()
    }

    #[test]
    fn test_seeded_contents() {
        let store = TaskStore::seeded(at(8, 0, 0));
        let ids: Vec<u64> = store.tasks().iter().map(|t| t.id.0).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(store.tasks()[0].name, "Morning Coffee");
    }

    #[test]
    fn test_add_prepends_with_next_id() {
        let mut store = TaskStore::seeded(at(8, 0, 0));
        let id = store
            .add_task(NewTask::new("Stretch", "08:10", "08:20", Icon::Dumbbell))
            .unwrap();
        assert_eq!(id, TaskId(4));
        assert_eq!(store.tasks()[0].id, TaskId(4));
        assert_eq!(store.len(), 4);
    }

    #[test]
    fn test_failed_add_leaves_store_unchanged() {
        let mut store = TaskStore::seeded(at(8, 0, 0));
        let before = store.tasks().to_vec();
        let result = store.add_task(NewTask::new("Clash", "08:05", "08:15", Icon::Tv));
        assert!(matches!(
            result,
            Err(ValidationError::OverlapViolation { .. })
        ));
        assert_eq!(store.tasks(), before.as_slice());

        // A rejected add does not burn an id
        let id = store
            .add_task(NewTask::new("Ok", "10:00", "10:05", Icon::Tv))
            .unwrap();
        assert_eq!(id, TaskId(4));
    }

    #[test]
    fn test_ids_not_reused_after_delete() {
        let mut store = TaskStore::new(at(8, 0, 0));
        let a = store
            .add_task(NewTask::new("A", "08:00", "08:05", Icon::Sun))
            .unwrap();
        store.delete_task(a);
        let b = store
            .add_task(NewTask::new("B", "08:00", "08:05", Icon::Sun))
            .unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_delete_unknown_is_noop() {
        let mut store = TaskStore::seeded(at(8, 0, 0));
        assert!(store.delete_task(TaskId(99)).is_none());
        assert_eq!(store.len(), 3);

        let removed = store.delete_task(TaskId(2)).unwrap();
        assert_eq!(removed.name, "Team Standup");
        assert!(store.get(TaskId(2)).is_none());
    }

    #[test]
    fn test_add_trims_fields() {
        let mut store = TaskStore::new(at(8, 0, 0));
        let id = store
            .add_task(NewTask::new(" Walk ", " 08:00", "08:30 ", Icon::Sun))
            .unwrap();
        let task = store.get(id).unwrap();
        assert_eq!(task.name, "Walk");
        assert_eq!(task.start_time, "08:00");
        assert_eq!(task.end_time, "08:30");
    }

    #[test]
    fn test_tick_updates_face() {
        let mut store = TaskStore::seeded(at(7, 0, 0));
        let layout = FaceLayout::default();
        assert!(store.face(&layout).progress.is_none());

        store.tick(at(8, 5, 0));
        let face = store.face(&layout);
        assert_eq!(face.progress.unwrap().name, "Morning Coffee");
    }
}
