//! Task data model

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::schedule::{hour_component, minute_component, Interval};

/// Task ID, unique for the lifetime of a store
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TaskId(pub u64);

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown icon '{0}'")]
pub struct IconParseError(pub String);

/// Icon shown on a task's arc and in the task list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Icon {
    #[default]
    Coffee,
    BookOpen,
    Briefcase,
    Dumbbell,
    Bed,
    Utensils,
    ShoppingCart,
    Music,
    Plane,
    Heart,
    BrainCircuit,
    Tv,
    Gamepad2,
    Sun,
}

impl Icon {
    /// Every icon, in the order the form offers them
    pub const ALL: [Icon; 14] = [
        Icon::Coffee,
        Icon::BookOpen,
        Icon::Briefcase,
        Icon::Dumbbell,
        Icon::Bed,
        Icon::Utensils,
        Icon::ShoppingCart,
        Icon::Music,
        Icon::Plane,
        Icon::Heart,
        Icon::BrainCircuit,
        Icon::Tv,
        Icon::Gamepad2,
        Icon::Sun,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Coffee => "Coffee",
            Self::BookOpen => "BookOpen",
            Self::Briefcase => "Briefcase",
            Self::Dumbbell => "Dumbbell",
            Self::Bed => "Bed",
            Self::Utensils => "Utensils",
            Self::ShoppingCart => "ShoppingCart",
            Self::Music => "Music",
            Self::Plane => "Plane",
            Self::Heart => "Heart",
            Self::BrainCircuit => "BrainCircuit",
            Self::Tv => "Tv",
            Self::Gamepad2 => "Gamepad2",
            Self::Sun => "Sun",
        }
    }

    /// Single-column glyph used when drawing the icon
    pub fn glyph(&self) -> &'static str {
        match self {
            Self::Coffee => "♨",
            Self::BookOpen => "¶",
            Self::Briefcase => "▣",
            Self::Dumbbell => "⚒",
            Self::Bed => "☾",
            Self::Utensils => "♆",
            Self::ShoppingCart => "$",
            Self::Music => "♪",
            Self::Plane => "✈",
            Self::Heart => "♥",
            Self::BrainCircuit => "⚛",
            Self::Tv => "▭",
            Self::Gamepad2 => "✜",
            Self::Sun => "☀",
        }
    }

    /// Position in [`Icon::ALL`]
    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|i| i == self).unwrap_or(0)
    }

    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(&self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl FromStr for Icon {
    type Err = IconParseError;

    /// Case-insensitive match on the icon name
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|icon| icon.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| IconParseError(wanted.to_string()))
    }
}

impl fmt::Display for Icon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A scheduled task
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique task ID
    pub id: TaskId,

    /// Display name
    pub name: String,

    /// Start time, "HH:MM"
    pub start_time: String,

    /// End time, "HH:MM" (exclusive)
    pub end_time: String,

    pub icon: Icon,
}

impl Task {
    pub fn interval(&self) -> Interval {
        Interval::from_times(&self.start_time, &self.end_time)
    }

    /// Hour the task starts in; tasks are drawn on the face of this hour only
    pub fn start_hour(&self) -> Option<u32> {
        hour_component(&self.start_time)
    }

    /// Minute-within-hour of the start and end times
    pub fn minute_span(&self) -> (u32, u32) {
        (
            minute_component(&self.start_time).unwrap_or(0),
            minute_component(&self.end_time).unwrap_or(0),
        )
    }
}

/// A task submission that has not been assigned an ID yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    pub name: String,
    pub start_time: String,
    pub end_time: String,
    pub icon: Icon,
}

impl NewTask {
    pub fn new(
        name: impl Into<String>,
        start_time: impl Into<String>,
        end_time: impl Into<String>,
        icon: Icon,
    ) -> Self {
        Self {
            name: name.into(),
            start_time: start_time.into(),
            end_time: end_time.into(),
            icon,
        }
    }

    pub(crate) fn into_task(self, id: TaskId) -> Task {
        Task {
            id,
            name: self.name.trim().to_string(),
            start_time: self.start_time.trim().to_string(),
            end_time: self.end_time.trim().to_string(),
            icon: self.icon,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TaskSpecError {
    #[error("expected NAME,START,END[,ICON], got '{0}'")]
    Shape(String),
    #[error(transparent)]
    Icon(#[from] IconParseError),
}

impl FromStr for NewTask {
    type Err = TaskSpecError;

    /// Parse a `NAME,START,END[,ICON]` spec; the icon defaults to Coffee.
    /// Times are not checked here, the store validates them on insert.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(',').map(str::trim).collect();
        match parts.as_slice() {
            [name, start, end] => Ok(Self::new(*name, *start, *end, Icon::default())),
            [name, start, end, icon] => Ok(Self::new(*name, *start, *end, icon.parse()?)),
            _ => Err(TaskSpecError::Shape(s.to_string())),
        }
    }
}
