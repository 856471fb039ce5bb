//! Scheduled events

use serde::{Deserialize, Serialize};
use chrono::{DateTime, NaiveTime, Utc};

use crate::category::Category;

/// One scheduled item on a given day.
///
/// Events do not know their own date: they live in per-day lists inside an
/// [`EventStore`](crate::store::EventStore), keyed by date. \
/// Within a day, events are matched by exact title. Duplicate detection at intake time keeps titles
/// "unique enough", but it is advisory only: renaming an event to an existing title is possible, and
/// subsequent title-matched operations will then hit whichever comes first in list order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// The display name of the event
    title: String,
    /// The wall-clock time of day this event is scheduled at
    time: NaiveTime,
    /// The category the classification service assigned at creation
    category: Category,
    /// Whether the user has marked this event as done
    completed: bool,

    /// The time this event was created
    creation_date: DateTime<Utc>,
    /// The last time this event was modified
    last_modified: DateTime<Utc>,
}

impl Event {
    /// Create a brand new, not-yet-completed event
    pub fn new(title: String, time: NaiveTime, category: Category) -> Self {
        let now = Utc::now();
        Self {
            title,
            time,
            category,
            completed: false,
            creation_date: now,
            last_modified: now,
        }
    }

    pub fn title(&self) -> &str        { &self.title       }
    pub fn time(&self) -> NaiveTime    { self.time         }
    pub fn category(&self) -> Category { self.category     }
    pub fn completed(&self) -> bool    { self.completed    }
    pub fn creation_date(&self) -> &DateTime<Utc> { &self.creation_date }
    pub fn last_modified(&self) -> &DateTime<Utc> { &self.last_modified }

    fn update_last_modified(&mut self) {
        self.last_modified = Utc::now();
    }

    /// Rename an event.
    /// This updates its "last modified" field
    pub fn set_title(&mut self, new_title: String) {
        self.update_last_modified();
        self.title = new_title;
    }

    /// Reschedule an event within its day.
    /// This updates its "last modified" field
    pub fn set_time(&mut self, new_time: NaiveTime) {
        self.update_last_modified();
        self.time = new_time;
    }

    /// Flip the completion flag
    pub fn toggle_completion(&mut self) {
        self.update_last_modified();
        self.completed = !self.completed;
    }
}
