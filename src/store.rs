//! This module provides the in-memory, per-day event lists

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use chrono::NaiveDate;

use crate::event::Event;

/// All scheduled events, grouped by day.
///
/// Days are keyed by [`NaiveDate`], which is locale-independent. Within a day, events keep their
/// insertion order. \
/// Every mutation substitutes a wholly new list for the affected day, so a reader never observes a
/// partially-updated list; days other than the affected one are untouched.
///
/// The store itself lives for the duration of the session only. There is no persistence, although
/// the whole model serializes with serde should a cache ever be layered on top.
#[derive(Default, Debug, PartialEq, Serialize, Deserialize)]
pub struct EventStore {
    days: HashMap<NaiveDate, Vec<Event>>,
}

impl EventStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The events scheduled on this day, in insertion order.
    /// Unknown days are simply empty
    pub fn events_for(&self, date: NaiveDate) -> &[Event] {
        self.days.get(&date).map(|events| events.as_slice()).unwrap_or(&[])
    }

    /// Append an event to this day's list, creating the list if needed.
    ///
    /// This does not check titles for collisions. Intake runs the duplicate detector beforehand,
    /// but nothing prevents a caller from inserting an exact-title twin
    pub fn add(&mut self, date: NaiveDate, event: Event) {
        let mut new_list = self.days.get(&date).cloned().unwrap_or_default();
        new_list.push(event);
        self.days.insert(date, new_list);
    }

    /// Replace the first event of this day whose title equals `match_title` with the result of `f`.
    ///
    /// Returns whether a match was found. \
    /// Matching is exact title equality: if two events share a title (see [`EventStore::add`]),
    /// only the earliest in list order is touched.
    pub fn update<F>(&mut self, date: NaiveDate, match_title: &str, f: F) -> bool
    where
        F: FnOnce(&mut Event),
    {
        let mut new_list = match self.days.get(&date) {
            None => return false,
            Some(events) => events.clone(),
        };

        let matched = match new_list.iter_mut().find(|e| e.title() == match_title) {
            None => return false,
            Some(event) => {
                f(event);
                true
            },
        };

        self.days.insert(date, new_list);
        matched
    }

    /// Flip the completion flag of the first event of this day with this exact title.
    /// Returns whether a match was found
    pub fn toggle_completion(&mut self, date: NaiveDate, match_title: &str) -> bool {
        self.update(date, match_title, |event| event.toggle_completion())
    }

    /// Remove every event of this day with this exact title.
    ///
    /// Removing a title that does not exist is a silent no-op, the list is left as it was
    pub fn delete(&mut self, date: NaiveDate, match_title: &str) {
        let new_list: Vec<Event> = match self.days.get(&date) {
            None => return,
            Some(events) => events.iter().filter(|e| e.title() != match_title).cloned().collect(),
        };
        self.days.insert(date, new_list);
    }
}
