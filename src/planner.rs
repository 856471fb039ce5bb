//! This module ties the intake pipeline together and exposes it to a UI layer

use std::collections::HashMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

use chrono::{Local, NaiveDate, NaiveTime};

use crate::category::{Category, CategoryFilter};
use crate::event::Event;
use crate::parser;
use crate::similarity;
use crate::store::EventStore;
use crate::traits::Classify;

/// The format event times are entered in (what an HTML `<input type="time">` produces)
const TIME_FORMAT: &str = "%H:%M";

/// Why an intake attempt was refused.
///
/// Every variant is terminal to the attempt: nothing is committed, the user must edit and resubmit. \
/// Note that an unreachable classification service is *not* in this list, it is recovered silently
/// with the default category.
#[derive(Clone, Debug, PartialEq)]
pub enum IntakeError {
    /// No usable title was left once the weekday name was removed
    EmptyTitle,
    /// The time of day could not be parsed (expected `HH:MM`)
    InvalidTime(String),
    /// A same-day event with a suspiciously close title already exists; its title is embedded
    /// so the user can be told what it clashes with
    Duplicate(String),
}

impl Display for IntakeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        match self {
            IntakeError::EmptyTitle => write!(f, "Please enter a usable event title"),
            IntakeError::InvalidTime(time) => write!(f, "{:?} is not a valid time of day", time),
            IntakeError::Duplicate(title) => write!(f, "A similar event already exists: {}", title),
        }
    }
}

impl Error for IntakeError {}

/// The planner a UI layer holds: the event store, the classification boundary, and the
/// intake pipeline between them.
///
/// All methods take `&mut self`: the planner is meant to be owned by a single interactive
/// session and driven one user action at a time. The only suspension point is the
/// classification call inside [`Planner::add_event`]; two intakes racing from separate tasks
/// are not coordinated (last commit wins), which is acceptable for single-user use.
pub struct Planner<C>
where
    C: Classify,
{
    store: EventStore,
    classifier: C,

    /// The category each title last resolved to. Kept for the session as an informational
    /// record; the pipeline never consults it to skip a classification call
    assigned_categories: HashMap<String, Category>,
}

impl<C> Planner<C>
where
    C: Classify,
{
    pub fn new(classifier: C) -> Self {
        Self {
            store: EventStore::new(),
            classifier,
            assigned_categories: HashMap::new(),
        }
    }

    /// The intake pipeline: parse the description, check for same-day near-duplicates,
    /// resolve a category, and commit.
    ///
    /// Returns the day the event landed on together with the committed event. \
    /// The duplicate check deliberately runs *before* the classification call: it is local and
    /// cheap, and a rejected intake should not cost a network round-trip.
    pub async fn add_event(&mut self, text: &str, time: &str) -> Result<(NaiveDate, Event), IntakeError> {
        self.add_event_on(Local::now().date_naive(), text, time).await
    }

    /// Same as [`Planner::add_event`], with an explicit "today" so that tests control the clock
    pub async fn add_event_on(&mut self, today: NaiveDate, text: &str, time: &str) -> Result<(NaiveDate, Event), IntakeError> {
        let time = NaiveTime::parse_from_str(time.trim(), TIME_FORMAT)
            .map_err(|_| IntakeError::InvalidTime(time.to_string()))?;

        let parsed = match parser::parse_event_phrase(text, today) {
            None => return Err(IntakeError::EmptyTitle),
            Some(parsed) => parsed,
        };

        if let Some(existing) = similarity::find_similar(&parsed.title, self.store.events_for(parsed.date)) {
            return Err(IntakeError::Duplicate(existing.title().to_string()));
        }

        // The full description is sent, not the stripped title: the weekday name is context
        // the service may well use
        let category = match self.classifier.classify(text).await {
            Ok(label) => Category::from_label(&label),
            Err(err) => {
                log::warn!("Classification failed ({}), defaulting to {:?}", err, Category::default_category());
                Category::default_category()
            },
        };

        let event = Event::new(parsed.title.clone(), time, category);
        self.store.add(parsed.date, event.clone());
        self.assigned_categories.insert(parsed.title, category);

        Ok((parsed.date, event))
    }

    /// Change the title and time of the first event of this day matching `match_title`.
    ///
    /// Only title and time are editable; the category assigned at creation stays. \
    /// Returns whether a match was found
    pub fn edit_event(&mut self, date: NaiveDate, match_title: &str, new_title: &str, new_time: &str) -> Result<bool, IntakeError> {
        let new_title = new_title.trim();
        if new_title.is_empty() {
            return Err(IntakeError::EmptyTitle);
        }
        let new_time = NaiveTime::parse_from_str(new_time.trim(), TIME_FORMAT)
            .map_err(|_| IntakeError::InvalidTime(new_time.to_string()))?;

        Ok(self.store.update(date, match_title, |event| {
            event.set_title(new_title.to_string());
            event.set_time(new_time);
        }))
    }

    /// Flip the completion flag of the first event of this day matching `match_title`.
    /// Returns whether a match was found
    pub fn toggle_completion(&mut self, date: NaiveDate, match_title: &str) -> bool {
        self.store.toggle_completion(date, match_title)
    }

    /// Remove every event of this day with this exact title (a no-op on absent titles)
    pub fn delete_event(&mut self, date: NaiveDate, match_title: &str) {
        self.store.delete(date, match_title)
    }

    /// This day's events, in insertion order, restricted to the given category filter
    pub fn events_for(&self, date: NaiveDate, filter: &CategoryFilter) -> Vec<&Event> {
        self.store.events_for(date)
            .iter()
            .filter(|event| filter.matches(event.category()))
            .collect()
    }

    /// The category this title last resolved to, if it ever went through intake
    pub fn assigned_category(&self, title: &str) -> Option<Category> {
        self.assigned_categories.get(title).copied()
    }

    pub fn store(&self) -> &EventStore {
        &self.store
    }

    pub fn classifier(&self) -> &C {
        &self.classifier
    }
}
