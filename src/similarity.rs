//! Near-duplicate detection between event titles

use crate::event::Event;

/// Two titles scoring strictly above this are considered the same event
const DUPLICATE_THRESHOLD: f64 = 0.8;

/// Normalized similarity between two titles, in [0, 1].
///
/// This is the Sørensen–Dice coefficient over character bigrams, ignoring whitespace, so word
/// order barely matters: "team meeting" vs "meeting team" score high.
pub fn title_similarity(left: &str, right: &str) -> f64 {
    strsim::sorensen_dice(left, right)
}

/// Look for a same-day event whose title is suspiciously close to `candidate`.
///
/// Events are checked in list order and the first one scoring above the threshold is returned,
/// not the best one. Returns `None` when the candidate looks sufficiently novel.
pub fn find_similar<'a>(candidate: &str, same_day_events: &'a [Event]) -> Option<&'a Event> {
    for event in same_day_events {
        let score = title_similarity(candidate, event.title());
        if score > DUPLICATE_THRESHOLD {
            log::debug!("{:?} scores {:.2} against existing {:?}", candidate, score, event.title());
            return Some(event);
        }
    }
    None
}
