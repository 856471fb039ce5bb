//! Turning free-text descriptions such as "Friday exercise" into a date and a title

use chrono::{Datelike, Duration, NaiveDate, Weekday};

/// The weekday names the parser recognizes, in the order they are tried.
///
/// Matching is a plain case-sensitive substring search. Only the first set member found in the
/// input is used; should the input mention several weekdays, the others stay embedded in the title.
/// This mirrors the long-standing behavior users rely on, so it is kept as-is.
const WEEKDAY_NAMES: [(&str, Weekday); 7] = [
    ("Sunday", Weekday::Sun),
    ("Monday", Weekday::Mon),
    ("Tuesday", Weekday::Tue),
    ("Wednesday", Weekday::Wed),
    ("Thursday", Weekday::Thu),
    ("Friday", Weekday::Fri),
    ("Saturday", Weekday::Sat),
];

/// What a free-text description parses into: the day it refers to, and the remaining title
#[derive(Clone, Debug, PartialEq)]
pub struct ParsedPhrase {
    pub date: NaiveDate,
    pub title: String,
}

/// Parse a free-text event description.
///
/// A weekday name in the input resolves to the next occurrence of that weekday strictly after
/// `today`: entering "Monday ..." on a Monday schedules one week out, never today. \
/// Without a weekday name, the event lands on `today` itself.
///
/// The matched weekday name (first occurrence only) is removed from the title. \
/// Returns `None` when no usable title remains, which callers must surface to the user.
pub fn parse_event_phrase(input: &str, today: NaiveDate) -> Option<ParsedPhrase> {
    let mut date = today;
    let mut remainder = input.to_string();

    if let Some((name, target)) = WEEKDAY_NAMES.iter().find(|(name, _)| input.contains(name)) {
        let today_weekday = today.weekday().num_days_from_sunday() as i64;
        let target_weekday = target.num_days_from_sunday() as i64;

        // "next occurrence, strictly in the future": 0 days ahead becomes a full week
        let mut days_ahead = (target_weekday + 7 - today_weekday) % 7;
        if days_ahead == 0 {
            days_ahead = 7;
        }

        date = today + Duration::days(days_ahead);
        remainder = input.replacen(name, "", 1);
    }

    let title = remainder.trim();
    if title.is_empty() {
        return None;
    }

    Some(ParsedPhrase {
        date,
        title: title.to_string(),
    })
}
