///! Some utility functions

use chrono::NaiveDate;

use crate::category::{category_color, CategoryFilter};
use crate::event::Event;
use crate::planner::Planner;
use crate::traits::Classify;

/// A debug utility that pretty-prints a day's schedule
pub fn print_day<C>(planner: &Planner<C>, date: NaiveDate)
where
    C: Classify,
{
    println!("DAY {}", date);
    for event in planner.events_for(date, &CategoryFilter::All) {
        print_event(event);
    }
}

pub fn print_event(event: &Event) {
    let completion = if event.completed() { "✓" } else { " " };
    let color = category_color(event.category()).to_hex_string();
    println!("    {} {} at {}\t({}, {})", completion, event.title(), event.time().format("%H:%M"), event.category(), color);
}
