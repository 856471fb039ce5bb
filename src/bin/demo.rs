//! This is an example of how day-planner can be used.
//! This binary runs a few descriptions through the intake pipeline and prints the resulting days.
//!
//! If no classification service is listening on the configured endpoint, every event will simply
//! end up in the "other" category. You can set the RUST_LOG environment variable to see the
//! recovered classification failures.

use chrono::{Duration, Local};

use day_planner::client::HttpClassifier;
use day_planner::utils::print_day;
use day_planner::Category;
use day_planner::CategoryFilter;
use day_planner::Planner;

#[tokio::main]
async fn main() {
    env_logger::init();

    let classifier = HttpClassifier::new().unwrap();
    println!("Classification endpoint: {}", classifier.endpoint());

    let mut planner = Planner::new(classifier);

    for (text, time) in [
        ("Friday exercise", "18:00"),
        ("team meeting", "10:00"),
        ("Sunday brunch with Ana", "11:30"),
        ("Friday workout session", "19:00"),
    ].iter() {
        match planner.add_event(text, time).await {
            Ok((date, event)) => println!("Scheduled {:?} on {}", event.title(), date),
            Err(err) => println!("Refused {:?}: {}", text, err),
        }
    }

    // The demo only schedules within the coming week
    println!();
    let today = Local::now().date_naive();
    for day in (0..8).map(|n| today + Duration::days(n)) {
        if !planner.store().events_for(day).is_empty() {
            print_day(&planner, day);
        }
    }

    println!("\nOnly the meetings of today:");
    for event in planner.events_for(today, &CategoryFilter::Only(Category::Meeting)) {
        println!("    {}", event.title());
    }
}
