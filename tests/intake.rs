
use chrono::{Datelike, Duration, NaiveDate, NaiveTime, Weekday};

use day_planner::Category;
use day_planner::IntakeError;
use day_planner::Planner;

use mocks::{CountingClassifier, FailingClassifier, FixedClassifier};

/// 2021-03-22 was a Monday
fn a_monday() -> NaiveDate {
    let date = NaiveDate::from_ymd_opt(2021, 3, 22).unwrap();
    assert_eq!(date.weekday(), Weekday::Mon);
    date
}

#[tokio::test]
async fn full_intake_pipeline() {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut planner = Planner::new(FixedClassifier::new("exercise"));

    let (date, event) = planner.add_event_on(a_monday(), "Friday exercise", "18:00").await.unwrap();

    assert_eq!(date, a_monday() + Duration::days(4));
    assert_eq!(date.weekday(), Weekday::Fri);
    assert_eq!(event.title(), "exercise");
    assert_eq!(event.time(), NaiveTime::from_hms_opt(18, 0, 0).unwrap());
    assert_eq!(event.category(), Category::Exercise);
    assert_eq!(event.completed(), false);

    // The committed event is in the store, and the assignment was recorded for the session
    assert_eq!(planner.store().events_for(date).len(), 1);
    assert_eq!(planner.assigned_category("exercise"), Some(Category::Exercise));
}

#[tokio::test]
async fn descriptions_without_a_weekday_land_on_today() {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut planner = Planner::new(FixedClassifier::new("exercise"));

    let (date, event) = planner.add_event_on(a_monday(), "exercise", "18:00").await.unwrap();
    assert_eq!(date, a_monday());
    assert_eq!(event.title(), "exercise");
}

#[tokio::test]
async fn classification_failure_is_recovered_with_the_default_category() {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut planner = Planner::new(FailingClassifier {});

    let (date, event) = planner.add_event_on(a_monday(), "team meeting", "10:00").await.unwrap();

    // The failure is not surfaced: the event is committed, in the "other" category
    assert_eq!(event.category(), Category::Other);
    assert_eq!(planner.store().events_for(date).len(), 1);
    assert_eq!(planner.assigned_category("team meeting"), Some(Category::Other));
}

#[tokio::test]
async fn unknown_labels_fall_back_to_the_default_category() {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut planner = Planner::new(FixedClassifier::new("sports!!"));

    let (_date, event) = planner.add_event_on(a_monday(), "swim", "07:00").await.unwrap();
    assert_eq!(event.category(), Category::Other);
}

#[tokio::test]
async fn near_duplicates_are_rejected_naming_the_existing_event() {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut planner = Planner::new(FixedClassifier::new("meeting"));

    let (date, _event) = planner.add_event_on(a_monday(), "team meeting", "10:00").await.unwrap();

    let refused = planner.add_event_on(a_monday(), "team meetings", "11:00").await;
    assert_eq!(refused, Err(IntakeError::Duplicate("team meeting".to_string())));

    // Nothing was committed by the refused attempt
    assert_eq!(planner.store().events_for(date).len(), 1);
}

#[tokio::test]
async fn the_same_title_on_another_day_is_not_a_duplicate() {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut planner = Planner::new(FixedClassifier::new("meeting"));

    planner.add_event_on(a_monday(), "team meeting", "10:00").await.unwrap();

    // "Friday team meeting" resolves to another date-key, so the near-identical title is fine
    let (date, event) = planner.add_event_on(a_monday(), "Friday team meeting", "10:00").await.unwrap();
    assert_eq!(date.weekday(), Weekday::Fri);
    assert_eq!(event.title(), "team meeting");
}

#[tokio::test]
async fn rejected_intakes_never_reach_the_classification_service() {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut planner = Planner::new(CountingClassifier::new("meeting"));

    planner.add_event_on(a_monday(), "team meeting", "10:00").await.unwrap();
    assert_eq!(planner.classifier().calls(), 1);

    // The duplicate is caught before the (potentially slow) classification call
    let refused = planner.add_event_on(a_monday(), "team meetings", "11:00").await;
    assert!(matches!(refused, Err(IntakeError::Duplicate(_))));
    assert_eq!(planner.classifier().calls(), 1);

    // So is the empty-title rejection
    let refused = planner.add_event_on(a_monday(), "Friday", "11:00").await;
    assert_eq!(refused, Err(IntakeError::EmptyTitle));
    assert_eq!(planner.classifier().calls(), 1);
}

#[tokio::test]
async fn weekday_only_descriptions_are_rejected() {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut planner = Planner::new(FixedClassifier::new("other"));

    assert_eq!(planner.add_event_on(a_monday(), "Friday", "10:00").await, Err(IntakeError::EmptyTitle));
    assert_eq!(planner.add_event_on(a_monday(), "   ", "10:00").await, Err(IntakeError::EmptyTitle));
    assert!(planner.store().events_for(a_monday()).is_empty());
}

#[tokio::test]
async fn unparsable_times_are_rejected() {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut planner = Planner::new(FixedClassifier::new("other"));

    for bad_time in ["", "noon", "25:00", "18h30"].iter() {
        let refused = planner.add_event_on(a_monday(), "lunch", bad_time).await;
        assert_eq!(refused, Err(IntakeError::InvalidTime(bad_time.to_string())));
    }
    assert!(planner.store().events_for(a_monday()).is_empty());
}
