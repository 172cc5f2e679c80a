use super::*;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn at(y: i32, m: u32, d: u32) -> NaiveDateTime {
    start_of_day(date(y, m, d))
}

fn at_time(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    date(y, m, d).and_hms_opt(h, min, 0).unwrap()
}

fn june_trip() -> (NaiveDate, NaiveDate) {
    (date(2025, 6, 10), date(2025, 6, 15))
}

// classify
#[test]
fn test_upcoming_counts_days_to_go() {
    let (start, end) = june_trip();
    let info = classify(start, end, at(2025, 6, 1));
    assert_eq!(info.status, TripStatus::Upcoming);
    assert_eq!(info.days_text, "9 days to go");
}

#[test]
fn test_completed_counts_days_ago() {
    let (start, end) = june_trip();
    let info = classify(start, end, at(2025, 6, 20));
    assert_eq!(info.status, TripStatus::Completed);
    assert_eq!(info.days_text, "5 days ago");
}

#[test]
fn test_ongoing_counts_days_left() {
    let (start, end) = june_trip();
    let info = classify(start, end, at(2025, 6, 12));
    assert_eq!(info.status, TripStatus::Ongoing);
    assert_eq!(info.days_text, "3 days left");
}

#[test]
fn test_single_day_trip_on_the_day() {
    let day = date(2025, 6, 10);
    let info = classify(day, day, at(2025, 6, 10));
    assert_eq!(info.status, TripStatus::Ongoing);
    assert_eq!(info.days_text, "0 days left");
}

#[test]
fn test_start_instant_is_ongoing() {
    let (start, end) = june_trip();
    let info = classify(start, end, at(2025, 6, 10));
    assert_eq!(info.status, TripStatus::Ongoing);
    assert_eq!(info.days_text, "5 days left");
}

#[test]
fn test_partial_days_round_up_before_start() {
    let (start, end) = june_trip();
    let info = classify(start, end, at_time(2025, 6, 9, 12, 0));
    assert_eq!(info.status, TripStatus::Upcoming);
    assert_eq!(info.days_text, "1 days to go");
}

#[test]
fn test_partial_days_round_up_while_ongoing() {
    let (start, end) = june_trip();
    let info = classify(start, end, at_time(2025, 6, 12, 6, 0));
    assert_eq!(info.status, TripStatus::Ongoing);
    assert_eq!(info.days_text, "3 days left");
}

#[test]
fn test_after_midnight_of_end_date_is_completed() {
    let (start, end) = june_trip();
    let info = classify(start, end, at_time(2025, 6, 15, 12, 0));
    assert_eq!(info.status, TripStatus::Completed);
    assert_eq!(info.days_text, "0 days ago");

    let info = classify(start, end, at_time(2025, 6, 17, 23, 59));
    assert_eq!(info.days_text, "2 days ago");
}

#[test]
fn test_statuses_partition_the_timeline() {
    let (start, end) = june_trip();
    let start_at = start_of_day(start);
    let end_at = start_of_day(end);

    let mut now = at(2025, 5, 25);
    let stop = at(2025, 6, 25);
    while now <= stop {
        let status = classify(start, end, now).status;
        let expected = if now < start_at {
            TripStatus::Upcoming
        } else if now > end_at {
            TripStatus::Completed
        } else {
            TripStatus::Ongoing
        };
        assert_eq!(status, expected, "at {now}");
        now += TimeDelta::hours(7);
    }
}

#[test]
fn test_classify_is_repeatable() {
    let (start, end) = june_trip();
    let now = at_time(2025, 6, 3, 17, 45);
    assert_eq!(classify(start, end, now), classify(start, end, now));
}

// duration
#[test]
fn test_duration_counts_both_endpoints() {
    let (start, end) = june_trip();
    assert_eq!(duration_days(start, end), 6);
    assert_eq!(duration_text(start, end), "6 days");
}

#[test]
fn test_duration_single_day_is_singular() {
    let day = date(2025, 6, 10);
    assert_eq!(duration_text(day, day), "1 day");
    assert_eq!(duration_text(day, date(2025, 6, 11)), "2 days");
}

// parse_instant
#[test]
fn test_parse_instant_bare_date_is_midnight() {
    assert_eq!(parse_instant("2025-06-01").unwrap(), at(2025, 6, 1));
    assert_eq!(parse_instant(" 2025-06-01 ").unwrap(), at(2025, 6, 1));
}

#[test]
fn test_parse_instant_with_time() {
    assert_eq!(
        parse_instant("2025-06-01T08:30:00").unwrap(),
        at_time(2025, 6, 1, 8, 30)
    );
    assert_eq!(
        parse_instant("2025-06-01 08:30").unwrap(),
        at_time(2025, 6, 1, 8, 30)
    );
}

#[test]
fn test_parse_instant_rejects_garbage() {
    let err = parse_instant("tomorrow").unwrap_err();
    assert!(err.to_string().contains("tomorrow"));
}
