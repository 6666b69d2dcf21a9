use super::*;
use crate::types::AppointmentUser;
use time::macros::{date, datetime, offset};

fn appointment(id: &str, at: OffsetDateTime) -> Appointment {
    Appointment { id: id.to_owned(), date: at, user: AppointmentUser { name: format!("client {id}"), avatar_url: None } }
}

// =============================================================
// Queries
// =============================================================

#[test]
fn queries_use_one_based_months() {
    assert_eq!(month_query(2020, Month::January), MonthQuery { year: 2020, month: 1 });
    assert_eq!(day_query(date!(2020 - 12 - 31)), DayQuery { year: 2020, month: 12, day: 31 });
}

// =============================================================
// Calendar
// =============================================================

#[test]
fn june_2020_starts_on_monday() {
    let cells = calendar_month(2020, Month::June, &[]);
    assert_eq!(cells.len(), 1 + 30);
    assert!(cells[0].is_none());
    assert_eq!(cells[1].unwrap().date, date!(2020 - 06 - 01));
    assert_eq!(cells.last().unwrap().unwrap().date, date!(2020 - 06 - 30));
}

#[test]
fn weekends_are_disabled() {
    let cells = calendar_month(2020, Month::June, &[]);
    let saturday = cells.iter().flatten().find(|d| d.date == date!(2020 - 06 - 06)).unwrap();
    let monday = cells.iter().flatten().find(|d| d.date == date!(2020 - 06 - 08)).unwrap();
    assert!(saturday.disabled);
    assert!(!monday.disabled);
}

#[test]
fn unavailable_days_are_disabled() {
    let availability = [
        MonthAvailabilityItem { day: 8, available: false },
        MonthAvailabilityItem { day: 9, available: true },
    ];
    let cells = calendar_month(2020, Month::June, &availability);
    let day = |d: Date| cells.iter().flatten().find(|c| c.date == d).unwrap().disabled;
    assert!(day(date!(2020 - 06 - 08)));
    assert!(!day(date!(2020 - 06 - 09)));
    assert!(!day(date!(2020 - 06 - 10)));
}

#[test]
fn february_leap_year_length() {
    let days = calendar_month(2024, Month::February, &[]).into_iter().flatten().count();
    assert_eq!(days, 29);
}

#[test]
fn month_navigation_wraps_years() {
    assert_eq!(previous_month(2020, Month::January), (2019, Month::December));
    assert_eq!(next_month(2020, Month::December), (2021, Month::January));
    assert_eq!(next_month(2020, Month::June), (2020, Month::July));
    assert_eq!(month_title(2020, Month::June), "June 2020");
}

// =============================================================
// Headings
// =============================================================

#[test]
fn day_heading_for_today() {
    let heading = day_heading(date!(2020 - 06 - 08), date!(2020 - 06 - 08));
    assert!(heading.is_today);
    assert_eq!(heading.day, "Day 08");
    assert_eq!(heading.weekday, "Monday");
}

#[test]
fn day_heading_for_other_day() {
    assert!(!day_heading(date!(2020 - 06 - 09), date!(2020 - 06 - 08)).is_today);
}

#[test]
fn format_hour_pads() {
    assert_eq!(format_hour(datetime!(2020-06-08 8:05 UTC)), "08:05");
}

// =============================================================
// Agenda
// =============================================================

#[test]
fn agenda_splits_at_noon_in_order() {
    let agenda = Agenda::new(
        vec![
            appointment("c", datetime!(2020-06-08 15:00 UTC)),
            appointment("a", datetime!(2020-06-08 8:00 UTC)),
            appointment("b", datetime!(2020-06-08 12:00 UTC)),
            appointment("d", datetime!(2020-06-08 11:00 UTC)),
        ],
        UtcOffset::UTC,
    );
    let ids = |list: &[Appointment]| list.iter().map(|a| a.id.clone()).collect::<Vec<_>>();
    assert_eq!(ids(&agenda.morning), vec!["a", "d"]);
    assert_eq!(ids(&agenda.afternoon), vec!["b", "c"]);
}

#[test]
fn next_after_skips_past_appointments() {
    let agenda = Agenda::new(
        vec![appointment("a", datetime!(2020-06-08 8:00 UTC)), appointment("b", datetime!(2020-06-08 14:00 UTC))],
        UtcOffset::UTC,
    );
    assert_eq!(agenda.next_after(datetime!(2020-06-08 9:00 UTC)).unwrap().id, "b");
    assert!(agenda.next_after(datetime!(2020-06-08 18:00 UTC)).is_none());
}

#[test]
fn agenda_groups_by_viewer_wall_clock() {
    let agenda = Agenda::new(
        vec![appointment("a", datetime!(2020-06-08 14:00 UTC)), appointment("b", datetime!(2020-06-08 15:30 UTC))],
        offset!(-3),
    );
    assert_eq!(agenda.morning.len(), 1);
    assert_eq!(format_hour(agenda.morning[0].date), "11:00");
    assert_eq!(format_hour(agenda.afternoon[0].date), "12:30");
    assert_eq!(agenda.next_after(datetime!(2020-06-08 14:30 UTC)).unwrap().id, "b");
}

#[test]
fn empty_agenda() {
    assert!(Agenda::new(Vec::new(), UtcOffset::UTC).is_empty());
}
