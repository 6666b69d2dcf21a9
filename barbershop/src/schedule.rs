//! Dashboard schedule math: calendar grid, day headings, appointment grouping.
//!
//! SYSTEM CONTEXT
//! ==============
//! The dashboard pairs a month calendar (driven by the month availability
//! listing) with the agenda of the selected day. Everything here is pure so
//! both the browser and the cli render the same schedule.

#[cfg(test)]
#[path = "schedule_test.rs"]
mod schedule_test;

use time::{Date, Month, OffsetDateTime, UtcOffset, Weekday};

use crate::types::{Appointment, DayQuery, MonthAvailabilityItem, MonthQuery};

/// Hour at which afternoon appointments start.
pub const AFTERNOON_STARTS_AT: u8 = 12;

#[must_use]
pub fn month_query(year: i32, month: Month) -> MonthQuery {
    MonthQuery { year, month: month.into() }
}

#[must_use]
pub fn day_query(date: Date) -> DayQuery {
    DayQuery { year: date.year(), month: date.month().into(), day: date.day() }
}

/// One cell of the month grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CalendarDay {
    pub date: Date,
    pub disabled: bool,
}

/// Days of `month`, padded with `None` so the first row starts on Sunday.
///
/// Weekends are never bookable; other days are disabled when the listing
/// reports them unavailable. Days missing from the listing stay enabled.
#[must_use]
pub fn calendar_month(year: i32, month: Month, availability: &[MonthAvailabilityItem]) -> Vec<Option<CalendarDay>> {
    let Ok(first) = Date::from_calendar_date(year, month, 1) else {
        return Vec::new();
    };
    let leading = usize::from(first.weekday().number_days_from_sunday());

    let mut cells: Vec<Option<CalendarDay>> = vec![None; leading];
    let mut current = Some(first);
    while let Some(date) = current.filter(|d| d.month() == month) {
        let unavailable = availability.iter().any(|item| item.day == date.day() && !item.available);
        cells.push(Some(CalendarDay { date, disabled: is_weekend(date) || unavailable }));
        current = date.next_day();
    }
    cells
}

#[must_use]
pub fn is_weekend(date: Date) -> bool {
    matches!(date.weekday(), Weekday::Saturday | Weekday::Sunday)
}

/// `(year, month)` one month earlier.
#[must_use]
pub fn previous_month(year: i32, month: Month) -> (i32, Month) {
    if month == Month::January { (year - 1, Month::December) } else { (year, month.previous()) }
}

/// `(year, month)` one month later.
#[must_use]
pub fn next_month(year: i32, month: Month) -> (i32, Month) {
    if month == Month::December { (year + 1, Month::January) } else { (year, month.next()) }
}

/// Caption above the calendar, e.g. `June 2020`.
#[must_use]
pub fn month_title(year: i32, month: Month) -> String {
    format!("{month} {year}")
}

/// Heading of the selected day's agenda.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DayHeading {
    pub is_today: bool,
    /// `Day 08`
    pub day: String,
    /// `Monday`
    pub weekday: String,
}

#[must_use]
pub fn day_heading(selected: Date, today: Date) -> DayHeading {
    DayHeading {
        is_today: selected == today,
        day: format!("Day {:02}", selected.day()),
        weekday: selected.weekday().to_string(),
    }
}

/// `HH:MM` in the offset `at` carries. [`Agenda`] entries are already in the
/// viewer's offset.
#[must_use]
pub fn format_hour(at: OffsetDateTime) -> String {
    format!("{:02}:{:02}", at.hour(), at.minute())
}

/// Selected day's appointments split into morning and afternoon, each in
/// chronological order. Dates are shifted to the viewer's offset so the noon
/// split and the displayed hours follow the viewer's wall clock.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Agenda {
    pub morning: Vec<Appointment>,
    pub afternoon: Vec<Appointment>,
}

impl Agenda {
    #[must_use]
    pub fn new(mut appointments: Vec<Appointment>, offset: UtcOffset) -> Self {
        for appointment in &mut appointments {
            appointment.date = appointment.date.to_offset(offset);
        }
        appointments.sort_by_key(|a| a.date);
        let (morning, afternoon): (Vec<_>, Vec<_>) =
            appointments.into_iter().partition(|a| a.date.hour() < AFTERNOON_STARTS_AT);
        Self { morning, afternoon }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.morning.is_empty() && self.afternoon.is_empty()
    }

    /// First appointment after `now`.
    #[must_use]
    pub fn next_after(&self, now: OffsetDateTime) -> Option<&Appointment> {
        self.morning.iter().chain(&self.afternoon).find(|a| a.date > now)
    }
}
