//! Plain-text rendering of the schedule for the terminal.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use std::fmt::Write;

use barbershop::schedule::{self, Agenda, CalendarDay};
use barbershop::types::{Appointment, MonthAvailabilityItem, User};
use time::{Date, Month, OffsetDateTime};

pub fn user_line(user: &User) -> String {
    format!("{} <{}> ({})", user.name, user.email, user.id)
}

fn day_cell(day: Option<CalendarDay>) -> String {
    match day {
        None => "    ".to_owned(),
        Some(d) if d.disabled => format!("  {:>2}", "--"),
        Some(d) => format!("  {:>2}", d.date.day()),
    }
}

/// Month grid starting on Sunday; unavailable days show as `--`.
pub fn calendar(year: i32, month: Month, availability: &[MonthAvailabilityItem]) -> String {
    let mut out = schedule::month_title(year, month);
    out.push('\n');
    out.push_str("  Su  Mo  Tu  We  Th  Fr  Sa\n");
    for week in schedule::calendar_month(year, month, availability).chunks(7) {
        let row: String = week.iter().copied().map(day_cell).collect();
        out.push_str(row.trim_end());
        out.push('\n');
    }
    out
}

fn appointment_line(appointment: &Appointment) -> String {
    format!("  {}  {}", schedule::format_hour(appointment.date), appointment.user.name)
}

/// Heading, next appointment (today only), then morning and afternoon.
pub fn agenda(selected: Date, now: OffsetDateTime, appointments: Vec<Appointment>) -> String {
    let heading = schedule::day_heading(selected, now.date());
    let agenda = Agenda::new(appointments, now.offset());

    let mut out = String::new();
    if heading.is_today {
        out.push_str("Today | ");
    }
    let _ = writeln!(out, "{} | {}", heading.day, heading.weekday);

    if heading.is_today {
        if let Some(next) = agenda.next_after(now) {
            let _ = writeln!(out, "\nUp next\n{}", appointment_line(next));
        }
    }
    for (title, list) in [("Morning", &agenda.morning), ("Afternoon", &agenda.afternoon)] {
        let _ = writeln!(out, "\n{title}");
        if list.is_empty() {
            out.push_str("  (none)\n");
        }
        for appointment in list {
            out.push_str(&appointment_line(appointment));
            out.push('\n');
        }
    }
    out
}
