use super::*;
use barbershop::types::AppointmentUser;
use time::UtcOffset;
use time::macros::{date, datetime, offset};

fn appointment(id: &str, at: OffsetDateTime) -> Appointment {
    Appointment { id: id.into(), date: at, user: AppointmentUser { name: "Pablo".into(), avatar_url: None } }
}

fn agenda() -> Agenda {
    Agenda::new(
        vec![appointment("a", datetime!(2020-06-08 8:00 UTC)), appointment("b", datetime!(2020-06-08 14:00 UTC))],
        UtcOffset::UTC,
    )
}

#[test]
fn next_appointment_on_today() {
    let agenda = agenda();
    let next = next_appointment(&agenda, date!(2020 - 06 - 08), datetime!(2020-06-08 9:30 UTC));
    assert_eq!(next.map(|a| a.id.as_str()), Some("b"));
}

#[test]
fn no_next_appointment_on_other_days() {
    let agenda = agenda();
    assert!(next_appointment(&agenda, date!(2020 - 06 - 09), datetime!(2020-06-08 7:00 UTC)).is_none());
}

#[test]
fn next_appointment_in_local_time() {
    let agenda = Agenda::new(vec![appointment("late", datetime!(2020-06-09 1:00 UTC))], offset!(-3));
    let now = datetime!(2020-06-08 20:00 -3);
    let next = next_appointment(&agenda, now.date(), now);
    assert_eq!(next.map(|a| schedule::format_hour(a.date)), Some("22:00".to_owned()));
}

#[test]
fn heading_for_today_leads_with_today() {
    let heading = schedule::day_heading(date!(2020 - 06 - 08), date!(2020 - 06 - 08));
    assert_eq!(heading_parts(&heading), vec!["Today", "Day 08", "Monday"]);
}

#[test]
fn heading_for_other_day() {
    let heading = schedule::day_heading(date!(2020 - 06 - 10), date!(2020 - 06 - 08));
    assert_eq!(heading_parts(&heading), vec!["Day 10", "Wednesday"]);
}
