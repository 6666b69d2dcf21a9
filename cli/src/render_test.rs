use super::*;
use barbershop::types::AppointmentUser;
use time::macros::{date, datetime};

fn appointment(id: &str, name: &str, at: OffsetDateTime) -> Appointment {
    Appointment { id: id.into(), date: at, user: AppointmentUser { name: name.into(), avatar_url: None } }
}

#[test]
fn calendar_for_june_2020() {
    let availability = [MonthAvailabilityItem { day: 9, available: false }];
    let text = calendar(2020, Month::June, &availability);
    let lines: Vec<_> = text.lines().collect();
    assert_eq!(lines[0], "June 2020");
    assert_eq!(lines[1], "  Su  Mo  Tu  We  Th  Fr  Sa");
    assert_eq!(lines[2], "       1   2   3   4   5  --");
    assert_eq!(lines[3], "  --   8  --  10  11  12  --");
    assert_eq!(lines.len(), 2 + 5);
}

#[test]
fn agenda_for_today_shows_next() {
    let text = agenda(
        date!(2020 - 06 - 08),
        datetime!(2020-06-08 9:00 UTC),
        vec![
            appointment("b", "Pablo", datetime!(2020-06-08 14:00 UTC)),
            appointment("a", "Ana", datetime!(2020-06-08 8:00 UTC)),
        ],
    );
    assert!(text.starts_with("Today | Day 08 | Monday\n"));
    assert!(text.contains("Up next\n  14:00  Pablo\n"));
    assert!(text.contains("Morning\n  08:00  Ana\n"));
    assert!(text.contains("Afternoon\n  14:00  Pablo\n"));
}

#[test]
fn agenda_for_other_day_has_no_next() {
    let text = agenda(
        date!(2020 - 06 - 09),
        datetime!(2020-06-08 9:00 UTC),
        vec![appointment("a", "Ana", datetime!(2020-06-09 8:00 UTC))],
    );
    assert!(text.starts_with("Day 09 | Tuesday\n"));
    assert!(!text.contains("Up next"));
    assert!(text.contains("Afternoon\n  (none)\n"));
}

#[test]
fn agenda_hours_follow_local_offset() {
    let text = agenda(
        date!(2020 - 06 - 08),
        datetime!(2020-06-08 9:00 -3),
        vec![appointment("a", "Ana", datetime!(2020-06-08 14:00 UTC))],
    );
    assert!(text.contains("Up next\n  11:00  Ana\n"));
    assert!(text.contains("Morning\n  11:00  Ana\n"));
    assert!(text.contains("Afternoon\n  (none)\n"));
}

#[test]
fn user_line_format() {
    let user = User {
        id: "user123".into(),
        name: "John Doe".into(),
        email: "johndoe@example.com".into(),
        avatar_url: None,
    };
    assert_eq!(user_line(&user), "John Doe <johndoe@example.com> (user123)");
}
