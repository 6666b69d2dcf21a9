use super::*;

#[test]
fn js_offset_is_inverted() {
    // Brasília: getTimezoneOffset() == 180
    assert_eq!(offset_from_js_minutes(180.0), UtcOffset::from_hms(-3, 0, 0).unwrap());
    assert_eq!(offset_from_js_minutes(-330.0), UtcOffset::from_hms(5, 30, 0).unwrap());
    assert_eq!(offset_from_js_minutes(0.0), UtcOffset::UTC);
}

#[test]
fn out_of_range_offset_falls_back_to_utc() {
    assert_eq!(offset_from_js_minutes(100_000.0), UtcOffset::UTC);
}
