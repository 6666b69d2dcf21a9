use super::*;

#[test]
fn initials_take_first_two_words() {
    assert_eq!(initials("John Doe"), "JD");
    assert_eq!(initials("ana maria da silva"), "AM");
}

#[test]
fn initials_of_single_or_empty_name() {
    assert_eq!(initials("Cher"), "C");
    assert_eq!(initials("   "), "");
}
