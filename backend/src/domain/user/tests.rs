//! Regression coverage for the user model.

use super::*;
use rstest::rstest;

#[rstest]
#[case("", UserValidationError::EmptyId)]
#[case("not-a-uuid", UserValidationError::InvalidId)]
fn invalid_user_ids_are_rejected(#[case] raw: &str, #[case] expected: UserValidationError) {
    let err = UserId::new(raw).expect_err("invalid id must fail");
    assert_eq!(err, expected);
}

#[test]
fn user_id_round_trips_through_display() {
    let id = UserId::random();
    let reparsed = UserId::new(id.to_string()).expect("display output parses");
    assert_eq!(reparsed, id);
}

#[rstest]
#[case("ab", UserValidationError::UsernameTooShort { min: USERNAME_MIN })]
#[case("root admin", UserValidationError::UsernameInvalidCharacters)]
#[case("père", UserValidationError::UsernameInvalidCharacters)]
fn invalid_usernames_are_rejected(#[case] raw: &str, #[case] expected: UserValidationError) {
    let err = Username::new(raw).expect_err("invalid username must fail");
    assert_eq!(err, expected);
}

#[test]
fn overlong_usernames_are_rejected() {
    let raw = "a".repeat(USERNAME_MAX + 1);
    let err = Username::new(raw).expect_err("overlong username must fail");
    assert_eq!(err, UserValidationError::UsernameTooLong { max: USERNAME_MAX });
}

#[rstest]
#[case("mluukkai")]
#[case("hellas_2")]
fn valid_usernames_are_accepted(#[case] raw: &str) {
    let username = Username::new(raw).expect("valid username");
    assert_eq!(username.as_ref(), raw);
}

#[rstest]
#[case("")]
#[case("   ")]
fn blank_display_names_are_rejected(#[case] raw: &str) {
    let err = DisplayName::new(raw).expect_err("blank name must fail");
    assert_eq!(err, UserValidationError::EmptyDisplayName);
}

#[test]
fn record_blog_appends_in_order() {
    let mut user = User::new(
        UserId::random(),
        Username::new("mluukkai").expect("username"),
        DisplayName::new("Matti Luukkainen").expect("name"),
        "$2b$10$hash",
    );
    let first = crate::domain::blog::BlogId::random();
    let second = crate::domain::blog::BlogId::random();

    user.record_blog(first);
    user.record_blog(second);

    assert_eq!(user.blogs(), &[first, second]);
}

#[test]
fn short_passwords_are_rejected_at_registration() {
    let err = NewUser::try_from_parts("mluukkai", "Matti Luukkainen", "pw")
        .expect_err("short password must fail");
    assert_eq!(err, UserValidationError::PasswordTooShort { min: PASSWORD_MIN });
}

#[test]
fn registration_keeps_validated_parts() {
    let new_user = NewUser::try_from_parts("mluukkai", "Matti Luukkainen", "salainen")
        .expect("valid registration");
    assert_eq!(new_user.username().as_ref(), "mluukkai");
    assert_eq!(new_user.display_name().as_ref(), "Matti Luukkainen");
    assert_eq!(new_user.password(), "salainen");
}
