//! Field validation rules for user records.
//!
//! All functions are pure. `validate_dob` is the only one that reads the
//! clock, and it delegates to `validate_dob_in_year` which does not.

use std::sync::LazyLock;

use chrono::{Datelike, Utc};
use regex::Regex;

use super::{FieldError, User, ValidationErrors};

/// Minimum name length, in bytes.
pub const NAME_MIN_LEN: usize = 4;
/// Maximum name length, in bytes.
pub const NAME_MAX_LEN: usize = 80;

/// Earliest accepted birth year.
const MIN_BIRTH_YEAR: i32 = 1900;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,4}$").expect("valid email regex")
});

static DOB_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("valid date regex"));

/// Checks that a name is 4 to 80 characters of ASCII letters, digits and
/// whitespace.
///
/// # Examples
///
/// ```
/// use usersvc_core::user::validate_name;
///
/// assert!(validate_name("John Doe"));
/// assert!(!validate_name("Jon"));
/// assert!(!validate_name("John_Doe"));
/// ```
pub fn validate_name(name: &str) -> bool {
    if name.len() < NAME_MIN_LEN || name.len() > NAME_MAX_LEN {
        return false;
    }

    name.chars()
        .all(|c| c.is_ascii_alphanumeric() || c.is_ascii_whitespace())
}

/// Checks an email address against a deliberately simple pattern.
///
/// The top-level domain must be 2 to 4 letters.
pub fn validate_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Checks a `YYYY-MM-DD` date of birth against the current UTC year.
pub fn validate_dob(dob: &str) -> bool {
    validate_dob_in_year(dob, Utc::now().year())
}

/// Checks a `YYYY-MM-DD` date of birth, with `current_year` as the upper
/// bound for the year.
///
/// The year must be between 1900 and `current_year` inclusive, the month
/// between 1 and 12, and the day must exist in that month (leap years
/// included).
pub fn validate_dob_in_year(dob: &str, current_year: i32) -> bool {
    if !DOB_RE.is_match(dob) {
        return false;
    }

    // The regex pins the layout, so every slice below is ASCII digits.
    let (Some(year), Some(month), Some(day)) = (
        dob.get(0..4).and_then(|s| s.parse::<i32>().ok()),
        dob.get(5..7).and_then(|s| s.parse::<u32>().ok()),
        dob.get(8..10).and_then(|s| s.parse::<u32>().ok()),
    ) else {
        return false;
    };

    if !(MIN_BIRTH_YEAR..=current_year).contains(&year) {
        return false;
    }

    if !(1..=12).contains(&month) {
        return false;
    }

    (1..=days_in_month(year, month)).contains(&day)
}

/// Validates the required fields of a user, collecting every failure.
///
/// `Name` and `Email` are required. `DOB` is not checked here; callers run
/// [`validate_dob`] separately so they can report it with its own message.
pub fn validate_user(user: &User) -> Result<(), ValidationErrors> {
    let mut errors = Vec::new();

    if user.name.is_empty() {
        errors.push(FieldError::Required("Name"));
    } else if !validate_name(&user.name) {
        errors.push(FieldError::Invalid("Name"));
    }

    if user.email.is_empty() {
        errors.push(FieldError::Required("Email"));
    } else if !validate_email(&user.email) {
        errors.push(FieldError::Invalid("Email"));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ValidationErrors(errors))
    }
}

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        2 if is_leap_year(year) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}
