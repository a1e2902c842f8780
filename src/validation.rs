//! Registration input and the rules it must satisfy before it is sent.

use regex::Regex;
use serde::Serialize;
use std::sync::OnceLock;
use thiserror::Error;

/// Lowest accepted age, inclusive.
pub const MIN_AGE: i64 = 1;

/// Highest accepted age, inclusive.
pub const MAX_AGE: i64 = 120;

/// Raw field values for one submission attempt, trimmed.
///
/// Serializes to the endpoint's request body; `age` stays a string on the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RegistrationInput {
    pub name: String,
    pub phone: String,
    pub age: String,
}

impl RegistrationInput {
    pub fn new(name: &str, phone: &str, age: &str) -> Self {
        Self {
            name: name.trim().to_string(),
            phone: phone.trim().to_string(),
            age: age.trim().to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("invalid phone number")]
    InvalidPhone,

    #[error("invalid age")]
    InvalidAge,
}

// Optional leading '+', then 7-15 digits, spaces, hyphens or parentheses
static PHONE_REGEX: OnceLock<Regex> = OnceLock::new();

fn phone_regex() -> &'static Regex {
    PHONE_REGEX.get_or_init(|| {
        Regex::new(r"^\+?[0-9 ()\-]{7,15}$").expect("valid phone regex")
    })
}

pub fn is_valid_phone(phone: &str) -> bool {
    phone_regex().is_match(phone)
}

pub fn is_valid_age(age: &str) -> bool {
    age.parse::<i64>()
        .map(|age| (MIN_AGE..=MAX_AGE).contains(&age))
        .unwrap_or(false)
}

/// Validate an input. Phone is checked before age; the first failure wins.
pub fn validate(input: &RegistrationInput) -> Result<(), ValidationError> {
    if !is_valid_phone(&input.phone) {
        return Err(ValidationError::InvalidPhone);
    }
    if !is_valid_age(&input.age) {
        return Err(ValidationError::InvalidAge);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn input(phone: &str, age: &str) -> RegistrationInput {
        RegistrationInput::new("Asha Patil", phone, age)
    }

    // ==================== Input Tests ====================

    #[test]
    fn test_input_is_trimmed() {
        let input = RegistrationInput::new("  Asha  ", " 9876543210\t", " 34 ");
        assert_eq!(input.name, "Asha");
        assert_eq!(input.phone, "9876543210");
        assert_eq!(input.age, "34");
    }

    #[test]
    fn test_input_serializes_age_as_string() {
        let json = serde_json::to_value(input("9876543210", "34")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"name": "Asha Patil", "phone": "9876543210", "age": "34"})
        );
    }

    // ==================== Phone Tests ====================

    #[test]
    fn test_valid_phones() {
        for phone in [
            "9876543210",
            "+919876543210",
            "+91 98765 43210",
            "(020) 2553-1234",
            "1234567",
            "123456789012345",
        ] {
            assert!(is_valid_phone(phone), "{} should be valid", phone);
        }
    }

    #[test]
    fn test_invalid_phones() {
        for phone in [
            "",
            "123456",
            "1234567890123456",
            "98765abcde",
            "++919876543210",
            "98765+43210",
            "9876.543.210",
        ] {
            assert!(!is_valid_phone(phone), "{} should be invalid", phone);
        }
    }

    // ==================== Age Tests ====================

    #[test]
    fn test_age_bounds() {
        assert!(!is_valid_age("0"));
        assert!(is_valid_age("1"));
        assert!(is_valid_age("120"));
        assert!(!is_valid_age("121"));
    }

    #[test]
    fn test_age_non_numeric() {
        for age in ["", "abc", "12.5", "-5", "3 4", "१२"] {
            assert!(!is_valid_age(age), "{:?} should be invalid", age);
        }
    }

    // ==================== validate Tests ====================

    #[test]
    fn test_validate_passes() {
        assert_eq!(validate(&input("9876543210", "34")), Ok(()));
    }

    #[test]
    fn test_validate_phone_checked_first() {
        assert_eq!(
            validate(&input("12", "0")),
            Err(ValidationError::InvalidPhone)
        );
    }

    #[test]
    fn test_validate_age_after_phone() {
        assert_eq!(
            validate(&input("9876543210", "0")),
            Err(ValidationError::InvalidAge)
        );
    }

    #[test]
    fn test_validate_ignores_name() {
        let input = RegistrationInput::new("", "9876543210", "34");
        assert_eq!(validate(&input), Ok(()));
    }

    // ==================== Property Tests ====================

    proptest! {
        #[test]
        fn prop_pattern_phones_pass(phone in r"\+?[0-9 ()\-]{7,15}") {
            prop_assert!(is_valid_phone(&phone));
        }

        #[test]
        fn prop_phones_with_letters_fail(
            prefix in "[0-9]{4,7}",
            letter in "[a-zA-Z]",
            suffix in "[0-9]{3,7}"
        ) {
            let phone = format!("{}{}{}", prefix, letter, suffix);
            prop_assert_eq!(validate(&input(&phone, "30")), Err(ValidationError::InvalidPhone));
        }

        #[test]
        fn prop_ages_in_range_pass(age in MIN_AGE..=MAX_AGE) {
            prop_assert!(is_valid_age(&age.to_string()));
        }

        #[test]
        fn prop_ages_out_of_range_fail(
            age in prop_oneof![i64::MIN..MIN_AGE, (MAX_AGE + 1)..i64::MAX]
        ) {
            prop_assert_eq!(
                validate(&input("9876543210", &age.to_string())),
                Err(ValidationError::InvalidAge)
            );
        }
    }
}
