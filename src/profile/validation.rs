use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

use super::dto::UserProfile;

pub const PHONE_DIGITS: usize = 10;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileFieldError {
    #[error("First name is required")]
    FirstNameRequired,

    #[error("Please enter a valid email address")]
    InvalidEmail,

    #[error("Phone number must have 10 digits")]
    PhoneTooShort,

    #[error("Phone number must have no more than 10 digits")]
    PhoneTooLong,
}

impl ProfileFieldError {
    pub fn field(&self) -> &'static str {
        match self {
            ProfileFieldError::FirstNameRequired => "first_name",
            ProfileFieldError::InvalidEmail => "email",
            ProfileFieldError::PhoneTooShort | ProfileFieldError::PhoneTooLong => "phone",
        }
    }
}

pub fn is_valid_email(email: &str) -> bool {
    lazy_static! {
        static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    }
    EMAIL_RE.is_match(email)
}

pub fn phone_digits(phone: &str) -> String {
    phone.chars().filter(char::is_ascii_digit).collect()
}

/// An empty phone means "not provided" and passes.
pub fn validate_phone(phone: &str) -> Result<(), ProfileFieldError> {
    if phone.trim().is_empty() {
        return Ok(());
    }
    let digits = phone_digits(phone);
    match digits.len() {
        n if n < PHONE_DIGITS => Err(ProfileFieldError::PhoneTooShort),
        n if n > PHONE_DIGITS => Err(ProfileFieldError::PhoneTooLong),
        _ => Ok(()),
    }
}

/// `(123) 456-7890` for a valid number, otherwise the input unchanged.
pub fn format_us_phone(phone: &str) -> String {
    let digits = phone_digits(phone);
    if digits.len() != PHONE_DIGITS {
        return phone.to_string();
    }
    format!("({}) {}-{}", &digits[0..3], &digits[3..6], &digits[6..])
}

pub fn validate_profile(profile: &UserProfile) -> Vec<ProfileFieldError> {
    let mut errors = Vec::new();
    if profile.first_name.trim().is_empty() {
        errors.push(ProfileFieldError::FirstNameRequired);
    }
    if !is_valid_email(profile.email.trim()) {
        errors.push(ProfileFieldError::InvalidEmail);
    }
    if let Err(e) = validate_phone(&profile.phone) {
        errors.push(e);
    }
    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_pattern() {
        assert!(is_valid_email("tilly@littlelemon.com"));
        assert!(is_valid_email("a@b.co"));
        assert!(!is_valid_email("tilly@littlelemon"));
        assert!(!is_valid_email("tilly littlelemon.com"));
        assert!(!is_valid_email("ti lly@littlelemon.com"));
        assert!(!is_valid_email("@littlelemon.com"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn phone_needs_exactly_ten_digits() {
        assert_eq!(validate_phone("(312) 555-0199"), Ok(()));
        assert_eq!(validate_phone("3125550199"), Ok(()));
        assert_eq!(validate_phone("555-0199"), Err(ProfileFieldError::PhoneTooShort));
        assert_eq!(validate_phone("phone"), Err(ProfileFieldError::PhoneTooShort));
        assert_eq!(
            validate_phone("+1 312 555 0199"),
            Err(ProfileFieldError::PhoneTooLong)
        );
        assert_eq!(validate_phone("   "), Ok(()));
    }

    #[test]
    fn formats_valid_numbers_only() {
        assert_eq!(format_us_phone("3125550199"), "(312) 555-0199");
        assert_eq!(format_us_phone("555"), "555");
    }

    #[test]
    fn profile_errors_are_collected_per_field() {
        let profile = UserProfile {
            first_name: "  ".into(),
            email: "nope".into(),
            phone: "123".into(),
            ..Default::default()
        };
        let errors = validate_profile(&profile);
        assert_eq!(
            errors,
            vec![
                ProfileFieldError::FirstNameRequired,
                ProfileFieldError::InvalidEmail,
                ProfileFieldError::PhoneTooShort,
            ]
        );
        assert_eq!(errors[2].field(), "phone");

        let ok = UserProfile {
            first_name: "Tilly".into(),
            email: "tilly@littlelemon.com".into(),
            ..Default::default()
        };
        assert!(validate_profile(&ok).is_empty());
    }
}
