//! # Validation Module
//!
//! Field rules for the registration form.
//!
//! ## Rules at a Glance
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Registration Field Rules                           │
//! │                                                                         │
//! │  email          ^[^\s@]+@[^\s@]+\.[^\s@]+$        → InvalidFormat       │
//! │                                                                         │
//! │  age            leading integer parse                                   │
//! │                 ├── none / outside 1..=120         → OutOfRange         │
//! │                 └── below 18                       → TooYoung           │
//! │                                                                         │
//! │  employee code  only when email ends with umg.com                       │
//! │                 └── length != 6                    → WrongLength        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every validator works on the raw text exactly as typed; nothing is
//! trimmed except the leading whitespace the integer parse skips.
//!
//! "Whitespace" here is the ECMAScript set, the one browser form fields
//! use: Unicode `White_Space` minus U+0085, plus U+FEFF.
//!
//! ## Usage
//! ```rust
//! use registro_core::validation::{validate_age, validate_email};
//! use registro_core::ValidationError;
//!
//! assert!(validate_email("ana@example.com").is_ok());
//! assert_eq!(validate_age("17"), Err(ValidationError::TooYoung));
//! ```

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::ValidationError;
use crate::{ADULT_AGE, EMPLOYEE_CODE_LEN, EMPLOYEE_DOMAIN_SUFFIX, MAX_AGE, MIN_AGE};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// ECMAScript whitespace as a regex class body. Kept in step with
/// [`is_form_whitespace`].
const WHITESPACE_CLASS: &str =
    r"\t\n\x0B\x0C\r \xA0\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}";

/// `local-part@domain.tld`, each part free of whitespace and `@`.
///
/// Regex `\s` is Unicode `White_Space`, which differs from the form's set
/// on U+0085 and U+FEFF, so the class is spelled out.
static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    let part = format!("[^{}@]+", WHITESPACE_CLASS);
    Regex::new(&format!(r"^{part}@{part}\.{part}$")).expect("email pattern is a valid regex")
});

/// True for the characters a browser form treats as whitespace.
pub fn is_form_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{0B}'
            | '\u{0C}'
            | '\r'
            | ' '
            | '\u{A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

// =============================================================================
// Email
// =============================================================================

/// Validates the email format.
///
/// ## Example
/// ```rust
/// use registro_core::validation::validate_email;
///
/// assert!(validate_email("a@b.co").is_ok());
/// assert!(validate_email("a@b").is_err());
/// assert!(validate_email("a b@c.com").is_err());
/// ```
pub fn validate_email(email: &str) -> ValidationResult<()> {
    if EMAIL_PATTERN.is_match(email) {
        Ok(())
    } else {
        Err(ValidationError::InvalidFormat)
    }
}

/// Returns true when the email should be treated as staff.
///
/// Plain suffix test on the raw value. `x@notumg.com` and even `umg.com`
/// with no `@` both count; callers that need a real domain match must not
/// rely on this.
pub fn is_employee_domain(email: &str) -> bool {
    email.ends_with(EMPLOYEE_DOMAIN_SUFFIX)
}

// =============================================================================
// Age
// =============================================================================

/// Parses the leading integer of `text`.
///
/// Skips leading form whitespace, accepts one optional sign, then reads ASCII
/// digits up to the first non-digit. Returns `None` when no digit follows.
/// Values beyond `i64` saturate, which keeps them out of any sane range.
///
/// ```rust
/// use registro_core::validation::parse_leading_int;
///
/// assert_eq!(parse_leading_int("  42"), Some(42));
/// assert_eq!(parse_leading_int("25abc"), Some(25));
/// assert_eq!(parse_leading_int("12.9"), Some(12));
/// assert_eq!(parse_leading_int("-3"), Some(-3));
/// assert_eq!(parse_leading_int("abc"), None);
/// assert_eq!(parse_leading_int(""), None);
/// ```
pub fn parse_leading_int(text: &str) -> Option<i64> {
    let rest = text.trim_start_matches(is_form_whitespace);

    let (negative, digits) = match rest.as_bytes().first() {
        Some(b'-') => (true, &rest[1..]),
        Some(b'+') => (false, &rest[1..]),
        _ => (false, rest),
    };

    let digit_count = digits.bytes().take_while(u8::is_ascii_digit).count();
    if digit_count == 0 {
        return None;
    }

    let magnitude = digits[..digit_count]
        .bytes()
        .fold(0i64, |acc, b| acc.saturating_mul(10).saturating_add(i64::from(b - b'0')));

    Some(if negative { -magnitude } else { magnitude })
}

/// Validates the age text and returns the parsed age.
///
/// ## Rules
/// The range check runs first; only a number inside `1..=120` can be
/// reported as too young.
///
/// ```text
/// "abc" / "" / "0" / "121"  → OutOfRange
/// "1" ..= "17"              → TooYoung
/// "18" ..= "120"            → Ok
/// ```
pub fn validate_age(age_text: &str) -> ValidationResult<u8> {
    let age = match parse_leading_int(age_text) {
        Some(age) if (MIN_AGE..=MAX_AGE).contains(&age) => age,
        _ => return Err(ValidationError::OutOfRange),
    };

    if age < ADULT_AGE {
        return Err(ValidationError::TooYoung);
    }

    // Bounded by MAX_AGE above.
    Ok(age as u8)
}

// =============================================================================
// Employee Code
// =============================================================================

/// Validates the employee code.
///
/// Only staff registrations need a code; for everyone else any content,
/// including none, is accepted. Length is counted in UTF-16 code units,
/// as a browser input's `maxLength` counts it, so one emoji takes two.
///
/// ```rust
/// use registro_core::validation::validate_employee_code;
///
/// assert!(validate_employee_code("AB1234", true).is_ok());
/// assert!(validate_employee_code("AB12", true).is_err());
/// assert!(validate_employee_code("😀😀😀", true).is_ok());
/// assert!(validate_employee_code("", false).is_ok());
/// ```
pub fn validate_employee_code(code: &str, is_employee_domain: bool) -> ValidationResult<()> {
    if is_employee_domain && code.encode_utf16().count() != EMPLOYEE_CODE_LEN {
        return Err(ValidationError::WrongLength);
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn has_email_shape(email: &str) -> bool {
        if email.chars().any(is_form_whitespace) {
            return false;
        }
        let mut parts = email.split('@');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(local), Some(domain), None) => {
                !local.is_empty()
                    && domain
                        .char_indices()
                        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
            }
            _ => false,
        }
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("x@umg.com").is_ok());
        assert!(validate_email("first.last@sub.example.org").is_ok());
        assert!(validate_email("a@b.c").is_ok());

        assert_eq!(validate_email(""), Err(ValidationError::InvalidFormat));
        assert!(validate_email("plain").is_err());
        assert!(validate_email("a@b").is_err());
        assert!(validate_email("@b.com").is_err());
        assert!(validate_email("a@@b.com").is_err());
        assert!(validate_email("a@b.").is_err());
        assert!(validate_email(" a@b.com").is_err());
        assert!(validate_email("a@b.com ").is_err());
        assert!(validate_email("a@b .com").is_err());
    }

    #[test]
    fn test_validate_email_form_whitespace() {
        assert!(validate_email("a\u{feff}b@c.com").is_err());
        assert!(validate_email("a@c.com\u{feff}").is_err());
        assert!(validate_email("a\u{a0}b@c.com").is_err());
        assert!(validate_email("a@c\u{3000}.com").is_err());
        // NEL is not whitespace in a form field.
        assert!(validate_email("a\u{85}b@c.com").is_ok());
    }

    #[test]
    fn test_is_employee_domain() {
        assert!(is_employee_domain("a@umg.com"));
        assert!(!is_employee_domain("a@other.com"));
        // Suffix-only check: unrelated domains ending in "umg.com" match too.
        assert!(is_employee_domain("a@xumg.com"));
        assert!(is_employee_domain("a@notumg.com"));
        assert!(!is_employee_domain("a@umg.com "));
        assert!(!is_employee_domain("a@UMG.COM"));
    }

    #[test]
    fn test_parse_leading_int() {
        assert_eq!(parse_leading_int("25"), Some(25));
        assert_eq!(parse_leading_int("+25"), Some(25));
        assert_eq!(parse_leading_int("\t\n 7"), Some(7));
        assert_eq!(parse_leading_int("\u{feff}30"), Some(30));
        assert_eq!(parse_leading_int("\u{a0}\u{2003}8"), Some(8));
        assert_eq!(parse_leading_int("\u{85}30"), None);
        assert_eq!(parse_leading_int("1e3"), Some(1));
        assert_eq!(parse_leading_int("-"), None);
        assert_eq!(parse_leading_int("- 5"), None);
        assert_eq!(parse_leading_int("99999999999999999999999"), Some(i64::MAX));
    }

    #[test]
    fn test_validate_age() {
        assert_eq!(validate_age("18"), Ok(18));
        assert_eq!(validate_age("120"), Ok(120));
        assert_eq!(validate_age("25 years"), Ok(25));

        assert_eq!(validate_age("17"), Err(ValidationError::TooYoung));
        assert_eq!(validate_age("1"), Err(ValidationError::TooYoung));

        assert_eq!(validate_age("0"), Err(ValidationError::OutOfRange));
        assert_eq!(validate_age("121"), Err(ValidationError::OutOfRange));
        assert_eq!(validate_age("-20"), Err(ValidationError::OutOfRange));
        assert_eq!(validate_age(""), Err(ValidationError::OutOfRange));
        assert_eq!(validate_age("abc"), Err(ValidationError::OutOfRange));
    }

    #[test]
    fn test_validate_employee_code() {
        assert!(validate_employee_code("AB1234", true).is_ok());
        assert!(validate_employee_code("ÁÉÍÓÚÑ", true).is_ok());

        assert_eq!(
            validate_employee_code("AB12", true),
            Err(ValidationError::WrongLength)
        );
        assert!(validate_employee_code("", true).is_err());
        assert!(validate_employee_code("AB12345", true).is_err());

        // Astral characters count twice.
        assert!(validate_employee_code("😀😀😀", true).is_ok());
        assert!(validate_employee_code("😀1234", true).is_ok());
        assert_eq!(
            validate_employee_code("😀12345", true),
            Err(ValidationError::WrongLength)
        );
        assert!(validate_employee_code("😀😀😀😀😀😀", true).is_err());

        assert!(validate_employee_code("", false).is_ok());
        assert!(validate_employee_code("anything at all", false).is_ok());
    }

    proptest! {
        #[test]
        fn prop_email_valid_iff_shape(email in "[a-z@. \u{a0}\u{85}\u{feff}]{0,16}|\\PC{0,24}") {
            prop_assert_eq!(validate_email(&email).is_ok(), has_email_shape(&email));
        }

        #[test]
        fn prop_well_formed_emails_are_accepted(
            local in "[a-z0-9._%+-]{1,12}",
            domain in "[a-z0-9-]{1,12}",
            tld in "[a-z]{2,6}",
        ) {
            let email = format!("{}@{}.{}", local, domain, tld);
            prop_assert!(validate_email(&email).is_ok());
        }

        #[test]
        fn prop_adult_ages_are_accepted(age in 18i64..=120) {
            prop_assert_eq!(validate_age(&age.to_string()), Ok(age as u8));
        }

        #[test]
        fn prop_minor_ages_are_too_young(age in 1i64..=17) {
            prop_assert_eq!(validate_age(&age.to_string()), Err(ValidationError::TooYoung));
        }

        #[test]
        fn prop_out_of_range_ages(age in prop_oneof![i64::MIN..=0, 121i64..=i64::MAX]) {
            prop_assert_eq!(validate_age(&age.to_string()), Err(ValidationError::OutOfRange));
        }

        #[test]
        fn prop_unparseable_ages_are_out_of_range(text in "[a-zA-Z .]{0,10}") {
            prop_assert_eq!(validate_age(&text), Err(ValidationError::OutOfRange));
        }

        #[test]
        fn prop_code_ignored_outside_employee_domain(code in "\\PC{0,20}") {
            prop_assert!(validate_employee_code(&code, false).is_ok());
        }
    }
}
