//! Brazilian phone numbers: two-digit area code (DDD) plus an 8-digit
//! landline or 9-digit mobile subscriber number.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::ContactError;

const COUNTRY_CODE: &str = "55";

/// Line type, decided by subscriber length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PhoneKind {
    /// 8-digit subscriber starting with 2-5.
    Landline,
    /// 9-digit subscriber starting with 9.
    Mobile,
}

impl fmt::Display for PhoneKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Landline => f.write_str("landline"),
            Self::Mobile => f.write_str("mobile"),
        }
    }
}

/// A validated phone number without country code.
///
/// Only [`parse_phone`] and deserialization create one, and both run the
/// same checks, so the digits are always well-formed. The fields are
/// private:
///
/// ```compile_fail
/// use cadastro::contact::{Phone, PhoneKind};
///
/// let forged = Phone {
///     area_code: "11".into(),
///     subscriber: "éééa".into(),
///     kind: PhoneKind::Mobile,
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "PhoneParts")]
pub struct Phone {
    area_code: String,
    subscriber: String,
    kind: PhoneKind,
}

/// Wire form of [`Phone`] before validation.
#[derive(Deserialize)]
struct PhoneParts {
    area_code: String,
    subscriber: String,
    kind: PhoneKind,
}

impl TryFrom<PhoneParts> for Phone {
    type Error = ContactError;

    fn try_from(parts: PhoneParts) -> Result<Self, Self::Error> {
        let phone = check_digits(format!("{}{}", parts.area_code, parts.subscriber))?;
        if phone.kind != parts.kind {
            return Err(ContactError::KindMismatch {
                declared: parts.kind,
                actual: phone.kind,
            });
        }
        Ok(phone)
    }
}

impl Phone {
    /// Two-digit DDD, e.g. "11".
    pub fn area_code(&self) -> &str {
        &self.area_code
    }

    /// 8 or 9 digits.
    pub fn subscriber(&self) -> &str {
        &self.subscriber
    }

    pub fn kind(&self) -> PhoneKind {
        self.kind
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let split = self.subscriber.len().saturating_sub(4);
        write!(
            f,
            "({}) {}-{}",
            self.area_code,
            &self.subscriber[..split],
            &self.subscriber[split..]
        )
    }
}

/// Parse a phone number written with any punctuation.
///
/// A leading `55` country code is dropped when the number has 12 or 13
/// digits; 10 or 11 digits are always read as DDD + subscriber.
pub fn parse_phone(input: &str) -> Result<Phone, ContactError> {
    let mut digits: String = input.chars().filter(|c| c.is_ascii_digit()).collect();
    if matches!(digits.len(), 12 | 13) && digits.starts_with(COUNTRY_CODE) {
        digits.replace_range(..COUNTRY_CODE.len(), "");
    }

    let parsed = check_digits(digits);
    if let Err(err) = &parsed {
        tracing::debug!(%err, "rejected phone number");
    }
    parsed
}

fn check_digits(digits: String) -> Result<Phone, ContactError> {
    if let Some(c) = digits.chars().find(|c| !c.is_ascii_digit()) {
        return Err(ContactError::InvalidCharacter {
            field: "phone",
            found: c,
        });
    }
    let kind = match digits.len() {
        0 => return Err(ContactError::Empty("phone")),
        10 => PhoneKind::Landline,
        11 => PhoneKind::Mobile,
        found => {
            return Err(ContactError::InvalidLength {
                field: "phone",
                found,
            });
        }
    };

    let (area_code, subscriber) = digits.split_at(2);
    if area_code.contains('0') {
        return Err(ContactError::InvalidAreaCode(area_code.to_string()));
    }

    let first = subscriber.as_bytes()[0];
    let allowed = match kind {
        PhoneKind::Landline => (b'2'..=b'5').contains(&first),
        PhoneKind::Mobile => first == b'9',
    };
    if !allowed {
        return Err(ContactError::InvalidPrefix {
            kind,
            found: char::from(first),
        });
    }

    Ok(Phone {
        area_code: area_code.to_string(),
        subscriber: subscriber.to_string(),
        kind,
    })
}

/// Whether `input` is a valid Brazilian landline or mobile number.
pub fn validate_phone(input: &str) -> bool {
    parse_phone(input).is_ok()
}

/// Render as `(DD) DDDD-DDDD` or `(DD) DDDDD-DDDD`; invalid input is
/// returned unchanged.
pub fn format_phone(input: &str) -> String {
    match parse_phone(input) {
        Ok(phone) => phone.to_string(),
        Err(_) => input.to_string(),
    }
}
