use thiserror::Error;

use super::phone::PhoneKind;

/// Why a CEP or phone number was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ContactError {
    /// No digits in the input.
    #[error("{0} is empty")]
    Empty(&'static str),

    /// Wrong number of digits after cleaning.
    #[error("{field} has {found} digits")]
    InvalidLength { field: &'static str, found: usize },

    /// "00000000" is not an assigned CEP.
    #[error("CEP 00000000 is reserved")]
    ReservedCep,

    /// Non-digit inside a number that must be all digits.
    #[error("{field} has non-digit character '{found}'")]
    InvalidCharacter { field: &'static str, found: char },

    /// Area code (DDD) digits must both be 1-9.
    #[error("invalid area code '{0}'")]
    InvalidAreaCode(String),

    /// Subscriber number starts with a digit not used for this kind of line.
    #[error("{kind} numbers cannot start with '{found}'")]
    InvalidPrefix { kind: PhoneKind, found: char },

    /// Declared line type disagrees with the subscriber length.
    #[error("number is a {actual} line, not {declared}")]
    KindMismatch { declared: PhoneKind, actual: PhoneKind },
}
