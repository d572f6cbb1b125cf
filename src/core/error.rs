use thiserror::Error;

use super::types::DocumentType;

/// Why a value could not be parsed as a [`TaxId`](super::TaxId).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum TaxIdError {
    /// Nothing left after cleaning.
    #[error("tax ID is empty")]
    Empty,

    /// Cleaned length matches neither CPF (11) nor CNPJ (14).
    #[error("length {0} matches neither CPF (11) nor CNPJ (14)")]
    UnknownLength(usize),

    /// Cleaned length is wrong for the document being checked.
    #[error("{document} must have {expected} characters, got {found}")]
    InvalidLength {
        document: DocumentType,
        expected: usize,
        found: usize,
    },

    /// A character is not allowed at this position.
    #[error("{document} has invalid character '{found}' at position {position}")]
    InvalidCharacter {
        document: DocumentType,
        position: usize,
        found: char,
    },

    /// Every character is the same (e.g. "00000000000").
    #[error("{0} must not consist of a single repeated character")]
    RepeatedCharacter(DocumentType),

    /// A check digit does not match the computed value.
    #[error("{document} check digit at position {position} should be {expected}, found {found}")]
    CheckDigit {
        document: DocumentType,
        position: usize,
        expected: u8,
        found: u8,
    },
}
