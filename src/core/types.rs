use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::clean::clean_cnpj;
use super::cnpj::{CNPJ_LEN, check_cnpj, format_cnpj};
use super::cpf::{CPF_LEN, check_cpf, format_cpf};
use super::error::TaxIdError;

/// Legal nature of the taxpayer behind an identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PersonType {
    /// Pessoa física — an individual, identified by CPF.
    #[serde(rename = "PF")]
    Individual,
    /// Pessoa jurídica — a company, identified by CNPJ.
    #[serde(rename = "PJ")]
    Company,
}

impl PersonType {
    /// The two-letter code used by Brazilian registries ("PF" / "PJ").
    pub fn code(&self) -> &'static str {
        match self {
            Self::Individual => "PF",
            Self::Company => "PJ",
        }
    }
}

impl fmt::Display for PersonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Kind of registry document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DocumentType {
    /// Cadastro de Pessoas Físicas, 11 digits.
    #[serde(rename = "CPF")]
    Cpf,
    /// Cadastro Nacional da Pessoa Jurídica, 14 characters.
    #[serde(rename = "CNPJ")]
    Cnpj,
}

impl DocumentType {
    /// The registry's own abbreviation ("CPF" / "CNPJ").
    pub fn code(&self) -> &'static str {
        match self {
            Self::Cpf => "CPF",
            Self::Cnpj => "CNPJ",
        }
    }

    /// Cleaned length of this document.
    pub fn cleaned_len(&self) -> usize {
        match self {
            Self::Cpf => CPF_LEN,
            Self::Cnpj => CNPJ_LEN,
        }
    }

    /// The person type this document identifies.
    pub fn person_type(&self) -> PersonType {
        match self {
            Self::Cpf => PersonType::Individual,
            Self::Cnpj => PersonType::Company,
        }
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Outcome of classifying free-form tax ID input.
///
/// Serializes as `{"personType", "documentType", "isValid", "formattedValue"}`
/// with `null` for an unclassified input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub person_type: Option<PersonType>,
    pub document_type: Option<DocumentType>,
    /// Checksum and layout both passed.
    pub is_valid: bool,
    /// Display form for a classified input; the raw input otherwise.
    pub formatted_value: String,
}

impl ValidationResult {
    /// Result for input that is neither a CPF nor a CNPJ.
    /// The input is passed back as-is for display.
    pub fn unclassified(input: &str) -> Self {
        Self {
            person_type: None,
            document_type: None,
            is_valid: false,
            formatted_value: input.to_string(),
        }
    }

    pub(crate) fn classified(document: DocumentType, is_valid: bool, formatted: String) -> Self {
        Self {
            person_type: Some(document.person_type()),
            document_type: Some(document),
            is_valid,
            formatted_value: formatted,
        }
    }
}

impl From<&TaxId> for ValidationResult {
    fn from(id: &TaxId) -> Self {
        Self::classified(id.document_type(), true, id.formatted())
    }
}

/// A checksum-valid CPF or CNPJ, stored in cleaned form.
///
/// Built only through [`TaxId::parse`] (or `str::parse`, `TryFrom<String>`,
/// deserialization), so holding a `TaxId` means the value passed every
/// check. Serializes as the cleaned string; `Display` renders the
/// formatted form.
///
/// The fields are private; there is no way to assemble an unchecked value:
///
/// ```compile_fail
/// use cadastro::{DocumentType, TaxId};
///
/// let forged = TaxId {
///     document: DocumentType::Cpf,
///     value: "not-a-cpf".to_string(),
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TaxId {
    document: DocumentType,
    value: String,
}

impl TaxId {
    /// Parse a CPF or CNPJ, with or without formatting.
    ///
    /// Input is cleaned with the CNPJ rule and dispatched by length:
    /// 11 characters are checked as CPF only, 14 as CNPJ.
    pub fn parse(input: &str) -> Result<Self, TaxIdError> {
        let cleaned = clean_cnpj(input);
        let parsed = match cleaned.chars().count() {
            0 => Err(TaxIdError::Empty),
            CPF_LEN => check_cpf(&cleaned).map(|()| Self::new(DocumentType::Cpf, cleaned)),
            CNPJ_LEN => check_cnpj(&cleaned).map(|()| Self::new(DocumentType::Cnpj, cleaned)),
            n => Err(TaxIdError::UnknownLength(n)),
        };
        if let Err(err) = &parsed {
            tracing::debug!(%err, "rejected tax ID");
        }
        parsed
    }

    fn new(document: DocumentType, value: String) -> Self {
        Self { document, value }
    }

    pub fn document_type(&self) -> DocumentType {
        self.document
    }

    pub fn person_type(&self) -> PersonType {
        self.document_type().person_type()
    }

    /// The cleaned value (digits, plus uppercase letters for an alphanumeric CNPJ).
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Display form: `DDD.DDD.DDD-DD` or `AA.AAA.AAA/AAAA-DD`.
    pub fn formatted(&self) -> String {
        match self.document {
            DocumentType::Cpf => format_cpf(&self.value),
            DocumentType::Cnpj => format_cnpj(&self.value),
        }
    }
}

impl fmt::Display for TaxId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.formatted())
    }
}

impl FromStr for TaxId {
    type Err = TaxIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for TaxId {
    type Error = TaxIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<TaxId> for String {
    fn from(id: TaxId) -> Self {
        id.value
    }
}

impl AsRef<str> for TaxId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
