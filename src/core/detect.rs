//! Length-based dispatch between CPF and CNPJ.

use super::clean::{clean_cnpj, is_cnpj_shape};
use super::cnpj::{CNPJ_LEN, format_cnpj, validate_cnpj};
use super::cpf::{CPF_LEN, format_cpf, validate_cpf};
use super::types::{DocumentType, ValidationResult};

/// Validate a CPF or CNPJ, choosing the rules by cleaned length.
///
/// 11 characters are checked only as CPF (letters make it invalid, they
/// never fall through to CNPJ), 14 as CNPJ, anything else is `false`.
pub fn validate_tax_id(input: &str) -> bool {
    let cleaned = clean_cnpj(input);
    match cleaned.chars().count() {
        CPF_LEN => validate_cpf(&cleaned),
        CNPJ_LEN => validate_cnpj(&cleaned),
        _ => false,
    }
}

/// Classify free-form input as CPF (PF) or CNPJ (PJ), validate and format it.
///
/// Input that is neither 11 digits nor a 14-character CNPJ layout after
/// cleaning comes back unclassified, with the original input untouched in
/// `formatted_value` so partial entries can be shown back as typed.
pub fn detect_person_type_from_tax_id(input: &str) -> ValidationResult {
    let cleaned = clean_cnpj(input);

    if cleaned.len() == CPF_LEN && cleaned.bytes().all(|b| b.is_ascii_digit()) {
        return ValidationResult::classified(
            DocumentType::Cpf,
            validate_cpf(&cleaned),
            format_cpf(&cleaned),
        );
    }
    if is_cnpj_shape(&cleaned) {
        return ValidationResult::classified(
            DocumentType::Cnpj,
            validate_cnpj(&cleaned),
            format_cnpj(&cleaned),
        );
    }

    tracing::trace!(len = cleaned.chars().count(), "input is neither CPF nor CNPJ");
    ValidationResult::unclassified(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PersonType;

    #[test]
    fn detects_valid_cpf() {
        let r = detect_person_type_from_tax_id("11144477735");
        assert_eq!(r.person_type, Some(PersonType::Individual));
        assert_eq!(r.document_type, Some(DocumentType::Cpf));
        assert!(r.is_valid);
        assert_eq!(r.formatted_value, "111.444.777-35");
    }

    #[test]
    fn detects_invalid_cpf_as_pf() {
        let r = detect_person_type_from_tax_id("111.444.777-36");
        assert_eq!(r.person_type, Some(PersonType::Individual));
        assert!(!r.is_valid);
        assert_eq!(r.formatted_value, "111.444.777-36");
    }

    #[test]
    fn detects_cnpj() {
        let r = detect_person_type_from_tax_id("11222333000181");
        assert_eq!(r.person_type, Some(PersonType::Company));
        assert_eq!(r.document_type, Some(DocumentType::Cnpj));
        assert!(r.is_valid);
        assert_eq!(r.formatted_value, "11.222.333/0001-81");
    }

    #[test]
    fn alphanumeric_cnpj_is_uppercased() {
        let r = detect_person_type_from_tax_id("12.abc.345/01de-45");
        assert!(r.is_valid);
        assert_eq!(r.formatted_value, "12.ABC.345/01DE-45");
    }

    #[test]
    fn partial_input_passes_through() {
        let r = detect_person_type_from_tax_id("111.444");
        assert_eq!(r, ValidationResult::unclassified("111.444"));
        assert_eq!(r.formatted_value, "111.444");
    }

    #[test]
    fn eleven_chars_with_letter_unclassified() {
        let r = detect_person_type_from_tax_id("1114447773A");
        assert_eq!(r.person_type, None);
        assert!(!r.is_valid);
    }

    #[test]
    fn dispatch() {
        assert!(validate_tax_id("111.444.777-35"));
        assert!(validate_tax_id("11.222.333/0001-81"));
        assert!(validate_tax_id("12ABC34501DE45"));
        assert!(!validate_tax_id("1114447773A"));
        assert!(!validate_tax_id("123456789012"));
        assert!(!validate_tax_id(""));
    }
}
