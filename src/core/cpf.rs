//! CPF (Cadastro de Pessoas Físicas) checksum and display format.

use super::clean::{clean_cpf, is_single_repeated};
use super::error::TaxIdError;
use super::types::DocumentType;

/// Number of digits in a CPF.
pub const CPF_LEN: usize = 11;

/// Check digit over `digits`, weighting from `len + 1` down to 2.
fn check_digit(digits: &[u8]) -> u8 {
    let top = digits.len() as u32 + 1;
    let sum: u32 = digits
        .iter()
        .enumerate()
        .map(|(i, &d)| u32::from(d) * (top - i as u32))
        .sum();
    let remainder = 11 - sum % 11;
    if remainder >= 10 { 0 } else { remainder as u8 }
}

/// Compute both check digits for a 9-digit CPF base.
///
/// Returns `None` unless `base` is exactly 9 ASCII digits.
pub fn cpf_check_digits(base: &str) -> Option<[u8; 2]> {
    if base.len() != 9 || !base.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let mut digits: Vec<u8> = base.bytes().map(|b| b - b'0').collect();
    let first = check_digit(&digits);
    digits.push(first);
    let second = check_digit(&digits);
    Some([first, second])
}

/// Full CPF check on an already-cleaned value.
pub(crate) fn check_cpf(cleaned: &str) -> Result<(), TaxIdError> {
    if cleaned.is_empty() {
        return Err(TaxIdError::Empty);
    }
    let expected = DocumentType::Cpf.cleaned_len();
    let found = cleaned.chars().count();
    if found != expected {
        return Err(TaxIdError::InvalidLength {
            document: DocumentType::Cpf,
            expected,
            found,
        });
    }
    if let Some((position, c)) = cleaned.chars().enumerate().find(|(_, c)| !c.is_ascii_digit()) {
        return Err(TaxIdError::InvalidCharacter {
            document: DocumentType::Cpf,
            position,
            found: c,
        });
    }
    if is_single_repeated(cleaned) {
        return Err(TaxIdError::RepeatedCharacter(DocumentType::Cpf));
    }

    let digits: Vec<u8> = cleaned.bytes().map(|b| b - b'0').collect();
    for position in [9, 10] {
        let expected = check_digit(&digits[..position]);
        if digits[position] != expected {
            return Err(TaxIdError::CheckDigit {
                document: DocumentType::Cpf,
                position,
                expected,
                found: digits[position],
            });
        }
    }
    Ok(())
}

/// Validate a CPF, ignoring any non-digit characters in `input`.
pub fn validate_cpf(input: &str) -> bool {
    check_cpf(&clean_cpf(input)).is_ok()
}

/// Render a CPF as `DDD.DDD.DDD-DD`.
///
/// Input that does not hold exactly 11 digits is returned unchanged.
pub fn format_cpf(cpf: &str) -> String {
    let d = clean_cpf(cpf);
    if d.len() != CPF_LEN {
        return cpf.to_string();
    }
    format!("{}.{}.{}-{}", &d[..3], &d[3..6], &d[6..9], &d[9..])
}
