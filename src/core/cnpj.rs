//! CNPJ (Cadastro Nacional da Pessoa Jurídica) checksum and display format.
//!
//! Covers the legacy all-digit CNPJ and the alphanumeric layout, where the
//! first 12 characters may be `0-9` or `A-Z` and the last two check digits
//! stay numeric.

use super::clean::{clean_cnpj, first_cnpj_shape_violation, is_single_repeated};
use super::error::TaxIdError;
use super::types::DocumentType;

/// Number of characters in a CNPJ.
pub const CNPJ_LEN: usize = 14;

const FIRST_WEIGHTS: [u32; 12] = [5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];
const SECOND_WEIGHTS: [u32; 13] = [6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

/// Checksum value of one CNPJ character: `0-9` map to 0..=9, `A-Z` to 10..=35.
fn char_value(b: u8) -> u32 {
    if b.is_ascii_digit() {
        u32::from(b - b'0')
    } else {
        u32::from(b) - 55
    }
}

fn check_digit(chars: &[u8], weights: &[u32]) -> u8 {
    let sum: u32 = chars
        .iter()
        .zip(weights)
        .map(|(&b, &w)| char_value(b) * w)
        .sum();
    let remainder = sum % 11;
    if remainder < 2 { 0 } else { (11 - remainder) as u8 }
}

/// Compute both check digits for a 12-character CNPJ base.
///
/// The base must be exactly 12 characters of `0-9` or uppercase `A-Z`.
pub fn cnpj_check_digits(base: &str) -> Option<[u8; 2]> {
    let bytes = base.as_bytes();
    if bytes.len() != 12
        || !bytes
            .iter()
            .all(|b| b.is_ascii_digit() || b.is_ascii_uppercase())
    {
        return None;
    }
    let first = check_digit(bytes, &FIRST_WEIGHTS);
    let mut extended = bytes.to_vec();
    extended.push(b'0' + first);
    let second = check_digit(&extended, &SECOND_WEIGHTS);
    Some([first, second])
}

/// Full CNPJ check on an already-cleaned value.
pub(crate) fn check_cnpj(cleaned: &str) -> Result<(), TaxIdError> {
    if cleaned.is_empty() {
        return Err(TaxIdError::Empty);
    }
    let expected = DocumentType::Cnpj.cleaned_len();
    let found = cleaned.chars().count();
    if found != expected {
        return Err(TaxIdError::InvalidLength {
            document: DocumentType::Cnpj,
            expected,
            found,
        });
    }
    if let Some((position, c)) = first_cnpj_shape_violation(cleaned) {
        return Err(TaxIdError::InvalidCharacter {
            document: DocumentType::Cnpj,
            position,
            found: c,
        });
    }
    if is_single_repeated(cleaned) {
        return Err(TaxIdError::RepeatedCharacter(DocumentType::Cnpj));
    }

    // Shape check guarantees ASCII from here on.
    let bytes = cleaned.as_bytes();
    let checks: [(usize, &[u32]); 2] = [(12, &FIRST_WEIGHTS), (13, &SECOND_WEIGHTS)];
    for (position, weights) in checks {
        let expected = check_digit(&bytes[..position], weights);
        let found = bytes[position] - b'0';
        if found != expected {
            return Err(TaxIdError::CheckDigit {
                document: DocumentType::Cnpj,
                position,
                expected,
                found,
            });
        }
    }
    Ok(())
}

/// Validate a CNPJ after stripping `.`, `/`, `-` and uppercasing.
pub fn validate_cnpj(input: &str) -> bool {
    check_cnpj(&clean_cnpj(input)).is_ok()
}

/// Render a CNPJ as `AA.AAA.AAA/AAAA-DD`.
///
/// Only the `.`, `/` and `-` separators are removed before grouping; the
/// remaining characters keep their case. Input that does not leave
/// exactly 14 characters is returned unchanged.
pub fn format_cnpj(cnpj: &str) -> String {
    let c: Vec<char> = cnpj
        .chars()
        .filter(|c| !matches!(c, '.' | '/' | '-'))
        .collect();
    if c.len() != CNPJ_LEN {
        return cnpj.to_string();
    }
    let group = |range: std::ops::Range<usize>| c[range].iter().collect::<String>();
    format!(
        "{}.{}.{}/{}-{}",
        group(0..2),
        group(2..5),
        group(5..8),
        group(8..12),
        group(12..14)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_fixture() {
        assert!(validate_cnpj("11.222.333/0001-81"));
        assert!(validate_cnpj("11222333000181"));
        assert!(validate_cnpj("00.623.904/0001-73"));
    }

    #[test]
    fn flipped_last_digit() {
        assert!(!validate_cnpj("11.222.333/0001-82"));
        assert_eq!(
            check_cnpj("11222333000182"),
            Err(TaxIdError::CheckDigit {
                document: DocumentType::Cnpj,
                position: 13,
                expected: 1,
                found: 2,
            })
        );
    }

    #[test]
    fn wrong_first_check_digit() {
        assert_eq!(
            check_cnpj("11222333000191"),
            Err(TaxIdError::CheckDigit {
                document: DocumentType::Cnpj,
                position: 12,
                expected: 8,
                found: 9,
            })
        );
    }

    #[test]
    fn alphanumeric_fixture() {
        assert!(validate_cnpj("12ABC34501DE45"));
        assert!(validate_cnpj("12.ABC.345/01DE-45"));
        // lowercase is uppercased during cleaning
        assert!(validate_cnpj("12.abc.345/01de-45"));
        assert!(!validate_cnpj("12ABC34501DE46"));
    }

    #[test]
    fn letter_values_continue_after_nine() {
        assert_eq!(char_value(b'0'), 0);
        assert_eq!(char_value(b'9'), 9);
        assert_eq!(char_value(b'A'), 10);
        assert_eq!(char_value(b'Z'), 35);
    }

    #[test]
    fn small_remainder_maps_to_zero() {
        assert_eq!(cnpj_check_digits("000000000191"), Some([0, 0]));
        assert!(validate_cnpj("00000000019100"));
    }

    #[test]
    fn check_digits_need_twelve_chars() {
        assert_eq!(cnpj_check_digits("112223330001"), Some([8, 1]));
        assert_eq!(cnpj_check_digits("12ABC34501DE"), Some([4, 5]));
        assert_eq!(cnpj_check_digits("12abc34501de"), None);
        assert_eq!(cnpj_check_digits("11222333000"), None);
    }

    #[test]
    fn repeated_characters_rejected() {
        assert!(!validate_cnpj("00000000000000"));
        assert_eq!(
            check_cnpj("11111111111111"),
            Err(TaxIdError::RepeatedCharacter(DocumentType::Cnpj))
        );
    }

    #[test]
    fn letter_in_check_digits_rejected() {
        assert_eq!(
            check_cnpj("12ABC34501DE4A"),
            Err(TaxIdError::InvalidCharacter {
                document: DocumentType::Cnpj,
                position: 13,
                found: 'A',
            })
        );
    }

    #[test]
    fn spaces_are_not_stripped() {
        assert!(!validate_cnpj("11 222 333 0001 81"));
    }

    #[test]
    fn format() {
        assert_eq!(format_cnpj("11222333000181"), "11.222.333/0001-81");
        assert_eq!(format_cnpj("12ABC34501DE45"), "12.ABC.345/01DE-45");
        assert_eq!(format_cnpj("11.222.333/0001-81"), "11.222.333/0001-81");
    }

    #[test]
    fn format_preserves_case() {
        assert_eq!(format_cnpj("12abc34501de45"), "12.abc.345/01de-45");
    }

    #[test]
    fn format_passthrough() {
        assert_eq!(format_cnpj("1122233300018"), "1122233300018");
        assert_eq!(format_cnpj(""), "");
    }
}
