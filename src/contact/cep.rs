//! CEP (Código de Endereçamento Postal).

use super::error::ContactError;

/// Number of digits in a CEP.
pub const CEP_LEN: usize = 8;

/// Keep only ASCII digits.
pub fn clean_cep(input: &str) -> String {
    input.chars().filter(|c| c.is_ascii_digit()).collect()
}

pub(crate) fn check_cep(cleaned: &str) -> Result<(), ContactError> {
    match cleaned.len() {
        0 => Err(ContactError::Empty("CEP")),
        CEP_LEN if cleaned.bytes().all(|b| b == b'0') => Err(ContactError::ReservedCep),
        CEP_LEN => Ok(()),
        found => Err(ContactError::InvalidLength {
            field: "CEP",
            found,
        }),
    }
}

/// Validate a CEP: 8 digits once separators are removed, not all zero.
pub fn validate_cep(input: &str) -> bool {
    check_cep(&clean_cep(input)).is_ok()
}

/// Render a CEP as `DDDDD-DDD`; invalid input is returned unchanged.
pub fn format_cep(input: &str) -> String {
    let d = clean_cep(input);
    if check_cep(&d).is_err() {
        return input.to_string();
    }
    format!("{}-{}", &d[..5], &d[5..])
}
