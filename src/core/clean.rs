//! Input normalization shared by the CPF and CNPJ checks.

/// Keep only ASCII digits.
pub fn clean_cpf(input: &str) -> String {
    input.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Drop the `.`, `/` and `-` separators and uppercase what remains.
///
/// Any other character (spaces included) is kept, so input such as
/// `"11 222 333"` does not clean into a valid shape.
pub fn clean_cnpj(input: &str) -> String {
    input
        .chars()
        .filter(|c| !matches!(c, '.' | '/' | '-'))
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// Position and value of the first character that breaks the
/// `12 x [0-9A-Z]` + `2 x [0-9]` CNPJ layout. Length is not checked.
pub(crate) fn first_cnpj_shape_violation(cleaned: &str) -> Option<(usize, char)> {
    cleaned.chars().enumerate().find(|&(i, c)| {
        if i < 12 {
            !(c.is_ascii_digit() || c.is_ascii_uppercase())
        } else {
            !c.is_ascii_digit()
        }
    })
}

/// Whether `cleaned` has the full 14-character CNPJ layout.
pub(crate) fn is_cnpj_shape(cleaned: &str) -> bool {
    cleaned.len() == 14 && first_cnpj_shape_violation(cleaned).is_none()
}

/// Whether every character equals the first one.
pub(crate) fn is_single_repeated(cleaned: &str) -> bool {
    let mut chars = cleaned.chars();
    match chars.next() {
        Some(first) => chars.all(|c| c == first),
        None => false,
    }
}
