//! CPF and CNPJ validation, classification and formatting.
//!
//! Two normalization rules apply. CPF input keeps only its digits; CNPJ
//! input drops the `.`, `/` and `-` separators and is uppercased, so the
//! letters of an alphanumeric CNPJ survive cleaning.

mod clean;
mod cnpj;
mod cpf;
mod detect;
mod error;
mod types;

pub use clean::{clean_cnpj, clean_cpf};
pub use cnpj::{CNPJ_LEN, cnpj_check_digits, format_cnpj, validate_cnpj};
pub use cpf::{CPF_LEN, cpf_check_digits, format_cpf, validate_cpf};
pub use detect::{detect_person_type_from_tax_id, validate_tax_id};
pub use error::TaxIdError;
pub use types::*;
