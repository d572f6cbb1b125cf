//! CEP (postal code) and Brazilian phone number validation.
//!
//! Both fields are digits-only after cleaning and follow the same contract
//! as the tax ID helpers: `validate_*` never fails, `format_*` returns
//! invalid input unchanged.
//!
//! # Example
//!
//! ```
//! use cadastro::contact::*;
//!
//! assert_eq!(format_cep("01310100"), "01310-100");
//! assert_eq!(format_phone("11987654321"), "(11) 98765-4321");
//!
//! let phone = parse_phone("+55 (21) 3456-7890").unwrap();
//! assert_eq!(phone.kind(), PhoneKind::Landline);
//! ```

mod cep;
mod error;
mod phone;

pub use cep::{CEP_LEN, clean_cep, format_cep, validate_cep};
pub use error::ContactError;
pub use phone::{Phone, PhoneKind, format_phone, parse_phone, validate_phone};
