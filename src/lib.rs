//! # cadastro
//!
//! Validation, classification and formatting for Brazilian registry
//! identifiers: CPF, CNPJ (legacy numeric and the alphanumeric format),
//! CEP and phone numbers.
//!
//! Every function is pure. The boolean and formatting helpers never fail:
//! malformed input yields `false` or comes back unchanged. The typed
//! surface ([`TaxId::parse`], [`contact::parse_phone`]) reports why a value
//! was rejected.
//!
//! ## Quick Start
//!
//! ```rust
//! use cadastro::core::*;
//!
//! assert!(validate_cpf("111.444.777-35"));
//! assert!(validate_cnpj("11.222.333/0001-81"));
//!
//! let result = detect_person_type_from_tax_id("11144477735");
//! assert_eq!(result.person_type, Some(PersonType::Individual));
//! assert_eq!(result.formatted_value, "111.444.777-35");
//! assert!(result.is_valid);
//!
//! let id: TaxId = "11222333000181".parse().unwrap();
//! assert_eq!(id.to_string(), "11.222.333/0001-81");
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | CPF/CNPJ validation, detection, formatting, [`TaxId`] |
//! | `contact` | CEP and phone validation and formatting |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "contact")]
pub mod contact;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
