#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Must not panic, and all entry points must agree.
        let valid = cadastro::validate_tax_id(s);
        let detected = cadastro::detect_person_type_from_tax_id(s);
        assert_eq!(detected.is_valid, valid);
        assert_eq!(cadastro::TaxId::parse(s).is_ok(), valid);
        let _ = cadastro::format_cpf(s);
        let _ = cadastro::format_cnpj(s);
    }
});
