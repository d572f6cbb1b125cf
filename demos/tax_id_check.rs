use cadastro::core::*;
use tracing_subscriber::EnvFilter;

fn main() {
    // RUST_LOG=cadastro=debug shows why each value was rejected
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Tax ID Detection ===\n");

    let inputs = [
        "111.444.777-35",     // valid CPF
        "11144477736",        // CPF, wrong check digit
        "11.222.333/0001-81", // valid CNPJ
        "12.abc.345/01de-45", // alphanumeric CNPJ
        "11111111111",        // repeated digits
        "111.444",            // partial input
    ];

    for input in &inputs {
        let r = detect_person_type_from_tax_id(input);
        println!(
            "  {input:<20} => person={:<3} document={:<5} valid={:<5} display={}",
            r.person_type.map_or("—", |p| p.code()),
            r.document_type.map_or("—", |d| d.code()),
            r.is_valid,
            r.formatted_value,
        );
    }

    println!("\n=== Typed Parsing ===\n");

    for input in &inputs {
        match TaxId::parse(input) {
            Ok(id) => println!("  {input} => {} {id}", id.document_type()),
            Err(e) => println!("  {input} => INVALID: {e}"),
        }
    }

    println!("\n=== Check Digit Completion ===\n");

    if let Some([a, b]) = cpf_check_digits("529982247") {
        println!("  CPF base 529982247 => {}", format_cpf(&format!("529982247{a}{b}")));
    }
    if let Some([a, b]) = cnpj_check_digits("1A2B3C4D5E6F") {
        println!("  CNPJ base 1A2B3C4D5E6F => {}", format_cnpj(&format!("1A2B3C4D5E6F{a}{b}")));
    }
}
