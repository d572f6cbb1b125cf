use cadastro::contact::*;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== CEP ===\n");

    for cep in ["01310100", "70.040-010", "00000-000", "1234"] {
        println!(
            "  {cep:<12} => valid={:<5} display={}",
            validate_cep(cep),
            format_cep(cep)
        );
    }

    println!("\n=== Phone ===\n");

    for phone in [
        "11987654321",
        "+55 (21) 3456-7890",
        "11887654321", // mobile without leading 9
        "0800 123 4567",
    ] {
        match parse_phone(phone) {
            Ok(p) => println!("  {phone:<20} => {} {p}", p.kind()),
            Err(e) => println!("  {phone:<20} => INVALID: {e}"),
        }
    }
}
