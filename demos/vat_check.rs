//! Check VAT-IDs given on the command line.
//!
//! ```sh
//! RUST_LOG=vatid=debug cargo run --example vat_check -- DE273616207 "atu 1234-5678"
//! ```

use tracing_subscriber::EnvFilter;
use vatid::vat::{ViesConfig, validate_vat_format};
use vatid::{VatIdError, VatIdValidator};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = match ViesConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(2);
        }
    };

    // Without a working client nothing can be checked.
    let mut validator = match VatIdValidator::connect_with_config(config) {
        Ok(v) => v,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    let ids: Vec<String> = std::env::args().skip(1).collect();
    if ids.is_empty() {
        eprintln!("usage: vat_check <VAT-ID>...");
        std::process::exit(2);
    }

    for raw in &ids {
        if let Err(e) = validator.set_id(raw) {
            println!("  {raw:?} => {e}");
            continue;
        }
        let id = validator.id().unwrap_or_default().to_string();

        // Offline pre-check only informs; VIES has the final word.
        if let Err(e) = validate_vat_format(&id) {
            println!("  {id} => format warning: {}", e.reason);
        }

        match validator.is_valid() {
            Ok(valid) => {
                let record = validator.extended();
                println!("  {id} => valid={valid}");
                println!("    name:    {}", record.company_name().unwrap_or("—"));
                println!("    address: {}", record.company_address().unwrap_or("—"));
            }
            Err(VatIdError::RemoteCheckFailed(e)) => println!("  {id} => lookup failed: {e}"),
            Err(e) => println!("  {id} => {e}"),
        }
    }
}
