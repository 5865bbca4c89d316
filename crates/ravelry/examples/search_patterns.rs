//! Search patterns and print the first page as a table.
//!
//! Credentials come from RAVELRY_USERNAME and RAVELRY_PASSWORD; set RUST_LOG
//! to see the request log:
//!
//! ```sh
//! RUST_LOG=debug cargo run --example search_patterns -- "lace shawl"
//! ```

use ravelry::{display, search_patterns, Credentials, PatternSearchParams};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let username = std::env::var("RAVELRY_USERNAME")?;
    let password = std::env::var("RAVELRY_PASSWORD")?;
    let query = std::env::args().nth(1).unwrap_or_default();

    let params = PatternSearchParams {
        query,
        page: 1,
        page_size: 10,
    };

    let creds = Credentials::new(&username, &password);
    let table = search_patterns(&creds, &params)?;
    println!("{}", display::render(&table));

    Ok(())
}
