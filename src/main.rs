//! georadius CLI entry point
//!
//! Radius-bounded geospatial lookup - bulk loader + query server

use georadius::cli;

#[tokio::main]
async fn main() {
    if let Err(e) = cli::run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
