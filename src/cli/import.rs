//! Import command handler
//!
//! Runs the ingestion pipeline against a dataset file and a throwaway
//! in-memory store, printing the resulting statistics. Useful for validating
//! a dataset before pointing the server at it.

use crate::error::Result;
use crate::ingest;
use crate::store::memory::MemoryGeoStore;
use clap::Args;
use std::path::PathBuf;

/// Import command arguments
#[derive(Args)]
pub struct ImportArgs {
    /// Dataset file to import (tab-separated, geonames postal-code layout)
    pub file: PathBuf,

    /// Abort on the first malformed line instead of skipping it
    #[arg(long)]
    pub strict: bool,
}

/// Run the import command
pub fn run(args: ImportArgs) -> Result<()> {
    let store = MemoryGeoStore::new();
    let stats = ingest::import_file(&args.file, &store, args.strict)?;

    println!("georadius v{}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Imported: {}", args.file.display());
    println!("  Lines read:     {}", stats.lines);
    println!("  Points stored:  {}", stats.imported);
    println!("  Lines skipped:  {}", stats.skipped);
    println!("  Batches:        {}", stats.batches);

    Ok(())
}
