//! Materialize Binary
//!
//! Swaps a foreign table for a local copy in one transaction.
//!
//! Actions: create (default), refresh, revert

use clap::Parser;
use materialize::*;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = cli::Args::parse();
    log(args.level())?;
    args.run().await?;
    Ok(())
}
