// crates/cnw-cli/src/commands/extend.rs
//
// `cnw extend`: append a supply batch (owner only, once).

use clap::Args;

use cnw_core::identity::Address;

use super::Context;
use crate::output::{format_json, OutputFormat};
use crate::store;

#[derive(Debug, Args)]
pub struct ExtendArgs {
    /// Calling account; must be the collection owner.
    #[arg(long)]
    pub caller: Address,
    /// Capacity of the new batch.
    #[arg(long)]
    pub capacity: u64,
    /// Metadata URI of the new batch.
    #[arg(long)]
    pub uri: String,
}

/// Run the extend command.
pub fn run(ctx: &Context, args: &ExtendArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut collection = store::load(&ctx.state_path)?;
    let event = collection.extend_supply(&args.caller, args.capacity, args.uri.clone())?;
    store::save(&ctx.state_path, &collection)?;

    match ctx.format {
        OutputFormat::Json => println!("{}", format_json(&event)),
        OutputFormat::Table => {
            println!("Batch added: +{} at {}", event.capacity, event.metadata_uri);
            println!("  Remaining capacity: {}", collection.remaining_capacity());
            println!("  Further extensions: locked");
        }
    }

    Ok(())
}
