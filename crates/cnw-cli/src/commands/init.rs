// crates/cnw-cli/src/commands/init.rs
//
// `cnw init`: create a collection with its first batch.

use clap::Args;
use serde_json::json;

use cnw_core::identity::Address;
use cnw_mint::Collection;

use super::Context;
use crate::output::{format_json, OutputFormat};
use crate::store;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Owner address (0x-prefixed hex).
    #[arg(long)]
    pub owner: Address,
    /// Capacity of the first batch.
    #[arg(long)]
    pub capacity: u64,
    /// Metadata URI of the first batch.
    #[arg(long)]
    pub uri: String,
    /// Overwrite an existing state file.
    #[arg(long)]
    pub force: bool,
}

/// Run the init command.
pub fn run(ctx: &Context, args: &InitArgs) -> Result<(), Box<dyn std::error::Error>> {
    if ctx.state_path.exists() && !args.force {
        return Err(format!(
            "Collection state already exists at {}. Pass --force to overwrite.",
            ctx.state_path.display()
        )
        .into());
    }

    let collection = Collection::new(args.capacity, args.uri.clone(), args.owner)?;
    store::save(&ctx.state_path, &collection)?;
    tracing::info!("Collection initialized at {}", ctx.state_path.display());

    match ctx.format {
        OutputFormat::Json => println!(
            "{}",
            format_json(&json!({
                "owner": collection.owner(),
                "capacity": args.capacity,
                "metadata_uri": args.uri,
                "unit_price_wei": collection.unit_price().as_wei().to_string(),
                "state_path": ctx.state_path.display().to_string(),
            }))
        ),
        OutputFormat::Table => {
            println!("Collection initialized.");
            println!("  Owner:        {}", collection.owner());
            println!("  Capacity:     {}", args.capacity);
            println!("  Metadata URI: {}", args.uri);
            println!("  Unit price:   {}", collection.unit_price());
            println!("  State file:   {}", ctx.state_path.display());
        }
    }

    Ok(())
}
