// crates/cnw-cli/src/commands/status.rs
//
// `cnw status`: supply, extension lock, proceeds, and batch layout.

use clap::Args;
use serde_json::json;

use cnw_core::identity::Address;

use super::Context;
use crate::output::{batch_rows, format_json, format_table, OutputFormat};
use crate::store;

#[derive(Debug, Args)]
pub struct StatusArgs {
    /// Calling account. When given it must be the owner, and total supply is shown.
    #[arg(long)]
    pub caller: Option<Address>,
}

/// Run the status command.
pub fn run(ctx: &Context, args: &StatusArgs) -> Result<(), Box<dyn std::error::Error>> {
    let collection = store::load(&ctx.state_path)?;

    let total_supply = match &args.caller {
        Some(caller) => Some(collection.total_supply(caller)?),
        None => None,
    };
    let rows = batch_rows(collection.batches());

    match ctx.format {
        OutputFormat::Json => println!(
            "{}",
            format_json(&json!({
                "owner": collection.owner(),
                "minted": collection.minted_count(),
                "remaining": collection.remaining_capacity(),
                "total_supply": total_supply,
                "extension_available": collection.extension_available(),
                "unit_price_wei": collection.unit_price().as_wei().to_string(),
                "custody_balance_wei": collection.custody_balance().as_wei().to_string(),
                "batches": rows,
            }))
        ),
        OutputFormat::Table => {
            println!("Collection Status");
            println!("-----------------");
            println!("  Owner:               {}", collection.owner());
            println!("  Minted:              {}", collection.minted_count());
            println!("  Remaining:           {}", collection.remaining_capacity());
            if let Some(total) = total_supply {
                println!("  Total supply:        {}", total);
            }
            println!(
                "  Extension available: {}",
                if collection.extension_available() { "yes" } else { "no (locked)" }
            );
            println!("  Unit price:          {}", collection.unit_price());
            println!("  Proceeds:            {}", collection.custody_balance());
            println!();
            println!("{}", format_table(&rows));
        }
    }

    Ok(())
}
