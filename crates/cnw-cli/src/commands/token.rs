// crates/cnw-cli/src/commands/token.rs
//
// `cnw token <id>`: owner and metadata URI of a minted token.

use clap::Args;
use serde_json::json;

use super::Context;
use crate::output::{format_json, OutputFormat};
use crate::store;

#[derive(Debug, Args)]
pub struct TokenArgs {
    /// Token index (starting at 1).
    pub id: u64,
}

/// Run the token command.
pub fn run(ctx: &Context, args: &TokenArgs) -> Result<(), Box<dyn std::error::Error>> {
    let collection = store::load(&ctx.state_path)?;
    let owner = collection.owner_of(args.id)?;
    let uri = collection.token_uri(args.id)?;
    let batch = collection.supply().batch_of(args.id)?;

    match ctx.format {
        OutputFormat::Json => println!(
            "{}",
            format_json(&json!({
                "token_id": args.id,
                "owner": owner,
                "metadata_uri": uri,
                "batch": batch,
            }))
        ),
        OutputFormat::Table => {
            println!("Token #{}", args.id);
            println!("  Owner:        {}", owner);
            println!("  Metadata URI: {}", uri);
            println!("  Batch:        {}", batch);
        }
    }

    Ok(())
}
