// crates/cnw-cli/src/commands/ownership.rs
//
// `cnw transfer-ownership`: hand the owner privilege to another account.

use clap::Args;

use cnw_core::identity::Address;

use super::Context;
use crate::store;

#[derive(Debug, Args)]
pub struct TransferOwnershipArgs {
    /// Calling account; must be the current owner.
    #[arg(long)]
    pub caller: Address,
    /// Account that becomes the owner.
    #[arg(long)]
    pub new_owner: Address,
}

/// Run the transfer-ownership command.
pub fn run(ctx: &Context, args: &TransferOwnershipArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut collection = store::load(&ctx.state_path)?;
    collection.transfer_ownership(&args.caller, args.new_owner)?;
    store::save(&ctx.state_path, &collection)?;

    println!("Ownership transferred to {}", collection.owner());
    Ok(())
}
