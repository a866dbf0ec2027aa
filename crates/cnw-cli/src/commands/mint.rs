// crates/cnw-cli/src/commands/mint.rs
//
// `cnw mint`: mint the next token, paying the unit price by default.

use clap::Args;
use serde_json::json;

use cnw_core::amount::Wei;
use cnw_core::identity::Address;

use super::Context;
use crate::output::{format_json, OutputFormat};
use crate::store;

#[derive(Debug, Args)]
pub struct MintArgs {
    /// Paying account.
    #[arg(long)]
    pub caller: Address,
    /// Recipient of the token. Defaults to the caller.
    #[arg(long)]
    pub to: Option<Address>,
    /// Attached payment in ETH.
    #[arg(long, conflicts_with = "payment_wei")]
    pub payment: Option<f64>,
    /// Attached payment in wei.
    #[arg(long)]
    pub payment_wei: Option<u128>,
}

impl MintArgs {
    /// Attached payment, falling back to `unit_price` when none was given.
    pub fn payment(&self, unit_price: Wei) -> Wei {
        match (self.payment, self.payment_wei) {
            (_, Some(wei)) => Wei::from_wei(wei),
            (Some(eth), None) => Wei::from_ether(eth),
            (None, None) => unit_price,
        }
    }
}

/// Run the mint command.
pub fn run(ctx: &Context, args: &MintArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut collection = store::load(&ctx.state_path)?;
    let payment = args.payment(collection.unit_price());
    let recipient = args.to.unwrap_or(args.caller);

    let minted = collection.mint_to(args.caller, recipient, payment)?;
    store::save(&ctx.state_path, &collection)?;

    match ctx.format {
        OutputFormat::Json => println!(
            "{}",
            format_json(&json!({
                "token_id": minted.token_id,
                "owner": recipient,
                "metadata_uri": minted.metadata_uri,
                "paid_wei": payment.as_wei().to_string(),
                "remaining": collection.remaining_capacity(),
            }))
        ),
        OutputFormat::Table => {
            println!("Minted token #{}", minted.token_id);
            println!("  Owner:        {}", recipient);
            println!("  Metadata URI: {}", minted.metadata_uri);
            println!("  Paid:         {}", payment);
            println!("  Remaining:    {}", collection.remaining_capacity());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use cnw_mint::UNIT_PRICE;

    fn args(payment: Option<f64>, payment_wei: Option<u128>) -> MintArgs {
        MintArgs {
            caller: Address::repeat_byte(2),
            to: None,
            payment,
            payment_wei,
        }
    }

    #[test]
    fn test_payment_defaults_to_unit_price() {
        assert_eq!(args(None, None).payment(UNIT_PRICE), UNIT_PRICE);
    }

    #[test]
    fn test_payment_in_ether() {
        assert_eq!(args(Some(0.003), None).payment(UNIT_PRICE), UNIT_PRICE);
        assert_eq!(args(Some(0.0), None).payment(UNIT_PRICE), Wei::zero());
    }

    #[test]
    fn test_payment_in_wei() {
        assert_eq!(args(None, Some(42)).payment(UNIT_PRICE), Wei::from_wei(42));
    }
}
