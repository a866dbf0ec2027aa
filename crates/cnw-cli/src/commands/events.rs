// crates/cnw-cli/src/commands/events.rs
//
// `cnw events`: the collection's event log, oldest first.

use super::Context;
use crate::output::{event_rows, format_json, format_table, OutputFormat};
use crate::store;

/// Run the events command.
pub fn run(ctx: &Context) -> Result<(), Box<dyn std::error::Error>> {
    let collection = store::load(&ctx.state_path)?;
    let events = collection.events();

    match ctx.format {
        OutputFormat::Json => println!("{}", format_json(&events)),
        OutputFormat::Table if events.is_empty() => println!("No events."),
        OutputFormat::Table => println!("{}", format_table(&event_rows(events))),
    }

    Ok(())
}
