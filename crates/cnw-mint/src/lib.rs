// crates/cnw-mint/src/lib.rs
//
// cnw-mint: batched supply ledger, mint gate, and owner guard for the
// CyberNorse Warriors collection.
//
// The collection starts with one batch (capacity + metadata URI) chosen by the
// owner. Anyone may mint sequential token indices against the remaining
// capacity by paying the unit price. The owner may extend the supply once with
// a second batch carrying its own metadata URI; the extension lock then stays
// held.

pub mod access;
pub mod batch;
pub mod collection;
pub mod gate;
pub mod ownership;
pub mod shared;
pub mod supply;
pub mod treasury;

// Re-export key types for ergonomic access from downstream crates.
pub use access::Ownable;
pub use batch::Batch;
pub use collection::Collection;
pub use gate::{MintGate, Minted, UNIT_PRICE};
pub use ownership::InMemoryOwnershipLedger;
pub use shared::SharedCollection;
pub use supply::{ExtensionState, SupplyLedger};
pub use treasury::Treasury;
