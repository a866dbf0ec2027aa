// crates/cnw-core/src/lib.rs
//
// cnw-core: Core types, errors, events, and collaborator traits for the
// CyberNorse Warriors collection.
//
// This is the leaf crate that the rest of the workspace depends on. It defines
// account identities, payment amounts, the observable event types, the error
// taxonomy, and the trait seams for the ownership ledger and payment custody.

pub mod amount;
pub mod error;
pub mod events;
pub mod identity;
pub mod traits;

// Re-export key types for ergonomic access from downstream crates.
// Usage: `use cnw_core::Address;`

pub use amount::{Wei, WEI_PER_ETHER};
pub use error::CollectionError;
pub use events::{BatchAdded, CollectionEvent, OwnershipTransferred, Transfer};
pub use identity::Address;
pub use traits::{OwnershipLedger, PaymentCustody};
