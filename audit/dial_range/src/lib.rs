//! Number ranges and the used/unused inventory.
//!
//! This crate owns the range side of a dial-plan audit: parsing and
//! validating declared ranges ([`NumberRange`], [`RangeEntry`]) and
//! enumerating one into a [`RangeInventory`] that tracks which numbers
//! the patterns claimed. The pattern side lives in `dial_pattern`; the
//! two meet in `dial_recon`.

mod config;
mod inventory;
mod range;

pub use config::{DeclaredRange, RangeEntry};
pub use inventory::{InventoryEntry, RangeInventory};
pub use range::{InvalidRange, NumberRange};
