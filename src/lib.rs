//! # rs-crossover
//!
//! A small train dispatch library demonstrating runtime composition: any
//! train can be handed to any lead, and the pairing is decided per call
//! rather than baked in at compile time.
//!
//! ## Features
//!
//! - **Two independent capability families**: trains (carry a division
//!   label, delegate management) and leads (perform the management)
//! - **Runtime pairing**: a train holds a type-erased [`AnyLead`] handle
//!   that can be assigned or swapped at any time before use
//! - **Checked preconditions**: calling [`Train::manage`] before a lead is
//!   assigned reports [`ManageError::Unconfigured`] instead of faulting
//! - **Open to extension**: implement [`Lead`] or [`TrainInfo`] on your own
//!   types and they compose with the built-ins
//!
//! ## Architecture
//!
//! The crate keeps the two families decoupled through trait seams:
//!
//! - `traits` - The [`Lead`] and [`TrainInfo`] capability contracts plus the
//!   built-in lead variants
//! - `lead_dyn` - Type-erased lead handles for runtime polymorphism
//! - `train` - The train abstraction that delegates to its assigned lead
//! - `roster` - Cross-combination harness pairing every lead with every train
//! - `config` - Plain-data roster configuration for the demo driver
//!
//! Management calls produce a [`ManageRecord`] value rather than printing,
//! so the core stays I/O-free; the demo binary owns stdout.
//!
//! ## Example
//!
//! ```rust
//! use rs_crossover::{AnyLead, Lead, NorthLead, SouthLead, Train};
//!
//! // Any train can be paired with any lead.
//! let mut train = Train::south();
//! train.set_lead(AnyLead::new(NorthLead));
//!
//! let record = train.manage().unwrap();
//! assert_eq!(record.to_string(), "North Lead manages South-category");
//!
//! // Or hand the train to a lead directly, bypassing delegation.
//! let record = SouthLead.try_manage(&train);
//! assert_eq!(record.to_string(), "South Lead manages South-category");
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

extern crate alloc;

/// Plain-data roster configuration for the demo driver.
pub mod config;
/// Type-erased lead handles for runtime polymorphism.
pub mod lead_dyn;
/// Cross-combination harness pairing every lead with every train.
pub mod roster;
/// The train abstraction that delegates management to its assigned lead.
pub mod train;
/// Core traits for the train and lead capability families.
pub mod traits;

// Re-exports for convenience
pub use config::{LeadKind, NameString, RosterConfig};
pub use lead_dyn::{AnyLead, LeadDyn};
pub use roster::Roster;
pub use train::{ManageError, Train};
pub use traits::{Division, Lead, ManageRecord, NorthLead, SouthLead, TrainInfo};
