//! Trait definitions for the train and lead capability families.
//!
//! This module defines the two contracts that keep rs-crossover's families
//! independent of each other:
//!
//! - `train`: the [`TrainInfo`] capability a lead needs from any train it
//!   manages, plus the [`Division`] label vocabulary
//! - `lead`: the [`Lead`] capability performing the actual management, with
//!   the built-in [`NorthLead`] and [`SouthLead`] variants
//!
//! Neither side names a concrete type from the other; pairing happens at
//! runtime through the type-erased handles in [`crate::lead_dyn`].

pub mod lead;
pub mod train;

pub use lead::*;
pub use train::*;
