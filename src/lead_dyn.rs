//! Type-erased leads for runtime polymorphism.
//!
//! This module provides [`AnyLead`], a type-erased handle that lets a train
//! hold, swap, and share leads of different concrete types.
//!
//! # When to Use
//!
//! Use type erasure when you need to:
//! - Assign a lead to a train at runtime (the point of the whole exercise)
//! - Keep leads of different types together in a roster
//! - Share one lead instance across many trains
//!
//! # How It Works
//!
//! The [`LeadDyn`] trait is an object-safe version of [`Lead`]. [`AnyLead`]
//! wraps any lead implementing `Lead + Send + Sync + 'static` in an `Arc`
//! for cheap cloning, so one lead can serve any number of trains.
//!
//! ```rust
//! use rs_crossover::{AnyLead, NorthLead, SouthLead};
//!
//! // Different lead types, same handle type
//! let leads: Vec<AnyLead> = vec![
//!     AnyLead::new(NorthLead),
//!     AnyLead::new(SouthLead),
//! ];
//!
//! for lead in &leads {
//!     println!("desk: {}", lead.identity());
//! }
//! ```
//!
//! [`Lead`]: crate::traits::Lead

extern crate alloc;

use crate::traits::{Lead, ManageRecord, TrainInfo};
use alloc::sync::Arc;

/// Object-safe version of [`Lead`].
///
/// This trait removes the `Clone` requirement to enable dynamic dispatch.
/// It's automatically implemented for all types that implement
/// `Lead + Send + Sync + 'static`.
///
/// You typically don't interact with this trait directly; use [`AnyLead`]
/// instead.
///
/// [`Lead`]: crate::traits::Lead
pub trait LeadDyn: Send + Sync {
    /// Identity shown in management records.
    fn identity(&self) -> &str;
    /// Manage the given train, producing a record of the pairing.
    fn try_manage(&self, train: &dyn TrainInfo) -> ManageRecord;
}

/// Blanket implementation for any Lead
impl<L: Lead + Send + Sync + 'static> LeadDyn for L {
    fn identity(&self) -> &str {
        Lead::identity(self)
    }

    fn try_manage(&self, train: &dyn TrainInfo) -> ManageRecord {
        Lead::try_manage(self, train)
    }
}

/// Type-erased handle to any lead.
///
/// Wraps any [`Lead`] implementation in an `Arc` for cheap cloning and
/// dynamic dispatch. This is what a [`Train`](crate::Train) holds, so the
/// train type never depends on a concrete lead.
///
/// # Example
///
/// ```rust
/// use rs_crossover::{AnyLead, NorthLead, Train};
///
/// let lead = AnyLead::new(NorthLead);
/// assert_eq!(lead.identity(), "North Lead");
///
/// // One lead instance can serve many trains.
/// let record = lead.try_manage(&Train::south());
/// assert_eq!(record.to_string(), "North Lead manages South-category");
/// let record = lead.try_manage(&Train::north());
/// assert_eq!(record.to_string(), "North Lead manages North-category");
/// ```
///
/// [`Lead`]: crate::traits::Lead
#[derive(Clone)]
pub struct AnyLead {
    inner: Arc<dyn LeadDyn>,
}

impl core::fmt::Debug for AnyLead {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("AnyLead")
            .field("identity", &self.identity())
            .finish()
    }
}

impl AnyLead {
    /// Wrap a concrete lead in a type-erased handle
    pub fn new<L: Lead + Send + Sync + 'static>(lead: L) -> Self {
        Self {
            inner: Arc::new(lead),
        }
    }

    /// Returns the wrapped lead's identity.
    pub fn identity(&self) -> &str {
        self.inner.identity()
    }

    /// Manages the given train using the wrapped lead.
    pub fn try_manage(&self, train: &dyn TrainInfo) -> ManageRecord {
        self.inner.try_manage(train)
    }
}
