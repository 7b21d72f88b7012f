//! Lead capability contract and the built-in lead variants.
//!
//! A lead is the interchangeable half of the pairing: it performs the
//! actual management when handed a train. The built-in variants differ only
//! in identity; the record they produce follows one shared shape.
//!
//! # Key Items
//!
//! | Item | Purpose |
//! |------|---------|
//! | [`Lead`] | Capability contract for anything that manages trains |
//! | [`NorthLead`] / [`SouthLead`] | Built-in lead variants |
//! | [`ManageRecord`] | Outcome of one management call |
//!
//! # Example
//!
//! ```rust
//! use rs_crossover::{Lead, NorthLead, Train};
//!
//! let train = Train::south();
//! let record = NorthLead.try_manage(&train);
//! assert_eq!(record.to_string(), "North Lead manages South-category");
//! ```

use crate::config::{short_name, NameString};
use crate::traits::train::{Division, TrainInfo};

/// Lead capability - the interchangeable implementation side of the pairing.
///
/// Implementors manage whatever train they are handed, identified only
/// through the [`TrainInfo`] contract. The default [`try_manage`] builds a
/// [`ManageRecord`] from [`identity`] and the train's division; override it
/// for leads that do more than record the pairing.
///
/// The `Clone` requirement keeps concrete leads usable as plain values. For
/// runtime mixing behind one type, wrap a lead in
/// [`AnyLead`](crate::AnyLead).
///
/// # Example Implementation
///
/// ```rust
/// use rs_crossover::{Lead, Train};
///
/// #[derive(Clone)]
/// struct YardLead;
///
/// impl Lead for YardLead {
///     fn identity(&self) -> &str {
///         "Yard Lead"
///     }
/// }
///
/// let record = YardLead.try_manage(&Train::north());
/// assert_eq!(record.to_string(), "Yard Lead manages North-category");
/// ```
///
/// [`try_manage`]: Lead::try_manage
/// [`identity`]: Lead::identity
pub trait Lead: Clone {
    /// Identity shown in management records, e.g. `"North Lead"`.
    fn identity(&self) -> &str;

    /// Manage the given train.
    ///
    /// Produces a record pairing this lead's identity with the train's
    /// division. The train is inspected only through [`TrainInfo`], so any
    /// implementor of that contract can be managed.
    fn try_manage(&self, train: &dyn TrainInfo) -> ManageRecord {
        ManageRecord::new(self.identity(), train.division())
    }
}

/// Built-in lead for the northern dispatch desk.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NorthLead;

impl Lead for NorthLead {
    fn identity(&self) -> &str {
        "North Lead"
    }
}

/// Built-in lead for the southern dispatch desk.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SouthLead;

impl Lead for SouthLead {
    fn identity(&self) -> &str {
        "South Lead"
    }
}

/// Outcome of one management call.
///
/// Pairs the identity of the lead that ran with the division of the train it
/// was handed. The record is a plain value; rendering it (via `Display`) and
/// printing it is the caller's business, which keeps the core I/O-free.
///
/// # Example
///
/// ```rust
/// use rs_crossover::{Division, ManageRecord};
///
/// let record = ManageRecord::new("South Lead", Division::North);
/// assert_eq!(record.to_string(), "South Lead manages North-category");
/// assert_eq!(record.division, Division::North);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ManageRecord {
    /// Identity of the lead that produced this record.
    pub lead: NameString,
    /// Division of the managed train.
    pub division: Division,
}

impl ManageRecord {
    /// Build a record from a lead identity and a train division.
    ///
    /// Identities longer than [`MAX_NAME`](crate::config::MAX_NAME) bytes
    /// are truncated at a character boundary.
    pub fn new(identity: &str, division: Division) -> Self {
        Self {
            lead: short_name(identity),
            division,
        }
    }
}

impl core::fmt::Display for ManageRecord {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} manages {}", self.lead, self.division.category())
    }
}
