//! Cross-combination harness pairing every lead with every train.
//!
//! The point of keeping trains and leads decoupled is that any pairing
//! works. [`Roster`] makes that demonstrable: it collects both sides and
//! runs the full cross-product, which is what the demo driver prints and
//! what the integration tests check.

extern crate alloc;

use alloc::vec::Vec;

use crate::config::RosterConfig;
use crate::lead_dyn::AnyLead;
use crate::train::{ManageError, Train};
use crate::traits::ManageRecord;

/// A collection of trains and leads that can be paired in any combination.
///
/// # Example
///
/// ```rust
/// use rs_crossover::{AnyLead, NorthLead, Roster, SouthLead, Train};
///
/// let roster = Roster::new()
///     .with_train(Train::north())
///     .with_train(Train::south())
///     .with_lead(AnyLead::new(NorthLead))
///     .with_lead(AnyLead::new(SouthLead));
///
/// // Every lead manages every train.
/// let records = roster.cross_manage();
/// assert_eq!(records.len(), 4);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Roster {
    trains: Vec<Train>,
    leads: Vec<AnyLead>,
}

impl Roster {
    /// Create an empty roster
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a roster from a plain-data config.
    ///
    /// Trains come up unassigned; [`cross_manage`](Roster::cross_manage)
    /// pairs them with leads directly and does not need assignments.
    pub fn from_config(config: &RosterConfig) -> Self {
        let mut roster = Self::new();
        for division in &config.divisions {
            roster.trains.push(Train::new(*division));
        }
        for kind in &config.leads {
            roster.leads.push(kind.build());
        }
        roster
    }

    /// Add a train to the roster
    pub fn with_train(mut self, train: Train) -> Self {
        self.trains.push(train);
        self
    }

    /// Add a lead to the roster
    pub fn with_lead(mut self, lead: AnyLead) -> Self {
        self.leads.push(lead);
        self
    }

    /// The rostered trains, in insertion order.
    pub fn trains(&self) -> &[Train] {
        &self.trains
    }

    /// The rostered leads, in insertion order.
    pub fn leads(&self) -> &[AnyLead] {
        &self.leads
    }

    /// Run every lead over every train, bypassing delegation.
    ///
    /// Invokes each lead's `try_manage` directly with each train, lead-major
    /// in insertion order: all trains under the first lead, then all trains
    /// under the second, and so on. Records are returned in invocation
    /// order, one per pairing (`leads x trains` in total).
    pub fn cross_manage(&self) -> Vec<ManageRecord> {
        let mut records = Vec::with_capacity(self.leads.len() * self.trains.len());
        for lead in &self.leads {
            for train in &self.trains {
                records.push(lead.try_manage(train));
            }
        }
        records
    }

    /// Run every train's own `manage()`, exercising the delegation path.
    ///
    /// # Errors
    ///
    /// Returns [`ManageError::Unconfigured`] if any rostered train has no
    /// lead assigned; records produced before the failure are discarded.
    pub fn manage_all(&self) -> Result<Vec<ManageRecord>, ManageError> {
        self.trains.iter().map(Train::manage).collect()
    }
}
