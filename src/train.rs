//! The train abstraction that delegates management to its assigned lead.
//!
//! This module provides [`Train`], the client-facing half of the pairing:
//! a fixed [`Division`] label plus an interchangeable [`AnyLead`] handle.
//!
//! # Overview
//!
//! A train:
//! - Carries its division label from construction onward
//! - May be built with a lead, or have one assigned or swapped later
//! - Delegates [`manage`](Train::manage) to whichever lead is assigned,
//!   passing itself so the lead can inspect its division
//!
//! Calling `manage()` before a lead is assigned is a checked error, not a
//! fault: it returns [`ManageError::Unconfigured`].
//!
//! # Example
//!
//! ```rust
//! use rs_crossover::{AnyLead, ManageError, NorthLead, SouthLead, Train};
//!
//! // Unassigned trains report the missing lead instead of crashing.
//! let mut train = Train::north();
//! assert_eq!(train.manage(), Err(ManageError::Unconfigured));
//!
//! // Assign a lead, then delegate.
//! train.set_lead(AnyLead::new(SouthLead));
//! let record = train.manage().unwrap();
//! assert_eq!(record.to_string(), "South Lead manages North-category");
//!
//! // Leads can be swapped at any time.
//! train.set_lead(AnyLead::new(NorthLead));
//! let record = train.manage().unwrap();
//! assert_eq!(record.to_string(), "North Lead manages North-category");
//! ```

use crate::lead_dyn::AnyLead;
use crate::traits::{Division, ManageRecord, TrainInfo};

/// A rostered train: a fixed division label plus an interchangeable lead.
///
/// The division is set at construction and never changes. The lead handle is
/// optional and may be (re)assigned at any time; [`manage`](Train::manage)
/// requires one to be present.
#[derive(Clone, Debug)]
pub struct Train {
    division: Division,
    lead: Option<AnyLead>,
}

impl Train {
    /// Create a train with no lead assigned.
    ///
    /// [`manage`](Train::manage) will return
    /// [`ManageError::Unconfigured`] until [`set_lead`](Train::set_lead)
    /// is called.
    pub fn new(division: Division) -> Self {
        Self {
            division,
            lead: None,
        }
    }

    /// Create a train with a lead assigned up front.
    ///
    /// Use this when the pairing is known at construction time; it makes
    /// the unconfigured state unrepresentable for this instance's lifetime.
    pub fn with_lead(division: Division, lead: AnyLead) -> Self {
        Self {
            division,
            lead: Some(lead),
        }
    }

    /// Create a southern-division train with no lead assigned.
    pub fn south() -> Self {
        Self::new(Division::South)
    }

    /// Create a northern-division train with no lead assigned.
    pub fn north() -> Self {
        Self::new(Division::North)
    }

    /// The division label this train carries.
    pub fn division(&self) -> Division {
        self.division
    }

    /// The currently assigned lead, if any.
    pub fn lead(&self) -> Option<&AnyLead> {
        self.lead.as_ref()
    }

    /// Assign or replace the lead managing this train.
    pub fn set_lead(&mut self, lead: AnyLead) {
        self.lead = Some(lead);
    }

    /// Delegate management to the assigned lead.
    ///
    /// Passes this train to the lead's `try_manage`, so the record pairs
    /// the lead's identity with this train's division. Equivalent to
    /// calling `lead.try_manage(&train)` directly with the assigned lead.
    ///
    /// # Errors
    ///
    /// Returns [`ManageError::Unconfigured`] if no lead has been assigned.
    pub fn manage(&self) -> Result<ManageRecord, ManageError> {
        let lead = self.lead.as_ref().ok_or(ManageError::Unconfigured)?;
        Ok(lead.try_manage(self))
    }
}

impl TrainInfo for Train {
    fn division(&self) -> Division {
        self.division
    }
}

/// Error from [`Train::manage`].
///
/// Exactly one kind of failure is meaningful here: asking a train to be
/// managed before any lead has been assigned.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ManageError {
    /// `manage()` was called before a lead was assigned.
    Unconfigured,
}

impl core::fmt::Display for ManageError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ManageError::Unconfigured => {
                f.write_str("no lead assigned to this train; call set_lead before manage")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ManageError {}
