//! Roster configuration for the demo driver.
//!
//! Uses `heapless` strings and vectors for `no_std` compatibility while
//! remaining ergonomic to use on desktop with `std`.
//!
//! # Example
//!
//! ```rust
//! use rs_crossover::{Division, LeadKind, RosterConfig};
//!
//! // Use the defaults (the four-combination demo)
//! let config = RosterConfig::default();
//!
//! // Or customize
//! let config = RosterConfig::empty()
//!     .with_division(Division::South)
//!     .with_lead(LeadKind::North);
//! ```

use heapless::{String as HString, Vec as HVec};

use crate::lead_dyn::AnyLead;
use crate::traits::{Division, NorthLead, SouthLead};

/// Maximum length in bytes for lead identity strings
pub const MAX_NAME: usize = 64;

/// Maximum number of entries per roster side in a config
pub const MAX_ROSTER: usize = 8;

/// Type alias for lead identity strings
pub type NameString = HString<MAX_NAME>;

/// Create a NameString from a &str, truncating if too long
pub fn short_name(s: &str) -> NameString {
    let mut hs = NameString::new();
    // Take only what fits
    let take = s.len().min(MAX_NAME);
    // Find valid UTF-8 boundary
    let valid_end = s
        .char_indices()
        .take_while(|(i, _)| *i < take)
        .last()
        .map(|(i, c)| i + c.len_utf8())
        .unwrap_or(0);
    let _ = hs.push_str(&s[..valid_end]);
    hs
}

// ============================================================================
// Lead Kind
// ============================================================================

/// Which built-in lead to construct.
///
/// This is the enumerated, parseable form of the built-in leads, used by
/// [`RosterConfig`] to describe a roster in plain data before any lead
/// value exists.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum LeadKind {
    /// The northern dispatch desk ([`NorthLead`]).
    North,
    /// The southern dispatch desk ([`SouthLead`]).
    South,
}

impl LeadKind {
    /// Returns the kind as a lowercase string.
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            LeadKind::North => "north",
            LeadKind::South => "south",
        }
    }

    /// Parse a lead kind from text input.
    ///
    /// Accepts full names and single-letter abbreviations, trimmed and
    /// case-insensitive.
    ///
    /// # Examples
    ///
    /// ```
    /// use rs_crossover::LeadKind;
    ///
    /// assert_eq!(LeadKind::from_text("north"), Some(LeadKind::North));
    /// assert_eq!(LeadKind::from_text(" S "), Some(LeadKind::South));
    /// assert_eq!(LeadKind::from_text("west"), None);
    /// ```
    pub fn from_text(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "north" | "n" => Some(LeadKind::North),
            "south" | "s" => Some(LeadKind::South),
            _ => None,
        }
    }

    /// Construct the lead this kind names, as a type-erased handle.
    pub fn build(&self) -> AnyLead {
        match self {
            LeadKind::North => AnyLead::new(NorthLead),
            LeadKind::South => AnyLead::new(SouthLead),
        }
    }
}

// ============================================================================
// Roster Config
// ============================================================================

/// Demo roster configuration.
///
/// Lists the train divisions to roster and the leads to staff. The default
/// is one train and one lead per division - the roster whose cross-product
/// is the classic four-combination demonstration.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RosterConfig {
    /// Divisions to construct one train for, in order
    pub divisions: HVec<Division, MAX_ROSTER>,
    /// Leads to staff the roster with, in order
    pub leads: HVec<LeadKind, MAX_ROSTER>,
}

impl Default for RosterConfig {
    fn default() -> Self {
        let mut config = Self::empty();
        let _ = config.divisions.push(Division::North);
        let _ = config.divisions.push(Division::South);
        let _ = config.leads.push(LeadKind::North);
        let _ = config.leads.push(LeadKind::South);
        config
    }
}

impl RosterConfig {
    /// A config with no trains and no leads.
    pub fn empty() -> Self {
        Self {
            divisions: HVec::new(),
            leads: HVec::new(),
        }
    }

    /// Add a train division to the roster.
    ///
    /// Entries beyond [`MAX_ROSTER`] are silently dropped.
    pub fn with_division(mut self, division: Division) -> Self {
        let _ = self.divisions.push(division);
        self
    }

    /// Add a lead to the roster.
    ///
    /// Entries beyond [`MAX_ROSTER`] are silently dropped.
    pub fn with_lead(mut self, kind: LeadKind) -> Self {
        let _ = self.leads.push(kind);
        self
    }
}
