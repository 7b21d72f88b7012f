//! Train-side capability contract and division labels.
//!
//! A lead never sees a concrete train type. It sees [`TrainInfo`], the
//! minimal contract any manageable thing must satisfy: report which
//! [`Division`] it belongs to. [`crate::Train`] implements it, and so can
//! any external type that wants to be managed by the built-in leads.

/// Regional division a train belongs to.
///
/// The division is the train's category label. It is fixed when the train is
/// constructed and is the one piece of train state a lead inspects while
/// managing it.
///
/// # Example
///
/// ```
/// use rs_crossover::Division;
///
/// assert_eq!(Division::South.as_str(), "south");
/// assert_eq!(Division::South.category(), "South-category");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Division {
    /// Southern division.
    South,
    /// Northern division.
    North,
}

impl Division {
    /// Returns the division as a lowercase string.
    ///
    /// This is the wire form used for JSON serialization.
    ///
    /// # Examples
    ///
    /// ```
    /// use rs_crossover::Division;
    ///
    /// assert_eq!(Division::South.as_str(), "south");
    /// assert_eq!(Division::North.as_str(), "north");
    /// ```
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Division::South => "south",
            Division::North => "north",
        }
    }

    /// Returns the display label used in management records.
    ///
    /// # Examples
    ///
    /// ```
    /// use rs_crossover::Division;
    ///
    /// assert_eq!(Division::South.category(), "South-category");
    /// assert_eq!(Division::North.category(), "North-category");
    /// ```
    #[inline]
    pub const fn category(&self) -> &'static str {
        match self {
            Division::South => "South-category",
            Division::North => "North-category",
        }
    }

    /// Parse a division from text input.
    ///
    /// Supports full names (`"south"`, `"north"`) and single-letter
    /// abbreviations (`"s"`, `"n"`). Input is trimmed and case-insensitive.
    ///
    /// # Examples
    ///
    /// ```
    /// use rs_crossover::Division;
    ///
    /// assert_eq!(Division::from_text("south"), Some(Division::South));
    /// assert_eq!(Division::from_text("  N  "), Some(Division::North));
    /// assert_eq!(Division::from_text("east"), None);
    /// ```
    pub fn from_text(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "south" | "s" => Some(Division::South),
            "north" | "n" => Some(Division::North),
            _ => None,
        }
    }
}

/// Capability a lead needs from any train it manages.
///
/// This is the train side of the seam: leads accept `&dyn TrainInfo` and so
/// never depend on a concrete train type. Implement it on your own types to
/// make them manageable by any [`Lead`].
///
/// # Example Implementation
///
/// ```rust
/// use rs_crossover::{Division, Lead, NorthLead, TrainInfo};
///
/// struct YardSlot {
///     division: Division,
/// }
///
/// impl TrainInfo for YardSlot {
///     fn division(&self) -> Division {
///         self.division
///     }
/// }
///
/// let slot = YardSlot { division: Division::South };
/// let record = NorthLead.try_manage(&slot);
/// assert_eq!(record.to_string(), "North Lead manages South-category");
/// ```
///
/// [`Lead`]: crate::traits::Lead
pub trait TrainInfo {
    /// The division label this train carries.
    fn division(&self) -> Division;
}

#[cfg(test)]
mod tests {
    use super::*;

    // =========================================================================
    // Division Tests
    // =========================================================================

    #[test]
    fn division_as_str() {
        assert_eq!(Division::South.as_str(), "south");
        assert_eq!(Division::North.as_str(), "north");
    }

    #[test]
    fn division_category() {
        assert_eq!(Division::South.category(), "South-category");
        assert_eq!(Division::North.category(), "North-category");
    }

    #[test]
    fn division_clone_copy() {
        let div = Division::South;
        let copied = div;
        assert_eq!(div, copied);
        assert_eq!(div.clone(), copied);
    }

    #[test]
    fn division_debug() {
        assert_eq!(format!("{:?}", Division::South), "South");
        assert_eq!(format!("{:?}", Division::North), "North");
    }

    #[test]
    fn division_equality() {
        assert_eq!(Division::South, Division::South);
        assert_eq!(Division::North, Division::North);
        assert_ne!(Division::South, Division::North);
    }

    #[test]
    fn division_from_text_full_names() {
        assert_eq!(Division::from_text("south"), Some(Division::South));
        assert_eq!(Division::from_text("north"), Some(Division::North));
    }

    #[test]
    fn division_from_text_abbreviations() {
        assert_eq!(Division::from_text("s"), Some(Division::South));
        assert_eq!(Division::from_text("n"), Some(Division::North));
    }

    #[test]
    fn division_from_text_case_insensitive() {
        assert_eq!(Division::from_text("SOUTH"), Some(Division::South));
        assert_eq!(Division::from_text("North"), Some(Division::North));
        assert_eq!(Division::from_text("S"), Some(Division::South));
    }

    #[test]
    fn division_from_text_whitespace() {
        assert_eq!(Division::from_text("  south  "), Some(Division::South));
        assert_eq!(Division::from_text("\tnorth\n"), Some(Division::North));
    }

    #[test]
    fn division_from_text_invalid() {
        assert_eq!(Division::from_text(""), None);
        assert_eq!(Division::from_text("east"), None);
        assert_eq!(Division::from_text("souths"), None);
        assert_eq!(Division::from_text("0"), None);
    }

    // =========================================================================
    // TrainInfo Tests
    // =========================================================================

    struct StubTrain {
        division: Division,
    }

    impl TrainInfo for StubTrain {
        fn division(&self) -> Division {
            self.division
        }
    }

    #[test]
    fn train_info_reports_division() {
        let stub = StubTrain {
            division: Division::North,
        };
        assert_eq!(stub.division(), Division::North);
    }

    #[test]
    fn train_info_is_object_safe() {
        let stub = StubTrain {
            division: Division::South,
        };
        let dyn_ref: &dyn TrainInfo = &stub;
        assert_eq!(dyn_ref.division(), Division::South);
    }
}
