//! Edge case and extension-point tests for train/lead pairing

use rs_crossover::{
    AnyLead, Division, Lead, ManageError, ManageRecord, NorthLead, Roster, SouthLead, Train,
    TrainInfo,
};

// ============================================================================
// Shared Leads
// ============================================================================

#[test]
fn one_lead_serves_many_trains() {
    let lead = AnyLead::new(NorthLead);

    let north = Train::with_lead(Division::North, lead.clone());
    let south = Train::with_lead(Division::South, lead);

    assert_eq!(
        north.manage().unwrap().to_string(),
        "North Lead manages North-category"
    );
    assert_eq!(
        south.manage().unwrap().to_string(),
        "North Lead manages South-category"
    );
}

#[test]
fn cloned_handle_is_the_same_lead() {
    let original = AnyLead::new(SouthLead);
    let clone = original.clone();

    let train = Train::south();
    assert_eq!(original.try_manage(&train), clone.try_manage(&train));
}

// ============================================================================
// External Implementations
// ============================================================================

#[derive(Clone)]
struct YardLead {
    desk: &'static str,
}

impl Lead for YardLead {
    fn identity(&self) -> &str {
        self.desk
    }
}

#[test]
fn external_lead_manages_builtin_trains() {
    let lead = YardLead { desk: "Yard Lead" };

    let record = lead.try_manage(&Train::south());
    assert_eq!(record.to_string(), "Yard Lead manages South-category");

    // And through a type-erased handle assigned to a train.
    let mut train = Train::north();
    train.set_lead(AnyLead::new(lead));
    assert_eq!(
        train.manage().unwrap().to_string(),
        "Yard Lead manages North-category"
    );
}

struct MaintenanceSlot {
    division: Division,
}

impl TrainInfo for MaintenanceSlot {
    fn division(&self) -> Division {
        self.division
    }
}

#[test]
fn builtin_leads_manage_external_train_info() {
    let slot = MaintenanceSlot {
        division: Division::South,
    };

    let record = NorthLead.try_manage(&slot);
    assert_eq!(record.to_string(), "North Lead manages South-category");
}

#[test]
fn external_types_compose_on_both_sides() {
    let lead = YardLead { desk: "Yard Lead" };
    let slot = MaintenanceSlot {
        division: Division::North,
    };

    // Neither side is a built-in type; the capability contracts are enough.
    let record = lead.try_manage(&slot);
    assert_eq!(record.to_string(), "Yard Lead manages North-category");
}

// ============================================================================
// Roster Boundaries
// ============================================================================

#[test]
fn empty_roster_produces_no_records() {
    assert!(Roster::new().cross_manage().is_empty());
}

#[test]
fn roster_with_one_side_missing_produces_no_records() {
    let trains_only = Roster::new().with_train(Train::north());
    assert!(trains_only.cross_manage().is_empty());

    let leads_only = Roster::new().with_lead(AnyLead::new(SouthLead));
    assert!(leads_only.cross_manage().is_empty());
}

#[test]
fn lopsided_roster_covers_the_full_product() {
    let roster = Roster::new()
        .with_train(Train::north())
        .with_train(Train::south())
        .with_train(Train::north())
        .with_lead(AnyLead::new(SouthLead));

    let records = roster.cross_manage();
    assert_eq!(records.len(), 3);
    assert!(records
        .iter()
        .all(|r| r.lead.as_str() == "South Lead"));
}

#[test]
fn manage_all_fails_fast_on_unassigned_train() {
    let roster = Roster::new()
        .with_train(Train::with_lead(Division::North, AnyLead::new(NorthLead)))
        .with_train(Train::south()); // never assigned

    assert_eq!(roster.manage_all(), Err(ManageError::Unconfigured));
}

// ============================================================================
// Record Values
// ============================================================================

#[test]
fn records_are_plain_comparable_values() {
    let a = ManageRecord::new("North Lead", Division::South);
    let b = NorthLead.try_manage(&Train::south());
    assert_eq!(a, b);
}

// ============================================================================
// Serialization (serde feature)
// ============================================================================

#[cfg(feature = "serde")]
mod serde_tests {
    use rs_crossover::{Division, Lead, LeadKind, ManageRecord, NorthLead, Train};

    #[test]
    fn record_serializes_for_api_use() {
        let record = NorthLead.try_manage(&Train::south());
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"lead":"North Lead","division":"south"}"#);
    }

    #[test]
    fn record_round_trips() {
        let record = ManageRecord::new("South Lead", Division::North);
        let json = serde_json::to_string(&record).unwrap();
        let back: ManageRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn division_uses_lowercase_wire_form() {
        assert_eq!(serde_json::to_string(&Division::South).unwrap(), r#""south""#);
        let parsed: Division = serde_json::from_str(r#""north""#).unwrap();
        assert_eq!(parsed, Division::North);
    }

    #[test]
    fn lead_kind_uses_lowercase_wire_form() {
        assert_eq!(serde_json::to_string(&LeadKind::North).unwrap(), r#""north""#);
        let parsed: LeadKind = serde_json::from_str(r#""south""#).unwrap();
        assert_eq!(parsed, LeadKind::South);
    }
}
