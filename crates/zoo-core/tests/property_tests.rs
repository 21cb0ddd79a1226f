//! Property-based tests for the treatment state machine and enclosure gauges.

use chrono::NaiveDate;
use proptest::prelude::*;
use zoo_core::{Animal, AnimalCategory, Enclosure, Environment, HealthRecord, Severity};

fn make_animal(name: &str) -> Animal {
    Animal::new(
        name.into(),
        "meerkat".into(),
        1,
        "insectivore".into(),
        AnimalCategory::Mammal,
    )
    .unwrap()
}

fn record(severity: u8) -> HealthRecord {
    HealthRecord::new(
        "Observation".into(),
        NaiveDate::from_ymd_opt(2024, 2, 29).unwrap(),
        severity,
        String::new(),
    )
    .unwrap()
}

#[derive(Debug, Clone)]
enum TreatmentOp {
    Record(u8),
    Clear,
}

fn treatment_op() -> impl Strategy<Value = TreatmentOp> {
    prop_oneof![
        4 => (1u8..=10).prop_map(TreatmentOp::Record),
        1 => Just(TreatmentOp::Clear),
    ]
}

proptest! {
    /// The flag is set iff a severe record arrived since the last clear.
    #[test]
    fn treatment_flag_tracks_last_severe_record(
        ops in proptest::collection::vec(treatment_op(), 0..40),
    ) {
        let mut animal = make_animal("Mia");
        let mut expected = false;
        let mut records = 0usize;

        for op in ops {
            match op {
                TreatmentOp::Record(severity) => {
                    animal.add_health_record(record(severity));
                    records += 1;
                    expected |= severity >= 5;
                }
                TreatmentOp::Clear => {
                    animal.clear_treatment();
                    expected = false;
                }
            }
            prop_assert_eq!(animal.is_under_treatment(), expected);
        }

        // Clearing never drops history
        prop_assert_eq!(animal.health_record_count(), records);
    }

    /// Severities outside 1..=10 never produce a record.
    #[test]
    fn severity_range_enforced(value in any::<u8>()) {
        let valid = (1..=10).contains(&value);
        prop_assert_eq!(Severity::new(value).is_ok(), valid);
        prop_assert_eq!(
            HealthRecord::new("x".into(), NaiveDate::MIN, value, String::new()).is_ok(),
            valid
        );
    }

    /// Each admission costs exactly five points, never going below zero.
    #[test]
    fn cleanliness_never_negative(admissions in 0usize..40) {
        let mut enc = Enclosure::new("Burrow".into(), 60.0, Environment::Savannah, 40).unwrap();
        for i in 0..admissions {
            let before = enc.cleanliness();
            enc.add_animal(make_animal(&format!("M{i}"))).unwrap();
            prop_assert_eq!(enc.cleanliness(), before.saturating_sub(5));
        }
        prop_assert_eq!(
            enc.cleanliness() as usize,
            100usize.saturating_sub(admissions * 5)
        );

        enc.clean();
        prop_assert_eq!(enc.cleanliness(), 100);
    }

    /// Occupancy never exceeds capacity.
    #[test]
    fn occupancy_bounded_by_capacity(capacity in 1usize..10, attempts in 0usize..20) {
        let mut enc = Enclosure::new("Den".into(), 25.0, Environment::Temperate, capacity).unwrap();
        for i in 0..attempts {
            let _ = enc.add_animal(make_animal(&format!("A{i}")));
            prop_assert!(enc.occupancy() <= capacity);
        }
        prop_assert_eq!(enc.occupancy(), attempts.min(capacity));
    }
}
