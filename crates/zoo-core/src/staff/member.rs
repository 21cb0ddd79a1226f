//! Staff member model.

use chrono::{Local, NaiveDate};
use serde::Serialize;
use tracing::{debug, warn};

use super::{Duty, Role, StaffError, StaffResult};
use crate::housing::Enclosure;
use crate::models::{require_text, Animal, HealthRecord, ValidationResult};

/// A member of staff with role-gated duties.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Staff {
    /// Staff identifier
    staff_id: String,
    /// Full name
    name: String,
    /// Role deciding which duties are allowed
    role: Role,
    /// Names of animals this person looks after (advisory)
    assigned_animals: Vec<String>,
    /// Names of enclosures this person looks after (advisory)
    assigned_enclosures: Vec<String>,
}

impl Staff {
    /// Create a new staff member.
    pub fn new(staff_id: String, name: String, role: Role) -> ValidationResult<Self> {
        let staff_id = require_text(staff_id, "staff_id")?;
        let name = require_text(name, "name")?;
        Ok(Self {
            staff_id,
            name,
            role,
            assigned_animals: Vec::new(),
            assigned_enclosures: Vec::new(),
        })
    }

    pub fn staff_id(&self) -> &str {
        &self.staff_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn assigned_animals(&self) -> &[String] {
        &self.assigned_animals
    }

    pub fn assigned_enclosures(&self) -> &[String] {
        &self.assigned_enclosures
    }

    /// Record an animal as this person's responsibility. Returns false if already assigned.
    pub fn assign_animal(&mut self, animal: &Animal) -> bool {
        add_unique(&mut self.assigned_animals, animal.name())
    }

    /// Record an enclosure as this person's responsibility. Returns false if already assigned.
    pub fn assign_enclosure(&mut self, enclosure: &Enclosure) -> bool {
        add_unique(&mut self.assigned_enclosures, enclosure.name())
    }

    fn require(&self, duty: Duty) -> StaffResult<()> {
        if self.role.permits(duty) {
            return Ok(());
        }
        warn!(staff = %self.name, role = %self.role, %duty, "duty denied");
        Err(StaffError::PermissionDenied {
            staff: self.name.clone(),
            role: self.role,
            duty,
        })
    }

    /// Feed an animal. Animals under treatment are not fed; an advisory is returned instead.
    pub fn feed_animal(&self, animal: &Animal, food: &str) -> StaffResult<String> {
        self.require(Duty::Feeding)?;
        if animal.is_under_treatment() {
            return Ok(format!(
                "{} is under treatment; {} must wait for the veterinarian's feeding plan.",
                animal.name(),
                self.name
            ));
        }
        let meal = animal.eat(food)?;
        Ok(format!("{} fed {}. {}", self.name, animal.name(), meal))
    }

    /// Clean an enclosure back to full cleanliness.
    pub fn clean_enclosure(&self, enclosure: &mut Enclosure) -> StaffResult<String> {
        self.require(Duty::Cleaning)?;
        let status = enclosure.clean();
        Ok(format!("{} cleaned the enclosure. {}", self.name, status))
    }

    /// Examine an animal and append a health record dated today.
    pub fn perform_health_check(
        &self,
        animal: &mut Animal,
        description: &str,
        severity: u8,
        treatment_notes: &str,
    ) -> StaffResult<String> {
        let today = Local::now().date_naive();
        self.health_check_on(animal, today, description, severity, treatment_notes)
    }

    fn health_check_on(
        &self,
        animal: &mut Animal,
        reported_on: NaiveDate,
        description: &str,
        severity: u8,
        treatment_notes: &str,
    ) -> StaffResult<String> {
        self.require(Duty::HealthCheck)?;
        let record = HealthRecord::new(
            description.to_string(),
            reported_on,
            severity,
            treatment_notes.to_string(),
        )?;
        animal.add_health_record(record);
        debug!(
            staff = %self.name,
            animal = %animal.name(),
            severity,
            "health check recorded"
        );

        let outcome = if animal.is_under_treatment() {
            "is under treatment"
        } else {
            "remains healthy"
        };
        Ok(format!(
            "{} recorded '{}' (severity {}) for {} on {}; {} {}.",
            self.name,
            description.trim(),
            severity,
            animal.name(),
            reported_on,
            animal.name(),
            outcome
        ))
    }
}

fn add_unique(names: &mut Vec<String>, name: &str) -> bool {
    if names.iter().any(|n| n == name) {
        return false;
    }
    names.push(name.to_string());
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::housing::Environment;
    use crate::models::{AnimalCategory, ValidationError};

    fn keeper() -> Staff {
        Staff::new("Z001".into(), "Sam".into(), Role::Zookeeper).unwrap()
    }

    fn vet() -> Staff {
        Staff::new("V001".into(), "Dr. Lee".into(), Role::Veterinarian).unwrap()
    }

    fn make_elephant() -> Animal {
        Animal::new(
            "Ellie".into(),
            "elephant".into(),
            5,
            "herbivore".into(),
            AnimalCategory::Mammal,
        )
        .unwrap()
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 30).unwrap()
    }

    #[test]
    fn test_new_staff_validation() {
        assert_eq!(
            Staff::new("".into(), "Sam".into(), Role::Zookeeper).unwrap_err(),
            ValidationError::EmptyField { field: "staff_id" }
        );
        assert_eq!(
            Staff::new("Z1".into(), " ".into(), Role::Zookeeper).unwrap_err(),
            ValidationError::EmptyField { field: "name" }
        );
    }

    #[test]
    fn test_zookeeper_feeds() {
        let msg = keeper().feed_animal(&make_elephant(), "hay").unwrap();
        assert!(msg.starts_with("Sam fed Ellie."));
        assert!(msg.contains("herbivore"));
    }

    #[test]
    fn test_feed_rejects_empty_food() {
        let err = keeper().feed_animal(&make_elephant(), "").unwrap_err();
        assert_eq!(
            err,
            StaffError::Validation(ValidationError::EmptyField { field: "food" })
        );
    }

    #[test]
    fn test_vet_cannot_feed() {
        let ellie = make_elephant();
        let before = ellie.clone();
        let err = vet().feed_animal(&ellie, "hay").unwrap_err();
        assert_eq!(
            err,
            StaffError::PermissionDenied {
                staff: "Dr. Lee".into(),
                role: Role::Veterinarian,
                duty: Duty::Feeding,
            }
        );
        assert_eq!(ellie, before);
    }

    #[test]
    fn test_feed_under_treatment_returns_advisory() {
        let mut ellie = make_elephant();
        vet()
            .health_check_on(&mut ellie, date(), "Tusk infection", 7, "Antibiotics")
            .unwrap();

        let msg = keeper().feed_animal(&ellie, "hay").unwrap();
        assert!(msg.contains("under treatment"));
        assert!(!msg.contains("fed"));
    }

    #[test]
    fn test_keeper_cleans_vet_cannot() {
        let mut enc = Enclosure::new("Plains".into(), 300.0, Environment::Savannah, 2).unwrap();
        enc.add_animal(make_elephant()).unwrap();

        let err = vet().clean_enclosure(&mut enc).unwrap_err();
        assert!(matches!(
            err,
            StaffError::PermissionDenied { duty: Duty::Cleaning, .. }
        ));
        assert_eq!(enc.cleanliness(), 95);

        keeper().clean_enclosure(&mut enc).unwrap();
        assert_eq!(enc.cleanliness(), 100);
    }

    #[test]
    fn test_health_check_records_and_flags() {
        let mut ellie = make_elephant();
        let msg = vet()
            .health_check_on(&mut ellie, date(), "Limp", 5, "Rest")
            .unwrap();
        assert!(ellie.is_under_treatment());
        assert!(msg.contains("is under treatment"));

        let record = ellie.latest_health_record().unwrap();
        assert_eq!(record.reported_on(), date());
        assert_eq!(record.description(), "Limp");
        assert_eq!(record.treatment_notes(), "Rest");
    }

    #[test]
    fn test_health_check_is_dated_today() {
        let mut ellie = make_elephant();
        vet()
            .perform_health_check(&mut ellie, "Routine", 1, "")
            .unwrap();
        let reported = ellie.latest_health_record().unwrap().reported_on();
        let today = Local::now().date_naive();
        assert!(reported == today || reported.succ_opt() == Some(today));
    }

    #[test]
    fn test_health_check_validation() {
        let mut ellie = make_elephant();
        let err = vet()
            .health_check_on(&mut ellie, date(), "Limp", 11, "")
            .unwrap_err();
        assert!(matches!(
            err,
            StaffError::Validation(ValidationError::SeverityOutOfRange { value: 11, .. })
        ));

        let err = vet()
            .health_check_on(&mut ellie, date(), "   ", 3, "")
            .unwrap_err();
        assert!(matches!(err, StaffError::Validation(_)));
        assert_eq!(ellie.health_record_count(), 0);
    }

    #[test]
    fn test_keeper_cannot_health_check() {
        let mut ellie = make_elephant();
        let err = keeper()
            .perform_health_check(&mut ellie, "Limp", 9, "")
            .unwrap_err();
        assert!(matches!(
            err,
            StaffError::PermissionDenied { duty: Duty::HealthCheck, .. }
        ));
        assert!(!ellie.is_under_treatment());
    }

    #[test]
    fn test_assignments_deduplicated() {
        let mut sam = keeper();
        let ellie = make_elephant();
        let enc = Enclosure::new("Plains".into(), 300.0, Environment::Savannah, 2).unwrap();

        assert!(sam.assign_animal(&ellie));
        assert!(!sam.assign_animal(&ellie));
        assert!(sam.assign_enclosure(&enc));
        assert!(!sam.assign_enclosure(&enc));

        assert_eq!(sam.assigned_animals(), ["Ellie".to_string()]);
        assert_eq!(sam.assigned_enclosures(), ["Plains".to_string()]);
    }
}
