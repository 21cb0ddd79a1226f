//! Animal models.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::health::HealthRecord;
use super::{require_text, ValidationError, ValidationResult};
use crate::rules::DEFAULT_SLEEP_HOURS;

/// Broad animal category, used to pick the animal's sound.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum AnimalCategory {
    Mammal,
    Reptile,
    Bird,
    /// Anything else; may carry its own sound
    Other { sound: Option<String> },
}

impl AnimalCategory {
    /// Phrase completing "<name> the <species> ...".
    fn sound_phrase(&self) -> String {
        match self {
            AnimalCategory::Mammal => "grunts and bellows".into(),
            AnimalCategory::Reptile => "hisses quietly".into(),
            AnimalCategory::Bird => "chirps and squawks".into(),
            AnimalCategory::Other { sound: Some(sound) } => format!("says \"{}\"", sound),
            AnimalCategory::Other { sound: None } => "makes a curious noise".into(),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AnimalCategory::Mammal => "mammal",
            AnimalCategory::Reptile => "reptile",
            AnimalCategory::Bird => "bird",
            AnimalCategory::Other { .. } => "other",
        }
    }
}

/// Treatment state derived from an animal's health records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TreatmentState {
    Healthy,
    UnderTreatment,
}

/// An animal living in the zoo.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Animal {
    /// Animal name
    name: String,
    /// Species, lower-cased (e.g., "elephant", "tree frog")
    species: String,
    /// Age in years
    age: u32,
    /// Dietary needs (e.g., "herbivore")
    diet: String,
    /// Category tag
    category: AnimalCategory,
    /// Append-only health history, in insertion order
    health_records: Vec<HealthRecord>,
    /// Raised by a severe record, lowered only by `clear_treatment`
    under_treatment: bool,
}

impl Animal {
    /// Create a new animal with required fields.
    pub fn new(
        name: String,
        species: String,
        age: u32,
        diet: String,
        category: AnimalCategory,
    ) -> ValidationResult<Self> {
        let name = require_text(name, "name")?;
        let species = require_text(species, "species")?.to_lowercase();
        let diet = require_text(diet, "diet")?;
        let category = match category {
            AnimalCategory::Other { sound: Some(s) } if s.trim().is_empty() => {
                AnimalCategory::Other { sound: None }
            }
            other => other,
        };

        Ok(Self {
            name,
            species,
            age,
            diet,
            category,
            health_records: Vec::new(),
            under_treatment: false,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn species(&self) -> &str {
        &self.species
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn diet(&self) -> &str {
        &self.diet
    }

    pub fn category(&self) -> &AnimalCategory {
        &self.category
    }

    pub fn is_under_treatment(&self) -> bool {
        self.under_treatment
    }

    pub fn treatment_state(&self) -> TreatmentState {
        if self.under_treatment {
            TreatmentState::UnderTreatment
        } else {
            TreatmentState::Healthy
        }
    }

    /// The sound this animal makes.
    pub fn make_sound(&self) -> String {
        format!(
            "{} the {} {}.",
            self.name,
            self.species,
            self.category.sound_phrase()
        )
    }

    /// Feed the animal. Fails on blank food.
    pub fn eat(&self, food: &str) -> ValidationResult<String> {
        let food = food.trim();
        if food.is_empty() {
            return Err(ValidationError::EmptyField { field: "food" });
        }
        Ok(format!(
            "{} the {} eats {} as part of a {} diet.",
            self.name, self.species, food, self.diet
        ))
    }

    /// Put the animal to sleep; `None` sleeps for the default eight hours.
    pub fn sleep(&self, hours: Option<u32>) -> ValidationResult<String> {
        let hours = hours.unwrap_or(DEFAULT_SLEEP_HOURS);
        if hours == 0 {
            return Err(ValidationError::NonPositiveHours);
        }
        Ok(format!("{} sleeps for {} hours.", self.name, hours))
    }

    /// Append a health record. Severe records put the animal under treatment.
    pub fn add_health_record(&mut self, record: HealthRecord) {
        if record.severity().requires_treatment() && !self.under_treatment {
            debug!(
                animal = %self.name,
                severity = %record.severity(),
                "animal placed under treatment"
            );
            self.under_treatment = true;
        }
        self.health_records.push(record);
    }

    /// Owned copy of the health history.
    pub fn health_records(&self) -> Vec<HealthRecord> {
        self.health_records.clone()
    }

    pub fn health_record_count(&self) -> usize {
        self.health_records.len()
    }

    pub fn latest_health_record(&self) -> Option<&HealthRecord> {
        self.health_records.last()
    }

    /// Lower the treatment flag. History is kept.
    pub fn clear_treatment(&mut self) {
        if self.under_treatment {
            debug!(animal = %self.name, "treatment cleared");
        }
        self.under_treatment = false;
    }
}

impl fmt::Display for Animal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({} {}, age {}, {})",
            self.name,
            self.category.label(),
            self.species,
            self.age,
            self.diet
        )?;
        if self.under_treatment {
            write!(f, " [under treatment]")?;
        }
        Ok(())
    }
}
