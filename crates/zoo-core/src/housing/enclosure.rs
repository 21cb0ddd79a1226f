//! Enclosure model.

use strsim::jaro_winkler;
use tracing::{debug, warn};

use super::{Environment, HousingError, HousingResult, Rejected};
use crate::models::{require_text, Animal, ValidationError, ValidationResult};
use crate::report::StatusReport;
use crate::rules::{CLEANLINESS_DECREMENT, CLEANLINESS_MAX, SUGGESTION_THRESHOLD};

/// A physical enclosure housing animals of a compatible species.
#[derive(Debug, Clone)]
pub struct Enclosure {
    /// Enclosure name
    name: String,
    /// Floor area in square metres
    size_sqm: f64,
    /// Habitat type, decides which species may live here
    environment: Environment,
    /// Maximum number of animals
    capacity: usize,
    /// 0 = filthy, 100 = spotless
    cleanliness: u8,
    /// Animals currently housed, in admission order
    animals: Vec<Animal>,
}

impl Enclosure {
    /// Create an empty, fully clean enclosure.
    pub fn new(
        name: String,
        size_sqm: f64,
        environment: Environment,
        capacity: usize,
    ) -> ValidationResult<Self> {
        let name = require_text(name, "name")?;
        if !size_sqm.is_finite() || size_sqm <= 0.0 {
            return Err(ValidationError::InvalidSize(size_sqm));
        }
        if capacity == 0 {
            return Err(ValidationError::ZeroCapacity);
        }

        Ok(Self {
            name,
            size_sqm,
            environment,
            capacity,
            cleanliness: CLEANLINESS_MAX,
            animals: Vec::new(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn size_sqm(&self) -> f64 {
        self.size_sqm
    }

    pub fn environment(&self) -> Environment {
        self.environment
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn cleanliness(&self) -> u8 {
        self.cleanliness
    }

    pub fn occupancy(&self) -> usize {
        self.animals.len()
    }

    pub fn is_full(&self) -> bool {
        self.animals.len() >= self.capacity
    }

    /// Animals currently housed.
    pub fn animals(&self) -> &[Animal] {
        &self.animals
    }

    /// Find a housed animal by name.
    pub fn animal(&self, name: &str) -> Option<&Animal> {
        self.animals.iter().find(|a| a.name() == name)
    }

    /// Find a housed animal by name for health checks and the like.
    pub fn animal_mut(&mut self, name: &str) -> Option<&mut Animal> {
        self.animals.iter_mut().find(|a| a.name() == name)
    }

    /// Run the admission rules without moving the animal.
    pub fn check_admission(&self, animal: &Animal) -> HousingResult<()> {
        if animal.is_under_treatment() {
            return Err(HousingError::UnderTreatment {
                animal: animal.name().to_string(),
                enclosure: self.name.clone(),
            });
        }
        if self.is_full() {
            return Err(HousingError::AtCapacity {
                enclosure: self.name.clone(),
                capacity: self.capacity,
            });
        }
        if !self.environment.admits(animal.species()) {
            return Err(HousingError::IncompatibleSpecies {
                species: animal.species().to_string(),
                environment: self.environment,
                enclosure: self.name.clone(),
            });
        }
        Ok(())
    }

    /// House an animal. On refusal the animal comes back inside the error.
    pub fn add_animal(&mut self, animal: Animal) -> Result<(), Rejected> {
        if let Err(reason) = self.check_admission(&animal) {
            warn!(
                enclosure = %self.name,
                animal = %animal.name(),
                %reason,
                "admission rejected"
            );
            return Err(Rejected::new(reason, animal));
        }

        self.cleanliness = self.cleanliness.saturating_sub(CLEANLINESS_DECREMENT);
        debug!(
            enclosure = %self.name,
            animal = %animal.name(),
            cleanliness = self.cleanliness,
            "animal admitted"
        );
        self.animals.push(animal);
        Ok(())
    }

    /// Remove the first housed animal with this name and return it.
    pub fn remove_animal(&mut self, name: &str) -> HousingResult<Animal> {
        match self.animals.iter().position(|a| a.name() == name) {
            Some(index) => {
                let animal = self.animals.remove(index);
                debug!(enclosure = %self.name, animal = %name, "animal removed");
                Ok(animal)
            }
            None => Err(HousingError::AnimalNotFound {
                name: name.to_string(),
                enclosure: self.name.clone(),
                suggestion: self.closest_name(name),
            }),
        }
    }

    /// Closest housed name, if any is similar enough to be a likely typo.
    fn closest_name(&self, name: &str) -> Option<String> {
        let wanted = name.to_lowercase();
        self.animals
            .iter()
            .map(|a| (a.name(), jaro_winkler(&wanted, &a.name().to_lowercase())))
            .filter(|(_, score)| *score >= SUGGESTION_THRESHOLD)
            .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
            .map(|(candidate, _)| candidate.to_string())
    }

    /// Restore cleanliness to 100.
    pub fn clean(&mut self) -> String {
        self.cleanliness = CLEANLINESS_MAX;
        debug!(enclosure = %self.name, "enclosure cleaned");
        format!(
            "Enclosure '{}' has been cleaned. Cleanliness is now {}/{}.",
            self.name, self.cleanliness, CLEANLINESS_MAX
        )
    }

    /// Structured status snapshot.
    pub fn status(&self) -> StatusReport {
        StatusReport::from_enclosure(self)
    }

    /// Human-readable status summary.
    pub fn report_status(&self) -> String {
        self.status().to_string()
    }
}
