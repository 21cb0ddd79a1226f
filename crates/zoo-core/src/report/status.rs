//! Enclosure status report.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::housing::{Enclosure, Environment};

/// Point-in-time summary of an enclosure.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StatusReport {
    /// Enclosure name
    pub enclosure: String,
    /// Habitat type
    pub environment: Environment,
    /// Floor area in square metres
    pub size_sqm: f64,
    /// Animals currently housed
    pub occupancy: usize,
    /// Maximum number of animals
    pub capacity: usize,
    /// Cleanliness gauge (0-100)
    pub cleanliness: u8,
    /// Housed animals
    pub animals: Vec<AnimalSummary>,
}

/// One line of a status report.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnimalSummary {
    pub name: String,
    pub species: String,
    pub under_treatment: bool,
}

impl StatusReport {
    /// Build a report from the enclosure's current state.
    pub fn from_enclosure(enclosure: &Enclosure) -> Self {
        let animals = enclosure
            .animals()
            .iter()
            .map(|a| AnimalSummary {
                name: a.name().to_string(),
                species: a.species().to_string(),
                under_treatment: a.is_under_treatment(),
            })
            .collect();

        Self {
            enclosure: enclosure.name().to_string(),
            environment: enclosure.environment(),
            size_sqm: enclosure.size_sqm(),
            occupancy: enclosure.occupancy(),
            capacity: enclosure.capacity(),
            cleanliness: enclosure.cleanliness(),
            animals,
        }
    }

    /// Serialize to pretty JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for StatusReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Enclosure '{}' ({}, {} sqm): {}/{} animals, cleanliness {}/100",
            self.enclosure,
            self.environment,
            self.size_sqm,
            self.occupancy,
            self.capacity,
            self.cleanliness
        )?;
        if self.animals.is_empty() {
            return write!(f, "\n  (empty)");
        }
        for animal in &self.animals {
            write!(f, "\n  - {} the {}", animal.name, animal.species)?;
            if animal.under_treatment {
                write!(f, " [under treatment]")?;
            }
        }
        Ok(())
    }
}
