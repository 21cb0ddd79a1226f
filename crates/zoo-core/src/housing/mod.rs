//! Enclosures and the rules for housing animals in them.
//!
//! Admission: Animal → treatment check → capacity check → environment check → housed

mod enclosure;
mod environment;

pub use enclosure::*;
pub use environment::*;

use thiserror::Error;

use crate::models::Animal;

/// Housing errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum HousingError {
    #[error("{animal} is under treatment and cannot be moved into '{enclosure}'")]
    UnderTreatment { animal: String, enclosure: String },

    #[error("enclosure '{enclosure}' is at capacity ({capacity})")]
    AtCapacity { enclosure: String, capacity: usize },

    #[error("{species} is not compatible with the {environment} enclosure '{enclosure}'")]
    IncompatibleSpecies {
        species: String,
        environment: Environment,
        enclosure: String,
    },

    #[error("no animal named '{name}' in enclosure '{enclosure}'{}", suggestion_suffix(.suggestion))]
    AnimalNotFound {
        name: String,
        enclosure: String,
        suggestion: Option<String>,
    },
}

fn suggestion_suffix(suggestion: &Option<String>) -> String {
    suggestion
        .as_ref()
        .map(|s| format!(" (did you mean '{}'?)", s))
        .unwrap_or_default()
}

pub type HousingResult<T> = Result<T, HousingError>;

/// A refused admission. Hands the animal back to the caller.
#[derive(Error, Debug)]
#[error("{reason}")]
pub struct Rejected {
    pub reason: HousingError,
    animal: Box<Animal>,
}

impl Rejected {
    fn new(reason: HousingError, animal: Animal) -> Self {
        Self {
            reason,
            animal: Box::new(animal),
        }
    }

    /// The animal that was turned away.
    pub fn animal(&self) -> &Animal {
        &self.animal
    }

    /// Take the animal back.
    pub fn into_animal(self) -> Animal {
        *self.animal
    }
}
