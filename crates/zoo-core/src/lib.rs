//! Zoo Core Library
//!
//! Animals, their enclosures, and the staff who look after them.
//!
//! # Architecture
//!
//! ```text
//!   Staff (Zookeeper | Veterinarian)
//!      │ feed / clean / health check (role-gated)
//!      ▼
//!   ┌──────────────┐   admission check    ┌──────────────────────┐
//!   │  Enclosure   │ ───────────────────▶ │ Animal               │
//!   │  capacity    │  under treatment?    │  health records ──┐  │
//!   │  cleanliness │  species ↔ habitat?  │  treatment state ◀┘  │
//!   └──────────────┘                      └──────────────────────┘
//! ```
//!
//! # Core Principle
//!
//! **An animal under treatment is never housed.** The treatment flag is only
//! raised by a high-severity health record and only lowered by an explicit clear.
//!
//! # Modules
//!
//! - [`models`]: Domain types (Animal, HealthRecord, Severity)
//! - [`housing`]: Enclosures and the species/environment compatibility table
//! - [`staff`]: Role-gated staff duties
//! - [`report`]: Enclosure status reports
//! - [`rules`]: Fixed domain constants

pub mod housing;
pub mod models;
pub mod report;
pub mod rules;
pub mod staff;

// Re-export commonly used types
pub use housing::{Enclosure, Environment, HousingError, Rejected};
pub use models::{
    Animal, AnimalCategory, HealthRecord, Severity, TreatmentState, ValidationError,
};
pub use report::StatusReport;
pub use staff::{Duty, Role, Staff, StaffError};

use thiserror::Error;

// =========================================================================
// Crate Error Type
// =========================================================================

#[derive(Debug, Error)]
pub enum ZooError {
    #[error("Invalid input: {0}")]
    Validation(#[from] ValidationError),

    #[error("Housing error: {0}")]
    Housing(#[from] HousingError),

    #[error("Staff error: {0}")]
    Staff(#[from] StaffError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<Rejected> for ZooError {
    fn from(rejected: Rejected) -> Self {
        ZooError::Housing(rejected.reason)
    }
}

pub type ZooResult<T> = Result<T, ZooError>;
