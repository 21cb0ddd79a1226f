//! Staff roles and duties.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::models::ValidationError;

/// Staff role. Exactly two exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Zookeeper,
    Veterinarian,
}

/// Actions staff can be asked to perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Duty {
    Feeding,
    Cleaning,
    HealthCheck,
}

impl Role {
    /// Whether this role is allowed to carry out a duty.
    pub fn permits(self, duty: Duty) -> bool {
        match (self, duty) {
            (Role::Zookeeper, Duty::Feeding | Duty::Cleaning) => true,
            (Role::Zookeeper, Duty::HealthCheck) => false,
            (Role::Veterinarian, Duty::HealthCheck) => true,
            (Role::Veterinarian, Duty::Feeding | Duty::Cleaning) => false,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Role::Zookeeper => "Zookeeper",
            Role::Veterinarian => "Veterinarian",
        })
    }
}

impl FromStr for Role {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Zookeeper" => Ok(Role::Zookeeper),
            "Veterinarian" => Ok(Role::Veterinarian),
            _ => Err(ValidationError::UnknownVariant {
                kind: "role",
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Duty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Duty::Feeding => "feeding",
            Duty::Cleaning => "cleaning",
            Duty::HealthCheck => "health checks",
        })
    }
}
