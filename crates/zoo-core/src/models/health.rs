//! Health record models.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{require_text, ValidationError, ValidationResult};
use crate::rules::{SEVERITY_MAX, SEVERITY_MIN, TREATMENT_SEVERITY_THRESHOLD};

/// Severity of a diagnosed event, 1 (mild) to 10 (critical).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Severity(u8);

impl Severity {
    /// Create a severity, rejecting values outside 1..=10.
    pub fn new(value: u8) -> ValidationResult<Self> {
        if (SEVERITY_MIN..=SEVERITY_MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(ValidationError::SeverityOutOfRange {
                value,
                min: SEVERITY_MIN,
                max: SEVERITY_MAX,
            })
        }
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// Whether a record of this severity puts the animal under treatment.
    pub fn requires_treatment(self) -> bool {
        self.0 >= TREATMENT_SEVERITY_THRESHOLD
    }
}

impl TryFrom<u8> for Severity {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Severity> for u8 {
    fn from(severity: Severity) -> Self {
        severity.0
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single diagnosed health event. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HealthRecord {
    /// What was observed
    description: String,
    /// Date the event was reported
    reported_on: NaiveDate,
    /// How serious the event is
    severity: Severity,
    /// Treatment given or planned (may be empty)
    treatment_notes: String,
}

impl HealthRecord {
    /// Create a health record, validating description and severity.
    pub fn new(
        description: String,
        reported_on: NaiveDate,
        severity: u8,
        treatment_notes: String,
    ) -> ValidationResult<Self> {
        let description = require_text(description, "description")?;
        let severity = Severity::new(severity)?;
        Ok(Self {
            description,
            reported_on,
            severity,
            treatment_notes,
        })
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn reported_on(&self) -> NaiveDate {
        self.reported_on
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn treatment_notes(&self) -> &str {
        &self.treatment_notes
    }
}

impl fmt::Display for HealthRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {} (severity {})",
            self.reported_on, self.description, self.severity
        )?;
        if !self.treatment_notes.is_empty() {
            write!(f, ": {}", self.treatment_notes)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 14).unwrap()
    }

    #[test]
    fn test_severity_bounds() {
        assert!(Severity::new(0).is_err());
        assert!(Severity::new(1).is_ok());
        assert!(Severity::new(10).is_ok());
        assert!(matches!(
            Severity::new(11),
            Err(ValidationError::SeverityOutOfRange { value: 11, .. })
        ));
    }

    #[test]
    fn test_severity_treatment_threshold() {
        assert!(!Severity::new(4).unwrap().requires_treatment());
        assert!(Severity::new(5).unwrap().requires_treatment());
        assert!(Severity::new(10).unwrap().requires_treatment());
    }

    #[test]
    fn test_severity_deserialize_rejects_out_of_range() {
        let ok: Severity = serde_json::from_str("7").unwrap();
        assert_eq!(ok.value(), 7);
        assert!(serde_json::from_str::<Severity>("42").is_err());
    }

    #[test]
    fn test_new_record() {
        let record =
            HealthRecord::new("Cracked beak".into(), date(), 8, "Soft food only".into()).unwrap();
        assert_eq!(record.description(), "Cracked beak");
        assert_eq!(record.reported_on(), date());
        assert_eq!(record.severity().value(), 8);
        assert_eq!(record.treatment_notes(), "Soft food only");
    }

    #[test]
    fn test_empty_description_rejected() {
        let err = HealthRecord::new("  ".into(), date(), 3, String::new()).unwrap_err();
        assert_eq!(err, ValidationError::EmptyField { field: "description" });
    }

    #[test]
    fn test_display_omits_empty_notes() {
        let record = HealthRecord::new("Routine check".into(), date(), 1, String::new()).unwrap();
        assert_eq!(record.to_string(), "2024-03-14 - Routine check (severity 1)");
    }
}
