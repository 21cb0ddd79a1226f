//! Fixed domain constants.

/// Lowest severity a health record may carry.
pub const SEVERITY_MIN: u8 = 1;

/// Highest severity a health record may carry.
pub const SEVERITY_MAX: u8 = 10;

/// Records at or above this severity put an animal under treatment.
pub const TREATMENT_SEVERITY_THRESHOLD: u8 = 5;

/// Cleanliness of a freshly cleaned enclosure.
pub const CLEANLINESS_MAX: u8 = 100;

/// Cleanliness lost each time an animal is admitted.
pub const CLEANLINESS_DECREMENT: u8 = 5;

/// Hours slept when no duration is given.
pub const DEFAULT_SLEEP_HOURS: u32 = 8;

/// Minimum Jaro-Winkler similarity for a "did you mean" suggestion.
pub const SUGGESTION_THRESHOLD: f64 = 0.85;
