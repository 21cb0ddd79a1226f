//! Environment classification and species compatibility.
//!
//! Compatibility is a coarse substring match of the species name against a
//! fixed keyword list per environment, so "brown bear" and "polar bear" are
//! told apart by their full names rather than by taxonomy.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::models::ValidationError;

/// Closed set of enclosure environments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Aquatic,
    Savannah,
    Desert,
    Tropical,
    Rainforest,
    Arctic,
    /// General habitat able to host any species
    Temperate,
}

const AQUATIC: &[&str] = &["dolphin", "seal", "penguin", "fish", "sea otter", "turtle"];
const SAVANNAH: &[&str] = &["giraffe", "elephant", "zebra", "ostrich", "red kangaroo", "meerkat"];
const DESERT: &[&str] = &["camel", "scorpion", "dingo", "bearded dragon", "hawk", "cobra"];
const TROPICAL: &[&str] = &["lemur", "green anaconda", "parrot", "gecko", "capybara", "sloth"];
const RAINFOREST: &[&str] = &[
    "tree frog",
    "toucan",
    "spider monkey",
    "harpy eagle",
    "tiger",
    "gorilla",
];
const ARCTIC: &[&str] = &["polar bear", "arctic fox", "snowy owls", "walrus", "seal", "puffin"];

impl Environment {
    pub const ALL: [Environment; 7] = [
        Environment::Aquatic,
        Environment::Savannah,
        Environment::Desert,
        Environment::Tropical,
        Environment::Rainforest,
        Environment::Arctic,
        Environment::Temperate,
    ];

    /// Species keywords admitted by this environment; `None` admits everything.
    pub fn keywords(self) -> Option<&'static [&'static str]> {
        match self {
            Environment::Aquatic => Some(AQUATIC),
            Environment::Savannah => Some(SAVANNAH),
            Environment::Desert => Some(DESERT),
            Environment::Tropical => Some(TROPICAL),
            Environment::Rainforest => Some(RAINFOREST),
            Environment::Arctic => Some(ARCTIC),
            Environment::Temperate => None,
        }
    }

    /// Check whether a species may live in this environment.
    ///
    /// Animals store their species lower-cased already; other callers may pass
    /// mixed case, which is folded before matching.
    pub fn admits(self, species: &str) -> bool {
        let species: Cow<'_, str> = if species.chars().any(char::is_uppercase) {
            Cow::Owned(species.to_lowercase())
        } else {
            Cow::Borrowed(species)
        };
        match self.keywords() {
            Some(keywords) => keywords.iter().any(|k| species.contains(k)),
            None => true,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Environment::Aquatic => "aquatic",
            Environment::Savannah => "savannah",
            Environment::Desert => "desert",
            Environment::Tropical => "tropical",
            Environment::Rainforest => "rainforest",
            Environment::Arctic => "arctic",
            Environment::Temperate => "temperate",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Environment {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        Environment::ALL
            .into_iter()
            .find(|env| env.as_str() == lower)
            .ok_or_else(|| ValidationError::UnknownVariant {
                kind: "environment",
                value: s.to_string(),
            })
    }
}
