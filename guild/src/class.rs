//! Adventurer classes

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ParseError;

/// Combat calling an adventurer trained in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdventurerClass {
    Archer,
    Knight,
    Lancer,
}

impl AdventurerClass {
    /// Get display name
    pub fn as_str(&self) -> &'static str {
        match self {
            AdventurerClass::Archer => "Archer",
            AdventurerClass::Knight => "Knight",
            AdventurerClass::Lancer => "Lancer",
        }
    }

    /// All classes the camps can train.
    pub fn all() -> [AdventurerClass; 3] {
        [
            AdventurerClass::Archer,
            AdventurerClass::Knight,
            AdventurerClass::Lancer,
        ]
    }
}

impl FromStr for AdventurerClass {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "archer" => Ok(AdventurerClass::Archer),
            "knight" => Ok(AdventurerClass::Knight),
            "lancer" => Ok(AdventurerClass::Lancer),
            _ => Err(ParseError::UnknownClass(s.to_string())),
        }
    }
}

impl std::fmt::Display for AdventurerClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
