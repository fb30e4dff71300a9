//! Honorific titles - cosmetic flourishes earned in the field

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ParseError;

/// An honorific an adventurer has earned.
///
/// Titles are purely cosmetic: each one contributes a flourish line to
/// the attack narration, most recently earned first. They stack in the
/// order awarded and never affect the combatant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Title {
    /// "the Mighty" - earned for feats of strength.
    Mighty,
    /// "the Swift" - earned for feats of speed.
    Swift,
}

impl Title {
    /// Get display name
    pub fn as_str(&self) -> &'static str {
        match self {
            Title::Mighty => "Mighty",
            Title::Swift => "Swift",
        }
    }

    /// Flourish line this title contributes to an attack narration.
    pub fn flourish(&self) -> &'static str {
        match self {
            Title::Mighty => "with mighty force",
            Title::Swift => "in a swift blur",
        }
    }

    /// All titles the guild awards.
    pub fn all() -> [Title; 2] {
        [Title::Mighty, Title::Swift]
    }
}

impl FromStr for Title {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mighty" => Ok(Title::Mighty),
            "swift" => Ok(Title::Swift),
            _ => Err(ParseError::UnknownTitle(s.to_string())),
        }
    }
}

impl std::fmt::Display for Title {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
