//! Roster sheets - the JSON party format and its validation

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::adventurer::Adventurer;
use crate::camp::TrainingCamp;
use crate::class::AdventurerClass;
use crate::tactic::Tactic;
use crate::title::Title;

#[derive(Error, Debug)]
pub enum RosterError {
    #[error("Invalid roster JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Adventurer sheet has a blank name")]
    BlankName,

    #[error("Duplicate adventurer name: {0}")]
    DuplicateName(String),
}

/// One saved adventurer: identity plus the cosmetic attachments worth
/// persisting. HP and stance are not saved; a mustered adventurer always
/// starts fresh.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdventurerSheet {
    pub name: String,
    pub class: AdventurerClass,
    #[serde(default)]
    pub titles: Vec<Title>,
    #[serde(default = "default_tactic")]
    pub tactic: Tactic,
}

fn default_tactic() -> Tactic {
    Tactic::Basic
}

/// A saved party of sheets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    pub adventurers: Vec<AdventurerSheet>,
}

impl Roster {
    /// Parse and validate a roster from JSON.
    pub fn from_json(json: &str) -> Result<Self, RosterError> {
        let roster: Roster = serde_json::from_str(json)?;
        roster.validate()?;
        Ok(roster)
    }

    /// Serialize to pretty JSON.
    pub fn to_json(&self) -> Result<String, RosterError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject blank and duplicate names.
    fn validate(&self) -> Result<(), RosterError> {
        let mut seen: Vec<&str> = Vec::new();
        for sheet in &self.adventurers {
            if sheet.name.trim().is_empty() {
                return Err(RosterError::BlankName);
            }
            if seen.contains(&sheet.name.as_str()) {
                return Err(RosterError::DuplicateName(sheet.name.clone()));
            }
            seen.push(&sheet.name);
        }
        Ok(())
    }

    /// Muster every sheet into a live adventurer via the camps, restoring
    /// titles in award order and the chosen tactic.
    pub fn muster(&self) -> Vec<Adventurer> {
        self.adventurers
            .iter()
            .map(|sheet| {
                let mut adventurer = TrainingCamp::muster(sheet.class, sheet.name.clone());
                for title in &sheet.titles {
                    adventurer.award_title(*title);
                }
                adventurer.choose_tactic(sheet.tactic);
                adventurer
            })
            .collect()
    }
}
