//! Fight tactics - interchangeable attack announcements

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ParseError;

/// The attack approach an adventurer currently fights with.
///
/// An adventurer holds exactly one tactic and swaps it by value with
/// [`Adventurer::choose_tactic`](crate::Adventurer::choose_tactic). A
/// tactic only changes the announcement line of the attack narration;
/// it never touches the combatant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tactic {
    /// Plain weapon attack.
    Basic,
    /// All-out skill attack.
    Skill,
    /// Thrown-item attack (the torch trick).
    Item,
}

impl Tactic {
    /// Get display name
    pub fn as_str(&self) -> &'static str {
        match self {
            Tactic::Basic => "Basic",
            Tactic::Skill => "Skill",
            Tactic::Item => "Item",
        }
    }

    /// Announcement line this tactic contributes to an attack narration.
    pub fn announcement(&self) -> &'static str {
        match self {
            Tactic::Basic => "attacks with a plain strike",
            Tactic::Skill => "unleashes a punishing skill",
            Tactic::Item => "hurls a lit torch",
        }
    }

    /// All tactics an adventurer can choose.
    pub fn all() -> [Tactic; 3] {
        [Tactic::Basic, Tactic::Skill, Tactic::Item]
    }
}

impl FromStr for Tactic {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "basic" => Ok(Tactic::Basic),
            "skill" => Ok(Tactic::Skill),
            "item" => Ok(Tactic::Item),
            _ => Err(ParseError::UnknownTactic(s.to_string())),
        }
    }
}

impl std::fmt::Display for Tactic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_announcements_are_distinct() {
        let lines: Vec<&str> = Tactic::all().iter().map(|t| t.announcement()).collect();
        assert_eq!(lines.len(), 3);
        assert!(lines.windows(2).all(|w| w[0] != w[1]));
    }

    #[test]
    fn test_parse_tactic() {
        assert_eq!("basic".parse(), Ok(Tactic::Basic));
        assert_eq!("Skill".parse(), Ok(Tactic::Skill));
        assert_eq!(" item ".parse(), Ok(Tactic::Item));
    }

    #[test]
    fn test_parse_unknown_tactic() {
        let err = "charge".parse::<Tactic>().unwrap_err();
        assert!(matches!(err, ParseError::UnknownTactic(ref s) if s == "charge"));
    }

    #[test]
    fn test_display_round_trips() {
        for tactic in Tactic::all() {
            assert_eq!(tactic.to_string().parse(), Ok(tactic));
        }
    }
}
