//! Action reports (what a combatant's act produces)

use super::stance::Stance;

/// Outcome of one `Combatant::act` call, issued by the stance that ended
/// up performing the action.
///
/// The report carries the same information as the classic status line
/// ("Fury stance, HP=60, attack +30%"); `Display` renders that line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActionReport {
    /// Stance that performed the action.
    pub stance: Stance,
    /// Hit points at the time of the action.
    pub hp: u32,
    /// Attack bonus in effect, as a percentage (0 when none).
    pub bonus_percent: u32,
}

impl ActionReport {
    /// Build a report for `stance` acting at `hp`.
    pub fn new(stance: Stance, hp: u32) -> Self {
        Self {
            stance,
            hp,
            bonus_percent: stance.attack_bonus_percent(),
        }
    }
}

impl std::fmt::Display for ActionReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.stance == Stance::Incapacitated {
            return write!(f, "unable to act");
        }
        write!(f, "{} stance, HP={}", self.stance, self.hp)?;
        if self.bonus_percent > 0 {
            write!(f, ", attack +{}%", self.bonus_percent)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_fills_bonus_from_stance() {
        let report = ActionReport::new(Stance::Fury, 55);
        assert_eq!(report.stance, Stance::Fury);
        assert_eq!(report.hp, 55);
        assert_eq!(report.bonus_percent, 30);

        let report = ActionReport::new(Stance::Normal, 90);
        assert_eq!(report.bonus_percent, 0);
    }

    #[test]
    fn test_display_normal() {
        let report = ActionReport::new(Stance::Normal, 85);
        assert_eq!(report.to_string(), "Normal stance, HP=85");
    }

    #[test]
    fn test_display_with_bonus() {
        let report = ActionReport::new(Stance::Fury, 60);
        assert_eq!(report.to_string(), "Fury stance, HP=60, attack +30%");

        let report = ActionReport::new(Stance::Desperate, 12);
        assert_eq!(report.to_string(), "Desperate stance, HP=12, attack +50%");
    }

    #[test]
    fn test_display_incapacitated_hides_hp() {
        let report = ActionReport::new(Stance::Incapacitated, 0);
        assert_eq!(report.to_string(), "unable to act");

        // Still a bare line even if the pool was refilled afterwards.
        let report = ActionReport::new(Stance::Incapacitated, 50);
        assert_eq!(report.to_string(), "unable to act");
    }
}
