//! Combat stances and their hit point bands

use std::ops::RangeInclusive;

/// Hit point ceiling. `Combatant::heal` clamps here and the normal band
/// tops out here.
pub const MAX_HP: u32 = 100;

/// Highest HP at which a combatant still fights in fury; everything above
/// is the normal band.
pub const FURY_CEILING: u32 = 70;

/// Highest HP at which a combatant fights desperately; fury starts one
/// point above.
pub const DESPERATE_CEILING: u32 = 30;

/// Behavioral stance of a combatant, bound to a disjoint HP band.
///
/// A combatant always holds exactly one stance. The stance decides what
/// happens when the combatant acts; the combatant's own HP decides which
/// stance should be holding it (see `Combatant::act`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Stance {
    /// Fighting fit (71-100 HP).
    Normal,
    /// Wounded and raging (31-70 HP), attacks 30% harder.
    Fury,
    /// Cornered (1-30 HP), attacks 50% harder.
    Desperate,
    /// Out of the fight (0 HP). Absorbing: once entered, only an external
    /// `set_stance` leaves it, healing alone does not.
    Incapacitated,
}

impl Stance {
    /// Get display name
    pub fn as_str(&self) -> &'static str {
        match self {
            Stance::Normal => "Normal",
            Stance::Fury => "Fury",
            Stance::Desperate => "Desperate",
            Stance::Incapacitated => "Incapacitated",
        }
    }

    /// Attack bonus the stance grants, as a percentage.
    pub fn attack_bonus_percent(&self) -> u32 {
        match self {
            Stance::Normal => 0,
            Stance::Fury => 30,
            Stance::Desperate => 50,
            Stance::Incapacitated => 0,
        }
    }

    /// The HP band this stance is the correct stance for.
    pub fn band(&self) -> RangeInclusive<u32> {
        match self {
            Stance::Normal => (FURY_CEILING + 1)..=MAX_HP,
            Stance::Fury => (DESPERATE_CEILING + 1)..=FURY_CEILING,
            Stance::Desperate => 1..=DESPERATE_CEILING,
            Stance::Incapacitated => 0..=0,
        }
    }

    /// Check whether `hp` falls inside this stance's band.
    pub fn contains(&self, hp: u32) -> bool {
        self.band().contains(&hp)
    }

    /// All stances, band order from healthy to downed.
    pub fn all() -> [Stance; 4] {
        [
            Stance::Normal,
            Stance::Fury,
            Stance::Desperate,
            Stance::Incapacitated,
        ]
    }
}

impl std::fmt::Display for Stance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_str() {
        assert_eq!(Stance::Normal.as_str(), "Normal");
        assert_eq!(Stance::Fury.as_str(), "Fury");
        assert_eq!(Stance::Desperate.as_str(), "Desperate");
        assert_eq!(Stance::Incapacitated.as_str(), "Incapacitated");
    }

    #[test]
    fn test_attack_bonus() {
        assert_eq!(Stance::Normal.attack_bonus_percent(), 0);
        assert_eq!(Stance::Fury.attack_bonus_percent(), 30);
        assert_eq!(Stance::Desperate.attack_bonus_percent(), 50);
        assert_eq!(Stance::Incapacitated.attack_bonus_percent(), 0);
    }

    #[test]
    fn test_bands_are_disjoint_and_cover_all_hp() {
        for hp in 0..=MAX_HP {
            let holding: Vec<Stance> = Stance::all()
                .into_iter()
                .filter(|s| s.contains(hp))
                .collect();
            assert_eq!(holding.len(), 1, "hp {} held by {:?}", hp, holding);
        }
    }

    #[test]
    fn test_band_bounds() {
        assert_eq!(Stance::Normal.band(), 71..=100);
        assert_eq!(Stance::Fury.band(), 31..=70);
        assert_eq!(Stance::Desperate.band(), 1..=30);
        assert_eq!(Stance::Incapacitated.band(), 0..=0);
    }

    #[test]
    fn test_contains_boundaries() {
        assert!(Stance::Normal.contains(71));
        assert!(!Stance::Normal.contains(70));
        assert!(Stance::Fury.contains(70));
        assert!(Stance::Fury.contains(31));
        assert!(!Stance::Fury.contains(30));
        assert!(Stance::Desperate.contains(30));
        assert!(Stance::Desperate.contains(1));
        assert!(!Stance::Desperate.contains(0));
        assert!(Stance::Incapacitated.contains(0));
    }

    #[test]
    fn test_display() {
        assert_eq!(Stance::Fury.to_string(), "Fury");
    }
}
