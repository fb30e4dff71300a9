//! Combatant - the stateful entity whose HP and stance are tracked

use crate::types::{Stance, MAX_HP};

/// A single fighting entity: a bounded hit point pool plus the stance
/// currently holding it.
///
/// HP stays within `0..=MAX_HP` across every mutator. The stance is only
/// guaranteed to match the HP band after `act` returns; between a `heal`
/// or `damage` call and the next `act`, it may be stale (transitions are
/// taken lazily, at dispatch time).
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Combatant {
    /// Current hit points (0..=MAX_HP).
    hp: u32,
    /// Stance holding the combatant. Replaced, never shared.
    stance: Stance,
}

impl Combatant {
    /// Create a combatant at full HP in the matching (normal) stance.
    pub fn new() -> Self {
        Self {
            hp: MAX_HP,
            stance: Stance::Normal,
        }
    }

    /// Current hit points.
    pub fn hp(&self) -> u32 {
        self.hp
    }

    /// Current stance.
    pub fn stance(&self) -> Stance {
        self.stance
    }

    /// Replace the current stance. No band check: callers own the
    /// consequences, and `act` self-corrects everything except a manual
    /// push into `Incapacitated`.
    pub fn set_stance(&mut self, stance: Stance) {
        self.stance = stance;
    }

    /// Restore hit points, clamped to `MAX_HP`.
    ///
    /// A zero amount is a hard reset: it sets HP to 0 instead of leaving
    /// it unchanged. Callers feeding drain effects through `heal(0)`
    /// depend on this.
    pub fn heal(&mut self, amount: u32) {
        if amount == 0 {
            self.hp = 0;
        } else {
            self.hp = self.hp.saturating_add(amount).min(MAX_HP);
        }
    }

    /// Take damage, clamped at 0.
    pub fn damage(&mut self, amount: u32) {
        self.hp = self.hp.saturating_sub(amount);
    }
}

impl Default for Combatant {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_combatant() {
        let combatant = Combatant::new();
        assert_eq!(combatant.hp(), 100);
        assert_eq!(combatant.stance(), Stance::Normal);
    }

    #[test]
    fn test_damage_clamps_at_zero() {
        let mut combatant = Combatant::new();
        combatant.damage(30);
        assert_eq!(combatant.hp(), 70);

        combatant.damage(500);
        assert_eq!(combatant.hp(), 0);
    }

    #[test]
    fn test_heal_clamps_at_max() {
        let mut combatant = Combatant::new();
        combatant.damage(60);
        combatant.heal(25);
        assert_eq!(combatant.hp(), 65);

        combatant.heal(900);
        assert_eq!(combatant.hp(), 100);
    }

    #[test]
    fn test_heal_zero_resets_to_zero() {
        let mut combatant = Combatant::new();
        combatant.heal(0);
        assert_eq!(combatant.hp(), 0);

        combatant.heal(40);
        assert_eq!(combatant.hp(), 40);
        combatant.heal(0);
        assert_eq!(combatant.hp(), 0);
    }

    #[test]
    fn test_hp_stays_in_bounds_across_sequences() {
        let mut combatant = Combatant::new();
        let calls: [(bool, u32); 10] = [
            (true, 17),
            (false, 110),
            (true, 55),
            (true, 200),
            (false, 3),
            (true, 0),
            (false, 0),
            (true, 99),
            (false, 98),
            (true, 1),
        ];
        for (is_heal, amount) in calls {
            if is_heal {
                combatant.heal(amount);
            } else {
                combatant.damage(amount);
            }
            assert!(combatant.hp() <= 100, "hp escaped bounds: {}", combatant.hp());
        }
    }

    #[test]
    fn test_set_stance_is_unchecked() {
        let mut combatant = Combatant::new();
        combatant.set_stance(Stance::Desperate);
        assert_eq!(combatant.stance(), Stance::Desperate);
        assert_eq!(combatant.hp(), 100); // HP untouched
    }

    #[test]
    fn test_mutators_do_not_touch_stance() {
        let mut combatant = Combatant::new();
        combatant.damage(80);
        // Stale until the next act() call.
        assert_eq!(combatant.stance(), Stance::Normal);
    }
}
