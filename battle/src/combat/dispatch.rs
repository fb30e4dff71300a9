//! Dispatch logic: resolving which stance performs when a combatant acts

use crate::types::{ActionReport, Stance, DESPERATE_CEILING, FURY_CEILING};

use super::combatant::Combatant;

impl Combatant {
    /// Act under the current stance.
    ///
    /// Dispatch is chained: a stance whose band no longer contains the
    /// current HP shifts the combatant one band toward it and yields, and
    /// the loop re-dispatches under the new stance. Every shift strictly
    /// narrows the gap, so the chain settles in at most three shifts
    /// (e.g. Normal to Fury to Desperate to Incapacitated at 0 HP). The
    /// stance that finally matches performs the action and issues the
    /// report.
    ///
    /// `Incapacitated` is absorbing: it always performs ("unable to act")
    /// and never shifts, even after healing. Recovery takes an explicit
    /// `set_stance` from the caller.
    pub fn act(&mut self) -> ActionReport {
        loop {
            let stance = self.stance();
            if let Some(report) = stance.attack(self) {
                return report;
            }
        }
    }

    /// One stance reassignment during dispatch.
    fn shift(&mut self, next: Stance) {
        tracing::debug!(from = %self.stance(), to = %next, hp = self.hp(), "stance shift");
        self.set_stance(next);
    }
}

impl Stance {
    /// One dispatch step: perform this stance's action, or shift the
    /// combatant toward the band holding its HP and return `None` to
    /// request a re-dispatch.
    fn attack(self, combatant: &mut Combatant) -> Option<ActionReport> {
        let hp = combatant.hp();
        match self {
            Stance::Normal => {
                if hp > FURY_CEILING {
                    Some(ActionReport::new(Stance::Normal, hp))
                } else {
                    combatant.shift(Stance::Fury);
                    None
                }
            }
            Stance::Fury => {
                if hp > FURY_CEILING {
                    combatant.shift(Stance::Normal);
                    None
                } else if hp <= DESPERATE_CEILING {
                    combatant.shift(Stance::Desperate);
                    None
                } else {
                    Some(ActionReport::new(Stance::Fury, hp))
                }
            }
            Stance::Desperate => {
                if hp == 0 {
                    combatant.shift(Stance::Incapacitated);
                    None
                } else if hp > DESPERATE_CEILING {
                    combatant.shift(Stance::Fury);
                    None
                } else {
                    Some(ActionReport::new(Stance::Desperate, hp))
                }
            }
            // Terminal: never shifts, whatever the HP says.
            Stance::Incapacitated => Some(ActionReport::new(Stance::Incapacitated, hp)),
        }
    }
}
