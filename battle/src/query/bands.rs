//! Band lookup helpers for decision making

use crate::types::{Stance, DESPERATE_CEILING, FURY_CEILING};

/// The stance a combatant at `hp` settles into once it acts.
///
/// This is the band table as a pure function. Note that a live combatant
/// can disagree with it in two ways: its stance may be stale between a
/// mutation and the next act, and an incapacitated combatant stays
/// incapacitated whatever its HP says.
pub fn stance_for_hp(hp: u32) -> Stance {
    if hp == 0 {
        Stance::Incapacitated
    } else if hp <= DESPERATE_CEILING {
        Stance::Desperate
    } else if hp <= FURY_CEILING {
        Stance::Fury
    } else {
        Stance::Normal
    }
}

/// Whether the next act would shift out of `stance` at `hp`.
///
/// `Incapacitated` never shifts, so it is never stale, whatever the HP.
pub fn is_stale(stance: Stance, hp: u32) -> bool {
    match stance {
        Stance::Incapacitated => false,
        _ => !stance.contains(hp),
    }
}
