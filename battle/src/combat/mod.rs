//! Combatant state and action dispatch

mod combatant;
mod dispatch;

pub use combatant::Combatant;
