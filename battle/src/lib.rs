//! Combat stance tracking and domain types for HP-driven skirmish entities.
//!
//! This crate provides the combatant core shared by higher-level components:
//! one entity's hit point pool coupled to a behavioral stance, where the
//! stance decides what an action does and the HP decides which stance should
//! be in charge.
//!
//! # Overview
//!
//! `valor-battle` sits below the guild layer:
//!
//! ```text
//! valor-battle (combatant + stance dispatch) ← THIS CRATE
//!        │
//!        └─> valor-guild (adventurers, camps, narration)
//! ```
//!
//! # Main Types
//!
//! - [`Combatant`] - hit point pool plus current stance, with `heal`,
//!   `damage`, and the `act` entry point
//! - [`Stance`] - the closed set of behavioral variants (Normal, Fury,
//!   Desperate, Incapacitated), each bound to a disjoint HP band
//! - [`ActionReport`] - structured outcome of one act, with a status-line
//!   `Display`
//!
//! # How dispatch works
//!
//! Transitions are lazy: `heal` and `damage` only move the HP. When `act`
//! is called, the current stance either performs (its band contains the
//! HP) or shifts the combatant one band toward the HP and lets dispatch
//! re-evaluate, settling in at most three shifts. The one exception is
//! [`Stance::Incapacitated`], which always performs "unable to act" and
//! never shifts; only an external [`Combatant::set_stance`] brings a
//! downed combatant back.
//!
//! # Example Usage
//!
//! ```
//! use valor_battle::{Combatant, Stance};
//!
//! let mut fighter = Combatant::new();
//! fighter.damage(45);
//!
//! let report = fighter.act();
//! assert_eq!(report.stance, Stance::Fury);
//! assert_eq!(report.to_string(), "Fury stance, HP=55, attack +30%");
//! ```

pub mod combat;
pub mod query;
pub mod types;

// Re-export main types at crate root for convenience
pub use combat::Combatant;
pub use query::{is_stale, stance_for_hp};
pub use types::{ActionReport, Stance, DESPERATE_CEILING, FURY_CEILING, MAX_HP};
