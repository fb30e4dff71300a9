//! Adventurer classes, training camps, equipment kits, and roster formats.
//!
//! This crate provides the guild layer on top of the combatant core: the
//! value-level collaborators that surround a fight without adding control
//! flow of their own.
//!
//! # Overview
//!
//! `valor-guild` sits above `valor-battle`:
//!
//! ```text
//! valor-battle (combatant + stance dispatch)
//!        │
//!        ▼
//! valor-guild (adventurers, camps, kits, rosters) ← THIS CRATE
//! ```
//!
//! # Main Types
//!
//! - [`AdventurerClass`] - the closed set of callings a camp can train
//! - [`EquipmentKit`] - a class's matched weapon and armor pair
//! - [`TrainingCamp`] - the factory that musters equipped adventurers
//! - [`Adventurer`] - identity, kit, titles, tactic, and a live
//!   [`Combatant`](valor_battle::Combatant)
//! - [`Roster`] - the JSON sheet format for saving and loading parties
//!
//! Everything here is plain construction and lookup; the only decision
//! logic lives in `valor-battle`'s stance dispatch, which
//! [`Adventurer::attack`] delegates to.
//!
//! # Example Usage
//!
//! ```
//! use valor_guild::{AdventurerClass, Tactic, Title, TrainingCamp};
//!
//! let mut knight = TrainingCamp::muster(AdventurerClass::Knight, "Roland");
//! knight.award_title(Title::Mighty);
//! knight.choose_tactic(Tactic::Skill);
//!
//! let narration = knight.attack();
//! assert_eq!(narration.lines().len(), 3);
//! ```

use thiserror::Error;

pub mod adventurer;
pub mod camp;
pub mod class;
pub mod equipment;
pub mod roster;
pub mod tactic;
pub mod title;

pub use adventurer::{Adventurer, AttackNarration};
pub use camp::TrainingCamp;
pub use class::AdventurerClass;
pub use equipment::{Armor, ArmorKind, EquipmentKit, Weapon, WeaponKind};
pub use roster::{AdventurerSheet, Roster, RosterError};
pub use tactic::Tactic;
pub use title::Title;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParseError {
    #[error("Unknown adventurer class: {0}")]
    UnknownClass(String),

    #[error("Unknown tactic: {0}")]
    UnknownTactic(String),

    #[error("Unknown title: {0}")]
    UnknownTitle(String),
}
