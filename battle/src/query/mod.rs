//! Query helpers for combat decision making
//!
//! This module provides utilities for reasoning about HP bands without
//! touching a live combatant, useful for drivers and UIs.

mod bands;

pub use bands::{is_stale, stance_for_hp};
