//! Domain types for combat stance tracking

mod report;
mod stance;

pub use report::ActionReport;
pub use stance::{Stance, DESPERATE_CEILING, FURY_CEILING, MAX_HP};
