//! Training camps - the factories that muster equipped adventurers

use crate::adventurer::Adventurer;
use crate::class::AdventurerClass;

/// A camp bound to one class, producing fully equipped adventurers.
///
/// Construction only: a camp never mutates an adventurer after handing
/// it over. For one-off musters without keeping a camp around, use
/// [`TrainingCamp::muster`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrainingCamp {
    class: AdventurerClass,
}

impl TrainingCamp {
    /// Open a camp for `class`.
    pub fn new(class: AdventurerClass) -> Self {
        Self { class }
    }

    /// The class this camp trains.
    pub fn class(&self) -> AdventurerClass {
        self.class
    }

    /// Train a named adventurer: full HP, class kit, basic tactic, no
    /// titles.
    pub fn train(&self, name: impl Into<String>) -> Adventurer {
        let adventurer = Adventurer::new(name, self.class);
        tracing::debug!(name = adventurer.name(), class = %self.class, "trained adventurer");
        adventurer
    }

    /// One-shot muster without a standing camp.
    pub fn muster(class: AdventurerClass, name: impl Into<String>) -> Adventurer {
        TrainingCamp::new(class).train(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::equipment::EquipmentKit;
    use crate::tactic::Tactic;
    use valor_battle::Stance;

    #[test]
    fn test_camp_trains_its_class() {
        let camp = TrainingCamp::new(AdventurerClass::Archer);
        let robin = camp.train("Robin");
        assert_eq!(robin.class(), AdventurerClass::Archer);
        assert_eq!(robin.kit(), &EquipmentKit::for_class(AdventurerClass::Archer));
    }

    #[test]
    fn test_trained_adventurer_starts_fresh() {
        let mut roland = TrainingCamp::new(AdventurerClass::Knight).train("Roland");
        assert_eq!(roland.combatant().hp(), 100);
        assert_eq!(roland.combatant().stance(), Stance::Normal);
        assert_eq!(roland.tactic(), Tactic::Basic);
        assert!(roland.titles().is_empty());
    }

    #[test]
    fn test_one_shot_muster_matches_camp_train() {
        let from_camp = TrainingCamp::new(AdventurerClass::Lancer).train("Jobs");
        let one_shot = TrainingCamp::muster(AdventurerClass::Lancer, "Jobs");
        assert_eq!(one_shot.name(), from_camp.name());
        assert_eq!(one_shot.class(), from_camp.class());
        assert_eq!(one_shot.kit(), from_camp.kit());
    }
}
