//! Adventurers - named, equipped combatants with titles and a tactic

use valor_battle::{ActionReport, Combatant, Stance};

use crate::class::AdventurerClass;
use crate::equipment::EquipmentKit;
use crate::tactic::Tactic;
use crate::title::Title;

/// A guild member: identity and gear wrapped around a live [`Combatant`].
///
/// The adventurer itself makes no decisions. Titles and tactics are
/// cosmetic attachments, and [`attack`](Adventurer::attack) delegates
/// every behavioral question to the combatant's stance dispatch.
#[derive(Debug, Clone)]
pub struct Adventurer {
    name: String,
    class: AdventurerClass,
    kit: EquipmentKit,
    titles: Vec<Title>,
    tactic: Tactic,
    combatant: Combatant,
}

impl Adventurer {
    /// Assemble a fresh adventurer: full HP, basic tactic, no titles.
    /// Camps call this; most callers want [`TrainingCamp`](crate::TrainingCamp).
    pub fn new(name: impl Into<String>, class: AdventurerClass) -> Self {
        Self {
            name: name.into(),
            class,
            kit: EquipmentKit::for_class(class),
            titles: Vec::new(),
            tactic: Tactic::Basic,
            combatant: Combatant::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn class(&self) -> AdventurerClass {
        self.class
    }

    pub fn kit(&self) -> &EquipmentKit {
        &self.kit
    }

    /// Titles in the order they were awarded.
    pub fn titles(&self) -> &[Title] {
        &self.titles
    }

    pub fn tactic(&self) -> Tactic {
        self.tactic
    }

    /// The underlying combatant, for HP mutation and stance queries.
    pub fn combatant(&mut self) -> &mut Combatant {
        &mut self.combatant
    }

    /// Award an honorific. Later titles flourish before earlier ones.
    pub fn award_title(&mut self, title: Title) {
        self.titles.push(title);
    }

    /// Swap the fight tactic. Takes the tactic by value; nothing about
    /// the combatant changes.
    pub fn choose_tactic(&mut self, tactic: Tactic) {
        self.tactic = tactic;
    }

    /// Attack: run the combatant's stance dispatch and narrate the result.
    ///
    /// A fighting adventurer narrates flourishes (most recent title
    /// first), then the tactic announcement, then the stance report. An
    /// incapacitated one gets the bare "unable to act" report, with no
    /// flourish and no announcement.
    pub fn attack(&mut self) -> AttackNarration {
        let report = self.combatant.act();
        if report.stance == Stance::Incapacitated {
            return AttackNarration {
                flourishes: Vec::new(),
                announcement: None,
                report,
            };
        }
        AttackNarration {
            flourishes: self.titles.iter().rev().copied().collect(),
            announcement: Some(self.tactic),
            report,
        }
    }
}

/// Everything one attack says, in speaking order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttackNarration {
    /// Title flourishes, most recently earned first.
    pub flourishes: Vec<Title>,
    /// The tactic that announced the attack; `None` when unable to act.
    pub announcement: Option<Tactic>,
    /// The stance report that closed the narration.
    pub report: ActionReport,
}

impl AttackNarration {
    /// The narration as individual lines, in speaking order.
    pub fn lines(&self) -> Vec<String> {
        let mut lines: Vec<String> = self
            .flourishes
            .iter()
            .map(|t| t.flourish().to_string())
            .collect();
        if let Some(tactic) = self.announcement {
            lines.push(tactic.announcement().to_string());
        }
        lines.push(self.report.to_string());
        lines
    }
}

impl std::fmt::Display for AttackNarration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.lines().join("\n"))
    }
}
