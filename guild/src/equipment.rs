//! Equipment kits - each class's matched weapon and armor pair

use serde::{Deserialize, Serialize};

use crate::class::AdventurerClass;

/// Weapon families the camps hand out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeaponKind {
    LongSword,
    Bow,
    Spear,
}

impl WeaponKind {
    /// Get display name
    pub fn as_str(&self) -> &'static str {
        match self {
            WeaponKind::LongSword => "long sword",
            WeaponKind::Bow => "bow",
            WeaponKind::Spear => "spear",
        }
    }
}

impl std::fmt::Display for WeaponKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Armor families the camps hand out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArmorKind {
    Plate,
    Leather,
}

impl ArmorKind {
    /// Get display name
    pub fn as_str(&self) -> &'static str {
        match self {
            ArmorKind::Plate => "plate",
            ArmorKind::Leather => "leather",
        }
    }
}

impl std::fmt::Display for ArmorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A weapon: kind plus attack power and reach.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Weapon {
    pub kind: WeaponKind,
    pub atk: u32,
    pub range: u32,
}

impl std::fmt::Display for Weapon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (atk {}, range {})", self.kind, self.atk, self.range)
    }
}

/// A piece of armor: kind plus defence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Armor {
    pub kind: ArmorKind,
    pub defence: u32,
}

impl std::fmt::Display for Armor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (def {})", self.kind, self.defence)
    }
}

/// The full set of gear a class fights with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquipmentKit {
    pub weapon: Weapon,
    pub armor: Armor,
}

impl EquipmentKit {
    /// Look up the kit a class is issued. Pure lookup, no other branching.
    pub fn for_class(class: AdventurerClass) -> Self {
        match class {
            AdventurerClass::Knight => EquipmentKit {
                weapon: Weapon {
                    kind: WeaponKind::LongSword,
                    atk: 10,
                    range: 3,
                },
                armor: Armor {
                    kind: ArmorKind::Plate,
                    defence: 10,
                },
            },
            AdventurerClass::Archer => EquipmentKit {
                weapon: Weapon {
                    kind: WeaponKind::Bow,
                    atk: 5,
                    range: 10,
                },
                armor: Armor {
                    kind: ArmorKind::Leather,
                    defence: 8,
                },
            },
            AdventurerClass::Lancer => EquipmentKit {
                weapon: Weapon {
                    kind: WeaponKind::Spear,
                    atk: 7,
                    range: 5,
                },
                armor: Armor {
                    kind: ArmorKind::Leather,
                    defence: 8,
                },
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_knight_kit() {
        let kit = EquipmentKit::for_class(AdventurerClass::Knight);
        assert_eq!(kit.weapon.kind, WeaponKind::LongSword);
        assert_eq!(kit.weapon.atk, 10);
        assert_eq!(kit.weapon.range, 3);
        assert_eq!(kit.armor.kind, ArmorKind::Plate);
        assert_eq!(kit.armor.defence, 10);
    }

    #[test]
    fn test_archer_kit() {
        let kit = EquipmentKit::for_class(AdventurerClass::Archer);
        assert_eq!(kit.weapon.kind, WeaponKind::Bow);
        assert_eq!(kit.weapon.atk, 5);
        assert_eq!(kit.weapon.range, 10);
        assert_eq!(kit.armor.kind, ArmorKind::Leather);
        assert_eq!(kit.armor.defence, 8);
    }

    #[test]
    fn test_lancer_kit() {
        let kit = EquipmentKit::for_class(AdventurerClass::Lancer);
        assert_eq!(kit.weapon.kind, WeaponKind::Spear);
        assert_eq!(kit.weapon.atk, 7);
        assert_eq!(kit.weapon.range, 5);
        assert_eq!(kit.armor.kind, ArmorKind::Leather);
    }

    #[test]
    fn test_kit_display() {
        let kit = EquipmentKit::for_class(AdventurerClass::Knight);
        assert_eq!(kit.weapon.to_string(), "long sword (atk 10, range 3)");
        assert_eq!(kit.armor.to_string(), "plate (def 10)");
    }
}
