//! Character record and its equipment/spellcasting state.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The six ability scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Ability {
    Strength,
    Dexterity,
    Constitution,
    Intelligence,
    Wisdom,
    Charisma,
}

impl Ability {
    pub const ALL: [Ability; 6] = [
        Ability::Strength,
        Ability::Dexterity,
        Ability::Constitution,
        Ability::Intelligence,
        Ability::Wisdom,
        Ability::Charisma,
    ];

    /// Parse either the full name or the three-letter short form.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "strength" | "str" => Some(Self::Strength),
            "dexterity" | "dex" => Some(Self::Dexterity),
            "constitution" | "con" => Some(Self::Constitution),
            "intelligence" | "int" => Some(Self::Intelligence),
            "wisdom" | "wis" => Some(Self::Wisdom),
            "charisma" | "cha" => Some(Self::Charisma),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Strength => "strength",
            Self::Dexterity => "dexterity",
            Self::Constitution => "constitution",
            Self::Intelligence => "intelligence",
            Self::Wisdom => "wisdom",
            Self::Charisma => "charisma",
        }
    }

    pub fn short_name(&self) -> &'static str {
        match self {
            Self::Strength => "STR",
            Self::Dexterity => "DEX",
            Self::Constitution => "CON",
            Self::Intelligence => "INT",
            Self::Wisdom => "WIS",
            Self::Charisma => "CHA",
        }
    }
}

impl std::fmt::Display for Ability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilityScores {
    pub strength: i32,
    pub dexterity: i32,
    pub constitution: i32,
    pub intelligence: i32,
    pub wisdom: i32,
    pub charisma: i32,
}

impl AbilityScores {
    pub fn new(scores: [i32; 6]) -> Self {
        let [strength, dexterity, constitution, intelligence, wisdom, charisma] = scores;
        Self {
            strength,
            dexterity,
            constitution,
            intelligence,
            wisdom,
            charisma,
        }
    }

    pub fn get(&self, ability: Ability) -> i32 {
        match ability {
            Ability::Strength => self.strength,
            Ability::Dexterity => self.dexterity,
            Ability::Constitution => self.constitution,
            Ability::Intelligence => self.intelligence,
            Ability::Wisdom => self.wisdom,
            Ability::Charisma => self.charisma,
        }
    }

    pub fn get_mut(&mut self, ability: Ability) -> &mut i32 {
        match ability {
            Ability::Strength => &mut self.strength,
            Ability::Dexterity => &mut self.dexterity,
            Ability::Constitution => &mut self.constitution,
            Ability::Intelligence => &mut self.intelligence,
            Ability::Wisdom => &mut self.wisdom,
            Ability::Charisma => &mut self.charisma,
        }
    }
}

impl Default for AbilityScores {
    fn default() -> Self {
        Self::new([10; 6])
    }
}

/// Weapon details fetched from an enrichment source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeaponMeta {
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub range_normal: i32,
    #[serde(default)]
    pub two_handed: bool,
    #[serde(default)]
    pub damage_dice: String,
    #[serde(default)]
    pub finesse: bool,
    /// "Melee" or "Ranged", compared case-insensitively.
    #[serde(default)]
    pub weapon_range: String,
}

impl WeaponMeta {
    pub fn is_ranged(&self) -> bool {
        self.weapon_range.trim().eq_ignore_ascii_case("ranged")
    }
}

/// Armor details fetched from an enrichment source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArmorMeta {
    #[serde(default)]
    pub base_ac: i32,
    #[serde(default)]
    pub dex_bonus: bool,
    /// `None` means no cap applies, which is different from a cap of 0.
    #[serde(default)]
    pub max_dex_bonus: Option<i32>,
}

/// An equipped item: a canonical name plus optional enrichment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Equipped<M> {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<M>,
}

impl<M> Equipped<M> {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            meta: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Equipment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub main_hand: Option<Equipped<WeaponMeta>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub off_hand: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub armor: Option<Equipped<ArmorMeta>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shield: Option<String>,
}

impl Equipment {
    pub fn weapon_name(&self) -> Option<&str> {
        self.main_hand.as_ref().map(|w| w.name.as_str())
    }

    pub fn weapon_meta(&self) -> Option<&WeaponMeta> {
        self.main_hand.as_ref().and_then(|w| w.meta.as_ref())
    }

    pub fn armor_name(&self) -> Option<&str> {
        self.armor.as_ref().map(|a| a.name.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Spell {
    pub name: String,
    pub level: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub school: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range: Option<String>,
    #[serde(default)]
    pub prepared: bool,
}

impl Spell {
    pub fn new(name: impl Into<String>, level: u8) -> Self {
        Self {
            name: name.into(),
            level,
            school: None,
            range: None,
            prepared: false,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Spellcasting {
    /// Slot level (1-9) to number of slots.
    #[serde(default)]
    pub slots_by_level: BTreeMap<u8, u8>,
    #[serde(default)]
    pub spells: Vec<Spell>,
}

impl Spellcasting {
    pub fn find_spell_mut(&mut self, name: &str) -> Option<&mut Spell> {
        let wanted = name.trim();
        self.spells
            .iter_mut()
            .find(|s| s.name.trim().eq_ignore_ascii_case(wanted))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    pub name: String,
    pub race: String,
    pub class: String,
    pub level: u8,
    #[serde(default)]
    pub background: String,
    pub abilities: AbilityScores,
    pub proficiency_bonus: i32,
    #[serde(default)]
    pub equipment: Equipment,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spellcasting: Option<Spellcasting>,
}

impl Character {
    pub fn score(&self, ability: Ability) -> i32 {
        self.abilities.get(ability)
    }

    pub fn modifier(&self, ability: Ability) -> i32 {
        crate::rules::ability_modifier(self.score(ability))
    }
}
