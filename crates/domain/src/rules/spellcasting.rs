//! Spellcasting progression: caster types, slot tables, cantrips and the
//! learn/prepare transitions of a character's spell list.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::catalog::{fold_name, SpellCatalog};
use crate::entities::{Ability, Character, Spell, Spellcasting};
use crate::SpellbookError;

/// Shape of a class's spellcasting progression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CasterType {
    Full,
    Half,
    Warlock,
    #[serde(rename = "none")]
    NonCaster,
}

impl CasterType {
    pub fn for_class(class: &str) -> Self {
        match class.trim().to_lowercase().as_str() {
            "wizard" | "cleric" | "druid" | "bard" | "sorcerer" => Self::Full,
            "paladin" | "ranger" => Self::Half,
            "warlock" => Self::Warlock,
            _ => Self::NonCaster,
        }
    }

    pub fn is_caster(&self) -> bool {
        !matches!(self, Self::NonCaster)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Full => "full",
            Self::Half => "half",
            Self::Warlock => "warlock",
            Self::NonCaster => "none",
        }
    }
}

impl std::fmt::Display for CasterType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

const MAX_LEVEL: u8 = 20;

/// Full caster slots per character level (row) and spell level 1-9 (column).
const FULL_CASTER_SLOTS: [[u8; 9]; 21] = [
    [0, 0, 0, 0, 0, 0, 0, 0, 0],
    [2, 0, 0, 0, 0, 0, 0, 0, 0], // 1
    [3, 0, 0, 0, 0, 0, 0, 0, 0],
    [4, 2, 0, 0, 0, 0, 0, 0, 0],
    [4, 3, 0, 0, 0, 0, 0, 0, 0],
    [4, 3, 2, 0, 0, 0, 0, 0, 0], // 5
    [4, 3, 3, 0, 0, 0, 0, 0, 0],
    [4, 3, 3, 1, 0, 0, 0, 0, 0],
    [4, 3, 3, 2, 0, 0, 0, 0, 0],
    [4, 3, 3, 3, 1, 0, 0, 0, 0],
    [4, 3, 3, 3, 2, 0, 0, 0, 0], // 10
    [4, 3, 3, 3, 2, 1, 0, 0, 0],
    [4, 3, 3, 3, 2, 1, 0, 0, 0],
    [4, 3, 3, 3, 2, 1, 1, 0, 0],
    [4, 3, 3, 3, 2, 1, 1, 0, 0],
    [4, 3, 3, 3, 2, 1, 1, 1, 0], // 15
    [4, 3, 3, 3, 2, 1, 1, 1, 0],
    [4, 3, 3, 3, 2, 1, 1, 1, 1],
    [4, 3, 3, 3, 3, 1, 1, 1, 1],
    [4, 3, 3, 3, 3, 2, 1, 1, 1],
    [4, 3, 3, 3, 3, 2, 2, 1, 1], // 20
];

/// Pact magic: (slot level, number of slots) per warlock level.
const WARLOCK_SLOTS: [(u8, u8); 21] = [
    (0, 0),
    (1, 1), // 1
    (1, 2),
    (2, 2),
    (2, 2),
    (3, 2), // 5
    (3, 2),
    (4, 2),
    (4, 2),
    (5, 2),
    (5, 2), // 10
    (5, 3),
    (5, 3),
    (5, 3),
    (5, 3),
    (5, 3), // 15
    (5, 3),
    (5, 4),
    (5, 4),
    (5, 4),
    (5, 4), // 20
];

fn full_caster_row(level: u8) -> BTreeMap<u8, u8> {
    FULL_CASTER_SLOTS[usize::from(level.min(MAX_LEVEL))]
        .iter()
        .zip(1u8..)
        .filter(|(count, _)| **count > 0)
        .map(|(count, slot_level)| (slot_level, *count))
        .collect()
}

/// Spell slots by slot level. Empty below level 1 and for non-casters.
pub fn spell_slots(caster: CasterType, level: u8) -> BTreeMap<u8, u8> {
    if level < 1 {
        return BTreeMap::new();
    }
    match caster {
        CasterType::Full => full_caster_row(level),
        // Half casters use the full table at half their level, rounded down
        CasterType::Half => full_caster_row(level / 2),
        CasterType::Warlock => {
            let (slot_level, slots) = WARLOCK_SLOTS[usize::from(level.min(MAX_LEVEL))];
            if slot_level > 0 && slots > 0 {
                BTreeMap::from([(slot_level, slots)])
            } else {
                BTreeMap::new()
            }
        }
        CasterType::NonCaster => BTreeMap::new(),
    }
}

/// Highest slot level with at least one slot, or 0.
pub fn max_spell_level(caster: CasterType, level: u8) -> u8 {
    spell_slots(caster, level)
        .keys()
        .next_back()
        .copied()
        .unwrap_or(0)
}

pub fn cantrips_known(class: &str, level: u8) -> u8 {
    if level < 1 {
        return 0;
    }
    let tier = match level {
        1..=3 => 0,
        4..=9 => 1,
        _ => 2,
    };
    let table: [u8; 3] = match class.trim().to_lowercase().as_str() {
        "bard" | "warlock" => [2, 3, 4],
        "wizard" | "cleric" | "druid" => [3, 4, 5],
        "sorcerer" => [4, 5, 6],
        _ => return 0,
    };
    table[tier]
}

/// Classes that add spells to a fixed known list.
pub fn learns_spells(class: &str) -> bool {
    matches!(
        class.trim().to_lowercase().as_str(),
        "bard" | "sorcerer" | "warlock" | "ranger" | "wizard"
    )
}

/// Classes that prepare spells from their class list.
pub fn prepares_spells(class: &str) -> bool {
    matches!(
        class.trim().to_lowercase().as_str(),
        "cleric" | "druid" | "paladin" | "wizard"
    )
}

pub fn spellcasting_ability(class: &str) -> Option<Ability> {
    match class.trim().to_lowercase().as_str() {
        "wizard" => Some(Ability::Intelligence),
        "cleric" | "druid" | "ranger" => Some(Ability::Wisdom),
        "bard" | "sorcerer" | "warlock" | "paladin" => Some(Ability::Charisma),
        _ => None,
    }
}

/// 8 + proficiency + casting ability modifier.
pub fn spell_save_dc(character: &Character) -> Option<i32> {
    spell_attack_bonus(character).map(|bonus| bonus.saturating_add(8))
}

/// Proficiency + casting ability modifier.
pub fn spell_attack_bonus(character: &Character) -> Option<i32> {
    let ability = spellcasting_ability(&character.class)?;
    Some(
        character
            .proficiency_bonus
            .saturating_add(character.modifier(ability)),
    )
}

/// The first `count` class spells at or below `max_level`, by name, all
/// marked prepared.
pub fn pick_spells_for_class(
    catalog: &SpellCatalog,
    class: &str,
    max_level: u8,
    count: usize,
) -> Vec<Spell> {
    let mut pool: Vec<Spell> = catalog
        .spells_for_class(class)
        .iter()
        .filter(|s| s.level <= max_level)
        .cloned()
        .collect();
    pool.sort_by(|a, b| a.name.cmp(&b.name));
    pool.truncate(count);
    for spell in &mut pool {
        spell.prepared = true;
    }
    pool
}

pub fn spell_level_by_name(catalog: &SpellCatalog, name: &str) -> Option<u8> {
    catalog.level_of(name)
}

/// What a successful learn or prepare did to the spell list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpellChange {
    Added,
    AlreadyKnown,
}

/// Check the slot ceiling and return the catalog level of the spell.
fn castable_level(
    character: &Character,
    catalog: &SpellCatalog,
    spell: &str,
) -> Result<u8, SpellbookError> {
    let caster = CasterType::for_class(&character.class);
    let max = max_spell_level(caster, character.level);
    match catalog.level_of(spell) {
        Some(level) if max > 0 && level <= max => Ok(level),
        _ => Err(SpellbookError::TooHighLevel),
    }
}

/// Prepare a spell, adding it to the list when it isn't known yet.
///
/// Rejections leave the character unchanged.
pub fn prepare_spell(
    character: &mut Character,
    catalog: &SpellCatalog,
    spell: &str,
) -> Result<SpellChange, SpellbookError> {
    if !CasterType::for_class(&character.class).is_caster() {
        return Err(SpellbookError::CannotCast);
    }
    if learns_spells(&character.class) && !prepares_spells(&character.class) {
        return Err(SpellbookError::CannotPrepare);
    }
    let level = castable_level(character, catalog, spell)?;
    let name = fold_name(spell);

    let casting = character
        .spellcasting
        .get_or_insert_with(Spellcasting::default);
    if let Some(known) = casting.find_spell_mut(&name) {
        known.prepared = true;
        return Ok(SpellChange::AlreadyKnown);
    }
    casting.spells.push(Spell {
        prepared: true,
        ..Spell::new(name, level)
    });
    Ok(SpellChange::Added)
}

/// Learn a spell. Learning a known spell changes nothing.
pub fn learn_spell(
    character: &mut Character,
    catalog: &SpellCatalog,
    spell: &str,
) -> Result<SpellChange, SpellbookError> {
    if !CasterType::for_class(&character.class).is_caster() {
        return Err(SpellbookError::CannotCast);
    }
    if prepares_spells(&character.class) {
        return Err(SpellbookError::CannotLearn);
    }
    let level = castable_level(character, catalog, spell)?;
    let name = fold_name(spell);

    let casting = character
        .spellcasting
        .get_or_insert_with(Spellcasting::default);
    if casting.find_spell_mut(&name).is_some() {
        return Ok(SpellChange::AlreadyKnown);
    }
    casting.spells.push(Spell::new(name, level));
    Ok(SpellChange::Added)
}
