//! Armor class, initiative, passive perception and weapon damage.

use crate::catalog::EquipmentCatalog;
use crate::entities::{Ability, Character};
use crate::rules::{ability_modifier, skills::has_skill};

const SHIELD_BONUS: i32 = 2;

/// How much of the DEX modifier a suit of armor lets through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DexCap {
    Uncapped,
    Max(i32),
    None,
}

/// Base AC and DEX allowance for the fixed light/medium/heavy armor set.
///
/// A single trailing " armor" is ignored, so "leather armor" and "leather"
/// resolve to the same entry.
pub fn armor_base_and_dex_cap(armor: &str) -> Option<(i32, DexCap)> {
    let name = armor.trim().to_lowercase();
    let name = name.strip_suffix(" armor").unwrap_or(name.as_str());

    let entry = match name {
        // Light
        "padded" | "leather" => (11, DexCap::Uncapped),
        "studded leather" => (12, DexCap::Uncapped),
        // Medium
        "hide" => (12, DexCap::Max(2)),
        "chain shirt" => (13, DexCap::Max(2)),
        "scale mail" | "breastplate" => (14, DexCap::Max(2)),
        "half plate" => (15, DexCap::Max(2)),
        // Heavy
        "ring mail" => (14, DexCap::None),
        "chain mail" | "chainmail" => (16, DexCap::None),
        "splint" => (17, DexCap::None),
        "plate" => (18, DexCap::None),
        _ => return None,
    };
    Some(entry)
}

pub fn armor_class(character: &Character, catalog: &EquipmentCatalog) -> i32 {
    let armor = character
        .equipment
        .armor_name()
        .map(|name| catalog.normalize(name))
        .filter(|name| !name.is_empty());
    let has_shield = character
        .equipment
        .shield
        .as_deref()
        .map(|name| catalog.normalize(name))
        .is_some_and(|name| !name.is_empty());

    let shield = if has_shield { SHIELD_BONUS } else { 0 };
    let dex = character.modifier(Ability::Dexterity);
    let class = character.class.trim().to_lowercase();

    match armor {
        // Unarmored defense
        None if !has_shield && class == "monk" => {
            10i32
                .saturating_add(dex)
                .saturating_add(character.modifier(Ability::Wisdom))
        }
        None if class == "barbarian" => {
            10i32
                .saturating_add(dex)
                .saturating_add(character.modifier(Ability::Constitution))
                .saturating_add(shield)
        }
        Some(name) => match armor_base_and_dex_cap(&name) {
            Some((base, cap)) => {
                let dex = match cap {
                    DexCap::Uncapped => dex,
                    DexCap::Max(max) => dex.min(max),
                    DexCap::None => 0,
                };
                base.saturating_add(dex).saturating_add(shield)
            }
            None => 10i32.saturating_add(dex).saturating_add(shield),
        },
        None => 10i32.saturating_add(dex).saturating_add(shield),
    }
}

pub fn initiative_bonus(character: &Character) -> i32 {
    character.modifier(Ability::Dexterity)
}

/// 10 + WIS modifier, plus proficiency when proficient in Perception.
pub fn passive_perception(character: &Character) -> i32 {
    let mut passive = 10i32.saturating_add(character.modifier(Ability::Wisdom));
    if has_skill(character, "perception") {
        passive = passive.saturating_add(character.proficiency_bonus);
    }
    passive
}

/// Damage expression for the main-hand weapon, e.g. "1d8 + 2" or "1d6 - 1".
///
/// Empty when nothing is wielded or the weapon has no known damage dice.
pub fn weapon_damage(character: &Character) -> String {
    let Some(weapon) = character.equipment.main_hand.as_ref() else {
        return String::new();
    };
    if weapon.name.trim().is_empty() {
        return String::new();
    }
    let Some(meta) = weapon.meta.as_ref() else {
        return String::new();
    };
    let dice = meta.damage_dice.trim();
    if dice.is_empty() {
        return String::new();
    }

    let str_mod = ability_modifier(character.abilities.strength);
    let dex_mod = ability_modifier(character.abilities.dexterity);
    let modifier = if meta.is_ranged() {
        dex_mod
    } else if meta.finesse {
        str_mod.max(dex_mod)
    } else {
        str_mod
    };

    if modifier >= 0 {
        format!("{dice} + {modifier}")
    } else {
        format!("{dice} - {}", -modifier)
    }
}
