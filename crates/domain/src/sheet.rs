//! Derived, display-ready view of a character.

use serde::Serialize;

use crate::catalog::EquipmentCatalog;
use crate::entities::{Ability, Character};
use crate::rules::{
    armor_class, cantrips_known, initiative_bonus, normalize_skill, passive_perception,
    spell_attack_bonus, spell_save_dc, spellcasting_ability, weapon_damage, CasterType,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AbilityLine {
    pub ability: Ability,
    pub score: i32,
    pub modifier: i32,
}

/// One "Level N: count" row. Level 0 is the cantrip count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SlotRow {
    pub level: u8,
    pub count: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpellcastingSummary {
    pub ability: Ability,
    pub save_dc: i32,
    pub attack_bonus: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CharacterSheet {
    pub name: String,
    pub class: String,
    pub race: String,
    pub background: String,
    pub level: u8,
    pub abilities: Vec<AbilityLine>,
    pub proficiency_bonus: i32,
    pub skills: Vec<String>,
    pub main_hand: Option<String>,
    pub weapon_damage: Option<String>,
    pub off_hand: Option<String>,
    pub armor: Option<String>,
    pub shield: Option<String>,
    pub caster_type: CasterType,
    pub spell_slots: Vec<SlotRow>,
    pub spellcasting: Option<SpellcastingSummary>,
    pub armor_class: i32,
    pub initiative: i32,
    pub passive_perception: i32,
}

fn shown(item: Option<&str>) -> Option<String> {
    item.map(str::trim)
        .filter(|i| !i.is_empty())
        .map(String::from)
}

/// Cantrips first, then the stored slots. Warlocks keep a stored level 0.
fn slot_rows(character: &Character, caster: CasterType) -> Vec<SlotRow> {
    let Some(casting) = character.spellcasting.as_ref() else {
        return Vec::new();
    };
    let mut rows = Vec::new();
    let cantrips = cantrips_known(&character.class, character.level);
    if cantrips > 0 {
        rows.push(SlotRow {
            level: 0,
            count: cantrips,
        });
    }
    let min_level = match caster {
        CasterType::Warlock => 0,
        _ => 1,
    };
    rows.extend(
        casting
            .slots_by_level
            .iter()
            .filter(|(level, _)| **level >= min_level)
            .map(|(level, count)| SlotRow {
                level: *level,
                count: *count,
            }),
    );
    rows
}

impl CharacterSheet {
    pub fn build(character: &Character, catalog: &EquipmentCatalog) -> Self {
        let caster = CasterType::for_class(&character.class);

        let abilities = Ability::ALL
            .into_iter()
            .map(|ability| AbilityLine {
                ability,
                score: character.score(ability),
                modifier: character.modifier(ability),
            })
            .collect();

        let mut skills: Vec<String> = character
            .skills
            .iter()
            .filter(|s| !s.trim().is_empty())
            .map(|s| normalize_skill(s))
            .collect();
        skills.sort();

        let main_hand = shown(character.equipment.weapon_name());
        let damage = weapon_damage(character);

        // Only full casters report their casting numbers
        let spellcasting = match (caster, character.spellcasting.as_ref()) {
            (CasterType::Full, Some(_)) => spellcasting_ability(&character.class).and_then(
                |ability| {
                    Some(SpellcastingSummary {
                        ability,
                        save_dc: spell_save_dc(character)?,
                        attack_bonus: spell_attack_bonus(character)?,
                    })
                },
            ),
            _ => None,
        };

        Self {
            name: character.name.clone(),
            class: character.class.trim().to_lowercase(),
            race: character.race.trim().to_lowercase(),
            background: character.background.trim().to_lowercase(),
            level: character.level,
            abilities,
            proficiency_bonus: character.proficiency_bonus,
            skills,
            weapon_damage: (main_hand.is_some() && !damage.is_empty()).then_some(damage),
            main_hand,
            off_hand: shown(character.equipment.off_hand.as_deref()),
            armor: shown(character.equipment.armor_name()),
            shield: shown(character.equipment.shield.as_deref()),
            caster_type: caster,
            spell_slots: slot_rows(character, caster),
            spellcasting,
            armor_class: armor_class(character, catalog),
            initiative: initiative_bonus(character),
            passive_perception: passive_perception(character),
        }
    }
}
