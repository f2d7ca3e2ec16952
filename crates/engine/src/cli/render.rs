//! Plain-text rendering for the command line.

use std::fmt::Write;

use sheetsmith_domain::{CasterType, Character, CharacterSheet};

use crate::use_cases::characters::Inspection;

/// The `view` output. `hide_slots` drops the slot rows of full casters only.
pub fn sheet(sheet: &CharacterSheet, hide_slots: bool) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Name: {}", sheet.name);
    let _ = writeln!(out, "Class: {}", sheet.class);
    let _ = writeln!(out, "Race: {}", sheet.race);
    let _ = writeln!(out, "Background: {}", sheet.background);
    let _ = writeln!(out, "Level: {}", sheet.level);

    let _ = writeln!(out, "Ability scores:");
    for line in &sheet.abilities {
        let _ = writeln!(
            out,
            "  {}: {} ({:+})",
            line.ability.short_name(),
            line.score,
            line.modifier
        );
    }
    let _ = writeln!(out, "Proficiency bonus: {:+}", sheet.proficiency_bonus);
    let _ = writeln!(out, "Skill proficiencies: {}", sheet.skills.join(", "));

    if let Some(weapon) = &sheet.main_hand {
        let _ = writeln!(out, "Main hand: {weapon}");
        if let Some(damage) = &sheet.weapon_damage {
            let _ = writeln!(out, "Weapon damage: {damage}");
        }
    }
    if let Some(off_hand) = &sheet.off_hand {
        let _ = writeln!(out, "Off hand: {off_hand}");
    }
    if let Some(armor) = &sheet.armor {
        let _ = writeln!(out, "Armor: {armor}");
    }
    if let Some(shield) = &sheet.shield {
        let _ = writeln!(out, "Shield: {shield}");
    }

    let hide = hide_slots && sheet.caster_type == CasterType::Full;
    if !hide && !sheet.spell_slots.is_empty() {
        let _ = writeln!(out, "Spell slots:");
        for row in &sheet.spell_slots {
            let _ = writeln!(out, "  Level {}: {}", row.level, row.count);
        }
    }
    if let Some(casting) = &sheet.spellcasting {
        let _ = writeln!(out, "Spellcasting ability: {}", casting.ability);
        let _ = writeln!(out, "Spell save DC: {}", casting.save_dc);
        let _ = writeln!(out, "Spell attack bonus: {:+}", casting.attack_bonus);
    }

    let _ = writeln!(out, "Armor class: {}", sheet.armor_class);
    let _ = writeln!(out, "Initiative bonus: {}", sheet.initiative);
    let _ = write!(out, "Passive perception: {}", sheet.passive_perception);
    out
}

/// The `list` output for one character.
pub fn list_entry(character: &Character) -> String {
    format!(
        "- {} ({}, level {}, {})\nBackground: {}  ProficiencyBonus: {}",
        character.name,
        character.class,
        character.level,
        character.race,
        character.background,
        character.proficiency_bonus
    )
}

/// The `inspect` output for one character.
pub fn inspection(inspection: &Inspection) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "== {} ==", inspection.name);

    if let Some(weapon) = &inspection.weapon {
        let _ = writeln!(out, "Weapon: {}", weapon.name);
        match &weapon.meta {
            Some(meta) => {
                let _ = writeln!(
                    out,
                    "  category={}, range.normal={}, two-handed={}",
                    meta.category, meta.range_normal, meta.two_handed
                );
            }
            None => {
                let _ = writeln!(out, "  (no enriched weapon data)");
            }
        }
    }

    if let Some(armor) = &inspection.armor {
        let _ = writeln!(out, "Armor: {}", armor.name);
        match &armor.meta {
            Some(meta) => {
                let _ = write!(
                    out,
                    "  armor_class={}, dex_bonus={}",
                    meta.base_ac, meta.dex_bonus
                );
                if let Some(max) = meta.max_dex_bonus {
                    let _ = write!(out, ", max_dex_bonus={max}");
                }
                let _ = writeln!(out);
            }
            None => {
                let _ = writeln!(out, "  (no enriched armor data)");
            }
        }
    }

    if inspection.has_spells {
        if inspection.enriched_spells.is_empty() {
            let _ = writeln!(out, "Spells: (no enriched spell data)");
        } else {
            let _ = writeln!(out, "Spells (enriched):");
            for spell in &inspection.enriched_spells {
                let _ = writeln!(
                    out,
                    "  - {}: school={}, range={}",
                    spell.name,
                    spell.school.as_deref().unwrap_or_default(),
                    spell.range.as_deref().unwrap_or_default()
                );
            }
        }
    }
    out
}
