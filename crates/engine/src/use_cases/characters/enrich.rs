//! Metadata enrichment of a stored character.

use serde::Serialize;
use sheetsmith_domain::{ArmorMeta, Character, Equipped, Spell, WeaponMeta};

use crate::infrastructure::ports::EnrichmentPort;

/// What one enrichment pass managed to fetch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct EnrichReport {
    pub weapon: bool,
    pub armor: bool,
    pub spells: usize,
}

/// Refresh weapon, armor and spell metadata in place.
///
/// Lookups that fail keep whatever the character already had.
pub async fn enrich_character(
    enrichment: &dyn EnrichmentPort,
    character: &mut Character,
) -> EnrichReport {
    let mut report = EnrichReport::default();

    if let Some(weapon) = character.equipment.main_hand.as_mut() {
        let name = weapon.name.trim().to_string();
        if !name.is_empty() {
            match enrichment.weapon_meta(&name).await {
                Ok(meta) => {
                    weapon.meta = Some(meta);
                    report.weapon = true;
                }
                Err(e) => tracing::warn!(weapon = %name, error = %e, "Weapon lookup failed"),
            }
        }
    }

    if let Some(armor) = character.equipment.armor.as_mut() {
        let name = armor.name.trim().to_string();
        if !name.is_empty() {
            match enrichment.armor_meta(&name).await {
                Ok(meta) => {
                    armor.meta = Some(meta);
                    report.armor = true;
                }
                Err(e) => tracing::warn!(armor = %name, error = %e, "Armor lookup failed"),
            }
        }
    }

    if let Some(casting) = character.spellcasting.as_mut() {
        for spell in &mut casting.spells {
            match enrichment.spell_meta(&spell.name).await {
                Ok(meta) => {
                    spell.school = Some(meta.school).filter(|s| !s.is_empty());
                    spell.range = Some(meta.range).filter(|r| !r.is_empty());
                    report.spells += 1;
                }
                Err(e) => tracing::debug!(spell = %spell.name, error = %e, "Spell lookup failed"),
            }
        }
    }

    report
}

/// Enriched metadata of one character, for inspection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Inspection {
    pub name: String,
    pub weapon: Option<Equipped<WeaponMeta>>,
    pub armor: Option<Equipped<ArmorMeta>>,
    /// Whether the character knows any spell at all.
    pub has_spells: bool,
    /// Spells that carry a school or a range.
    pub enriched_spells: Vec<Spell>,
}

impl Inspection {
    pub fn of(character: &Character) -> Self {
        let spells = character
            .spellcasting
            .as_ref()
            .map(|c| c.spells.as_slice())
            .unwrap_or_default();
        let shown = |name: &str| !name.trim().is_empty();

        Self {
            name: character.name.clone(),
            weapon: character
                .equipment
                .main_hand
                .clone()
                .filter(|w| shown(&w.name)),
            armor: character.equipment.armor.clone().filter(|a| shown(&a.name)),
            has_spells: !spells.is_empty(),
            enriched_spells: spells
                .iter()
                .filter(|s| s.school.is_some() || s.range.is_some())
                .cloned()
                .collect(),
        }
    }
}
