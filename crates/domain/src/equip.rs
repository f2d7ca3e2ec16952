//! Putting weapons, armor and shields on a character.

use serde::{Deserialize, Serialize};

use crate::catalog::EquipmentCatalog;
use crate::entities::{Character, Equipped};
use crate::EquipError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Hand {
    #[default]
    MainHand,
    OffHand,
}

impl Hand {
    /// Accepts "main hand", "mainhand", "main-hand" and the off-hand forms.
    pub fn parse(raw: &str) -> Option<Self> {
        let folded: String = raw
            .to_lowercase()
            .chars()
            .filter(|c| c.is_alphanumeric())
            .collect();
        match folded.as_str() {
            "" | "main" | "mainhand" => Some(Self::MainHand),
            "off" | "offhand" => Some(Self::OffHand),
            _ => None,
        }
    }
}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MainHand => write!(f, "main hand"),
            Self::OffHand => write!(f, "off hand"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquipRequest {
    #[serde(default)]
    pub weapon: Option<String>,
    #[serde(default)]
    pub hand: Hand,
    #[serde(default)]
    pub armor: Option<String>,
    #[serde(default)]
    pub shield: Option<String>,
}

/// Where an item went.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Slot {
    Hand(Hand),
    Armor,
    Shield,
}

impl std::fmt::Display for Slot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Hand(hand) => write!(f, "{hand}"),
            Self::Armor => write!(f, "armor"),
            Self::Shield => write!(f, "shield"),
        }
    }
}

/// One item that ended up on the character.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EquipOutcome {
    pub slot: Slot,
    pub name: String,
    /// The catalog is loaded but doesn't list this item.
    pub unknown: bool,
}

fn requested(item: &Option<String>) -> Option<&str> {
    item.as_deref().map(str::trim).filter(|i| !i.is_empty())
}

/// Equip the requested items.
///
/// A weapon goes into a free hand; an occupied hand rejects the whole request
/// before anything changes. Armor and shield replace what is worn.
pub fn equip(
    character: &mut Character,
    catalog: &EquipmentCatalog,
    request: &EquipRequest,
) -> Result<Vec<EquipOutcome>, EquipError> {
    let outcome = |slot: Slot, raw: &str| {
        let name = catalog.normalize(raw);
        EquipOutcome {
            slot,
            unknown: !catalog.is_empty() && !catalog.contains(&name),
            name,
        }
    };

    let weapon = requested(&request.weapon).map(|w| outcome(Slot::Hand(request.hand), w));
    if weapon.is_some() {
        match request.hand {
            Hand::MainHand => {
                if let Some(current) = character.equipment.weapon_name() {
                    return Err(EquipError::MainHandOccupied(current.to_string()));
                }
            }
            Hand::OffHand => {
                if let Some(current) = character.equipment.off_hand.as_deref() {
                    return Err(EquipError::OffHandOccupied(current.to_string()));
                }
            }
        }
    }

    let mut outcomes = Vec::new();
    if let Some(weapon) = weapon {
        match request.hand {
            Hand::MainHand => {
                character.equipment.main_hand = Some(Equipped::named(weapon.name.clone()))
            }
            Hand::OffHand => character.equipment.off_hand = Some(weapon.name.clone()),
        }
        outcomes.push(weapon);
    }
    if let Some(armor) = requested(&request.armor).map(|a| outcome(Slot::Armor, a)) {
        character.equipment.armor = Some(Equipped::named(armor.name.clone()));
        outcomes.push(armor);
    }
    if let Some(shield) = requested(&request.shield).map(|s| outcome(Slot::Shield, s)) {
        character.equipment.shield = Some(shield.name.clone());
        outcomes.push(shield);
    }
    Ok(outcomes)
}
