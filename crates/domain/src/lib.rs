//! Sheetsmith domain: character records, reference catalogs and the fixed
//! 5e rules that turn base attributes into derived statistics.
//!
//! Nothing in this crate performs I/O. Catalogs are built from parsed
//! [`catalog::Table`]s and passed explicitly to the resolvers that need them.

pub mod catalog;
pub mod creation;
pub mod entities;
pub mod equip;
pub mod error;
pub mod rules;
pub mod sheet;

#[cfg(test)]
pub(crate) mod test_fixtures;

pub use catalog::{fold_name, Catalogs, EquipmentCatalog, SpellCatalog, Table};
pub use creation::{create_character, NewCharacter, ScoreChoices};
pub use entities::{
    Ability, AbilityScores, ArmorMeta, Character, Equipment, Equipped, Spell, Spellcasting,
    WeaponMeta,
};
pub use equip::{equip, EquipOutcome, EquipRequest, Hand, Slot};
pub use error::{CatalogError, CreationError, EquipError, SpellbookError};
pub use rules::{CasterType, SpellChange};
pub use sheet::{AbilityLine, CharacterSheet, SlotRow, SpellcastingSummary};
