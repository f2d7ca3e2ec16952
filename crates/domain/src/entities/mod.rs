//! Character record types.

mod character;

pub use character::{
    Ability, AbilityScores, ArmorMeta, Character, Equipment, Equipped, Spell, Spellcasting,
    WeaponMeta,
};
