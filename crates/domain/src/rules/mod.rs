//! Fixed-ruleset formulas and lookup tables.
//!
//! Every function here is a pure read over a character and the catalogs,
//! except the spell-list transitions, which only touch the character passed in.

pub mod abilities;
pub mod combat;
pub mod skills;
pub mod spellcasting;

pub use abilities::{
    ability_modifier, apply_racial_bonuses, proficiency_bonus, racial_bonuses, standard_array,
    STANDARD_ARRAY,
};
pub use combat::{
    armor_base_and_dex_cap, armor_class, initiative_bonus, passive_perception, weapon_damage,
    DexCap,
};
pub use skills::{
    default_background_skills, default_class_skills, final_skills, has_skill, normalize_skill,
};
pub use spellcasting::{
    cantrips_known, learn_spell, learns_spells, max_spell_level, pick_spells_for_class,
    prepare_spell, prepares_spells, spell_attack_bonus, spell_level_by_name, spell_save_dc,
    spell_slots, spellcasting_ability, CasterType, SpellChange,
};
