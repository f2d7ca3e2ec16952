//! Shared builders for unit tests.

use crate::entities::{AbilityScores, Character};

pub fn character(class: &str, scores: [i32; 6]) -> Character {
    Character {
        name: "Test".into(),
        race: "human".into(),
        class: class.into(),
        level: 1,
        background: String::new(),
        abilities: AbilityScores::new(scores),
        proficiency_bonus: 2,
        equipment: Default::default(),
        skills: Vec::new(),
        spellcasting: None,
    }
}
