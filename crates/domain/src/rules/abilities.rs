//! Ability modifiers, proficiency and racial score adjustments.

use crate::entities::{Ability, AbilityScores};

/// The standard array, assigned STR through CHA in order.
pub const STANDARD_ARRAY: [i32; 6] = [15, 14, 13, 12, 10, 8];

/// Ability modifier: floor((score - 10) / 2).
pub fn ability_modifier(score: i32) -> i32 {
    // computed in i64 so extreme scores cannot overflow; halving brings it back in range
    (i64::from(score) - 10).div_euclid(2) as i32
}

pub fn proficiency_bonus(level: u8) -> i32 {
    match level {
        17.. => 6,
        13..=16 => 5,
        9..=12 => 4,
        5..=8 => 3,
        _ => 2,
    }
}

pub fn standard_array() -> AbilityScores {
    AbilityScores::new(STANDARD_ARRAY)
}

/// Racial ability score increases, STR through CHA.
///
/// Halfling subraces are matched as substrings before the exact race names.
/// Unknown races get no increase.
pub fn racial_bonuses(race: &str) -> [i32; 6] {
    let race = race.trim().replace('-', " ").to_lowercase();

    if race.contains("lightfoot halfling") {
        return [0, 2, 0, 0, 0, 1];
    }
    if race.contains("stout halfling") {
        return [0, 2, 1, 0, 0, 0];
    }
    if race.contains("halfling") {
        return [0, 2, 0, 0, 0, 0];
    }

    match race.as_str() {
        "human" => [1, 1, 1, 1, 1, 1],
        "hill dwarf" => [0, 0, 2, 0, 1, 0],
        "dwarf" => [0, 0, 2, 0, 0, 0],
        "elf" => [0, 2, 0, 0, 0, 0],
        "dragonborn" => [2, 0, 0, 0, 0, 1],
        "gnome" => [0, 0, 0, 2, 0, 0],
        "half orc" => [2, 0, 1, 0, 0, 0],
        "tiefling" => [0, 0, 0, 1, 0, 2],
        _ => [0; 6],
    }
}

pub fn apply_racial_bonuses(scores: &mut AbilityScores, race: &str) {
    for (ability, bonus) in Ability::ALL.into_iter().zip(racial_bonuses(race)) {
        let score = scores.get_mut(ability);
        *score = score.saturating_add(bonus);
    }
}
