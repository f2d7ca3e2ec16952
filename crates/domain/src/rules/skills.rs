//! Skill proficiencies from class, background and explicit choices.

use crate::entities::Character;

fn class_skill_options(class: &str) -> &'static [&'static str] {
    match class {
        "barbarian" => &[
            "Animal Handling",
            "Athletics",
            "Intimidation",
            "Nature",
            "Perception",
            "Survival",
        ],
        "fighter" => &[
            "Acrobatics",
            "Animal Handling",
            "Athletics",
            "History",
            "Insight",
            "Intimidation",
            "Perception",
            "Survival",
        ],
        "cleric" => &["History", "Insight", "Medicine", "Persuasion", "Religion"],
        "wizard" => &[
            "Arcana",
            "History",
            "Insight",
            "Investigation",
            "Medicine",
            "Religion",
        ],
        "rogue" => &[
            "Acrobatics",
            "Athletics",
            "Deception",
            "Insight",
            "Intimidation",
            "Investigation",
            "Perception",
            "Performance",
            "Persuasion",
            "Sleight of Hand",
            "Stealth",
        ],
        "ranger" => &[
            "Animal Handling",
            "Athletics",
            "Insight",
            "Investigation",
            "Nature",
            "Perception",
            "Stealth",
            "Survival",
        ],
        "paladin" => &[
            "Athletics",
            "Insight",
            "Intimidation",
            "Medicine",
            "Persuasion",
            "Religion",
        ],
        "warlock" => &[
            "Arcana",
            "Deception",
            "History",
            "Intimidation",
            "Investigation",
            "Nature",
            "Religion",
        ],
        "monk" => &[
            "Acrobatics",
            "Athletics",
            "History",
            "Insight",
            "Religion",
            "Stealth",
        ],
        _ => &[],
    }
}

fn class_skill_count(class: &str) -> usize {
    match class {
        "rogue" => 4,
        "ranger" => 3,
        _ => 2,
    }
}

/// Lowercase, treat `_` and `-` as spaces and collapse whitespace.
pub fn normalize_skill(name: &str) -> String {
    name.to_lowercase()
        .replace(['_', '-'], " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// The alphabetically first N skills from the class list.
pub fn default_class_skills(class: &str) -> Vec<String> {
    let class = class.trim().to_lowercase();
    let mut options: Vec<&str> = class_skill_options(&class).to_vec();
    options.sort_unstable();
    options.truncate(class_skill_count(&class));
    options.into_iter().map(String::from).collect()
}

pub fn default_background_skills(background: &str) -> Vec<String> {
    match background.trim().to_lowercase().as_str() {
        "acolyte" => vec!["Insight".to_string(), "Religion".to_string()],
        _ => Vec::new(),
    }
}

/// Explicit skills (or the class defaults) plus background skills, sorted.
///
/// Duplicates between the two sources are kept.
pub fn final_skills(class: &str, background: &str, provided: &[String]) -> Vec<String> {
    let mut skills: Vec<String> = if provided.is_empty() {
        default_class_skills(class)
            .iter()
            .map(|s| normalize_skill(s))
            .collect()
    } else {
        provided
            .iter()
            .filter(|s| !s.trim().is_empty())
            .map(|s| normalize_skill(s))
            .collect()
    };

    if !background.is_empty() {
        skills.extend(
            default_background_skills(background)
                .iter()
                .map(|s| normalize_skill(s)),
        );
    }
    skills.sort();
    skills
}

pub fn has_skill(character: &Character, skill: &str) -> bool {
    let wanted = normalize_skill(skill);
    character
        .skills
        .iter()
        .any(|s| normalize_skill(s) == wanted)
}
