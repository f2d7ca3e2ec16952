//! Building a new character from creation choices.

use serde::{Deserialize, Serialize};

use crate::catalog::Catalogs;
use crate::entities::{Ability, AbilityScores, Character, Equipment, Equipped, Spellcasting};
use crate::rules::{
    apply_racial_bonuses, final_skills, max_spell_level, pick_spells_for_class,
    proficiency_bonus, spell_slots, standard_array, CasterType,
};
use crate::CreationError;

pub const DEFAULT_BACKGROUND: &str = "acolyte";

/// Spells granted to a new caster from its class list.
pub const STARTING_SPELLS: usize = 4;

/// Base scores as entered. A missing or zero score counts as not provided.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreChoices {
    #[serde(default)]
    pub strength: Option<i32>,
    #[serde(default)]
    pub dexterity: Option<i32>,
    #[serde(default)]
    pub constitution: Option<i32>,
    #[serde(default)]
    pub intelligence: Option<i32>,
    #[serde(default)]
    pub wisdom: Option<i32>,
    #[serde(default)]
    pub charisma: Option<i32>,
}

impl ScoreChoices {
    fn get(&self, ability: Ability) -> Option<i32> {
        let score = match ability {
            Ability::Strength => self.strength,
            Ability::Dexterity => self.dexterity,
            Ability::Constitution => self.constitution,
            Ability::Intelligence => self.intelligence,
            Ability::Wisdom => self.wisdom,
            Ability::Charisma => self.charisma,
        };
        score.filter(|s| *s != 0)
    }

    /// All six given: used as-is. Some given: the rest default to 10.
    /// None given: the standard array.
    pub fn base_scores(&self) -> AbilityScores {
        if Ability::ALL.iter().all(|a| self.get(*a).is_none()) {
            return standard_array();
        }
        let mut scores = AbilityScores::default();
        for ability in Ability::ALL {
            if let Some(score) = self.get(ability) {
                *scores.get_mut(ability) = score;
            }
        }
        scores
    }
}

/// Everything a player chooses when creating a character.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCharacter {
    pub name: String,
    #[serde(default)]
    pub race: String,
    #[serde(default)]
    pub class: String,
    #[serde(default)]
    pub level: u8,
    #[serde(default)]
    pub background: Option<String>,
    #[serde(default, alias = "ability_scores")]
    pub scores: ScoreChoices,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub weapon: Option<String>,
    #[serde(default)]
    pub armor: Option<String>,
    #[serde(default)]
    pub shield: Option<String>,
    #[serde(default, alias = "offhand")]
    pub off_hand: Option<String>,
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Build a fully derived character.
///
/// Racial bonuses are added to the base scores, proficiency follows the
/// level, and casters start with slots plus the first few class spells.
pub fn create_character(
    choices: &NewCharacter,
    catalogs: &Catalogs,
) -> Result<Character, CreationError> {
    let name = choices.name.trim();
    if name.is_empty() {
        return Err(CreationError::NameRequired);
    }

    let race = choices.race.trim().to_lowercase();
    let class = choices.class.trim().to_lowercase();
    let level = choices.level.max(1);
    let background = non_blank(choices.background.as_deref())
        .map(str::to_lowercase)
        .unwrap_or_else(|| DEFAULT_BACKGROUND.to_string());

    let mut abilities = choices.scores.base_scores();
    apply_racial_bonuses(&mut abilities, &race);

    let caster = CasterType::for_class(&class);
    let spellcasting = caster.is_caster().then(|| Spellcasting {
        slots_by_level: spell_slots(caster, level),
        spells: pick_spells_for_class(
            &catalogs.spells,
            &class,
            max_spell_level(caster, level),
            STARTING_SPELLS,
        ),
    });

    let normalize = |item: Option<&String>| {
        non_blank(item.map(String::as_str)).map(|n| catalogs.equipment.normalize(n))
    };
    let equipment = Equipment {
        main_hand: normalize(choices.weapon.as_ref()).map(Equipped::named),
        off_hand: normalize(choices.off_hand.as_ref()),
        armor: normalize(choices.armor.as_ref()).map(Equipped::named),
        shield: normalize(choices.shield.as_ref()),
    };

    Ok(Character {
        name: name.to_string(),
        skills: final_skills(&class, &background, &choices.skills),
        race,
        class,
        level,
        background,
        abilities,
        proficiency_bonus: proficiency_bonus(level),
        equipment,
        spellcasting,
    })
}
