use std::collections::HashMap;

use super::{fold_name, Table};
use crate::entities::Spell;
use crate::CatalogError;

/// Spell levels by name plus the spell list of every class.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpellCatalog {
    level_by_name: HashMap<String, u8>,
    spells_by_class: HashMap<String, Vec<Spell>>,
}

impl SpellCatalog {
    /// Build the catalog from a table with `name`, `level` and `class` columns.
    ///
    /// The class cell holds a comma-separated list. Rows with a blank name,
    /// an unparsable level or no classes are skipped. The level index keeps
    /// the last row for a name; each class list is sorted by name and keeps
    /// the first occurrence of a duplicate.
    pub fn from_table(table: &Table) -> Result<Self, CatalogError> {
        let [i_name, i_level, i_class] = table.require_columns(["name", "level", "class"])?;
        let needed = i_name.max(i_level).max(i_class);

        let mut level_by_name = HashMap::new();
        let mut spells_by_class: HashMap<String, Vec<Spell>> = HashMap::new();

        for row in &table.rows {
            if row.len() <= needed {
                continue;
            }
            let name = fold_name(&row[i_name]);
            if name.is_empty() {
                continue;
            }
            let Ok(level) = row[i_level].trim().parse::<u8>() else {
                continue;
            };
            let classes: Vec<String> = row[i_class]
                .split(',')
                .map(|c| c.trim().to_lowercase())
                .filter(|c| !c.is_empty())
                .collect();
            if classes.is_empty() {
                continue;
            }

            level_by_name.insert(name.clone(), level);
            for class in classes {
                spells_by_class
                    .entry(class)
                    .or_default()
                    .push(Spell::new(name.clone(), level));
            }
        }

        for list in spells_by_class.values_mut() {
            // sort_by is stable, so dedup_by keeps the earliest row
            list.sort_by(|a, b| a.name.cmp(&b.name));
            list.dedup_by(|later, earlier| later.name == earlier.name);
        }

        Ok(Self {
            level_by_name,
            spells_by_class,
        })
    }

    /// Level of a spell, looked up after folding case and whitespace.
    pub fn level_of(&self, name: &str) -> Option<u8> {
        self.level_by_name.get(&fold_name(name)).copied()
    }

    /// Spells available to a class, sorted by name.
    pub fn spells_for_class(&self, class: &str) -> &[Spell] {
        self.spells_by_class
            .get(&class.trim().to_lowercase())
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.level_by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.level_by_name.is_empty()
    }
}
