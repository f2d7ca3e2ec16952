use std::collections::HashMap;

use super::{fold_name, Table};
use crate::CatalogError;

/// Equipment name to item type, keyed by folded name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EquipmentCatalog {
    types_by_name: HashMap<String, String>,
}

impl EquipmentCatalog {
    /// Build the catalog from a table with `name` and `type` columns.
    ///
    /// Short rows and rows with a blank name or type are skipped. A repeated
    /// name keeps the last row's type.
    pub fn from_table(table: &Table) -> Result<Self, CatalogError> {
        let [i_name, i_type] = table.require_columns(["name", "type"])?;
        let needed = i_name.max(i_type);

        let mut types_by_name = HashMap::new();
        for row in &table.rows {
            if row.len() <= needed {
                continue;
            }
            let name = fold_name(&row[i_name]);
            let item_type = row[i_type].trim().to_lowercase();
            if name.is_empty() || item_type.is_empty() {
                continue;
            }
            types_by_name.insert(name, item_type);
        }

        Ok(Self { types_by_name })
    }

    /// Exact lookup after folding case and whitespace.
    pub fn item_type(&self, name: &str) -> Option<&str> {
        self.types_by_name.get(&fold_name(name)).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.item_type(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.types_by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types_by_name.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_name_and_type_columns() {
        let table = Table::from_rows(
            &["index", "Name", "Type", "cost"],
            &[
                &["club", "Club", "Weapon", "1 sp"],
                &["shield", " Shield ", "Armor", "10 gp"],
            ],
        );
        let cat = EquipmentCatalog::from_table(&table).expect("valid table");
        assert_eq!(cat.len(), 2);
        assert_eq!(cat.item_type("club"), Some("weapon"));
        assert_eq!(cat.item_type("SHIELD"), Some("armor"));
    }

    #[test]
    fn skips_short_and_blank_rows() {
        let table = Table::from_rows(
            &["name", "type"],
            &[&["dagger"], &["", "weapon"], &["rope", "  "], &["torch", "gear"]],
        );
        let cat = EquipmentCatalog::from_table(&table).expect("valid table");
        assert_eq!(cat.len(), 1);
        assert!(cat.contains("torch"));
        assert!(!cat.contains("dagger"));
    }

    #[test]
    fn last_row_wins_for_duplicates() {
        let table = Table::from_rows(
            &["name", "type"],
            &[&["net", "weapon"], &["Net", "gear"]],
        );
        let cat = EquipmentCatalog::from_table(&table).expect("valid table");
        assert_eq!(cat.item_type("net"), Some("gear"));
    }

    #[test]
    fn missing_type_column_is_an_error() {
        let table = Table::from_rows(&["name", "cost"], &[&["club", "1 sp"]]);
        assert_eq!(
            EquipmentCatalog::from_table(&table),
            Err(CatalogError::missing_columns(&["name", "type"]))
        );
    }

    #[test]
    fn headerless_table_is_empty_error() {
        assert_eq!(
            EquipmentCatalog::from_table(&Table::default()),
            Err(CatalogError::Empty)
        );
    }
}
