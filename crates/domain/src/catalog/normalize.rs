//! Free-text name folding and tolerant equipment-name resolution.

use super::EquipmentCatalog;

const ARMOR_SUFFIX: &str = " armor";

/// Lowercase, trim and collapse runs of whitespace to a single space.
pub fn fold_name(raw: &str) -> String {
    raw.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

impl EquipmentCatalog {
    /// Resolve a free-text item name to its catalog key.
    ///
    /// Exact match wins, then appending " armor", then stripping it. When
    /// nothing matches the folded name is returned as an unknown item.
    pub fn normalize(&self, raw: &str) -> String {
        let name = fold_name(raw);
        if self.contains(&name) {
            return name;
        }

        if !name.contains("armor") {
            let suffixed = format!("{name}{ARMOR_SUFFIX}");
            if self.contains(&suffixed) {
                return suffixed;
            }
        }

        if name.contains(ARMOR_SUFFIX) {
            let stripped = name.replace(ARMOR_SUFFIX, "");
            if self.contains(&stripped) {
                return stripped;
            }
        }

        name
    }
}
