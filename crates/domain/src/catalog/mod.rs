//! Reference catalogs built from tabular SRD exports.
//!
//! Catalogs are constructed once from an already-parsed [`Table`] and are
//! immutable afterwards. Reading the table from disk is the engine's job.

mod equipment;
mod normalize;
mod spells;

pub use equipment::EquipmentCatalog;
pub use normalize::fold_name;
pub use spells::SpellCatalog;

/// A header row plus data rows, as read from a CSV export.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(header: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { header, rows }
    }

    /// Build a table from string slices. Mostly useful in tests.
    pub fn from_rows(header: &[&str], rows: &[&[&str]]) -> Self {
        Self {
            header: header.iter().map(|h| h.to_string()).collect(),
            rows: rows
                .iter()
                .map(|r| r.iter().map(|c| c.to_string()).collect())
                .collect(),
        }
    }

    /// Index of a header column, matched case-insensitively after trimming.
    pub fn column(&self, name: &str) -> Option<usize> {
        let wanted = name.trim().to_lowercase();
        self.header
            .iter()
            .position(|h| h.trim().to_lowercase() == wanted)
    }

    /// Resolve every required column or report all of them as missing.
    pub(crate) fn require_columns<const N: usize>(
        &self,
        required: [&'static str; N],
    ) -> Result<[usize; N], crate::CatalogError> {
        if self.header.is_empty() {
            return Err(crate::CatalogError::Empty);
        }
        let mut found = [0usize; N];
        for (slot, name) in found.iter_mut().zip(required) {
            *slot = self
                .column(name)
                .ok_or_else(|| crate::CatalogError::missing_columns(&required))?;
        }
        Ok(found)
    }
}

/// Both reference catalogs, shared read-only by every resolver.
#[derive(Debug, Clone, Default)]
pub struct Catalogs {
    pub equipment: EquipmentCatalog,
    pub spells: SpellCatalog,
}

impl Catalogs {
    pub fn new(equipment: EquipmentCatalog, spells: SpellCatalog) -> Self {
        Self { equipment, spells }
    }
}
