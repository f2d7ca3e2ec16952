//! Error types for the rules core.
//!
//! None of these abort anything: catalog errors let the caller fall back to an
//! empty catalog, and the rejection errors leave the character untouched.

use thiserror::Error;

/// A reference table could not be turned into a catalog.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// The source had no header row.
    #[error("CSV is empty")]
    Empty,

    /// One or more required header columns are absent.
    #[error("missing required headers: {}", required.join(", "))]
    MissingColumns { required: Vec<&'static str> },
}

impl CatalogError {
    pub fn missing_columns(required: &[&'static str]) -> Self {
        Self::MissingColumns {
            required: required.to_vec(),
        }
    }
}

/// Rejection outcomes of learning or preparing a spell.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SpellbookError {
    #[error("this class can't cast spells")]
    CannotCast,

    /// The class learns spells and never prepares them.
    #[error("this class learns spells and can't prepare them")]
    CannotPrepare,

    /// The class prepares spells from its full list and never learns them.
    #[error("this class prepares spells and can't learn them")]
    CannotLearn,

    /// Also returned for spell names the catalog doesn't know.
    #[error("the spell has higher level than the available spell slots")]
    TooHighLevel,
}

/// Rejection outcomes of equipping an item.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EquipError {
    #[error("main hand already occupied by {0}")]
    MainHandOccupied(String),

    #[error("off hand already occupied by {0}")]
    OffHandOccupied(String),
}

/// A new character could not be built.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CreationError {
    #[error("name is required")]
    NameRequired,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_columns_lists_required_headers() {
        let err = CatalogError::missing_columns(&["name", "type"]);
        assert_eq!(err.to_string(), "missing required headers: name, type");
    }

    #[test]
    fn empty_catalog_message() {
        assert_eq!(CatalogError::Empty.to_string(), "CSV is empty");
    }

    #[test]
    fn spellbook_errors_display() {
        assert_eq!(
            SpellbookError::TooHighLevel.to_string(),
            "the spell has higher level than the available spell slots"
        );
        assert_eq!(
            SpellbookError::CannotCast.to_string(),
            "this class can't cast spells"
        );
    }

    #[test]
    fn equip_error_names_the_occupant() {
        let err = EquipError::OffHandOccupied("dagger".into());
        assert_eq!(err.to_string(), "off hand already occupied by dagger");
    }
}
