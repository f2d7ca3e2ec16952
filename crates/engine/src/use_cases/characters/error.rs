//! Character operation errors.

use sheetsmith_domain::{CreationError, EquipError, SpellbookError};

use crate::infrastructure::ports::RepoError;

/// Errors that can occur during character operations.
#[derive(Debug, thiserror::Error)]
pub enum CharacterError {
    #[error("character \"{0}\" not found")]
    NotFound(String),

    #[error(transparent)]
    Creation(#[from] CreationError),

    #[error(transparent)]
    Spellbook(#[from] SpellbookError),

    #[error(transparent)]
    Equip(#[from] EquipError),

    #[error("Repository error: {0}")]
    Repo(#[from] RepoError),
}

impl CharacterError {
    /// Rule rejections the caller can fix by changing the request.
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            Self::Creation(_) | Self::Spellbook(_) | Self::Equip(_)
        )
    }
}
