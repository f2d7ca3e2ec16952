//! Character storage port.

use async_trait::async_trait;
use sheetsmith_domain::Character;

use super::error::RepoError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CharacterRepo: Send + Sync {
    async fn list(&self) -> Result<Vec<Character>, RepoError>;

    /// Exact case-insensitive name match first, then the first substring match.
    async fn find(&self, name: &str) -> Result<Option<Character>, RepoError>;

    /// Replace the character with the same name (ignoring case) or append it.
    async fn upsert(&self, character: &Character) -> Result<(), RepoError>;

    /// Remove by exact name, ignoring case. Returns whether one was removed.
    async fn delete(&self, name: &str) -> Result<bool, RepoError>;
}
