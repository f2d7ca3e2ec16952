//! Port traits for infrastructure boundaries.
//!
//! Ports exist for:
//! - Character storage (JSON file today)
//! - Metadata enrichment (dnd5eapi today)

mod error;
mod external;
mod repos;

pub use error::{EnrichmentError, RepoError};
pub use external::{EnrichmentPort, SpellMeta};
pub use repos::CharacterRepo;

#[cfg(test)]
pub use external::MockEnrichmentPort;
#[cfg(test)]
pub use repos::MockCharacterRepo;
