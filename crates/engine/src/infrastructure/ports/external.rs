//! Metadata enrichment port.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use sheetsmith_domain::{ArmorMeta, WeaponMeta};

use super::error::EnrichmentError;

/// Spell details that the catalogs don't carry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpellMeta {
    pub school: String,
    pub range: String,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EnrichmentPort: Send + Sync {
    async fn weapon_meta(&self, name: &str) -> Result<WeaponMeta, EnrichmentError>;

    async fn armor_meta(&self, name: &str) -> Result<ArmorMeta, EnrichmentError>;

    async fn spell_meta(&self, name: &str) -> Result<SpellMeta, EnrichmentError>;
}
