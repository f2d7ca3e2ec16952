//! Character use cases.
//!
//! Creation, equipment changes, spellbook changes and enrichment of stored
//! characters, plus the derived sheet view.

mod enrich;
mod error;

pub use enrich::{enrich_character, EnrichReport, Inspection};
pub use error::CharacterError;

use std::sync::Arc;

use sheetsmith_domain::rules::{learn_spell, prepare_spell};
use sheetsmith_domain::{
    create_character, equip, Catalogs, Character, CharacterSheet, EquipOutcome, EquipRequest,
    NewCharacter, SpellChange,
};

use crate::infrastructure::ports::{CharacterRepo, EnrichmentPort};

/// Result of equipping items on a stored character.
#[derive(Debug, Clone)]
pub struct EquipResult {
    pub character: Character,
    pub outcomes: Vec<EquipOutcome>,
}

/// Result of a learn or prepare request.
#[derive(Debug, Clone)]
pub struct SpellResult {
    pub character: Character,
    /// Folded spell name as stored.
    pub spell: String,
    pub change: SpellChange,
}

/// Container for character use cases.
pub struct CharacterService {
    repo: Arc<dyn CharacterRepo>,
    enrichment: Arc<dyn EnrichmentPort>,
    catalogs: Arc<Catalogs>,
}

impl CharacterService {
    pub fn new(
        repo: Arc<dyn CharacterRepo>,
        enrichment: Arc<dyn EnrichmentPort>,
        catalogs: Arc<Catalogs>,
    ) -> Self {
        Self {
            repo,
            enrichment,
            catalogs,
        }
    }

    /// Create a character, enrich it, and store it (replacing a namesake).
    pub async fn create(&self, request: &NewCharacter) -> Result<Character, CharacterError> {
        let mut character = create_character(request, &self.catalogs)?;
        let report = enrich_character(self.enrichment.as_ref(), &mut character).await;
        self.repo.upsert(&character).await?;

        tracing::info!(
            name = %character.name,
            class = %character.class,
            level = character.level,
            enriched_spells = report.spells,
            "Created character"
        );
        Ok(character)
    }

    pub async fn list(&self) -> Result<Vec<Character>, CharacterError> {
        Ok(self.repo.list().await?)
    }

    /// Look a character up by exact name, then by substring.
    pub async fn find(&self, name: &str) -> Result<Character, CharacterError> {
        self.repo
            .find(name)
            .await?
            .ok_or_else(|| CharacterError::NotFound(name.to_string()))
    }

    pub async fn view(&self, name: &str) -> Result<CharacterSheet, CharacterError> {
        let character = self.find(name).await?;
        Ok(CharacterSheet::build(&character, &self.catalogs.equipment))
    }

    /// Delete by exact name.
    pub async fn delete(&self, name: &str) -> Result<(), CharacterError> {
        if !self.repo.delete(name).await? {
            return Err(CharacterError::NotFound(name.to_string()));
        }
        tracing::info!(name, "Deleted character");
        Ok(())
    }

    pub async fn equip(
        &self,
        name: &str,
        request: &EquipRequest,
    ) -> Result<EquipResult, CharacterError> {
        let mut character = self.find(name).await?;
        let outcomes = equip(&mut character, &self.catalogs.equipment, request)?;
        self.repo.upsert(&character).await?;

        for outcome in &outcomes {
            if outcome.unknown {
                tracing::warn!(item = %outcome.name, "Item not found in equipment catalog");
            }
            tracing::info!(
                name = %character.name,
                slot = %outcome.slot,
                item = %outcome.name,
                "Equipped item"
            );
        }
        Ok(EquipResult {
            character,
            outcomes,
        })
    }

    pub async fn prepare_spell(&self, name: &str, spell: &str) -> Result<SpellResult, CharacterError> {
        let mut character = self.find(name).await?;
        let change = prepare_spell(&mut character, &self.catalogs.spells, spell)?;
        self.repo.upsert(&character).await?;

        tracing::info!(name = %character.name, spell, ?change, "Prepared spell");
        Ok(SpellResult {
            character,
            spell: sheetsmith_domain::fold_name(spell),
            change,
        })
    }

    pub async fn learn_spell(&self, name: &str, spell: &str) -> Result<SpellResult, CharacterError> {
        let mut character = self.find(name).await?;
        let change = learn_spell(&mut character, &self.catalogs.spells, spell)?;
        // Relearning a known spell still rewrites the store
        self.repo.upsert(&character).await?;

        tracing::info!(name = %character.name, spell, ?change, "Learned spell");
        Ok(SpellResult {
            character,
            spell: sheetsmith_domain::fold_name(spell),
            change,
        })
    }

    /// Refresh the metadata of one character.
    pub async fn enrich(&self, name: &str) -> Result<EnrichReport, CharacterError> {
        let mut character = self.find(name).await?;
        let report = enrich_character(self.enrichment.as_ref(), &mut character).await;
        self.repo.upsert(&character).await?;
        tracing::info!(name = %character.name, ?report, "Enriched character");
        Ok(report)
    }

    /// Refresh stored characters in order, at most `limit` of them (0 means all).
    ///
    /// Returns how many characters were processed.
    pub async fn enrich_all(&self, limit: usize) -> Result<usize, CharacterError> {
        let characters = self.repo.list().await?;
        let take = if limit == 0 { characters.len() } else { limit };

        let mut processed = 0;
        for mut character in characters.into_iter().take(take) {
            let report = enrich_character(self.enrichment.as_ref(), &mut character).await;
            self.repo.upsert(&character).await?;
            tracing::debug!(name = %character.name, ?report, "Enriched character");
            processed += 1;
        }
        tracing::info!(processed, "Enrichment done");
        Ok(processed)
    }

    /// Enriched metadata of the named character, or of everyone.
    pub async fn inspect(&self, name: Option<&str>) -> Result<Vec<Inspection>, CharacterError> {
        match name.map(str::trim).filter(|n| !n.is_empty()) {
            Some(name) => Ok(vec![Inspection::of(&self.find(name).await?)]),
            None => Ok(self.repo.list().await?.iter().map(Inspection::of).collect()),
        }
    }
}
