//! Application state and composition.

use std::sync::Arc;

use sheetsmith_domain::Catalogs;

use crate::infrastructure::ports::{CharacterRepo, EnrichmentPort};
use crate::use_cases::CharacterService;

/// Main application state.
///
/// Shared by the CLI commands and, via Axum state, the HTTP handlers.
pub struct App {
    pub characters: CharacterService,
}

impl App {
    pub fn new(
        repo: Arc<dyn CharacterRepo>,
        enrichment: Arc<dyn EnrichmentPort>,
        catalogs: Arc<Catalogs>,
    ) -> Self {
        Self {
            characters: CharacterService::new(repo, enrichment, catalogs),
        }
    }
}
