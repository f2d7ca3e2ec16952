//! Character store backed by a single pretty-printed JSON array.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use sheetsmith_domain::Character;
use tokio::fs;
use tokio::sync::RwLock;

use crate::infrastructure::ports::{CharacterRepo, RepoError};

/// JSON file implementation of [`CharacterRepo`].
///
/// The whole file is read once at open and rewritten after every mutation
/// through a temp file and rename. A missing file is an empty store.
pub struct JsonFileCharacterStore {
    path: PathBuf,
    characters: RwLock<Vec<Character>>,
}

impl JsonFileCharacterStore {
    pub async fn open(path: impl AsRef<Path>) -> Result<Self, RepoError> {
        let path = path.as_ref().to_path_buf();
        let characters = match fs::read_to_string(&path).await {
            Ok(json) if json.trim().is_empty() => Vec::new(),
            Ok(json) => serde_json::from_str(&json).map_err(RepoError::serialization)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Vec::new(),
            Err(e) => return Err(RepoError::storage("open", e)),
        };
        tracing::debug!(path = %path.display(), count = characters.len(), "Opened character store");

        Ok(Self {
            path,
            characters: RwLock::new(characters),
        })
    }

    async fn persist(&self, characters: &[Character]) -> Result<(), RepoError> {
        let json = serde_json::to_string_pretty(characters).map_err(RepoError::serialization)?;
        let temp_path = self.path.with_extension("json.tmp");
        fs::write(&temp_path, json)
            .await
            .map_err(|e| RepoError::storage("save", e))?;
        if let Err(e) = fs::rename(&temp_path, &self.path).await {
            let _ = fs::remove_file(&temp_path).await;
            return Err(RepoError::storage("save", e));
        }
        Ok(())
    }
}

fn find_like<'a>(characters: &'a [Character], name: &str) -> Option<&'a Character> {
    let query = name.trim().to_lowercase();
    if query.is_empty() {
        return None;
    }
    characters
        .iter()
        .find(|c| c.name.to_lowercase() == query)
        .or_else(|| {
            characters
                .iter()
                .find(|c| c.name.to_lowercase().contains(&query))
        })
}

#[async_trait]
impl CharacterRepo for JsonFileCharacterStore {
    async fn list(&self) -> Result<Vec<Character>, RepoError> {
        Ok(self.characters.read().await.clone())
    }

    async fn find(&self, name: &str) -> Result<Option<Character>, RepoError> {
        Ok(find_like(&self.characters.read().await, name).cloned())
    }

    async fn upsert(&self, character: &Character) -> Result<(), RepoError> {
        let mut characters = self.characters.write().await;
        let mut updated = characters.clone();
        match updated
            .iter_mut()
            .find(|c| c.name.eq_ignore_ascii_case(&character.name))
        {
            Some(existing) => *existing = character.clone(),
            None => updated.push(character.clone()),
        }
        // memory only follows a successful write
        self.persist(&updated).await?;
        *characters = updated;
        Ok(())
    }

    async fn delete(&self, name: &str) -> Result<bool, RepoError> {
        let mut characters = self.characters.write().await;
        let Some(index) = characters
            .iter()
            .position(|c| c.name.eq_ignore_ascii_case(name.trim()))
        else {
            return Ok(false);
        };
        let mut updated = characters.clone();
        updated.remove(index);
        self.persist(&updated).await?;
        *characters = updated;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sheetsmith_domain::AbilityScores;
    use tempfile::TempDir;

    fn character(name: &str, class: &str) -> Character {
        Character {
            name: name.into(),
            race: "human".into(),
            class: class.into(),
            level: 1,
            background: "acolyte".into(),
            abilities: AbilityScores::default(),
            proficiency_bonus: 2,
            equipment: Default::default(),
            skills: vec!["insight".into()],
            spellcasting: None,
        }
    }

    #[tokio::test]
    async fn missing_file_opens_empty() {
        let dir = TempDir::new().expect("temp dir");
        let store = JsonFileCharacterStore::open(dir.path().join("characters.json"))
            .await
            .expect("open");
        assert!(store.list().await.expect("list").is_empty());
    }

    #[tokio::test]
    async fn upsert_persists_across_reopen() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("characters.json");
        let store = JsonFileCharacterStore::open(&path).await.expect("open");
        store.upsert(&character("Gor", "barbarian")).await.expect("upsert");
        store.upsert(&character("Nyx", "rogue")).await.expect("upsert");

        let reopened = JsonFileCharacterStore::open(&path).await.expect("reopen");
        let names: Vec<String> = reopened
            .list()
            .await
            .expect("list")
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(names, vec!["Gor", "Nyx"]);
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[tokio::test]
    async fn upsert_replaces_by_name_ignoring_case() {
        let dir = TempDir::new().expect("temp dir");
        let store = JsonFileCharacterStore::open(dir.path().join("c.json"))
            .await
            .expect("open");
        store.upsert(&character("Gor", "barbarian")).await.expect("upsert");
        store.upsert(&character("GOR", "fighter")).await.expect("upsert");

        let all = store.list().await.expect("list");
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].class, "fighter");
    }

    #[tokio::test]
    async fn find_prefers_exact_over_substring() {
        let dir = TempDir::new().expect("temp dir");
        let store = JsonFileCharacterStore::open(dir.path().join("c.json"))
            .await
            .expect("open");
        store.upsert(&character("Bruni Ironfoot", "cleric")).await.expect("upsert");
        store.upsert(&character("Bruni", "fighter")).await.expect("upsert");

        let exact = store.find("bruni").await.expect("find").expect("found");
        assert_eq!(exact.class, "fighter");
        let partial = store.find("iron").await.expect("find").expect("found");
        assert_eq!(partial.name, "Bruni Ironfoot");
        assert!(store.find("zed").await.expect("find").is_none());
        assert!(store.find("  ").await.expect("find").is_none());
    }

    #[tokio::test]
    async fn delete_requires_full_name() {
        let dir = TempDir::new().expect("temp dir");
        let store = JsonFileCharacterStore::open(dir.path().join("c.json"))
            .await
            .expect("open");
        store.upsert(&character("Nyx", "rogue")).await.expect("upsert");

        assert!(!store.delete("Ny").await.expect("delete"));
        assert!(store.delete("nyx").await.expect("delete"));
        assert!(store.list().await.expect("list").is_empty());
    }

    #[tokio::test]
    async fn failed_write_leaves_store_unchanged() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("c.json");
        let store = JsonFileCharacterStore::open(&path).await.expect("open");
        store.upsert(&character("Nyx", "rogue")).await.expect("upsert");

        // a non-empty directory at the store path makes the rename fail
        std::fs::remove_file(&path).expect("remove");
        std::fs::create_dir(&path).expect("mkdir");
        std::fs::write(path.join("keep"), "x").expect("write");

        let err = store
            .upsert(&character("Ghost", "wizard"))
            .await
            .err()
            .expect("upsert fails");
        assert!(matches!(err, RepoError::Storage { operation: "save", .. }));
        assert!(store.delete("nyx").await.is_err());

        let names: Vec<String> = store
            .list()
            .await
            .expect("list")
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(names, vec!["Nyx"]);
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[tokio::test]
    async fn corrupt_file_is_a_serialization_error() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("c.json");
        std::fs::write(&path, "{not json").expect("write");
        let err = JsonFileCharacterStore::open(&path).await.err().expect("error");
        assert!(matches!(err, RepoError::Serialization(_)));
    }
}
