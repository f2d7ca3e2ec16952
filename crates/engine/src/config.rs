//! Engine configuration from environment variables.

use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_CHARACTERS_DB: &str = "characters.json";
pub const DEFAULT_SERVER_ADDR: &str = "0.0.0.0:8080";
pub const DEFAULT_DND5E_API_URL: &str = "https://www.dnd5eapi.co/api";
pub const DEFAULT_STATIC_DIR: &str = ".";
const DEFAULT_DND5E_API_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    pub characters_db: PathBuf,
    pub equipment_csv: Option<PathBuf>,
    pub spells_csv: Option<PathBuf>,
    pub server_addr: String,
    /// Directory served for paths outside `/api`.
    pub static_dir: PathBuf,
    /// `*` or a comma-separated origin list. Unset disables CORS headers.
    pub cors_allowed_origins: Option<String>,
    pub dnd5e_api_url: String,
    pub dnd5e_api_timeout: Duration,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            characters_db: PathBuf::from(DEFAULT_CHARACTERS_DB),
            equipment_csv: None,
            spells_csv: None,
            server_addr: DEFAULT_SERVER_ADDR.to_string(),
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
            cors_allowed_origins: None,
            dnd5e_api_url: DEFAULT_DND5E_API_URL.to_string(),
            dnd5e_api_timeout: Duration::from_secs(DEFAULT_DND5E_API_TIMEOUT_SECS),
        }
    }
}

impl EngineConfig {
    /// Read configuration from the process environment.
    ///
    /// Call `dotenvy::dotenv()` first if a `.env` file should be honoured.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let defaults = Self::default();

        let dnd5e_api_timeout = get("DND5E_API_TIMEOUT_SECS")
            .and_then(|v| v.parse::<u64>().ok())
            .map(Duration::from_secs)
            .unwrap_or(defaults.dnd5e_api_timeout);

        Self {
            characters_db: get("CHARACTERS_DB")
                .map(PathBuf::from)
                .unwrap_or(defaults.characters_db),
            equipment_csv: get("EQUIPMENT_CSV").map(PathBuf::from),
            spells_csv: get("SPELLS_CSV").map(PathBuf::from),
            server_addr: get("SERVER_ADDR")
                .map(|addr| normalize_addr(&addr))
                .unwrap_or(defaults.server_addr),
            static_dir: get("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.static_dir),
            cors_allowed_origins: get("CORS_ALLOWED_ORIGINS"),
            dnd5e_api_url: get("DND5E_API_URL").unwrap_or(defaults.dnd5e_api_url),
            dnd5e_api_timeout,
        }
    }
}

/// Accept the short ":8080" form as "0.0.0.0:8080".
pub fn normalize_addr(addr: &str) -> String {
    let addr = addr.trim();
    match addr.strip_prefix(':') {
        Some(port) => format!("0.0.0.0:{port}"),
        None => addr.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> EngineConfig {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        EngineConfig::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn defaults_when_environment_is_empty() {
        assert_eq!(config_from(&[]), EngineConfig::default());
    }

    #[test]
    fn reads_paths_and_addresses() {
        let config = config_from(&[
            ("CHARACTERS_DB", "/var/lib/sheetsmith/party.json"),
            ("EQUIPMENT_CSV", "srd/equipment.csv"),
            ("SERVER_ADDR", ":9000"),
            ("DND5E_API_TIMEOUT_SECS", "3"),
        ]);
        assert_eq!(
            config.characters_db,
            PathBuf::from("/var/lib/sheetsmith/party.json")
        );
        assert_eq!(config.equipment_csv, Some(PathBuf::from("srd/equipment.csv")));
        assert_eq!(config.spells_csv, None);
        assert_eq!(config.server_addr, "0.0.0.0:9000");
        assert_eq!(config.dnd5e_api_timeout, Duration::from_secs(3));
    }

    #[test]
    fn blank_and_invalid_values_fall_back() {
        let config = config_from(&[("SPELLS_CSV", "   "), ("DND5E_API_TIMEOUT_SECS", "soon")]);
        assert_eq!(config.spells_csv, None);
        assert_eq!(config.dnd5e_api_timeout, Duration::from_secs(10));
    }

    #[test]
    fn normalize_addr_keeps_full_addresses() {
        assert_eq!(normalize_addr("127.0.0.1:3000"), "127.0.0.1:3000");
        assert_eq!(normalize_addr(":8080"), "0.0.0.0:8080");
    }
}
