//! dnd5eapi.co client for weapon, armor and spell metadata.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use sheetsmith_domain::{ArmorMeta, WeaponMeta};

use crate::infrastructure::ports::{EnrichmentError, EnrichmentPort, SpellMeta};

/// Melee weapons without a listed range reach 5 feet.
const MELEE_REACH: i32 = 5;

/// Client for the SRD REST API.
#[derive(Clone)]
pub struct Dnd5eApiClient {
    client: Client,
    base_url: String,
}

impl Dnd5eApiClient {
    pub fn new(base_url: &str, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, EnrichmentError> {
        let url = format!("{}/{}", self.base_url, path);
        tracing::debug!(%url, "Fetching SRD entry");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| EnrichmentError::Http(e.to_string()))?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(EnrichmentError::NotFound(path.to_string()));
        }
        if !response.status().is_success() {
            return Err(EnrichmentError::Http(format!(
                "{} returned {}",
                url,
                response.status()
            )));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| EnrichmentError::Decode(e.to_string()))
    }

    async fn equipment(&self, name: &str) -> Result<ApiEquipment, EnrichmentError> {
        self.get_json(&format!("equipment/{}", slugify(name))).await
    }
}

/// URL slug for an SRD entry: "Chain Mail" -> "chain-mail".
pub fn slugify(name: &str) -> String {
    let mut slug: String = name
        .trim()
        .to_lowercase()
        .chars()
        .filter(|c| !matches!(*c, '\u{2019}' | '\'' | ',' | '(' | ')' | '.'))
        .map(|c| if matches!(c, '\u{2013}' | '\u{2014}') { '-' } else { c })
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-");
    while slug.contains("--") {
        slug = slug.replace("--", "-");
    }
    slug
}

// =============================================================================
// API payloads
// =============================================================================

#[derive(Debug, Default, Deserialize)]
struct Named {
    #[serde(default)]
    name: String,
}

#[derive(Debug, Default, Deserialize)]
struct ApiRange {
    #[serde(default)]
    normal: i32,
}

#[derive(Debug, Default, Deserialize)]
struct ApiProperty {
    #[serde(default)]
    index: String,
}

#[derive(Debug, Default, Deserialize)]
struct ApiDamage {
    #[serde(default)]
    damage_dice: String,
}

#[derive(Debug, Default, Deserialize)]
struct ApiArmorClass {
    #[serde(default)]
    base: i32,
    #[serde(default)]
    dex_bonus: bool,
    #[serde(default)]
    max_bonus: Option<i32>,
}

#[derive(Debug, Default, Deserialize)]
struct ApiEquipment {
    #[serde(default)]
    equipment_category: Named,
    #[serde(default)]
    weapon_range: String,
    #[serde(default)]
    range: ApiRange,
    #[serde(default)]
    properties: Vec<ApiProperty>,
    #[serde(default)]
    damage: ApiDamage,
    #[serde(default)]
    armor_class: ApiArmorClass,
}

#[derive(Debug, Default, Deserialize)]
struct ApiSpell {
    #[serde(default)]
    school: Named,
    #[serde(default)]
    range: String,
}

impl ApiEquipment {
    fn weapon_meta(&self) -> WeaponMeta {
        let has_property = |wanted: &str| {
            self.properties
                .iter()
                .any(|p| p.index.eq_ignore_ascii_case(wanted))
        };
        let mut range_normal = self.range.normal;
        if range_normal == 0 && self.weapon_range.eq_ignore_ascii_case("melee") {
            range_normal = MELEE_REACH;
        }

        WeaponMeta {
            category: self.equipment_category.name.clone(),
            range_normal,
            two_handed: has_property("two-handed"),
            damage_dice: self.damage.damage_dice.clone(),
            finesse: has_property("finesse"),
            weapon_range: self.weapon_range.clone(),
        }
    }

    fn armor_meta(&self) -> Option<ArmorMeta> {
        let ac = &self.armor_class;
        if ac.base == 0 && !ac.dex_bonus && ac.max_bonus.is_none() {
            return None;
        }
        Some(ArmorMeta {
            base_ac: ac.base,
            dex_bonus: ac.dex_bonus,
            max_dex_bonus: ac.max_bonus,
        })
    }
}

#[async_trait]
impl EnrichmentPort for Dnd5eApiClient {
    async fn weapon_meta(&self, name: &str) -> Result<WeaponMeta, EnrichmentError> {
        Ok(self.equipment(name).await?.weapon_meta())
    }

    async fn armor_meta(&self, name: &str) -> Result<ArmorMeta, EnrichmentError> {
        let entry = match self.equipment(name).await {
            Ok(entry) => entry,
            Err(e) => {
                tracing::debug!(name, error = %e, "Retrying armor lookup with suffix");
                self.equipment(&format!("{name} armor")).await?
            }
        };
        entry
            .armor_meta()
            .ok_or_else(|| EnrichmentError::NotFound(name.to_string()))
    }

    async fn spell_meta(&self, name: &str) -> Result<SpellMeta, EnrichmentError> {
        let spell: ApiSpell = self.get_json(&format!("spells/{}", slugify(name))).await?;
        Ok(SpellMeta {
            school: spell.school.name,
            range: spell.range,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{extract::Path, http::StatusCode, routing::get, Json, Router};
    use serde_json::{json, Value};

    #[test]
    fn slugify_srd_names() {
        assert_eq!(slugify("Chain Mail"), "chain-mail");
        assert_eq!(slugify("  Crossbow, light "), "crossbow-light");
        assert_eq!(slugify("Tasha\u{2019}s Hideous Laughter"), "tashas-hideous-laughter");
        assert_eq!(slugify("Arrows (20)"), "arrows-20");
        assert_eq!(slugify("Mordenkainen's Sword"), "mordenkainens-sword");
        assert_eq!(slugify("Half - Plate"), "half-plate");
        assert_eq!(slugify("Cure\u{2014}Wounds"), "cure-wounds");
    }

    fn equipment(value: Value) -> ApiEquipment {
        serde_json::from_value(value).expect("payload")
    }

    #[test]
    fn weapon_payload_mapping() {
        let rapier = equipment(json!({
            "index": "rapier",
            "equipment_category": { "name": "Weapon" },
            "weapon_range": "Melee",
            "damage": { "damage_dice": "1d8" },
            "range": { "normal": 5 },
            "properties": [{ "index": "finesse", "name": "Finesse" }]
        }))
        .weapon_meta();
        assert_eq!(rapier.category, "Weapon");
        assert_eq!(rapier.damage_dice, "1d8");
        assert!(rapier.finesse);
        assert!(!rapier.two_handed);
    }

    #[test]
    fn melee_weapons_default_to_five_feet() {
        let greataxe = equipment(json!({
            "weapon_range": "Melee",
            "damage": { "damage_dice": "1d12" },
            "properties": [{ "index": "heavy" }, { "index": "two-handed" }]
        }))
        .weapon_meta();
        assert_eq!(greataxe.range_normal, 5);
        assert!(greataxe.two_handed);
    }

    #[test]
    fn armor_payload_mapping() {
        let chain_shirt = equipment(json!({
            "armor_class": { "base": 13, "dex_bonus": true, "max_bonus": 2 }
        }))
        .armor_meta()
        .expect("armor");
        assert_eq!(chain_shirt.max_dex_bonus, Some(2));

        let leather = equipment(json!({
            "armor_class": { "base": 11, "dex_bonus": true }
        }))
        .armor_meta()
        .expect("armor");
        assert_eq!(leather.max_dex_bonus, None);

        assert!(equipment(json!({ "name": "Rope" })).armor_meta().is_none());
    }

    async fn fixture_server() -> String {
        async fn equipment_entry(Path(slug): Path<String>) -> Result<Json<Value>, StatusCode> {
            match slug.as_str() {
                "longsword" => Ok(Json(json!({
                    "equipment_category": { "name": "Weapon" },
                    "weapon_range": "Melee",
                    "damage": { "damage_dice": "1d8" },
                    "properties": [{ "index": "versatile" }]
                }))),
                "leather-armor" => Ok(Json(json!({
                    "armor_class": { "base": 11, "dex_bonus": true }
                }))),
                _ => Err(StatusCode::NOT_FOUND),
            }
        }
        async fn spell_entry(Path(slug): Path<String>) -> Result<Json<Value>, StatusCode> {
            match slug.as_str() {
                "magic-missile" => Ok(Json(json!({
                    "school": { "name": "Evocation" },
                    "range": "120 feet"
                }))),
                _ => Err(StatusCode::NOT_FOUND),
            }
        }

        let app = Router::new()
            .route("/api/equipment/{slug}", get(equipment_entry))
            .route("/api/spells/{slug}", get(spell_entry));
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind");
        let addr = listener.local_addr().expect("addr");
        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });
        format!("http://{addr}/api/")
    }

    #[tokio::test]
    async fn fetches_weapon_armor_and_spell_entries() {
        let client = Dnd5eApiClient::new(&fixture_server().await, Duration::from_secs(5));

        let sword = client.weapon_meta("Longsword").await.expect("weapon");
        assert_eq!(sword.damage_dice, "1d8");
        assert_eq!(sword.range_normal, 5);

        // "leather" misses, "leather armor" hits
        let leather = client.armor_meta("Leather").await.expect("armor");
        assert_eq!(leather.base_ac, 11);

        let missile = client.spell_meta("Magic Missile").await.expect("spell");
        assert_eq!(missile.school, "Evocation");
        assert_eq!(missile.range, "120 feet");
    }

    #[tokio::test]
    async fn unknown_entries_are_not_found() {
        let client = Dnd5eApiClient::new(&fixture_server().await, Duration::from_secs(5));
        assert!(matches!(
            client.spell_meta("Wish").await,
            Err(EnrichmentError::NotFound(_))
        ));
        assert!(matches!(
            client.armor_meta("Mithral").await,
            Err(EnrichmentError::NotFound(_))
        ));
    }
}
