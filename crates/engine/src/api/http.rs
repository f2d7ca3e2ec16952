//! HTTP routes.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use sheetsmith_domain::{Character, CharacterSheet, NewCharacter};

use crate::app::App;
use crate::use_cases::CharacterError;

/// Create all HTTP routes.
pub fn routes() -> Router<Arc<App>> {
    Router::new()
        .route("/api/health", get(health))
        .route(
            "/api/characters",
            get(get_characters).post(create_character),
        )
        .route("/api/characters/{name}/sheet", get(character_sheet))
}

async fn health() -> &'static str {
    "OK"
}

#[derive(Debug, Default, Deserialize)]
struct CharacterQuery {
    #[serde(default)]
    name: Option<String>,
}

/// Every character, or the one matching `?name=`.
async fn get_characters(
    State(app): State<Arc<App>>,
    Query(query): Query<CharacterQuery>,
) -> Result<Response, ApiError> {
    match query.name.as_deref().map(str::trim).filter(|n| !n.is_empty()) {
        Some(name) => Ok(Json(app.characters.find(name).await?).into_response()),
        None => Ok(Json(app.characters.list().await?).into_response()),
    }
}

async fn create_character(
    State(app): State<Arc<App>>,
    payload: Result<Json<NewCharacter>, JsonRejection>,
) -> Result<(StatusCode, Json<Character>), ApiError> {
    let Json(request) = payload.map_err(|e| {
        tracing::debug!(error = %e, "Rejected create payload");
        ApiError::BadRequest("invalid json".to_string())
    })?;
    let character = app.characters.create(&request).await?;
    Ok((StatusCode::CREATED, Json(character)))
}

async fn character_sheet(
    State(app): State<Arc<App>>,
    Path(name): Path<String>,
) -> Result<Json<CharacterSheet>, ApiError> {
    Ok(Json(app.characters.view(&name).await?))
}

// =============================================================================
// Errors
// =============================================================================

#[derive(Debug)]
pub enum ApiError {
    NotFound,
    BadRequest(String),
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound => (StatusCode::NOT_FOUND, "character not found".to_string()),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Internal(msg) => {
                tracing::error!(error = %msg, "Request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal error".to_string(),
                )
            }
        };
        (status, Json(serde_json::json!({ "error": message }))).into_response()
    }
}

impl From<CharacterError> for ApiError {
    fn from(e: CharacterError) -> Self {
        match e {
            CharacterError::NotFound(_) => ApiError::NotFound,
            e if e.is_rejection() => ApiError::BadRequest(e.to_string()),
            e => ApiError::Internal(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use serde_json::Value;
    use sheetsmith_domain::{AbilityScores, Catalogs, Equipment};
    use tower::ServiceExt;

    use crate::infrastructure::ports::{
        EnrichmentError, MockCharacterRepo, MockEnrichmentPort, RepoError,
    };

    fn gor() -> Character {
        Character {
            name: "Gor".into(),
            race: "half-orc".into(),
            class: "barbarian".into(),
            level: 3,
            background: "outlander".into(),
            abilities: AbilityScores::new([16, 14, 16, 8, 10, 8]),
            proficiency_bonus: 2,
            equipment: Equipment::default(),
            skills: vec!["athletics".into(), "survival".into()],
            spellcasting: None,
        }
    }

    fn app(repo: MockCharacterRepo, enrichment: MockEnrichmentPort) -> Router {
        let app = App::new(
            Arc::new(repo),
            Arc::new(enrichment),
            Arc::new(Catalogs::default()),
        );
        routes().with_state(Arc::new(app))
    }

    fn repo_with_gor() -> MockCharacterRepo {
        let mut repo = MockCharacterRepo::new();
        repo.expect_list().returning(|| Ok(vec![gor()]));
        repo.expect_find().returning(|name| {
            Ok(name
                .eq_ignore_ascii_case("gor")
                .then(gor))
        });
        repo
    }

    async fn send(router: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = router.oneshot(request).await.expect("response");
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body");
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).expect("request")
    }

    fn post_json(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .expect("request")
    }

    #[tokio::test]
    async fn health_is_ok() {
        let response = app(MockCharacterRepo::new(), MockEnrichmentPort::new())
            .oneshot(get("/api/health"))
            .await
            .expect("response");
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body");
        assert_eq!(&bytes[..], b"OK");
    }

    #[tokio::test]
    async fn lists_characters() {
        let (status, body) = send(
            app(repo_with_gor(), MockEnrichmentPort::new()),
            get("/api/characters"),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().map(Vec::len), Some(1));
        assert_eq!(body[0]["name"], "Gor");
    }

    #[tokio::test]
    async fn name_query_returns_one_character_or_404() {
        let router = app(repo_with_gor(), MockEnrichmentPort::new());

        let (status, body) = send(router.clone(), get("/api/characters?name=gor")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["class"], "barbarian");

        let (status, body) = send(router, get("/api/characters?name=nyx")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "character not found");
    }

    #[tokio::test]
    async fn post_creates_character() {
        let mut repo = MockCharacterRepo::new();
        repo.expect_upsert()
            .withf(|c| c.name == "Nyx" && c.class == "rogue")
            .times(1)
            .returning(|_| Ok(()));
        let mut enrichment = MockEnrichmentPort::new();
        enrichment
            .expect_weapon_meta()
            .returning(|name| Err(EnrichmentError::NotFound(name.to_string())));

        let (status, body) = send(
            app(repo, enrichment),
            post_json(
                "/api/characters",
                r#"{"name":" Nyx ","race":"Elf","class":"Rogue","level":2,
                    "ability_scores":{"dexterity":15},"weapon":"Rapier"}"#,
            ),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["name"], "Nyx");
        assert_eq!(body["level"], 2);
        // Elves get +2 dexterity
        assert_eq!(body["abilities"]["dexterity"], 17);
    }

    #[tokio::test]
    async fn post_rejects_bad_payloads() {
        let mut repo = MockCharacterRepo::new();
        repo.expect_upsert().never();
        let router = app(repo, MockEnrichmentPort::new());

        let (status, body) = send(router.clone(), post_json("/api/characters", "{nope")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "invalid json");

        let (status, body) =
            send(router, post_json("/api/characters", r#"{"name":"  "}"#)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "name is required");
    }

    #[tokio::test]
    async fn sheet_route_derives_statistics() {
        let (status, body) = send(
            app(repo_with_gor(), MockEnrichmentPort::new()),
            get("/api/characters/Gor/sheet"),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        // Unarmored barbarian: 10 + dex 2 + con 3
        assert_eq!(body["armor_class"], 15);
        assert_eq!(body["initiative"], 2);

        let (status, _) = send(
            app(repo_with_gor(), MockEnrichmentPort::new()),
            get("/api/characters/Nyx/sheet"),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn storage_failures_are_internal_errors() {
        let mut repo = MockCharacterRepo::new();
        repo.expect_list()
            .returning(|| Err(RepoError::storage("open", "disk gone")));
        let (status, body) = send(
            app(repo, MockEnrichmentPort::new()),
            get("/api/characters"),
        )
        .await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "internal error");
    }
}
