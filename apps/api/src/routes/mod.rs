pub mod health;

use axum::{routing::get, Router};

use crate::directory::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/api/candidates",
            get(handlers::handle_list_candidates).post(handlers::handle_add_candidate),
        )
        .route(
            "/api/candidates/search",
            get(handlers::handle_search_candidates),
        )
        .route("/api/candidates/analytics", get(handlers::handle_analytics))
        .route("/api/candidates/insights", get(handlers::handle_insights))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use axum::response::Response;
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use tempfile::TempDir;
    use tower::ServiceExt;

    use super::build_router;
    use crate::config::Config;
    use crate::directory::analytics::NO_DATA_INSIGHT;
    use crate::state::AppState;
    use crate::store::{CandidateStore, JsonFileStore};

    fn app_over(store: Arc<JsonFileStore>, dir: &TempDir) -> axum::Router {
        let state = AppState {
            store,
            config: Config {
                db_path: dir.path().join("db.json"),
                port: 0,
                rust_log: "info".to_string(),
            },
        };
        build_router(state)
    }

    fn fresh_app(dir: &TempDir) -> (axum::Router, Arc<JsonFileStore>) {
        let store = Arc::new(JsonFileStore::new(dir.path().join("db.json")));
        (app_over(store.clone(), dir), store)
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn post_json(uri: &str, body: &Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(response: Response) -> Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health_reports_ok() {
        let dir = TempDir::new().unwrap();
        let (app, _) = fresh_app(&dir);
        let response = app.oneshot(get("/health")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "talent-api");
    }

    #[tokio::test]
    async fn test_list_on_empty_store_returns_empty_array() {
        let dir = TempDir::new().unwrap();
        let (app, _) = fresh_app(&dir);
        let response = app.oneshot(get("/api/candidates")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!([]));
    }

    #[tokio::test]
    async fn test_seeded_list_returns_six_and_is_stable() {
        let dir = TempDir::new().unwrap();
        let (app, store) = fresh_app(&dir);
        store.seed_if_empty().await.unwrap();

        let first = body_json(app.clone().oneshot(get("/api/candidates")).await.unwrap()).await;
        let second = body_json(app.oneshot(get("/api/candidates")).await.unwrap()).await;
        assert_eq!(first.as_array().unwrap().len(), 6);
        assert_eq!(first[0]["name"], "Alex Johnson");
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_add_valid_candidate_returns_201_with_fresh_id() {
        let dir = TempDir::new().unwrap();
        let (app, store) = fresh_app(&dir);
        store.seed_if_empty().await.unwrap();
        let seen_ids: Vec<String> = store
            .load()
            .await
            .candidates
            .iter()
            .map(|c| c.id.clone())
            .collect();

        let payload = json!({
            "name": "Nina Alvarez",
            "title": "Data Engineer",
            "department": "Engineering",
            "skills": ["Rust", "SQL"],
            "experience": "6",
            "location": "Lisbon"
        });
        let response = app
            .clone()
            .oneshot(post_json("/api/candidates", &payload))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let stored = body_json(response).await;
        assert_eq!(stored["name"], "Nina Alvarez");
        assert_eq!(stored["skills"], json!(["Rust", "SQL"]));
        assert_eq!(stored["description"], "");
        let id = stored["id"].as_str().unwrap();
        assert!(!id.is_empty());
        assert!(!seen_ids.iter().any(|seen| seen == id));

        // the append is visible through list
        let listed = body_json(app.oneshot(get("/api/candidates")).await.unwrap()).await;
        assert_eq!(listed.as_array().unwrap().len(), 7);
        assert_eq!(listed[6]["id"], stored["id"]);
    }

    #[tokio::test]
    async fn test_add_missing_required_field_returns_400_and_no_mutation() {
        let dir = TempDir::new().unwrap();
        let (app, store) = fresh_app(&dir);
        store.seed_if_empty().await.unwrap();
        let before = store.load().await.candidates;

        for payload in [
            json!({"title": "Engineer", "department": "Engineering"}),
            json!({"name": "Nina", "department": "Engineering"}),
            json!({"name": "Nina", "title": "Engineer"}),
            json!({"name": "", "title": "Engineer", "department": "Engineering"}),
        ] {
            let response = app
                .clone()
                .oneshot(post_json("/api/candidates", &payload))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::BAD_REQUEST);
            assert_eq!(
                body_json(response).await,
                json!({"error": "Missing required fields"})
            );
        }

        assert_eq!(store.load().await.candidates, before);
    }

    #[tokio::test]
    async fn test_add_returns_500_when_save_fails() {
        let dir = TempDir::new().unwrap();
        // store directory does not exist, so every save fails
        let store = Arc::new(JsonFileStore::new(dir.path().join("missing").join("db.json")));
        let app = app_over(store, &dir);

        let payload = json!({
            "name": "Nina Alvarez",
            "title": "Data Engineer",
            "department": "Engineering"
        });
        let response = app.oneshot(post_json("/api/candidates", &payload)).await.unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await,
            json!({"error": "Failed to save candidate"})
        );
    }

    #[tokio::test]
    async fn test_search_applies_criteria_and_summarizes() {
        let dir = TempDir::new().unwrap();
        let (app, store) = fresh_app(&dir);
        store.seed_if_empty().await.unwrap();

        let response = app
            .oneshot(get("/api/candidates/search?department=Engineering"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        let names: Vec<_> = body["candidates"]
            .as_array()
            .unwrap()
            .iter()
            .map(|c| c["name"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(names, vec!["Alex Johnson", "Priya Patel"]);
        assert_eq!(body["summary"]["count"], 2);
        assert_eq!(body["summary"]["average_experience"], 4.5);
    }

    #[tokio::test]
    async fn test_search_experience_band_from_query() {
        let dir = TempDir::new().unwrap();
        let (app, store) = fresh_app(&dir);
        store.seed_if_empty().await.unwrap();

        // "5+" percent-encoded; Alex (7), James (5), David (8)
        let response = app
            .oneshot(get("/api/candidates/search?experience=5%2B"))
            .await
            .unwrap();
        let body = body_json(response).await;
        let names: Vec<_> = body["candidates"]
            .as_array()
            .unwrap()
            .iter()
            .map(|c| c["name"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(names, vec!["Alex Johnson", "James Wilson", "David Kim"]);
    }

    #[tokio::test]
    async fn test_analytics_ranks_skills_for_chart() {
        let dir = TempDir::new().unwrap();
        let (app, store) = fresh_app(&dir);
        store.seed_if_empty().await.unwrap();

        let response = app.oneshot(get("/api/candidates/analytics")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["summary"]["count"], 6);
        assert_eq!(body["summary"]["average_experience"], 4.8);

        // all seed skills are distinct, so ties rank in first-seen order
        let skills = body["top_skills"].as_array().unwrap();
        assert_eq!(skills.len(), 5);
        assert_eq!(skills[0], json!({"label": "JavaScript", "count": 1}));

        let departments = body["top_departments"].as_array().unwrap();
        assert_eq!(departments[0], json!({"label": "Engineering", "count": 2}));
    }

    #[tokio::test]
    async fn test_insights_empty_store_returns_fixed_message() {
        let dir = TempDir::new().unwrap();
        let (app, _) = fresh_app(&dir);
        let response = app.oneshot(get("/api/candidates/insights")).await.unwrap();
        let body = body_json(response).await;
        assert_eq!(body["insight"], NO_DATA_INSIGHT);
    }

    #[tokio::test]
    async fn test_insights_reflect_filtered_collection() {
        let dir = TempDir::new().unwrap();
        let (app, store) = fresh_app(&dir);
        store.seed_if_empty().await.unwrap();

        let response = app
            .oneshot(get("/api/candidates/insights?department=Engineering"))
            .await
            .unwrap();
        let text = body_json(response).await["insight"]
            .as_str()
            .unwrap()
            .to_string();
        assert!(text.contains("Current talent pool: 2 entities."));
        assert!(text.contains("Dominant department: Engineering (2 individuals)."));
        assert!(text.contains("Average neural index (experience): 4.5 years."));
    }
}
