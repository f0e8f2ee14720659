//! Axum route handlers for the Candidate Directory API.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::directory::analytics::{summarize, top_departments, top_skills, FrequencyEntry, Summary};
use crate::directory::filter::{ExperienceBand, FilterCriteria};
use crate::directory::view::DirectoryView;
use crate::errors::AppError;
use crate::models::candidate::{Candidate, NewCandidate};
use crate::state::AppState;

/// Chart slice count, matching the five-segment skills doughnut.
const TOP_ENTRIES_LIMIT: usize = 5;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

/// Filter criteria as they arrive on the query string. The experience band
/// stays a raw string here; unknown values deliberately match everything.
#[derive(Debug, Deserialize)]
pub struct CriteriaQuery {
    pub term: Option<String>,
    pub department: Option<String>,
    pub skill: Option<String>,
    pub experience: Option<String>,
}

impl From<CriteriaQuery> for FilterCriteria {
    fn from(query: CriteriaQuery) -> Self {
        FilterCriteria {
            term: query.term,
            department: query.department,
            skill: query.skill,
            experience: query.experience.as_deref().and_then(ExperienceBand::parse),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub candidates: Vec<Candidate>,
    pub summary: Summary,
}

#[derive(Debug, Serialize)]
pub struct AnalyticsResponse {
    pub summary: Summary,
    pub top_skills: Vec<FrequencyEntry>,
    pub top_departments: Vec<FrequencyEntry>,
}

#[derive(Debug, Serialize)]
pub struct InsightResponse {
    pub insight: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/candidates
///
/// Returns every candidate in storage order, unfiltered. Never fails; an
/// empty or unreadable store yields an empty array.
pub async fn handle_list_candidates(State(state): State<AppState>) -> Json<Vec<Candidate>> {
    Json(state.store.load().await.candidates)
}

/// POST /api/candidates
///
/// Validates the payload, stamps a fresh id, appends through the store, and
/// returns the stored candidate. Validation failure leaves the collection
/// untouched; a failed save is surfaced and not committed.
pub async fn handle_add_candidate(
    State(state): State<AppState>,
    Json(payload): Json<NewCandidate>,
) -> Result<(StatusCode, Json<Candidate>), AppError> {
    if !payload.has_required_fields() {
        return Err(AppError::Validation("Missing required fields".to_string()));
    }

    let stored = state.store.append(payload.into_candidate()).await?;

    Ok((StatusCode::CREATED, Json(stored)))
}

/// GET /api/candidates/search
///
/// The filtered subsequence plus its summary, for rendering candidate cards
/// and the analytics panel in one round trip.
pub async fn handle_search_candidates(
    State(state): State<AppState>,
    Query(query): Query<CriteriaQuery>,
) -> Json<SearchResponse> {
    let mut view = DirectoryView::new(state.store.load().await.candidates);
    view.apply(query.into());

    Json(SearchResponse {
        summary: view.summary(),
        candidates: view.visible(),
    })
}

/// GET /api/candidates/analytics
///
/// Whole-collection summary plus the ranked top skills and departments,
/// shaped for the chart.
pub async fn handle_analytics(State(state): State<AppState>) -> Json<AnalyticsResponse> {
    let candidates = state.store.load().await.candidates;

    Json(AnalyticsResponse {
        summary: summarize(&candidates),
        top_skills: top_skills(&candidates, TOP_ENTRIES_LIMIT),
        top_departments: top_departments(&candidates, TOP_ENTRIES_LIMIT),
    })
}

/// GET /api/candidates/insights
///
/// The derived insight string for the filtered view; accepts the same
/// criteria as search.
pub async fn handle_insights(
    State(state): State<AppState>,
    Query(query): Query<CriteriaQuery>,
) -> Json<InsightResponse> {
    let mut view = DirectoryView::new(state.store.load().await.candidates);
    view.apply(query.into());

    Json(InsightResponse {
        insight: view.insight(),
    })
}
