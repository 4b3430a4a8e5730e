//! Catalog HTTP handlers.

use axum::extract::{Path, RawQuery, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::api::{AgentView, FacetsResponse, ListAgentsResponse};
use crate::catalog::{matches, FilterCriteria};
use crate::handlers::problem_details;
use crate::query::parse_query;
use crate::server::AppState;

/// GET /api/v1/agents
///
/// Filter criteria come from the request's query string. The shared store's
/// own criteria are session state; they are neither consulted nor mutated
/// here, so one client's filters never leak into another's view.
pub async fn list_agents(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
) -> Json<ListAgentsResponse> {
    let criteria = query
        .as_deref()
        .and_then(parse_query)
        .map(|patch| FilterCriteria::default().merged(patch))
        .unwrap_or_default();

    let records = state.store.records().await;
    let total = records.len();
    let agents = records
        .iter()
        .filter(|r| matches(r, &criteria))
        .map(AgentView::from)
        .collect();

    Json(ListAgentsResponse { agents, total })
}

/// GET /api/v1/agents/facets
pub async fn facets(State(state): State<AppState>) -> Json<FacetsResponse> {
    let facets = state.store.facets().await;
    Json(FacetsResponse {
        statuses: facets.statuses.iter().map(ToString::to_string).collect(),
        categories: facets.categories,
        pricing_models: facets
            .pricing_models
            .iter()
            .map(ToString::to_string)
            .collect(),
    })
}

/// GET /api/v1/agents/{id}
pub async fn get_agent(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let Some(record) = state.store.get(&id).await else {
        return problem_details::not_found(format!("agent '{id}' not found")).into_response();
    };

    (StatusCode::OK, Json(AgentView::from(&record))).into_response()
}
