//! # Workspace HTTP Server
//!
//! The editing API the designer frontend talks to. Responses carry whole
//! page states — the document model is small and snapshot-shaped, so the
//! client re-renders from the full state rather than patching.

use crate::state::{WorkspaceError, WorkspaceState};
use crate::store::{PageStore, PageSummary, StoreError};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use pagecraft_common::Notice;
use pagecraft_editor::{MutationOutcome, SectionMutation};
use pagecraft_model::Page;
use serde::Serialize;
use std::sync::{Arc, Mutex};
use thiserror::Error;
use tower_http::cors::{Any, CorsLayer};

pub type SharedState = Arc<Mutex<WorkspaceState>>;

pub struct WorkspaceServer {
    state: SharedState,
}

impl WorkspaceServer {
    pub fn new(store: Arc<dyn PageStore>) -> Self {
        Self {
            state: Arc::new(Mutex::new(WorkspaceState::new(store))),
        }
    }

    pub fn state(&self) -> SharedState {
        Arc::clone(&self.state)
    }

    /// Build the designer-facing router
    pub fn router(self) -> Router {
        Router::new()
            .route("/pages", get(list_pages))
            .route("/pages/:id", get(get_page).delete(delete_page))
            .route("/pages/:id/mutations", post(apply_mutation))
            .route("/pages/:id/undo", post(undo_page))
            .route("/pages/:id/redo", post(redo_page))
            .route("/pages/:id/save", post(save_page))
            .layer(
                CorsLayer::new()
                    .allow_origin(Any)
                    .allow_methods(Any)
                    .allow_headers(Any),
            )
            .with_state(self.state)
    }
}

#[derive(Error, Debug)]
enum ApiError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Workspace(#[from] WorkspaceError),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::Store(StoreError::InvalidPageId(_))
            | ApiError::Workspace(WorkspaceError::Store(StoreError::InvalidPageId(_))) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::Workspace(WorkspaceError::Mutation(_)) => StatusCode::UNPROCESSABLE_ENTITY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let body = ErrorBody {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

#[derive(Serialize)]
struct MutationResponse {
    outcome: MutationOutcome,
    version: u64,
    page: Page,
}

#[derive(Serialize)]
struct HistoryResponse {
    changed: bool,
    version: u64,
    page: Page,
}

async fn list_pages(
    State(state): State<SharedState>,
) -> Result<Json<Vec<PageSummary>>, ApiError> {
    let workspace = state.lock().unwrap();
    Ok(Json(workspace.list()?))
}

async fn get_page(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<Json<Page>, ApiError> {
    let mut workspace = state.lock().unwrap();
    let doc = workspace.open(&id)?;
    Ok(Json(doc.page()))
}

async fn delete_page(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let mut workspace = state.lock().unwrap();
    if workspace.delete(&id)? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Ok(StatusCode::NOT_FOUND)
    }
}

async fn apply_mutation(
    State(state): State<SharedState>,
    Path(id): Path<String>,
    Json(mutation): Json<SectionMutation>,
) -> Result<Json<MutationResponse>, ApiError> {
    let mut workspace = state.lock().unwrap();
    let (outcome, version) = workspace.apply(&id, &mutation)?;
    let page = workspace.open(&id)?.page();
    Ok(Json(MutationResponse {
        outcome,
        version,
        page,
    }))
}

async fn undo_page(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<Json<HistoryResponse>, ApiError> {
    let mut workspace = state.lock().unwrap();
    let (changed, version) = workspace.undo(&id)?;
    let page = workspace.open(&id)?.page();
    Ok(Json(HistoryResponse {
        changed,
        version,
        page,
    }))
}

async fn redo_page(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<Json<HistoryResponse>, ApiError> {
    let mut workspace = state.lock().unwrap();
    let (changed, version) = workspace.redo(&id)?;
    let page = workspace.open(&id)?.page();
    Ok(Json(HistoryResponse {
        changed,
        version,
        page,
    }))
}

/// Save failures come back as an error notice, not an HTTP error — the
/// designer shows the notice and the user retries
async fn save_page(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<Json<Notice>, ApiError> {
    let mut workspace = state.lock().unwrap();
    Ok(Json(workspace.save(&id)?))
}
