// ============================================================================
// Filecat API - File Category Handlers
// File: crates/filecat-api/src/handlers/file_categories.rs
// ============================================================================
//! File category HTTP handlers (list, get, create, update, delete)

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use uuid::Uuid;

use crate::auth::{require_admin, CallerIdentity};
use crate::dto::{
    CreateFileCategoryRequest, FileCategoryDto, FileCategoryListResponse,
    FileCategoryMutationResponse, MessageResponse, UpdateFileCategoryRequest,
};
use crate::response::ErrorResponse;
use crate::state::AppState;
use filecat_core::error::DomainError;
use filecat_core::query::ListParams;

/// An unparseable id cannot name a live record.
fn parse_id(raw: &str) -> Result<Uuid, ErrorResponse> {
    Uuid::parse_str(raw)
        .map_err(|_| ErrorResponse::from(DomainError::CategoryNotFound(raw.to_string())))
}

/// List handler - GET /api/file-categories
pub async fn list_file_categories(
    State(state): State<AppState>,
    _caller: CallerIdentity,
    Query(params): Query<ListParams>,
) -> Result<Json<FileCategoryListResponse>, ErrorResponse> {
    let page = state.categories.list(params).await?;
    Ok(Json(FileCategoryListResponse {
        file_categories: page.items.into_iter().map(FileCategoryDto::from).collect(),
        pagination: page.meta,
    }))
}

/// Get handler - GET /api/file-categories/{id}
pub async fn get_file_category(
    State(state): State<AppState>,
    _caller: CallerIdentity,
    Path(id): Path<String>,
) -> Result<Json<FileCategoryDto>, ErrorResponse> {
    let id = parse_id(&id)?;
    let row = state.categories.get(&id).await?;
    Ok(Json(row.into()))
}

/// Create handler - POST /api/file-categories
pub async fn create_file_category(
    State(state): State<AppState>,
    caller: CallerIdentity,
    Json(payload): Json<CreateFileCategoryRequest>,
) -> Result<(StatusCode, Json<FileCategoryMutationResponse>), ErrorResponse> {
    require_admin(&caller)?;
    let input = payload.into_new_category()?;
    let created = state.categories.create(input, &caller.0).await?;

    Ok((
        StatusCode::CREATED,
        Json(FileCategoryMutationResponse {
            message: "File category created successfully".to_string(),
            file_category: created.into(),
        }),
    ))
}

/// Update handler - PUT /api/file-categories/{id}
pub async fn update_file_category(
    State(state): State<AppState>,
    caller: CallerIdentity,
    Path(id): Path<String>,
    Json(payload): Json<UpdateFileCategoryRequest>,
) -> Result<Json<FileCategoryMutationResponse>, ErrorResponse> {
    require_admin(&caller)?;
    let id = parse_id(&id)?;
    let patch = payload.into_patch()?;
    let updated = state.categories.update(&id, patch, &caller.0).await?;

    Ok(Json(FileCategoryMutationResponse {
        message: "File category updated successfully".to_string(),
        file_category: updated.into(),
    }))
}

/// Delete handler - DELETE /api/file-categories/{id}
pub async fn delete_file_category(
    State(state): State<AppState>,
    caller: CallerIdentity,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ErrorResponse> {
    require_admin(&caller)?;
    let id = parse_id(&id)?;
    state.categories.delete(&id, &caller.0).await?;

    Ok(Json(MessageResponse {
        message: "File category deleted successfully".to_string(),
    }))
}
