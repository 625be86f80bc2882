use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;
use serde_json::Value;
use time::OffsetDateTime;
use utoipa::ToSchema;

use crate::error::{AppError, AppResult};
use crate::models::{Project, ProjectSummary};
use crate::state::AppState;

/// Display name stored when the payload carries no usable `projectName`
pub const DEFAULT_PROJECT_NAME: &str = "Untitled Project";

// ============ Request/Response DTOs ============

#[derive(Debug, Serialize, ToSchema)]
pub struct SaveProjectResponse {
    pub message: String,
    pub id: i32,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ProjectSummaryResponse {
    pub id: i32,
    pub name: String,
    #[schema(value_type = String)]
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl From<ProjectSummary> for ProjectSummaryResponse {
    fn from(p: ProjectSummary) -> Self {
        Self {
            id: p.id,
            name: p.name,
            updated_at: p.updated_at,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ProjectListResponse {
    pub projects: Vec<ProjectSummaryResponse>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ProjectResponse {
    pub id: i32,
    pub name: String,
    /// The study document exactly as it was last saved
    #[schema(value_type = Object)]
    pub data: Value,
    #[schema(value_type = String)]
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[schema(value_type = String)]
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl From<Project> for ProjectResponse {
    fn from(p: Project) -> Self {
        Self {
            id: p.id,
            name: p.name,
            data: p.data,
            created_at: p.created_at,
            updated_at: p.updated_at,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

// ============ Handlers ============

/// Save a study document, creating or updating the project that carries its name
#[utoipa::path(
    post,
    path = "/api/save-project",
    request_body = Object,
    responses(
        (status = 200, description = "Project saved or updated", body = SaveProjectResponse),
        (status = 500, description = "Storage failure")
    ),
    tag = "Projects"
)]
pub async fn save_project(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> AppResult<Json<SaveProjectResponse>> {
    // The name is read defensively; the whole body, projectName included,
    // is stored as the payload.
    let name = payload
        .get("projectName")
        .and_then(Value::as_str)
        .unwrap_or(DEFAULT_PROJECT_NAME);

    let outcome = state.store.upsert_by_name(name, &payload).await?;

    let message = if outcome.created {
        "Project saved successfully"
    } else {
        "Project updated successfully"
    };

    Ok(Json(SaveProjectResponse {
        message: message.to_string(),
        id: outcome.id,
    }))
}

/// List all saved projects
#[utoipa::path(
    get,
    path = "/api/projects",
    responses(
        (status = 200, description = "Summaries of every stored project", body = ProjectListResponse),
        (status = 500, description = "Storage failure")
    ),
    tag = "Projects"
)]
pub async fn list_projects(
    State(state): State<AppState>,
) -> AppResult<Json<ProjectListResponse>> {
    let summaries = state.store.list_all().await?;

    Ok(Json(ProjectListResponse {
        projects: summaries.into_iter().map(|s| s.into()).collect(),
    }))
}

/// Load a project by ID
#[utoipa::path(
    get,
    path = "/api/projects/{id}",
    params(
        ("id" = i32, Path, description = "Project ID")
    ),
    responses(
        (status = 200, description = "Full project including its payload", body = ProjectResponse),
        (status = 404, description = "Project not found")
    ),
    tag = "Projects"
)]
pub async fn get_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<ProjectResponse>> {
    let id = parse_project_id(&id)?;
    let project = state.store.get_by_id(id).await?;

    Ok(Json(project.into()))
}

/// Delete a project by ID
#[utoipa::path(
    delete,
    path = "/api/projects/{id}",
    params(
        ("id" = i32, Path, description = "Project ID")
    ),
    responses(
        (status = 200, description = "Project deleted", body = MessageResponse),
        (status = 404, description = "Project not found")
    ),
    tag = "Projects"
)]
pub async fn delete_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    let id = parse_project_id(&id)?;
    state.store.delete_by_id(id).await?;

    Ok(Json(MessageResponse {
        message: "Project deleted successfully".to_string(),
    }))
}

// Ids that do not parse as integers are treated like unmapped routes.
fn parse_project_id(raw: &str) -> AppResult<i32> {
    raw.parse()
        .map_err(|_| AppError::NotFound("Resource".to_string()))
}
