//! Handlers for the `/projects` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use taskline_core::error::CoreError;
use taskline_db::models::project::{CreateProject, Project, UpdateProject};
use taskline_db::repositories::ProjectRepo;

use crate::error::{AppError, AppResult, Echo};
use crate::response::{MessageData, MessageId};
use crate::state::AppState;

use super::parse_id;

/// GET /projects
pub async fn list(State(state): State<AppState>) -> AppResult<Json<MessageData<Vec<Project>>>> {
    let projects = ProjectRepo::list(&state.pool)
        .await
        .map_err(|source| AppError::Persistence {
            message: "Could not get your projects.",
            echo: Echo::None,
            source,
        })?;
    Ok(Json(MessageData {
        message: "Here are your projects",
        data: projects,
    }))
}

/// POST /projects
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateProject>,
) -> AppResult<(StatusCode, Json<MessageData<Project>>)> {
    let project =
        ProjectRepo::create(&state.pool, &input)
            .await
            .map_err(|source| AppError::Persistence {
                message: "Could not create project.",
                echo: Echo::input(&input),
                source,
            })?;
    Ok((
        StatusCode::CREATED,
        Json(MessageData {
            message: "Successfully created project.",
            data: project,
        }),
    ))
}

/// GET /projects/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Json<MessageData<Project>>> {
    let id = parse_id("Project", &raw_id)?;
    let project = ProjectRepo::find_by_id(&state.pool, id)
        .await
        .map_err(|source| AppError::Persistence {
            message: "Could not get your project.",
            echo: Echo::Id(id),
            source,
        })?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id: id.into(),
        }))?;
    Ok(Json(MessageData {
        message: "Here is your project.",
        data: project,
    }))
}

/// PATCH /projects/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    Json(input): Json<UpdateProject>,
) -> AppResult<Json<MessageData<Project>>> {
    let id = parse_id("Project", &raw_id)?;
    let project = ProjectRepo::update(&state.pool, id, &input)
        .await
        .map_err(|source| AppError::Persistence {
            message: "Could not update project.",
            echo: Echo::Id(id),
            source,
        })?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id: id.into(),
        }))?;
    Ok(Json(MessageData {
        message: "Project updated.",
        data: project,
    }))
}

/// DELETE /projects/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Json<MessageId>> {
    let id = parse_id("Project", &raw_id)?;
    let deleted = ProjectRepo::delete(&state.pool, id)
        .await
        .map_err(|source| AppError::Persistence {
            message: "Could not delete project.",
            echo: Echo::Id(id),
            source,
        })?;
    if deleted {
        Ok(Json(MessageId {
            message: "Project deleted.",
            id,
        }))
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id: id.into(),
        }))
    }
}
