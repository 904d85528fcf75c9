//! Handlers for the `/tasks` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use taskline_core::error::CoreError;
use taskline_db::models::task::{CreateTask, Task, UpdateTask};
use taskline_db::repositories::TaskRepo;

use crate::error::{AppError, AppResult, Echo};
use crate::response::{MessageData, MessageId};
use crate::state::AppState;

use super::parse_id;

/// GET /tasks
pub async fn list(State(state): State<AppState>) -> AppResult<Json<MessageData<Vec<Task>>>> {
    let tasks = TaskRepo::list(&state.pool)
        .await
        .map_err(|source| AppError::Persistence {
            message: "Could not get your tasks.",
            echo: Echo::None,
            source,
        })?;
    Ok(Json(MessageData {
        message: "Here are your tasks",
        data: tasks,
    }))
}

/// POST /tasks
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateTask>,
) -> AppResult<(StatusCode, Json<MessageData<Task>>)> {
    let task = TaskRepo::create(&state.pool, &input)
        .await
        .map_err(|source| AppError::Persistence {
            message: "Could not create your task.",
            echo: Echo::input(&input),
            source,
        })?;
    Ok((
        StatusCode::CREATED,
        Json(MessageData {
            message: "Created a new task.",
            data: task,
        }),
    ))
}

/// GET /tasks/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Json<MessageData<Task>>> {
    let id = parse_id("Task", &raw_id)?;
    let task = TaskRepo::find_by_id(&state.pool, id)
        .await
        .map_err(|source| AppError::Persistence {
            message: "Could not get your task.",
            echo: Echo::Id(id),
            source,
        })?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Task",
            id: id.into(),
        }))?;
    Ok(Json(MessageData {
        message: "Here is your task.",
        data: task,
    }))
}

/// PATCH /tasks/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    Json(input): Json<UpdateTask>,
) -> AppResult<Json<MessageData<Task>>> {
    let id = parse_id("Task", &raw_id)?;
    let task = TaskRepo::update(&state.pool, id, &input)
        .await
        .map_err(|source| AppError::Persistence {
            message: "Could not update your task.",
            echo: Echo::Id(id),
            source,
        })?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Task",
            id: id.into(),
        }))?;
    Ok(Json(MessageData {
        message: "Updated task.",
        data: task,
    }))
}

/// DELETE /tasks/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Json<MessageId>> {
    let id = parse_id("Task", &raw_id)?;
    let deleted = TaskRepo::delete(&state.pool, id)
        .await
        .map_err(|source| AppError::Persistence {
            message: "Could not delete your task.",
            echo: Echo::Id(id),
            source,
        })?;
    if deleted {
        Ok(Json(MessageId {
            message: "Deleted task.",
            id,
        }))
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Task",
            id: id.into(),
        }))
    }
}
