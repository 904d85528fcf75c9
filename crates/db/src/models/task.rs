//! Task entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use taskline_core::types::{DbId, Timestamp};

/// A task row from the `tasks` table.
///
/// `project_id` is a plain column without a foreign key; a task may
/// reference a project that no longer exists.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Task {
    pub id: DbId,
    pub name: Option<String>,
    pub description: Option<String>,
    pub project_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new task. Omitted fields are stored as NULL;
/// `Serialize` lets a failed save echo the input back.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTask {
    pub name: Option<String>,
    pub description: Option<String>,
    pub project_id: Option<DbId>,
}

/// DTO for updating an existing task. Only fields present in the request
/// body are applied.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateTask {
    pub name: Option<String>,
    pub description: Option<String>,
    pub project_id: Option<DbId>,
}
