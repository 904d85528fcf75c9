//! Project entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use taskline_core::types::{DbId, Timestamp};

/// A project row from the `projects` table.
///
/// `customer_id` is a plain column without a foreign key; a project may
/// reference a customer that no longer exists.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Project {
    pub id: DbId,
    pub name: Option<String>,
    pub description: Option<String>,
    pub customer_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new project. Omitted fields are stored as NULL;
/// `Serialize` lets a failed save echo the input back.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateProject {
    pub name: Option<String>,
    pub description: Option<String>,
    pub customer_id: Option<DbId>,
}

/// DTO for updating an existing project. Only fields present in the
/// request body are applied.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateProject {
    pub name: Option<String>,
    pub description: Option<String>,
    pub customer_id: Option<DbId>,
}
