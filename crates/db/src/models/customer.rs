//! Customer entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use taskline_core::types::{DbId, Timestamp};

/// A customer row from the `customers` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Customer {
    pub id: DbId,
    pub name: Option<String>,
    pub description: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new customer.
///
/// No field is required; anything omitted is stored as NULL. Derives
/// `Serialize` so a failed save can echo the submitted fields back.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCustomer {
    pub name: Option<String>,
    pub description: Option<String>,
}

/// DTO for updating an existing customer. Only fields present in the
/// request body are applied.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateCustomer {
    pub name: Option<String>,
    pub description: Option<String>,
}
