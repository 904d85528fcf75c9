//! Shared response envelope types for API handlers.
//!
//! All success responses use a `{ "message": ..., "data"|"id": ... }`
//! envelope. Use these structs instead of ad-hoc `serde_json::json!` to get
//! compile-time type safety and a consistent shape across entities.

use serde::Serialize;
use taskline_core::types::DbId;

/// `{ "message": ..., "data": ... }` envelope for responses carrying a
/// record or a collection.
#[derive(Debug, Serialize)]
pub struct MessageData<T: Serialize> {
    pub message: &'static str,
    pub data: T,
}

/// `{ "message": ..., "id": ... }` envelope for delete confirmations.
#[derive(Debug, Serialize)]
pub struct MessageId {
    pub message: &'static str,
    pub id: DbId,
}
