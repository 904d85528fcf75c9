//! Request handlers for the customer, project, and task resources.
//!
//! Each submodule provides async handler functions (list, create, get_by_id,
//! update, delete) for a single entity type. Handlers delegate to the
//! corresponding repository in `taskline_db` and map errors via [`AppError`].

pub mod customer;
pub mod project;
pub mod task;

use taskline_core::error::CoreError;
use taskline_core::types::DbId;

use crate::error::AppError;

/// Parse a path identifier.
///
/// A malformed id is indistinguishable from an id that does not resolve:
/// both produce a 404 for the entity, echoing whatever the caller supplied.
fn parse_id(entity: &'static str, raw: &str) -> Result<DbId, AppError> {
    raw.parse().map_err(|_| {
        AppError::Core(CoreError::NotFound {
            entity,
            id: raw.to_owned().into(),
        })
    })
}
