use serde_json::Value;

/// Domain-level errors.
///
/// The HTTP surface distinguishes exactly two failure classes: an identifier
/// that does not resolve to a record, and a persistence operation that
/// fails. The first is domain-level and lives here; the second carries
/// driver detail and is modelled at the API layer.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The identifier did not resolve to a record.
    ///
    /// `id` holds whatever the caller supplied, including raw path text
    /// that never parsed as an id, so the response can echo it back.
    #[error("{entity} not found (id {id})")]
    NotFound { entity: &'static str, id: Value },
}
