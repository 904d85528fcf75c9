//! HTTP route tree.

pub mod customer;
pub mod health;
pub mod project;
pub mod task;

use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Static greeting payload served at the root path.
#[derive(Serialize)]
struct Greeting {
    greeting: &'static str,
}

/// GET / -- static greeting, unrelated to entity CRUD.
async fn root() -> Json<Greeting> {
    Json(Greeting {
        greeting: "Hello world in JSON",
    })
}

/// Build the application route tree.
///
/// ```text
/// GET    /                greeting
///
/// GET    /customers       list
/// POST   /customers       create
/// GET    /customers/{id}  get
/// PATCH  /customers/{id}  update
/// DELETE /customers/{id}  delete
///
/// /projects, /tasks       same five routes per entity
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(root))
        .nest("/customers", customer::router())
        .nest("/projects", project::router())
        .nest("/tasks", task::router())
}
