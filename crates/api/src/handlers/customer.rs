//! Handlers for the `/customers` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use taskline_core::error::CoreError;
use taskline_db::models::customer::{CreateCustomer, Customer, UpdateCustomer};
use taskline_db::repositories::CustomerRepo;

use crate::error::{AppError, AppResult, Echo};
use crate::response::{MessageData, MessageId};
use crate::state::AppState;

use super::parse_id;

/// GET /customers
pub async fn list(State(state): State<AppState>) -> AppResult<Json<MessageData<Vec<Customer>>>> {
    let customers = CustomerRepo::list(&state.pool)
        .await
        .map_err(|source| AppError::Persistence {
            message: "Could not fetch the customers",
            echo: Echo::None,
            source,
        })?;
    Ok(Json(MessageData {
        message: "Here are your customers",
        data: customers,
    }))
}

/// POST /customers
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateCustomer>,
) -> AppResult<(StatusCode, Json<MessageData<Customer>>)> {
    let customer =
        CustomerRepo::create(&state.pool, &input)
            .await
            .map_err(|source| AppError::Persistence {
                message: "Could not create customer",
                echo: Echo::input(&input),
                source,
            })?;
    Ok((
        StatusCode::CREATED,
        Json(MessageData {
            message: "Successfully created a new customer.",
            data: customer,
        }),
    ))
}

/// GET /customers/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Json<MessageData<Customer>>> {
    let id = parse_id("Customer", &raw_id)?;
    let customer = CustomerRepo::find_by_id(&state.pool, id)
        .await
        .map_err(|source| AppError::Persistence {
            message: "Could not fetch the customer",
            echo: Echo::Id(id),
            source,
        })?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Customer",
            id: id.into(),
        }))?;
    Ok(Json(MessageData {
        message: "Here is your customer",
        data: customer,
    }))
}

/// PATCH /customers/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    Json(input): Json<UpdateCustomer>,
) -> AppResult<Json<MessageData<Customer>>> {
    let id = parse_id("Customer", &raw_id)?;
    let customer = CustomerRepo::update(&state.pool, id, &input)
        .await
        .map_err(|source| AppError::Persistence {
            message: "Could not update customer",
            echo: Echo::Id(id),
            source,
        })?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Customer",
            id: id.into(),
        }))?;
    Ok(Json(MessageData {
        message: "Successfully updated customer",
        data: customer,
    }))
}

/// DELETE /customers/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Json<MessageId>> {
    let id = parse_id("Customer", &raw_id)?;
    let deleted = CustomerRepo::delete(&state.pool, id)
        .await
        .map_err(|source| AppError::Persistence {
            message: "Could not delete customer",
            echo: Echo::Id(id),
            source,
        })?;
    if deleted {
        Ok(Json(MessageId {
            message: "Successfully deleted customer",
            id,
        }))
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Customer",
            id: id.into(),
        }))
    }
}
