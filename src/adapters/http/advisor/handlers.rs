//! HTTP handlers for advisor endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use tracing::error;

use crate::application::dispatch::{DispatchError, Dispatcher};
use crate::application::handlers::advisor::{
    CreateAdvisorCommand, DeleteAdvisorCommand, GetAdvisorByIdQuery, ListAdvisorsQuery,
    UpdateAdvisorCommand,
};
use crate::application::request::{AdvisorReply, AdvisorRequest};
use crate::domain::foundation::AdvisorId;

use super::dto::{
    AdvisorCommandResponse, AdvisorCreatedResponse, AdvisorResponse, CreateAdvisorRequestBody,
    ErrorResponse, UpdateAdvisorRequestBody, ValidationProblemResponse,
};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct AdvisorHandlers {
    dispatcher: Arc<Dispatcher>,
}

impl AdvisorHandlers {
    pub fn new(dispatcher: Arc<Dispatcher>) -> Self {
        Self { dispatcher }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/advisors/CreateAdvisor - Register a new advisor
pub async fn create_advisor(
    State(handlers): State<AdvisorHandlers>,
    Json(body): Json<CreateAdvisorRequestBody>,
) -> Response {
    let cmd = CreateAdvisorCommand {
        full_name: body.full_name,
        sin: body.sin,
        address: body.address,
        phone_number: body.phone_number,
    };

    match handlers.dispatcher.dispatch(AdvisorRequest::Create(cmd)).await {
        Ok(AdvisorReply::Created(result)) => {
            let location = format!("/api/advisors/GetAdvisorById/{}", result.advisor_id);
            let response = AdvisorCreatedResponse {
                advisor_id: result.advisor_id.to_string(),
                message: "Advisor created successfully".to_string(),
            };
            (
                StatusCode::CREATED,
                [(header::LOCATION, location)],
                Json(response),
            )
                .into_response()
        }
        Ok(_) => mismatched_reply(),
        Err(e) => handle_dispatch_error(e),
    }
}

/// GET /api/advisors/ListAdvisors - List all advisors, masked
pub async fn list_advisors(State(handlers): State<AdvisorHandlers>) -> Response {
    match handlers
        .dispatcher
        .dispatch(AdvisorRequest::List(ListAdvisorsQuery))
        .await
    {
        Ok(AdvisorReply::Advisors(views)) if views.is_empty() => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::not_found("No advisors found")),
        )
            .into_response(),
        Ok(AdvisorReply::Advisors(views)) => {
            let response: Vec<AdvisorResponse> = views.into_iter().map(Into::into).collect();
            (StatusCode::OK, Json(response)).into_response()
        }
        Ok(_) => mismatched_reply(),
        Err(e) => handle_dispatch_error(e),
    }
}

/// GET /api/advisors/GetAdvisorById/:advisor_id - Get one advisor, masked
pub async fn get_advisor_by_id(
    State(handlers): State<AdvisorHandlers>,
    Path(advisor_id): Path<String>,
) -> Response {
    let advisor_id = match advisor_id.parse::<AdvisorId>() {
        Ok(id) => id,
        Err(_) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::bad_request("Invalid advisor ID")),
            )
                .into_response()
        }
    };

    let query = GetAdvisorByIdQuery { advisor_id };

    match handlers
        .dispatcher
        .dispatch(AdvisorRequest::GetById(query))
        .await
    {
        Ok(AdvisorReply::Advisor(Some(view))) => {
            let response: AdvisorResponse = view.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Ok(AdvisorReply::Advisor(None)) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::not_found("Advisor not found")),
        )
            .into_response(),
        Ok(_) => mismatched_reply(),
        Err(e) => handle_dispatch_error(e),
    }
}

/// PUT /api/advisors/UpdateAdvisor - Update an advisor's contact data
pub async fn update_advisor(
    State(handlers): State<AdvisorHandlers>,
    Json(body): Json<UpdateAdvisorRequestBody>,
) -> Response {
    let cmd = UpdateAdvisorCommand {
        advisor_id: body.advisor_id,
        full_name: body.full_name,
        sin: body.sin,
        address: body.address,
        phone_number: body.phone_number,
    };

    match handlers.dispatcher.dispatch(AdvisorRequest::Update(cmd)).await {
        Ok(AdvisorReply::Updated(true)) => (
            StatusCode::ACCEPTED,
            Json(AdvisorCommandResponse {
                message: "Advisor updated".to_string(),
            }),
        )
            .into_response(),
        Ok(AdvisorReply::Updated(false)) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::not_found("Advisor not found")),
        )
            .into_response(),
        Ok(_) => mismatched_reply(),
        Err(e) => handle_dispatch_error(e),
    }
}

/// DELETE /api/advisors/DeleteAdvisor/:advisor_id - Delete an advisor
pub async fn delete_advisor(
    State(handlers): State<AdvisorHandlers>,
    Path(advisor_id): Path<String>,
) -> Response {
    let advisor_id = match advisor_id.parse::<AdvisorId>() {
        Ok(id) => id,
        Err(_) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::bad_request("Invalid advisor ID")),
            )
                .into_response()
        }
    };

    let cmd = DeleteAdvisorCommand { advisor_id };

    match handlers.dispatcher.dispatch(AdvisorRequest::Delete(cmd)).await {
        Ok(AdvisorReply::Deleted(true)) => (
            StatusCode::ACCEPTED,
            Json(AdvisorCommandResponse {
                message: "Advisor deleted".to_string(),
            }),
        )
            .into_response(),
        Ok(AdvisorReply::Deleted(false)) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::not_found("Advisor not found")),
        )
            .into_response(),
        Ok(_) => mismatched_reply(),
        Err(e) => handle_dispatch_error(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

fn handle_dispatch_error(error: DispatchError) -> Response {
    match error {
        DispatchError::Validation(failure) => (
            StatusCode::BAD_REQUEST,
            Json(ValidationProblemResponse::from_failure(&failure)),
        )
            .into_response(),
        DispatchError::Storage(e) => {
            error!(error = %e, "storage failure while dispatching request");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::internal("An unexpected error occurred")),
            )
                .into_response()
        }
    }
}

fn mismatched_reply() -> Response {
    error!("dispatcher returned a reply of the wrong kind");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse::internal("An unexpected error occurred")),
    )
        .into_response()
}
