use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::{get, post},
};

use crate::availability::{
    domain::{
        model::{
            commands::check_availability_command::CheckAvailabilityCommand,
            enums::{
                availability_decision::AvailabilityDecision,
                availability_domain_error::AvailabilityDomainError,
            },
        },
        services::{
            availability_command_service::AvailabilityCommandService,
            availability_query_service::AvailabilityQueryService,
        },
    },
    interfaces::rest::resources::{
        availability_check_resource::{AvailabilityCheckListResource, AvailabilityCheckResource},
        availability_decision_resource::AvailabilityDecisionResource,
        availability_error_response_resource::AvailabilityErrorResponseResource,
        availability_health_resource::AvailabilityHealthResource,
        check_availability_request_resource::CheckAvailabilityRequestResource,
        confirmed_booking_resource::{ConfirmedBookingListResource, ConfirmedBookingResource},
    },
};

#[derive(Clone)]
pub struct AvailabilityRestControllerState {
    pub command_service: Arc<dyn AvailabilityCommandService>,
    pub query_service: Arc<dyn AvailabilityQueryService>,
}

pub fn router(state: AvailabilityRestControllerState) -> Router {
    Router::new()
        .route("/check", post(check_availability))
        .route("/checks", get(list_checks))
        .route("/bookings-list", get(list_confirmed_bookings))
        .route("/health", get(health))
        .with_state(state)
}

#[utoipa::path(
    post,
    path = "/check",
    tag = "availability",
    request_body = CheckAvailabilityRequestResource,
    responses(
        (status = 200, description = "Request evaluated; available flag carries the verdict", body = AvailabilityDecisionResource),
        (status = 400, description = "Malformed request, still recorded in the audit log", body = AvailabilityDecisionResource),
        (status = 500, description = "Infrastructure failure", body = AvailabilityErrorResponseResource)
    )
)]
pub async fn check_availability(
    State(state): State<AvailabilityRestControllerState>,
    Json(request): Json<CheckAvailabilityRequestResource>,
) -> Result<
    (StatusCode, Json<AvailabilityDecisionResource>),
    (StatusCode, Json<AvailabilityErrorResponseResource>),
> {
    let command = CheckAvailabilityCommand::new(
        request.room,
        request.date,
        request.time_start,
        request.time_end,
        request.booking_type,
    );

    let decision = state
        .command_service
        .handle_check(command)
        .await
        .map_err(map_domain_error)?;

    let (status, resource) = match decision {
        AvailabilityDecision::Granted { message } => (
            StatusCode::OK,
            AvailabilityDecisionResource {
                available: true,
                reason: None,
                message: Some(message),
            },
        ),
        // A well-formed request for a taken slot is a normal negative
        // outcome, hence 200.
        AvailabilityDecision::Denied { reason } => (
            StatusCode::OK,
            AvailabilityDecisionResource {
                available: false,
                reason: Some(reason),
                message: None,
            },
        ),
        AvailabilityDecision::Rejected { reason } => (
            StatusCode::BAD_REQUEST,
            AvailabilityDecisionResource {
                available: false,
                reason: Some(reason),
                message: None,
            },
        ),
    };

    Ok((status, Json(resource)))
}

#[utoipa::path(
    get,
    path = "/checks",
    tag = "availability",
    responses(
        (status = 200, description = "Most recent audit rows, newest first", body = AvailabilityCheckListResource),
        (status = 500, description = "Infrastructure failure", body = AvailabilityErrorResponseResource)
    )
)]
pub async fn list_checks(
    State(state): State<AvailabilityRestControllerState>,
) -> Result<Json<AvailabilityCheckListResource>, (StatusCode, Json<AvailabilityErrorResponseResource>)>
{
    let checks = state
        .query_service
        .handle_list_checks()
        .await
        .map_err(map_domain_error)?;

    let checks: Vec<AvailabilityCheckResource> = checks
        .into_iter()
        .map(|check| AvailabilityCheckResource {
            id: check.id().to_string(),
            room: check.room().to_string(),
            date: check.date().format("%Y-%m-%d").to_string(),
            time_start: check.time_start().format("%H:%M").to_string(),
            time_end: check.time_end().format("%H:%M").to_string(),
            booking_type: check.booking_type().to_string(),
            result: check.result(),
            reason: check.reason().to_string(),
            checked_at: check.checked_at().format("%Y-%m-%d %H:%M:%S").to_string(),
        })
        .collect();

    Ok(Json(AvailabilityCheckListResource {
        count: checks.len(),
        checks,
    }))
}

#[utoipa::path(
    get,
    path = "/bookings-list",
    tag = "availability",
    responses(
        (status = 200, description = "Canonical confirmed bookings", body = ConfirmedBookingListResource),
        (status = 500, description = "Infrastructure failure", body = AvailabilityErrorResponseResource)
    )
)]
pub async fn list_confirmed_bookings(
    State(state): State<AvailabilityRestControllerState>,
) -> Result<Json<ConfirmedBookingListResource>, (StatusCode, Json<AvailabilityErrorResponseResource>)>
{
    let bookings = state
        .query_service
        .handle_list_bookings()
        .await
        .map_err(map_domain_error)?;

    let bookings: Vec<ConfirmedBookingResource> = bookings
        .into_iter()
        .map(|booking| ConfirmedBookingResource {
            id: booking.id().to_string(),
            room: booking.room().to_string(),
            date: booking.date().format("%Y-%m-%d").to_string(),
            time_start: booking.time_start().format("%H:%M").to_string(),
            time_end: booking.time_end().format("%H:%M").to_string(),
            booking_type: booking.booking_type().as_str().to_string(),
            created_at: booking.created_at().format("%Y-%m-%d %H:%M:%S").to_string(),
        })
        .collect();

    Ok(Json(ConfirmedBookingListResource {
        count: bookings.len(),
        bookings,
    }))
}

#[utoipa::path(
    get,
    path = "/health",
    tag = "availability",
    responses(
        (status = 200, description = "Service is up", body = AvailabilityHealthResource)
    )
)]
pub async fn health() -> Json<AvailabilityHealthResource> {
    Json(AvailabilityHealthResource {
        status: "ok".to_string(),
        service: "Availability Service".to_string(),
    })
}

fn map_domain_error(
    error: AvailabilityDomainError,
) -> (StatusCode, Json<AvailabilityErrorResponseResource>) {
    let status = match error {
        AvailabilityDomainError::InfrastructureError(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    (
        status,
        Json(AvailabilityErrorResponseResource {
            message: error.to_string(),
        }),
    )
}
