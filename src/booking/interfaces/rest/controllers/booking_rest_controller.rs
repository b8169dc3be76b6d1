use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};
use uuid::Uuid;
use validator::Validate;

use crate::booking::{
    domain::{
        model::{
            commands::{
                create_booking_command::CreateBookingCommand,
                delete_booking_command::DeleteBookingCommand,
                update_booking_command::UpdateBookingCommand,
            },
            enums::booking_domain_error::BookingDomainError,
        },
        services::{
            booking_command_service::BookingCommandService,
            booking_query_service::BookingQueryService,
        },
    },
    interfaces::rest::resources::{
        authority_status_resource::AuthorityStatusResource,
        booking_error_response_resource::BookingErrorResponseResource,
        booking_health_resource::BookingHealthResource,
        booking_mutation_response_resource::BookingMutationResponseResource,
        create_booking_request_resource::CreateBookingRequestResource,
        room_booking_resource::{RoomBookingListResource, RoomBookingResource},
        update_booking_request_resource::UpdateBookingRequestResource,
    },
};

#[derive(Clone)]
pub struct BookingRestControllerState {
    pub command_service: Arc<dyn BookingCommandService>,
    pub query_service: Arc<dyn BookingQueryService>,
}

pub fn router(state: BookingRestControllerState) -> Router {
    Router::new()
        .route("/bookings", get(list_bookings).post(create_booking))
        .route("/bookings/health", get(health))
        .route("/bookings/check-authority", get(check_authority_status))
        .route(
            "/bookings/:booking_id",
            get(get_booking_detail)
                .put(update_booking)
                .delete(delete_booking),
        )
        .with_state(state)
}

#[utoipa::path(
    post,
    path = "/bookings",
    tag = "booking",
    request_body = CreateBookingRequestResource,
    responses(
        (status = 201, description = "Booking created after the authority confirmed the slot", body = BookingMutationResponseResource),
        (status = 400, description = "Missing fields or slot denied by the authority", body = BookingErrorResponseResource),
        (status = 503, description = "Authority unreachable, timed out, or answered non-2xx", body = BookingErrorResponseResource),
        (status = 500, description = "Infrastructure failure", body = BookingErrorResponseResource)
    )
)]
pub async fn create_booking(
    State(state): State<BookingRestControllerState>,
    Json(request): Json<CreateBookingRequestResource>,
) -> Result<
    (StatusCode, Json<BookingMutationResponseResource>),
    (StatusCode, Json<BookingErrorResponseResource>),
> {
    if let Err(validation_error) = request.validate() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(BookingErrorResponseResource {
                success: false,
                error: Some(validation_error.to_string()),
                reason: None,
                details: None,
            }),
        ));
    }

    let command = CreateBookingCommand::new(
        request.room,
        request.date,
        request.time_start,
        request.time_end,
        request.booking_type,
        request.email,
    )
    .map_err(map_domain_error)?;

    let booking = state
        .command_service
        .handle_create(command)
        .await
        .map_err(map_domain_error)?;

    Ok((
        StatusCode::CREATED,
        Json(BookingMutationResponseResource {
            success: true,
            message: "booking created successfully".to_string(),
            booking: Some(RoomBookingResource::from(&booking)),
        }),
    ))
}

#[utoipa::path(
    put,
    path = "/bookings/{booking_id}",
    tag = "booking",
    params(("booking_id" = String, Path, description = "Booking identifier")),
    request_body = UpdateBookingRequestResource,
    responses(
        (status = 200, description = "Booking updated", body = BookingMutationResponseResource),
        (status = 400, description = "Slot denied by the authority", body = BookingErrorResponseResource),
        (status = 404, description = "Booking not found", body = BookingErrorResponseResource),
        (status = 503, description = "Availability could not be verified", body = BookingErrorResponseResource)
    )
)]
pub async fn update_booking(
    State(state): State<BookingRestControllerState>,
    Path(booking_id): Path<Uuid>,
    Json(request): Json<UpdateBookingRequestResource>,
) -> Result<Json<BookingMutationResponseResource>, (StatusCode, Json<BookingErrorResponseResource>)>
{
    if let Err(validation_error) = request.validate() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(BookingErrorResponseResource {
                success: false,
                error: Some(validation_error.to_string()),
                reason: None,
                details: None,
            }),
        ));
    }

    let command = UpdateBookingCommand::new(
        booking_id,
        request.room,
        request.date,
        request.time_start,
        request.time_end,
        request.booking_type,
        request.email,
    );

    let booking = state
        .command_service
        .handle_update(command)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(BookingMutationResponseResource {
        success: true,
        message: "booking updated successfully".to_string(),
        booking: Some(RoomBookingResource::from(&booking)),
    }))
}

#[utoipa::path(
    delete,
    path = "/bookings/{booking_id}",
    tag = "booking",
    params(("booking_id" = String, Path, description = "Booking identifier")),
    responses(
        (status = 200, description = "Booking deleted; the authority's canonical record is untouched", body = BookingMutationResponseResource),
        (status = 404, description = "Booking not found", body = BookingErrorResponseResource)
    )
)]
pub async fn delete_booking(
    State(state): State<BookingRestControllerState>,
    Path(booking_id): Path<Uuid>,
) -> Result<Json<BookingMutationResponseResource>, (StatusCode, Json<BookingErrorResponseResource>)>
{
    state
        .command_service
        .handle_delete(DeleteBookingCommand::new(booking_id))
        .await
        .map_err(map_domain_error)?;

    Ok(Json(BookingMutationResponseResource {
        success: true,
        message: format!("booking {booking_id} deleted successfully"),
        booking: None,
    }))
}

#[utoipa::path(
    get,
    path = "/bookings",
    tag = "booking",
    responses(
        (status = 200, description = "Most recent bookings, newest first", body = RoomBookingListResource),
        (status = 500, description = "Infrastructure failure", body = BookingErrorResponseResource)
    )
)]
pub async fn list_bookings(
    State(state): State<BookingRestControllerState>,
) -> Result<Json<RoomBookingListResource>, (StatusCode, Json<BookingErrorResponseResource>)> {
    let bookings = state
        .query_service
        .handle_list()
        .await
        .map_err(map_domain_error)?;

    let bookings: Vec<RoomBookingResource> =
        bookings.iter().map(RoomBookingResource::from).collect();

    Ok(Json(RoomBookingListResource {
        count: bookings.len(),
        bookings,
    }))
}

#[utoipa::path(
    get,
    path = "/bookings/{booking_id}",
    tag = "booking",
    params(("booking_id" = String, Path, description = "Booking identifier")),
    responses(
        (status = 200, description = "Booking detail", body = RoomBookingResource),
        (status = 404, description = "Booking not found", body = BookingErrorResponseResource)
    )
)]
pub async fn get_booking_detail(
    State(state): State<BookingRestControllerState>,
    Path(booking_id): Path<Uuid>,
) -> Result<Json<RoomBookingResource>, (StatusCode, Json<BookingErrorResponseResource>)> {
    let booking = state
        .query_service
        .handle_get(booking_id)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(RoomBookingResource::from(&booking)))
}

#[utoipa::path(
    get,
    path = "/bookings/check-authority",
    tag = "booking",
    responses(
        (status = 200, description = "Whether the authority currently answers its health probe", body = AuthorityStatusResource)
    )
)]
pub async fn check_authority_status(
    State(state): State<BookingRestControllerState>,
) -> Json<AuthorityStatusResource> {
    Json(AuthorityStatusResource {
        available: state.query_service.handle_authority_probe().await,
    })
}

#[utoipa::path(
    get,
    path = "/bookings/health",
    tag = "booking",
    responses(
        (status = 200, description = "Service is up", body = BookingHealthResource)
    )
)]
pub async fn health() -> Json<BookingHealthResource> {
    Json(BookingHealthResource {
        status: "ok".to_string(),
        service: "Booking Service".to_string(),
    })
}

fn map_domain_error(
    error: BookingDomainError,
) -> (StatusCode, Json<BookingErrorResponseResource>) {
    let status = match &error {
        BookingDomainError::MissingFields
        | BookingDomainError::SlotUnavailable(_)
        | BookingDomainError::InvalidDateFormat
        | BookingDomainError::InvalidTimeFormat => StatusCode::BAD_REQUEST,
        BookingDomainError::BookingNotFound => StatusCode::NOT_FOUND,
        BookingDomainError::AuthorityUpstreamError { .. }
        | BookingDomainError::AuthorityTimeout
        | BookingDomainError::AuthorityUnreachable
        | BookingDomainError::AvailabilityVerificationFailed => StatusCode::SERVICE_UNAVAILABLE,
        BookingDomainError::InfrastructureError(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    let resource = match error {
        // The authority's denial reason goes out verbatim.
        BookingDomainError::SlotUnavailable(reason) => BookingErrorResponseResource {
            success: false,
            error: None,
            reason: Some(reason),
            details: None,
        },
        BookingDomainError::AuthorityUpstreamError { details } => BookingErrorResponseResource {
            success: false,
            error: Some("availability service returned an error".to_string()),
            reason: None,
            details: Some(details),
        },
        other => BookingErrorResponseResource {
            success: false,
            error: Some(other.to_string()),
            reason: None,
            details: None,
        },
    };

    (status, Json(resource))
}
