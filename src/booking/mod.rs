use std::sync::Arc;

use axum::Router;
use sqlx::{PgPool, migrate};

use crate::{
    booking::{
        application::{
            acl::http_availability_authority_facade_impl::HttpAvailabilityAuthorityFacadeImpl,
            command_services::booking_command_service_impl::BookingCommandServiceImpl,
            query_services::booking_query_service_impl::BookingQueryServiceImpl,
        },
        infrastructure::persistence::repositories::postgres::sqlx_room_booking_repository_impl::SqlxRoomBookingRepositoryImpl,
        interfaces::rest::controllers::booking_rest_controller::{
            BookingRestControllerState, router,
        },
    },
    config::app_config::AppConfig,
};

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;

pub async fn build_booking_router(config: &AppConfig) -> Result<Router, String> {
    let pool = PgPool::connect(&config.booking_database_url())
        .await
        .map_err(|e| e.to_string())?;

    migrate!("./migrations/booking")
        .run(&pool)
        .await
        .map_err(|e| e.to_string())?;

    let booking_repository = Arc::new(SqlxRoomBookingRepositoryImpl::new(pool.clone()));

    // The authority's location is injected here, never hardcoded at call
    // sites: the gateway only ever talks to it through this facade.
    let authority_facade = Arc::new(HttpAvailabilityAuthorityFacadeImpl::new(
        config.authority_base_url.clone(),
        config.authority_check_timeout(),
        config.authority_probe_timeout(),
    ));

    let command_service = Arc::new(BookingCommandServiceImpl::new(
        booking_repository.clone(),
        authority_facade.clone(),
    ));
    let query_service = Arc::new(BookingQueryServiceImpl::new(
        booking_repository,
        authority_facade,
    ));

    Ok(router(BookingRestControllerState {
        command_service,
        query_service,
    }))
}
