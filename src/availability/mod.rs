use std::sync::Arc;

use axum::Router;
use sqlx::{PgPool, migrate};

use crate::{
    availability::{
        application::{
            command_services::availability_command_service_impl::AvailabilityCommandServiceImpl,
            query_services::availability_query_service_impl::AvailabilityQueryServiceImpl,
        },
        infrastructure::persistence::repositories::postgres::{
            sqlx_availability_check_log_repository_impl::SqlxAvailabilityCheckLogRepositoryImpl,
            sqlx_confirmed_booking_repository_impl::SqlxConfirmedBookingRepositoryImpl,
        },
        interfaces::rest::controllers::availability_rest_controller::{
            AvailabilityRestControllerState, router,
        },
    },
    config::app_config::AppConfig,
};

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;

pub async fn build_availability_router(config: &AppConfig) -> Result<Router, String> {
    let pool = PgPool::connect(&config.availability_database_url())
        .await
        .map_err(|e| e.to_string())?;

    migrate!("./migrations/availability")
        .run(&pool)
        .await
        .map_err(|e| e.to_string())?;

    let booking_repository = Arc::new(SqlxConfirmedBookingRepositoryImpl::new(pool.clone()));
    let check_log_repository = Arc::new(SqlxAvailabilityCheckLogRepositoryImpl::new(pool.clone()));

    let command_service = Arc::new(AvailabilityCommandServiceImpl::new(
        booking_repository.clone(),
        check_log_repository.clone(),
    ));
    let query_service = Arc::new(AvailabilityQueryServiceImpl::new(
        booking_repository,
        check_log_repository,
    ));

    Ok(router(AvailabilityRestControllerState {
        command_service,
        query_service,
    }))
}
