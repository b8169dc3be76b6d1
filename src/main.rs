use axum::Router;
use dotenvy::dotenv;
use room_booking_api::{
    availability::{
        build_availability_router,
        interfaces::rest::resources::{
            availability_check_resource::{
                AvailabilityCheckListResource, AvailabilityCheckResource,
            },
            availability_decision_resource::AvailabilityDecisionResource,
            availability_error_response_resource::AvailabilityErrorResponseResource,
            availability_health_resource::AvailabilityHealthResource,
            check_availability_request_resource::CheckAvailabilityRequestResource,
            confirmed_booking_resource::{
                ConfirmedBookingListResource, ConfirmedBookingResource,
            },
        },
    },
    booking::{
        build_booking_router,
        interfaces::rest::resources::{
            authority_status_resource::AuthorityStatusResource,
            booking_error_response_resource::BookingErrorResponseResource,
            booking_health_resource::BookingHealthResource,
            booking_mutation_response_resource::BookingMutationResponseResource,
            create_booking_request_resource::CreateBookingRequestResource,
            room_booking_resource::{RoomBookingListResource, RoomBookingResource},
            update_booking_request_resource::UpdateBookingRequestResource,
        },
    },
    config::app_config::AppConfig,
};
use tracing::info;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        room_booking_api::availability::interfaces::rest::controllers::availability_rest_controller::check_availability,
        room_booking_api::availability::interfaces::rest::controllers::availability_rest_controller::list_checks,
        room_booking_api::availability::interfaces::rest::controllers::availability_rest_controller::list_confirmed_bookings,
        room_booking_api::availability::interfaces::rest::controllers::availability_rest_controller::health,
        room_booking_api::booking::interfaces::rest::controllers::booking_rest_controller::create_booking,
        room_booking_api::booking::interfaces::rest::controllers::booking_rest_controller::update_booking,
        room_booking_api::booking::interfaces::rest::controllers::booking_rest_controller::delete_booking,
        room_booking_api::booking::interfaces::rest::controllers::booking_rest_controller::list_bookings,
        room_booking_api::booking::interfaces::rest::controllers::booking_rest_controller::get_booking_detail,
        room_booking_api::booking::interfaces::rest::controllers::booking_rest_controller::check_authority_status,
        room_booking_api::booking::interfaces::rest::controllers::booking_rest_controller::health
    ),
    components(
        schemas(
            CheckAvailabilityRequestResource,
            AvailabilityDecisionResource,
            AvailabilityCheckResource,
            AvailabilityCheckListResource,
            ConfirmedBookingResource,
            ConfirmedBookingListResource,
            AvailabilityErrorResponseResource,
            AvailabilityHealthResource,
            CreateBookingRequestResource,
            UpdateBookingRequestResource,
            RoomBookingResource,
            RoomBookingListResource,
            BookingMutationResponseResource,
            BookingErrorResponseResource,
            AuthorityStatusResource,
            BookingHealthResource
        )
    ),
    tags(
        (name = "availability", description = "Availability authority: canonical bookings and the audit log of every check"),
        (name = "booking", description = "Booking gateway: user-facing bookings, confirmed upstream before being persisted")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() {
    dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = AppConfig::from_env();

    let availability_router = build_availability_router(&config)
        .await
        .expect("failed to build availability router");
    let booking_router = build_booking_router(&config)
        .await
        .expect("failed to build booking router");

    let app = Router::new()
        .merge(availability_router)
        .merge(booking_router)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind server address");

    info!(port = config.port, "server listening");
    info!(
        authority_base_url = config.authority_base_url.as_str(),
        "gateway will verify slots against the authority"
    );

    axum::serve(listener, app)
        .await
        .expect("failed to start axum server");
}
