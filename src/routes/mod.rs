use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::handlers::{forms, location, rides};
use crate::middleware::rate_limit::log_api_call;
use crate::AppState;

pub fn create_router(state: AppState) -> Router {
    let ride_routes = Router::new()
        .route("/drivers", get(rides::list_drivers))
        .route("/rides/search", post(rides::search_drivers))
        .route("/rides/confirm", post(rides::confirm_selection))
        .route("/bookings/current", get(rides::current_booking))
        .route("/bookings/current/tracking", get(rides::track_ride))
        .route("/fares/estimate", get(rides::estimate_fare))
        .route(
            "/location",
            get(location::get_location).put(location::update_location),
        );

    let form_routes = Router::new()
        .route("/contact", post(forms::submit_contact))
        .route("/auth/login", post(forms::login))
        .route("/auth/signup", post(forms::signup))
        .route("/driver-applications", post(forms::submit_driver_application));

    Router::new()
        .nest("/api", ride_routes.merge(form_routes))
        .layer(middleware::from_fn(log_api_call))
        .with_state(state)
}
