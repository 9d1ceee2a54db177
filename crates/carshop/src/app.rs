use std::time::Duration;

use axum::{
    http::{header, Method, StatusCode},
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::{
    handlers::{
        cars::{create_car, delete_car, get_car, list_cars, update_car},
        health::livez,
        orders::{create_order, delete_order, list_orders, list_orders_by_person},
        people::{create_person, delete_person, get_person, list_people, update_person},
    },
    state::AppState,
};

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState, request_timeout: Duration) -> Router {
    // CORS configuration for API endpoints
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PATCH, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE]);

    let api_routes = Router::new()
        // Person routes
        .route("/user", post(create_person))
        .route("/user/get-all", get(list_people))
        .route(
            "/user/{id}",
            get(get_person).patch(update_person).delete(delete_person),
        )
        // Car routes
        .route("/car", post(create_car))
        .route("/car/get-all", get(list_cars))
        .route(
            "/car/{id}",
            get(get_car).patch(update_car).delete(delete_car),
        )
        // Order routes
        .route("/orders", post(create_order))
        .route("/orders/get-all", get(list_orders))
        .route(
            "/orders/{id}",
            get(list_orders_by_person).delete(delete_order),
        )
        .layer(cors);

    Router::new()
        .route("/livez", get(livez))
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            request_timeout,
        ))
        .with_state(state)
}
