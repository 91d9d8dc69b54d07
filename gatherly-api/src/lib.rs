use axum::{http::Method, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod categories;
pub mod error;
pub mod events;
pub mod middleware;
pub mod orders;
pub mod pages;
pub mod revalidate;
pub mod state;
pub mod stripe;
pub mod uploads;

pub use state::AppState;

pub fn app(state: AppState) -> Router {
    // CORS Middleware
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::OPTIONS])
        .allow_headers([
            axum::http::header::AUTHORIZATION,
            axum::http::header::CONTENT_TYPE,
            axum::http::header::USER_AGENT,
        ]);

    // Everything except the category list rides on a session token.
    let protected = Router::new()
        .merge(events::routes())
        .merge(orders::routes())
        .merge(pages::routes())
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            middleware::auth::session_auth_middleware,
        ));

    Router::new()
        .merge(categories::routes())
        .merge(protected)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
