//! # lk-api
//!
//! The HTTP facade over the reservation engine: the five operations of the
//! service contract (`signup`, `login`, `get_listings`, `reserve`,
//! `get_reservations`) plus the availability probe and catalog count the
//! browsing UI paginates with.
//!
//! Trust model, preserved from the original contract and flagged as weak:
//! a successful `login` is the only authorization, and later calls simply
//! carry `user_id`. There are no session tokens or expiry. Hardening this
//! would change the external interface, so it is documented rather than
//! done.

pub mod error;
pub mod handlers;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub use handlers::AppState;

/// Builds the facade router.
///
/// # Developer Note
/// Routes are nested under `/api` so the binary can mount a static UI or a
/// health endpoint beside the facade without path collisions.
pub fn router(state: AppState) -> Router {
    let api = Router::new()
        .route("/signup", post(handlers::signup))
        .route("/login", post(handlers::login))
        .route("/listings", get(handlers::list_listings))
        .route("/listings/count", get(handlers::count_listings))
        .route(
            "/listings/{listing_id}/availability",
            get(handlers::check_availability),
        )
        .route("/reservations", post(handlers::create_reservation))
        .route("/reservations/{user_id}", get(handlers::list_reservations))
        .with_state(state);

    // The browsing UI is a separate single-page app, so the facade answers
    // cross-origin requests.
    Router::new()
        .nest("/api", api)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
