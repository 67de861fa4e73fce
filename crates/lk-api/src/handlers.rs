//! # lk-api Handlers
//!
//! This module coordinates the flow between HTTP requests and the engine
//! ports. One handler per facade operation; all request and response
//! bodies are JSON, timestamps are i64 nanosecond epoch offsets, currency
//! is integer minor units.

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use lk_core::{
    EngineError, IdentityStore, Listing, ListingCatalog, Quote, Reservation, ReservationLedger,
};
use lk_engine::{BookingCoordinator, ReserveRequest};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// State shared across all facade handlers.
#[derive(Clone)]
pub struct AppState {
    pub identity: Arc<dyn IdentityStore>,
    pub catalog: Arc<dyn ListingCatalog>,
    pub ledger: Arc<dyn ReservationLedger>,
    pub coordinator: Arc<BookingCoordinator>,
}

#[derive(Debug, Deserialize)]
pub struct SignupBody {
    pub id: String,
    pub password: String,
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginBody {
    pub id: String,
    pub password: String,
}

/// Boolean outcome for signup and login. Deliberately cause-free: a `false`
/// never says whether the id was taken, unknown, or the password wrong.
#[derive(Debug, Serialize)]
pub struct OkBody {
    pub ok: bool,
}

#[derive(Debug, Deserialize)]
pub struct PageParams {
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_limit")]
    pub limit: u64,
}

fn default_limit() -> u64 {
    20
}

#[derive(Debug, Serialize)]
pub struct CountBody {
    pub count: u64,
}

#[derive(Debug, Deserialize)]
pub struct RangeParams {
    pub check_in: i64,
    pub check_out: i64,
}

#[derive(Debug, Serialize)]
pub struct AvailabilityBody {
    pub available: bool,
}

#[derive(Debug, Serialize)]
pub struct ReserveBody {
    pub reservation: Reservation,
    pub quote: Quote,
}

pub async fn signup(
    State(state): State<AppState>,
    Json(body): Json<SignupBody>,
) -> Result<Json<OkBody>, ApiError> {
    let ok = state
        .identity
        .signup(&body.id, &body.password, &body.name)
        .await?;
    Ok(Json(OkBody { ok }))
}

pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginBody>,
) -> Result<Json<OkBody>, ApiError> {
    let ok = state.identity.login(&body.id, &body.password).await?;
    Ok(Json(OkBody { ok }))
}

pub async fn list_listings(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> Result<Json<Vec<Listing>>, ApiError> {
    if params.limit == 0 {
        return Err(EngineError::invalid_input("limit must be greater than 0").into());
    }
    let page = state.catalog.page(params.page, params.limit).await?;
    Ok(Json(page))
}

pub async fn count_listings(State(state): State<AppState>) -> Result<Json<CountBody>, ApiError> {
    let count = state.catalog.count().await?;
    Ok(Json(CountBody { count }))
}

pub async fn check_availability(
    State(state): State<AppState>,
    Path(listing_id): Path<u64>,
    Query(range): Query<RangeParams>,
) -> Result<Json<AvailabilityBody>, ApiError> {
    let available = state
        .coordinator
        .availability(listing_id, range.check_in, range.check_out)
        .await?;
    Ok(Json(AvailabilityBody { available }))
}

pub async fn create_reservation(
    State(state): State<AppState>,
    Json(body): Json<ReserveRequest>,
) -> Result<(StatusCode, Json<ReserveBody>), ApiError> {
    let (reservation, quote) = state.coordinator.reserve(body).await?;
    Ok((StatusCode::CREATED, Json(ReserveBody { reservation, quote })))
}

pub async fn list_reservations(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<Reservation>>, ApiError> {
    let reservations = state.ledger.list_for_user(&user_id).await?;
    Ok(Json(reservations))
}
