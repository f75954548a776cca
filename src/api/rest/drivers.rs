use std::sync::Arc;

use axum::extract::{Path, Query, State};
use dashmap::mapref::entry::Entry;
use axum::routing::{get, post};
use axum::Json;
use axum::Router;
use chrono::Utc;
use serde::Deserialize;
use uuid::Uuid;

use crate::engine::leaderboard::{compute_rank, top_drivers, RankSummary};
use crate::error::AppError;
use crate::models::driver::{Driver, DriverLevel};
use crate::state::AppState;

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/drivers", post(create_driver))
        .route("/api/driver/:id", get(get_driver))
        .route("/api/driver/:id/rank", get(get_rank))
        .route("/api/leaderboard", get(leaderboard))
}

#[derive(Deserialize)]
pub struct CreateDriverRequest {
    pub phone_number: String,
    pub name: String,
}

#[derive(Deserialize)]
pub struct LeaderboardParams {
    pub period: Option<String>,
}

async fn create_driver(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateDriverRequest>,
) -> Result<Json<Driver>, AppError> {
    if payload.name.trim().is_empty() {
        return Err(AppError::BadRequest("name cannot be empty".to_string()));
    }

    if payload.phone_number.trim().is_empty() {
        return Err(AppError::BadRequest(
            "phone number cannot be empty".to_string(),
        ));
    }

    let driver = Driver {
        id: Uuid::new_v4(),
        phone_number: payload.phone_number,
        name: payload.name,
        level: DriverLevel::Rookie,
        total_points: 0,
        current_streak: 0,
        total_trips: 0,
        created_at: Utc::now(),
    };

    // Reserve the phone number under its index entry lock before inserting
    // the driver record, so concurrent registrations of the same number
    // cannot both succeed.
    match state.drivers_by_phone.entry(driver.phone_number.clone()) {
        Entry::Occupied(_) => {
            return Err(AppError::BadRequest(format!(
                "phone number {} is already registered",
                driver.phone_number
            )));
        }
        Entry::Vacant(slot) => {
            slot.insert(driver.id);
        }
    }

    state.drivers.insert(driver.id, driver.clone());
    tracing::info!(driver_id = %driver.id, "driver registered");
    Ok(Json(driver))
}

async fn get_driver(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<Driver>, AppError> {
    let driver = state
        .drivers
        .get(&id)
        .ok_or_else(|| AppError::NotFound(format!("driver {} not found", id)))?;

    Ok(Json(driver.value().clone()))
}

async fn get_rank(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Json<RankSummary> {
    Json(compute_rank(state.all_drivers(), id))
}

async fn leaderboard(
    State(state): State<Arc<AppState>>,
    Query(params): Query<LeaderboardParams>,
) -> Json<Vec<Driver>> {
    // Period is accepted for contract fidelity but points are lifetime
    // totals; there is no per-period delta tracking.
    if let Some(period) = &params.period {
        tracing::debug!(%period, "leaderboard period requested, serving lifetime totals");
    }

    Json(top_drivers(state.all_drivers(), state.leaderboard_size))
}
