use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::routing::{get, post};
use axum::Json;
use axum::Router;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::AppError;
use crate::models::wellness::{FatigueCheckIn, NearbyPlace};
use crate::state::AppState;

const MAX_RECOMMENDATIONS_PER_CATEGORY: usize = 2;

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/nearby-places", get(list_nearby_places))
        .route("/api/fatigue-checkins", post(create_check_in))
        .route(
            "/api/fatigue-checkins/driver/:driver_id",
            get(check_ins_by_driver),
        )
        .route(
            "/api/fatigue-checkins/driver/:driver_id/latest",
            get(latest_check_in),
        )
}

#[derive(Deserialize)]
pub struct NearbyPlacesParams {
    pub category: Option<String>,
}

#[derive(Deserialize)]
pub struct CreateCheckInRequest {
    pub driver_id: Uuid,
    pub trip_id: Option<Uuid>,
    pub feeling_sleepy: bool,
    pub hours_driven: f64,
}

#[derive(Serialize)]
pub struct CheckInResponse {
    pub check_in: FatigueCheckIn,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendations: Option<Vec<NearbyPlace>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

async fn list_nearby_places(
    State(state): State<Arc<AppState>>,
    Query(params): Query<NearbyPlacesParams>,
) -> Json<Vec<NearbyPlace>> {
    let places = match &params.category {
        Some(category) => state.places_by_category(category),
        None => state
            .nearby_places
            .iter()
            .map(|entry| entry.value().clone())
            .collect(),
    };

    Json(places)
}

/// Records a fatigue check-in. A sleepy driver gets nearby rest options
/// (parking and dhabas) back with the acknowledgement.
async fn create_check_in(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateCheckInRequest>,
) -> Result<Json<CheckInResponse>, AppError> {
    if payload.hours_driven < 0.0 || payload.hours_driven > 24.0 {
        return Err(AppError::BadRequest(
            "hours driven must be between 0 and 24".to_string(),
        ));
    }

    if !state.drivers.contains_key(&payload.driver_id) {
        return Err(AppError::NotFound(format!(
            "driver {} not found",
            payload.driver_id
        )));
    }

    let check_in = FatigueCheckIn {
        id: Uuid::new_v4(),
        driver_id: payload.driver_id,
        trip_id: payload.trip_id,
        feeling_sleepy: payload.feeling_sleepy,
        hours_driven: payload.hours_driven,
        checked_in_at: Utc::now(),
    };
    state.fatigue_check_ins.insert(check_in.id, check_in.clone());

    if !check_in.feeling_sleepy {
        return Ok(Json(CheckInResponse {
            check_in,
            recommendations: None,
            warning: None,
        }));
    }

    let mut recommendations = state.places_by_category("parking");
    recommendations.truncate(MAX_RECOMMENDATIONS_PER_CATEGORY);
    let mut dhabas = state.places_by_category("dhaba");
    dhabas.truncate(MAX_RECOMMENDATIONS_PER_CATEGORY);
    recommendations.extend(dhabas);

    tracing::warn!(
        driver_id = %check_in.driver_id,
        hours_driven = check_in.hours_driven,
        "driver reported fatigue"
    );

    Ok(Json(CheckInResponse {
        check_in,
        recommendations: Some(recommendations),
        warning: Some("Please take a break soon. Safety first!".to_string()),
    }))
}

async fn check_ins_by_driver(
    State(state): State<Arc<AppState>>,
    Path(driver_id): Path<Uuid>,
) -> Json<Vec<FatigueCheckIn>> {
    let mut check_ins: Vec<FatigueCheckIn> = state
        .fatigue_check_ins
        .iter()
        .filter(|entry| entry.value().driver_id == driver_id)
        .map(|entry| entry.value().clone())
        .collect();
    check_ins.sort_by(|a, b| b.checked_in_at.cmp(&a.checked_in_at));

    Json(check_ins)
}

async fn latest_check_in(
    State(state): State<Arc<AppState>>,
    Path(driver_id): Path<Uuid>,
) -> Json<Option<FatigueCheckIn>> {
    let latest = state
        .fatigue_check_ins
        .iter()
        .filter(|entry| entry.value().driver_id == driver_id)
        .map(|entry| entry.value().clone())
        .max_by_key(|check_in| check_in.checked_in_at);

    Json(latest)
}
