use std::sync::Arc;

use axum::extract::{Path, State};
use axum::routing::{get, post, put};
use axum::Json;
use axum::Router;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::engine::progression;
use crate::engine::progression::StopProof;
use crate::error::AppError;
use crate::models::delivery::{DeliveryStop, StopStatus, UpcomingTrip, UpcomingTripStatus};
use crate::state::AppState;

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/upcoming-trips", post(create_upcoming_trip))
        .route("/api/upcoming-trips/:id", get(get_upcoming_trip))
        .route(
            "/api/upcoming-trips/driver/:driver_id",
            get(upcoming_trips_by_driver),
        )
        .route(
            "/api/upcoming-trips/:id/delivery-points",
            get(delivery_points),
        )
        .route("/api/upcoming-trips/:id/start", put(start_trip))
        .route("/api/upcoming-trips/:id/complete-stop", put(complete_stop))
}

#[derive(Deserialize)]
pub struct CreateStopRequest {
    pub location: String,
    pub contact_name: String,
    pub contact_phone: String,
    pub instructions: Option<String>,
}

#[derive(Deserialize)]
pub struct CreateUpcomingTripRequest {
    pub driver_id: Uuid,
    pub origin: String,
    pub destination: String,
    pub scheduled_at: Option<DateTime<Utc>>,
    pub stops: Vec<CreateStopRequest>,
}

#[derive(Serialize)]
pub struct CompleteStopResponse {
    pub trip: UpcomingTrip,
    pub all_completed: bool,
}

async fn create_upcoming_trip(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateUpcomingTripRequest>,
) -> Result<Json<UpcomingTrip>, AppError> {
    if payload.stops.is_empty() {
        return Err(AppError::BadRequest(
            "trip needs at least one delivery stop".to_string(),
        ));
    }

    if !state.drivers.contains_key(&payload.driver_id) {
        return Err(AppError::NotFound(format!(
            "driver {} not found",
            payload.driver_id
        )));
    }

    let stops = payload
        .stops
        .into_iter()
        .enumerate()
        .map(|(i, stop)| DeliveryStop {
            sequence: i as u32 + 1,
            location: stop.location,
            contact_name: stop.contact_name,
            contact_phone: stop.contact_phone,
            instructions: stop.instructions,
            status: StopStatus::Pending,
            completed_at: None,
        })
        .collect();

    let trip = UpcomingTrip {
        id: Uuid::new_v4(),
        driver_id: payload.driver_id,
        origin: payload.origin,
        destination: payload.destination,
        scheduled_at: payload.scheduled_at.unwrap_or_else(Utc::now),
        status: UpcomingTripStatus::Upcoming,
        current_stop_index: 0,
        stops,
    };

    state.upcoming_trips.insert(trip.id, trip.clone());
    Ok(Json(trip))
}

async fn get_upcoming_trip(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<UpcomingTrip>, AppError> {
    let trip = state
        .upcoming_trips
        .get(&id)
        .ok_or_else(|| AppError::NotFound(format!("trip {} not found", id)))?;

    Ok(Json(trip.value().clone()))
}

async fn upcoming_trips_by_driver(
    State(state): State<Arc<AppState>>,
    Path(driver_id): Path<Uuid>,
) -> Json<Vec<UpcomingTrip>> {
    let mut trips: Vec<UpcomingTrip> = state
        .upcoming_trips
        .iter()
        .filter(|entry| entry.value().driver_id == driver_id)
        .map(|entry| entry.value().clone())
        .collect();
    trips.sort_by(|a, b| a.scheduled_at.cmp(&b.scheduled_at));

    Json(trips)
}

async fn delivery_points(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<DeliveryStop>>, AppError> {
    let trip = state
        .upcoming_trips
        .get(&id)
        .ok_or_else(|| AppError::NotFound(format!("trip {} not found", id)))?;

    Ok(Json(trip.value().stops.clone()))
}

async fn start_trip(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<UpcomingTrip>, AppError> {
    let mut trip = state
        .upcoming_trips
        .get_mut(&id)
        .ok_or_else(|| AppError::NotFound(format!("trip {} not found", id)))?;

    progression::start_trip(&mut trip)?;

    tracing::info!(trip_id = %id, stops = trip.stops.len(), "trip started");
    Ok(Json(trip.clone()))
}

async fn complete_stop(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Json(proof): Json<StopProof>,
) -> Result<Json<CompleteStopResponse>, AppError> {
    progression::validate_proof(&proof)?;

    let (trip, outcome) = {
        let mut trip = state
            .upcoming_trips
            .get_mut(&id)
            .ok_or_else(|| AppError::NotFound(format!("trip {} not found", id)))?;

        let outcome = progression::complete_current_stop(&mut trip, Utc::now())?;
        (trip.clone(), outcome)
    };

    state.metrics.stops_completed_total.inc();
    tracing::info!(
        trip_id = %id,
        stop_index = trip.current_stop_index,
        all_completed = outcome.all_completed,
        "delivery stop completed"
    );

    Ok(Json(CompleteStopResponse {
        trip,
        all_completed: outcome.all_completed,
    }))
}
