use std::sync::Arc;

use axum::extract::{Path, State};
use axum::routing::{get, post, put};
use axum::Json;
use axum::Router;
use chrono::Utc;
use serde::Deserialize;
use uuid::Uuid;

use crate::engine::evaluator::{evaluate, tips_for, TripTelemetry};
use crate::error::AppError;
use crate::models::rewards::DriverBadge;
use crate::models::scorecard::Scorecard;
use crate::models::trip::{Trip, TripStatus};
use crate::state::AppState;

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/trips", post(create_trip))
        .route("/api/trips/:id", get(get_trip))
        .route("/api/trips/:id/complete", put(complete_trip))
        .route("/api/trips/driver/:driver_id", get(trips_by_driver))
        .route("/api/scorecards/:driver_id", get(scorecards_by_driver))
        .route(
            "/api/scorecards/:driver_id/latest",
            get(latest_scorecard),
        )
}

#[derive(Deserialize)]
pub struct CreateTripRequest {
    pub driver_id: Uuid,
    pub origin: String,
    pub destination: String,
    #[serde(default)]
    pub waypoints: Vec<String>,
    pub distance_km: f64,
    pub duration_minutes: u32,
}

#[derive(Deserialize)]
pub struct CompleteTripRequest {
    pub fuel_efficiency: f64,
    pub harsh_braking: u32,
    pub route_adherence: f64,
    #[serde(default)]
    pub idle_minutes: u32,
}

async fn create_trip(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateTripRequest>,
) -> Result<Json<Trip>, AppError> {
    if payload.origin.trim().is_empty() || payload.destination.trim().is_empty() {
        return Err(AppError::BadRequest(
            "origin and destination cannot be empty".to_string(),
        ));
    }

    if !state.drivers.contains_key(&payload.driver_id) {
        return Err(AppError::NotFound(format!(
            "driver {} not found",
            payload.driver_id
        )));
    }

    let trip = Trip {
        id: Uuid::new_v4(),
        driver_id: payload.driver_id,
        origin: payload.origin,
        destination: payload.destination,
        waypoints: payload.waypoints,
        distance_km: payload.distance_km,
        duration_minutes: payload.duration_minutes,
        started_at: Utc::now(),
        ended_at: None,
        status: TripStatus::Active,
        fuel_efficiency: None,
        harsh_braking: 0,
        route_adherence: None,
        idle_minutes: 0,
        grade: None,
        points_earned: 0,
        badges_earned: Vec::new(),
    };

    state.trips.insert(trip.id, trip.clone());
    Ok(Json(trip))
}

async fn get_trip(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<Trip>, AppError> {
    let trip = state
        .trips
        .get(&id)
        .ok_or_else(|| AppError::NotFound(format!("trip {} not found", id)))?;

    Ok(Json(trip.value().clone()))
}

async fn trips_by_driver(
    State(state): State<Arc<AppState>>,
    Path(driver_id): Path<Uuid>,
) -> Json<Vec<Trip>> {
    let trips = state
        .trips
        .iter()
        .filter(|entry| entry.value().driver_id == driver_id)
        .map(|entry| entry.value().clone())
        .collect();

    Json(trips)
}

/// Grades the trip and fans the result out into the driver ledger, badge
/// records, and a scorecard snapshot. A trip can only be completed once;
/// re-processing is rejected so points and badges cannot be double-awarded.
async fn complete_trip(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Json(payload): Json<CompleteTripRequest>,
) -> Result<Json<Trip>, AppError> {
    let telemetry = TripTelemetry {
        fuel_efficiency: payload.fuel_efficiency,
        harsh_braking: payload.harsh_braking,
        route_adherence: payload.route_adherence,
        idle_minutes: payload.idle_minutes,
    };
    let evaluation = evaluate(&telemetry);
    let now = Utc::now();

    let trip = {
        let mut trip = state
            .trips
            .get_mut(&id)
            .ok_or_else(|| AppError::NotFound(format!("trip {} not found", id)))?;

        if trip.status != TripStatus::Active {
            return Err(AppError::Conflict(format!(
                "trip {} is already {}",
                id,
                match trip.status {
                    TripStatus::Completed => "completed",
                    _ => "cancelled",
                }
            )));
        }

        trip.status = TripStatus::Completed;
        trip.ended_at = Some(now);
        trip.fuel_efficiency = Some(payload.fuel_efficiency);
        trip.harsh_braking = payload.harsh_braking;
        trip.route_adherence = Some(payload.route_adherence);
        trip.idle_minutes = payload.idle_minutes;
        trip.grade = Some(evaluation.grade);
        trip.points_earned = evaluation.points_earned;
        trip.badges_earned = evaluation.badges_earned.clone();
        trip.clone()
    };

    if let Some(mut driver) = state.drivers.get_mut(&trip.driver_id) {
        driver.total_points += evaluation.points_earned;
        driver.total_trips += 1;
        driver.current_streak += 1;
    } else {
        tracing::warn!(trip_id = %id, driver_id = %trip.driver_id, "completed trip references unknown driver");
    }

    // Unknown badge names are skipped silently; only catalog entries are
    // recorded.
    for badge_name in &evaluation.badges_earned {
        if let Some(badge) = state.badge_by_name(badge_name) {
            let driver_badge = DriverBadge {
                id: Uuid::new_v4(),
                driver_id: trip.driver_id,
                badge_id: badge.id,
                trip_id: Some(trip.id),
                earned_at: now,
            };
            state.driver_badges.insert(driver_badge.id, driver_badge);
        }
    }

    let scorecard = Scorecard {
        id: Uuid::new_v4(),
        driver_id: trip.driver_id,
        trip_id: Some(trip.id),
        fuel_score: payload.fuel_efficiency,
        safety_score: 100.0 - f64::from(payload.harsh_braking),
        time_score: payload.route_adherence,
        efficiency_score: evaluation.avg_score,
        overall_grade: evaluation.grade,
        tips: tips_for(evaluation.grade),
        recorded_at: now,
    };
    state.scorecards.insert(scorecard.id, scorecard);

    let grade_label = format!("{:?}", evaluation.grade);
    state
        .metrics
        .trips_completed_total
        .with_label_values(&[&grade_label])
        .inc();
    state
        .metrics
        .points_awarded_total
        .inc_by(u64::from(evaluation.points_earned));

    tracing::info!(
        trip_id = %trip.id,
        driver_id = %trip.driver_id,
        grade = ?evaluation.grade,
        points = evaluation.points_earned,
        "trip completed"
    );

    Ok(Json(trip))
}

async fn scorecards_by_driver(
    State(state): State<Arc<AppState>>,
    Path(driver_id): Path<Uuid>,
) -> Json<Vec<Scorecard>> {
    let mut scorecards: Vec<Scorecard> = state
        .scorecards
        .iter()
        .filter(|entry| entry.value().driver_id == driver_id)
        .map(|entry| entry.value().clone())
        .collect();
    scorecards.sort_by(|a, b| b.recorded_at.cmp(&a.recorded_at));

    Json(scorecards)
}

async fn latest_scorecard(
    State(state): State<Arc<AppState>>,
    Path(driver_id): Path<Uuid>,
) -> Result<Json<Scorecard>, AppError> {
    let latest = state
        .scorecards
        .iter()
        .filter(|entry| entry.value().driver_id == driver_id)
        .map(|entry| entry.value().clone())
        .max_by_key(|scorecard| scorecard.recorded_at);

    latest
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("no scorecard for driver {}", driver_id)))
}
