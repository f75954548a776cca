use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum TripStatus {
    Active,
    Completed,
    Cancelled,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub enum Grade {
    A,
    B,
    C,
}

/// A scored delivery run. Telemetry and grade fields stay empty until the
/// trip is completed exactly once.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trip {
    pub id: Uuid,
    pub driver_id: Uuid,
    pub origin: String,
    pub destination: String,
    pub waypoints: Vec<String>,
    pub distance_km: f64,
    pub duration_minutes: u32,
    pub started_at: DateTime<Utc>,
    pub ended_at: Option<DateTime<Utc>>,
    pub status: TripStatus,
    pub fuel_efficiency: Option<f64>,
    pub harsh_braking: u32,
    pub route_adherence: Option<f64>,
    pub idle_minutes: u32,
    pub grade: Option<Grade>,
    pub points_earned: u32,
    pub badges_earned: Vec<String>,
}
