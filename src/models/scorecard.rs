use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::trip::Grade;

/// Immutable snapshot recorded once per completed trip. Sub-scores mirror
/// the raw telemetry and are not clamped.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scorecard {
    pub id: Uuid,
    pub driver_id: Uuid,
    pub trip_id: Option<Uuid>,
    pub fuel_score: f64,
    pub safety_score: f64,
    pub time_score: f64,
    pub efficiency_score: f64,
    pub overall_grade: Grade,
    pub tips: Vec<String>,
    pub recorded_at: DateTime<Utc>,
}
