use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NearbyPlace {
    pub id: Uuid,
    pub name: String,
    pub category: String,
    pub latitude: f64,
    pub longitude: f64,
    pub address: String,
    pub has_truck_parking: bool,
    pub is_open: bool,
    pub discount: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FatigueCheckIn {
    pub id: Uuid,
    pub driver_id: Uuid,
    pub trip_id: Option<Uuid>,
    pub feeling_sleepy: bool,
    pub hours_driven: f64,
    pub checked_in_at: DateTime<Utc>,
}
