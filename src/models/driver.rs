use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum DriverLevel {
    Rookie,
    ProDriver,
    FleetLegend,
}

/// A driver's ledger record. `total_points` is only ever mutated under a
/// single `DashMap` entry borrow, so concurrent award/redeem calls cannot
/// lose updates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Driver {
    pub id: Uuid,
    pub phone_number: String,
    pub name: String,
    pub level: DriverLevel,
    pub total_points: u32,
    pub current_streak: u32,
    pub total_trips: u32,
    pub created_at: DateTime<Utc>,
}
