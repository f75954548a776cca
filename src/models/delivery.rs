use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum UpcomingTripStatus {
    Upcoming,
    InProgress,
    Completed,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum StopStatus {
    Pending,
    Completed,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeliveryStop {
    pub sequence: u32,
    pub location: String,
    pub contact_name: String,
    pub contact_phone: String,
    pub instructions: Option<String>,
    pub status: StopStatus,
    pub completed_at: Option<DateTime<Utc>>,
}

/// An assigned delivery run progressing stop-by-stop. Stops are embedded in
/// the trip record so `current_stop_index` can never drift out of sync with
/// the stop list.
///
/// Invariant: `current_stop_index <= stops.len()`, with equality only once
/// the trip is completed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpcomingTrip {
    pub id: Uuid,
    pub driver_id: Uuid,
    pub origin: String,
    pub destination: String,
    pub scheduled_at: DateTime<Utc>,
    pub status: UpcomingTripStatus,
    pub current_stop_index: usize,
    pub stops: Vec<DeliveryStop>,
}
