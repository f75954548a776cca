use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::error::AppError;
use crate::models::delivery::{StopStatus, UpcomingTrip, UpcomingTripStatus};

const OTP_LENGTH: usize = 4;

/// Client-supplied proof of delivery. The OTP is checked for shape only and
/// the photo flag is trusted as-is; there is no server-side verification of
/// either (demo-grade trust boundary).
#[derive(Debug, Clone, Deserialize)]
pub struct StopProof {
    pub otp: String,
    pub photo_captured: bool,
}

#[derive(Debug, Clone, Copy)]
pub struct StopOutcome {
    pub all_completed: bool,
}

pub fn validate_proof(proof: &StopProof) -> Result<(), AppError> {
    let otp = proof.otp.trim();
    if otp.len() != OTP_LENGTH || !otp.chars().all(|c| c.is_ascii_digit()) {
        return Err(AppError::BadRequest(format!(
            "otp must be a {OTP_LENGTH}-digit code"
        )));
    }

    if !proof.photo_captured {
        return Err(AppError::BadRequest(
            "delivery photo confirmation is required".to_string(),
        ));
    }

    Ok(())
}

/// Moves a trip from Upcoming to InProgress with the cursor on the first
/// stop. Starting a trip twice is rejected.
pub fn start_trip(trip: &mut UpcomingTrip) -> Result<(), AppError> {
    if trip.status != UpcomingTripStatus::Upcoming {
        return Err(AppError::Conflict(format!(
            "trip {} has already started",
            trip.id
        )));
    }

    trip.status = UpcomingTripStatus::InProgress;
    trip.current_stop_index = 0;
    Ok(())
}

/// Completes the stop under the cursor. Stops complete strictly in ascending
/// order; the cursor only ever moves forward. Completing the last stop
/// finishes the trip, and any further call is rejected rather than silently
/// re-advancing.
pub fn complete_current_stop(
    trip: &mut UpcomingTrip,
    now: DateTime<Utc>,
) -> Result<StopOutcome, AppError> {
    if trip.status != UpcomingTripStatus::InProgress {
        return Err(AppError::Conflict(format!(
            "trip {} is not in progress",
            trip.id
        )));
    }

    let index = trip.current_stop_index;
    let stop_count = trip.stops.len();
    let stop = trip.stops.get_mut(index).ok_or_else(|| {
        AppError::NotFound(format!("trip {} has no stop at position {index}", trip.id))
    })?;

    stop.status = StopStatus::Completed;
    stop.completed_at = Some(now);

    if index + 1 == stop_count {
        trip.status = UpcomingTripStatus::Completed;
        trip.current_stop_index = stop_count;
        Ok(StopOutcome {
            all_completed: true,
        })
    } else {
        trip.current_stop_index = index + 1;
        Ok(StopOutcome {
            all_completed: false,
        })
    }
}
