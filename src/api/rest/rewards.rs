use std::sync::Arc;

use axum::extract::{Path, State};
use axum::routing::{get, post};
use axum::Json;
use axum::Router;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::engine::rewards::redemption_code;
use crate::error::AppError;
use crate::models::rewards::{Badge, DriverBadge, Redemption, RedemptionStatus, Voucher};
use crate::state::AppState;

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/badges", get(list_badges))
        .route("/api/driver-badges/:driver_id", get(driver_badges))
        .route("/api/vouchers", get(list_vouchers))
        .route("/api/rewards/redeem", post(redeem))
        .route("/api/redemptions/:driver_id", get(redemptions_by_driver))
}

#[derive(Deserialize)]
pub struct RedeemRequest {
    pub driver_id: Uuid,
    pub voucher_id: Uuid,
}

#[derive(Serialize)]
pub struct RedeemResponse {
    pub redemption: Redemption,
    pub qr_code: String,
}

#[derive(Serialize)]
pub struct DriverBadgeEntry {
    pub id: Uuid,
    pub trip_id: Option<Uuid>,
    pub earned_at: chrono::DateTime<Utc>,
    pub badge: Badge,
}

#[derive(Serialize)]
pub struct RedemptionEntry {
    pub id: Uuid,
    pub code: String,
    pub status: RedemptionStatus,
    pub redeemed_at: chrono::DateTime<Utc>,
    pub voucher: Voucher,
}

async fn list_badges(State(state): State<Arc<AppState>>) -> Json<Vec<Badge>> {
    let badges = state
        .badges
        .iter()
        .map(|entry| entry.value().clone())
        .collect();
    Json(badges)
}

async fn driver_badges(
    State(state): State<Arc<AppState>>,
    Path(driver_id): Path<Uuid>,
) -> Json<Vec<DriverBadgeEntry>> {
    let earned: Vec<DriverBadge> = state
        .driver_badges
        .iter()
        .filter(|entry| entry.value().driver_id == driver_id)
        .map(|entry| entry.value().clone())
        .collect();

    let entries = earned
        .into_iter()
        .filter_map(|record| {
            let badge = state.badges.get(&record.badge_id)?.value().clone();
            Some(DriverBadgeEntry {
                id: record.id,
                trip_id: record.trip_id,
                earned_at: record.earned_at,
                badge,
            })
        })
        .collect();

    Json(entries)
}

async fn list_vouchers(State(state): State<Arc<AppState>>) -> Json<Vec<Voucher>> {
    let vouchers = state
        .vouchers
        .iter()
        .map(|entry| entry.value().clone())
        .collect();
    Json(vouchers)
}

/// Exchanges points for a voucher. The balance check and deduction happen
/// under a single driver entry borrow, so a concurrent redeem or award
/// cannot interleave and corrupt the balance.
async fn redeem(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<RedeemRequest>,
) -> Result<Json<RedeemResponse>, AppError> {
    let voucher = state
        .vouchers
        .get(&payload.voucher_id)
        .map(|entry| entry.value().clone())
        .ok_or_else(|| AppError::NotFound(format!("voucher {} not found", payload.voucher_id)))?;

    let redemption = {
        let mut driver = state.drivers.get_mut(&payload.driver_id).ok_or_else(|| {
            AppError::NotFound(format!("driver {} not found", payload.driver_id))
        })?;

        if driver.total_points < voucher.point_cost {
            state
                .metrics
                .redemptions_total
                .with_label_values(&["insufficient_points"])
                .inc();
            return Err(AppError::InsufficientPoints {
                have: driver.total_points,
                need: voucher.point_cost,
            });
        }

        driver.total_points -= voucher.point_cost;

        Redemption {
            id: Uuid::new_v4(),
            driver_id: payload.driver_id,
            voucher_id: voucher.id,
            code: redemption_code(),
            status: RedemptionStatus::Active,
            redeemed_at: Utc::now(),
            used_at: None,
        }
    };

    state.redemptions.insert(redemption.id, redemption.clone());
    state
        .metrics
        .redemptions_total
        .with_label_values(&["success"])
        .inc();

    tracing::info!(
        driver_id = %payload.driver_id,
        voucher_id = %voucher.id,
        cost = voucher.point_cost,
        "voucher redeemed"
    );

    let qr_code = redemption.code.clone();
    Ok(Json(RedeemResponse {
        redemption,
        qr_code,
    }))
}

async fn redemptions_by_driver(
    State(state): State<Arc<AppState>>,
    Path(driver_id): Path<Uuid>,
) -> Json<Vec<RedemptionEntry>> {
    let mut entries: Vec<RedemptionEntry> = state
        .redemptions
        .iter()
        .filter(|entry| entry.value().driver_id == driver_id)
        .filter_map(|entry| {
            let record = entry.value();
            let voucher = state.vouchers.get(&record.voucher_id)?.value().clone();
            Some(RedemptionEntry {
                id: record.id,
                code: record.code.clone(),
                status: record.status.clone(),
                redeemed_at: record.redeemed_at,
                voucher,
            })
        })
        .collect();
    entries.sort_by(|a, b| b.redeemed_at.cmp(&a.redeemed_at));

    Json(entries)
}
