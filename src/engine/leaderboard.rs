use serde::Serialize;
use uuid::Uuid;

use crate::models::driver::Driver;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct RankSummary {
    pub rank: usize,
    pub total_drivers: usize,
}

/// 1-based position of a driver when all drivers are sorted by points
/// descending. A driver missing from the set gets the documented sentinel
/// rank 0 instead of an error.
pub fn compute_rank(mut drivers: Vec<Driver>, driver_id: Uuid) -> RankSummary {
    let total_drivers = drivers.len();
    drivers.sort_by(|a, b| b.total_points.cmp(&a.total_points));

    let rank = drivers
        .iter()
        .position(|d| d.id == driver_id)
        .map(|index| index + 1)
        .unwrap_or(0);

    RankSummary {
        rank,
        total_drivers,
    }
}

/// Top drivers by cumulative points. The requested period is accepted by the
/// API but carries no time scoping; points are lifetime totals.
pub fn top_drivers(mut drivers: Vec<Driver>, limit: usize) -> Vec<Driver> {
    drivers.sort_by(|a, b| b.total_points.cmp(&a.total_points));
    drivers.truncate(limit);
    drivers
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use uuid::Uuid;

    use super::{compute_rank, top_drivers};
    use crate::models::driver::{Driver, DriverLevel};

    fn driver(id_seed: u128, total_points: u32) -> Driver {
        Driver {
            id: Uuid::from_u128(id_seed),
            phone_number: format!("+91987650000{id_seed}"),
            name: format!("driver-{id_seed}"),
            level: DriverLevel::Rookie,
            total_points,
            current_streak: 0,
            total_trips: 0,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn ranks_follow_descending_point_order() {
        let drivers = vec![
            driver(1, 100),
            driver(2, 500),
            driver(3, 300),
            driver(4, 400),
            driver(5, 200),
        ];

        assert_eq!(compute_rank(drivers.clone(), Uuid::from_u128(2)).rank, 1);
        assert_eq!(compute_rank(drivers.clone(), Uuid::from_u128(4)).rank, 2);
        assert_eq!(compute_rank(drivers.clone(), Uuid::from_u128(3)).rank, 3);
        assert_eq!(compute_rank(drivers.clone(), Uuid::from_u128(5)).rank, 4);
        assert_eq!(compute_rank(drivers, Uuid::from_u128(1)).rank, 5);
    }

    #[test]
    fn missing_driver_gets_rank_zero() {
        let drivers = vec![driver(1, 100), driver(2, 200)];
        let summary = compute_rank(drivers, Uuid::from_u128(99));

        assert_eq!(summary.rank, 0);
        assert_eq!(summary.total_drivers, 2);
    }

    #[test]
    fn leaderboard_is_sorted_and_truncated() {
        let drivers = vec![driver(1, 10), driver(2, 30), driver(3, 20)];
        let top = top_drivers(drivers, 2);

        assert_eq!(top.len(), 2);
        assert_eq!(top[0].id, Uuid::from_u128(2));
        assert_eq!(top[1].id, Uuid::from_u128(3));
    }
}
