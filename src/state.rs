use dashmap::DashMap;
use uuid::Uuid;

use crate::models::community::CommunityPost;
use crate::models::delivery::UpcomingTrip;
use crate::models::driver::Driver;
use crate::models::learning::{
    ChecklistCompletion, ChecklistTemplate, LearningVideo, VideoCompletion,
};
use crate::models::rewards::{Badge, DriverBadge, Redemption, Voucher};
use crate::models::scorecard::Scorecard;
use crate::models::trip::Trip;
use crate::models::wellness::{FatigueCheckIn, NearbyPlace};
use crate::observability::metrics::Metrics;

/// Process-wide store. Every entity map is keyed by id; a read-modify-write
/// of a single record happens under that entry's `DashMap` lock, which gives
/// the at-most-one-writer-per-record guarantee the ledger needs.
pub struct AppState {
    pub drivers: DashMap<Uuid, Driver>,
    /// Phone-to-id index; registration reserves the phone number through
    /// this map's entry lock so two concurrent creates cannot both claim it.
    pub drivers_by_phone: DashMap<String, Uuid>,
    pub trips: DashMap<Uuid, Trip>,
    pub upcoming_trips: DashMap<Uuid, UpcomingTrip>,
    pub scorecards: DashMap<Uuid, Scorecard>,
    pub badges: DashMap<Uuid, Badge>,
    pub driver_badges: DashMap<Uuid, DriverBadge>,
    pub vouchers: DashMap<Uuid, Voucher>,
    pub redemptions: DashMap<Uuid, Redemption>,
    pub nearby_places: DashMap<Uuid, NearbyPlace>,
    pub fatigue_check_ins: DashMap<Uuid, FatigueCheckIn>,
    pub community_posts: DashMap<Uuid, CommunityPost>,
    pub learning_videos: DashMap<Uuid, LearningVideo>,
    pub video_completions: DashMap<Uuid, VideoCompletion>,
    pub checklist_templates: DashMap<Uuid, ChecklistTemplate>,
    pub checklist_completions: DashMap<Uuid, ChecklistCompletion>,
    pub leaderboard_size: usize,
    pub metrics: Metrics,
}

impl AppState {
    pub fn new(leaderboard_size: usize) -> Self {
        Self {
            drivers: DashMap::new(),
            drivers_by_phone: DashMap::new(),
            trips: DashMap::new(),
            upcoming_trips: DashMap::new(),
            scorecards: DashMap::new(),
            badges: DashMap::new(),
            driver_badges: DashMap::new(),
            vouchers: DashMap::new(),
            redemptions: DashMap::new(),
            nearby_places: DashMap::new(),
            fatigue_check_ins: DashMap::new(),
            community_posts: DashMap::new(),
            learning_videos: DashMap::new(),
            video_completions: DashMap::new(),
            checklist_templates: DashMap::new(),
            checklist_completions: DashMap::new(),
            leaderboard_size,
            metrics: Metrics::new(),
        }
    }

    pub fn all_drivers(&self) -> Vec<Driver> {
        self.drivers
            .iter()
            .map(|entry| entry.value().clone())
            .collect()
    }

    pub fn badge_by_name(&self, name: &str) -> Option<Badge> {
        self.badges
            .iter()
            .find(|entry| entry.value().name == name)
            .map(|entry| entry.value().clone())
    }

    pub fn places_by_category(&self, category: &str) -> Vec<NearbyPlace> {
        self.nearby_places
            .iter()
            .filter(|entry| entry.value().category == category)
            .map(|entry| entry.value().clone())
            .collect()
    }
}
