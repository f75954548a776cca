use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LearningVideo {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub category: String,
    pub duration_minutes: u32,
    pub points_reward: u32,
    pub icon: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoCompletion {
    pub id: Uuid,
    pub driver_id: Uuid,
    pub video_id: Uuid,
    pub points_earned: u32,
    pub completed_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChecklistTemplate {
    pub id: Uuid,
    pub name: String,
    pub checklist_type: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChecklistCompletion {
    pub id: Uuid,
    pub driver_id: Uuid,
    pub trip_id: Option<Uuid>,
    pub checklist_type: String,
    pub completed_items: Vec<String>,
    pub all_items_completed: bool,
    pub notes: Option<String>,
    pub completed_at: DateTime<Utc>,
}
