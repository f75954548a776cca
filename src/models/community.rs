use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommunityPost {
    pub id: Uuid,
    pub driver_id: Uuid,
    pub content: String,
    pub category: String,
    pub likes: u32,
    pub comments: u32,
    pub created_at: DateTime<Utc>,
}
