use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::routing::{get, post};
use axum::Json;
use axum::Router;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::AppError;
use crate::models::learning::{
    ChecklistCompletion, ChecklistTemplate, LearningVideo, VideoCompletion,
};
use crate::state::AppState;

const CHECKLIST_COMPLETION_BONUS: u32 = 20;

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/learning-videos", get(list_videos))
        .route("/api/learning-videos/:id/complete", post(complete_video))
        .route(
            "/api/learning-videos/driver/:driver_id/completed",
            get(completed_videos),
        )
        .route("/api/checklist-templates", get(list_templates))
        .route("/api/checklist-completions", post(complete_checklist))
        .route(
            "/api/checklist-completions/driver/:driver_id",
            get(checklist_completions_by_driver),
        )
}

#[derive(Deserialize)]
pub struct VideoListParams {
    pub category: Option<String>,
}

#[derive(Deserialize)]
pub struct TemplateParams {
    #[serde(rename = "type")]
    pub checklist_type: Option<String>,
}

#[derive(Deserialize)]
pub struct CompleteVideoRequest {
    pub driver_id: Uuid,
}

#[derive(Deserialize)]
pub struct CompleteChecklistRequest {
    pub driver_id: Uuid,
    pub trip_id: Option<Uuid>,
    pub checklist_type: String,
    #[serde(default)]
    pub completed_items: Vec<String>,
    pub all_items_completed: bool,
    pub notes: Option<String>,
}

#[derive(Serialize)]
pub struct CompleteVideoResponse {
    pub completion: VideoCompletion,
    pub points_earned: u32,
}

#[derive(Serialize)]
pub struct CompletedVideoEntry {
    pub id: Uuid,
    pub points_earned: u32,
    pub completed_at: DateTime<Utc>,
    pub video: LearningVideo,
}

async fn list_videos(
    State(state): State<Arc<AppState>>,
    Query(params): Query<VideoListParams>,
) -> Json<Vec<LearningVideo>> {
    let videos = state
        .learning_videos
        .iter()
        .filter(|entry| match &params.category {
            Some(category) => &entry.value().category == category,
            None => true,
        })
        .map(|entry| entry.value().clone())
        .collect();

    Json(videos)
}

/// Records a video completion and credits the video's point reward to the
/// driver ledger.
async fn complete_video(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Json(payload): Json<CompleteVideoRequest>,
) -> Result<Json<CompleteVideoResponse>, AppError> {
    let video = state
        .learning_videos
        .get(&id)
        .map(|entry| entry.value().clone())
        .ok_or_else(|| AppError::NotFound(format!("video {} not found", id)))?;

    {
        let mut driver = state.drivers.get_mut(&payload.driver_id).ok_or_else(|| {
            AppError::NotFound(format!("driver {} not found", payload.driver_id))
        })?;
        driver.total_points += video.points_reward;
    }
    state
        .metrics
        .points_awarded_total
        .inc_by(u64::from(video.points_reward));

    let completion = VideoCompletion {
        id: Uuid::new_v4(),
        driver_id: payload.driver_id,
        video_id: video.id,
        points_earned: video.points_reward,
        completed_at: Utc::now(),
    };
    state.video_completions.insert(completion.id, completion.clone());

    tracing::info!(
        driver_id = %payload.driver_id,
        video_id = %video.id,
        points = video.points_reward,
        "learning video completed"
    );

    let points_earned = completion.points_earned;
    Ok(Json(CompleteVideoResponse {
        completion,
        points_earned,
    }))
}

async fn completed_videos(
    State(state): State<Arc<AppState>>,
    Path(driver_id): Path<Uuid>,
) -> Json<Vec<CompletedVideoEntry>> {
    let mut entries: Vec<CompletedVideoEntry> = state
        .video_completions
        .iter()
        .filter(|entry| entry.value().driver_id == driver_id)
        .filter_map(|entry| {
            let record = entry.value();
            let video = state.learning_videos.get(&record.video_id)?.value().clone();
            Some(CompletedVideoEntry {
                id: record.id,
                points_earned: record.points_earned,
                completed_at: record.completed_at,
                video,
            })
        })
        .collect();
    entries.sort_by(|a, b| b.completed_at.cmp(&a.completed_at));

    Json(entries)
}

async fn list_templates(
    State(state): State<Arc<AppState>>,
    Query(params): Query<TemplateParams>,
) -> Json<Vec<ChecklistTemplate>> {
    let templates = state
        .checklist_templates
        .iter()
        .filter(|entry| match &params.checklist_type {
            Some(checklist_type) => &entry.value().checklist_type == checklist_type,
            None => true,
        })
        .map(|entry| entry.value().clone())
        .collect();

    Json(templates)
}

/// Records a checklist run. A fully completed checklist earns a flat bonus;
/// the completion flag is client-reported, in line with the other
/// proof-of-work gates.
async fn complete_checklist(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CompleteChecklistRequest>,
) -> Result<Json<ChecklistCompletion>, AppError> {
    if payload.checklist_type.trim().is_empty() {
        return Err(AppError::BadRequest(
            "checklist type cannot be empty".to_string(),
        ));
    }

    {
        let mut driver = state.drivers.get_mut(&payload.driver_id).ok_or_else(|| {
            AppError::NotFound(format!("driver {} not found", payload.driver_id))
        })?;
        if payload.all_items_completed {
            driver.total_points += CHECKLIST_COMPLETION_BONUS;
        }
    }
    if payload.all_items_completed {
        state
            .metrics
            .points_awarded_total
            .inc_by(u64::from(CHECKLIST_COMPLETION_BONUS));
    }

    let completion = ChecklistCompletion {
        id: Uuid::new_v4(),
        driver_id: payload.driver_id,
        trip_id: payload.trip_id,
        checklist_type: payload.checklist_type,
        completed_items: payload.completed_items,
        all_items_completed: payload.all_items_completed,
        notes: payload.notes,
        completed_at: Utc::now(),
    };
    state
        .checklist_completions
        .insert(completion.id, completion.clone());

    Ok(Json(completion))
}

async fn checklist_completions_by_driver(
    State(state): State<Arc<AppState>>,
    Path(driver_id): Path<Uuid>,
) -> Json<Vec<ChecklistCompletion>> {
    let mut completions: Vec<ChecklistCompletion> = state
        .checklist_completions
        .iter()
        .filter(|entry| entry.value().driver_id == driver_id)
        .map(|entry| entry.value().clone())
        .collect();
    completions.sort_by(|a, b| b.completed_at.cmp(&a.completed_at));

    Json(completions)
}
