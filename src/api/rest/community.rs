use std::sync::Arc;

use axum::extract::{Path, State};
use axum::routing::{get, post};
use axum::Json;
use axum::Router;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::AppError;
use crate::models::community::CommunityPost;
use crate::models::driver::Driver;
use crate::state::AppState;

const COMMUNITY_POST_POINTS: u32 = 10;

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/api/community/posts",
            post(create_post).get(list_posts),
        )
        .route("/api/community/posts/:id/like", post(like_post))
}

#[derive(Deserialize)]
pub struct CreatePostRequest {
    pub driver_id: Uuid,
    pub content: String,
    pub category: String,
}

#[derive(Serialize)]
pub struct PostEntry {
    #[serde(flatten)]
    pub post: CommunityPost,
    pub driver: Driver,
}

async fn create_post(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreatePostRequest>,
) -> Result<Json<CommunityPost>, AppError> {
    if payload.content.trim().is_empty() {
        return Err(AppError::BadRequest("content cannot be empty".to_string()));
    }

    {
        let mut driver = state.drivers.get_mut(&payload.driver_id).ok_or_else(|| {
            AppError::NotFound(format!("driver {} not found", payload.driver_id))
        })?;
        driver.total_points += COMMUNITY_POST_POINTS;
    }
    state
        .metrics
        .points_awarded_total
        .inc_by(u64::from(COMMUNITY_POST_POINTS));

    let post = CommunityPost {
        id: Uuid::new_v4(),
        driver_id: payload.driver_id,
        content: payload.content,
        category: payload.category,
        likes: 0,
        comments: 0,
        created_at: Utc::now(),
    };

    state.community_posts.insert(post.id, post.clone());
    Ok(Json(post))
}

async fn list_posts(State(state): State<Arc<AppState>>) -> Json<Vec<PostEntry>> {
    let mut entries: Vec<PostEntry> = state
        .community_posts
        .iter()
        .filter_map(|entry| {
            let post = entry.value().clone();
            let driver = state.drivers.get(&post.driver_id)?.value().clone();
            Some(PostEntry { post, driver })
        })
        .collect();
    entries.sort_by(|a, b| b.post.created_at.cmp(&a.post.created_at));

    Json(entries)
}

async fn like_post(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<CommunityPost>, AppError> {
    let mut post = state
        .community_posts
        .get_mut(&id)
        .ok_or_else(|| AppError::NotFound(format!("post {} not found", id)))?;

    post.likes += 1;
    Ok(Json(post.clone()))
}
