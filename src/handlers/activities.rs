use axum::extract::{Extension, Path};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::database::{DatabaseManager, Repository};
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult, AuthUser};
use crate::visibility::{RegionScoped, VisibilityPolicy};

/// GET /api/activities - list the activities visible to the requester.
/// Activity region lives inside the description text, so this exercises the
/// legacy substring fallback of the policy.
pub async fn list(
    Extension(auth_user): Extension<AuthUser>,
    Extension(policy): Extension<VisibilityPolicy>,
) -> ApiResult<Value> {
    let pool = DatabaseManager::pool().await?;
    let activities = Repository::new(&pool).activities().await?;

    let visible = policy.filter_visible(&auth_user.requester(), activities);
    Ok(ApiResponse::success(json!(visible)))
}

/// GET /api/activities/:id
pub async fn get(
    Path(id): Path<Uuid>,
    Extension(auth_user): Extension<AuthUser>,
    Extension(policy): Extension<VisibilityPolicy>,
) -> ApiResult<Value> {
    let pool = DatabaseManager::pool().await?;
    let activity = Repository::new(&pool)
        .activity(id)
        .await?
        .filter(|a| policy.is_visible(&auth_user.requester(), a.region()))
        .ok_or_else(|| ApiError::not_found("Activity not found"))?;

    Ok(ApiResponse::success(json!(activity)))
}
