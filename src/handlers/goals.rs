use axum::extract::{Extension, Path};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::database::{DatabaseManager, Repository};
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult, AuthUser};
use crate::visibility::{RegionScoped, VisibilityPolicy};

/// GET /api/goals - list the goals visible to the requester
pub async fn list(
    Extension(auth_user): Extension<AuthUser>,
    Extension(policy): Extension<VisibilityPolicy>,
) -> ApiResult<Value> {
    let pool = DatabaseManager::pool().await?;
    let goals = Repository::new(&pool).goals().await?;

    let visible = policy.filter_visible(&auth_user.requester(), goals);
    Ok(ApiResponse::success(json!(visible)))
}

/// GET /api/goals/:id - fetch one goal; rows outside the requester's region
/// read as missing rather than forbidden
pub async fn get(
    Path(id): Path<Uuid>,
    Extension(auth_user): Extension<AuthUser>,
    Extension(policy): Extension<VisibilityPolicy>,
) -> ApiResult<Value> {
    let pool = DatabaseManager::pool().await?;
    let goal = Repository::new(&pool)
        .goal(id)
        .await?
        .filter(|g| policy.is_visible(&auth_user.requester(), g.region()))
        .ok_or_else(|| ApiError::not_found("Goal not found"))?;

    Ok(ApiResponse::success(json!(goal)))
}
