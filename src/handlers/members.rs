use axum::extract::Extension;
use serde_json::{json, Value};

use crate::database::{DatabaseManager, Repository};
use crate::middleware::{ApiResponse, ApiResult, AuthUser};
use crate::visibility::VisibilityPolicy;

/// GET /api/members - list the members visible to the requester
pub async fn list(
    Extension(auth_user): Extension<AuthUser>,
    Extension(policy): Extension<VisibilityPolicy>,
) -> ApiResult<Value> {
    let pool = DatabaseManager::pool().await?;
    let members = Repository::new(&pool).members().await?;

    let visible = policy.filter_visible(&auth_user.requester(), members);
    Ok(ApiResponse::success(json!(visible)))
}
