use axum::extract::Extension;
use serde_json::{json, Value};

use crate::middleware::{ApiResponse, ApiResult, AuthUser};

/// GET /api/auth/whoami - echo the authenticated requester as the visibility
/// layer sees them (canonical regional key plus display label)
pub async fn whoami(Extension(auth_user): Extension<AuthUser>) -> ApiResult<Value> {
    Ok(ApiResponse::success(json!({
        "id": auth_user.user_id,
        "name": auth_user.name,
        "role": auth_user.role,
        "regional": auth_user.regional,
        "regional_label": auth_user.regional.map(|k| k.label()),
    })))
}
