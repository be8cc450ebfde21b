use axum::{
    extract::Request,
    http::{HeaderMap, StatusCode},
    middleware::Next,
    response::{Json, Response},
};
use jsonwebtoken::{decode, DecodingKey, Validation};
use serde_json::Value;
use uuid::Uuid;

use crate::auth::Claims;
use crate::config;
use crate::error::ApiError;
use crate::visibility::{RegionalKey, Requester, Role};

/// Authenticated user context extracted from JWT
#[derive(Clone, Debug)]
pub struct AuthUser {
    pub user_id: Uuid,
    pub name: String,
    pub role: Role,
    pub regional: Option<RegionalKey>,
}

impl AuthUser {
    /// The facts the visibility policy needs about this caller.
    pub fn requester(&self) -> Requester {
        Requester::new(self.role, self.regional)
    }
}

impl From<Claims> for AuthUser {
    fn from(claims: Claims) -> Self {
        // Unknown or absent regional keys collapse to None; the policy then
        // fails closed for non-elevated callers.
        let regional = claims
            .regional
            .as_deref()
            .and_then(RegionalKey::from_key);

        Self {
            user_id: claims.sub,
            name: claims.name,
            role: claims.role,
            regional,
        }
    }
}

/// JWT authentication middleware that validates tokens and extracts user context
pub async fn jwt_auth_middleware(
    headers: HeaderMap,
    mut request: Request,
    next: Next,
) -> Result<Response, (StatusCode, Json<Value>)> {
    // Extract JWT from Authorization header
    let token = extract_jwt_from_headers(&headers).map_err(unauthorized_response)?;

    // Validate and decode JWT
    let claims = validate_jwt(&token).map_err(unauthorized_response)?;

    // Convert claims to AuthUser and inject into request
    let auth_user = AuthUser::from(claims);
    request.extensions_mut().insert(auth_user);

    Ok(next.run(request).await)
}

/// 401 rejection in the standard error body shape
fn unauthorized_response(msg: String) -> (StatusCode, Json<Value>) {
    let api_error = ApiError::unauthorized(msg);
    (
        StatusCode::from_u16(api_error.status_code()).unwrap_or(StatusCode::UNAUTHORIZED),
        Json(api_error.to_json()),
    )
}

/// Extract JWT token from Authorization header
fn extract_jwt_from_headers(headers: &HeaderMap) -> Result<String, String> {
    let auth_header = headers
        .get("authorization")
        .or_else(|| headers.get("Authorization"))
        .ok_or_else(|| "Missing Authorization header".to_string())?;

    let auth_str = auth_header
        .to_str()
        .map_err(|_| "Invalid Authorization header format".to_string())?;

    if let Some(token) = auth_str.strip_prefix("Bearer ") {
        if token.trim().is_empty() {
            return Err("Empty JWT token".to_string());
        }
        Ok(token.to_string())
    } else {
        Err("Authorization header must use Bearer token format".to_string())
    }
}

/// Validate JWT token and extract claims
fn validate_jwt(token: &str) -> Result<Claims, String> {
    let secret = &config::config().security.jwt_secret;

    if secret.is_empty() {
        return Err("JWT secret not configured".to_string());
    }

    let decoding_key = DecodingKey::from_secret(secret.as_bytes());
    let validation = Validation::default();

    let token_data = decode::<Claims>(token, &decoding_key, &validation)
        .map_err(|e| format!("Invalid JWT token: {}", e))?;

    Ok(token_data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::generate_jwt;

    #[test]
    fn test_token_round_trip() {
        let claims = Claims::new(
            Uuid::new_v4(),
            "Ana".to_string(),
            Role::Member,
            Some("nordeste_2".to_string()),
        );
        let token = generate_jwt(&claims).expect("token");

        let decoded = validate_jwt(&token).expect("claims");
        let auth_user = AuthUser::from(decoded);
        assert_eq!(auth_user.role, Role::Member);
        assert_eq!(auth_user.regional, Some(RegionalKey::Nordeste2));
    }

    #[test]
    fn test_unknown_regional_collapses_to_none() {
        let claims = Claims::new(
            Uuid::new_v4(),
            "Ana".to_string(),
            Role::Member,
            Some("centroeste".to_string()),
        );
        let auth_user = AuthUser::from(claims);
        assert_eq!(auth_user.regional, None);
        assert_eq!(auth_user.requester().regional, None);
    }

    #[test]
    fn test_bearer_extraction() {
        let mut headers = HeaderMap::new();
        headers.insert("authorization", "Bearer abc.def.ghi".parse().unwrap());
        assert_eq!(extract_jwt_from_headers(&headers).unwrap(), "abc.def.ghi");

        let mut bad = HeaderMap::new();
        bad.insert("authorization", "Basic abc".parse().unwrap());
        assert!(extract_jwt_from_headers(&bad).is_err());
        assert!(extract_jwt_from_headers(&HeaderMap::new()).is_err());
    }

    #[test]
    fn test_garbage_token_rejected() {
        assert!(validate_jwt("not-a-jwt").is_err());
    }

    #[test]
    fn test_unauthorized_response_shape() {
        // The middleware's rejection arm: concrete 401 tuple with the
        // standard error body
        let (status, Json(body)) = unauthorized_response("Missing Authorization header".into());
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["error"], true);
        assert_eq!(body["code"], "UNAUTHORIZED");
        assert_eq!(body["message"], "Missing Authorization header");
    }
}
