//! Authentication routes for admin registration, login, and token management.

use axum::{extract::State, http::StatusCode, Extension, Json};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;
use crate::middleware::UserAuth;
use crate::services::auth::{AuthError, AuthService};

/// Request body for admin registration.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct RegisterRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    /// Password (min 8 chars, 1 upper, 1 lower, 1 digit)
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Response body for successful registration.
///
/// No tokens are returned; the account must verify its email first. The
/// verification token is included here because the MVP has no email
/// delivery, matching what the server also writes to its logs.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct RegisterResponse {
    pub user_id: String,
    pub email: String,
    pub requires_email_verification: bool,
    pub verification_token: String,
}

/// Request body for email verification.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct VerifyEmailRequest {
    #[validate(length(min = 1, message = "Verification token is required"))]
    pub token: String,
}

/// Response body for successful email verification.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct VerifyEmailResponse {
    pub user_id: String,
    pub email_verified: bool,
}

/// Request body for login.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct LoginRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Token information in response.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct TokensResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub expires_in: i64,
}

/// Response body for successful login.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct LoginResponse {
    pub user_id: String,
    pub email: String,
    pub tokens: TokensResponse,
}

/// Request body for token refresh and logout.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct RefreshRequest {
    #[validate(length(min = 1, message = "Refresh token is required"))]
    pub refresh_token: String,
}

/// Response body for logout.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct LogoutResponse {
    pub success: bool,
}

/// Response body for the current session.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct SessionResponse {
    pub user_id: String,
    pub email: String,
    pub email_verified: bool,
    pub created_at: String,
    pub last_login_at: Option<String>,
}

/// Register the admin account.
///
/// POST /api/v1/auth/register
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<RegisterResponse>), ApiError> {
    request.validate()?;

    let auth_service = AuthService::new(state.pool.clone(), state.jwt.clone());

    let outcome = auth_service
        .register(&request.email, &request.password)
        .await
        .map_err(map_auth_error)?;

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            user_id: outcome.user_id.to_string(),
            email: outcome.email,
            requires_email_verification: true,
            verification_token: outcome.verification_token,
        }),
    ))
}

/// Verify the admin email address.
///
/// POST /api/v1/auth/verify-email
pub async fn verify_email(
    State(state): State<AppState>,
    Json(request): Json<VerifyEmailRequest>,
) -> Result<Json<VerifyEmailResponse>, ApiError> {
    request.validate()?;

    let auth_service = AuthService::new(state.pool.clone(), state.jwt.clone());

    let user_id = auth_service
        .verify_email(&request.token)
        .await
        .map_err(map_auth_error)?;

    Ok(Json(VerifyEmailResponse {
        user_id: user_id.to_string(),
        email_verified: true,
    }))
}

/// Login with email and password.
///
/// POST /api/v1/auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    request.validate()?;

    let auth_service = AuthService::new(state.pool.clone(), state.jwt.clone());

    let result = auth_service
        .login(&request.email, &request.password)
        .await
        .map_err(map_auth_error)?;

    Ok(Json(LoginResponse {
        user_id: result.user_id.to_string(),
        email: result.email,
        tokens: TokensResponse {
            access_token: result.access_token,
            refresh_token: result.refresh_token,
            token_type: "Bearer".to_string(),
            expires_in: result.access_token_expires_in,
        },
    }))
}

/// Refresh the access token.
///
/// POST /api/v1/auth/refresh
pub async fn refresh(
    State(state): State<AppState>,
    Json(request): Json<RefreshRequest>,
) -> Result<Json<TokensResponse>, ApiError> {
    request.validate()?;

    let auth_service = AuthService::new(state.pool.clone(), state.jwt.clone());

    let result = auth_service
        .refresh(&request.refresh_token)
        .await
        .map_err(map_auth_error)?;

    Ok(Json(TokensResponse {
        access_token: result.access_token,
        refresh_token: result.refresh_token,
        token_type: "Bearer".to_string(),
        expires_in: result.expires_in,
    }))
}

/// Logout by revoking the session tied to the refresh token.
///
/// POST /api/v1/auth/logout
pub async fn logout(
    State(state): State<AppState>,
    Json(request): Json<RefreshRequest>,
) -> Result<Json<LogoutResponse>, ApiError> {
    request.validate()?;

    let auth_service = AuthService::new(state.pool.clone(), state.jwt.clone());

    auth_service
        .logout(&request.refresh_token)
        .await
        .map_err(map_auth_error)?;

    Ok(Json(LogoutResponse { success: true }))
}

/// Return the authenticated admin's session details.
///
/// GET /api/v1/auth/session
pub async fn session(
    State(state): State<AppState>,
    Extension(auth): Extension<UserAuth>,
) -> Result<Json<SessionResponse>, ApiError> {
    let auth_service = AuthService::new(state.pool.clone(), state.jwt.clone());

    let info = auth_service
        .current_user(auth.user_id)
        .await
        .map_err(map_auth_error)?;

    Ok(Json(SessionResponse {
        user_id: info.user_id.to_string(),
        email: info.email,
        email_verified: info.email_verified,
        created_at: info.created_at.to_rfc3339(),
        last_login_at: info.last_login_at.map(|t| t.to_rfc3339()),
    }))
}

/// Translate service-level auth errors into API responses.
fn map_auth_error(e: AuthError) -> ApiError {
    match e {
        AuthError::EmailAlreadyExists => ApiError::Conflict("Email already registered".to_string()),
        AuthError::WeakPassword(msg) => ApiError::Validation(msg),
        AuthError::InvalidCredentials => {
            ApiError::Unauthorized("Invalid email or password".to_string())
        }
        AuthError::EmailNotVerified => {
            ApiError::Forbidden("Email address is not verified".to_string())
        }
        AuthError::UserDisabled => ApiError::Forbidden("Account is disabled".to_string()),
        AuthError::UserNotFound => ApiError::NotFound("User not found".to_string()),
        AuthError::InvalidRefreshToken | AuthError::SessionNotFound => {
            ApiError::Unauthorized("Invalid refresh token".to_string())
        }
        AuthError::InvalidVerificationToken => {
            ApiError::Validation("Invalid or expired verification token".to_string())
        }
        AuthError::EmailAlreadyVerified => {
            ApiError::Conflict("Email already verified".to_string())
        }
        AuthError::DatabaseError(db_err) => ApiError::from(db_err),
        AuthError::PasswordError(e) => ApiError::Internal(format!("Password error: {}", e)),
        AuthError::TokenError(e) => ApiError::Internal(format!("Token error: {}", e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_request_validation() {
        let request = RegisterRequest {
            email: "admin@hoa.test".to_string(),
            password: "Secret123!".to_string(),
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_register_request_invalid_email() {
        let request = RegisterRequest {
            email: "not-an-email".to_string(),
            password: "Secret123!".to_string(),
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_register_request_empty_password() {
        let request = RegisterRequest {
            email: "admin@hoa.test".to_string(),
            password: String::new(),
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_login_request_validation() {
        let request = LoginRequest {
            email: "admin@hoa.test".to_string(),
            password: "Secret123!".to_string(),
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_refresh_request_requires_token() {
        let request = RefreshRequest {
            refresh_token: String::new(),
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_map_email_not_verified_is_forbidden() {
        let error = map_auth_error(AuthError::EmailNotVerified);
        matches!(error, ApiError::Forbidden(_))
            .then_some(())
            .expect("EmailNotVerified should map to Forbidden");
    }

    #[test]
    fn test_map_invalid_credentials_is_unauthorized() {
        let error = map_auth_error(AuthError::InvalidCredentials);
        matches!(error, ApiError::Unauthorized(_))
            .then_some(())
            .expect("InvalidCredentials should map to Unauthorized");
    }
}
