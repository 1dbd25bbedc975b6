//! Handlers for the `/auth` resource: registration, login, token refresh,
//! and logout.
//!
//! Login failures are deliberately indistinct: a wrong password and an
//! unknown email produce the same 401, so the endpoint cannot be used to
//! enumerate accounts.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use bobbi_core::error::CoreError;
use serde::{Deserialize, Serialize};
use validator::Validate;

use bobbi_db::models::session::CreateSession;
use bobbi_db::models::user::{CreateUser, RegisterUser, User};
use bobbi_db::repositories::{SessionRepo, UserRepo};

use crate::auth::jwt::{generate_access_token, generate_refresh_token, hash_refresh_token};
use crate::auth::password::{hash_password, validate_password_strength, verify_password};
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// DTO for login requests.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// DTO for refresh and logout requests.
#[derive(Debug, Deserialize)]
pub struct RefreshRequest {
    pub refresh_token: String,
}

/// Token pair issued on register, login, and refresh.
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub user: User,
}

/// Issue a fresh access/refresh token pair for a user, persisting the
/// refresh-token hash as a session.
async fn issue_tokens(state: &AppState, user: User) -> AppResult<TokenResponse> {
    let access_token = generate_access_token(user.id, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation failed: {e}")))?;

    let (refresh_token, refresh_token_hash) = generate_refresh_token();
    let expires_at = chrono::Utc::now()
        + chrono::Duration::days(state.config.jwt.refresh_token_expiry_days);

    SessionRepo::create(
        &state.pool,
        &CreateSession {
            user_id: user.id,
            refresh_token_hash,
            expires_at,
        },
    )
    .await?;

    Ok(TokenResponse {
        access_token,
        refresh_token,
        user,
    })
}

/// POST /api/v1/auth/register
pub async fn register(
    State(state): State<AppState>,
    Json(input): Json<RegisterUser>,
) -> AppResult<(StatusCode, Json<TokenResponse>)> {
    input
        .validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;
    validate_password_strength(&input.password)
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;

    if UserRepo::find_by_email(&state.pool, &input.email)
        .await?
        .is_some()
    {
        return Err(AppError::Core(CoreError::Conflict(
            "Email is already registered".into(),
        )));
    }

    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing failed: {e}")))?;

    let user = UserRepo::create(
        &state.pool,
        &CreateUser {
            email: input.email.to_lowercase(),
            password_hash,
            display_name: input.display_name,
        },
    )
    .await?;

    tracing::info!(user_id = %user.id, "User registered");

    let tokens = issue_tokens(&state, user).await?;
    Ok((StatusCode::CREATED, Json(tokens)))
}

/// POST /api/v1/auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<TokenResponse>> {
    let user = UserRepo::find_by_email(&state.pool, &input.email)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::Unauthorized("Invalid email or password".into())))?;

    let matches = verify_password(&input.password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification failed: {e}")))?;
    if !matches {
        return Err(AppError::Core(CoreError::Unauthorized(
            "Invalid email or password".into(),
        )));
    }

    tracing::info!(user_id = %user.id, "User logged in");

    let tokens = issue_tokens(&state, user).await?;
    Ok(Json(tokens))
}

/// POST /api/v1/auth/refresh
///
/// Rotates the refresh token: the presented token's session is revoked and
/// a new pair is issued.
pub async fn refresh(
    State(state): State<AppState>,
    Json(input): Json<RefreshRequest>,
) -> AppResult<Json<TokenResponse>> {
    let token_hash = hash_refresh_token(&input.refresh_token);

    let session = SessionRepo::find_live_by_hash(&state.pool, &token_hash)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Invalid or expired refresh token".into(),
            ))
        })?;

    let user = UserRepo::find_by_id(&state.pool, session.user_id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Invalid or expired refresh token".into(),
            ))
        })?;

    SessionRepo::revoke_by_hash(&state.pool, &token_hash).await?;

    let tokens = issue_tokens(&state, user).await?;
    Ok(Json(tokens))
}

/// POST /api/v1/auth/logout
///
/// Revokes the presented refresh token's session. Idempotent: revoking an
/// already-dead token still returns 200.
pub async fn logout(
    State(state): State<AppState>,
    Json(input): Json<RefreshRequest>,
) -> AppResult<Json<DataResponse<serde_json::Value>>> {
    let token_hash = hash_refresh_token(&input.refresh_token);
    let revoked = SessionRepo::revoke_by_hash(&state.pool, &token_hash).await?;

    Ok(Json(DataResponse {
        data: serde_json::json!({ "revoked": revoked }),
    }))
}

/// POST /api/v1/auth/logout-all
///
/// Revokes every live session of the authenticated user ("log out on all
/// devices").
pub async fn logout_all(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<serde_json::Value>>> {
    let revoked = SessionRepo::revoke_all_for_user(&state.pool, auth.user_id).await?;
    tracing::info!(user_id = %auth.user_id, revoked, "All sessions revoked");

    Ok(Json(DataResponse {
        data: serde_json::json!({ "revoked_sessions": revoked }),
    }))
}
