//! Account routes: register and login.
//!
//! Both return the same body shape, a user summary plus a fresh session
//! token; registration answers 201, login 200. The user summary never
//! includes the password hash.

use axum::{Json, Router, extract::State, http::StatusCode, routing::post};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use jot_core::types::{User, UserId};

use crate::error::ApiResult;
use crate::state::AppState;

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Public view of a user. The password hash stays server-side.
#[derive(Debug, Serialize)]
pub struct UserBody {
    pub id: UserId,
    pub email: String,
    pub created: DateTime<Utc>,
}

impl From<User> for UserBody {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            created: user.created,
        }
    }
}

/// Response for both register and login.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub user: UserBody,
    pub token: String,
}

// ============================================================================
// Route Handlers
// ============================================================================

/// POST /api/register
async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> ApiResult<(StatusCode, Json<AuthResponse>)> {
    let (user, token) = state
        .auth()
        .register(&request.email, &request.password)
        .await?;

    tracing::info!(user_id = %user.id, email = %user.email, "User registered");

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            user: user.into(),
            token,
        }),
    ))
}

/// POST /api/login
async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> ApiResult<Json<AuthResponse>> {
    let (user, token) = state
        .auth()
        .login(&request.email, &request.password)
        .await?;

    tracing::info!(user_id = %user.id, "User logged in");

    Ok(Json(AuthResponse {
        user: user.into(),
        token,
    }))
}

/// Build account routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/register", post(register))
        .route("/api/login", post(login))
}
