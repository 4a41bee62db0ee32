//! Authentication Handlers
//!
//! Handles admin login, logout, and session introspection.
//! Login is the only place a token is issued, and only for identities on
//! the admin allow-list.

use std::time::Duration;

use axum::{Extension, Json, extract::State};

use crate::auth::CurrentAdmin;
use crate::core::ServerState;
use crate::db::repository::admin;
use crate::utils::validation::{MAX_EMAIL_LEN, MAX_PASSWORD_LEN, validate_required_text};
use crate::utils::{AppError, AppResult};
use shared::client::{AdminInfo, LoginRequest, LoginResponse};

/// Fixed delay for authentication to prevent timing attacks
const AUTH_FIXED_DELAY_MS: u64 = 500;

/// POST /api/auth/login - 管理员登录
///
/// 校验邮箱/密码并检查 allow-list；任何一步失败都返回统一的
/// invalid-credentials 错误 (不泄露邮箱是否存在)。
pub async fn login(
    State(state): State<ServerState>,
    Json(req): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    validate_required_text(&req.email, "email", MAX_EMAIL_LEN)?;
    validate_required_text(&req.password, "password", MAX_PASSWORD_LEN)?;

    let record = admin::find_by_email(&state.pool, &req.email).await?;

    // Fixed delay to prevent timing attacks (before checking result)
    tokio::time::sleep(Duration::from_millis(AUTH_FIXED_DELAY_MS)).await;

    let admin = match record {
        Some(a) => {
            if !a.is_active {
                tracing::warn!(email = %req.email, "Login rejected - account disabled");
                return Err(AppError::forbidden("Account has been disabled"));
            }

            let password_valid = a
                .verify_password(&req.password)
                .map_err(|e| AppError::internal(format!("Password verification failed: {e}")))?;

            if !password_valid {
                tracing::warn!(email = %req.email, "Login failed - invalid credentials");
                return Err(AppError::invalid_credentials());
            }

            a
        }
        None => {
            tracing::warn!(email = %req.email, "Login failed - not on admin allow-list");
            return Err(AppError::invalid_credentials());
        }
    };

    let token = state
        .get_jwt_service()
        .generate_token(admin.id, &admin.email)
        .map_err(|e| AppError::internal(format!("Failed to generate token: {e}")))?;

    tracing::info!(admin_id = admin.id, email = %admin.email, "Admin logged in");

    Ok(Json(LoginResponse {
        token,
        admin: AdminInfo {
            id: admin.id,
            email: admin.email,
            is_active: admin.is_active,
            created_at: admin.created_at,
        },
    }))
}

/// GET /api/auth/me - 当前管理员信息
pub async fn me(
    State(state): State<ServerState>,
    Extension(current): Extension<CurrentAdmin>,
) -> AppResult<Json<AdminInfo>> {
    let admin = admin::find_by_id(&state.pool, current.id)
        .await?
        .ok_or_else(|| AppError::forbidden("Not an admin"))?;

    Ok(Json(AdminInfo {
        id: admin.id,
        email: admin.email,
        is_active: admin.is_active,
        created_at: admin.created_at,
    }))
}

/// POST /api/auth/logout - 注销
///
/// 令牌本身无状态，这里只记录审计日志；客户端负责丢弃令牌。
pub async fn logout(Extension(current): Extension<CurrentAdmin>) -> AppResult<Json<()>> {
    tracing::info!(admin_id = current.id, email = %current.email, "Admin logged out");
    Ok(Json(()))
}
