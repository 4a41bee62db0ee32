//! 认证中间件
//!
//! 为 JWT 认证和管理员授权提供 Axum 中间件

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::auth::{CurrentAdmin, JwtService};
use crate::core::ServerState;
use crate::db::repository::admin;
use crate::utils::AppError;

/// 管理员认证中间件
///
/// 从 `Authorization: Bearer <token>` 头提取并验证 JWT，随后复核
/// allow-list：令牌有效但邮箱已从 admin 表移除 (或被停用) 的会话同样
/// 被拒绝。这是管理员身份唯一的判定点，handler 只信任注入的
/// [`CurrentAdmin`]。
///
/// # 错误处理
///
/// | 错误 | HTTP 状态码 |
/// |------|------------|
/// | 无 Authorization 头 | 401 Unauthorized |
/// | 令牌过期 | 401 TokenExpired |
/// | 无效令牌 | 401 InvalidToken |
/// | 不在 allow-list | 403 Forbidden |
pub async fn require_admin(
    State(state): State<ServerState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let auth_header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok());

    let token = match auth_header {
        Some(header) => {
            JwtService::extract_from_header(header).ok_or_else(AppError::invalid_token)?
        }
        None => {
            tracing::warn!(uri = %req.uri(), "Admin request without authorization header");
            return Err(AppError::unauthorized());
        }
    };

    // 验证令牌
    let claims = state.get_jwt_service().validate_token(token).map_err(|e| {
        tracing::warn!(error = %e, uri = %req.uri(), "Admin token rejected");
        match e {
            crate::auth::JwtError::ExpiredToken => AppError::token_expired(),
            _ => AppError::invalid_token(),
        }
    })?;

    let current = CurrentAdmin::try_from(claims).map_err(|_| AppError::invalid_token())?;

    // allow-list 复核：表中不存在或被停用的身份立即失效
    let record = admin::find_by_email(&state.pool, &current.email).await?;
    match record {
        Some(a) if a.is_active && a.id == current.id => {
            req.extensions_mut().insert(current);
            Ok(next.run(req).await)
        }
        _ => {
            tracing::warn!(
                email = %current.email,
                "Session rejected - identity not on admin allow-list"
            );
            Err(AppError::forbidden("Not an admin"))
        }
    }
}
