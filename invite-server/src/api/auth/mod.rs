//! 认证 API 模块

mod handler;

use axum::{Router, middleware, routing::{get, post}};

use crate::auth::require_admin;
use crate::core::ServerState;

pub fn router(state: ServerState) -> Router<ServerState> {
    Router::new().nest("/api/auth", routes(state))
}

fn routes(state: ServerState) -> Router<ServerState> {
    // 登录无需会话
    let public_routes = Router::new().route("/login", post(handler::login));

    // 会话路由：需要有效管理员会话
    let session_routes = Router::new()
        .route("/me", get(handler::me))
        .route("/logout", post(handler::logout))
        .layer(middleware::from_fn_with_state(state, require_admin));

    public_routes.merge(session_routes)
}
