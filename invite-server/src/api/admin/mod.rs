//! 宾客管理 API 模块
//!
//! 全部路由都要求管理员会话 ([`require_admin`] 复核 allow-list)。

mod handler;

use axum::{Router, middleware, routing::get};

use crate::auth::require_admin;
use crate::core::ServerState;

pub fn router(state: ServerState) -> Router<ServerState> {
    Router::new().nest("/api/admin/guests", routes(state))
}

fn routes(state: ServerState) -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route("/{id}", axum::routing::delete(handler::delete))
        .layer(middleware::from_fn_with_state(state, require_admin))
}
