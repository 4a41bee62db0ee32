//! 公开宾客 API 模块
//!
//! 宾客无账号，查询与 RSVP 提交均为公开接口。

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/guests", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/last-names", get(handler::last_names))
        .route("/search", get(handler::search))
        .route("/{id}/rsvp", get(handler::rsvp_status).put(handler::submit_rsvp))
}
