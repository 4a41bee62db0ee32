//! Public Guest API Handlers
//!
//! Prefix lookup for the search screen and the one-shot RSVP endpoints.

use axum::{
    Json,
    extract::{Path, Query, State},
};

use crate::core::ServerState;
use crate::db::repository::guest;
use crate::utils::validation::{MAX_PREFIX_LEN, MAX_RSVP_TEXT_LEN, validate_bounded_text};
use crate::utils::{AppError, AppResult};
use shared::client::{LastNameEntry, PrefixQuery};
use shared::models::{GuestSummary, RsvpRecord, RsvpSubmit};

/// GET /api/guests/last-names?prefix=xxx - 姓氏前缀查询 (去重)
///
/// 空前缀直接返回空列表；最短前缀长度由客户端控制，服务端只限制上限。
pub async fn last_names(
    State(state): State<ServerState>,
    Query(query): Query<PrefixQuery>,
) -> AppResult<Json<Vec<LastNameEntry>>> {
    let prefix = query.prefix.trim();
    if prefix.is_empty() {
        return Ok(Json(Vec::new()));
    }
    validate_bounded_text(prefix, "prefix", MAX_PREFIX_LEN)?;

    let names = guest::distinct_last_names(&state.pool, prefix).await?;
    Ok(Json(
        names
            .into_iter()
            .map(|last_name| LastNameEntry { last_name })
            .collect(),
    ))
}

/// GET /api/guests/search?prefix=xxx - 宾客前缀搜索
pub async fn search(
    State(state): State<ServerState>,
    Query(query): Query<PrefixQuery>,
) -> AppResult<Json<Vec<GuestSummary>>> {
    let prefix = query.prefix.trim();
    if prefix.is_empty() {
        return Ok(Json(Vec::new()));
    }
    validate_bounded_text(prefix, "prefix", MAX_PREFIX_LEN)?;

    let guests = guest::search_by_last_name(&state.pool, prefix).await?;
    Ok(Json(guests))
}

/// GET /api/guests/:id/rsvp - 查询宾客当前 RSVP 状态
pub async fn rsvp_status(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<RsvpRecord>> {
    let record = guest::rsvp_of(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Guest {}", id)))?;
    Ok(Json(record))
}

/// PUT /api/guests/:id/rsvp - 提交 RSVP (一次性)
///
/// 已作答的宾客返回 409；失败的提交不会部分写入。
pub async fn submit_rsvp(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<RsvpSubmit>,
) -> AppResult<Json<RsvpRecord>> {
    validate_bounded_text(&payload.guest_names, "guest_names", MAX_RSVP_TEXT_LEN)?;
    validate_bounded_text(&payload.song_request, "song_request", MAX_RSVP_TEXT_LEN)?;

    let record = guest::submit_rsvp(&state.pool, id, payload).await?;

    tracing::info!(
        guest_id = id,
        confirmed = record.confirmed,
        "RSVP recorded"
    );

    Ok(Json(record))
}
