//! Guest Management Handlers (admin surface)

use axum::{
    Json,
    extract::{Extension, Path, State},
};

use crate::auth::CurrentAdmin;
use crate::core::ServerState;
use crate::db::repository::guest;
use crate::utils::AppResult;
use crate::utils::validation::{
    MAX_MESSAGE_LEN, MAX_NAME_LEN, validate_optional_text, validate_required_text,
};
use shared::models::{Guest, GuestCreate};

/// GET /api/admin/guests - 获取全部宾客 (含 RSVP 状态)
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Guest>>> {
    let guests = guest::find_all(&state.pool).await?;
    Ok(Json(guests))
}

/// POST /api/admin/guests - 添加宾客
pub async fn create(
    State(state): State<ServerState>,
    Extension(current): Extension<CurrentAdmin>,
    Json(payload): Json<GuestCreate>,
) -> AppResult<Json<Guest>> {
    validate_required_text(&payload.first_name, "first_name", MAX_NAME_LEN)?;
    validate_required_text(&payload.last_name, "last_name", MAX_NAME_LEN)?;
    validate_optional_text(&payload.title, "title", MAX_NAME_LEN)?;
    validate_optional_text(&payload.message, "message", MAX_MESSAGE_LEN)?;

    let guest = guest::create(&state.pool, payload).await?;

    tracing::info!(
        guest_id = guest.id,
        admin = %current.email,
        "Guest added"
    );

    Ok(Json(guest))
}

/// DELETE /api/admin/guests/:id - 删除宾客
pub async fn delete(
    State(state): State<ServerState>,
    Extension(current): Extension<CurrentAdmin>,
    Path(id): Path<i64>,
) -> AppResult<Json<bool>> {
    let result = guest::delete(&state.pool, id).await?;

    if result {
        tracing::info!(guest_id = id, admin = %current.email, "Guest deleted");
    }

    Ok(Json(result))
}
