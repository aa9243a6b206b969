use axum::{
    extract::{Query, State},
    Extension, Json,
};
use chrono::Utc;

use crate::auth::middleware::AuthUser;
use crate::error::AppResult;
use crate::handlers::PeriodQuery;
use crate::models::quarterly::{QuarterlyResponse, SaveQuarterlyRequest};
use crate::period::{Granularity, PeriodEnvelope};
use crate::repo;
use crate::AppState;

pub async fn get_quarterly(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Query(query): Query<PeriodQuery>,
) -> AppResult<Json<PeriodEnvelope<QuarterlyResponse>>> {
    let date = query.date.unwrap_or_else(|| Utc::now().date_naive());
    let record = repo::quarterly::fetch(&state.db, auth_user.id, date).await?;

    Ok(Json(Granularity::Quarter.envelope(date, record)))
}

pub async fn save_quarterly(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Json(body): Json<SaveQuarterlyRequest>,
) -> AppResult<Json<QuarterlyResponse>> {
    let date = body.response_date.unwrap_or_else(|| Utc::now().date_naive());
    let record = repo::quarterly::save(&state.db, auth_user.id, date, &body).await?;

    Ok(Json(record))
}
