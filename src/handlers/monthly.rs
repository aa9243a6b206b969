use axum::{
    extract::{Query, State},
    Extension, Json,
};
use chrono::Utc;

use crate::auth::middleware::AuthUser;
use crate::error::AppResult;
use crate::handlers::PeriodQuery;
use crate::models::monthly::{MonthlyResponse, SaveMonthlyRequest};
use crate::period::{Granularity, PeriodEnvelope};
use crate::repo;
use crate::AppState;

pub async fn get_monthly(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Query(query): Query<PeriodQuery>,
) -> AppResult<Json<PeriodEnvelope<MonthlyResponse>>> {
    let date = query.date.unwrap_or_else(|| Utc::now().date_naive());
    let record = repo::monthly::fetch(&state.db, auth_user.id, date).await?;

    Ok(Json(Granularity::Month.envelope(date, record)))
}

pub async fn save_monthly(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Json(body): Json<SaveMonthlyRequest>,
) -> AppResult<Json<MonthlyResponse>> {
    let date = body.response_date.unwrap_or_else(|| Utc::now().date_naive());
    let record = repo::monthly::save(&state.db, auth_user.id, date, &body).await?;

    Ok(Json(record))
}
