use axum::{extract::State, http::StatusCode, Extension, Json};
use validator::Validate;

use crate::auth::middleware::AuthUser;
use crate::error::{AppError, AppResult};
use crate::models::sheet::{
    CreateSheetRequest, CreateSheetResponse, DeleteSheetRequest, MessageResponse, UserSheet,
};
use crate::repo;
use crate::AppState;

pub async fn list_sheets(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
) -> AppResult<Json<Vec<UserSheet>>> {
    let sheets = repo::sheets::list(&state.db, auth_user.id).await?;
    Ok(Json(sheets))
}

pub async fn create_sheet(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Json(body): Json<CreateSheetRequest>,
) -> AppResult<(StatusCode, Json<CreateSheetResponse>)> {
    body.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let created = state.sheets.create_spreadsheet(&body.sheet_name).await?;

    let sheet = match repo::sheets::insert(
        &state.db,
        auth_user.id,
        &created.spreadsheet_id,
        &body.sheet_name,
    )
    .await
    {
        Ok(sheet) => sheet,
        Err(e) => {
            // The external spreadsheet now exists without a local row; it
            // needs manual cleanup. Surface the failure, do not mask it.
            tracing::error!(
                user_id = %auth_user.id,
                spreadsheet_id = %created.spreadsheet_id,
                "Spreadsheet created upstream but local insert failed — orphaned external resource"
            );
            return Err(e);
        }
    };

    Ok((
        StatusCode::CREATED,
        Json(CreateSheetResponse {
            spreadsheet_id: created.spreadsheet_id,
            spreadsheet_url: created.spreadsheet_url,
            user_sheet_id: sheet.id,
        }),
    ))
}

pub async fn delete_sheet(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Json(body): Json<DeleteSheetRequest>,
) -> AppResult<Json<MessageResponse>> {
    // Upstream first: the local row is only removed once the external
    // resource is gone (a 404 there counts as gone). Any other upstream
    // failure aborts before touching the row.
    state.sheets.delete_spreadsheet(&body.sheet_id).await?;

    let removed = repo::sheets::delete(&state.db, auth_user.id, body.user_sheet_id).await?;
    if !removed {
        tracing::warn!(
            user_id = %auth_user.id,
            user_sheet_id = %body.user_sheet_id,
            "No matching user_sheets row on delete"
        );
    }

    Ok(Json(MessageResponse {
        message: "Spreadsheet and database entry deleted successfully".into(),
    }))
}
