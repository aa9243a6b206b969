use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

/// A provisioned external spreadsheet bound to a user.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct UserSheet {
    pub id: Uuid,
    pub user_id: Uuid,
    pub sheet_id: String,
    pub sheet_name: String,
    pub created_at: DateTime<Utc>,
}

/// POST /api/create-sheet
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateSheetRequest {
    #[validate(length(min = 1, max = 100, message = "Sheet name must be 1-100 characters"))]
    pub sheet_name: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSheetResponse {
    pub spreadsheet_id: String,
    pub spreadsheet_url: String,
    pub user_sheet_id: Uuid,
}

/// POST /api/delete-sheet
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteSheetRequest {
    pub sheet_id: String,
    pub user_sheet_id: Uuid,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}
