use chrono::NaiveDate;
use serde::Deserialize;

pub mod auth;
pub mod daily;
pub mod health;
pub mod monthly;
pub mod profile;
pub mod quarterly;
pub mod sheets;
pub mod weekly;

/// Query for the period GET endpoints; `date` may fall anywhere inside the
/// bucket and defaults to today (UTC).
#[derive(Debug, Deserialize)]
pub struct PeriodQuery {
    pub date: Option<NaiveDate>,
}
