use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A top-level planning record spanning an inclusive date range.
///
/// `trip_timezone` is stored verbatim (typically an IANA zone name); it is
/// never resolved against a zone database.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Trip {
    pub id: String,
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub trip_timezone: String,
}
