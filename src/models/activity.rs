use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// A single scheduled item belonging to exactly one trip.
///
/// `kind` is serialized as `type` on the wire. The documented values are
/// `lodging|transport|food|sight|other`, but the set is deliberately open:
/// any non-blank string is accepted.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub id: String,
    pub trip_id: String,
    pub day: NaiveDate,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub notes: Option<String>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub address: Option<String>,
}
