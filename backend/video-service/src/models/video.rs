use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use sqlx::FromRow;

/// A row of `youtube_videos`
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct Video {
    pub id: i32,
    pub title: String,
    pub url: String,
    pub rating: i32,
    pub uploaded: Option<DateTime<Utc>>,
}

/// Fields accepted when inserting a video. New rows always start at
/// rating 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewVideo {
    pub title: String,
    pub url: String,
    pub uploaded: Option<DateTime<Utc>>,
}

/// Ordering applied to the catalog listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    /// `"asc"` sorts ascending. Anything else, including a missing value,
    /// sorts descending.
    pub fn from_query(order: Option<&str>) -> Self {
        match order {
            Some("asc") => SortOrder::Asc,
            _ => SortOrder::Desc,
        }
    }

    /// Reads `order` from decoded query pairs. A repeated `order` is a list
    /// of values, never `"asc"`, so it sorts descending.
    pub fn from_query_pairs(pairs: &[(String, String)]) -> Self {
        let mut values = pairs
            .iter()
            .filter(|(key, _)| key == "order")
            .map(|(_, value)| value.as_str());

        match (values.next(), values.next()) {
            (Some(order), None) => Self::from_query(Some(order)),
            _ => SortOrder::Desc,
        }
    }
}

/// Parse an upload date given either as RFC 3339 or as `YYYY-MM-DD`
/// (midnight UTC).
pub fn parse_upload_date(raw: &str) -> Result<DateTime<Utc>, String> {
    let raw = raw.trim();

    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Ok(ts.with_timezone(&Utc));
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map(|date| Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN)))
        .map_err(|_| format!("invalid upload date: {raw}"))
}

pub(crate) fn deserialize_upload_date<'de, D>(
    deserializer: D,
) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    // Empty form inputs arrive as `uploaded=`
    let raw: Option<String> = Option::deserialize(deserializer)?;
    raw.as_deref()
        .filter(|value| !value.trim().is_empty())
        .map(parse_upload_date)
        .transpose()
        .map_err(serde::de::Error::custom)
}
