use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Video {
    pub id: i32,
    pub title: String,
    pub url: String,
    pub rating: i32,
    #[serde(default)]
    pub uploaded: Option<DateTime<Utc>>,
}

impl Video {
    /// Case-insensitive substring match against the title or the url
    pub fn matches(&self, term: &str) -> bool {
        let needle = term.to_uppercase();
        self.title.to_uppercase().contains(&needle) || self.url.to_uppercase().contains(&needle)
    }
}

/// Body of `POST /api`
#[derive(Debug, Clone, Serialize)]
pub struct NewVideo {
    pub title: String,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uploaded: Option<NaiveDate>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub fn as_query(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

/// `{result, message}` and `{result, message, id}` bodies
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct OutcomeBody {
    pub message: String,
    #[serde(default)]
    pub id: Option<i32>,
}
