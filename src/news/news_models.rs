use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

/// Item ids arrive as strings or numbers depending on the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum NewsId {
    Number(i64),
    Text(String),
}

impl fmt::Display for NewsId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            NewsId::Number(id) => write!(f, "{}", id),
            NewsId::Text(id) => write!(f, "{}", id),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct NewsItem {
    pub id: NewsId,
    pub title: String,
    #[serde(default)]
    pub excerpt: String,
    #[serde(default)]
    pub date: String,
    /// Achievement tier, e.g. "Nasional" or "Internasional".
    #[serde(default)]
    pub level: Option<String>,
    #[serde(default)]
    pub jenjang: String,
    #[serde(default)]
    pub category: String,
}

impl NewsItem {
    pub fn tier(&self) -> &str {
        match self.level.as_deref() {
            Some(level) if !level.is_empty() => level,
            _ => "Nasional",
        }
    }

    pub fn is_international(&self) -> bool {
        self.level.as_deref() == Some("Internasional")
    }

    /// Last word of the date, which is the year for dates like "12 Mei 2024".
    pub fn year(&self) -> &str {
        self.date.split(' ').last().unwrap_or_default()
    }
}
