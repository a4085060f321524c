use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FoodKind {
    #[default]
    Food,
    Drink,
}

impl FoodKind {
    pub fn as_str(self) -> &'static str {
        match self {
            FoodKind::Food => "food",
            FoodKind::Drink => "drink",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "food" => Some(FoodKind::Food),
            "drink" => Some(FoodKind::Drink),
            _ => None,
        }
    }
}

/// A food or drink journal entry, as exchanged with the frontend.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Food {
    pub date: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub notes: String,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: FoodKind,
}
