//! Record shapes shared between the pages and the backend.
//!
//! Field names on the wire match what the backend stores, so these
//! structs must stay in step with `healthlog-tauri`'s journal types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Whether a journal entry was eaten or drunk.
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

/// A food or drink journal entry.
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

impl Food {
    /// Blank, unsaved entry stamped with `date`.
    pub fn new_at(date: DateTime<Utc>) -> Self {
        Self {
            date,
            id: None,
            ingredients: Vec::new(),
            notes: String::new(),
            title: String::new(),
            kind: FoodKind::Food,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Exercise {
    pub date: DateTime<Utc>,
    pub distance: f64,
    pub duration: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub intensity: u8,
    #[serde(default)]
    pub notes: String,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Sleep {
    pub awakenings: u32,
    pub date: DateTime<Utc>,
    pub duration: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub notes: String,
    pub rating: u8,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Symptom {
    pub date: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub notes: String,
    pub rating: u8,
    #[serde(rename = "type")]
    pub kind: String,
}

/// Signed-in account as reported by the identity provider.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct User {
    #[serde(rename = "displayName")]
    pub display_name: String,
    pub email: String,
    #[serde(rename = "photoURL")]
    pub photo_url: String,
    pub uid: String,
}

/// What a virtualized list hands to each row it renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowRenderParams {
    pub index: usize,
    pub key: String,
    pub style: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_food_wire_names() {
        let food = Food {
            date: Utc.with_ymd_and_hms(2024, 3, 5, 12, 0, 0).unwrap(),
            id: Some("abc".to_string()),
            ingredients: vec!["eggs".to_string()],
            notes: String::new(),
            title: "Omelette".to_string(),
            kind: FoodKind::Drink,
        };

        let json = serde_json::to_value(&food).unwrap();
        assert_eq!(json["type"], "drink");
        assert_eq!(json["id"], "abc");
        assert_eq!(json["ingredients"][0], "eggs");
    }

    #[test]
    fn test_unsaved_food_omits_id() {
        let food = Food::new_at(Utc::now());
        let json = serde_json::to_value(&food).unwrap();
        assert!(json.get("id").is_none());
        assert_eq!(json["type"], "food");
    }

    #[test]
    fn test_food_accepts_missing_optional_fields() {
        let json = r#"{"date":"2024-03-05T14:30:00Z","title":"Tea","type":"drink"}"#;
        let food: Food = serde_json::from_str(json).unwrap();
        assert_eq!(food.kind, FoodKind::Drink);
        assert!(food.ingredients.is_empty());
        assert!(food.notes.is_empty());
        assert!(food.id.is_none());
    }

    #[test]
    fn test_unknown_food_kind_is_rejected() {
        let json = r#"{"date":"2024-03-05T14:30:00Z","title":"Tea","type":"snack"}"#;
        assert!(serde_json::from_str::<Food>(json).is_err());
        assert_eq!(FoodKind::parse("snack"), None);
        assert_eq!(FoodKind::parse("drink"), Some(FoodKind::Drink));
    }

    #[test]
    fn test_exercise_wire_names() {
        let json = r#"{"date":"2024-03-05T07:00:00Z","distance":5.2,"duration":31.5,"intensity":3,"notes":"","type":"run"}"#;
        let exercise: Exercise = serde_json::from_str(json).unwrap();
        assert_eq!(exercise.kind, "run");
        assert_eq!(exercise.intensity, 3);
        assert!(exercise.id.is_none());

        let value = serde_json::to_value(&exercise).unwrap();
        assert_eq!(value["type"], "run");
        assert!(value.get("kind").is_none());
        assert!(value.get("id").is_none());
        assert_eq!(serde_json::from_value::<Exercise>(value).unwrap(), exercise);
    }

    #[test]
    fn test_sleep_keeps_id_when_present() {
        let json = r#"{"awakenings":2,"date":"2024-03-05T06:30:00Z","duration":7.5,"id":"s1","rating":4}"#;
        let sleep: Sleep = serde_json::from_str(json).unwrap();
        assert_eq!(sleep.id.as_deref(), Some("s1"));
        assert_eq!(sleep.awakenings, 2);
        assert!(sleep.notes.is_empty());

        let value = serde_json::to_value(&sleep).unwrap();
        assert_eq!(value["id"], "s1");
        assert_eq!(value["rating"], 4);
    }

    #[test]
    fn test_symptom_wire_names() {
        let symptom = Symptom {
            date: Utc.with_ymd_and_hms(2024, 3, 5, 20, 0, 0).unwrap(),
            id: None,
            notes: "after dinner".to_string(),
            rating: 2,
            kind: "bloating".to_string(),
        };

        let value = serde_json::to_value(&symptom).unwrap();
        assert_eq!(value["type"], "bloating");
        assert!(value.get("id").is_none());
        assert_eq!(value["date"], "2024-03-05T20:00:00Z");
        assert_eq!(serde_json::from_value::<Symptom>(value).unwrap(), symptom);
    }

    #[test]
    fn test_user_wire_names() {
        let json = r#"{"displayName":"Sam","email":"sam@example.com","photoURL":"https://x/p.png","uid":"u1"}"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.display_name, "Sam");
        assert_eq!(user.photo_url, "https://x/p.png");
    }
}
