use std::path::Path;

use chrono::{DateTime, SecondsFormat, Utc};
use rusqlite::{params, Connection, OptionalExtension, Row};
use tracing::info;
use uuid::Uuid;

use super::types::{Food, FoodKind};
use crate::error::JournalError;

/// SQLite store for food and drink entries.
/// All operations are synchronous (rusqlite is blocking).
pub struct FoodJournal {
    conn: Connection,
}

fn encode_date(date: &DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn unreadable(column: usize, e: impl std::error::Error + Send + Sync + 'static) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(column, rusqlite::types::Type::Text, Box::new(e))
}

fn decode_date(raw: &str) -> rusqlite::Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|d| d.with_timezone(&Utc))
        .map_err(|e| unreadable(1, e))
}

fn food_from_row(row: &Row<'_>) -> rusqlite::Result<Food> {
    let date: String = row.get(1)?;
    let kind: String = row.get(2)?;
    let ingredients_json: String = row.get(4)?;

    let ingredients = serde_json::from_str(&ingredients_json).map_err(|e| unreadable(4, e))?;
    let kind = FoodKind::parse(&kind).ok_or_else(|| {
        unreadable(2, JournalError::Invalid(format!("unknown kind {:?}", kind)))
    })?;

    Ok(Food {
        id: Some(row.get(0)?),
        date: decode_date(&date)?,
        kind,
        title: row.get(3)?,
        ingredients,
        notes: row.get(5)?,
    })
}

impl FoodJournal {
    /// Create or open the journal database at `db_path`.
    pub fn open(db_path: &Path) -> Result<Self, JournalError> {
        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                JournalError::Invalid(format!("Failed to create data dir: {}", e))
            })?;
        }

        let conn = Connection::open(db_path)?;

        conn.execute(
            "CREATE TABLE IF NOT EXISTS foods (
                id TEXT PRIMARY KEY,
                date TEXT NOT NULL,
                kind TEXT NOT NULL,
                title TEXT NOT NULL,
                ingredients_json TEXT NOT NULL,
                notes TEXT NOT NULL DEFAULT ''
            )",
            [],
        )?;

        conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_foods_date ON foods(date DESC)",
            [],
        )?;

        info!("Opened food journal at {:?}", db_path);
        Ok(Self { conn })
    }

    /// Insert `food` when it has no id yet, otherwise update the stored entry.
    /// Returns the entry as stored.
    pub fn save(&self, food: Food) -> Result<Food, JournalError> {
        if food.title.is_empty() {
            return Err(JournalError::Invalid("title is required".to_string()));
        }

        let mut food = food;
        food.ingredients.retain(|i| !i.is_empty());
        let ingredients_json = serde_json::to_string(&food.ingredients)?;
        let date = encode_date(&food.date);
        food.date = decode_date(&date)?;

        match food.id.clone() {
            Some(id) => {
                let updated = self.conn.execute(
                    "UPDATE foods
                 SET date = ?1, kind = ?2, title = ?3, ingredients_json = ?4, notes = ?5
                 WHERE id = ?6",
                    params![date, food.kind.as_str(), food.title, ingredients_json, food.notes, id],
                )?;
                if updated == 0 {
                    return Err(JournalError::NotFound(id));
                }
                info!("Updated food entry {}", id);
            }
            None => {
                let id = Uuid::new_v4().to_string();
                self.conn.execute(
                    "INSERT INTO foods (id, date, kind, title, ingredients_json, notes)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                    params![id, date, food.kind.as_str(), food.title, ingredients_json, food.notes],
                )?;
                info!("Recorded food entry {}: {}", id, food.title);
                food.id = Some(id);
            }
        }

        Ok(food)
    }

    pub fn get(&self, id: &str) -> Result<Food, JournalError> {
        self.conn
            .query_row(
                "SELECT id, date, kind, title, ingredients_json, notes FROM foods WHERE id = ?1",
                params![id],
                food_from_row,
            )
            .optional()?
            .ok_or_else(|| JournalError::NotFound(id.to_string()))
    }

    /// All entries, newest first.
    pub fn list(&self) -> Result<Vec<Food>, JournalError> {
        let mut stmt = self.conn.prepare(
            "SELECT id, date, kind, title, ingredients_json, notes
             FROM foods
             ORDER BY date DESC",
        )?;

        let rows = stmt.query_map([], food_from_row)?;
        Ok(rows.collect::<Result<Vec<_>, _>>()?)
    }

    pub fn delete(&self, id: &str) -> Result<(), JournalError> {
        let removed = self
            .conn
            .execute("DELETE FROM foods WHERE id = ?1", params![id])?;
        if removed == 0 {
            return Err(JournalError::NotFound(id.to_string()));
        }
        info!("Deleted food entry {}", id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use tempfile::TempDir;

    fn create_test_journal() -> (FoodJournal, TempDir) {
        let dir = TempDir::new().unwrap();
        let journal = FoodJournal::open(&dir.path().join("journal.db")).unwrap();
        (journal, dir)
    }

    fn entry(title: &str, hour: u32) -> Food {
        Food {
            date: Utc.with_ymd_and_hms(2024, 3, 5, hour, 30, 0).unwrap(),
            id: None,
            ingredients: vec!["eggs".to_string(), "milk".to_string()],
            notes: String::new(),
            title: title.to_string(),
            kind: FoodKind::Food,
        }
    }

    #[test]
    fn test_save_assigns_id_and_get_returns_it() {
        let (journal, _dir) = create_test_journal();

        let saved = journal.save(entry("Omelette", 8)).unwrap();
        let id = saved.id.clone().unwrap();
        assert!(!id.is_empty());

        let loaded = journal.get(&id).unwrap();
        assert_eq!(loaded, saved);
    }

    #[test]
    fn test_save_with_id_updates_in_place() {
        let (journal, _dir) = create_test_journal();

        let mut saved = journal.save(entry("Tea", 9)).unwrap();
        saved.title = "Green tea".to_string();
        saved.kind = FoodKind::Drink;
        saved.notes = "no sugar".to_string();
        let updated = journal.save(saved.clone()).unwrap();

        assert_eq!(updated.id, saved.id);
        let all = journal.list().unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].title, "Green tea");
        assert_eq!(all[0].kind, FoodKind::Drink);
        assert_eq!(all[0].notes, "no sugar");
    }

    #[test]
    fn test_save_strips_blank_ingredients() {
        let (journal, _dir) = create_test_journal();

        let mut food = entry("Pancakes", 7);
        food.ingredients = vec![
            String::new(),
            "eggs".to_string(),
            String::new(),
            "milk".to_string(),
        ];
        let saved = journal.save(food).unwrap();

        let loaded = journal.get(saved.id.as_deref().unwrap()).unwrap();
        assert_eq!(loaded.ingredients, vec!["eggs", "milk"]);
    }

    #[test]
    fn test_save_rejects_empty_title() {
        let (journal, _dir) = create_test_journal();

        let result = journal.save(entry("", 8));
        assert!(matches!(result, Err(JournalError::Invalid(_))));
        assert!(journal.list().unwrap().is_empty());
    }

    #[test]
    fn test_update_unknown_id_is_not_found() {
        let (journal, _dir) = create_test_journal();

        let mut food = entry("Soup", 12);
        food.id = Some("missing".to_string());
        let result = journal.save(food);
        assert!(matches!(result, Err(JournalError::NotFound(id)) if id == "missing"));
    }

    #[test]
    fn test_list_newest_first() {
        let (journal, _dir) = create_test_journal();

        journal.save(entry("Breakfast", 8)).unwrap();
        journal.save(entry("Dinner", 19)).unwrap();
        journal.save(entry("Lunch", 12)).unwrap();

        let titles: Vec<String> = journal.list().unwrap().into_iter().map(|f| f.title).collect();
        assert_eq!(titles, vec!["Dinner", "Lunch", "Breakfast"]);
    }

    #[test]
    fn test_delete_removes_entry() {
        let (journal, _dir) = create_test_journal();

        let saved = journal.save(entry("Snack", 15)).unwrap();
        let id = saved.id.unwrap();
        journal.delete(&id).unwrap();

        assert!(matches!(journal.get(&id), Err(JournalError::NotFound(_))));
        assert!(matches!(journal.delete(&id), Err(JournalError::NotFound(_))));
    }

    #[test]
    fn test_save_returns_date_as_stored() {
        let (journal, _dir) = create_test_journal();

        let mut food = entry("Coffee", 6);
        food.date = food.date + chrono::Duration::nanoseconds(123_456_789);
        let saved = journal.save(food).unwrap();

        assert_eq!(saved.date.timestamp_subsec_millis(), 123);
        assert_eq!(saved.date.timestamp_subsec_nanos(), 123_000_000);
        assert_eq!(journal.get(saved.id.as_deref().unwrap()).unwrap(), saved);
    }

    #[test]
    fn test_unreadable_ingredients_are_an_error() {
        let (journal, _dir) = create_test_journal();

        let saved = journal.save(entry("Stew", 18)).unwrap();
        let id = saved.id.unwrap();
        journal
            .conn
            .execute(
                "UPDATE foods SET ingredients_json = 'not json' WHERE id = ?1",
                params![id],
            )
            .unwrap();

        assert!(matches!(journal.get(&id), Err(JournalError::Storage(_))));
        assert!(matches!(journal.list(), Err(JournalError::Storage(_))));
    }

    #[test]
    fn test_unknown_stored_kind_is_an_error() {
        let (journal, _dir) = create_test_journal();

        let saved = journal.save(entry("Stew", 18)).unwrap();
        let id = saved.id.unwrap();
        journal
            .conn
            .execute("UPDATE foods SET kind = 'snack' WHERE id = ?1", params![id])
            .unwrap();

        assert!(matches!(journal.get(&id), Err(JournalError::Storage(_))));
    }

    #[test]
    fn test_get_not_found_message() {
        let (journal, _dir) = create_test_journal();

        let err: String = journal.get("nope").unwrap_err().into();
        assert!(err.contains("Entry not found"));
    }
}
