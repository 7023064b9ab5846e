use sqlx::{Executor, Sqlite, SqlitePool};

use crate::models::{JournalEntry, NewEntry};

/// Append one entry and return the stored row.
pub async fn insert_entry<'e, E>(executor: E, entry: &NewEntry) -> Result<JournalEntry, sqlx::Error>
where
    E: Executor<'e, Database = Sqlite>,
{
    sqlx::query_as::<_, JournalEntry>(
        r#"
        INSERT INTO journal_entries (date, entry_text, mood, mood_score, emoji)
        VALUES (?1, ?2, ?3, ?4, ?5)
        RETURNING *
        "#,
    )
    .bind(entry.date)
    .bind(&entry.entry_text)
    .bind(entry.mood.label())
    .bind(entry.mood_score)
    .bind(&entry.emoji)
    .fetch_one(executor)
    .await
}

/// Every entry, newest date first.
pub async fn list_entries(db: &SqlitePool) -> Result<Vec<JournalEntry>, sqlx::Error> {
    sqlx::query_as::<_, JournalEntry>(
        r#"
        SELECT * FROM journal_entries
        ORDER BY date DESC, id DESC
        "#,
    )
    .fetch_all(db)
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::pool::create_test_pool;
    use crate::models::Mood;
    use chrono::NaiveDate;

    fn new_entry(date: NaiveDate, mood: Mood, score: f64) -> NewEntry {
        NewEntry {
            date,
            entry_text: format!("{mood} day"),
            mood,
            mood_score: score,
            emoji: Some(mood.emoji().to_string()),
        }
    }

    #[tokio::test]
    async fn test_insert_returns_stored_row() {
        let db = create_test_pool().await;
        let date = NaiveDate::from_ymd_opt(2026, 3, 14).unwrap();

        let stored = insert_entry(&db, &new_entry(date, Mood::Sad, 0.91)).await.unwrap();

        assert!(stored.id > 0);
        assert_eq!(stored.date, date);
        assert_eq!(stored.mood, Mood::Sad);
        assert_eq!(stored.mood_score, 0.91);
        assert_eq!(stored.emoji.as_deref(), Some("😔"));
        assert_eq!(stored.entry_text, "Sad day");
    }

    #[tokio::test]
    async fn test_ids_increase() {
        let db = create_test_pool().await;
        let date = NaiveDate::from_ymd_opt(2026, 3, 14).unwrap();

        let first = insert_entry(&db, &new_entry(date, Mood::Happy, 0.9)).await.unwrap();
        let second = insert_entry(&db, &new_entry(date, Mood::Happy, 0.9)).await.unwrap();
        assert!(second.id > first.id);
    }

    #[tokio::test]
    async fn test_list_orders_by_date_desc_then_id_desc() {
        let db = create_test_pool().await;
        let d1 = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
        let d2 = NaiveDate::from_ymd_opt(2026, 1, 2).unwrap();

        let older = insert_entry(&db, &new_entry(d1, Mood::Sad, 0.9)).await.unwrap();
        let newer_a = insert_entry(&db, &new_entry(d2, Mood::Happy, 0.9)).await.unwrap();
        let newer_b = insert_entry(&db, &new_entry(d2, Mood::Neutral, 0.5)).await.unwrap();

        let ids: Vec<i64> = list_entries(&db).await.unwrap().iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![newer_b.id, newer_a.id, older.id]);
    }

    #[tokio::test]
    async fn test_score_outside_unit_interval_is_rejected() {
        let db = create_test_pool().await;
        let date = NaiveDate::from_ymd_opt(2026, 3, 14).unwrap();
        let result = insert_entry(&db, &new_entry(date, Mood::Happy, 1.5)).await;
        assert!(result.is_err());
    }
}
