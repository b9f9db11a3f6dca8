//! Repository functions for finalized mood records and wellness check-ins.
//!
//! The diary flow hands a finished `MoodRecord` here; the crisis assessor
//! reads its behavioral history from `fetch_recent_checkins`.

use std::str::FromStr;

use rusqlite::{params, Connection};
use uuid::Uuid;

use crate::models::enums::Sentiment;
use crate::models::{MoodRecord, WellnessCheckIn};

use super::DatabaseError;

fn join_tags(tags: &[String]) -> Option<String> {
    if tags.is_empty() {
        None
    } else {
        Some(tags.join(", "))
    }
}

fn split_tags(joined: Option<String>) -> Vec<String> {
    joined
        .map(|s| s.split(", ").map(|t| t.to_string()).collect())
        .unwrap_or_default()
}

fn column_error(
    idx: usize,
    e: impl std::error::Error + Send + Sync + 'static,
) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(idx, rusqlite::types::Type::Text, Box::new(e))
}

// ═══════════════════════════════════════════
// Mood records
// ═══════════════════════════════════════════

/// Persist a finalized mood record. Returns its id.
pub fn insert_mood_record(conn: &Connection, record: &MoodRecord) -> Result<Uuid, DatabaseError> {
    if !(1..=5).contains(&record.mood) {
        return Err(DatabaseError::ConstraintViolation(format!(
            "mood {} outside 1..5",
            record.mood
        )));
    }

    conn.execute(
        "INSERT INTO mood_logs (id, mood, description, activities, energy, stress,
         sleep_hours, emotion, sentiment, confidence, has_explicit_mood,
         ai_analysis_used, fallback_questions_used, created_at, completed_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15)",
        params![
            record.id.to_string(),
            record.mood,
            record.description,
            join_tags(&record.activities),
            record.energy,
            record.stress,
            record.sleep_hours,
            record.emotion,
            record.sentiment.as_str(),
            record.confidence,
            record.has_explicit_mood,
            record.ai_analysis_used,
            record.fallback_questions_used,
            record.created_at,
            record.completed_at,
        ],
    )?;

    Ok(record.id)
}

/// Fetch finalized mood records, most recently completed first.
pub fn fetch_mood_records(
    conn: &Connection,
    limit: usize,
) -> Result<Vec<MoodRecord>, DatabaseError> {
    let mut stmt = conn.prepare(
        "SELECT id, mood, description, activities, energy, stress, sleep_hours,
                emotion, sentiment, confidence, has_explicit_mood,
                ai_analysis_used, fallback_questions_used, created_at, completed_at
         FROM mood_logs
         ORDER BY completed_at DESC
         LIMIT ?1",
    )?;

    let rows = stmt.query_map(params![limit as i64], |row| {
        let id_str: String = row.get(0)?;
        let id = Uuid::parse_str(&id_str).map_err(|e| column_error(0, e))?;
        let sentiment_str: String = row.get(8)?;
        let sentiment =
            Sentiment::from_str(&sentiment_str).map_err(|e| column_error(8, e))?;

        Ok(MoodRecord {
            id,
            mood: row.get(1)?,
            description: row.get(2)?,
            activities: split_tags(row.get(3)?),
            energy: row.get(4)?,
            stress: row.get(5)?,
            sleep_hours: row.get(6)?,
            emotion: row.get(7)?,
            sentiment,
            confidence: row.get(9)?,
            has_explicit_mood: row.get(10)?,
            ai_analysis_used: row.get(11)?,
            fallback_questions_used: row.get(12)?,
            created_at: row.get(13)?,
            completed_at: row.get(14)?,
        })
    })?;

    let mut records = Vec::new();
    for row in rows {
        records.push(row?);
    }
    Ok(records)
}

/// Hard-delete a mood record.
pub fn delete_mood_record(conn: &Connection, id: &Uuid) -> Result<(), DatabaseError> {
    let deleted = conn.execute(
        "DELETE FROM mood_logs WHERE id = ?1",
        params![id.to_string()],
    )?;
    if deleted == 0 {
        return Err(DatabaseError::NotFound {
            entity_type: "MoodRecord".into(),
            id: id.to_string(),
        });
    }
    Ok(())
}

// ═══════════════════════════════════════════
// Wellness check-ins
// ═══════════════════════════════════════════

/// Persist a structured wellness check-in. Returns its id.
pub fn insert_checkin(conn: &Connection, checkin: &WellnessCheckIn) -> Result<Uuid, DatabaseError> {
    for (field, value) in [
        ("mood", checkin.mood),
        ("energy", checkin.energy),
        ("stress", checkin.stress),
    ] {
        if !(1..=10).contains(&value) {
            return Err(DatabaseError::ConstraintViolation(format!(
                "{field} {value} outside 1..10"
            )));
        }
    }

    conn.execute(
        "INSERT INTO wellness_checkins (id, mood, energy, stress, sleep_hours,
         notes, activities, emotions, recorded_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
        params![
            checkin.id.to_string(),
            checkin.mood,
            checkin.energy,
            checkin.stress,
            checkin.sleep_hours,
            checkin.notes,
            join_tags(&checkin.activities),
            join_tags(&checkin.emotions),
            checkin.recorded_at,
        ],
    )?;

    Ok(checkin.id)
}

/// Fetch the most recent check-ins, newest first. Feeds the crisis
/// assessor's behavioral and social checks.
pub fn fetch_recent_checkins(
    conn: &Connection,
    limit: usize,
) -> Result<Vec<WellnessCheckIn>, DatabaseError> {
    let mut stmt = conn.prepare(
        "SELECT id, mood, energy, stress, sleep_hours, notes, activities,
                emotions, recorded_at
         FROM wellness_checkins
         ORDER BY recorded_at DESC
         LIMIT ?1",
    )?;

    let rows = stmt.query_map(params![limit as i64], |row| {
        let id_str: String = row.get(0)?;
        let id = Uuid::parse_str(&id_str).map_err(|e| column_error(0, e))?;

        Ok(WellnessCheckIn {
            id,
            mood: row.get(1)?,
            energy: row.get(2)?,
            stress: row.get(3)?,
            sleep_hours: row.get(4)?,
            notes: row.get(5)?,
            activities: split_tags(row.get(6)?),
            emotions: split_tags(row.get(7)?),
            recorded_at: row.get(8)?,
        })
    })?;

    let mut checkins = Vec::new();
    for row in rows {
        checkins.push(row?);
    }
    Ok(checkins)
}
