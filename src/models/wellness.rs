use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A structured wellness check-in: the numeric metrics plus free-text notes
/// and tags the crisis assessor operates on.
///
/// Metric scales: mood, energy and stress are 1..10; sleep is hours.
/// Callers are responsible for validating the mandatory numeric fields
/// before handing a check-in to the crisis path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WellnessCheckIn {
    pub id: Uuid,
    pub mood: u8,
    pub energy: u8,
    pub stress: u8,
    pub sleep_hours: f64,
    pub notes: Option<String>,
    pub activities: Vec<String>,
    pub emotions: Vec<String>,
    pub recorded_at: NaiveDateTime,
}

impl WellnessCheckIn {
    pub fn new(mood: u8, energy: u8, stress: u8, sleep_hours: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            mood,
            energy,
            stress,
            sleep_hours,
            notes: None,
            activities: Vec::new(),
            emotions: Vec::new(),
            recorded_at: chrono::Local::now().naive_local(),
        }
    }
}
