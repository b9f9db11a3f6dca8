use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::enums::{FlowStep, Sentiment};

/// Classifier verdict attached to an in-flight diary entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AiAnalysis {
    /// Patient-facing emotion label (Spanish).
    pub emotion: String,
    /// 0..100.
    pub confidence: u8,
    pub sentiment: Sentiment,
    /// Whether the verdict is strong enough to finalize a mood from.
    pub can_conclude: bool,
    /// 1..5 mood the verdict supports. `Some` exactly when `can_conclude`.
    pub suggested_mood: Option<u8>,
}

/// An in-flight journal entry moving through the mood flow.
///
/// Each flow step produces a new snapshot; nothing mutates a snapshot the
/// caller already holds. `final_mood` is write-once: once set it is never
/// changed by any flow operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiaryEntry {
    pub text: String,
    pub created_at: NaiveDateTime,
    pub has_explicit_mood: bool,
    pub explicit_mood: Option<u8>,
    pub ai_analysis: Option<AiAnalysis>,
    pub fallback_questions: Option<Vec<String>>,
    pub current_question_index: Option<usize>,
    pub user_responses: Vec<String>,
    pub final_mood: Option<u8>,
    pub is_complete: bool,
}

impl DiaryEntry {
    /// Fresh entry with no text yet.
    pub fn new() -> Self {
        Self {
            text: String::new(),
            created_at: chrono::Local::now().naive_local(),
            has_explicit_mood: false,
            explicit_mood: None,
            ai_analysis: None,
            fallback_questions: None,
            current_question_index: None,
            user_responses: Vec::new(),
            final_mood: None,
            is_complete: false,
        }
    }

    /// Derive the current flow step from this snapshot.
    ///
    /// Precedence is top-to-bottom and pure: completion first, then an
    /// explicit pick, then an active question set, then a stored verdict,
    /// then submitted text.
    pub fn current_step(&self) -> FlowStep {
        if self.is_complete {
            return FlowStep::Complete;
        }
        if self.has_explicit_mood {
            return FlowStep::Complete;
        }
        if self.fallback_questions.is_some() && self.current_question_index.is_some() {
            return FlowStep::FallbackQuestions;
        }
        if self.ai_analysis.is_some() {
            return FlowStep::AiAnalysis;
        }
        if !self.text.is_empty() {
            return FlowStep::MoodSelection;
        }
        FlowStep::Diary
    }
}

impl Default for DiaryEntry {
    fn default() -> Self {
        Self::new()
    }
}

/// A finalized mood record, the shape handed to the persistence collaborator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoodRecord {
    pub id: Uuid,
    /// 1..5, the authoritative result of the flow.
    pub mood: u8,
    /// The diary text the entry was created from.
    pub description: String,
    pub activities: Vec<String>,
    pub energy: Option<u8>,
    pub stress: Option<u8>,
    pub sleep_hours: Option<f64>,
    pub emotion: String,
    pub sentiment: Sentiment,
    pub confidence: u8,
    pub has_explicit_mood: bool,
    pub ai_analysis_used: bool,
    pub fallback_questions_used: bool,
    pub created_at: NaiveDateTime,
    pub completed_at: NaiveDateTime,
}
