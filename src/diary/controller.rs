//! The mood-entry flow state machine.
//!
//! Drives a single journal entry from free text to a finalized 1..5 mood,
//! with two off-ramps when automatic classification is not confident
//! enough: an explicit picker and a short guided question set. Every
//! operation takes a snapshot and returns a new one; callers are expected
//! to serialize steps for one in-flight entry (disable buttons while a
//! step runs).

use rand::Rng;
use uuid::Uuid;

use crate::classifier::types::SentimentAnalyzer;
use crate::models::enums::FlowStep;
use crate::models::{DiaryEntry, MoodRecord};

use super::messages::{describe_mood, pick_encouragement};
use super::questions::{average_mood, draw_questions};

/// Record confidence when the user stated the mood directly.
const EXPLICIT_CONFIDENCE: u8 = 100;
/// Record confidence when the mood was averaged from guided answers.
const GUIDED_CONFIDENCE: u8 = 80;

/// Flow service. The classifier is injected so callers can share one
/// instance, swap in an LLM-backed analyzer, or stub it out in tests.
pub struct DiaryFlowController<C: SentimentAnalyzer> {
    classifier: C,
}

impl<C: SentimentAnalyzer> DiaryFlowController<C> {
    pub fn new(classifier: C) -> Self {
        Self { classifier }
    }

    /// A fresh entry, before any text exists.
    pub fn begin(&self) -> DiaryEntry {
        DiaryEntry::new()
    }

    /// Record the mood directly, without any diary flow. The classifier is
    /// never consulted on this path.
    pub fn log_explicit(&self, text: &str, mood: u8) -> DiaryEntry {
        let mut entry = DiaryEntry::new();
        entry.text = text.trim().to_string();
        if !(1..=5).contains(&mood) {
            tracing::warn!(mood, "Rejecting explicit mood outside 1..5");
            return entry;
        }
        entry.has_explicit_mood = true;
        entry.explicit_mood = Some(mood);
        finalize(entry, mood)
    }

    /// Attach the diary text and run classification. A confident verdict
    /// moves the entry straight to the verdict screen; otherwise the
    /// explicit picker is offered first.
    pub fn submit_text(&self, entry: DiaryEntry, text: &str) -> DiaryEntry {
        if entry.current_step() != FlowStep::Diary {
            tracing::warn!("submit_text called outside the diary step; ignoring");
            return entry;
        }
        let trimmed = text.trim();
        if trimmed.is_empty() {
            tracing::warn!("Ignoring empty diary text");
            return entry;
        }

        let mut next = entry;
        next.text = trimmed.to_string();

        let analysis = self.classifier.analyze(&next.text);
        if analysis.can_conclude {
            next.ai_analysis = Some(analysis);
        }
        next
    }

    /// The user picked a mood on the explicit picker.
    pub fn select_mood(&self, entry: DiaryEntry, mood: u8) -> DiaryEntry {
        if entry.current_step() != FlowStep::MoodSelection {
            tracing::warn!("select_mood called outside mood selection; ignoring");
            return entry;
        }
        if !(1..=5).contains(&mood) {
            tracing::warn!(mood, "Rejecting explicit mood outside 1..5");
            return entry;
        }

        let mut next = entry;
        next.has_explicit_mood = true;
        next.explicit_mood = Some(mood);
        finalize(next, mood)
    }

    /// The user skipped the explicit picker; classify and show the verdict
    /// whether or not it is conclusive.
    pub fn skip_mood_selection(&self, entry: DiaryEntry) -> DiaryEntry {
        if entry.current_step() != FlowStep::MoodSelection {
            tracing::warn!("skip_mood_selection called outside mood selection; ignoring");
            return entry;
        }

        let mut next = entry;
        next.ai_analysis = Some(self.classifier.analyze(&next.text));
        next
    }

    /// The user accepted the classifier's verdict.
    pub fn accept_analysis(&self, entry: DiaryEntry) -> DiaryEntry {
        if entry.current_step() != FlowStep::AiAnalysis {
            tracing::warn!("accept_analysis called outside the verdict step; ignoring");
            return entry;
        }

        let suggested = entry
            .ai_analysis
            .as_ref()
            .and_then(|a| a.suggested_mood);
        match suggested {
            Some(mood) => finalize(entry, mood),
            None => {
                tracing::warn!("Verdict has no mood to accept; ignoring");
                entry
            }
        }
    }

    /// The user rejected the verdict: draw the guided questions and return
    /// an encouragement message to surface. The message has no state
    /// impact.
    pub fn reject_analysis(
        &self,
        entry: DiaryEntry,
        rng: &mut impl Rng,
    ) -> (DiaryEntry, Option<&'static str>) {
        if entry.current_step() != FlowStep::AiAnalysis {
            tracing::warn!("reject_analysis called outside the verdict step; ignoring");
            return (entry, None);
        }

        let mut next = entry;
        next.fallback_questions = Some(draw_questions(rng));
        next.current_question_index = Some(0);
        (next, Some(pick_encouragement(rng)))
    }

    /// Record one answer to the active guided question. After the last
    /// answer the numeric responses are averaged into the final mood; if
    /// none parsed, the entry stays incomplete and the caller may
    /// re-prompt or discard.
    pub fn answer_question(&self, entry: DiaryEntry, answer: &str) -> DiaryEntry {
        if entry.current_step() != FlowStep::FallbackQuestions {
            tracing::warn!("answer_question called with no active question set; ignoring");
            return entry;
        }

        let mut next = entry;
        next.user_responses.push(answer.to_string());

        let total = next
            .fallback_questions
            .as_ref()
            .map(|q| q.len())
            .unwrap_or(0);
        let answered = next.current_question_index.unwrap_or(0) + 1;
        next.current_question_index = Some(answered);

        if answered >= total {
            match average_mood(&next.user_responses) {
                Some(mood) => return finalize(next, mood),
                None => {
                    tracing::warn!("No numeric answers to average; entry stays incomplete");
                }
            }
        }
        next
    }

    /// Build the record handed to the persistence collaborator. `None`
    /// until the entry is complete; afterwards the caller starts a fresh
    /// entry with [`begin`](Self::begin).
    pub fn finish(&self, entry: &DiaryEntry) -> Option<MoodRecord> {
        if !entry.is_complete {
            tracing::warn!("finish called on an incomplete entry");
            return None;
        }
        let mood = entry.final_mood?;

        let fallback_used = entry.fallback_questions.is_some();
        let ai_used = !entry.has_explicit_mood && !fallback_used && entry.ai_analysis.is_some();

        let (emotion, sentiment, confidence) = match (&entry.ai_analysis, ai_used) {
            (Some(analysis), true) => (
                analysis.emotion.clone(),
                analysis.sentiment.clone(),
                analysis.confidence,
            ),
            _ => {
                let (emotion, sentiment) = describe_mood(mood);
                let confidence = if entry.has_explicit_mood {
                    EXPLICIT_CONFIDENCE
                } else {
                    GUIDED_CONFIDENCE
                };
                (emotion.to_string(), sentiment, confidence)
            }
        };

        tracing::info!(
            mood,
            explicit = entry.has_explicit_mood,
            ai = ai_used,
            guided = fallback_used,
            "Mood entry finalized"
        );

        Some(MoodRecord {
            id: Uuid::new_v4(),
            mood,
            description: entry.text.clone(),
            activities: Vec::new(),
            energy: None,
            stress: None,
            sleep_hours: None,
            emotion,
            sentiment,
            confidence,
            has_explicit_mood: entry.has_explicit_mood,
            ai_analysis_used: ai_used,
            fallback_questions_used: fallback_used,
            created_at: entry.created_at,
            completed_at: chrono::Local::now().naive_local(),
        })
    }
}

/// Set the final mood exactly once and mark the entry complete.
fn finalize(mut entry: DiaryEntry, mood: u8) -> DiaryEntry {
    if entry.final_mood.is_some() {
        tracing::warn!("Entry already finalized; keeping the existing mood");
        return entry;
    }
    entry.final_mood = Some(mood);
    entry.is_complete = true;
    entry
}

/// Whether the entry may be discarded (after user confirmation) without
/// losing meaningful progress: text exists but no mood was picked, the
/// classifier could not conclude, and no guided answer has been recorded.
pub fn should_discard_entry(entry: &DiaryEntry) -> bool {
    !entry.is_complete
        && !entry.text.is_empty()
        && !entry.has_explicit_mood
        && entry
            .ai_analysis
            .as_ref()
            .map_or(true, |a| !a.can_conclude)
        && entry.user_responses.is_empty()
}
