use crate::models::enums::Sentiment;
use crate::models::AiAnalysis;

use super::lexicon::{NEGATIVE_WORDS, NEUTRAL_WORDS, POSITIVE_WORDS};
use super::types::SentimentAnalyzer;

/// Confidence floor when no keyword matches at all.
const CONFIDENCE_FLOOR: u8 = 40;
/// Confidence gained per keyword hit.
const CONFIDENCE_PER_HIT: u32 = 8;
/// Confidence is never reported above this.
const CONFIDENCE_CAP: u8 = 95;
/// Minimum confidence to conclude a mood without asking the user.
const CONCLUDE_CONFIDENCE: u8 = 70;
/// A single strong keyword is never sufficient to conclude.
const CONCLUDE_MIN_HITS: u32 = 2;

/// Transparent keyword/threshold sentiment scorer.
///
/// Holds no state beyond the static lexicons; construct one wherever a
/// `SentimentAnalyzer` is needed and share it freely.
#[derive(Debug, Default)]
pub struct KeywordClassifier;

impl KeywordClassifier {
    pub fn new() -> Self {
        Self
    }

    /// Number of lexicon words appearing in the lowercased text.
    /// Substring matching, one hit per matched word.
    fn count_hits(text_lower: &str, words: &[&str]) -> u32 {
        words.iter().filter(|w| text_lower.contains(**w)).count() as u32
    }
}

impl SentimentAnalyzer for KeywordClassifier {
    fn analyze(&self, text: &str) -> AiAnalysis {
        let lower = text.to_lowercase();

        let positive = Self::count_hits(&lower, POSITIVE_WORDS);
        let negative = Self::count_hits(&lower, NEGATIVE_WORDS);
        let neutral = Self::count_hits(&lower, NEUTRAL_WORDS);
        let total = positive + negative + neutral;

        let sentiment = if positive > negative && positive > neutral {
            Sentiment::Positive
        } else if negative > positive && negative > neutral {
            Sentiment::Negative
        } else {
            Sentiment::Neutral
        };

        let confidence = (CONFIDENCE_FLOOR as u32 + CONFIDENCE_PER_HIT * total)
            .min(CONFIDENCE_CAP as u32) as u8;
        let can_conclude = confidence >= CONCLUDE_CONFIDENCE && total >= CONCLUDE_MIN_HITS;

        let emotion = emotion_label(&sentiment, total);
        let suggested_mood = if can_conclude {
            Some(derived_mood(&sentiment, total))
        } else {
            None
        };

        tracing::debug!(
            positive,
            negative,
            neutral,
            confidence,
            can_conclude,
            sentiment = sentiment.as_str(),
            "Keyword sentiment verdict"
        );

        AiAnalysis {
            emotion,
            confidence,
            sentiment,
            can_conclude,
            suggested_mood,
        }
    }
}

/// Patient-facing emotion label (Spanish) for a verdict.
fn emotion_label(sentiment: &Sentiment, hits: u32) -> String {
    let label = match sentiment {
        Sentiment::Positive => {
            if hits >= 3 {
                "Felicidad"
            } else {
                "Tranquilidad"
            }
        }
        Sentiment::Negative => {
            if hits >= 3 {
                "Tristeza"
            } else {
                "Ansiedad"
            }
        }
        Sentiment::Neutral => "Calma",
    };
    label.to_string()
}

/// 1..5 mood a concluded verdict supports.
fn derived_mood(sentiment: &Sentiment, hits: u32) -> u8 {
    match sentiment {
        Sentiment::Positive => {
            if hits >= 3 {
                5
            } else {
                4
            }
        }
        Sentiment::Negative => {
            if hits >= 3 {
                1
            } else {
                2
            }
        }
        Sentiment::Neutral => 3,
    }
}
