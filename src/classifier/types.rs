use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::enums::SignalType;
use crate::models::AiAnalysis;

// ---------------------------------------------------------------------------
// SignalSeverity
// ---------------------------------------------------------------------------

/// Severity of a single detected risk indicator.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
pub enum SignalSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl SignalSeverity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Critical => "critical",
        }
    }

    /// Contribution of a signal of this severity to the assessment score.
    pub fn weight(&self) -> u32 {
        match self {
            Self::Critical => 10,
            Self::High => 7,
            Self::Medium => 4,
            Self::Low => 1,
        }
    }
}

// ---------------------------------------------------------------------------
// RiskLevel
// ---------------------------------------------------------------------------

/// Overall risk derived from the full signal set.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Critical => "critical",
        }
    }
}

// ---------------------------------------------------------------------------
// CrisisSignal & CrisisAssessment
// ---------------------------------------------------------------------------

/// A single detected risk indicator. Immutable once created.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrisisSignal {
    pub id: Uuid,
    pub signal_type: SignalType,
    pub severity: SignalSeverity,
    /// Patient-facing description (Spanish).
    pub description: String,
    pub detected_at: NaiveDateTime,
    pub intervention_required: bool,
    /// The specific values that triggered the signal.
    pub metadata: serde_json::Value,
}

/// Aggregate of all signals emitted for one check-in, with the derived
/// risk, score, confidence and action lists.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrisisAssessment {
    pub signals: Vec<CrisisSignal>,
    pub overall_risk: RiskLevel,
    /// Sum of per-signal severity weights.
    pub assessment_score: u32,
    /// 0..100.
    pub confidence: u8,
    pub recommendations: Vec<String>,
    pub immediate_actions: Vec<String>,
    pub assessed_at: NaiveDateTime,
}

impl CrisisAssessment {
    pub fn critical_signal_count(&self) -> usize {
        self.signals
            .iter()
            .filter(|s| s.severity == SignalSeverity::Critical)
            .count()
    }
}

// ---------------------------------------------------------------------------
// SentimentAnalyzer trait
// ---------------------------------------------------------------------------

/// The seam between the diary flow and whatever produces mood verdicts —
/// the keyword heuristic, an LLM-backed analyzer, or a test stub.
pub trait SentimentAnalyzer {
    fn analyze(&self, text: &str) -> AiAnalysis;
}

impl<T: SentimentAnalyzer + ?Sized> SentimentAnalyzer for &T {
    fn analyze(&self, text: &str) -> AiAnalysis {
        (**self).analyze(text)
    }
}
