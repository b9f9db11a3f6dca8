use serde_json::json;
use uuid::Uuid;

use crate::models::enums::SignalType;
use crate::models::WellnessCheckIn;

use super::escalation::SupportProtocol;
use super::lexicon::{CRISIS_PATTERNS, ISOLATION_MARKERS};
use super::types::{CrisisAssessment, CrisisSignal, RiskLevel, SignalSeverity};

/// History points needed before the behavioral trend check runs.
const TREND_MIN_HISTORY: usize = 3;
/// History points that raise assessment confidence.
const CONFIDENT_HISTORY: usize = 5;

/// Mood (1..10) at or below this is extreme.
const MOOD_EXTREME_HIGH: u8 = 2;
const MOOD_EXTREME_MEDIUM: u8 = 3;
/// Drop vs. the recent-baseline mean that counts as deterioration.
const TREND_DROP_MEDIUM: f64 = 3.0;
const TREND_DROP_HIGH: f64 = 5.0;
/// Sleep/energy floor values.
const SLEEP_SHORT_HOURS: f64 = 5.0;
const SLEEP_SEVERE_HOURS: f64 = 4.0;
const ENERGY_LOW: u8 = 3;
const ENERGY_DEPLETED: u8 = 2;

fn signal(
    signal_type: SignalType,
    severity: SignalSeverity,
    description: &str,
    metadata: serde_json::Value,
) -> CrisisSignal {
    let intervention_required = severity >= SignalSeverity::High;
    CrisisSignal {
        id: Uuid::new_v4(),
        signal_type,
        severity,
        description: description.to_string(),
        detected_at: chrono::Local::now().naive_local(),
        intervention_required,
        metadata,
    }
}

// ---------------------------------------------------------------------------
// [1] Mood extremity
// ---------------------------------------------------------------------------

/// Flag extremely low mood scores.
pub fn check_mood_extremity(checkin: &WellnessCheckIn) -> Vec<CrisisSignal> {
    let mut signals = Vec::new();

    if checkin.mood <= MOOD_EXTREME_HIGH {
        signals.push(signal(
            SignalType::Mood,
            SignalSeverity::High,
            "Estado de ánimo extremadamente bajo",
            json!({ "mood": checkin.mood, "stress": checkin.stress }),
        ));
    } else if checkin.mood <= MOOD_EXTREME_MEDIUM {
        signals.push(signal(
            SignalType::Mood,
            SignalSeverity::Medium,
            "Estado de ánimo muy bajo",
            json!({ "mood": checkin.mood, "stress": checkin.stress }),
        ));
    }

    signals
}

// ---------------------------------------------------------------------------
// [2] Behavioral trend
// ---------------------------------------------------------------------------

/// Flag a marked mood drop against the recent baseline.
/// Disabled when fewer than 3 history points exist.
pub fn check_behavioral_trend(
    checkin: &WellnessCheckIn,
    history: &[WellnessCheckIn],
) -> Vec<CrisisSignal> {
    let mut signals = Vec::new();

    if history.len() < TREND_MIN_HISTORY {
        tracing::debug!(
            points = history.len(),
            "Skipping behavioral trend check: not enough history"
        );
        return signals;
    }

    // History arrives most recent first; the baseline is the mean mood of
    // the three newest points.
    let baseline: f64 = history
        .iter()
        .take(TREND_MIN_HISTORY)
        .map(|c| c.mood as f64)
        .sum::<f64>()
        / TREND_MIN_HISTORY as f64;
    let drop = baseline - checkin.mood as f64;

    if drop >= TREND_DROP_HIGH {
        signals.push(signal(
            SignalType::Behavioral,
            SignalSeverity::High,
            "Caída brusca del estado de ánimo frente a los últimos registros",
            json!({ "mood": checkin.mood, "baseline": baseline }),
        ));
    } else if drop >= TREND_DROP_MEDIUM {
        signals.push(signal(
            SignalType::Behavioral,
            SignalSeverity::Medium,
            "Descenso sostenido del estado de ánimo",
            json!({ "mood": checkin.mood, "baseline": baseline }),
        ));
    }

    signals
}

// ---------------------------------------------------------------------------
// [3] Free-text crisis patterns
// ---------------------------------------------------------------------------

/// Match the check-in notes against the five named crisis patterns.
/// Each matched pattern emits one signal with its fixed severity.
pub fn check_text_patterns(checkin: &WellnessCheckIn) -> Vec<CrisisSignal> {
    let mut signals = Vec::new();

    let notes = match &checkin.notes {
        Some(n) if !n.trim().is_empty() => n.to_lowercase(),
        _ => return signals,
    };

    for pattern in CRISIS_PATTERNS {
        if let Some(keyword) = pattern.keywords.iter().find(|k| notes.contains(**k)) {
            signals.push(signal(
                SignalType::Verbal,
                pattern.severity.clone(),
                "Expresión preocupante en las notas del registro",
                json!({ "pattern": pattern.name, "keyword": keyword }),
            ));
        }
    }

    signals
}

// ---------------------------------------------------------------------------
// [4] Social isolation
// ---------------------------------------------------------------------------

/// Flag isolation markers in the emotion tags or notes.
pub fn check_social_isolation(checkin: &WellnessCheckIn) -> Vec<CrisisSignal> {
    let mut signals = Vec::new();

    let notes = checkin
        .notes
        .as_deref()
        .unwrap_or_default()
        .to_lowercase();
    let emotions_lower: Vec<String> =
        checkin.emotions.iter().map(|e| e.to_lowercase()).collect();

    let matched: Vec<&str> = ISOLATION_MARKERS
        .iter()
        .filter(|m| notes.contains(**m) || emotions_lower.iter().any(|e| e.contains(**m)))
        .copied()
        .collect();

    if !matched.is_empty() {
        let severity = if checkin.mood <= MOOD_EXTREME_MEDIUM {
            SignalSeverity::Medium
        } else {
            SignalSeverity::Low
        };
        signals.push(signal(
            SignalType::Social,
            severity,
            "Señales de aislamiento social",
            json!({ "markers": matched, "mood": checkin.mood }),
        ));
    }

    signals
}

// ---------------------------------------------------------------------------
// [5] Sleep / energy deterioration
// ---------------------------------------------------------------------------

/// Flag the combination of short sleep and depleted energy.
pub fn check_sleep_energy(checkin: &WellnessCheckIn) -> Vec<CrisisSignal> {
    let mut signals = Vec::new();

    if checkin.sleep_hours < SLEEP_SEVERE_HOURS && checkin.energy <= ENERGY_DEPLETED {
        signals.push(signal(
            SignalType::Physical,
            SignalSeverity::High,
            "Sueño muy insuficiente con energía agotada",
            json!({ "sleep_hours": checkin.sleep_hours, "energy": checkin.energy }),
        ));
    } else if checkin.sleep_hours < SLEEP_SHORT_HOURS && checkin.energy <= ENERGY_LOW {
        signals.push(signal(
            SignalType::Physical,
            SignalSeverity::Medium,
            "Deterioro del sueño y la energía",
            json!({ "sleep_hours": checkin.sleep_hours, "energy": checkin.energy }),
        ));
    }

    signals
}

// ---------------------------------------------------------------------------
// CrisisAssessor
// ---------------------------------------------------------------------------

/// Runs the five sub-analyses and combines their signals into one
/// assessment. Stateless; construct and share freely.
#[derive(Debug, Default)]
pub struct CrisisAssessor;

impl CrisisAssessor {
    pub fn new() -> Self {
        Self
    }

    /// Assess one check-in against optional recent history
    /// (most recent first). Never fails: absent fields contribute no signal.
    pub fn assess(
        &self,
        checkin: &WellnessCheckIn,
        history: &[WellnessCheckIn],
    ) -> CrisisAssessment {
        let mut signals = check_mood_extremity(checkin);
        signals.extend(check_behavioral_trend(checkin, history));
        signals.extend(check_text_patterns(checkin));
        signals.extend(check_social_isolation(checkin));
        signals.extend(check_sleep_energy(checkin));

        let assessment_score: u32 = signals.iter().map(|s| s.severity.weight()).sum();

        let has_critical = signals
            .iter()
            .any(|s| s.severity == SignalSeverity::Critical);
        let has_high = signals.iter().any(|s| s.severity == SignalSeverity::High);

        // First matching branch wins.
        let overall_risk = if has_critical || assessment_score >= 20 {
            RiskLevel::Critical
        } else if has_high || assessment_score >= 15 {
            RiskLevel::High
        } else if assessment_score >= 8 {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        };

        let critical_count = signals
            .iter()
            .filter(|s| s.severity == SignalSeverity::Critical)
            .count() as u32;
        let confidence = ((10 * signals.len() as u32).min(40)
            + if history.len() >= CONFIDENT_HISTORY { 20 } else { 0 }
            + 15 * critical_count)
            .min(100) as u8;

        let recommendations = SupportProtocol::recommendations_for(&overall_risk);
        let immediate_actions = SupportProtocol::immediate_actions_for(&overall_risk);

        tracing::info!(
            signals = signals.len(),
            score = assessment_score,
            risk = overall_risk.as_str(),
            confidence,
            "Crisis assessment complete"
        );

        CrisisAssessment {
            signals,
            overall_risk,
            assessment_score,
            confidence,
            recommendations,
            immediate_actions,
            assessed_at: chrono::Local::now().naive_local(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn calm_checkin() -> WellnessCheckIn {
        WellnessCheckIn::new(7, 6, 3, 8.0)
    }

    fn history_of(moods: &[u8]) -> Vec<WellnessCheckIn> {
        moods
            .iter()
            .map(|&m| WellnessCheckIn::new(m, 5, 5, 7.0))
            .collect()
    }

    // ── Individual checks ─────────────────────────────────

    #[test]
    fn mood_extremity_high_at_two() {
        let checkin = WellnessCheckIn::new(2, 5, 5, 7.0);
        let signals = check_mood_extremity(&checkin);
        assert_eq!(signals.len(), 1);
        assert_eq!(signals[0].severity, SignalSeverity::High);
        assert_eq!(signals[0].signal_type, SignalType::Mood);
        assert!(signals[0].intervention_required);
    }

    #[test]
    fn mood_extremity_medium_at_three() {
        let checkin = WellnessCheckIn::new(3, 5, 5, 7.0);
        let signals = check_mood_extremity(&checkin);
        assert_eq!(signals.len(), 1);
        assert_eq!(signals[0].severity, SignalSeverity::Medium);
        assert!(!signals[0].intervention_required);
    }

    #[test]
    fn mood_extremity_quiet_at_four() {
        let checkin = WellnessCheckIn::new(4, 5, 5, 7.0);
        assert!(check_mood_extremity(&checkin).is_empty());
    }

    #[test]
    fn trend_requires_three_history_points() {
        let checkin = WellnessCheckIn::new(2, 5, 5, 7.0);
        let signals = check_behavioral_trend(&checkin, &history_of(&[8, 8]));
        assert!(signals.is_empty(), "Two points must not trigger the check");
    }

    #[test]
    fn trend_flags_sharp_drop() {
        let checkin = WellnessCheckIn::new(3, 5, 5, 7.0);
        let signals = check_behavioral_trend(&checkin, &history_of(&[8, 8, 8]));
        assert_eq!(signals.len(), 1);
        assert_eq!(signals[0].severity, SignalSeverity::High);
        assert_eq!(signals[0].signal_type, SignalType::Behavioral);
    }

    #[test]
    fn trend_flags_moderate_drop() {
        let checkin = WellnessCheckIn::new(5, 5, 5, 7.0);
        let signals = check_behavioral_trend(&checkin, &history_of(&[8, 8, 8]));
        assert_eq!(signals.len(), 1);
        assert_eq!(signals[0].severity, SignalSeverity::Medium);
    }

    #[test]
    fn trend_quiet_on_stable_mood() {
        let checkin = WellnessCheckIn::new(7, 5, 5, 7.0);
        let signals = check_behavioral_trend(&checkin, &history_of(&[8, 7, 8]));
        assert!(signals.is_empty());
    }

    #[test]
    fn text_pattern_suicidal_is_critical() {
        let mut checkin = calm_checkin();
        checkin.notes = Some("a veces siento que no quiero vivir".into());
        let signals = check_text_patterns(&checkin);
        assert_eq!(signals.len(), 1);
        assert_eq!(signals[0].severity, SignalSeverity::Critical);
        assert_eq!(signals[0].signal_type, SignalType::Verbal);
        assert_eq!(signals[0].metadata["pattern"], "suicidal_ideation");
    }

    #[test]
    fn text_patterns_emit_one_signal_per_pattern() {
        let mut checkin = calm_checkin();
        checkin.notes =
            Some("tuve un ataque de pánico y siento que no puedo más".into());
        let signals = check_text_patterns(&checkin);
        assert_eq!(signals.len(), 2, "panic_attack and depression_spiral");
    }

    #[test]
    fn text_patterns_quiet_without_notes() {
        let checkin = calm_checkin();
        assert!(check_text_patterns(&checkin).is_empty());
    }

    #[test]
    fn isolation_marker_in_emotions() {
        let mut checkin = calm_checkin();
        checkin.emotions = vec!["Aislado".into()];
        let signals = check_social_isolation(&checkin);
        assert_eq!(signals.len(), 1);
        assert_eq!(signals[0].severity, SignalSeverity::Low);
        assert_eq!(signals[0].signal_type, SignalType::Social);
    }

    #[test]
    fn isolation_with_low_mood_is_medium() {
        let mut checkin = WellnessCheckIn::new(3, 5, 5, 7.0);
        checkin.notes = Some("me siento sola y encerrada".into());
        let signals = check_social_isolation(&checkin);
        assert_eq!(signals.len(), 1);
        assert_eq!(signals[0].severity, SignalSeverity::Medium);
    }

    #[test]
    fn sleep_energy_severe_combination() {
        let checkin = WellnessCheckIn::new(6, 2, 5, 3.0);
        let signals = check_sleep_energy(&checkin);
        assert_eq!(signals.len(), 1);
        assert_eq!(signals[0].severity, SignalSeverity::High);
        assert_eq!(signals[0].signal_type, SignalType::Physical);
    }

    #[test]
    fn sleep_energy_moderate_combination() {
        let checkin = WellnessCheckIn::new(6, 3, 5, 4.5);
        let signals = check_sleep_energy(&checkin);
        assert_eq!(signals.len(), 1);
        assert_eq!(signals[0].severity, SignalSeverity::Medium);
    }

    #[test]
    fn sleep_energy_quiet_on_rest() {
        let checkin = WellnessCheckIn::new(6, 6, 5, 8.0);
        assert!(check_sleep_energy(&checkin).is_empty());
    }

    // ── Combined assessment ───────────────────────────────

    #[test]
    fn calm_checkin_is_low_risk() {
        let assessment = CrisisAssessor::new().assess(&calm_checkin(), &[]);
        assert!(assessment.signals.is_empty());
        assert_eq!(assessment.overall_risk, RiskLevel::Low);
        assert_eq!(assessment.assessment_score, 0);
        assert_eq!(assessment.confidence, 0);
        assert!(!assessment.recommendations.is_empty());
    }

    #[test]
    fn single_critical_signal_forces_critical_risk() {
        let mut checkin = calm_checkin();
        checkin.notes = Some("pienso en quitarme la vida".into());
        let assessment = CrisisAssessor::new().assess(&checkin, &[]);
        // Score is only 10, well under the 20 threshold — the critical
        // signal alone must force the overall level.
        assert_eq!(assessment.assessment_score, 10);
        assert_eq!(assessment.overall_risk, RiskLevel::Critical);
        assert_eq!(assessment.critical_signal_count(), 1);
        assert!(!assessment.immediate_actions.is_empty());
    }

    #[test]
    fn high_signal_without_critical_is_high_risk() {
        let checkin = WellnessCheckIn::new(2, 5, 5, 7.0);
        let assessment = CrisisAssessor::new().assess(&checkin, &[]);
        assert_eq!(assessment.overall_risk, RiskLevel::High);
    }

    #[test]
    fn medium_signals_accumulate_to_medium_risk() {
        // mood 3 (medium, 4) + isolation at low mood (medium, 4) = 8.
        let mut checkin = WellnessCheckIn::new(3, 6, 5, 8.0);
        checkin.emotions = vec!["abandonada".into()];
        let assessment = CrisisAssessor::new().assess(&checkin, &[]);
        assert_eq!(assessment.assessment_score, 8);
        assert_eq!(assessment.overall_risk, RiskLevel::Medium);
    }

    #[test]
    fn confidence_gains_history_bonus() {
        let checkin = WellnessCheckIn::new(3, 5, 5, 7.0);
        let sparse = CrisisAssessor::new().assess(&checkin, &history_of(&[4, 4]));
        let rich = CrisisAssessor::new()
            .assess(&checkin, &history_of(&[4, 4, 4, 4, 4]));
        assert_eq!(rich.confidence, sparse.confidence + 20);
    }

    #[test]
    fn confidence_counts_critical_signals() {
        let mut checkin = calm_checkin();
        checkin.notes = Some("quiero cortarme y acabar con todo".into());
        let assessment = CrisisAssessor::new().assess(&checkin, &[]);
        // Two critical signals: 10*2 + 15*2 = 50.
        assert_eq!(assessment.critical_signal_count(), 2);
        assert_eq!(assessment.confidence, 50);
    }

    #[test]
    fn empty_history_disables_trend_only() {
        let checkin = WellnessCheckIn::new(2, 5, 5, 7.0);
        let assessment = CrisisAssessor::new().assess(&checkin, &[]);
        assert!(assessment
            .signals
            .iter()
            .all(|s| s.signal_type != SignalType::Behavioral));
    }
}
