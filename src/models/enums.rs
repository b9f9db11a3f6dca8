use crate::db::DatabaseError;
use serde::{Deserialize, Serialize};

/// Macro to generate enum with as_str + std::str::FromStr pattern
macro_rules! str_enum {
    ($name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = DatabaseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err(DatabaseError::InvalidEnum {
                        field: stringify!($name).into(),
                        value: s.into(),
                    }),
                }
            }
        }
    };
}

str_enum!(Sentiment {
    Positive => "positive",
    Negative => "negative",
    Neutral => "neutral",
});

str_enum!(FlowStep {
    Diary => "diary",
    MoodSelection => "mood_selection",
    AiAnalysis => "ai_analysis",
    FallbackQuestions => "fallback_questions",
    Complete => "complete",
});

str_enum!(SignalType {
    Mood => "mood",
    Behavioral => "behavioral",
    Social => "social",
    Physical => "physical",
    Verbal => "verbal",
});

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn sentiment_round_trip() {
        for (variant, s) in [
            (Sentiment::Positive, "positive"),
            (Sentiment::Negative, "negative"),
            (Sentiment::Neutral, "neutral"),
        ] {
            assert_eq!(variant.as_str(), s);
            assert_eq!(Sentiment::from_str(s).unwrap(), variant);
        }
    }

    #[test]
    fn flow_step_round_trip() {
        for (variant, s) in [
            (FlowStep::Diary, "diary"),
            (FlowStep::MoodSelection, "mood_selection"),
            (FlowStep::AiAnalysis, "ai_analysis"),
            (FlowStep::FallbackQuestions, "fallback_questions"),
            (FlowStep::Complete, "complete"),
        ] {
            assert_eq!(variant.as_str(), s);
            assert_eq!(FlowStep::from_str(s).unwrap(), variant);
        }
    }

    #[test]
    fn signal_type_round_trip() {
        for (variant, s) in [
            (SignalType::Mood, "mood"),
            (SignalType::Behavioral, "behavioral"),
            (SignalType::Social, "social"),
            (SignalType::Physical, "physical"),
            (SignalType::Verbal, "verbal"),
        ] {
            assert_eq!(variant.as_str(), s);
            assert_eq!(SignalType::from_str(s).unwrap(), variant);
        }
    }

    #[test]
    fn invalid_enum_returns_error() {
        assert!(Sentiment::from_str("mixed").is_err());
        assert!(FlowStep::from_str("unknown").is_err());
        assert!(SignalType::from_str("").is_err());
    }
}
