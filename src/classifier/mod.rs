pub mod crisis;
pub mod escalation;
pub mod lexicon;
pub mod sentiment;
pub mod types;

pub use crisis::CrisisAssessor;
pub use escalation::SupportProtocol;
pub use sentiment::KeywordClassifier;
pub use types::{
    CrisisAssessment, CrisisSignal, RiskLevel, SentimentAnalyzer, SignalSeverity,
};
