//! Optional local-LLM assist for diary sentiment.
//!
//! The flow works fully offline on the keyword heuristic; when a local
//! Ollama instance is reachable, `LlmBackedAnalyzer` asks it for a richer
//! verdict instead. Any failure on that path — connection, HTTP status,
//! unparseable output, out-of-range fields — degrades to the keyword
//! heuristic so the user flow never stalls on a dependency outage.

use std::str::FromStr;

use serde::Deserialize;

use crate::classifier::types::SentimentAnalyzer;
use crate::classifier::KeywordClassifier;
use crate::config;
use crate::models::enums::Sentiment;
use crate::models::AiAnalysis;

/// Preferred models in order of preference.
const PREFERRED_MODELS: &[&str] = &["gemma3", "llama3.1", "mistral", "llama3"];

/// Minimum model confidence to conclude a mood from an LLM verdict.
const LLM_CONCLUDE_CONFIDENCE: u8 = 70;

const SYSTEM_PROMPT: &str = "Eres un asistente de bienestar emocional. Analiza el texto del \
     diario y responde SOLO con JSON: {\"emotion\": \"...\", \
     \"confidence\": 0-100, \"sentiment\": \"positive|negative|neutral\", \
     \"mood\": 1-5}";

#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    #[error("Cannot reach Ollama at {0}")]
    Connection(String),

    #[error("Request timed out after {0}s")]
    Timeout(u64),

    #[error("Ollama returned HTTP {status}: {body}")]
    Http { status: u16, body: String },

    #[error("Could not parse model response: {0}")]
    ResponseParsing(String),

    #[error("No suitable model available")]
    NoModelAvailable,
}

/// Minimal LLM surface the analyzer needs; mockable in tests.
pub trait LlmClient {
    fn generate(&self, model: &str, prompt: &str, system: &str) -> Result<String, LlmError>;
    fn list_models(&self) -> Result<Vec<String>, LlmError>;
}

// ═══════════════════════════════════════════
// OllamaClient
// ═══════════════════════════════════════════

/// Blocking HTTP client for a local Ollama instance.
pub struct OllamaClient {
    base_url: String,
    client: reqwest::blocking::Client,
    timeout_secs: u64,
}

impl OllamaClient {
    pub fn new(base_url: &str, timeout_secs: u64) -> Self {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
            timeout_secs,
        }
    }

    /// Client for the configured endpoint (env override respected).
    pub fn from_env() -> Self {
        Self::new(&config::ollama_base_url(), 120)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Find the best available model from the preference list.
    pub fn find_best_model(&self) -> Result<String, LlmError> {
        let available = self.list_models()?;
        for preferred in PREFERRED_MODELS {
            if available.iter().any(|m| m.starts_with(preferred)) {
                return Ok(preferred.to_string());
            }
        }
        Err(LlmError::NoModelAvailable)
    }

    fn map_send_error(&self, e: reqwest::Error) -> LlmError {
        if e.is_connect() {
            LlmError::Connection(self.base_url.clone())
        } else if e.is_timeout() {
            LlmError::Timeout(self.timeout_secs)
        } else {
            LlmError::ResponseParsing(e.to_string())
        }
    }
}

/// Request body for Ollama /api/generate
#[derive(serde::Serialize)]
struct OllamaGenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    system: &'a str,
    stream: bool,
}

/// Response body from Ollama /api/generate
#[derive(Deserialize)]
struct OllamaGenerateResponse {
    response: String,
}

/// Response body from Ollama /api/tags
#[derive(Deserialize)]
struct OllamaTagsResponse {
    models: Vec<OllamaModel>,
}

#[derive(Deserialize)]
struct OllamaModel {
    name: String,
}

impl LlmClient for OllamaClient {
    fn generate(&self, model: &str, prompt: &str, system: &str) -> Result<String, LlmError> {
        let url = format!("{}/api/generate", self.base_url);
        let body = OllamaGenerateRequest {
            model,
            prompt,
            system,
            stream: false,
        };

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .map_err(|e| self.map_send_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(LlmError::Http {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: OllamaGenerateResponse = response
            .json()
            .map_err(|e| LlmError::ResponseParsing(e.to_string()))?;

        Ok(parsed.response)
    }

    fn list_models(&self) -> Result<Vec<String>, LlmError> {
        let url = format!("{}/api/tags", self.base_url);

        let response = self
            .client
            .get(&url)
            .send()
            .map_err(|e| self.map_send_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(LlmError::Http {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: OllamaTagsResponse = response
            .json()
            .map_err(|e| LlmError::ResponseParsing(e.to_string()))?;

        Ok(parsed.models.into_iter().map(|m| m.name).collect())
    }
}

// ═══════════════════════════════════════════
// LlmBackedAnalyzer
// ═══════════════════════════════════════════

/// Verdict shape the model is asked to produce.
#[derive(Deserialize)]
struct LlmVerdict {
    emotion: String,
    confidence: f64,
    sentiment: String,
    mood: Option<f64>,
}

/// Sentiment analyzer that prefers the model's verdict and falls back to
/// the keyword heuristic on any failure.
pub struct LlmBackedAnalyzer<L: LlmClient> {
    client: L,
    model: String,
    fallback: KeywordClassifier,
}

impl<L: LlmClient> LlmBackedAnalyzer<L> {
    pub fn new(client: L, model: &str) -> Self {
        Self {
            client,
            model: model.to_string(),
            fallback: KeywordClassifier::new(),
        }
    }

    fn try_llm(&self, text: &str) -> Result<AiAnalysis, LlmError> {
        let prompt = format!("Texto del diario:\n{text}");
        let raw = self.client.generate(&self.model, &prompt, SYSTEM_PROMPT)?;
        parse_verdict(&raw)
    }
}

impl<L: LlmClient> SentimentAnalyzer for LlmBackedAnalyzer<L> {
    fn analyze(&self, text: &str) -> AiAnalysis {
        match self.try_llm(text) {
            Ok(analysis) => analysis,
            Err(e) => {
                tracing::warn!(error = %e, "LLM verdict unavailable, using keyword heuristic");
                self.fallback.analyze(text)
            }
        }
    }
}

/// Parse a model reply into an analysis. Lenient about surrounding prose:
/// only the first {...} block is considered.
fn parse_verdict(raw: &str) -> Result<AiAnalysis, LlmError> {
    let start = raw
        .find('{')
        .ok_or_else(|| LlmError::ResponseParsing("no JSON object in reply".into()))?;
    let end = raw
        .rfind('}')
        .ok_or_else(|| LlmError::ResponseParsing("unterminated JSON object".into()))?;
    if end < start {
        return Err(LlmError::ResponseParsing("malformed JSON object".into()));
    }

    let verdict: LlmVerdict = serde_json::from_str(&raw[start..=end])
        .map_err(|e| LlmError::ResponseParsing(e.to_string()))?;

    let sentiment = Sentiment::from_str(&verdict.sentiment)
        .map_err(|e| LlmError::ResponseParsing(e.to_string()))?;

    if !(0.0..=100.0).contains(&verdict.confidence) {
        return Err(LlmError::ResponseParsing(format!(
            "confidence out of range: {}",
            verdict.confidence
        )));
    }
    let confidence = verdict.confidence.round() as u8;

    let mood = match verdict.mood {
        Some(m) if (1.0..=5.0).contains(&m) => Some(m.round() as u8),
        Some(m) => {
            return Err(LlmError::ResponseParsing(format!("mood out of range: {m}")));
        }
        None => None,
    };

    let can_conclude = confidence >= LLM_CONCLUDE_CONFIDENCE && mood.is_some();

    Ok(AiAnalysis {
        emotion: verdict.emotion,
        confidence,
        sentiment,
        can_conclude,
        suggested_mood: if can_conclude { mood } else { None },
    })
}
