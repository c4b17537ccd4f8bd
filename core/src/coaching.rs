// core/src/coaching.rs
use std::fmt::Write as _;
use std::time::Duration;

use log::{debug, info};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use ureq::Agent;

use crate::config::CoachingConfig;
use crate::error::CoachingError;
use crate::types::AngleReading;

/// Kort historikk-sammendrag som sendes med forespørselen.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistorySummary {
    pub sessions: usize,
    pub total_reps: u64,
    pub streak: u32,
}

/// Strukturert forespørsel til tekstgenereringstjenesten.
/// Svaret er ren tekst for visning og leses aldri tilbake inn i motoren.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoachingRequest {
    pub exercise_name: String,
    pub score: u8,
    pub reps: u32,
    pub angles: AngleReading,
    pub feedback: Vec<String>,
    pub history: HistorySummary,
}

impl CoachingRequest {
    pub fn to_prompt(&self) -> String {
        let angles = if self.angles.is_empty() {
            "No data yet".to_string()
        } else {
            self.angles
                .iter()
                .map(|(name, deg)| format!("{}: {}°", name.label(), deg))
                .collect::<Vec<_>>()
                .join(", ")
        };
        let feedback = if self.feedback.is_empty() {
            "None".to_string()
        } else {
            self.feedback.join(", ")
        };

        let mut p = String::new();
        let _ = writeln!(p, "You are an elite AI biomechanical coach.");
        let _ = writeln!(
            p,
            "Exercise: {} | Score: {}/100 | Reps: {}",
            self.exercise_name, self.score, self.reps
        );
        let _ = writeln!(p, "Joint Angles: {angles}");
        let _ = writeln!(p, "Live Feedback: {feedback}");
        let _ = writeln!(
            p,
            "Session History: {} sessions, {} total reps, {} day streak",
            self.history.sessions, self.history.total_reps, self.history.streak
        );
        p.push_str(
            "Respond concisely:\n\
             **FORM ASSESSMENT** (2 sentences, cite specific angles)\n\
             **TOP 3 CORRECTIONS** (biomechanical reasoning)\n\
             **MUSCLE ACTIVATION TIP** (one cue)\n\
             **PROGRESSIVE OVERLOAD** (one suggestion based on history)\n\
             **MOTIVATIONAL PUSH** (one energetic sentence)\n\
             Max 280 words. Use anatomical terms.",
        );
        p
    }
}

/// Tilbyder av coaching-tekst (prod: GeminiClient, test: egne stubber)
pub trait CoachingProvider {
    fn advise(&self, request: &CoachingRequest) -> Result<String, CoachingError>;
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Debug, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    #[serde(default)]
    text: Option<String>,
}

/// Gemini `generateContent`-klient – enkel blocking-versjon (ureq)
pub struct GeminiClient {
    agent: Agent,
    cfg: CoachingConfig,
    api_key: Option<String>,
}

impl GeminiClient {
    /// Leser API-nøkkelen fra miljøvariabelen i `cfg.api_key_env`.
    pub fn new(cfg: CoachingConfig) -> Self {
        let api_key = std::env::var(&cfg.api_key_env).ok().filter(|k| !k.trim().is_empty());
        Self::build(cfg, api_key)
    }

    pub fn with_api_key(cfg: CoachingConfig, api_key: impl Into<String>) -> Self {
        Self::build(cfg, Some(api_key.into()))
    }

    fn build(cfg: CoachingConfig, api_key: Option<String>) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(cfg.timeout_secs))
            .build();
        Self { agent, cfg, api_key }
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    fn url(&self) -> String {
        format!(
            "{}/{}:generateContent",
            self.cfg.endpoint.trim_end_matches('/'),
            self.cfg.model
        )
    }
}

impl Default for GeminiClient {
    fn default() -> Self {
        Self::new(CoachingConfig::default())
    }
}

impl CoachingProvider for GeminiClient {
    fn advise(&self, request: &CoachingRequest) -> Result<String, CoachingError> {
        let key = self
            .api_key
            .as_deref()
            .ok_or_else(|| CoachingError::MissingApiKey(self.cfg.api_key_env.clone()))?;

        let body = json!({
            "contents": [{ "parts": [{ "text": request.to_prompt() }] }],
            "generationConfig": {
                "temperature": self.cfg.temperature,
                "maxOutputTokens": self.cfg.max_output_tokens,
            }
        });

        debug!("[coaching] POST {} ({})", self.url(), request.exercise_name);
        let resp = match self
            .agent
            .post(&self.url())
            .set("x-goog-api-key", key)
            .send_json(body)
        {
            Ok(r) => r,
            Err(ureq::Error::Status(status, r)) => {
                // Prøv å hente en lesbar melding fra feilkroppen
                let message = r
                    .into_json::<Value>()
                    .ok()
                    .and_then(|v| v["error"]["message"].as_str().map(str::to_string))
                    .unwrap_or_else(|| format!("HTTP {status}"));
                return Err(CoachingError::Http { status, message });
            }
            Err(e) => return Err(CoachingError::Transport(e.to_string())),
        };

        let parsed: GenerateResponse = resp
            .into_json()
            .map_err(|e| CoachingError::Decode(e.to_string()))?;
        let text = extract_text(parsed).ok_or(CoachingError::EmptyResponse)?;
        info!("[coaching] svar mottatt ({} tegn)", text.len());
        Ok(text)
    }
}

fn extract_text(resp: GenerateResponse) -> Option<String> {
    resp.candidates
        .into_iter()
        .next()?
        .content?
        .parts
        .into_iter()
        .find_map(|p| p.text)
        .filter(|t| !t.trim().is_empty())
}
