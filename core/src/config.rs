use serde::{Deserialize, Serialize};

/// Motor-innstillinger. Alle felt har default, så en tom JSON `{}` er gyldig.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Score-historikk samples hver N-te frame
    pub history_stride: u64,
    /// Maks antall punkter i score-historikken
    pub history_capacity: usize,
    /// Maks antall lagrede økter
    pub session_history_cap: usize,
    /// Antall reps i "raskeste sett"
    pub fastest_set_window: usize,
    /// 1 = rå vinkel per frame (ingen filtrering)
    pub rep_smoothing_window: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            history_stride: 30,
            history_capacity: 20,
            session_history_cap: 50,
            fastest_set_window: 10,
            rep_smoothing_window: 1,
        }
    }
}

impl EngineConfig {
    pub fn from_json_str(s: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(s)
    }
}

/// Innstillinger for coaching-tjenesten (tekstgenerering).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoachingConfig {
    pub endpoint: String,
    pub model: String,
    pub temperature: f32,
    pub max_output_tokens: u32,
    pub timeout_secs: u64,
    /// Miljøvariabelen API-nøkkelen leses fra
    pub api_key_env: String,
}

impl Default for CoachingConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://generativelanguage.googleapis.com/v1beta/models".to_string(),
            model: "gemini-2.5-flash".to_string(),
            temperature: 0.7,
            max_output_tokens: 600,
            timeout_secs: 30,
            api_key_env: "GEMINI_API_KEY".to_string(),
        }
    }
}
