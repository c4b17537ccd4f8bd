use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Alvorlighetsgrad for en feedback-melding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Warning,
    Error,
    Info,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackItem {
    pub message: String,
    pub severity: Severity,
}

impl FeedbackItem {
    pub fn new(message: impl Into<String>, severity: Severity) -> Self {
        Self { message: message.into(), severity }
    }
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Success)
    }
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Warning)
    }
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Error)
    }
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Info)
    }
}

/// Navngitte vinkler analysatorene rapporterer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AngleName {
    LeftKnee,
    RightKnee,
    LeftHip,
    LeftElbow,
    RightElbow,
    BodyAlignment,
}

impl AngleName {
    pub fn as_str(self) -> &'static str {
        match self {
            AngleName::LeftKnee => "left_knee",
            AngleName::RightKnee => "right_knee",
            AngleName::LeftHip => "left_hip",
            AngleName::LeftElbow => "left_elbow",
            AngleName::RightElbow => "right_elbow",
            AngleName::BodyAlignment => "body_alignment",
        }
    }

    /// "left_knee" -> "left knee" (for prompt/rapport)
    pub fn label(self) -> String {
        self.as_str().replace('_', " ")
    }
}

/// Vinkel-navn -> heltallsgrader [0,180]. Beregnes på nytt hver frame.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AngleReading(BTreeMap<AngleName, u16>);

impl AngleReading {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, name: AngleName, degrees: u16) {
        self.0.insert(name, degrees.min(180));
    }

    pub fn get(&self, name: AngleName) -> Option<u16> {
        self.0.get(&name).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (AngleName, u16)> + '_ {
        self.0.iter().map(|(k, v)| (*k, *v))
    }
}

/// Delscorer 0–100. Betydningen av hver komponent varierer per øvelse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub depth: u8,
    pub alignment: u8,
    pub balance: u8,
}

impl ScoreBreakdown {
    pub const PERFECT: ScoreBreakdown = ScoreBreakdown { depth: 100, alignment: 100, balance: 100 };

    pub fn new(depth: u8, alignment: u8, balance: u8) -> Self {
        Self {
            depth: depth.min(100),
            alignment: alignment.min(100),
            balance: balance.min(100),
        }
    }
}

impl Default for ScoreBreakdown {
    fn default() -> Self {
        Self::PERFECT
    }
}

/// Resultatet av én analysert frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub angles: AngleReading,
    /// Rekkefølgen betyr noe: første element er primærvarselet.
    pub feedback: Vec<FeedbackItem>,
    pub score: u8,
    pub breakdown: ScoreBreakdown,
}

impl AnalysisResult {
    pub fn has_severity(&self, severity: Severity) -> bool {
        self.feedback.iter().any(|f| f.severity == severity)
    }

    pub fn primary(&self) -> Option<&FeedbackItem> {
        self.feedback.first()
    }
}

/// Karakter for en score: <50 F, <60 D, <70 C, <80 B, <90 A, ellers A+.
pub fn grade_for(score: u8) -> &'static str {
    match score {
        0..=49 => "F",
        50..=59 => "D",
        60..=69 => "C",
        70..=79 => "B",
        80..=89 => "A",
        _ => "A+",
    }
}

/// Klemmer en flyttallsscore til [0,100] og runder til heltall. NaN gir 0.
#[inline]
pub fn clamp_score(x: f64) -> u8 {
    if !x.is_finite() {
        return 0;
    }
    x.round().clamp(0.0, 100.0) as u8
}
