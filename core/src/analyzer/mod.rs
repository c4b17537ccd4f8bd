//! Øvelsesanalyse: én `Analyzer` per øvelsesvariant, valgt via en eksplisitt tabell.
//!
//! Hver analysator henter sine påkrevde landmarks med `Skeleton::require` først.
//! Mangler noe, returneres et nøytralt resultat (score 0 + info-melding) – aldri feil.

mod curl;
mod deadlift;
mod plank;
mod press;
mod pushup;
mod squat;

pub use curl::BicepCurlAnalyzer;
pub use deadlift::DeadliftAnalyzer;
pub use plank::PlankAnalyzer;
pub use press::ShoulderPressAnalyzer;
pub use pushup::PushupAnalyzer;
pub use squat::SquatAnalyzer;

use crate::catalog::{ExerciseDefinition, ExerciseId, ScoreWeights};
use crate::error::EngineError;
use crate::models::Skeleton;
use crate::types::{clamp_score, AngleReading, AnalysisResult, FeedbackItem, ScoreBreakdown, Severity};

/// Felles kontrakt for alle øvelsesanalysatorer.
pub trait Analyzer: Sync {
    fn analyze(&self, skeleton: &Skeleton, def: &ExerciseDefinition) -> AnalysisResult;
}

/// Dispatch-tabell. Utfall (lunge) gjenbruker knebøy-logikken.
pub fn analyzer_for(id: ExerciseId) -> &'static dyn Analyzer {
    match id {
        ExerciseId::Squat | ExerciseId::Lunge => &SquatAnalyzer,
        ExerciseId::Pushup => &PushupAnalyzer,
        ExerciseId::Plank => &PlankAnalyzer,
        ExerciseId::BicepCurl => &BicepCurlAnalyzer,
        ExerciseId::ShoulderPress => &ShoulderPressAnalyzer,
        ExerciseId::Deadlift => &DeadliftAnalyzer,
    }
}

/// Analyserer én frame for en kjent øvelse.
pub fn analyze_exercise(skeleton: &Skeleton, id: ExerciseId) -> AnalysisResult {
    analyzer_for(id).analyze(skeleton, id.definition())
}

/// `analyze(skeleton, exerciseId)`: ukjent id gir `EngineError::UnknownExercise`.
pub fn analyze(skeleton: &Skeleton, exercise_id: &str) -> Result<AnalysisResult, EngineError> {
    let id: ExerciseId = exercise_id.parse()?;
    Ok(analyze_exercise(skeleton, id))
}

/// Rå delscorer før avrunding.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Components {
    pub depth: f64,
    pub alignment: f64,
    pub balance: f64,
}

impl Default for Components {
    fn default() -> Self {
        Self { depth: 100.0, alignment: 100.0, balance: 100.0 }
    }
}

fn severity_rank(s: Severity) -> u8 {
    match s {
        Severity::Error => 0,
        Severity::Warning => 1,
        Severity::Info => 2,
        Severity::Success => 3,
    }
}

/// Setter sammen resultatet: vektet totalscore fra rå komponenter, avrundet
/// og klemt til [0,100]; feedback sortert stabilt med mest alvorlig først.
pub(crate) fn finish(
    angles: AngleReading,
    mut feedback: Vec<FeedbackItem>,
    c: Components,
    weights: &ScoreWeights,
) -> AnalysisResult {
    feedback.sort_by_key(|f| severity_rank(f.severity));
    AnalysisResult {
        angles,
        feedback,
        score: clamp_score(weights.combine(c.depth, c.alignment, c.balance)),
        breakdown: ScoreBreakdown::new(
            clamp_score(c.depth),
            clamp_score(c.alignment),
            clamp_score(c.balance),
        ),
    }
}

/// Nøytralt resultat når påkrevde landmarks mangler.
pub(crate) fn incomplete(hint: &str, breakdown: ScoreBreakdown) -> AnalysisResult {
    AnalysisResult {
        angles: AngleReading::new(),
        feedback: vec![FeedbackItem::info(hint)],
        score: 0,
        breakdown,
    }
}
