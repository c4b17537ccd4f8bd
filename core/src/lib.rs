pub mod achievements;
pub mod aggregator;
pub mod analyzer;
pub mod angles;
pub mod catalog;
pub mod cli;
pub mod coaching;
pub mod config;
pub mod engine;
pub mod error;
pub mod metrics;
pub mod models;
pub mod recorder;
pub mod reps;
pub mod smoothing;
pub mod storage;
pub mod types;

#[cfg(feature = "python")]
pub mod py;

pub use analyzer::{analyze, analyze_exercise, Analyzer};
pub use angles::calculate_angle;
pub use catalog::{ExerciseDefinition, ExerciseId, EXERCISES};
pub use config::{CoachingConfig, EngineConfig};
pub use engine::{EngineContext, FrameOutcome, StopOutcome};
pub use error::{CoachingError, EngineError, StorageError};
pub use models::{Joint, Landmark, Point, Skeleton};
pub use recorder::{CumulativeStats, Session};
pub use reps::{RepCounter, RepEvent, RepState};
pub use storage::{load_state, save_state, PersistedState};
pub use types::{AnalysisResult, AngleName, AngleReading, FeedbackItem, ScoreBreakdown, Severity};
