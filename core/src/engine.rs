//! `EngineContext`: eies av kalleren og sendes inn i alle operasjoner.
//!
//! Én aktiv økt om gangen. Alt per-frame arbeid er synkront og uten I/O;
//! lagring og varsling gjøres av kalleren etter at `process_frame` har returnert.

use chrono::{DateTime, Local, Utc};
use log::{info, warn};

use crate::achievements::{self, AchievementDefinition};
use crate::aggregator::ScoreAggregator;
use crate::analyzer::analyze_exercise;
use crate::catalog::{ExerciseDefinition, ExerciseId};
use crate::coaching::{CoachingProvider, CoachingRequest, HistorySummary};
use crate::config::EngineConfig;
use crate::error::{CoachingError, EngineError};
use crate::metrics::Metrics;
use crate::models::Skeleton;
use crate::recorder::{CumulativeStats, Session, SessionDraft, SessionRecorder};
use crate::reps::{RepCounter, RepEvent, RepState};
use crate::storage::PersistedState;
use crate::types::AnalysisResult;

/// Kalles for hver nylig opplåste achievement (kun for UI-varsling).
pub type UnlockCallback = Box<dyn FnMut(&'static AchievementDefinition)>;

/// Resultatet av én frame i en aktiv økt.
#[derive(Debug, Clone)]
pub struct FrameOutcome {
    pub analysis: AnalysisResult,
    pub rep: Option<RepEvent>,
    pub rep_state: RepState,
    pub newly_unlocked: Vec<&'static AchievementDefinition>,
}

/// Resultatet av `stop()` når en økt faktisk ble avsluttet.
#[derive(Debug, Clone)]
pub struct StopOutcome {
    pub session: Session,
    pub newly_unlocked: Vec<&'static AchievementDefinition>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Phase {
    Idle,
    Active { started_at: DateTime<Utc> },
}

pub struct EngineContext {
    cfg: EngineConfig,
    exercise: ExerciseId,
    phase: Phase,
    reps: RepCounter,
    scores: ScoreAggregator,
    last: Option<AnalysisResult>,
    store: PersistedState,
    recorder: SessionRecorder,
    metrics: Option<Metrics>,
    on_unlock: Option<UnlockCallback>,
}

impl EngineContext {
    pub fn new(cfg: EngineConfig, store: PersistedState) -> Self {
        let metrics = match Metrics::new() {
            Ok(m) => Some(m),
            Err(e) => {
                warn!("kunne ikke registrere metrics: {e}");
                None
            }
        };
        Self {
            reps: RepCounter::new(cfg.rep_smoothing_window),
            scores: ScoreAggregator::new(&cfg),
            recorder: SessionRecorder::new(cfg.session_history_cap),
            exercise: ExerciseId::Squat,
            phase: Phase::Idle,
            last: None,
            store,
            metrics,
            on_unlock: None,
            cfg,
        }
    }

    pub fn set_unlock_callback(&mut self, cb: UnlockCallback) {
        self.on_unlock = Some(cb);
    }

    pub fn config(&self) -> &EngineConfig {
        &self.cfg
    }

    pub fn exercise(&self) -> ExerciseId {
        self.exercise
    }

    pub fn definition(&self) -> &'static ExerciseDefinition {
        self.exercise.definition()
    }

    pub fn is_active(&self) -> bool {
        matches!(self.phase, Phase::Active { .. })
    }

    pub fn started_at(&self) -> Option<DateTime<Utc>> {
        match self.phase {
            Phase::Active { started_at } => Some(started_at),
            Phase::Idle => None,
        }
    }

    pub fn rep_count(&self) -> u32 {
        self.reps.count()
    }

    pub fn rep_state(&self) -> RepState {
        self.reps.state()
    }

    pub fn scores(&self) -> &ScoreAggregator {
        &self.scores
    }

    pub fn last_analysis(&self) -> Option<&AnalysisResult> {
        self.last.as_ref()
    }

    /// Persistert del av tilstanden (økter, totaler, opplåste achievements).
    pub fn state(&self) -> &PersistedState {
        &self.store
    }

    /// Kopi for lagring (fire-and-forget hos kalleren).
    pub fn snapshot(&self) -> PersistedState {
        self.store.clone()
    }

    pub fn metrics(&self) -> Option<&Metrics> {
        self.metrics.as_ref()
    }

    /// Bytter øvelse. Rep-teller og RepState nullstilles; totaler og historikk røres ikke,
    /// bortsett fra at øvelsen legges i `exercises_tried`.
    pub fn select_exercise(
        &mut self,
        id: &str,
    ) -> Result<Vec<&'static AchievementDefinition>, EngineError> {
        let exercise: ExerciseId = id.parse()?;
        self.exercise = exercise;
        self.reps.reset();
        self.last = None;
        info!("øvelse valgt: {exercise}");
        if !self.store.totals.exercises_tried.insert(exercise.as_str().to_string()) {
            return Ok(Vec::new());
        }
        let live = self.live_stats();
        Ok(self.unlock(&live))
    }

    /// Starter en økt. Feiler hvis en økt allerede er aktiv.
    pub fn start(&mut self, now: DateTime<Utc>) -> Result<(), EngineError> {
        if self.is_active() {
            return Err(EngineError::SessionAlreadyActive);
        }
        self.reps.reset();
        self.scores.reset();
        self.last = None;
        self.store.totals.exercises_tried.insert(self.exercise.as_str().to_string());
        self.phase = Phase::Active { started_at: now };
        info!("økt startet: {}", self.exercise);
        Ok(())
    }

    /// Nullstiller reps og form-score midt i økten (øktens totale reps beholdes).
    pub fn reset(&mut self) {
        self.reps.reset();
        self.scores.reset_form();
        self.last = None;
    }

    /// Analyserer én frame. Frames utenfor en aktiv økt forkastes (`None`).
    pub fn process_frame(
        &mut self,
        skeleton: &Skeleton,
        now: DateTime<Utc>,
    ) -> Option<FrameOutcome> {
        if !self.is_active() {
            return None;
        }
        let def = self.exercise.definition();
        let analysis = analyze_exercise(skeleton, self.exercise);

        let prior_peak = self.scores.peak_observed();
        let correction = self.scores.record_frame(&analysis);
        let rep = self.reps.update(def, &analysis.angles);

        if let Some(m) = &self.metrics {
            m.frames_analyzed.inc();
            if analysis.angles.is_empty() {
                m.incomplete_frames.inc();
            }
            if correction {
                m.form_corrections.inc();
            }
            if rep.is_some() {
                m.reps_completed.inc();
            }
        }

        let mut stats_changed = self.scores.peak_observed() > prior_peak;
        if rep.is_some() {
            stats_changed = true;
            if let Some(secs) = self.scores.record_rep(now) {
                if self.store.totals.offer_fastest_set(secs) {
                    info!("nytt raskeste sett: {secs:.1}s");
                }
            }
        }

        let newly_unlocked = if stats_changed {
            let live = self.live_stats();
            self.unlock(&live)
        } else {
            Vec::new()
        };

        self.last = Some(analysis.clone());
        Some(FrameOutcome {
            analysis,
            rep,
            rep_state: self.reps.state(),
            newly_unlocked,
        })
    }

    /// Stopper økten og lagrer den. Idempotent: andre kall gir `None`.
    pub fn stop(&mut self, now: DateTime<Utc>) -> Option<StopOutcome> {
        let Phase::Active { started_at } = self.phase else {
            return None;
        };
        self.phase = Phase::Idle;

        let draft = SessionDraft {
            exercise: self.exercise,
            best_score: self.scores.best(),
            reps: self.reps.count(),
            session_reps: self.scores.session_reps(),
            started_at,
            ended_at: now,
        };
        let today = now.with_timezone(&Local).date_naive();
        let (session, mut totals) =
            self.recorder
                .record(&self.store.totals, &mut self.store.sessions, &draft, today);
        if let Some(peak) = self.scores.peak_observed() {
            totals.offer_frame_score(peak);
        }
        self.store.totals = totals;

        if let Some(m) = &self.metrics {
            m.sessions_recorded.inc();
        }
        let stats = self.store.totals.clone();
        let newly_unlocked = self.unlock(&stats);
        Some(StopOutcome { session, newly_unlocked })
    }

    /// Totaler + det som er oppnådd så langt i den aktive økten.
    /// Lagrede `total_reps` økes først av SessionRecorder ved stopp.
    pub fn live_stats(&self) -> CumulativeStats {
        let mut stats = self.store.totals.clone();
        if self.is_active() {
            stats.total_reps += u64::from(self.scores.session_reps());
            if let Some(peak) = self.scores.peak_observed() {
                stats.offer_frame_score(peak);
            }
        }
        stats
    }

    pub fn record_coaching_use(&mut self) -> Vec<&'static AchievementDefinition> {
        self.store.totals.coaching_uses = self.store.totals.coaching_uses.saturating_add(1);
        let live = self.live_stats();
        self.unlock(&live)
    }

    pub fn mark_recorded(&mut self) -> Vec<&'static AchievementDefinition> {
        self.store.totals.has_recorded = true;
        let live = self.live_stats();
        self.unlock(&live)
    }

    pub fn mark_shared(&mut self) -> Vec<&'static AchievementDefinition> {
        self.store.totals.has_shared = true;
        let live = self.live_stats();
        self.unlock(&live)
    }

    /// Bygger forespørselen til coaching-tjenesten fra gjeldende tilstand.
    pub fn coaching_request(&self) -> CoachingRequest {
        let live = self.live_stats();
        let (angles, feedback) = match &self.last {
            Some(a) => (a.angles.clone(), a.feedback.iter().map(|f| f.message.clone()).collect()),
            None => Default::default(),
        };
        CoachingRequest {
            exercise_name: self.definition().name.to_string(),
            score: self.scores.current(),
            reps: self.reps.count(),
            angles,
            feedback,
            history: HistorySummary {
                sessions: self.store.sessions.len(),
                total_reps: live.total_reps,
                streak: live.streak,
            },
        }
    }

    /// Teller bruken (også ved feil) og spør tjenesten. Blokkerer; kalles ikke fra frame-løkken.
    pub fn request_coaching(
        &mut self,
        provider: &dyn CoachingProvider,
    ) -> Result<String, CoachingError> {
        self.record_coaching_use();
        let request = self.coaching_request();
        provider.advise(&request)
    }

    fn unlock(&mut self, stats: &CumulativeStats) -> Vec<&'static AchievementDefinition> {
        let fresh = achievements::evaluate(stats, &mut self.store.unlocked_achievements);
        for a in &fresh {
            info!("achievement låst opp: {} ({})", a.name, a.id);
            if let Some(m) = &self.metrics {
                m.achievements_unlocked.inc();
            }
            if let Some(cb) = self.on_unlock.as_mut() {
                cb(a);
            }
        }
        fresh
    }
}

impl Default for EngineContext {
    fn default() -> Self {
        Self::new(EngineConfig::default(), PersistedState::default())
    }
}
