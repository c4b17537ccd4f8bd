use std::collections::BTreeSet;

use chrono::{DateTime, NaiveDate, Utc};
use log::info;
use serde::{Deserialize, Serialize};

use crate::catalog::ExerciseId;

/// Uforanderlig øktpost, lagt i historikken ved øktslutt.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Session {
    /// Millisekunder siden epoch ved start
    pub id: i64,
    /// Øvelses-id som streng, så lagrede data tåler nye/ukjente øvelser
    pub exercise: String,
    pub exercise_name: String,
    pub best_score: u8,
    pub reps: u32,
    pub duration_secs: u64,
    pub started_at: DateTime<Utc>,
    pub ended_at: DateTime<Utc>,
}

/// Akkumulert statistikk på tvers av økter.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CumulativeStats {
    pub total_reps: u64,
    pub total_sessions: u64,
    /// Sammenhengende kalenderdager med minst én økt
    pub streak: u32,
    pub last_session_date: Option<NaiveDate>,
    /// Raskeste 10-rep sett (sek), laveste verdi noensinne
    pub fastest_set_secs: Option<f64>,
    pub exercises_tried: BTreeSet<String>,
    pub coaching_uses: u32,
    pub has_recorded: bool,
    pub has_shared: bool,
    /// Høyeste score observert i en analysert frame
    pub best_frame_score: u8,
}

impl CumulativeStats {
    /// Oppdaterer raskeste sett kun nedover. Returnerer `true` ved ny rekord.
    pub fn offer_fastest_set(&mut self, secs: f64) -> bool {
        if !secs.is_finite() {
            return false;
        }
        match self.fastest_set_secs {
            Some(best) if best <= secs => false,
            _ => {
                self.fastest_set_secs = Some(secs);
                true
            }
        }
    }

    pub fn offer_frame_score(&mut self, score: u8) {
        self.best_frame_score = self.best_frame_score.max(score.min(100));
    }
}

/// Det motoren vet om økten når den stoppes.
#[derive(Debug, Clone)]
pub struct SessionDraft {
    pub exercise: ExerciseId,
    pub best_score: u8,
    /// Endelig rep-telling for gjeldende øvelse
    pub reps: u32,
    /// Alle reps fullført i økten (går inn i totalsummen)
    pub session_reps: u32,
    pub started_at: DateTime<Utc>,
    pub ended_at: DateTime<Utc>,
}

/// Ny streak gitt forrige øktdato og dagens dato.
pub fn next_streak(prior: u32, last: Option<NaiveDate>, today: NaiveDate) -> u32 {
    match last {
        Some(d) if d == today => prior,
        Some(d) if d.succ_opt() == Some(today) => prior.saturating_add(1),
        _ => 1,
    }
}

/// Materialiserer økter og folder dem inn i totalsummene.
#[derive(Debug, Clone)]
pub struct SessionRecorder {
    history_cap: usize,
}

impl SessionRecorder {
    pub fn new(history_cap: usize) -> Self {
        Self { history_cap: history_cap.max(1) }
    }

    pub fn build_session(&self, draft: &SessionDraft) -> Session {
        let duration_secs = (draft.ended_at - draft.started_at).num_seconds().max(0) as u64;
        Session {
            id: draft.started_at.timestamp_millis(),
            exercise: draft.exercise.as_str().to_string(),
            exercise_name: draft.exercise.definition().name.to_string(),
            best_score: draft.best_score.min(100),
            reps: draft.reps,
            duration_secs,
            started_at: draft.started_at,
            ended_at: draft.ended_at,
        }
    }

    /// Nyeste først; eldste kastes når taket er nådd.
    pub fn prepend(&self, history: &mut Vec<Session>, session: Session) {
        history.insert(0, session);
        history.truncate(self.history_cap);
    }

    /// Ny totalsum fra et uforanderlig øyeblikksbilde. Reps summeres additivt.
    pub fn fold_totals(
        &self,
        prior: &CumulativeStats,
        draft: &SessionDraft,
        today: NaiveDate,
    ) -> CumulativeStats {
        let mut next = prior.clone();
        next.total_reps = prior.total_reps.saturating_add(u64::from(draft.session_reps));
        next.total_sessions = prior.total_sessions.saturating_add(1);
        next.streak = next_streak(prior.streak, prior.last_session_date, today);
        next.last_session_date = Some(today);
        next.exercises_tried.insert(draft.exercise.as_str().to_string());
        next
    }

    /// Hele øktslutt-steget: bygg post, legg i historikk, returner (post, nye totaler).
    pub fn record(
        &self,
        prior: &CumulativeStats,
        history: &mut Vec<Session>,
        draft: &SessionDraft,
        today: NaiveDate,
    ) -> (Session, CumulativeStats) {
        let session = self.build_session(draft);
        let totals = self.fold_totals(prior, draft, today);
        self.prepend(history, session.clone());
        info!(
            "økt lagret: {} reps={} best={} varighet={}s streak={}",
            session.exercise, session.reps, session.best_score, session.duration_secs, totals.streak
        );
        (session, totals)
    }
}

impl Default for SessionRecorder {
    fn default() -> Self {
        Self::new(50)
    }
}
