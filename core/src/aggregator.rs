use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::angles::RoundTo;
use crate::config::EngineConfig;
use crate::types::{AnalysisResult, Severity};

/// Øktstatistikk bygget fra per-frame resultater.
#[derive(Debug, Clone, Serialize)]
pub struct ScoreAggregator {
    current: u8,
    /// Starter på 100 ("ingen feil ennå"), ikke 0
    best: u8,
    /// Høyeste score faktisk observert i en analysert frame
    peak_observed: Option<u8>,
    history: VecDeque<u8>,
    history_capacity: usize,
    history_stride: u64,
    frames: u64,
    corrections: u32,
    rep_times: VecDeque<DateTime<Utc>>,
    set_window: usize,
    /// Alle reps i økten, også før bytte av øvelse
    session_reps: u32,
    session_fastest_set: Option<f64>,
}

impl ScoreAggregator {
    pub fn new(cfg: &EngineConfig) -> Self {
        let set_window = cfg.fastest_set_window.max(2);
        Self {
            current: 100,
            best: 100,
            peak_observed: None,
            history: VecDeque::with_capacity(cfg.history_capacity),
            history_capacity: cfg.history_capacity,
            history_stride: cfg.history_stride.max(1),
            frames: 0,
            corrections: 0,
            rep_times: VecDeque::with_capacity(set_window),
            set_window,
            session_reps: 0,
            session_fastest_set: None,
        }
    }

    /// Nullstill ved øktstart.
    pub fn reset(&mut self) {
        self.current = 100;
        self.best = 100;
        self.peak_observed = None;
        self.history.clear();
        self.frames = 0;
        self.corrections = 0;
        self.rep_times.clear();
        self.session_reps = 0;
        self.session_fastest_set = None;
    }

    /// Nullstill score/korreksjoner midt i økten. Øktens reps og rep-tider beholdes.
    pub fn reset_form(&mut self) {
        self.current = 100;
        self.best = 100;
        self.history.clear();
        self.frames = 0;
        self.corrections = 0;
    }

    /// Tar med én frame. Returnerer `true` hvis framen telte som korreksjon (minst én error).
    pub fn record_frame(&mut self, result: &AnalysisResult) -> bool {
        let score = result.score.min(100);
        self.current = score;
        self.best = self.best.max(score);
        self.peak_observed = Some(self.peak_observed.map_or(score, |p| p.max(score)));

        if self.frames % self.history_stride == 0 {
            self.history.push_back(score);
            while self.history.len() > self.history_capacity {
                self.history.pop_front();
            }
        }
        self.frames += 1;

        let correction = result.has_severity(Severity::Error);
        if correction {
            self.corrections += 1;
        }
        correction
    }

    /// Registrerer en fullført rep. Når vi har minst `set_window` tidsstempler
    /// returneres varigheten (sek) for de siste `set_window` repsene.
    pub fn record_rep(&mut self, at: DateTime<Utc>) -> Option<f64> {
        self.session_reps += 1;
        self.rep_times.push_back(at);
        if self.rep_times.len() > self.set_window {
            self.rep_times.pop_front();
        }
        if self.rep_times.len() < self.set_window {
            return None;
        }
        let first = *self.rep_times.front()?;
        let last = *self.rep_times.back()?;
        let secs = ((last - first).num_milliseconds() as f64 / 1000.0).max(0.0).round_to(3);
        self.session_fastest_set = Some(self.session_fastest_set.map_or(secs, |f| f.min(secs)));
        Some(secs)
    }

    pub fn current(&self) -> u8 {
        self.current
    }

    pub fn best(&self) -> u8 {
        self.best
    }

    pub fn peak_observed(&self) -> Option<u8> {
        self.peak_observed
    }

    pub fn history(&self) -> impl Iterator<Item = u8> + '_ {
        self.history.iter().copied()
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn corrections(&self) -> u32 {
        self.corrections
    }

    pub fn session_reps(&self) -> u32 {
        self.session_reps
    }

    pub fn session_fastest_set(&self) -> Option<f64> {
        self.session_fastest_set
    }
}

impl Default for ScoreAggregator {
    fn default() -> Self {
        Self::new(&EngineConfig::default())
    }
}
