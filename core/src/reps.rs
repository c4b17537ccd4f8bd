use log::debug;
use serde::{Deserialize, Serialize};

use crate::catalog::{ExerciseDefinition, RepDirection};
use crate::smoothing::AngleSmoother;
use crate::types::AngleReading;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RepState {
    #[default]
    Up,
    Down,
}

/// Fullført repetisjon (ned→opp). `count` er løpende antall etter denne repen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepEvent {
    pub count: u32,
}

/// Hysterese-basert tilstandsmaskin for én vinkel-tidsserie.
///
/// Overganger krever at vinkelen krysser den motsatte terskelen (streng ulikhet),
/// så en halv syklus kan aldri telles to ganger.
#[derive(Debug, Clone, Default)]
pub struct RepCounter {
    state: RepState,
    count: u32,
    smoother: AngleSmoother,
}

impl RepCounter {
    pub fn new(smoothing_window: usize) -> Self {
        Self { smoother: AngleSmoother::new(smoothing_window), ..Default::default() }
    }

    pub fn state(&self) -> RepState {
        self.state
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    /// Tilbake til `Up` og 0 reps (ved bytte av øvelse / reset).
    pub fn reset(&mut self) {
        self.state = RepState::Up;
        self.count = 0;
        self.smoother.clear();
    }

    /// Leser `rep_joint` fra vinklene. Ingen rep-vinkel (planke) eller manglende måling = ingen overgang.
    pub fn update(&mut self, def: &ExerciseDefinition, angles: &AngleReading) -> Option<RepEvent> {
        let joint = def.rep_joint?;
        let raw = angles.get(joint)?;
        let angle = self.smoother.push(f64::from(raw));
        self.feed(def, angle)
    }

    /// Én overgang per kall.
    pub fn feed(&mut self, def: &ExerciseDefinition, angle: f64) -> Option<RepEvent> {
        def.rep_joint?;
        // (inn i "down" under denne, tilbake til "up" over denne)
        let (enter_down_below, exit_up_above) = match def.rep_direction {
            RepDirection::Standard => (def.rep_down_threshold, def.rep_up_threshold),
            RepDirection::Reversed => (def.rep_up_threshold, def.rep_down_threshold),
        };

        match self.state {
            RepState::Up if angle < enter_down_below => {
                self.state = RepState::Down;
                debug!("{}: rep state up -> down at {angle:.0}°", def.id);
                None
            }
            RepState::Down if angle > exit_up_above => {
                self.state = RepState::Up;
                self.count += 1;
                debug!("{}: rep {} completed at {angle:.0}°", def.id, self.count);
                Some(RepEvent { count: self.count })
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ExerciseId;

    #[test]
    fn chatter_inside_band_does_not_count() {
        let def = ExerciseId::Squat.definition();
        let mut rc = RepCounter::new(1);
        for a in [170.0, 105.0, 130.0, 108.0, 150.0, 100.0] {
            assert!(rc.feed(def, a).is_none());
        }
        assert_eq!(rc.state(), RepState::Down);
        assert_eq!(rc.count(), 0);
    }

    #[test]
    fn threshold_equality_is_not_a_crossing() {
        let def = ExerciseId::Squat.definition();
        let mut rc = RepCounter::new(1);
        assert!(rc.feed(def, 110.0).is_none());
        assert_eq!(rc.state(), RepState::Up);
        rc.feed(def, 109.0);
        assert!(rc.feed(def, 160.0).is_none());
        assert_eq!(rc.feed(def, 161.0), Some(RepEvent { count: 1 }));
    }

    #[test]
    fn plank_never_transitions() {
        let def = ExerciseId::Plank.definition();
        let mut rc = RepCounter::new(1);
        for a in [10.0, 170.0, 0.0, 180.0] {
            assert!(rc.feed(def, a).is_none());
        }
        assert_eq!(rc.state(), RepState::Up);
    }
}
