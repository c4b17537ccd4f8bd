use crate::analyzer::{finish, incomplete, Analyzer, Components};
use crate::angles::{calculate_angle, mean2};
use crate::catalog::ExerciseDefinition;
use crate::models::{Joint, Skeleton};
use crate::types::{AngleName, AngleReading, AnalysisResult, FeedbackItem, ScoreBreakdown};

/// Skulderpress: snitt albuevinkel mot full lockout (>160°). Rapporteres som `left_elbow`.
pub struct ShoulderPressAnalyzer;

impl Analyzer for ShoulderPressAnalyzer {
    fn analyze(&self, skeleton: &Skeleton, def: &ExerciseDefinition) -> AnalysisResult {
        let Some([ls, le, lw, rs, re, rw]) = skeleton.require([
            Joint::LeftShoulder,
            Joint::LeftElbow,
            Joint::LeftWrist,
            Joint::RightShoulder,
            Joint::RightElbow,
            Joint::RightWrist,
        ]) else {
            return incomplete("📷 Show Both Arms", ScoreBreakdown::new(0, 100, 100));
        };

        let left_elbow = calculate_angle(ls, le, lw);
        let right_elbow = calculate_angle(rs, re, rw);
        let avg = mean2(left_elbow, right_elbow);

        // Snittet er både det som vurderes og rep-vinkelen
        let mut angles = AngleReading::new();
        angles.set(AngleName::LeftElbow, avg.round() as u16);

        let mut c = Components::default();
        let item = if avg > 160.0 {
            FeedbackItem::success("🏆 Full Lockout!")
        } else if avg < 100.0 {
            c.depth = (100.0 - (160.0 - avg) * 1.2).max(0.0);
            FeedbackItem::warning("↑ Press to Full Extension")
        } else {
            c.depth = 75.0;
            FeedbackItem::info("↑ Press Higher")
        };

        finish(angles, vec![item], c, &def.weights)
    }
}
