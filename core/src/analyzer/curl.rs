use crate::analyzer::{finish, incomplete, Analyzer, Components};
use crate::angles::{calculate_angle, mean2};
use crate::catalog::ExerciseDefinition;
use crate::models::{Joint, Skeleton};
use crate::types::{AngleName, AngleReading, AnalysisResult, FeedbackItem, ScoreBreakdown};

/// Bicepscurl: snitt albuevinkel. Stabilitet (alignment) står på 100.
pub struct BicepCurlAnalyzer;

impl Analyzer for BicepCurlAnalyzer {
    fn analyze(&self, skeleton: &Skeleton, def: &ExerciseDefinition) -> AnalysisResult {
        let Some([ls, le, lw, rs, re, rw]) = skeleton.require([
            Joint::LeftShoulder,
            Joint::LeftElbow,
            Joint::LeftWrist,
            Joint::RightShoulder,
            Joint::RightElbow,
            Joint::RightWrist,
        ]) else {
            return incomplete("📷 Face Camera", ScoreBreakdown::new(0, 100, 100));
        };

        let left_elbow = calculate_angle(ls, le, lw);
        let right_elbow = calculate_angle(rs, re, rw);
        let avg = mean2(left_elbow, right_elbow);

        let mut angles = AngleReading::new();
        angles.set(AngleName::LeftElbow, left_elbow);
        angles.set(AngleName::RightElbow, right_elbow);

        let mut c = Components::default();
        let item = if avg < 35.0 {
            FeedbackItem::success("🔥 Full Curl — Excellent!")
        } else if avg < 70.0 {
            c.depth = 85.0;
            FeedbackItem::success("✓ Good Curl Range")
        } else if avg > 150.0 {
            c.depth = 60.0;
            FeedbackItem::info("↑ Start Curling")
        } else {
            c.depth = 65.0;
            FeedbackItem::warning("⬆ Curl Higher!")
        };

        finish(angles, vec![item], c, &def.weights)
    }
}
