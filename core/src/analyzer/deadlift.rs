use crate::analyzer::{finish, incomplete, Analyzer, Components};
use crate::angles::calculate_angle;
use crate::catalog::ExerciseDefinition;
use crate::models::{Joint, Skeleton};
use crate::types::{AngleName, AngleReading, AnalysisResult, FeedbackItem, ScoreBreakdown};

/// Markløft: hoftevinkel (skulder–hofte–kne).
pub struct DeadliftAnalyzer;

impl Analyzer for DeadliftAnalyzer {
    fn analyze(&self, skeleton: &Skeleton, def: &ExerciseDefinition) -> AnalysisResult {
        let Some([ls, lh, lk]) =
            skeleton.require([Joint::LeftShoulder, Joint::LeftHip, Joint::LeftKnee])
        else {
            return incomplete("📷 Show Side Profile", ScoreBreakdown::new(0, 100, 100));
        };

        let hip = calculate_angle(ls, lh, lk);
        let mut angles = AngleReading::new();
        angles.set(AngleName::LeftHip, hip);

        let h = f64::from(hip);
        let mut feedback = Vec::new();
        let mut c = Components::default();

        // 50–155: ingen melding, full score
        if h > 155.0 {
            feedback.push(FeedbackItem::success("💎 Full Extension!"));
        } else if h < 50.0 {
            feedback.push(FeedbackItem::warning("⬆ Drive Hips Forward!"));
            c.depth = (100.0 - (155.0 - h)).max(0.0);
        }

        finish(angles, feedback, c, &def.weights)
    }
}
