use crate::analyzer::{finish, incomplete, Analyzer, Components};
use crate::angles::{calculate_angle, mean2};
use crate::catalog::ExerciseDefinition;
use crate::models::{Joint, Skeleton};
use crate::types::{AngleName, AngleReading, AnalysisResult, FeedbackItem, ScoreBreakdown};

/// Push-up: albuedybde + kroppslinje (skulder–hofte–ankel).
pub struct PushupAnalyzer;

impl Analyzer for PushupAnalyzer {
    fn analyze(&self, skeleton: &Skeleton, def: &ExerciseDefinition) -> AnalysisResult {
        let Some([ls, le, lw, rs, re, rw, lh, la]) = skeleton.require([
            Joint::LeftShoulder,
            Joint::LeftElbow,
            Joint::LeftWrist,
            Joint::RightShoulder,
            Joint::RightElbow,
            Joint::RightWrist,
            Joint::LeftHip,
            Joint::LeftAnkle,
        ]) else {
            return incomplete("📷 Adjust Camera for Side View", ScoreBreakdown::new(0, 0, 100));
        };

        let left_elbow = calculate_angle(ls, le, lw);
        let right_elbow = calculate_angle(rs, re, rw);
        let body = calculate_angle(ls, lh, la);
        let avg = mean2(left_elbow, right_elbow);

        let mut angles = AngleReading::new();
        angles.set(AngleName::LeftElbow, left_elbow);
        angles.set(AngleName::RightElbow, right_elbow);
        angles.set(AngleName::BodyAlignment, body);

        let mut feedback = Vec::new();
        let mut c = Components::default();

        if avg > 155.0 {
            feedback.push(FeedbackItem::warning("⬇ Lower Chest Further!"));
            c.depth = (100.0 - (avg - 90.0) * 1.2).max(0.0);
        } else if (72.0..=108.0).contains(&avg) {
            feedback.push(FeedbackItem::success("💪 Perfect Push-Up Depth!"));
        }

        let body = f64::from(body);
        if body < 152.0 {
            feedback.push(FeedbackItem::error("❌ Raise Hips"));
            c.alignment = 30.0;
        } else if body > 198.0 {
            // usignert vinkel når aldri hit, men grensen er en del av kontrakten
            feedback.push(FeedbackItem::error("❌ Lower Hips"));
            c.alignment = 30.0;
        } else if (body - 180.0).abs() < 12.0 {
            feedback.push(FeedbackItem::success("✓ Great Body Alignment"));
        }

        finish(angles, feedback, c, &def.weights)
    }
}
