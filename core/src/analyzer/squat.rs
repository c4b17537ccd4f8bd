use crate::analyzer::{finish, incomplete, Analyzer, Components};
use crate::angles::{calculate_angle, mean2};
use crate::catalog::ExerciseDefinition;
use crate::models::{Joint, Skeleton};
use crate::types::{AngleName, AngleReading, AnalysisResult, FeedbackItem, ScoreBreakdown};

/// Knebøy (og utfall): kne-dybde, overkroppsvinkel og venstre/høyre-balanse.
pub struct SquatAnalyzer;

impl Analyzer for SquatAnalyzer {
    fn analyze(&self, skeleton: &Skeleton, def: &ExerciseDefinition) -> AnalysisResult {
        let Some([lh, lk, la, rh, rk, ra, ls]) = skeleton.require([
            Joint::LeftHip,
            Joint::LeftKnee,
            Joint::LeftAnkle,
            Joint::RightHip,
            Joint::RightKnee,
            Joint::RightAnkle,
            Joint::LeftShoulder,
        ]) else {
            return incomplete("📷 Show Full Body", ScoreBreakdown::new(0, 0, 0));
        };

        let left_knee = calculate_angle(lh, lk, la);
        let right_knee = calculate_angle(rh, rk, ra);
        let torso = calculate_angle(ls, lh, lk);
        let avg = mean2(left_knee, right_knee);
        let diff = f64::from(left_knee.abs_diff(right_knee));

        let mut angles = AngleReading::new();
        angles.set(AngleName::LeftKnee, left_knee);
        angles.set(AngleName::RightKnee, right_knee);
        angles.set(AngleName::LeftHip, torso);

        let mut feedback = Vec::new();
        let mut c = Components::default();

        // Dybde: 72–108 er målsonen (inkl. grensene)
        if avg > 155.0 {
            feedback.push(FeedbackItem::warning("⬇ Go Deeper — Bend Knees to 90°"));
            c.depth = (100.0 - (avg - 90.0) * 1.5).max(0.0);
        } else if (72.0..=108.0).contains(&avg) {
            feedback.push(FeedbackItem::success("🎯 Perfect Squat Depth!"));
        } else if avg < 60.0 {
            feedback.push(FeedbackItem::warning("⬆ Too Deep — Rise Slightly"));
            c.depth = 70.0;
        } else {
            c.depth = 85.0;
        }

        if torso < 45 {
            feedback.push(FeedbackItem::error("❌ Keep Torso Upright"));
            c.alignment = 40.0;
        } else if torso < 65 {
            feedback.push(FeedbackItem::warning("⚠ Less Forward Lean"));
            c.alignment = 70.0;
        }

        if diff > 20.0 {
            feedback.push(FeedbackItem::warning("⚖ Balance Both Sides"));
            c.balance = (100.0 - diff * 2.0).max(0.0);
        }

        finish(angles, feedback, c, &def.weights)
    }
}
