use crate::analyzer::{finish, incomplete, Analyzer, Components};
use crate::angles::calculate_angle;
use crate::catalog::ExerciseDefinition;
use crate::models::{Joint, Skeleton};
use crate::types::{AngleName, AngleReading, AnalysisResult, FeedbackItem, ScoreBreakdown};

/// Planke: avvik fra rett kroppslinje (180°). Hofte-komponenten holdes på 100.
pub struct PlankAnalyzer;

impl Analyzer for PlankAnalyzer {
    fn analyze(&self, skeleton: &Skeleton, def: &ExerciseDefinition) -> AnalysisResult {
        let Some([ls, lh, la]) =
            skeleton.require([Joint::LeftShoulder, Joint::LeftHip, Joint::LeftAnkle])
        else {
            return incomplete("📷 Show Side Profile", ScoreBreakdown::new(0, 100, 100));
        };

        let line = calculate_angle(ls, lh, la);
        let mut angles = AngleReading::new();
        angles.set(AngleName::BodyAlignment, line);

        let dev = (f64::from(line) - 180.0).abs();
        let mut feedback = Vec::new();
        let mut c = Components::default();

        if dev > 15.0 {
            let msg = if line < 165 { "❌ Hips Too High" } else { "❌ Hips Sagging — Engage Core" };
            feedback.push(FeedbackItem::error(msg));
            c.depth = (100.0 - dev * 4.0).max(0.0);
        } else if dev < 6.0 {
            feedback.push(FeedbackItem::success("⚡ Perfect Plank!"));
        } else {
            feedback.push(FeedbackItem::warning("⚠ Adjust Hip Height"));
            c.depth = 75.0;
        }

        finish(angles, feedback, c, &def.weights)
    }
}
