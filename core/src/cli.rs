use std::fmt::Write as _;

use crate::aggregator::ScoreAggregator;
use crate::recorder::Session;
use crate::types::grade_for;

/// Trend over score-historikken: siste sample minus første.
pub fn score_trend(history: &[u8]) -> Option<i16> {
    match (history.first(), history.last()) {
        (Some(&a), Some(&b)) if history.len() >= 2 => Some(i16::from(b) - i16::from(a)),
        _ => None,
    }
}

fn mmss(secs: u64) -> String {
    format!("{}:{:02}", secs / 60, secs % 60)
}

pub fn format_session_report(session: &Session, scores: &ScoreAggregator) -> String {
    let history: Vec<u8> = scores.history().collect();
    let trend = match score_trend(&history) {
        Some(d) if d > 0 => format!("+{d} (bedring)"),
        Some(d) if d < 0 => format!("{d} (fall)"),
        Some(_) => "flat".to_string(),
        None => "n/a".to_string(),
    };

    let mut out = String::new();
    let _ = writeln!(out, "--- Session Report ---");
    let _ = writeln!(out, "Exercise: {}", session.exercise_name);
    let _ = writeln!(out, "Reps: {}", session.reps);
    let _ = writeln!(
        out,
        "Best score: {} ({})",
        session.best_score,
        grade_for(session.best_score)
    );
    let _ = writeln!(out, "Duration: {}", mmss(session.duration_secs));
    let _ = writeln!(out, "Corrections: {}", scores.corrections());
    if let Some(secs) = scores.session_fastest_set() {
        let _ = writeln!(out, "Fastest set: {secs:.1}s");
    }
    let _ = writeln!(out, "Score trend: {trend}");
    out
}

pub fn print_session_report(session: &Session, scores: &ScoreAggregator) {
    print!("{}", format_session_report(session, scores));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mmss_pads_seconds() {
        assert_eq!(mmss(65), "1:05");
        assert_eq!(mmss(0), "0:00");
    }

    #[test]
    fn trend_needs_two_samples() {
        assert_eq!(score_trend(&[]), None);
        assert_eq!(score_trend(&[80]), None);
        assert_eq!(score_trend(&[60, 75, 90]), Some(30));
    }
}
