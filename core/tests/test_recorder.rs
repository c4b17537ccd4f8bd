use biomech_core::catalog::ExerciseId;
use biomech_core::recorder::{next_streak, CumulativeStats, SessionDraft, SessionRecorder};
use chrono::NaiveDate;

mod common;
use common::noon;

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
}

fn draft(exercise: ExerciseId, reps: u32, d: u32) -> SessionDraft {
    SessionDraft {
        exercise,
        best_score: 88,
        reps,
        session_reps: reps,
        started_at: noon(2024, 3, d, 0),
        ended_at: noon(2024, 3, d, 95),
    }
}

#[test]
fn streak_rules() {
    assert_eq!(next_streak(0, None, day(10)), 1);
    assert_eq!(next_streak(4, Some(day(10)), day(10)), 4);
    assert_eq!(next_streak(4, Some(day(9)), day(10)), 5);
    assert_eq!(next_streak(4, Some(day(7)), day(10)), 1);
    // over månedsskifte
    let feb29 = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
    assert_eq!(next_streak(2, Some(feb29), day(1)), 3);
}

#[test]
fn session_record_fields() {
    let rec = SessionRecorder::default();
    let s = rec.build_session(&draft(ExerciseId::ShoulderPress, 12, 10));
    assert_eq!(s.exercise, "shoulder_press");
    assert_eq!(s.exercise_name, ExerciseId::ShoulderPress.definition().name);
    assert_eq!(s.duration_secs, 95);
    assert_eq!(s.reps, 12);
    assert_eq!(s.id, noon(2024, 3, 10, 0).timestamp_millis());
}

#[test]
fn totals_are_additive() {
    let rec = SessionRecorder::default();
    let mut history = Vec::new();
    let (_, t1) = rec.record(&CumulativeStats::default(), &mut history, &draft(ExerciseId::Squat, 8, 10), day(10));
    let (_, t2) = rec.record(&t1, &mut history, &draft(ExerciseId::Squat, 5, 11), day(11));
    assert_eq!(t2.total_reps, 13);
    assert_eq!(t2.total_sessions, 2);
    assert_eq!(t2.streak, 2);
    assert_eq!(t2.exercises_tried.len(), 1);
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].reps, 5);
}

#[test]
fn history_is_capped_newest_first() {
    let rec = SessionRecorder::new(3);
    let mut history = Vec::new();
    let mut totals = CumulativeStats::default();
    for d in 1..=5 {
        let (_, t) = rec.record(&totals, &mut history, &draft(ExerciseId::Plank, d, d), day(d));
        totals = t;
    }
    assert_eq!(history.len(), 3);
    assert_eq!(history.iter().map(|s| s.reps).collect::<Vec<_>>(), vec![5, 4, 3]);
    // totalsummen teller fortsatt alle økter
    assert_eq!(totals.total_sessions, 5);
}

#[test]
fn prior_snapshot_is_not_mutated() {
    let rec = SessionRecorder::default();
    let prior = CumulativeStats { total_reps: 20, ..Default::default() };
    let mut history = Vec::new();
    let (_, next) = rec.record(&prior, &mut history, &draft(ExerciseId::Deadlift, 3, 10), day(10));
    assert_eq!(prior.total_reps, 20);
    assert_eq!(next.total_reps, 23);
}

#[test]
fn offer_frame_score_is_monotonic() {
    let mut s = CumulativeStats::default();
    s.offer_frame_score(70);
    s.offer_frame_score(40);
    assert_eq!(s.best_frame_score, 70);
    assert!(s.offer_fastest_set(28.5));
    assert!(!s.offer_fastest_set(29.0));
    assert_eq!(s.fastest_set_secs, Some(28.5));
}
