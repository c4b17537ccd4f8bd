use biomech_core::analyzer::analyze_exercise;
use biomech_core::catalog::ExerciseId;
use biomech_core::reps::{RepCounter, RepEvent, RepState};

mod common;
use common::{arms, squat};

fn drive(id: ExerciseId, frames: &[f64], build: impl Fn(f64) -> biomech_core::Skeleton) -> (RepCounter, Vec<RepEvent>) {
    let def = id.definition();
    let mut rc = RepCounter::new(1);
    let mut events = Vec::new();
    for &deg in frames {
        let r = analyze_exercise(&build(deg), id);
        if let Some(ev) = rc.update(def, &r.angles) {
            events.push(ev);
        }
    }
    (rc, events)
}

#[test]
fn squat_down_and_up_is_one_rep() {
    let (rc, events) = drive(ExerciseId::Squat, &[170.0, 170.0, 95.0, 95.0, 170.0], squat);
    assert_eq!(events, vec![RepEvent { count: 1 }]);
    assert_eq!(rc.count(), 1);
    assert_eq!(rc.state(), RepState::Up);
}

#[test]
fn curl_counts_with_reversed_thresholds() {
    let (rc, events) = drive(ExerciseId::BicepCurl, &[170.0, 45.0, 170.0], |d| arms(d, d));
    assert_eq!(events.len(), 1);
    assert_eq!(rc.count(), 1);
}

#[test]
fn curl_half_rep_does_not_count() {
    // 60° er over "up"-terskelen (50), så vi kommer aldri i down
    let (rc, events) = drive(ExerciseId::BicepCurl, &[170.0, 60.0, 170.0], |d| arms(d, d));
    assert!(events.is_empty());
    assert_eq!(rc.state(), RepState::Up);
}

#[test]
fn press_counts_on_both_arms() {
    let (rc, _) = drive(ExerciseId::ShoulderPress, &[170.0, 90.0, 170.0], |d| arms(d, d));
    assert_eq!(rc.count(), 1);
}

#[test]
fn one_arm_press_is_not_a_rep() {
    // høyre arm står fast på 60°: snittet går 115 → 75 → 115, aldri over 155
    let (rc, events) = drive(ExerciseId::ShoulderPress, &[170.0, 90.0, 170.0], |d| arms(d, 60.0));
    assert!(events.is_empty());
    assert_eq!(rc.count(), 0);
    assert_eq!(rc.state(), RepState::Down);
}

#[test]
fn several_reps_increment_by_one() {
    let mut trace = vec![170.0];
    for _ in 0..3 {
        trace.extend([100.0, 90.0, 165.0]);
    }
    let (rc, events) = drive(ExerciseId::Squat, &trace, squat);
    assert_eq!(events.iter().map(|e| e.count).collect::<Vec<_>>(), vec![1, 2, 3]);
    assert_eq!(rc.count(), 3);
}

#[test]
fn incomplete_frames_do_not_move_the_state() {
    let def = ExerciseId::Squat.definition();
    let mut rc = RepCounter::new(1);
    let empty = analyze_exercise(&biomech_core::Skeleton::default(), ExerciseId::Squat);
    rc.update(def, &analyze_exercise(&squat(95.0), ExerciseId::Squat).angles);
    assert_eq!(rc.state(), RepState::Down);
    assert!(rc.update(def, &empty.angles).is_none());
    assert_eq!(rc.state(), RepState::Down);
}

#[test]
fn smoothing_delays_but_does_not_invent_reps() {
    let def = ExerciseId::Squat.definition();
    let mut rc = RepCounter::new(3);
    // en enkelt støy-frame på 100° blir glattet bort
    for a in [170.0, 170.0, 100.0, 170.0, 170.0] {
        let r = analyze_exercise(&squat(a), ExerciseId::Squat);
        assert!(rc.update(def, &r.angles).is_none());
    }
    assert_eq!(rc.state(), RepState::Up);
}

#[test]
fn reset_returns_to_up_and_zero() {
    let def = ExerciseId::Squat.definition();
    let mut rc = RepCounter::new(1);
    rc.feed(def, 90.0);
    rc.feed(def, 170.0);
    rc.feed(def, 90.0);
    rc.reset();
    assert_eq!(rc.count(), 0);
    assert_eq!(rc.state(), RepState::Up);
}
