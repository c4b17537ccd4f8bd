use biomech_core::analyzer::{analyze, analyze_exercise};
use biomech_core::catalog::ExerciseId;
use biomech_core::models::{Joint, Point, Skeleton, LANDMARK_COUNT};
use biomech_core::types::{AngleName, Severity};
use biomech_core::EngineError;

mod common;
use common::*;

#[test]
fn squat_in_target_zone_scores_full() {
    let r = analyze_exercise(&squat(90.0), ExerciseId::Squat);
    assert_eq!(r.angles.get(AngleName::LeftKnee), Some(90));
    assert_eq!(r.angles.get(AngleName::RightKnee), Some(90));
    assert_eq!(r.score, 100);
    assert_eq!(r.primary().unwrap().message, "🎯 Perfect Squat Depth!");
}

#[test]
fn standing_squat_asks_for_depth() {
    let r = analyze_exercise(&squat(170.0), ExerciseId::Squat);
    // depth = max(0, 100 - 80*1.5) = 0 → 0.35*100 + 0.25*100
    assert_eq!(r.breakdown.depth, 0);
    assert_eq!(r.score, 60);
    assert_eq!(r.primary().unwrap().severity, Severity::Warning);
}

#[test]
fn forward_lean_is_an_error_and_sorted_first() {
    let r = analyze_exercise(&squat_with_torso(90.0, 90.0, 40.0), ExerciseId::Squat);
    assert_eq!(r.primary().unwrap().message, "❌ Keep Torso Upright");
    assert_eq!(r.breakdown.alignment, 40);
    // 0.40*100 + 0.35*40 + 0.25*100 = 79
    assert_eq!(r.score, 79);
    assert!(r.has_severity(Severity::Success));
}

#[test]
fn uneven_knees_lower_balance() {
    let r = analyze_exercise(&squat_with_torso(80.0, 110.0, 180.0), ExerciseId::Squat);
    // avg 95, diff 30 → balance 40
    assert_eq!(r.breakdown.balance, 40);
    assert!(r.feedback.iter().any(|f| f.message == "⚖ Balance Both Sides"));
}

#[test]
fn lunge_uses_squat_logic() {
    let sk = squat(90.0);
    let a = analyze_exercise(&sk, ExerciseId::Squat);
    let b = analyze_exercise(&sk, ExerciseId::Lunge);
    assert_eq!(a, b);
}

#[test]
fn pushup_sagging_hips_is_primary_error() {
    let r = analyze_exercise(&pushup(90.0, 140.0), ExerciseId::Pushup);
    assert_eq!(r.primary().unwrap().message, "❌ Raise Hips");
    assert_eq!(r.breakdown.alignment, 30);
    assert_eq!(r.score, 65);
}

#[test]
fn pushup_good_rep() {
    let r = analyze_exercise(&pushup(90.0, 178.0), ExerciseId::Pushup);
    assert_eq!(r.score, 100);
    assert_eq!(r.angles.get(AngleName::BodyAlignment), Some(178));
    assert!(r.feedback.iter().all(|f| f.severity == Severity::Success));
}

#[test]
fn plank_variants() {
    let good = analyze_exercise(&body_line(178.0), ExerciseId::Plank);
    assert_eq!(good.score, 100);
    assert_eq!(good.primary().unwrap().message, "⚡ Perfect Plank!");

    let high = analyze_exercise(&body_line(150.0), ExerciseId::Plank);
    assert_eq!(high.primary().unwrap().message, "❌ Hips Too High");
    assert_eq!(high.breakdown.depth, 0);
    assert_eq!(high.score, 30);

    let meh = analyze_exercise(&body_line(170.0), ExerciseId::Plank);
    assert_eq!(meh.primary().unwrap().severity, Severity::Warning);
    assert_eq!(meh.breakdown.depth, 75);
}

#[test]
fn curl_ranges() {
    let full = analyze_exercise(&arms(30.0, 30.0), ExerciseId::BicepCurl);
    assert_eq!(full.score, 100);

    let start = analyze_exercise(&arms(160.0, 160.0), ExerciseId::BicepCurl);
    assert_eq!(start.primary().unwrap().severity, Severity::Info);
    // 0.65*60 + 0.35*100
    assert_eq!(start.score, 74);
}

#[test]
fn shoulder_press_reports_elbow_average() {
    let r = analyze_exercise(&arms(80.0, 80.0), ExerciseId::ShoulderPress);
    assert_eq!(r.angles.get(AngleName::LeftElbow), Some(80));
    assert_eq!(r.angles.get(AngleName::RightElbow), None);
    assert_eq!(r.score, 4);

    let uneven = analyze_exercise(&arms(170.0, 60.0), ExerciseId::ShoulderPress);
    assert_eq!(uneven.angles.get(AngleName::LeftElbow), Some(115));
    assert_eq!(uneven.angles.len(), 1);

    let top = analyze_exercise(&arms(170.0, 170.0), ExerciseId::ShoulderPress);
    assert_eq!(top.primary().unwrap().message, "🏆 Full Lockout!");
    assert_eq!(top.score, 100);
}

#[test]
fn deadlift_mid_range_is_silent() {
    let mid = analyze_exercise(&hip_hinge(100.0), ExerciseId::Deadlift);
    assert!(mid.feedback.is_empty());
    assert_eq!(mid.score, 100);

    let low = analyze_exercise(&hip_hinge(40.0), ExerciseId::Deadlift);
    assert_eq!(low.score, 0);
    assert_eq!(low.primary().unwrap().message, "⬆ Drive Hips Forward!");
}

#[test]
fn missing_landmarks_give_neutral_result_for_every_exercise() {
    for id in ExerciseId::ALL {
        let r = analyze_exercise(&Skeleton::default(), id);
        assert_eq!(r.score, 0, "{id}");
        assert!(r.angles.is_empty(), "{id}");
        assert_eq!(r.feedback.len(), 1, "{id}");
        assert_eq!(r.feedback[0].severity, Severity::Info, "{id}");
    }
}

#[test]
fn one_missing_ankle_is_incomplete() {
    let full = squat(90.0);
    let mut pts: Vec<(Joint, Point)> = [
        Joint::LeftHip,
        Joint::LeftKnee,
        Joint::RightHip,
        Joint::RightKnee,
        Joint::RightAnkle,
        Joint::LeftShoulder,
    ]
    .into_iter()
    .filter_map(|j| full.point(j).map(|p| (j, p)))
    .collect();
    let r = analyze_exercise(&Skeleton::from_points(&pts), ExerciseId::Squat);
    assert_eq!(r.primary().unwrap().message, "📷 Show Full Body");

    pts.push((Joint::LeftAnkle, Point::new(f64::NAN, 0.8)));
    let r = analyze_exercise(&Skeleton::from_points(&pts), ExerciseId::Squat);
    assert_eq!(r.score, 0);
}

/// Alle punkter i samme posisjon: null-lengde segmenter overalt.
fn collapsed() -> Skeleton {
    Skeleton::new(vec![Some(Point::new(0.5, 0.5)); LANDMARK_COUNT])
}

/// Alle punkter på én vannrett linje.
fn flat_line() -> Skeleton {
    Skeleton::new(
        (0..LANDMARK_COUNT)
            .map(|i| Some(Point::new(i as f64 / LANDMARK_COUNT as f64, 0.5)))
            .collect(),
    )
}

#[test]
fn scores_stay_in_range() {
    let mut poses = vec![collapsed(), flat_line(), Skeleton::default()];
    for deg in (0..=180).step_by(15).map(f64::from) {
        poses.extend([
            squat_with_torso(deg, 180.0 - deg, 30.0),
            arms(deg, 180.0 - deg),
            pushup(deg, 180.0 - deg),
            body_line(deg),
            hip_hinge(deg),
        ]);
    }

    for id in ExerciseId::ALL {
        for skeleton in &poses {
            let r = analyze_exercise(skeleton, id);
            assert!(r.score <= 100, "{id}: score {}", r.score);
            let b = r.breakdown;
            assert!(b.depth <= 100 && b.alignment <= 100 && b.balance <= 100, "{id}: {b:?}");
            for (name, deg) in r.angles.iter() {
                assert!(deg <= 180, "{id}: {name:?} = {deg}");
            }
        }
    }
}

#[test]
fn unknown_exercise_is_rejected() {
    let err = analyze(&squat(90.0), "burpee").unwrap_err();
    assert_eq!(err, EngineError::UnknownExercise("burpee".to_string()));
}
