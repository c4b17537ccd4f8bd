#![allow(dead_code)]

use biomech_core::models::{Joint, Point, Skeleton};
use chrono::{DateTime, Duration, TimeZone, Utc};

/// Punkt `len` fra `vertex` slik at vinkelen first–vertex–(retur) blir `deg` grader.
pub fn at_angle(vertex: Point, first: Point, deg: f64, len: f64) -> Point {
    let (dx, dy) = (first.x - vertex.x, first.y - vertex.y);
    let norm = dx.hypot(dy);
    let (ux, uy) = (dx / norm, dy / norm);
    let (s, c) = deg.to_radians().sin_cos();
    Point::new(vertex.x + len * (ux * c - uy * s), vertex.y + len * (ux * s + uy * c))
}

/// Knebøy-skjelett: gitte knevinkler, overkropp i `torso` grader (180 = rett).
pub fn squat_with_torso(left_knee: f64, right_knee: f64, torso: f64) -> Skeleton {
    let lh = Point::new(0.45, 0.4);
    let lk = Point::new(0.45, 0.6);
    let rh = Point::new(0.55, 0.4);
    let rk = Point::new(0.55, 0.6);
    Skeleton::from_points(&[
        (Joint::LeftHip, lh),
        (Joint::LeftKnee, lk),
        (Joint::LeftAnkle, at_angle(lk, lh, left_knee, 0.2)),
        (Joint::RightHip, rh),
        (Joint::RightKnee, rk),
        (Joint::RightAnkle, at_angle(rk, rh, right_knee, 0.2)),
        (Joint::LeftShoulder, at_angle(lh, lk, torso, 0.25)),
    ])
}

pub fn squat(knee: f64) -> Skeleton {
    squat_with_torso(knee, knee, 180.0)
}

/// Armer for curl/press/push-up: gitte albuevinkler.
fn arm_points(left_elbow: f64, right_elbow: f64) -> Vec<(Joint, Point)> {
    let ls = Point::new(0.4, 0.3);
    let le = Point::new(0.4, 0.45);
    let rs = Point::new(0.6, 0.3);
    let re = Point::new(0.6, 0.45);
    vec![
        (Joint::LeftShoulder, ls),
        (Joint::LeftElbow, le),
        (Joint::LeftWrist, at_angle(le, ls, left_elbow, 0.15)),
        (Joint::RightShoulder, rs),
        (Joint::RightElbow, re),
        (Joint::RightWrist, at_angle(re, rs, right_elbow, 0.15)),
    ]
}

pub fn arms(left_elbow: f64, right_elbow: f64) -> Skeleton {
    Skeleton::from_points(&arm_points(left_elbow, right_elbow))
}

/// Push-up sett fra siden: albuevinkel + kroppslinje (skulder–hofte–ankel).
pub fn pushup(elbow: f64, body: f64) -> Skeleton {
    let mut pts = arm_points(elbow, elbow);
    let ls = Point::new(0.4, 0.3);
    let lh = Point::new(0.6, 0.3);
    pts.push((Joint::LeftHip, lh));
    pts.push((Joint::LeftAnkle, at_angle(lh, ls, body, 0.3)));
    Skeleton::from_points(&pts)
}

/// Skulder–hofte–ankel (planke).
pub fn body_line(deg: f64) -> Skeleton {
    let ls = Point::new(0.2, 0.5);
    let lh = Point::new(0.5, 0.5);
    Skeleton::from_points(&[
        (Joint::LeftShoulder, ls),
        (Joint::LeftHip, lh),
        (Joint::LeftAnkle, at_angle(lh, ls, deg, 0.3)),
    ])
}

/// Skulder–hofte–kne (markløft).
pub fn hip_hinge(deg: f64) -> Skeleton {
    let lh = Point::new(0.5, 0.5);
    let lk = Point::new(0.5, 0.7);
    Skeleton::from_points(&[
        (Joint::LeftHip, lh),
        (Joint::LeftKnee, lk),
        (Joint::LeftShoulder, at_angle(lh, lk, deg, 0.25)),
    ])
}

/// Kl. 12:00 UTC på gitt dato, pluss `secs`.
pub fn noon(y: i32, m: u32, d: u32, secs: i64) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap() + Duration::seconds(secs)
}
