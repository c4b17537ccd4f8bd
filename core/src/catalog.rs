use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::types::AngleName;

/// Lukket sett av øvelser. Nye øvelser legges til her + i `EXERCISES`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExerciseId {
    Squat,
    Pushup,
    Lunge,
    Plank,
    BicepCurl,
    ShoulderPress,
    Deadlift,
}

impl ExerciseId {
    pub const ALL: [ExerciseId; 7] = [
        ExerciseId::Squat,
        ExerciseId::Pushup,
        ExerciseId::Lunge,
        ExerciseId::Plank,
        ExerciseId::BicepCurl,
        ExerciseId::ShoulderPress,
        ExerciseId::Deadlift,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ExerciseId::Squat => "squat",
            ExerciseId::Pushup => "pushup",
            ExerciseId::Lunge => "lunge",
            ExerciseId::Plank => "plank",
            ExerciseId::BicepCurl => "bicep_curl",
            ExerciseId::ShoulderPress => "shoulder_press",
            ExerciseId::Deadlift => "deadlift",
        }
    }

    /// Katalogoppføringen for denne øvelsen.
    pub fn definition(self) -> &'static ExerciseDefinition {
        // EXERCISES er bygget i samme rekkefølge som ALL
        &EXERCISES[self as usize]
    }
}

impl fmt::Display for ExerciseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExerciseId {
    type Err = EngineError;

    /// Ukjente id-er avvises; ingen stille fallback til squat.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ExerciseId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| EngineError::UnknownExercise(s.to_string()))
    }
}

/// Retning for rep-hysterese.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RepDirection {
    /// Vinkelen synker i innsatsfasen (knebøy, push-up …): under `down` → ned, over `up` → opp + rep.
    Standard,
    /// Vinkelen synker når man trekker sammen (curl): under `up` → ned, over `down` → opp + rep.
    Reversed,
}

/// Vekter for delscorene (depth/alignment/balance). Summen er 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreWeights {
    pub depth: f64,
    pub alignment: f64,
    pub balance: f64,
}

impl ScoreWeights {
    pub const fn new(depth: f64, alignment: f64, balance: f64) -> Self {
        Self { depth, alignment, balance }
    }

    /// Vektet sum av rå (uavrundede) delscorer.
    pub fn combine(&self, depth: f64, alignment: f64, balance: f64) -> f64 {
        self.depth * depth + self.alignment * alignment + self.balance * balance
    }
}

/// Muskelaktivering 0–1 per kroppsregion (for heatmap-visning).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct MuscleMap {
    pub torso: f32,
    pub left_arm: f32,
    pub right_arm: f32,
    pub left_leg: f32,
    pub right_leg: f32,
    pub glutes: f32,
}

/// Uforanderlig katalogoppføring.
#[derive(Debug, Clone, Serialize)]
pub struct ExerciseDefinition {
    pub id: ExerciseId,
    pub name: &'static str,
    pub instruction: &'static str,
    pub tips: &'static [&'static str],
    /// `None` for statiske hold (planke) – ingen rep-telling.
    pub rep_joint: Option<AngleName>,
    pub rep_down_threshold: f64,
    pub rep_up_threshold: f64,
    pub rep_direction: RepDirection,
    pub weights: ScoreWeights,
    pub muscles: MuscleMap,
}

impl ExerciseDefinition {
    pub fn counts_reps(&self) -> bool {
        self.rep_joint.is_some()
    }
}

/// Statisk register, bygget én gang ved første oppslag.
pub static EXERCISES: Lazy<Vec<ExerciseDefinition>> = Lazy::new(|| {
    vec![
        ExerciseDefinition {
            id: ExerciseId::Squat,
            name: "Squat",
            instruction: "Stand feet shoulder-width apart. Bend knees to 90°. Keep torso upright.",
            tips: &["Face camera at full body distance", "Point toes slightly outward", "Keep chest up, core tight"],
            rep_joint: Some(AngleName::LeftKnee),
            rep_down_threshold: 110.0,
            rep_up_threshold: 160.0,
            rep_direction: RepDirection::Standard,
            weights: ScoreWeights::new(0.40, 0.35, 0.25),
            muscles: MuscleMap { torso: 0.3, left_leg: 0.9, right_leg: 0.9, glutes: 0.8, ..Default::default() },
        },
        ExerciseDefinition {
            id: ExerciseId::Pushup,
            name: "Push-Up",
            instruction: "Keep body in straight line. Lower until elbows reach 90°. Full range.",
            tips: &["Hands wider than shoulders", "Squeeze glutes and core", "Look at floor 30cm ahead"],
            rep_joint: Some(AngleName::LeftElbow),
            rep_down_threshold: 110.0,
            rep_up_threshold: 155.0,
            rep_direction: RepDirection::Standard,
            weights: ScoreWeights::new(0.5, 0.5, 0.0),
            muscles: MuscleMap { torso: 0.6, left_arm: 0.9, right_arm: 0.9, ..Default::default() },
        },
        ExerciseDefinition {
            id: ExerciseId::Lunge,
            name: "Lunge",
            instruction: "Step forward. Both knees at 90°. Front knee over ankle.",
            tips: &["Keep torso tall", "Front knee tracks second toe", "Push through front heel"],
            rep_joint: Some(AngleName::RightKnee),
            rep_down_threshold: 110.0,
            rep_up_threshold: 160.0,
            rep_direction: RepDirection::Standard,
            weights: ScoreWeights::new(0.40, 0.35, 0.25),
            muscles: MuscleMap { torso: 0.2, left_leg: 0.85, right_leg: 0.85, glutes: 0.6, ..Default::default() },
        },
        ExerciseDefinition {
            id: ExerciseId::Plank,
            name: "Plank",
            instruction: "Straight line head to heels. Engage core. Hold position.",
            tips: &["Press floor away", "Neutral spine", "Breathe steadily"],
            rep_joint: None,
            rep_down_threshold: 0.0,
            rep_up_threshold: 0.0,
            rep_direction: RepDirection::Standard,
            weights: ScoreWeights::new(0.7, 0.3, 0.0),
            muscles: MuscleMap {
                torso: 0.95,
                left_arm: 0.4,
                right_arm: 0.4,
                left_leg: 0.3,
                right_leg: 0.3,
                glutes: 0.0,
            },
        },
        ExerciseDefinition {
            id: ExerciseId::BicepCurl,
            name: "Bicep Curl",
            instruction: "Elbows close to torso. Full range. Controlled descent.",
            tips: &["Don't swing body", "Supinate wrist on the way up", "Squeeze at the top"],
            rep_joint: Some(AngleName::LeftElbow),
            // reversert: "down" = strakt arm, "up" = krummet
            rep_down_threshold: 130.0,
            rep_up_threshold: 50.0,
            rep_direction: RepDirection::Reversed,
            weights: ScoreWeights::new(0.65, 0.35, 0.0),
            muscles: MuscleMap { torso: 0.1, left_arm: 0.95, right_arm: 0.95, ..Default::default() },
        },
        ExerciseDefinition {
            id: ExerciseId::ShoulderPress,
            name: "Shoulder Press",
            instruction: "Press overhead to full extension. Elbows 90° at start.",
            tips: &["Core tight", "Full lockout at top", "Control descent"],
            rep_joint: Some(AngleName::LeftElbow),
            rep_down_threshold: 100.0,
            rep_up_threshold: 155.0,
            rep_direction: RepDirection::Standard,
            weights: ScoreWeights::new(1.0, 0.0, 0.0),
            muscles: MuscleMap { torso: 0.5, left_arm: 0.8, right_arm: 0.8, ..Default::default() },
        },
        ExerciseDefinition {
            id: ExerciseId::Deadlift,
            name: "Deadlift",
            instruction: "Hip hinge. Bar close to body. Neutral spine throughout.",
            tips: &["Brace core before lifting", "Drive hips forward", "Bar over mid-foot"],
            rep_joint: Some(AngleName::LeftHip),
            rep_down_threshold: 70.0,
            rep_up_threshold: 155.0,
            rep_direction: RepDirection::Standard,
            weights: ScoreWeights::new(1.0, 0.0, 0.0),
            muscles: MuscleMap { torso: 0.8, left_leg: 0.7, right_leg: 0.7, glutes: 0.9, ..Default::default() },
        },
    ]
});

/// Oppslag på streng-id (fra UI / lagrede data).
pub fn lookup(id: &str) -> Result<&'static ExerciseDefinition, EngineError> {
    Ok(id.parse::<ExerciseId>()?.definition())
}
