use serde::{Deserialize, Serialize};

/// Antall punkter i skjelett-topologien (33-punkts pose-modell).
pub const LANDMARK_COUNT: usize = 33;

/// Faste joint-id-er i 33-punkts topologien. Kun punktene analysen bruker er navngitt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum Joint {
    Nose = 0,
    LeftShoulder = 11,
    RightShoulder = 12,
    LeftElbow = 13,
    RightElbow = 14,
    LeftWrist = 15,
    RightWrist = 16,
    LeftHip = 23,
    RightHip = 24,
    LeftKnee = 25,
    RightKnee = 26,
    LeftAnkle = 27,
    RightAnkle = 28,
    LeftHeel = 29,
    RightHeel = 30,
    LeftFootIndex = 31,
    RightFootIndex = 32,
}

impl Joint {
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// 2D-punkt. For landmarks er koordinatene normalisert til [0,1]×[0,1].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euklidsk avstand
    #[inline]
    pub fn distance(self, other: Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Ett sporet nøkkelpunkt. Eies av `Skeleton` og endres aldri etter opprettelse.
pub type Landmark = Point;

/// Alle landmarks for én frame, indeksert på joint-id.
/// `None` = punktet mangler (okklusjon / utenfor bildet).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<Option<Landmark>>", into = "Vec<Option<Landmark>>")]
pub struct Skeleton {
    landmarks: Vec<Option<Landmark>>,
}

impl Skeleton {
    /// Tar imot opptil 33 punkter; overskytende ignoreres.
    pub fn new(mut landmarks: Vec<Option<Landmark>>) -> Self {
        landmarks.truncate(LANDMARK_COUNT);
        Self { landmarks }
    }

    /// Bygger et skjelett der kun de oppgitte punktene finnes.
    pub fn from_points(points: &[(Joint, Point)]) -> Self {
        let mut landmarks = vec![None; LANDMARK_COUNT];
        for (joint, p) in points {
            landmarks[joint.index()] = Some(*p);
        }
        Self { landmarks }
    }

    pub fn len(&self) -> usize {
        self.landmarks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.landmarks.iter().all(Option::is_none)
    }

    /// Oppslag på ett punkt. Ikke-finitte koordinater regnes som manglende.
    pub fn point(&self, joint: Joint) -> Option<Point> {
        self.landmarks
            .get(joint.index())
            .copied()
            .flatten()
            .filter(|p| p.is_finite())
    }

    /// Henter alle påkrevde punkter, eller `None` hvis minst ett mangler.
    pub fn require<const N: usize>(&self, joints: [Joint; N]) -> Option<[Point; N]> {
        let mut out = [Point::default(); N];
        for (slot, joint) in out.iter_mut().zip(joints) {
            *slot = self.point(joint)?;
        }
        Some(out)
    }
}

impl From<Vec<Option<Landmark>>> for Skeleton {
    fn from(landmarks: Vec<Option<Landmark>>) -> Self {
        Self::new(landmarks)
    }
}

impl From<Skeleton> for Vec<Option<Landmark>> {
    fn from(skeleton: Skeleton) -> Self {
        skeleton.landmarks
    }
}
