use crate::models::Point;

// --- RoundTo trait (offentlig, brukt av aggregator og rapport) ---
pub trait RoundTo {
    fn round_to(self, dp: u32) -> f64;
}

impl RoundTo for f64 {
    #[inline]
    fn round_to(self, dp: u32) -> f64 {
        if dp == 0 { return self.round(); }
        let factor = 10_f64.powi(dp as i32);
        (self * factor).round() / factor
    }
}

/// Vinkel (grader, heltall 0–180) i toppunktet `b` for trekanten a–b–c.
///
/// Cosinussetningen på sidelengdene. Null-lengde på AB eller BC
/// (sammenfallende punkter, typisk manglende data) gir 0 i stedet for feil.
/// Argumentet til acos klemmes til [-1, 1]; avrundingsfeil kan ellers gi NaN.
pub fn calculate_angle(a: Point, b: Point, c: Point) -> u16 {
    let ab = a.distance(b);
    let bc = b.distance(c);
    let ac = a.distance(c);
    if ab == 0.0 || bc == 0.0 || !ab.is_finite() || !bc.is_finite() {
        return 0;
    }
    let cos = ((ab * ab + bc * bc - ac * ac) / (2.0 * ab * bc)).clamp(-1.0, 1.0);
    let deg = cos.acos().to_degrees().round_to(0);
    if deg.is_finite() { deg.clamp(0.0, 180.0) as u16 } else { 0 }
}

/// Snitt av to vinkler (kan gi ,5).
#[inline]
pub fn mean2(a: u16, b: u16) -> f64 {
    (f64::from(a) + f64::from(b)) / 2.0
}
