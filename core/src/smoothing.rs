use std::collections::VecDeque;

/// Glidende snitt over de siste `window` vinklene. `window <= 1` = ingen filtrering
/// (rå vinkel per frame, som er standard for rep-telling).
#[derive(Debug, Clone)]
pub struct AngleSmoother {
    window: usize,
    buf: VecDeque<f64>,
}

impl AngleSmoother {
    pub fn new(window: usize) -> Self {
        let window = window.max(1);
        Self { window, buf: VecDeque::with_capacity(window) }
    }

    pub fn window(&self) -> usize {
        self.window
    }

    /// Legger til en ny vinkel og returnerer filtrert verdi.
    pub fn push(&mut self, angle: f64) -> f64 {
        if self.window == 1 {
            return angle;
        }
        if self.buf.len() == self.window {
            self.buf.pop_front();
        }
        self.buf.push_back(angle);
        self.buf.iter().sum::<f64>() / self.buf.len() as f64
    }

    pub fn clear(&mut self) {
        self.buf.clear();
    }
}

impl Default for AngleSmoother {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn passthrough_when_window_is_one() {
        let mut s = AngleSmoother::new(1);
        assert_eq!(s.push(170.0), 170.0);
        assert_eq!(s.push(95.0), 95.0);
    }

    #[test]
    fn spike_is_damped() {
        let mut s = AngleSmoother::new(3);
        s.push(170.0);
        s.push(170.0);
        let v = s.push(80.0); // enkelt-frame støy
        assert!(v > 110.0, "spike should not cross the down threshold, got {v}");
    }

    #[test]
    fn zero_window_is_treated_as_one() {
        let s = AngleSmoother::new(0);
        assert_eq!(s.window(), 1);
    }
}
