use crate::angle::normalize_half_turn_deg;

pub const ANGLE_BINS: usize = 180;
const BIN_WIDTH_DEG: f64 = 180.0 / ANGLE_BINS as f64;

/// Fixed 1° histogram over [0°, 180°); bin `i` covers `[i, i + 1)`.
#[derive(Clone, Debug)]
pub struct AngleHistogram {
    bins: [u32; ANGLE_BINS],
    total: u32,
}

impl Default for AngleHistogram {
    fn default() -> Self {
        Self::new()
    }
}

impl AngleHistogram {
    pub fn new() -> Self {
        Self {
            bins: [0; ANGLE_BINS],
            total: 0,
        }
    }

    pub fn accumulate(&mut self, angle_deg: f64) {
        if !angle_deg.is_finite() {
            return;
        }
        let angle = normalize_half_turn_deg(angle_deg);
        let idx = ((angle / BIN_WIDTH_DEG) as usize).min(ANGLE_BINS - 1);
        self.bins[idx] += 1;
        self.total += 1;
    }

    pub fn bins(&self) -> &[u32] {
        &self.bins
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Index of the fullest bin; ties resolve to the lowest angle.
    pub fn argmax(&self) -> Option<usize> {
        if self.is_empty() {
            return None;
        }
        let mut best_idx = None;
        let mut best_val = 0u32;
        for (i, &val) in self.bins.iter().enumerate() {
            if val > best_val {
                best_val = val;
                best_idx = Some(i);
            }
        }
        best_idx
    }

    pub fn bin_center(index: usize) -> f64 {
        (index as f64 + 0.5) * BIN_WIDTH_DEG
    }

    /// Centre of the fullest bin, `None` for an empty histogram.
    pub fn dominant(&self) -> Option<f64> {
        self.argmax().map(Self::bin_center)
    }
}
