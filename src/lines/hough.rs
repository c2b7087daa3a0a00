//! Progressive probabilistic Hough transform returning segment endpoints.
//!
//! Parameter space uses a 1 px rho step and a 1° theta step. Edge pixels are
//! visited in a seeded pseudo-random order; each one votes for every theta.
//! When its strongest accumulator cell reaches the vote threshold, the line
//! through the pixel is walked in both directions in 16.16 fixed point,
//! bridging at most `max_line_gap` missing pixels. The walked pixels leave the
//! pool, and when the segment is long enough (x or y extent) the votes already
//! cast by its pixels are withdrawn and the segment is emitted.
//!
//! The same seed and edge map always produce the same segments.
use super::segment::LineSegment;
use crate::edges::EdgeMap;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const NUM_ANGLES: usize = 180;
const SHIFT: u32 = 16;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HoughOptions {
    pub vote_threshold: u32,
    pub min_line_length: u32,
    pub max_line_gap: u32,
    pub rng_seed: u64,
}

struct Accumulator {
    trig: Vec<(f32, f32)>,
    num_rho: usize,
    rho_offset: i64,
    cells: Vec<i32>,
}

impl Accumulator {
    fn new(width: usize, height: usize) -> Self {
        let num_rho = (width + height) * 2 + 1;
        let trig = (0..NUM_ANGLES)
            .map(|n| {
                let theta = (n as f64).to_radians();
                (theta.cos() as f32, theta.sin() as f32)
            })
            .collect();
        Self {
            trig,
            num_rho,
            rho_offset: (num_rho as i64 - 1) / 2,
            cells: vec![0; NUM_ANGLES * num_rho],
        }
    }

    #[inline]
    fn cell(&self, x: i64, y: i64, n: usize) -> usize {
        let (c, s) = self.trig[n];
        let r = (x as f32 * c + y as f32 * s).round() as i64 + self.rho_offset;
        n * self.num_rho + r as usize
    }

    /// Add the votes of `(x, y)`; returns the strongest theta index and its count.
    fn vote(&mut self, x: i64, y: i64, threshold: i32) -> (usize, i32) {
        let mut max_val = threshold - 1;
        let mut max_n = 0;
        for n in 0..NUM_ANGLES {
            let i = self.cell(x, y, n);
            self.cells[i] += 1;
            if self.cells[i] > max_val {
                max_val = self.cells[i];
                max_n = n;
            }
        }
        (max_n, max_val)
    }

    fn unvote(&mut self, x: i64, y: i64) {
        for n in 0..NUM_ANGLES {
            let i = self.cell(x, y, n);
            self.cells[i] -= 1;
        }
    }
}

/// Fixed-point stepper along the line whose normal has direction `(cos, sin)`.
#[derive(Clone, Copy)]
struct Walk {
    x_major: bool,
    x0: i64,
    y0: i64,
    dx: i64,
    dy: i64,
}

impl Walk {
    fn new(px: i64, py: i64, cos_t: f32, sin_t: f32) -> Self {
        let (a, b) = (-sin_t, cos_t);
        let half = 1i64 << (SHIFT - 1);
        if a.abs() > b.abs() {
            Self {
                x_major: true,
                x0: px,
                y0: (py << SHIFT) + half,
                dx: if a > 0.0 { 1 } else { -1 },
                dy: (b as f64 * (1i64 << SHIFT) as f64 / a.abs() as f64).round() as i64,
            }
        } else {
            Self {
                x_major: false,
                x0: (px << SHIFT) + half,
                y0: py,
                dx: (a as f64 * (1i64 << SHIFT) as f64 / b.abs() as f64).round() as i64,
                dy: if b > 0.0 { 1 } else { -1 },
            }
        }
    }

    /// Pixels visited walking forward (`reverse == false`) or backward.
    fn pixels(self, reverse: bool) -> impl Iterator<Item = (i64, i64)> {
        let sign = if reverse { -1 } else { 1 };
        let (dx, dy) = (self.dx * sign, self.dy * sign);
        (0i64..).map(move |step| {
            let x = self.x0 + dx * step;
            let y = self.y0 + dy * step;
            if self.x_major {
                (x, y >> SHIFT)
            } else {
                (x >> SHIFT, y)
            }
        })
    }
}

pub fn detect_segments(edges: &EdgeMap, options: &HoughOptions) -> Vec<LineSegment> {
    let (w, h) = (edges.width(), edges.height());
    if w == 0 || h == 0 {
        return Vec::new();
    }
    let inside = |x: i64, y: i64| x >= 0 && y >= 0 && x < w as i64 && y < h as i64;
    let index = |x: i64, y: i64| y as usize * w + x as usize;

    let threshold = options.vote_threshold.max(1) as i32;
    let min_length = options.min_line_length as i64;
    let max_gap = options.max_line_gap as i64;

    let mut accum = Accumulator::new(w, h);
    let mut mask = edges.as_slice().to_vec();
    let mut voted = vec![false; w * h];
    let mut points: Vec<(i64, i64)> = edges
        .iter_set()
        .map(|(x, y)| (x as i64, y as i64))
        .collect();
    let mut rng = StdRng::seed_from_u64(options.rng_seed);
    let mut segments = Vec::new();

    let mut remaining = points.len();
    while remaining > 0 {
        let pick = rng.gen_range(0..remaining);
        let (px, py) = points[pick];
        points[pick] = points[remaining - 1];
        remaining -= 1;

        if !mask[index(px, py)] {
            continue;
        }
        let (theta, votes) = accum.vote(px, py, threshold);
        voted[index(px, py)] = true;
        if votes < threshold {
            continue;
        }

        let (cos_t, sin_t) = accum.trig[theta];
        let walk = Walk::new(px, py, cos_t, sin_t);

        let mut ends = [(px, py); 2];
        for (k, end) in ends.iter_mut().enumerate() {
            let mut gap = 0;
            for (x, y) in walk.pixels(k == 1) {
                if !inside(x, y) {
                    break;
                }
                if mask[index(x, y)] {
                    gap = 0;
                    *end = (x, y);
                } else {
                    gap += 1;
                    if gap > max_gap {
                        break;
                    }
                }
            }
        }

        let good = (ends[1].0 - ends[0].0).abs() >= min_length
            || (ends[1].1 - ends[0].1).abs() >= min_length;

        for (k, &end) in ends.iter().enumerate() {
            for (x, y) in walk.pixels(k == 1) {
                if !inside(x, y) {
                    break;
                }
                let i = index(x, y);
                if mask[i] {
                    if good && voted[i] {
                        accum.unvote(x, y);
                    }
                    mask[i] = false;
                }
                if (x, y) == end {
                    break;
                }
            }
        }

        if good {
            segments.push(LineSegment::new(
                ends[0].0 as i32,
                ends[0].1 as i32,
                ends[1].0 as i32,
                ends[1].1 as i32,
            ));
        }
    }

    segments
}
