//! Seeded star-shaped polygons for tests, benches and demos.
//!
//! Vertices sit at sorted, jittered angles around `center`, each at its own
//! jittered radius. Sorting the angles keeps the boundary simple and
//! counter-clockwise. With at least four sides no angular gap reaches π, so
//! `center` is strictly interior.
//!
//! A [`DrawKey`] names one polygon: the same key and config always give the
//! same vertices, and neighbouring indices under one seed are unrelated.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::point::Point;
use crate::shape::Shape;

/// How many vertices a drawn polygon gets. Counts below 3 are raised to 3.
#[derive(Clone, Copy, Debug)]
pub enum Sides {
    Exactly(usize),
    /// Inclusive range, drawn uniformly.
    Between(usize, usize),
}

impl Sides {
    fn draw<R: Rng>(self, rng: &mut R) -> usize {
        match self {
            Sides::Exactly(n) => n.max(3),
            Sides::Between(lo, hi) => {
                let lo = lo.max(3);
                rng.gen_range(lo..=hi.max(lo))
            }
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct StarCfg {
    pub sides: Sides,
    pub center: Point,
    /// Nominal distance from `center` to a vertex.
    pub radius: f64,
    /// Each radius is scaled by `1 + u`, `|u| <= radius_jitter` (at most 0.95).
    pub radius_jitter: f64,
    /// Angle offsets as a share of the even spacing `2π / n` (at most 0.49).
    pub angle_jitter: f64,
    /// Rotate the whole polygon by a random angle.
    pub spin: bool,
}

impl Default for StarCfg {
    fn default() -> Self {
        Self {
            sides: Sides::Exactly(12),
            center: Point::default(),
            radius: 1.0,
            radius_jitter: 0.25,
            angle_jitter: 0.3,
            spin: true,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DrawKey {
    pub seed: u64,
    pub index: u64,
}

const GOLDEN_GAMMA: u64 = 0x9e37_79b9_7f4a_7c15;

fn splitmix(z: u64) -> u64 {
    let z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    let z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    z ^ (z >> 31)
}

impl DrawKey {
    fn rng(self) -> StdRng {
        let index = splitmix(self.index.wrapping_add(GOLDEN_GAMMA));
        StdRng::seed_from_u64(splitmix(self.seed ^ index))
    }
}

/// Draw the star polygon named by `key`.
pub fn draw_star_polygon(cfg: StarCfg, key: DrawKey) -> Shape {
    use std::f64::consts::TAU;

    let mut rng = key.rng();
    let n = cfg.sides.draw(&mut rng);
    let spacing = TAU / n as f64;
    let wobble = cfg.angle_jitter.clamp(0.0, 0.49);
    let spread = cfg.radius_jitter.clamp(0.0, 0.95);
    let radius = cfg.radius.max(1e-9);
    let offset = if cfg.spin { rng.gen::<f64>() * TAU } else { 0.0 };

    let mut angles: Vec<f64> = (0..n)
        .map(|k| {
            let u = rng.gen::<f64>() * 2.0 - 1.0;
            offset + k as f64 * spacing + u * wobble * spacing
        })
        .collect();
    angles.sort_by(f64::total_cmp);
    angles
        .into_iter()
        .map(|theta| {
            let r = radius * (1.0 + (rng.gen::<f64>() * 2.0 - 1.0) * spread);
            let (sin, cos) = theta.sin_cos();
            Point::new(cfg.center.x + r * cos, cfg.center.y + r * sin)
        })
        .collect()
}
