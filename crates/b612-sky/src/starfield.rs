//! Starfield: static star positions and pulse offsets.

use glam::Vec3;
use rand::Rng;
use serde::{Deserialize, Serialize};

use b612_core::constants::*;

/// The generated star dome, laid out as flat buffers so the frontend
/// can hand them straight to GPU attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Starfield {
    /// Star positions as packed xyz triples (3 floats per star).
    pub positions: Vec<f32>,
    /// One pulse phase offset per star, drawn from [0, STAR_PULSE_OFFSET_MAX).
    pub pulse_offsets: Vec<f32>,
    /// Radius of the sphere the stars sit on.
    pub radius: f32,
    /// Rendered point size.
    pub point_size: f32,
    /// Star tint, normalized RGB.
    pub color: [f32; 3],
}

impl Starfield {
    /// Generate `count` stars uniformly over a sphere of `radius`.
    ///
    /// Draws from the caller's RNG so the whole scene shares one seeded
    /// stream and stays reproducible.
    pub fn generate(count: usize, radius: f32, rng: &mut impl Rng) -> Self {
        let mut positions = Vec::with_capacity(count * 3);
        let mut pulse_offsets = Vec::with_capacity(count);

        for _ in 0..count {
            let p = random_sphere_point(radius, rng);
            positions.extend_from_slice(&[p.x, p.y, p.z]);
            pulse_offsets.push(rng.gen_range(0.0..STAR_PULSE_OFFSET_MAX));
        }

        Self {
            positions,
            pulse_offsets,
            radius,
            point_size: STAR_POINT_SIZE,
            color: STAR_COLOR,
        }
    }

    pub fn star_count(&self) -> usize {
        self.pulse_offsets.len()
    }

    /// Position of star `i`, unpacked from the flat buffer.
    pub fn position(&self, i: usize) -> Vec3 {
        Vec3::new(
            self.positions[i * 3],
            self.positions[i * 3 + 1],
            self.positions[i * 3 + 2],
        )
    }
}

/// Uniform random point on a sphere of the given radius.
///
/// Longitude uniform in [0, tau), cos(latitude) uniform in [-1, 1];
/// this avoids pole clustering.
fn random_sphere_point(radius: f32, rng: &mut impl Rng) -> Vec3 {
    let theta = rng.gen_range(0.0..std::f32::consts::TAU);
    let cos_phi: f32 = rng.gen_range(-1.0..=1.0);
    let sin_phi = (1.0 - cos_phi * cos_phi).sqrt();
    Vec3::new(
        radius * sin_phi * theta.cos(),
        radius * cos_phi,
        radius * sin_phi * theta.sin(),
    )
}
