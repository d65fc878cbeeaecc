//! Uniform unit-vector sampling by rejection.
//!
//! Candidates are drawn from the cube `[-1, 1]³` and rejected until one
//! lands inside the unit sphere, then normalized. Sampling the cube directly
//! and normalizing *without* rejection would clump results toward the cube's
//! corners; the rejection step is what makes the distribution uniform over
//! the sphere.
//!
//! The cube-to-sphere volume ratio puts the expected trial count at
//! `6/π ≈ 1.91`, so the unbounded loops terminate almost immediately in
//! practice. There is deliberately no iteration cap.
//!
//! The scalar source is an injected [`rand::Rng`], so callers control
//! determinism by seeding:
//!
//! ```
//! use rand::SeedableRng;
//! use rand::rngs::SmallRng;
//! use maquette::sampling;
//!
//! let mut rng = SmallRng::seed_from_u64(7);
//! let v = sampling::unit_sphere(&mut rng);
//! assert!((v.length() - 1.0).abs() < 1e-4);
//! ```

use glam::Vec3;
use rand::Rng;

/// Returns a uniformly distributed unit vector over the full sphere.
pub fn unit_sphere<R: Rng + ?Sized>(rng: &mut R) -> Vec3 {
    loop {
        let v = Vec3::new(
            rng.gen_range(-1.0..=1.0),
            rng.gen_range(-1.0..=1.0),
            rng.gen_range(-1.0..=1.0),
        );

        if v.length_squared() > 1.0 {
            continue;
        }

        return v.normalize();
    }
}

/// Returns a uniformly distributed unit vector over the closed hemisphere
/// oriented by `normal`: the result always satisfies
/// `normal.dot(result) >= 0`.
///
/// `normal` does not need to be normalized; only its direction matters.
pub fn unit_hemisphere<R: Rng + ?Sized>(rng: &mut R, normal: Vec3) -> Vec3 {
    loop {
        let v = Vec3::new(
            rng.gen_range(-1.0..=1.0),
            rng.gen_range(-1.0..=1.0),
            rng.gen_range(-1.0..=1.0),
        );

        if v.length_squared() > 1.0 {
            continue;
        }

        // Mirror-image candidates below the plane are rejected rather than
        // flipped, keeping the hemisphere distribution uniform.
        if normal.dot(v) < 0.0 {
            continue;
        }

        return v.normalize();
    }
}
