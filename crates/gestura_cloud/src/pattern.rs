//! Procedural target shapes
//!
//! [`generate`] is pure: given a pattern, a count, and a uniform source it
//! returns the reference point set. Results are deterministic only up to the
//! supplied `Rng`; seed it for reproducible clouds.

use std::f32::consts::PI;

use rand::Rng;
use serde::{Serialize, Deserialize};

use gestura_math::Vec3;

/// Radius of the sphere pattern.
const SPHERE_RADIUS: f32 = 10.0;
/// Full side length of the cube pattern.
const CUBE_SIZE: f32 = 15.0;
/// Ring pattern: inner radius and radial thickness of the annulus.
const RING_INNER: f32 = 8.0;
const RING_THICKNESS: f32 = 4.0;
/// Ring pattern: half-height of the extrusion along Y.
const RING_HALF_HEIGHT: f32 = 1.0;
/// Overall scale of the heart pattern.
const HEART_SCALE: f32 = 0.8;

/// The selectable target shapes, exactly one active at a time.
///
/// Serialized names are the UI vocabulary; `love` is kept as an alias for
/// [`PatternKind::Heart`] to match the original front-end's button values.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatternKind {
    #[default]
    Sphere,
    Cube,
    Ring,
    #[serde(alias = "love")]
    Heart,
}

/// Generate `count` reference points for `kind`.
///
/// `count == 0` yields an empty set; there is no other failure mode.
pub fn generate<R: Rng + ?Sized>(kind: PatternKind, count: usize, rng: &mut R) -> Vec<Vec3> {
    let mut points = Vec::with_capacity(count);
    for _ in 0..count {
        points.push(match kind {
            PatternKind::Sphere => sphere_point(rng),
            PatternKind::Cube => cube_point(rng),
            PatternKind::Ring => ring_point(rng),
            PatternKind::Heart => heart_point(rng),
        });
    }
    points
}

/// Uniform point inside a ball of radius [`SPHERE_RADIUS`].
///
/// Radius is `R * cbrt(u)`, not `R * u` — the cube root is what makes the
/// volumetric density uniform instead of center-biased.
fn sphere_point<R: Rng + ?Sized>(rng: &mut R) -> Vec3 {
    let r = SPHERE_RADIUS * rng.gen::<f32>().cbrt();
    let theta = rng.gen::<f32>() * 2.0 * PI;
    let phi = (2.0 * rng.gen::<f32>() - 1.0).acos();

    Vec3::new(
        r * phi.sin() * theta.cos(),
        r * phi.sin() * theta.sin(),
        r * phi.cos(),
    )
}

/// Independent uniform coordinates in `[-CUBE_SIZE/2, CUBE_SIZE/2]`.
fn cube_point<R: Rng + ?Sized>(rng: &mut R) -> Vec3 {
    Vec3::new(
        (rng.gen::<f32>() - 0.5) * CUBE_SIZE,
        (rng.gen::<f32>() - 0.5) * CUBE_SIZE,
        (rng.gen::<f32>() - 0.5) * CUBE_SIZE,
    )
}

/// Annulus in the XZ plane, extruded along Y.
fn ring_point<R: Rng + ?Sized>(rng: &mut R) -> Vec3 {
    let r = RING_INNER + rng.gen::<f32>() * RING_THICKNESS;
    let theta = rng.gen::<f32>() * 2.0 * PI;

    Vec3::new(
        r * theta.cos(),
        (rng.gen::<f32>() - 0.5) * 2.0 * RING_HALF_HEIGHT,
        r * theta.sin(),
    )
}

/// Volumetric extrusion of the 2D heart curve.
///
/// Profile: `hx = 16 sin³u`, `hy = 13cos u − 5cos 2u − 2cos 3u − cos 4u`,
/// modulated by `sin v` with depth `6 cos v`. This is a deliberately cheap
/// construction, not a closed surface; the density pile-up near the cusp is
/// part of the look and stays.
fn heart_point<R: Rng + ?Sized>(rng: &mut R) -> Vec3 {
    let u = rng.gen::<f32>() * 2.0 * PI;
    let v = rng.gen::<f32>() * PI;

    let hx = 16.0 * u.sin().powi(3);
    let hy = 13.0 * u.cos() - 5.0 * (2.0 * u).cos() - 2.0 * (3.0 * u).cos() - (4.0 * u).cos();

    Vec3::new(
        HEART_SCALE * hx * v.sin(),
        HEART_SCALE * hy * v.sin(),
        HEART_SCALE * 6.0 * v.cos(),
    )
}
