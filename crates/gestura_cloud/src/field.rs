//! The gesture-driven particle field
//!
//! [`ParticleField`] owns the live [`PointCloud`] and the motion state
//! (smoothed expansion, rotation, base color) and applies the per-frame
//! transformation driven by [`GestureSample`] readings. All mutation happens
//! through [`set_pattern`](ParticleField::set_pattern),
//! [`set_color`](ParticleField::set_color) and
//! [`update`](ParticleField::update); there are no other mutation paths.

use std::f32::consts::{FRAC_PI_2, PI};

use rand::{Rng, SeedableRng};
use rand::rngs::StdRng;
use serde::{Serialize, Deserialize};

use gestura_math::{approach, ExpSmoother, Vec3};
use gestura_vision::GestureSample;

use crate::cloud::{CloudDirty, PointCloud};
use crate::color::Color;
use crate::pattern::{generate, PatternKind};

/// Added to the raw hand roll so an upright hand maps to zero roll
/// (fingers-up reads ~ -π/2 from atan2).
const ROLL_OFFSET: f32 = FRAC_PI_2;

/// Tuning constants for the field's motion response.
///
/// `smoothing` is the single most consequential constant here: the
/// exponential low-pass coefficient applied to expansion and rotation every
/// tick, chosen for a ~60 Hz drive rate.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldTuning {
    /// Exponential smoothing coefficient, in (0,1).
    pub smoothing: f32,
    /// Per-point scale at zero expansion.
    pub scale_min: f32,
    /// Scale added at full expansion (scale spans `[scale_min, scale_min + scale_range]`).
    pub scale_range: f32,
    /// Per-coordinate jitter amplitude at full expansion ("dispersion").
    pub noise_gain: f32,
    /// Idle yaw rate, radians per frame.
    pub idle_spin: f32,
    /// Idle pitch wobble amplitude, radians.
    pub wobble_amplitude: f32,
    /// Idle pitch wobble frequency, radians per second of wall-clock time.
    pub wobble_frequency: f32,
    /// Multiplicative per-frame roll decay toward upright while idle.
    pub roll_decay: f32,
    /// Upper bound of the uniform per-channel color jitter.
    pub color_jitter: f32,
}

impl Default for FieldTuning {
    fn default() -> Self {
        Self {
            smoothing: 0.1,
            scale_min: 0.2,
            scale_range: 2.3,
            noise_gain: 0.1,
            idle_spin: 0.002,
            wobble_amplitude: 0.1,
            wobble_frequency: 1.0,
            roll_decay: 0.95,
            color_jitter: 0.2,
        }
    }
}

/// How the rotation is driven this frame.
///
/// Two-state machine: a present hand with a known position tracks it; no
/// hand (or no position) falls back to the idle auto-rotation.
#[derive(Clone, Copy, Debug, PartialEq)]
enum Drive {
    /// Rotation targets derived from the hand, smoothed toward each tick.
    Tracking {
        yaw: f32,
        pitch: f32,
        roll: Option<f32>,
    },
    /// Slow spin, gentle wobble, roll decaying to upright.
    Idle,
}

impl Drive {
    fn classify(sample: &GestureSample) -> Self {
        match (sample.present, sample.position) {
            (true, Some([x, y])) => Drive::Tracking {
                // Amplified range: screen-space position maps onto ±2π
                yaw: (x - 0.5) * PI * 4.0,
                pitch: (y - 0.5) * PI * 4.0,
                roll: sample.roll.map(|r| r + ROLL_OFFSET),
            },
            _ => Drive::Idle,
        }
    }
}

/// The particle field: point cloud plus gesture-driven motion state.
pub struct ParticleField {
    cloud: PointCloud,
    pattern: PatternKind,
    expansion: ExpSmoother,
    rotation: Vec3,
    base_color: Color,
    tuning: FieldTuning,
    rng: StdRng,
}

impl ParticleField {
    /// Create a field with `count` particles in the given pattern.
    pub fn new(pattern: PatternKind, count: usize, base_color: Color, tuning: FieldTuning) -> Self {
        Self::with_rng(pattern, count, base_color, tuning, StdRng::from_entropy())
    }

    /// Create a field with a seeded RNG (reproducible generation and jitter).
    pub fn with_seed(
        pattern: PatternKind,
        count: usize,
        base_color: Color,
        tuning: FieldTuning,
        seed: u64,
    ) -> Self {
        Self::with_rng(pattern, count, base_color, tuning, StdRng::seed_from_u64(seed))
    }

    fn with_rng(
        pattern: PatternKind,
        count: usize,
        base_color: Color,
        tuning: FieldTuning,
        mut rng: StdRng,
    ) -> Self {
        let cloud = PointCloud::new(generate(pattern, count, &mut rng));
        let mut field = Self {
            cloud,
            pattern,
            expansion: ExpSmoother::new(tuning.smoothing),
            rotation: Vec3::ZERO,
            base_color,
            tuning,
            rng,
        };
        field.repaint();
        field
    }

    /// Switch to a new target pattern.
    ///
    /// Regenerates the reference positions wholesale; expansion and rotation
    /// carry over so the shape morphs without a motion hitch.
    pub fn set_pattern(&mut self, kind: PatternKind) {
        log::debug!("pattern change: {:?} -> {:?}", self.pattern, kind);
        self.pattern = kind;
        let points = generate(kind, self.cloud.len(), &mut self.rng);
        self.cloud.replace_reference(points);
    }

    /// Set the base color and repaint every point.
    pub fn set_color(&mut self, color: Color) {
        log::debug!("base color change: {:?}", color);
        self.base_color = color;
        self.repaint();
    }

    /// Recompute displayed colors as base + per-channel jitter.
    ///
    /// Jitter is re-rolled on every call, purely for visual texture.
    fn repaint(&mut self) {
        let base = self.base_color;
        let jitter = self.tuning.color_jitter;
        let rng = &mut self.rng;
        for color in self.cloud.colors_mut() {
            *color = Color::new(
                base.r + rng.gen::<f32>() * jitter,
                base.g + rng.gen::<f32>() * jitter,
                base.b + rng.gen::<f32>() * jitter,
            );
        }
    }

    /// Apply one frame of gesture input.
    ///
    /// Total over all valid samples, including absent ones (which decay
    /// expansion toward 0 and hand rotation to the idle drive).
    /// `elapsed_secs` is wall-clock time since the loop started, used only
    /// by the idle wobble.
    pub fn update(&mut self, sample: GestureSample, elapsed_secs: f32) {
        let target = if sample.present { sample.openness } else { 0.0 };
        let expansion = self.expansion.step(target);

        // Rewrite the whole live buffer: reference * scale + dispersion
        // jitter that grows with expansion.
        let scale = self.tuning.scale_min + expansion * self.tuning.scale_range;
        let noise_amp = expansion * self.tuning.noise_gain;
        let rng = &mut self.rng;
        for (reference, live) in self.cloud.transform_pairs() {
            let jitter = Vec3::new(
                noise_amp * (rng.gen::<f32>() - 0.5),
                noise_amp * (rng.gen::<f32>() - 0.5),
                noise_amp * (rng.gen::<f32>() - 0.5),
            );
            *live = *reference * scale + jitter;
        }

        let k = self.tuning.smoothing;
        match Drive::classify(&sample) {
            Drive::Tracking { yaw, pitch, roll } => {
                self.rotation.y = approach(self.rotation.y, yaw, k);
                self.rotation.x = approach(self.rotation.x, pitch, k);
                if let Some(roll) = roll {
                    self.rotation.z = approach(self.rotation.z, roll, k);
                }
            }
            Drive::Idle => {
                self.rotation.y += self.tuning.idle_spin;
                self.rotation.x = self.tuning.wobble_amplitude
                    * (elapsed_secs * self.tuning.wobble_frequency).sin();
                self.rotation.z *= self.tuning.roll_decay;
            }
        }
    }

    /// The point cloud buffers (positions, colors).
    #[inline]
    pub fn cloud(&self) -> &PointCloud {
        &self.cloud
    }

    /// Take and clear the cloud's dirty flags for renderer upload.
    pub fn take_dirty(&mut self) -> CloudDirty {
        self.cloud.take_dirty()
    }

    #[inline]
    pub fn pattern(&self) -> PatternKind {
        self.pattern
    }

    /// The low-pass-filtered openness driving the live scale factor.
    #[inline]
    pub fn expansion(&self) -> f32 {
        self.expansion.value()
    }

    /// Current rotation, (pitch, yaw, roll) about (x, y, z) in radians.
    #[inline]
    pub fn rotation(&self) -> Vec3 {
        self.rotation
    }

    #[inline]
    pub fn base_color(&self) -> Color {
        self.base_color
    }
}
