//! Point-cloud core for the gestura engine
//!
//! This crate owns the geometry side of the gesture-to-geometry mapping:
//!
//! - [`PatternKind`] - the selectable target shapes
//! - [`generate`] - pure procedural generation of reference point sets
//! - [`Color`] - RGB color with `#rrggbb` parsing for the UI collaborator
//! - [`PointCloud`] - fixed-size reference/live/color buffers with dirty
//!   tracking for renderer re-upload
//! - [`ParticleField`] - the per-frame transformation driven by
//!   [`GestureSample`](gestura_vision::GestureSample) readings
//! - [`FieldTuning`] - the tuning constants (smoothing coefficient, scale
//!   range, noise gain, idle motion), loadable from configuration

mod pattern;
mod color;
mod cloud;
mod field;

pub use pattern::{PatternKind, generate};
pub use color::{Color, ColorParseError};
pub use cloud::{PointCloud, CloudDirty};
pub use field::{ParticleField, FieldTuning};

// Re-export commonly used types for convenience
pub use gestura_math::Vec3;
pub use gestura_vision::GestureSample;
