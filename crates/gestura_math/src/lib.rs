//! Math primitives for the gestura engine
//!
//! ## Core Types
//!
//! - [`Vec3`] - 3D vector with x, y, z components, layout-compatible with
//!   GPU vertex buffers
//! - [`ExpSmoother`] - fixed-coefficient exponential low-pass filter
//!
//! The free function [`approach`] is the single smoothing step used
//! throughout the engine for jitter suppression.

mod vec3;
pub mod smoothing;

pub use vec3::Vec3;
pub use smoothing::{approach, ExpSmoother};
