//! Gestura - hand-gesture driven point cloud
//!
//! The core of a camera-controlled particle installation: an external
//! detector supplies hand landmarks, [`gestura_vision`] turns them into a
//! normalized gesture signal, and [`gestura_cloud`] maps the smoothed signal
//! onto a point cloud's scale, dispersion, rotation, and color. This crate
//! adds configuration loading and the frame loop that ties them to an
//! external renderer.

pub mod config;
pub mod frame;

pub use frame::{FrameLoop, Renderer};

// Re-export the member crates for consumers of the library.
pub use gestura_cloud as cloud;
pub use gestura_math as math;
pub use gestura_vision as vision;
