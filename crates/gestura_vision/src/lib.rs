//! Vision-side types for the gestura engine
//!
//! This crate sits between the external hand-landmark detector and the
//! particle field:
//!
//! - [`HandLandmarks`] - a validated frame of 21 normalized landmark points
//! - [`GestureEstimator`] - openness / position / roll heuristics
//! - [`GestureSample`] - the normalized control signal, one per camera frame
//! - [`SampleSlot`] - single-slot, last-value-wins hand-off from the
//!   asynchronous detector to the frame loop
//!
//! The detector itself (camera capture + ML model) is an external
//! collaborator; it delivers either exactly 21 landmarks or "no hand" for
//! each frame.

mod landmarks;
mod estimator;
mod sample;
mod slot;

pub use landmarks::{HandLandmarks, LandmarkError, LANDMARK_COUNT, WRIST, INDEX_MCP, FINGERTIPS};
pub use estimator::{GestureEstimator, OpennessBounds};
pub use sample::GestureSample;
pub use slot::SampleSlot;
