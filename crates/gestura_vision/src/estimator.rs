//! Gesture estimation heuristics
//!
//! Converts a validated landmark frame into a [`GestureSample`]:
//!
//! * **Openness**: mean 3D distance from the wrist to the four fingertips,
//!   remapped linearly from empirical bounds to `[0,1]`. A heuristic proxy,
//!   not a learned classifier; the bounds are tunable constants.
//! * **Position**: the wrist (x,y), taken as-is. Smoothing happens
//!   downstream in the particle field, not here.
//! * **Roll**: `atan2` of the wrist → index-MCP vector.
//!
//! The estimator is stateless across frames; each estimate depends only on
//! that frame's landmarks.

use serde::{Serialize, Deserialize};

use crate::landmarks::{HandLandmarks, FINGERTIPS, INDEX_MCP};
use crate::sample::GestureSample;

/// Empirical wrist-to-fingertip distance bounds mapped onto openness 0..1.
///
/// In MediaPipe's normalized coordinates a fist averages ~0.15 and a fully
/// spread hand ~0.5, hand size and distance depending.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct OpennessBounds {
    /// Mean distance treated as fully closed.
    pub min: f32,
    /// Mean distance treated as fully open.
    pub max: f32,
}

impl Default for OpennessBounds {
    fn default() -> Self {
        Self { min: 0.2, max: 0.5 }
    }
}

/// Stateless landmark → gesture-sample estimator.
#[derive(Clone, Copy, Debug, Default)]
pub struct GestureEstimator {
    bounds: OpennessBounds,
}

impl GestureEstimator {
    pub fn new(bounds: OpennessBounds) -> Self {
        Self { bounds }
    }

    /// Estimate a gesture sample from one landmark frame.
    ///
    /// Hand absence is not expressed here; a frame with no hand never
    /// reaches the estimator, the caller publishes [`GestureSample::ABSENT`]
    /// instead.
    pub fn estimate(&self, landmarks: &HandLandmarks) -> GestureSample {
        let wrist = landmarks.wrist();

        let openness = self.openness(landmarks);

        let index_mcp = landmarks.point(INDEX_MCP);
        let roll = (index_mcp.y - wrist.y).atan2(index_mcp.x - wrist.x);

        GestureSample {
            present: true,
            openness,
            position: Some([wrist.x, wrist.y]),
            roll: Some(roll),
        }
    }

    /// How open the hand is, 0 (fist) to 1 (spread).
    fn openness(&self, landmarks: &HandLandmarks) -> f32 {
        let wrist = landmarks.wrist();
        let total: f32 = FINGERTIPS
            .iter()
            .map(|&tip| (landmarks.point(tip) - wrist).length())
            .sum();
        let avg = total / FINGERTIPS.len() as f32;

        let OpennessBounds { min, max } = self.bounds;
        ((avg - min) / (max - min)).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::landmarks::{LANDMARK_COUNT, WRIST};
    use gestura_math::Vec3;

    /// Synthetic hand: wrist at `origin`, every other landmark placed
    /// `reach` away along +y (fingers pointing down-screen).
    fn synthetic_hand(origin: Vec3, reach: f32) -> HandLandmarks {
        let mut points = vec![Vec3::new(origin.x, origin.y + reach, origin.z); LANDMARK_COUNT];
        points[WRIST] = origin;
        HandLandmarks::from_slice(&points).unwrap()
    }

    #[test]
    fn test_open_hand_openness_near_one() {
        let est = GestureEstimator::default();
        // Fingertips 0.55 from the wrist, past the open bound of 0.5
        let sample = est.estimate(&synthetic_hand(Vec3::new(0.5, 0.3, 0.0), 0.55));
        assert!(sample.present);
        assert!((sample.openness - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_closed_hand_openness_near_zero() {
        let est = GestureEstimator::default();
        // Fingertips 0.1 from the wrist, under the closed bound of 0.2
        let sample = est.estimate(&synthetic_hand(Vec3::new(0.5, 0.3, 0.0), 0.1));
        assert_eq!(sample.openness, 0.0);
    }

    #[test]
    fn test_openness_midpoint() {
        let est = GestureEstimator::default();
        // 0.35 is halfway between the 0.2 and 0.5 bounds
        let sample = est.estimate(&synthetic_hand(Vec3::ZERO, 0.35));
        assert!((sample.openness - 0.5).abs() < 1e-5);
    }

    #[test]
    fn test_position_is_wrist() {
        let est = GestureEstimator::default();
        let sample = est.estimate(&synthetic_hand(Vec3::new(0.25, 0.75, 0.0), 0.3));
        assert_eq!(sample.position, Some([0.25, 0.75]));
    }

    #[test]
    fn test_roll_fingers_down_is_half_pi() {
        let est = GestureEstimator::default();
        // Index MCP straight below the wrist in screen coords (+y down)
        let sample = est.estimate(&synthetic_hand(Vec3::new(0.5, 0.5, 0.0), 0.3));
        let roll = sample.roll.unwrap();
        assert!((roll - std::f32::consts::FRAC_PI_2).abs() < 1e-5);
    }

    #[test]
    fn test_custom_bounds() {
        let est = GestureEstimator::new(OpennessBounds { min: 0.0, max: 1.0 });
        let sample = est.estimate(&synthetic_hand(Vec3::ZERO, 0.25));
        assert!((sample.openness - 0.25).abs() < 1e-5);
    }
}
