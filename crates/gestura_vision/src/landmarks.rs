//! Hand landmark frames
//!
//! The detector collaborator produces 21 normalized (x,y,z) points per hand,
//! indexed in the MediaPipe hand topology. [`HandLandmarks`] validates the
//! count once at the boundary so everything downstream can index freely.

use gestura_math::Vec3;

/// Number of landmarks in a hand frame.
pub const LANDMARK_COUNT: usize = 21;

/// Wrist landmark index.
pub const WRIST: usize = 0;

/// Index-finger MCP (base knuckle) landmark index.
pub const INDEX_MCP: usize = 5;

/// Fingertip landmark indices: index, middle, ring, pinky.
pub const FINGERTIPS: [usize; 4] = [8, 12, 16, 20];

/// One detector frame: exactly 21 normalized landmark points.
///
/// Coordinates are normalized screen space, x and y in `[0,1]`, z a relative
/// depth in the same scale.
#[derive(Clone, Debug, PartialEq)]
pub struct HandLandmarks {
    points: [Vec3; LANDMARK_COUNT],
}

impl HandLandmarks {
    /// Build a landmark frame from a slice of points.
    ///
    /// Any length other than 21 is a contract violation by the detector and
    /// returns an error rather than a degraded frame.
    pub fn from_slice(points: &[Vec3]) -> Result<Self, LandmarkError> {
        let points: [Vec3; LANDMARK_COUNT] = points
            .try_into()
            .map_err(|_| LandmarkError::WrongCount { got: points.len() })?;
        Ok(Self { points })
    }

    /// Landmark point by index (panics past 20, as slice indexing does).
    #[inline]
    pub fn point(&self, index: usize) -> Vec3 {
        self.points[index]
    }

    /// The wrist landmark.
    #[inline]
    pub fn wrist(&self) -> Vec3 {
        self.points[WRIST]
    }

    /// All points as a slice.
    #[inline]
    pub fn points(&self) -> &[Vec3] {
        &self.points
    }
}

/// Error for malformed landmark input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LandmarkError {
    /// The detector supplied a frame with the wrong number of points.
    WrongCount { got: usize },
}

impl std::fmt::Display for LandmarkError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LandmarkError::WrongCount { got } => {
                write!(f, "expected {} hand landmarks, got {}", LANDMARK_COUNT, got)
            }
        }
    }
}

impl std::error::Error for LandmarkError {}
