//! The per-frame gesture control signal

/// Normalized gesture reading for one camera frame.
///
/// `present == false` means "signal absent", not "signal zero": the consumer
/// decays toward its defaults instead of treating the fields as data. The
/// remaining fields are only meaningful when `present` is true.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureSample {
    /// Whether a hand was detected this frame.
    pub present: bool,
    /// Hand openness in `[0,1]` (0 = fist, 1 = fully open).
    pub openness: f32,
    /// Wrist position in normalized screen space `[0,1]²`.
    pub position: Option<[f32; 2]>,
    /// In-plane roll of the hand about the camera axis, radians in `(-π,π]`.
    pub roll: Option<f32>,
}

impl GestureSample {
    /// The "no hand this frame" sample.
    pub const ABSENT: Self = Self {
        present: false,
        openness: 0.0,
        position: None,
        roll: None,
    };
}

impl Default for GestureSample {
    fn default() -> Self {
        Self::ABSENT
    }
}
