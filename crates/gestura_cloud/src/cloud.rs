//! Point cloud buffers
//!
//! A [`PointCloud`] is an arena of fixed-size buffers indexed by particle id:
//! reference (undeformed) positions, live (displayed) positions, and per-point
//! colors. All three have the same length from construction on. Pattern
//! switches replace the whole reference buffer in one swap, never
//! element-by-element, so a partially-updated shape can never be rendered.

use bitflags::bitflags;

use gestura_math::Vec3;
use crate::color::Color;

bitflags! {
    /// Which buffers changed since the renderer last consumed them
    ///
    /// Lets the external renderer re-upload only what it has to.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct CloudDirty: u8 {
        /// Live positions were rewritten.
        const POSITIONS = 1 << 0;
        /// Per-point colors were rewritten.
        const COLORS = 1 << 1;
    }
}

/// Fixed-size position and color buffers for one particle cloud.
pub struct PointCloud {
    reference: Vec<Vec3>,
    live: Vec<Vec3>,
    colors: Vec<Color>,
    dirty: CloudDirty,
}

impl PointCloud {
    /// Create a cloud from an initial reference point set.
    ///
    /// Live positions start equal to the reference; colors start white until
    /// the field recomputes them.
    pub fn new(reference: Vec<Vec3>) -> Self {
        let n = reference.len();
        Self {
            live: reference.clone(),
            colors: vec![Color::WHITE; n],
            reference,
            dirty: CloudDirty::all(),
        }
    }

    /// Number of particles (fixed for the cloud's lifetime).
    #[inline]
    pub fn len(&self) -> usize {
        self.reference.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.reference.is_empty()
    }

    /// The undeformed positions for the current pattern.
    #[inline]
    pub fn reference(&self) -> &[Vec3] {
        &self.reference
    }

    /// The displayed positions, rewritten wholesale each frame.
    #[inline]
    pub fn positions(&self) -> &[Vec3] {
        &self.live
    }

    /// The displayed per-point colors.
    #[inline]
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// Live positions as raw bytes for renderer upload.
    #[inline]
    pub fn position_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.live)
    }

    /// Colors as raw bytes for renderer upload.
    #[inline]
    pub fn color_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.colors)
    }

    /// Replace the entire reference buffer (pattern change).
    ///
    /// Panics if `points` does not have exactly `len()` entries; the cloud's
    /// size is fixed at construction and a partial shape is a caller bug.
    pub fn replace_reference(&mut self, points: Vec<Vec3>) {
        assert_eq!(
            points.len(),
            self.reference.len(),
            "reference buffer must be replaced wholesale"
        );
        self.reference = points;
        self.dirty |= CloudDirty::POSITIONS;
    }

    /// Mutable access to live positions; marks them dirty.
    pub fn positions_mut(&mut self) -> &mut [Vec3] {
        self.dirty |= CloudDirty::POSITIONS;
        &mut self.live
    }

    /// Mutable access to colors; marks them dirty.
    pub fn colors_mut(&mut self) -> &mut [Color] {
        self.dirty |= CloudDirty::COLORS;
        &mut self.colors
    }

    /// Paired iteration over reference and (mutable) live positions.
    ///
    /// The per-frame transform reads each reference point and writes the
    /// corresponding live point.
    pub fn transform_pairs(&mut self) -> impl Iterator<Item = (&Vec3, &mut Vec3)> {
        self.dirty |= CloudDirty::POSITIONS;
        self.reference.iter().zip(self.live.iter_mut())
    }

    /// Take and clear the dirty flags (called once per render).
    pub fn take_dirty(&mut self) -> CloudDirty {
        std::mem::take(&mut self.dirty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cloud_of(n: usize) -> PointCloud {
        PointCloud::new(vec![Vec3::new(1.0, 2.0, 3.0); n])
    }

    #[test]
    fn test_lengths_match() {
        let cloud = cloud_of(10);
        assert_eq!(cloud.len(), 10);
        assert_eq!(cloud.positions().len(), 10);
        assert_eq!(cloud.colors().len(), 10);
        assert_eq!(cloud.reference().len(), 10);
    }

    #[test]
    fn test_starts_fully_dirty() {
        let mut cloud = cloud_of(4);
        assert_eq!(cloud.take_dirty(), CloudDirty::all());
        assert_eq!(cloud.take_dirty(), CloudDirty::empty());
    }

    #[test]
    fn test_replace_reference_wholesale() {
        let mut cloud = cloud_of(3);
        cloud.take_dirty();

        cloud.replace_reference(vec![Vec3::ZERO; 3]);
        assert_eq!(cloud.reference()[0], Vec3::ZERO);
        assert!(cloud.take_dirty().contains(CloudDirty::POSITIONS));
    }

    #[test]
    #[should_panic(expected = "wholesale")]
    fn test_replace_reference_wrong_len_panics() {
        let mut cloud = cloud_of(3);
        cloud.replace_reference(vec![Vec3::ZERO; 2]);
    }

    #[test]
    fn test_mut_access_marks_dirty() {
        let mut cloud = cloud_of(2);
        cloud.take_dirty();

        cloud.positions_mut()[0] = Vec3::ZERO;
        assert_eq!(cloud.take_dirty(), CloudDirty::POSITIONS);

        cloud.colors_mut()[0] = Color::CYAN;
        assert_eq!(cloud.take_dirty(), CloudDirty::COLORS);
    }

    #[test]
    fn test_byte_views_cover_buffers() {
        let cloud = cloud_of(5);
        assert_eq!(cloud.position_bytes().len(), 5 * 3 * 4);
        assert_eq!(cloud.color_bytes().len(), 5 * 3 * 4);
    }

    #[test]
    fn test_transform_pairs() {
        let mut cloud = cloud_of(3);
        for (reference, live) in cloud.transform_pairs() {
            *live = *reference * 2.0;
        }
        assert_eq!(cloud.positions()[1], Vec3::new(2.0, 4.0, 6.0));
    }
}
