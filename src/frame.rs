//! Frame loop and renderer seam
//!
//! One [`FrameLoop::tick`] per display refresh: read whatever gesture sample
//! is latest, advance the particle field, hand the buffers to the renderer.
//! The loop never blocks and is total; if the detector never produces, the
//! field degrades to its idle auto-rotation indefinitely.

use std::time::Instant;

use gestura_cloud::{CloudDirty, Color, ParticleField, PatternKind, Vec3};
use gestura_vision::SampleSlot;

/// The opaque rendering collaborator.
///
/// Receives the current buffers each frame plus flags saying which of them
/// changed since the previous call. Resize notifications are forwarded
/// through here too; the engine does not own aspect-ratio math.
pub trait Renderer {
    /// Draw the current buffers against the current camera.
    fn render(&mut self, positions: &[Vec3], colors: &[Color], dirty: CloudDirty);

    /// Viewport changed; update camera projection and surface.
    fn resize(&mut self, width: u32, height: u32);
}

/// Per-tick orchestrator: gesture slot -> particle field -> renderer.
///
/// Also the single entry point for the UI collaborator's commands
/// ([`select_pattern`](Self::select_pattern), [`set_color`](Self::set_color),
/// [`resize`](Self::resize)).
pub struct FrameLoop {
    field: ParticleField,
    samples: SampleSlot,
    started: Instant,
    frame: u64,
}

impl FrameLoop {
    pub fn new(field: ParticleField, samples: SampleSlot) -> Self {
        Self {
            field,
            samples,
            started: Instant::now(),
            frame: 0,
        }
    }

    /// Run one frame.
    ///
    /// Reads the latest sample (absent if the detector has produced nothing
    /// yet), updates the field, then requests a render.
    pub fn tick(&mut self, renderer: &mut dyn Renderer) {
        let sample = self.samples.latest();
        let elapsed = self.started.elapsed().as_secs_f32();

        self.field.update(sample, elapsed);

        let dirty = self.field.take_dirty();
        let cloud = self.field.cloud();
        renderer.render(cloud.positions(), cloud.colors(), dirty);

        self.frame += 1;
        if self.frame % 600 == 0 {
            log::debug!(
                "frame {}: expansion {:.3}, rotation {:?}",
                self.frame,
                self.field.expansion(),
                self.field.rotation()
            );
        }
    }

    /// UI command: switch the target pattern.
    pub fn select_pattern(&mut self, kind: PatternKind) {
        log::info!("selecting pattern {:?}", kind);
        self.field.set_pattern(kind);
    }

    /// UI command: change the base color.
    pub fn set_color(&mut self, color: Color) {
        self.field.set_color(color);
    }

    /// Forward a viewport resize to the renderer.
    pub fn resize(&mut self, renderer: &mut dyn Renderer, width: u32, height: u32) {
        renderer.resize(width, height);
    }

    /// The particle field (read access for stats/debug overlays).
    pub fn field(&self) -> &ParticleField {
        &self.field
    }

    /// Frames ticked so far.
    pub fn frame_count(&self) -> u64 {
        self.frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gestura_cloud::FieldTuning;
    use gestura_vision::GestureSample;

    /// Test renderer that records what it was asked to draw.
    struct RecordingRenderer {
        renders: usize,
        last_dirty: CloudDirty,
        last_len: usize,
        size: (u32, u32),
    }

    impl RecordingRenderer {
        fn new() -> Self {
            Self {
                renders: 0,
                last_dirty: CloudDirty::empty(),
                last_len: 0,
                size: (0, 0),
            }
        }
    }

    impl Renderer for RecordingRenderer {
        fn render(&mut self, positions: &[Vec3], colors: &[Color], dirty: CloudDirty) {
            assert_eq!(positions.len(), colors.len());
            self.renders += 1;
            self.last_dirty = dirty;
            self.last_len = positions.len();
        }

        fn resize(&mut self, width: u32, height: u32) {
            self.size = (width, height);
        }
    }

    fn frame_loop(count: usize) -> (FrameLoop, SampleSlot) {
        let slot = SampleSlot::new();
        let field = ParticleField::with_seed(
            PatternKind::Sphere,
            count,
            Color::CYAN,
            FieldTuning::default(),
            3,
        );
        (FrameLoop::new(field, slot.clone()), slot)
    }

    #[test]
    fn test_tick_renders_current_buffers() {
        let (mut fl, _slot) = frame_loop(64);
        let mut renderer = RecordingRenderer::new();

        fl.tick(&mut renderer);
        assert_eq!(renderer.renders, 1);
        assert_eq!(renderer.last_len, 64);
        // First frame: everything is fresh
        assert_eq!(renderer.last_dirty, CloudDirty::all());

        fl.tick(&mut renderer);
        // Steady state: only positions are rewritten
        assert_eq!(renderer.last_dirty, CloudDirty::POSITIONS);
        assert_eq!(fl.frame_count(), 2);
    }

    #[test]
    fn test_tick_without_detector_goes_idle() {
        let (mut fl, _slot) = frame_loop(16);
        let mut renderer = RecordingRenderer::new();

        for _ in 0..10 {
            fl.tick(&mut renderer);
        }
        // No sample ever published: expansion stays at zero, idle spin runs
        assert_eq!(fl.field().expansion(), 0.0);
        assert!(fl.field().rotation().y > 0.0);
    }

    #[test]
    fn test_tick_consumes_latest_sample() {
        let (mut fl, slot) = frame_loop(16);
        let mut renderer = RecordingRenderer::new();

        slot.publish(GestureSample {
            present: true,
            openness: 1.0,
            position: Some([0.5, 0.5]),
            roll: Some(0.0),
        });
        fl.tick(&mut renderer);
        assert!((fl.field().expansion() - 0.1).abs() < 1e-6);
    }

    #[test]
    fn test_ui_commands_route_through() {
        let (mut fl, _slot) = frame_loop(16);
        let mut renderer = RecordingRenderer::new();

        fl.select_pattern(PatternKind::Ring);
        assert_eq!(fl.field().pattern(), PatternKind::Ring);

        fl.set_color(Color::WHITE);
        assert_eq!(fl.field().base_color(), Color::WHITE);

        fl.resize(&mut renderer, 1920, 1080);
        assert_eq!(renderer.size, (1920, 1080));
    }
}
