//! Gestura demo binary
//!
//! Headless stand-in for the full installation: a simulated hand (opening,
//! closing, drifting, occasionally leaving the frame) takes the place of the
//! camera + landmark model, and a logging renderer takes the place of the
//! GPU front end. Everything between the two - estimation, smoothing, the
//! particle field, the frame loop - is the real engine.

use std::thread;
use std::time::{Duration, Instant};

use gestura::config::AppConfig;
use gestura::frame::{FrameLoop, Renderer};
use gestura_cloud::{CloudDirty, Color, ParticleField, PatternKind, Vec3};
use gestura_vision::{GestureEstimator, GestureSample, HandLandmarks, SampleSlot, LANDMARK_COUNT, INDEX_MCP, WRIST};

/// Camera-frame period for the simulated detector (~30 fps, like a webcam).
const DETECTOR_PERIOD: Duration = Duration::from_millis(33);
/// Display-refresh period for the frame loop (~60 fps).
const TICK_PERIOD: Duration = Duration::from_millis(16);
/// Pattern rotation cadence in frames (~15 s at 60 fps).
const PATTERN_SWITCH_FRAMES: u64 = 900;

/// Renderer stand-in: consumes the buffers and logs a heartbeat.
struct LogRenderer {
    frames: u64,
}

impl Renderer for LogRenderer {
    fn render(&mut self, positions: &[Vec3], _colors: &[Color], dirty: CloudDirty) {
        self.frames += 1;
        if self.frames % 300 == 0 {
            let spread = positions.first().map(|p| p.length()).unwrap_or(0.0);
            log::info!(
                "rendered frame {} ({} points, first-point radius {:.2}, dirty {:?})",
                self.frames,
                positions.len(),
                spread,
                dirty
            );
        }
    }

    fn resize(&mut self, width: u32, height: u32) {
        log::info!("viewport resized to {}x{}", width, height);
    }
}

/// Build a synthetic landmark frame for the simulated hand at time `t`.
///
/// The wrist drifts around the frame, the fingers sweep between closed
/// (reach ~0.12) and spread (reach ~0.55), and the hand slowly rolls.
fn synthetic_hand(t: f32) -> HandLandmarks {
    let wrist = Vec3::new(
        0.5 + 0.15 * (0.31 * t).sin(),
        0.5 + 0.10 * (0.23 * t).cos(),
        0.0,
    );
    let reach = 0.12 + 0.43 * (0.5 + 0.5 * t.sin());
    let angle = std::f32::consts::FRAC_PI_2 + 0.4 * (0.17 * t).sin();
    let dir = Vec3::new(angle.cos(), angle.sin(), 0.0);

    let mut points = vec![wrist + dir * reach; LANDMARK_COUNT];
    points[WRIST] = wrist;
    // Knuckle sits halfway out; its direction is what the roll estimate reads.
    points[INDEX_MCP] = wrist + dir * (reach * 0.5);

    HandLandmarks::from_slice(&points).expect("synthetic frame has 21 points")
}

/// Detector stand-in: estimates samples from the synthetic hand and
/// publishes them into the slot, dropping out of frame every so often.
fn run_simulated_detector(estimator: GestureEstimator, slot: SampleSlot) {
    let started = Instant::now();
    loop {
        let t = started.elapsed().as_secs_f32();

        // The hand leaves the frame for 4 s out of every 20.
        let sample = if t % 20.0 > 16.0 {
            GestureSample::ABSENT
        } else {
            estimator.estimate(&synthetic_hand(t))
        };

        slot.publish(sample);
        thread::sleep(DETECTOR_PERIOD);
    }
}

fn main() {
    let config = AppConfig::load().unwrap_or_else(|e| {
        eprintln!("Failed to load config: {}. Using defaults.", e);
        AppConfig::default()
    });

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.debug.log_level.as_str()),
    )
    .init();
    log::info!("Starting gestura");

    let base_color = Color::from_hex(&config.particles.color)
        .unwrap_or_else(|e| panic!("Bad particles.color in config: {}", e));

    let field = ParticleField::new(
        config.particles.pattern,
        config.particles.count,
        base_color,
        config.field,
    );
    log::info!(
        "Particle field: {} points, pattern {:?}",
        config.particles.count,
        config.particles.pattern
    );

    let slot = SampleSlot::new();
    let estimator = GestureEstimator::new(config.gesture.openness);
    {
        let producer = slot.clone();
        thread::spawn(move || run_simulated_detector(estimator, producer));
    }

    let mut frame_loop = FrameLoop::new(field, slot);
    let mut renderer = LogRenderer { frames: 0 };

    // Cycle through the patterns the way the UI buttons would.
    let patterns = [
        PatternKind::Sphere,
        PatternKind::Cube,
        PatternKind::Ring,
        PatternKind::Heart,
    ];
    let mut next_pattern = 1;

    loop {
        frame_loop.tick(&mut renderer);

        if frame_loop.frame_count() % PATTERN_SWITCH_FRAMES == 0 {
            frame_loop.select_pattern(patterns[next_pattern % patterns.len()]);
            next_pattern += 1;
        }

        thread::sleep(TICK_PERIOD);
    }
}
