use std::time::Duration;

use anyhow::Result;

use orrery_engine::assets::load_texture;
use orrery_engine::core::{Harness, HarnessConfig, Simulation};
use orrery_engine::logging::{init_logging, LoggingConfig};

/// Spinning-body state stepped at the fixed rate.
///
/// Keeps the previous and the current angle so `present` can interpolate
/// between them with the scheduler's alpha.
struct Spinner {
    previous_angle: f32,
    current_angle: f32,
    frames: u32,
}

impl Simulation for Spinner {
    fn update(&mut self, dt: f32) -> Result<()> {
        self.previous_angle = self.current_angle;
        self.current_angle += 0.5 * dt;
        Ok(())
    }

    fn present(&mut self, alpha: f32) -> Result<()> {
        let angle = self.previous_angle + (self.current_angle - self.previous_angle) * alpha;

        self.frames += 1;
        if self.frames % 60 == 0 {
            log::info!("frame {}: interpolated angle {angle:.4} rad", self.frames);
        }

        Ok(())
    }
}

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    // Optional: decode a texture the way a host's resource loader would,
    // reporting what an upload step would receive.
    if let Some(path) = std::env::args().nth(1) {
        let image = load_texture(&path)?;
        log::info!(
            "{path}: {}x{} px, {:?} storage / {:?} transfer, {} bytes",
            image.width,
            image.height,
            image.storage,
            image.transfer,
            image.pixels.len(),
        );
    }

    let mut harness = Harness::new(HarnessConfig::default());
    let mut spinner = Spinner {
        previous_angle: 0.0,
        current_angle: 0.0,
        frames: 0,
    };

    log::info!("driving the fixed-step harness for 300 frames at 1 kHz steps");
    for _ in 0..300 {
        harness.frame(&mut spinner)?;
        std::thread::sleep(Duration::from_millis(3));
    }

    log::info!(
        "done: {} simulation steps over {} presented frames",
        harness.ticks(),
        spinner.frames,
    );

    Ok(())
}
