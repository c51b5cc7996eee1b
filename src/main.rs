//! Paddle Duel headless runner
//!
//! Drives a match with a scripted pointer and logs what happens. A real host
//! would feed frame times and touch input from its window loop instead.

use paddle_duel::sim::{MatchEvent, MatchSimulator, Pointer, SeededServe};
use paddle_duel::Settings;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Paddle Duel (headless) starting...");

    let settings = match std::env::args().nth(1) {
        Some(path) => Settings::load(&path).unwrap_or_else(|e| {
            log::warn!("{e}; using default settings");
            Settings::default()
        }),
        None => Settings::default(),
    };

    let serve = match settings.seed {
        Some(seed) => SeededServe::new(seed),
        None => SeededServe::from_entropy(),
    };
    log::info!("serve seed {}", serve.seed());

    let mut sim = MatchSimulator::with_serve(serve).with_pointer_target(settings.pointer_target);

    let mut hits = 0u32;
    for frame in 0..settings.frames {
        let pointer = settings.pointer.then(|| scripted_pointer(&settings, frame));
        for event in sim.update(settings.frame_dt, pointer) {
            match event {
                MatchEvent::Scored { side } => {
                    log::info!(
                        "frame {frame}: point to {} ({})",
                        side.as_str(),
                        sim.score_text()
                    );
                }
                MatchEvent::PaddleHit { .. } => hits += 1,
                MatchEvent::WallBounce => {}
            }
        }
    }

    println!("{}", sim.score_text());
    log::info!(
        "{} frames, {} paddle hits, final ball speed {}",
        sim.frame(),
        hits,
        sim.ball().speed
    );

    if settings.snapshot {
        match serde_json::to_string_pretty(sim.state()) {
            Ok(json) => println!("{json}"),
            Err(e) => log::error!("Snapshot failed: {e}"),
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Browser hosts link the library directly
}

/// Pointer held at mid-screen x, sweeping up and down the full height
#[cfg(not(target_arch = "wasm32"))]
fn scripted_pointer(settings: &Settings, frame: u32) -> Pointer {
    let t = frame as f32 * settings.frame_dt;
    let phase = (t * settings.sweep_hz * std::f32::consts::TAU).sin();
    Pointer::new(
        settings.screen_width * 0.5,
        settings.screen_height * 0.5 * (1.0 - phase),
        settings.screen_width,
        settings.screen_height,
    )
}
