use log::Level;

use crate::engine::typewriter::TypewriterTiming;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose timers and route switches when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

pub const COUNTDOWN_TICK_MS: u32 = 1_000;

pub const BOOT_TEXT_TIMING: TypewriterTiming = TypewriterTiming {
    reveal_ms: 100,
    glitch_chance: 0.3,
    pulse_ms: 100,
    idle_ms: 3_000,
};

pub const GLITCH_NOISE_LEN: usize = 3;

// Hero canvas
pub const SCENE_FRAME_MS: u32 = 33;
pub const STAR_COUNT: usize = 1_500;

/// Scroll depth after which the nav bar switches to its solid style.
pub const NAV_SOLID_AFTER_PX: f64 = 80.0;
