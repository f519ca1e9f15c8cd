//! Animated robot eyes for small raster displays.
//!
//! The engine composes two rounded-rectangle eyes with eased motion, timed
//! blinking, idle gaze wander and mood overlays, then hands each finished
//! frame to a [`Panel`]. Hosts drive it with one [`RoboEyes::update`] call
//! per loop turn; an internal frame-rate gate does the pacing.

pub mod anim;
pub mod audio;
pub mod canvas;
pub mod color;
pub mod config;
pub mod director;
pub mod eyes;
pub mod framebuffer;
pub mod matrix;
pub mod mood;
pub mod pad;

mod behavior;
mod geometry;
mod motion;
mod raster;

pub use anim::{Keyframe, Sequence};
pub use behavior::BlinkPhase;
pub use canvas::{Canvas, Panel};
pub use color::{ColorPalette, Rgb};
pub use config::{ConfigError, FaceConfig};
pub use director::{Cue, Director, Monitor, Suggestion};
pub use eyes::RoboEyes;
pub use framebuffer::Frame;
pub use mood::{Direction, Mood};
