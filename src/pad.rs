// Gamepad controls for driving the face by hand

use std::time::Instant;

use gilrs::{Button, Event, EventType, Gilrs};

use crate::color::ColorPalette;
use crate::config::FaceConfig;
use crate::eyes::RoboEyes;
use crate::mood::Direction;

/// Start-button hold time that counts as a long press.
const LONG_PRESS_MS: u128 = 800;

// Button press tracking for long press detection
pub struct ButtonTracker {
    start_pressed_at: Option<Instant>,
}

impl ButtonTracker {
    pub fn new() -> Self {
        Self {
            start_pressed_at: None,
        }
    }
}

impl Default for ButtonTracker {
    fn default() -> Self {
        Self::new()
    }
}

/// Toggles the host loop owns; the engine only sees the resulting calls.
#[derive(Debug, Clone)]
pub struct HostState {
    pub palette: ColorPalette,
    pub auto_blink: bool,
    pub idle: bool,
    pub curious: bool,
    pub cyclops: bool,
    pub eyes_open: bool,
}

impl HostState {
    pub fn from_config(cfg: &FaceConfig) -> Self {
        Self {
            palette: cfg.palette,
            auto_blink: cfg.blink.enabled,
            idle: cfg.idle.enabled,
            curious: cfg.curious,
            cyclops: cfg.cyclops,
            eyes_open: true,
        }
    }
}

pub fn print_control_mapping() {
    println!("\n🎮 Gamepad controls:");
    println!("   A/X (South)      - Blink");
    println!("   B/Circle (East)  - Toggle cyclops mode");
    println!("   Y/Triangle       - Toggle auto-blink");
    println!("   X/Square (West)  - Cycle color palette");
    println!("   D-Pad Up         - Cycle mood");
    println!("   D-Pad Down       - Toggle curiosity");
    println!("   D-Pad Left/Right - Glance left / right");
    println!("   Left trigger     - Confused shake");
    println!("   Right trigger    - Laugh bounce");
    println!("   Select           - Toggle idle wander");
    println!("   Start (short)    - Open/close eyes");
    println!("   Start (long)     - Reset face\n");
}

// Gamepad input handler
pub fn handle_gamepad_input(
    gilrs: &mut Gilrs,
    eyes: &mut RoboEyes,
    state: &mut HostState,
    button_tracker: &mut ButtonTracker,
) {
    while let Some(Event { event, .. }) = gilrs.next_event() {
        match event {
            EventType::ButtonPressed(button, _) => {
                println!("🎮 Button pressed: {:?}", button);

                // Track Start button press time for long press detection
                if button == Button::Start {
                    button_tracker.start_pressed_at = Some(Instant::now());
                }

                match button {
                    Button::South => {
                        eyes.blink();
                        println!("😉 Blink");
                    }
                    Button::East => {
                        state.cyclops = !state.cyclops;
                        eyes.set_cyclops(state.cyclops);
                        println!("👁️  Cyclops {}", if state.cyclops { "ON" } else { "OFF" });
                    }
                    Button::North => {
                        state.auto_blink = !state.auto_blink;
                        eyes.set_autoblinker(state.auto_blink, 3, 2);
                        println!("✨ Auto-blink {}", if state.auto_blink { "ON" } else { "OFF" });
                    }
                    Button::West => {
                        state.palette = state.palette.next();
                        println!("🎨 Color: {}", state.palette.name());
                    }

                    Button::DPadUp => {
                        let mood = eyes.mood().next();
                        eyes.set_mood(mood);
                        println!("😊 Mood: {}", mood.name());
                    }
                    Button::DPadDown => {
                        state.curious = !state.curious;
                        eyes.set_curiosity(state.curious);
                        println!("🧐 Curiosity {}", if state.curious { "ON" } else { "OFF" });
                    }
                    Button::DPadLeft => {
                        eyes.look(Direction::West);
                        println!("👀 Glance left");
                    }
                    Button::DPadRight => {
                        eyes.look(Direction::East);
                        println!("👀 Glance right");
                    }

                    Button::LeftTrigger | Button::LeftTrigger2 => {
                        let seq = eyes.confused();
                        eyes.play(seq);
                        println!("😵 Confused");
                    }
                    Button::RightTrigger | Button::RightTrigger2 => {
                        let seq = eyes.laugh();
                        eyes.play(seq);
                        println!("😂 Laugh");
                    }

                    Button::Select => {
                        state.idle = !state.idle;
                        eyes.set_idle_mode(state.idle, 2, 2);
                        println!("💤 Idle wander {}", if state.idle { "ON" } else { "OFF" });
                    }

                    // Start is handled on release to detect short vs long press
                    Button::Start => {}

                    _ => {}
                }
            }
            EventType::ButtonReleased(Button::Start, _) => {
                // Check press duration for short vs long press
                if let Some(pressed_at) = button_tracker.start_pressed_at.take() {
                    if pressed_at.elapsed().as_millis() >= LONG_PRESS_MS {
                        // Long press: back to a calm, centered default face
                        state.eyes_open = true;
                        eyes.open();
                        eyes.set_mood(crate::mood::Mood::Default);
                        eyes.look(Direction::Center);
                        eyes.set_autoblinker(state.auto_blink, 3, 2);
                        eyes.set_idle_mode(state.idle, 2, 2);
                        println!("🔄 Long press: face reset");
                    } else {
                        state.eyes_open = !state.eyes_open;
                        if state.eyes_open {
                            eyes.open();
                            println!("😳 Eyes open");
                        } else {
                            eyes.close();
                            println!("😑 Eyes closed");
                        }
                    }
                }
            }
            _ => {}
        }
    }
}
