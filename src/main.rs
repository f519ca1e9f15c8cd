use std::env;
use std::path::Path;
use std::thread;
use std::time::{Duration, Instant};

use gilrs::Gilrs;
use ringbuf::traits::Split;
use ringbuf::HeapRb;

use pi_robo_eyes::audio::{start_audio_capture, SILENT_LIMIT};
use pi_robo_eyes::director::{Director, LoadMonitor, ScheduleMonitor, SoundMonitor};
use pi_robo_eyes::matrix::MatrixPanel;
use pi_robo_eyes::pad::{handle_gamepad_input, print_control_mapping, ButtonTracker, HostState};
use pi_robo_eyes::{FaceConfig, RoboEyes, Rgb};

/// Shimmer advances one palette step roughly every third of a second.
const SHIMMER_STEP_MS: f64 = 33.0;

// ============================================================================
// MAIN ENTRY POINT
// ============================================================================

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // Optional config file path as the first argument
    let config = match env::args().nth(1) {
        Some(path) => FaceConfig::load(Path::new(&path))?,
        None => FaceConfig::default(),
    };

    // The matrix driver wants root for GPIO and timer access
    if unsafe { libc::geteuid() } != 0 {
        eprintln!("⚠️  Not running as root; the LED matrix may fail to initialize.");
    }

    // Microphone feeds the sound monitor through a lock-free queue
    let (level_producer, level_consumer) = HeapRb::<f64>::new(256).split();
    println!("Initializing microphone...");
    let _stream = match start_audio_capture(level_producer) {
        Ok(stream) => {
            println!("✅ Microphone initialized successfully!");
            Some(stream)
        }
        Err(e) => {
            eprintln!("⚠️  Warning: Could not initialize microphone: {}", e);
            eprintln!("Eyes will react to time and system load only.");
            None
        }
    };

    // Gamepad is optional; the face runs on its own without one
    let mut gilrs = match Gilrs::new() {
        Ok(g) => Some(g),
        Err(e) => {
            eprintln!("⚠️  Warning: Gamepad support unavailable: {}", e);
            None
        }
    };

    println!("\n🎮 Gamepad Status:");
    let mut gamepad_found = false;
    if let Some(gilrs) = &gilrs {
        for (id, gamepad) in gilrs.gamepads() {
            println!(
                "  Connected: {} (ID: {:?}, Power: {:?})",
                gamepad.name(),
                id,
                gamepad.power_info()
            );
            gamepad_found = true;
        }
    }
    if !gamepad_found {
        println!("  ⚠️  No gamepad detected. Controls disabled.");
        println!("  Tip: Connect a Bluetooth gamepad and pair it before starting.");
    } else {
        println!("  ✅ Gamepad ready! Press any button to test...");
    }
    print_control_mapping();

    // LED matrix
    let mut panel = MatrixPanel::new(&config.panel)?;
    let mut eyes = RoboEyes::from_config(&config);

    // Ambient mood monitors; the sound monitor idles harmlessly without a mic
    let mut director = Director::new();
    director.register(Box::new(ScheduleMonitor::new()));
    director.register(Box::new(LoadMonitor::new()));
    director.register(Box::new(SoundMonitor::new(level_consumer)));

    println!("\n🚀 Starting animation loop...");
    println!("Microphone threshold: {}", SILENT_LIMIT);

    let mut state = HostState::from_config(&config);
    let mut button_tracker = ButtonTracker::new();
    let start = Instant::now();

    // Animation loop (run indefinitely - press Ctrl+C to stop)
    loop {
        // Handle gamepad input (non-blocking)
        if let Some(gilrs) = gilrs.as_mut() {
            handle_gamepad_input(gilrs, &mut eyes, &mut state, &mut button_tracker);
        }

        let now_ms = start.elapsed().as_millis() as u64;
        director.tick(now_ms, &mut eyes);

        // Eye color drifts through the active palette
        let shimmer = state.palette.shimmer(now_ms as f64 / SHIMMER_STEP_MS);
        eyes.set_colors(shimmer, Rgb::BLACK);

        // The engine gates itself to the configured frame rate; polling
        // faster just keeps the controls responsive
        eyes.update(now_ms, &mut panel);

        thread::sleep(Duration::from_millis(5));
    }
}
