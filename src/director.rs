// Ambient mood direction: monitors watch the world, the director arbitrates
// their suggestions by priority and steers the eyes.

use std::fs;

use chrono::{Local, Timelike};
use ringbuf::traits::Consumer;
use ringbuf::HeapCons;

use crate::audio::SILENT_LIMIT;
use crate::eyes::RoboEyes;
use crate::mood::{Direction, Mood};

// Priority bands, low to high: 0 is the resting baseline, 1-3 time-of-day,
// 4-6 system state, 7-10 events. A suggestion only displaces a
// lower-priority one, or whatever is left after the current hold expires.

pub fn time_based(level: u8) -> u8 {
    level.clamp(1, 3)
}

pub fn system_state(level: u8) -> u8 {
    level.clamp(4, 6)
}

pub fn event(level: u8) -> u8 {
    level.clamp(7, 10)
}

/// A short canned reaction attached to a suggestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    Blink,
    Confused,
    Laugh,
}

/// One mood proposal from a monitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Suggestion {
    pub mood: Mood,
    pub priority: u8,
    pub gaze: Option<Direction>,
    pub cue: Option<Cue>,
    /// How long the mood holds before falling back to baseline;
    /// `None` holds until something outranks it.
    pub hold_ms: Option<u64>,
}

impl Suggestion {
    pub fn new(mood: Mood, priority: u8) -> Self {
        Self {
            mood,
            priority,
            gaze: None,
            cue: None,
            hold_ms: None,
        }
    }

    pub fn with_gaze(mut self, gaze: Direction) -> Self {
        self.gaze = Some(gaze);
        self
    }

    pub fn with_cue(mut self, cue: Cue) -> Self {
        self.cue = Some(cue);
        self
    }

    pub fn with_hold(mut self, hold_ms: u64) -> Self {
        self.hold_ms = Some(hold_ms);
        self
    }
}

/// An ambient signal watcher. Monitors are polled on their own interval and
/// answer with a suggestion only when they have something new to say.
pub trait Monitor {
    fn name(&self) -> &str;
    fn interval_ms(&self) -> u64;
    fn check(&mut self, now_ms: u64) -> Option<Suggestion>;
}

struct Entry {
    monitor: Box<dyn Monitor>,
    last_check: Option<u64>,
}

struct Applied {
    suggestion: Suggestion,
    since_ms: u64,
}

/// Arbitrates monitor suggestions onto one pair of eyes.
#[derive(Default)]
pub struct Director {
    monitors: Vec<Entry>,
    current: Option<Applied>,
}

impl Director {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, monitor: Box<dyn Monitor>) {
        log::info!("mood monitor registered: {}", monitor.name());
        self.monitors.push(Entry {
            monitor,
            last_check: None,
        });
    }

    /// Poll due monitors and steer the eyes. Call once per host loop turn;
    /// monitors cheaper than their interval cost nothing in between.
    pub fn tick(&mut self, now_ms: u64, eyes: &mut RoboEyes) {
        // An expired hold falls back to the baseline expression first, so
        // lower bands get their turn this same tick.
        if let Some(cur) = &self.current {
            if let Some(hold) = cur.suggestion.hold_ms {
                if now_ms.saturating_sub(cur.since_ms) >= hold {
                    log::debug!("mood hold expired, back to baseline");
                    eyes.set_mood(Mood::Default);
                    self.current = None;
                }
            }
        }

        for i in 0..self.monitors.len() {
            let due = match self.monitors[i].last_check {
                None => true,
                Some(t) => now_ms.saturating_sub(t) >= self.monitors[i].monitor.interval_ms(),
            };
            if !due {
                continue;
            }
            self.monitors[i].last_check = Some(now_ms);

            let Some(suggestion) = self.monitors[i].monitor.check(now_ms) else {
                continue;
            };
            if !self.can_override(&suggestion) {
                log::debug!(
                    "{}: suggestion at priority {} outranked",
                    self.monitors[i].monitor.name(),
                    suggestion.priority
                );
                continue;
            }
            log::info!(
                "{}: mood -> {} (priority {})",
                self.monitors[i].monitor.name(),
                suggestion.mood.name(),
                suggestion.priority
            );
            self.apply(suggestion, now_ms, eyes);
        }
    }

    fn can_override(&self, s: &Suggestion) -> bool {
        match &self.current {
            None => true,
            Some(cur) => s.priority > cur.suggestion.priority,
        }
    }

    fn apply(&mut self, s: Suggestion, now_ms: u64, eyes: &mut RoboEyes) {
        eyes.set_mood(s.mood);
        if let Some(gaze) = s.gaze {
            eyes.look(gaze);
        }
        match s.cue {
            Some(Cue::Blink) => eyes.blink(),
            Some(Cue::Confused) => {
                let seq = eyes.confused();
                eyes.play(seq);
            }
            Some(Cue::Laugh) => {
                let seq = eyes.laugh();
                eyes.play(seq);
            }
            None => {}
        }
        self.current = Some(Applied {
            suggestion: s,
            since_ms: now_ms,
        });
    }
}

// ============ MONITORS ============

/// Time-of-day mood: drowsy mornings and nights, bright evenings.
/// Re-suggests only when the hour changes.
pub struct ScheduleMonitor {
    last_hour: Option<u32>,
}

impl ScheduleMonitor {
    pub fn new() -> Self {
        Self { last_hour: None }
    }
}

impl Default for ScheduleMonitor {
    fn default() -> Self {
        Self::new()
    }
}

fn mood_for_hour(hour: u32) -> Suggestion {
    // Holds for an hour so the next band can take over even at equal priority
    let hold = 3_600_000;
    match hour {
        6..=8 => Suggestion::new(Mood::Tired, time_based(2))
            .with_gaze(Direction::South)
            .with_hold(hold),
        9..=17 => Suggestion::new(Mood::Default, time_based(1)).with_hold(hold),
        18..=21 => Suggestion::new(Mood::Happy, time_based(1)).with_hold(hold),
        _ => Suggestion::new(Mood::Tired, time_based(3))
            .with_gaze(Direction::South)
            .with_hold(hold),
    }
}

impl Monitor for ScheduleMonitor {
    fn name(&self) -> &str {
        "schedule"
    }

    fn interval_ms(&self) -> u64 {
        60_000
    }

    fn check(&mut self, _now_ms: u64) -> Option<Suggestion> {
        let hour = Local::now().hour();
        if self.last_hour == Some(hour) {
            return None;
        }
        self.last_hour = Some(hour);
        Some(mood_for_hour(hour))
    }
}

/// Host load: a straining machine gets tired eyes, a relaxed one perks up.
pub struct LoadMonitor {
    cores: f64,
    last_band: Option<LoadBand>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LoadBand {
    Low,
    Mid,
    High,
}

impl LoadMonitor {
    pub fn new() -> Self {
        let cores = std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1) as f64;
        Self {
            cores,
            last_band: None,
        }
    }

    fn classify(&self, load1: f64) -> LoadBand {
        if load1 > self.cores * 0.8 {
            LoadBand::High
        } else if load1 < self.cores * 0.2 {
            LoadBand::Low
        } else {
            LoadBand::Mid
        }
    }
}

impl Default for LoadMonitor {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_loadavg(text: &str) -> Option<f64> {
    text.split_whitespace().next()?.parse().ok()
}

fn read_loadavg() -> Option<f64> {
    parse_loadavg(&fs::read_to_string("/proc/loadavg").ok()?)
}

impl Monitor for LoadMonitor {
    fn name(&self) -> &str {
        "load"
    }

    fn interval_ms(&self) -> u64 {
        5_000
    }

    fn check(&mut self, _now_ms: u64) -> Option<Suggestion> {
        let load1 = read_loadavg()?;
        let band = self.classify(load1);
        if self.last_band == Some(band) {
            return None;
        }
        self.last_band = Some(band);
        match band {
            LoadBand::High => Some(
                Suggestion::new(Mood::Tired, system_state(5))
                    .with_gaze(Direction::South)
                    .with_hold(60_000),
            ),
            LoadBand::Low => {
                Some(Suggestion::new(Mood::Default, system_state(4)).with_hold(60_000))
            }
            LoadBand::Mid => None,
        }
    }
}

/// Microphone activity: a burst of sound after silence earns a laugh.
pub struct SoundMonitor {
    levels: HeapCons<f64>,
    level: f64,
    was_loud: bool,
}

impl SoundMonitor {
    pub fn new(levels: HeapCons<f64>) -> Self {
        Self {
            levels,
            level: 0.0,
            was_loud: false,
        }
    }
}

impl Monitor for SoundMonitor {
    fn name(&self) -> &str {
        "sound"
    }

    fn interval_ms(&self) -> u64 {
        250
    }

    fn check(&mut self, _now_ms: u64) -> Option<Suggestion> {
        // Fold everything captured since the last poll into a smoothed level
        while let Some(sample) = self.levels.try_pop() {
            self.level = self.level * 0.6 + sample * 0.4;
        }
        let loud = self.level > SILENT_LIMIT;
        let onset = loud && !self.was_loud;
        self.was_loud = loud;
        if onset {
            Some(
                Suggestion::new(Mood::Happy, event(8))
                    .with_cue(Cue::Laugh)
                    .with_hold(5_000),
            )
        } else {
            None
        }
    }
}
