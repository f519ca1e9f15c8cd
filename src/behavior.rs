// Involuntary behaviors: blink scheduling, idle wander timing, blink lifecycle

use rand::Rng;

/// Phases of a blink, in order. `Open` doubles as "no blink running".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlinkPhase {
    #[default]
    Open,
    Closing,
    Closed,
    Opening,
}

/// What the blink machine wants from the eyelids this tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LidDrive {
    /// Height targets go to zero.
    Shut,
    /// Height targets go back to the rest heights.
    Raise,
}

/// Blink lifecycle. Drives height targets only; the actual heights chase
/// them through the motion interpolator, which is what gives the blink its
/// fast-close, ease-out feel.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct BlinkState {
    pub(crate) phase: BlinkPhase,
    pub(crate) active: bool,
}

impl BlinkState {
    /// Begin a blink. A blink already in flight is left alone.
    pub(crate) fn start(&mut self) {
        if !self.active {
            self.active = true;
            self.phase = BlinkPhase::Closing;
        }
    }

    /// Advance one tick. Thresholds are read from the left eye; the right
    /// eye shares its timing because both lids chase targets with the same
    /// interpolator.
    pub(crate) fn step(&mut self, left_height: f32, left_height_default: i32) -> Option<LidDrive> {
        if !self.active {
            return None;
        }
        match self.phase {
            BlinkPhase::Open => None,
            BlinkPhase::Closing => {
                if left_height <= 2.0 {
                    self.phase = BlinkPhase::Closed;
                }
                Some(LidDrive::Shut)
            }
            BlinkPhase::Closed => {
                // One-tick pause with the lids held down
                self.phase = BlinkPhase::Opening;
                Some(LidDrive::Shut)
            }
            BlinkPhase::Opening => {
                if left_height >= (left_height_default - 2) as f32 {
                    self.phase = BlinkPhase::Open;
                    self.active = false;
                }
                Some(LidDrive::Raise)
            }
        }
    }
}

/// Periodic trigger that fires every `interval` seconds, give or take a
/// uniformly random `variation`. Used for both autoblink and idle wander.
#[derive(Debug, Clone, Copy)]
pub(crate) struct JitterTimer {
    pub(crate) enabled: bool,
    interval_ms: i64,
    variation_ms: i64,
    next_at: Option<u64>,
}

impl JitterTimer {
    pub(crate) fn disabled() -> Self {
        Self {
            enabled: false,
            interval_ms: 0,
            variation_ms: 0,
            next_at: None,
        }
    }

    pub(crate) fn configure(&mut self, enabled: bool, interval_s: u32, variation_s: u32) {
        self.enabled = enabled;
        self.interval_ms = interval_s as i64 * 1000;
        self.variation_ms = variation_s as i64 * 1000;
        // Forget the old deadline; the next tick re-arms from scratch
        self.next_at = None;
    }

    /// True when the deadline passed this tick. Re-arms itself on fire;
    /// the first call after (re)configuration only arms.
    pub(crate) fn fire(&mut self, now_ms: u64, rng: &mut impl Rng) -> bool {
        if !self.enabled {
            return false;
        }
        match self.next_at {
            None => {
                self.next_at = Some(self.schedule(now_ms, rng));
                false
            }
            Some(at) if now_ms >= at => {
                self.next_at = Some(self.schedule(now_ms, rng));
                true
            }
            Some(_) => false,
        }
    }

    fn schedule(&self, now_ms: u64, rng: &mut impl Rng) -> u64 {
        let jitter = if self.variation_ms > 0 {
            rng.random_range(-self.variation_ms..=self.variation_ms)
        } else {
            0
        };
        now_ms + (self.interval_ms + jitter).max(0) as u64
    }
}
