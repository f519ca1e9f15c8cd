// Robot eyes animation engine: one tick function moves everything

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::anim::Sequence;
use crate::behavior::{BlinkPhase, BlinkState, JitterTimer, LidDrive};
use crate::canvas::{Canvas, Panel};
use crate::color::Rgb;
use crate::config::FaceConfig;
use crate::framebuffer::Frame;
use crate::geometry::EyePair;
use crate::mood::{Direction, Mood};

// Rest geometry used when no config overrides it
const DEFAULT_EYE_WIDTH: i32 = 36;
const DEFAULT_EYE_HEIGHT: i32 = 36;
const DEFAULT_BORDER_RADIUS: i32 = 8;
const DEFAULT_SPACING: i32 = 10;

/// Extra width curiosity adds when the gaze nears a horizontal bound.
const CURIOUS_WIDEN: i32 = 8;
/// Distance from a bound that counts as "near the edge".
const CURIOUS_EDGE: i32 = 10;

/// Which eye a shape is drawn for; mirrored overlays depend on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EyeSide {
    Left,
    Right,
}

/// A sequence in flight plus the ticks left on its current keyframe.
struct SequenceRun {
    seq: Sequence,
    ticks_left: u16,
}

// ============ ROBO EYES ============

/// The animated eye pair.
///
/// Owns all animation state and advances it in [`RoboEyes::update`], which the
/// host calls as often as it likes; an internal frame-rate gate turns excess
/// calls into no-ops. Time comes in as a millisecond tick count so hosts and
/// tests control the clock.
pub struct RoboEyes {
    screen_width: i32,
    screen_height: i32,
    frame_interval_ms: u64,
    last_tick: Option<u64>,

    pair: EyePair,
    mood: Mood,
    curious: bool,
    cyclops: bool,
    fg: Rgb,
    bg: Rgb,

    blink: BlinkState,
    autoblinker: JitterTimer,
    idle: JitterTimer,
    sequence: Option<SequenceRun>,

    /// Compose-then-push buffer; `None` means direct rendering.
    frame: Option<Frame>,
    rng: StdRng,
}

impl RoboEyes {
    /// Eyes at rest, centered for the given screen, blinking and wandering
    /// disabled until the host turns them on.
    pub fn new(screen_width: i32, screen_height: i32, max_fps: u8) -> Self {
        Self::build(screen_width, screen_height, max_fps, StdRng::from_os_rng())
    }

    /// Deterministic twin of [`RoboEyes::new`] for tests and replays.
    pub fn with_rng_seed(screen_width: i32, screen_height: i32, max_fps: u8, seed: u64) -> Self {
        Self::build(screen_width, screen_height, max_fps, StdRng::seed_from_u64(seed))
    }

    /// Build a fully configured face in one call.
    pub fn from_config(cfg: &FaceConfig) -> Self {
        let mut eyes = Self::new(
            cfg.panel.screen_width(),
            cfg.panel.screen_height(),
            cfg.panel.max_fps,
        );
        eyes.set_width(cfg.eyes.width, cfg.eyes.width);
        eyes.set_height(cfg.eyes.height, cfg.eyes.height);
        eyes.set_border_radius(cfg.eyes.radius, cfg.eyes.radius);
        eyes.set_spacing(cfg.eyes.spacing);
        eyes.reset_position();
        eyes.set_mood(cfg.mood);
        eyes.set_cyclops(cfg.cyclops);
        eyes.set_curiosity(cfg.curious);
        eyes.set_autoblinker(cfg.blink.enabled, cfg.blink.interval_s, cfg.blink.variation_s);
        eyes.set_idle_mode(cfg.idle.enabled, cfg.idle.interval_s, cfg.idle.variation_s);
        eyes.set_colors(cfg.palette.shimmer(0.0), Rgb::BLACK);
        eyes
    }

    fn build(screen_width: i32, screen_height: i32, max_fps: u8, rng: StdRng) -> Self {
        let frame = Frame::try_new(screen_width, screen_height);
        if frame.is_none() {
            log::warn!(
                "no off-surface buffer for {}x{}, falling back to direct rendering",
                screen_width,
                screen_height
            );
        }
        Self {
            screen_width,
            screen_height,
            frame_interval_ms: 1000 / max_fps.max(1) as u64,
            last_tick: None,
            pair: EyePair::new(
                screen_width,
                screen_height,
                DEFAULT_EYE_WIDTH,
                DEFAULT_EYE_HEIGHT,
                DEFAULT_BORDER_RADIUS,
                DEFAULT_SPACING,
            ),
            mood: Mood::Default,
            curious: false,
            cyclops: false,
            fg: Rgb::WHITE,
            bg: Rgb::BLACK,
            blink: BlinkState::default(),
            autoblinker: JitterTimer::disabled(),
            idle: JitterTimer::disabled(),
            sequence: None,
            frame,
            rng,
        }
    }

    // ============ CONTROL SURFACE ============

    /// Rest widths for the left and right eye.
    pub fn set_width(&mut self, left: i32, right: i32) {
        self.pair.left.set_width(left);
        self.pair.right.set_width(right);
    }

    /// Rest heights for the left and right eye.
    pub fn set_height(&mut self, left: i32, right: i32) {
        self.pair.left.set_height(left);
        self.pair.right.set_height(right);
    }

    /// Corner radius of each eye's rounded rectangle.
    pub fn set_border_radius(&mut self, left: i32, right: i32) {
        self.pair.left.radius = left;
        self.pair.right.radius = right;
    }

    /// Horizontal gap between the eyes.
    pub fn set_spacing(&mut self, spacing: i32) {
        self.pair.spacing = spacing;
    }

    /// Recompute the centered rest layout for the current sizes and spacing.
    pub fn reset_position(&mut self) {
        self.pair.center();
    }

    pub fn set_mood(&mut self, mood: Mood) {
        self.mood = mood;
    }

    pub fn mood(&self) -> Mood {
        self.mood
    }

    /// Aim the gaze at a compass region of the screen.
    pub fn look(&mut self, dir: Direction) {
        self.pair.look(dir);
    }

    /// Single centered eye instead of the pair.
    pub fn set_cyclops(&mut self, on: bool) {
        self.cyclops = on;
    }

    /// Widen the eyes whenever the gaze nears a screen edge.
    pub fn set_curiosity(&mut self, on: bool) {
        self.curious = on;
    }

    /// Blink on a timer: roughly every `interval_s`, off by up to
    /// `variation_s` either way.
    pub fn set_autoblinker(&mut self, enabled: bool, interval_s: u32, variation_s: u32) {
        self.autoblinker.configure(enabled, interval_s, variation_s);
    }

    /// Re-aim the gaze at a random in-bounds position on a jittered timer.
    pub fn set_idle_mode(&mut self, enabled: bool, interval_s: u32, variation_s: u32) {
        self.idle.configure(enabled, interval_s, variation_s);
    }

    pub fn set_colors(&mut self, fg: Rgb, bg: Rgb) {
        self.fg = fg;
        self.bg = bg;
    }

    /// Blink once, now. A blink already in flight is left alone.
    pub fn blink(&mut self) {
        self.blink.start();
    }

    /// Open both eyes (height targets back to rest).
    pub fn open(&mut self) {
        self.pair.left.open = true;
        self.pair.right.open = true;
        self.pair.left.height_next = self.pair.left.height_default;
        self.pair.right.height_next = self.pair.right.height_default;
    }

    /// Close both eyes and keep them closed until [`RoboEyes::open`].
    pub fn close(&mut self) {
        self.pair.left.open = false;
        self.pair.right.open = false;
        self.pair.left.height_next = 0;
        self.pair.right.height_next = 0;
    }

    pub fn is_blinking(&self) -> bool {
        self.blink.active
    }

    pub fn blink_phase(&self) -> BlinkPhase {
        self.blink.phase
    }

    /// True while a canned sequence is pinning the gaze.
    pub fn is_animating(&self) -> bool {
        self.sequence.is_some()
    }

    /// Head-shake gesture built around the current horizontal center.
    pub fn confused(&self) -> Sequence {
        Sequence::confused(self.pair.constraint_x() / 2)
    }

    /// Vertical bounce built around the current vertical center.
    pub fn laugh(&self) -> Sequence {
        Sequence::laugh(self.pair.constraint_y() / 2)
    }

    /// Run a sequence. Replaces whatever sequence was playing.
    pub fn play(&mut self, seq: Sequence) {
        self.sequence = Some(SequenceRun { seq, ticks_left: 0 });
    }

    // ============ TICK ============

    /// Advance one animation tick and draw.
    ///
    /// Returns `false` when the frame-rate gate swallowed the call; nothing
    /// is mutated or drawn in that case, so hosts may call this every loop
    /// iteration regardless of their own timing.
    pub fn update<P: Panel>(&mut self, now_ms: u64, panel: &mut P) -> bool {
        if let Some(last) = self.last_tick {
            if now_ms.saturating_sub(last) < self.frame_interval_ms {
                return false;
            }
        }
        self.last_tick = Some(now_ms);

        // Involuntary behaviors first. A pending autoblink deadline waits
        // out a running blink or deliberately closed eyes instead of
        // rescheduling behind their back.
        if !self.blink.active
            && self.pair.left.open
            && self.autoblinker.fire(now_ms, &mut self.rng)
        {
            self.blink.start();
        }

        // Idle wander yields to a scripted sequence
        if self.sequence.is_none() && self.idle.fire(now_ms, &mut self.rng) {
            let max_x = self.pair.constraint_x().max(0);
            let max_y = self.pair.constraint_y().max(0);
            let x = if max_x > 0 { self.rng.random_range(0..max_x) } else { 0 };
            let y = if max_y > 0 { self.rng.random_range(0..max_y) } else { 0 };
            self.pair.set_gaze(x, y);
        }

        self.step_sequence();

        // Blink machine drives the lid targets for this tick, if running
        let drive = self
            .blink
            .step(self.pair.left.height, self.pair.left.height_default);
        match drive {
            Some(LidDrive::Shut) => {
                self.pair.left.height_next = 0;
                self.pair.right.height_next = 0;
            }
            Some(LidDrive::Raise) => {
                self.pair.left.height_next = self.pair.left.height_default;
                self.pair.right.height_next = self.pair.right.height_default;
            }
            None => {}
        }

        self.pair.ease();
        self.apply_mood(matches!(drive, Some(LidDrive::Shut)));
        // The pair stays rigid no matter which subsystem moved the left eye
        self.pair.align_right();
        self.draw(panel);
        true
    }

    /// Feed the active sequence: apply due keyframes, count down holds.
    fn step_sequence(&mut self) {
        let Some(mut run) = self.sequence.take() else {
            return;
        };
        loop {
            if run.ticks_left > 0 {
                run.ticks_left -= 1;
                self.sequence = Some(run);
                return;
            }
            match run.seq.next() {
                Some(kf) => {
                    if let Some(x) = kf.x {
                        self.pair.left.x_next = x;
                    }
                    if let Some(y) = kf.y {
                        self.pair.left.y_next = y;
                    }
                    self.pair.align_right();
                    run.ticks_left = kf.hold_ticks;
                }
                // Script exhausted; the sequence slot stays empty
                None => return,
            }
        }
    }

    /// Mood and curiosity biases, applied to targets after easing so the
    /// blink machine's writes from this tick stay authoritative.
    fn apply_mood(&mut self, lids_forced_shut: bool) {
        let logically_open = self.pair.left.open && self.pair.right.open;
        if logically_open && !lids_forced_shut {
            match self.mood {
                Mood::Happy | Mood::Tired => {
                    let squint = self.mood.squint();
                    self.pair.left.height_next = self.pair.left.height_default - squint;
                    self.pair.right.height_next = self.pair.right.height_default - squint;
                }
                // Angry reshapes via its overlay only; height rests
                Mood::Default | Mood::Angry => {
                    if !self.blink.active {
                        self.pair.left.height_next = self.pair.left.height_default;
                        self.pair.right.height_next = self.pair.right.height_default;
                    }
                }
            }
        }

        if self.curious {
            let max_x = self.pair.constraint_x();
            let near_edge = self.pair.left.x_next <= CURIOUS_EDGE
                || self.pair.left.x_next >= max_x - CURIOUS_EDGE;
            if near_edge {
                self.pair.left.width_next = self.pair.left.width_default + CURIOUS_WIDEN;
                self.pair.right.width_next = self.pair.right.width_default + CURIOUS_WIDEN;
            } else {
                self.pair.left.width_next = self.pair.left.width_default;
                self.pair.right.width_next = self.pair.right.width_default;
            }
        } else {
            self.pair.left.width_next = self.pair.left.width_default;
            self.pair.right.width_next = self.pair.right.width_default;
        }
    }

    // ============ RENDERER ============

    fn draw<P: Panel>(&mut self, panel: &mut P) {
        // Compose off-surface when a buffer exists, else draw live
        if let Some(mut frame) = self.frame.take() {
            frame.fill(self.bg);
            self.draw_eyes(&mut frame);
            panel.push_frame(&frame);
            self.frame = Some(frame);
        } else {
            panel.fill(self.bg);
            self.draw_eyes(panel);
        }
    }

    fn draw_eyes<C: Canvas>(&self, canvas: &mut C) {
        if self.cyclops {
            let w = self.pair.left.width.round() as i32;
            let h = self.pair.left.height.round() as i32;
            let x = self.screen_width / 2 - w / 2;
            let y = self.screen_height / 2 - h / 2;
            self.draw_eye(canvas, x, y, w, h, self.pair.left.radius, EyeSide::Left);
        } else {
            let l = &self.pair.left;
            self.draw_eye(
                canvas,
                l.x.round() as i32,
                l.y.round() as i32,
                l.width.round() as i32,
                l.height.round() as i32,
                l.radius,
                EyeSide::Left,
            );
            let r = &self.pair.right;
            self.draw_eye(
                canvas,
                r.x.round() as i32,
                r.y.round() as i32,
                r.width.round() as i32,
                r.height.round() as i32,
                r.radius,
                EyeSide::Right,
            );
        }
    }

    fn draw_eye<C: Canvas>(
        &self,
        canvas: &mut C,
        x: i32,
        y: i32,
        w: i32,
        h: i32,
        radius: i32,
        side: EyeSide,
    ) {
        // A fully closed eye draws nothing at all
        if h <= 0 {
            return;
        }

        canvas.fill_round_rect(x, y, w, h, radius, self.fg);

        // Mood overlays mask the eye in background color
        let lid = h / 2;
        match self.mood {
            Mood::Tired => {
                if self.cyclops {
                    // Split the droop at the eye midline
                    canvas.fill_triangle(x, y - 1, x + w / 2, y - 1, x, y + lid - 1, self.bg);
                    canvas.fill_triangle(
                        x + w / 2,
                        y - 1,
                        x + w,
                        y - 1,
                        x + w,
                        y + lid - 1,
                        self.bg,
                    );
                } else {
                    canvas.fill_triangle(x, y - 1, x + w, y - 1, x, y + lid - 1, self.bg);
                }
            }
            Mood::Angry => {
                if self.cyclops {
                    // Two wedges meeting in a V at the midline
                    canvas.fill_triangle(
                        x,
                        y - 1,
                        x + w / 2,
                        y - 1,
                        x + w / 2,
                        y + lid - 1,
                        self.bg,
                    );
                    canvas.fill_triangle(
                        x + w / 2,
                        y - 1,
                        x + w,
                        y - 1,
                        x + w / 2,
                        y + lid - 1,
                        self.bg,
                    );
                } else {
                    // Brows slant toward the nose: deep point at the inner edge
                    match side {
                        EyeSide::Left => canvas.fill_triangle(
                            x,
                            y - 1,
                            x + w,
                            y - 1,
                            x + w,
                            y + lid - 1,
                            self.bg,
                        ),
                        EyeSide::Right => canvas.fill_triangle(
                            x,
                            y - 1,
                            x + w,
                            y - 1,
                            x,
                            y + lid - 1,
                            self.bg,
                        ),
                    }
                }
            }
            Mood::Happy => {
                // Bottom lid pushed up into the lower half of the eye box
                canvas.fill_round_rect(x - 1, y + h - lid + 1, w + 2, h, radius, self.bg);
            }
            Mood::Default => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Panel double that records every drawing call.
    #[derive(Default)]
    struct Recorder {
        ops: Vec<Op>,
        frames_pushed: usize,
        last_frame_center: Option<Rgb>,
    }

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum Op {
        Fill(Rgb),
        RoundRect { x: i32, y: i32, w: i32, h: i32, color: Rgb },
        Triangle { color: Rgb },
    }

    impl Canvas for Recorder {
        fn fill(&mut self, color: Rgb) {
            self.ops.push(Op::Fill(color));
        }

        fn fill_round_rect(&mut self, x: i32, y: i32, w: i32, h: i32, _radius: i32, color: Rgb) {
            self.ops.push(Op::RoundRect { x, y, w, h, color });
        }

        fn fill_triangle(
            &mut self,
            _x0: i32,
            _y0: i32,
            _x1: i32,
            _y1: i32,
            _x2: i32,
            _y2: i32,
            color: Rgb,
        ) {
            self.ops.push(Op::Triangle { color });
        }
    }

    impl Panel for Recorder {
        fn push_frame(&mut self, frame: &Frame) {
            self.frames_pushed += 1;
            self.last_frame_center = frame.pixel(frame.width() / 2, frame.height() / 2);
        }
    }

    /// Engine with deterministic RNG, direct rendering, both timers off.
    fn test_eyes() -> RoboEyes {
        let mut eyes = RoboEyes::with_rng_seed(240, 240, 30, 99);
        eyes.frame = None;
        eyes
    }

    /// Tick every 40ms starting after `from`; returns the final clock value.
    fn run_ticks(eyes: &mut RoboEyes, panel: &mut Recorder, ticks: u32, mut from: u64) -> u64 {
        for _ in 0..ticks {
            from += 40;
            eyes.update(from, panel);
        }
        from
    }

    #[test]
    fn default_scenario_centers_the_pair() {
        let eyes = RoboEyes::with_rng_seed(240, 240, 30, 1);
        assert_eq!(eyes.pair.left.x, 79.0);
        assert_eq!(eyes.pair.left.y, 102.0);
        assert_eq!(eyes.pair.right.x, 125.0);
        assert_eq!(eyes.pair.right.y, 102.0);
    }

    #[test]
    fn frame_rate_gate_swallows_early_calls() {
        let mut eyes = test_eyes();
        let mut panel = Recorder::default();

        assert!(eyes.update(1_000, &mut panel));
        let ops_after_first = panel.ops.len();

        // 33ms interval at 30 fps: 10ms later is too soon
        assert!(!eyes.update(1_010, &mut panel));
        assert_eq!(panel.ops.len(), ops_after_first);

        assert!(eyes.update(1_040, &mut panel));
        assert!(panel.ops.len() > ops_after_first);
    }

    #[test]
    fn tick_is_idempotent_at_rest() {
        let mut eyes = test_eyes();
        let mut panel = Recorder::default();
        eyes.update(100, &mut panel);
        assert_eq!(eyes.pair.left.x, 79.0);
        assert_eq!(eyes.pair.left.y, 102.0);
        assert_eq!(eyes.pair.left.width, 36.0);
        assert_eq!(eyes.pair.left.height, 36.0);
        assert_eq!(eyes.pair.right.x, 125.0);
    }

    #[test]
    fn rigid_pair_holds_through_motion() {
        let mut eyes = test_eyes();
        let mut panel = Recorder::default();
        eyes.look(Direction::NorthWest);
        let mut now = 0;
        for _ in 0..60 {
            now += 40;
            eyes.update(now, &mut panel);
            let l = &eyes.pair.left;
            let r = &eyes.pair.right;
            let offset = r.x - (l.x + l.width + 10.0);
            assert!(
                offset.abs() <= 1.0,
                "right eye drifted {offset} px off the rigid offset"
            );
            assert_eq!(l.y, r.y);
        }
        // And the journey actually happened
        assert_eq!(eyes.pair.left.x, 0.0);
        assert_eq!(eyes.pair.left.y, 0.0);
    }

    #[test]
    fn blink_cycle_closes_and_reopens() {
        let mut eyes = test_eyes();
        let mut panel = Recorder::default();
        eyes.blink();
        assert!(eyes.is_blinking());

        let mut min_height = f32::MAX;
        let mut now = 0;
        for _ in 0..100 {
            now += 40;
            eyes.update(now, &mut panel);
            min_height = min_height.min(eyes.pair.left.height);
            if !eyes.is_blinking() {
                break;
            }
        }
        assert!(!eyes.is_blinking(), "blink never completed");
        assert_eq!(eyes.blink_phase(), BlinkPhase::Open);
        assert!(min_height <= 2.0, "lids only reached {min_height}");

        // A few more ticks settle the eyes back at rest height
        run_ticks(&mut eyes, &mut panel, 30, now);
        assert_eq!(eyes.pair.left.height, 36.0);
    }

    #[test]
    fn idle_wander_stays_inside_the_bounds() {
        let mut eyes = test_eyes();
        let mut panel = Recorder::default();
        eyes.set_idle_mode(true, 0, 0);
        let max_x = eyes.pair.constraint_x();
        let max_y = eyes.pair.constraint_y();

        let mut now = 0;
        let mut moved = false;
        for _ in 0..80 {
            now += 40;
            eyes.update(now, &mut panel);
            let x = eyes.pair.left.x_next;
            let y = eyes.pair.left.y_next;
            moved |= (x, y) != (79, 102);
            assert!((0..max_x).contains(&x), "x target {x} out of [0, {max_x})");
            assert!((0..max_y).contains(&y), "y target {y} out of [0, {max_y})");
        }
        assert!(moved, "idle mode never re-aimed the gaze");
    }

    #[test]
    fn happy_mood_lowers_height_targets_and_draws_the_smile_lid() {
        let mut eyes = test_eyes();
        let mut panel = Recorder::default();
        eyes.set_mood(Mood::Happy);
        eyes.update(100, &mut panel);

        assert_eq!(eyes.pair.left.height_next, 26);
        assert_eq!(eyes.pair.right.height_next, 26);

        // Last two ops are the right eye and its overlay
        let overlay = panel.ops.last().unwrap();
        match overlay {
            Op::RoundRect { x, y, w, h, color } => {
                assert_eq!(*color, Rgb::BLACK);
                let r = &eyes.pair.right;
                let (ex, ey, ew, eh) = (
                    r.x.round() as i32,
                    r.y.round() as i32,
                    r.width.round() as i32,
                    r.height.round() as i32,
                );
                assert_eq!(*x, ex - 1);
                assert_eq!(*w, ew + 2);
                assert_eq!(*y, ey + eh - eh / 2 + 1);
                assert_eq!(*h, eh);
            }
            other => panic!("expected the happy overlay rect, got {other:?}"),
        }
    }

    #[test]
    fn angry_mood_keeps_height_and_draws_mirrored_wedges() {
        let mut eyes = test_eyes();
        let mut panel = Recorder::default();
        eyes.set_mood(Mood::Angry);
        eyes.update(100, &mut panel);

        assert_eq!(eyes.pair.left.height_next, 36);
        let triangles = panel
            .ops
            .iter()
            .filter(|op| matches!(op, Op::Triangle { color } if *color == Rgb::BLACK))
            .count();
        assert_eq!(triangles, 2, "one brow wedge per eye");
    }

    #[test]
    fn tired_mood_narrows_the_eyes() {
        let mut eyes = test_eyes();
        let mut panel = Recorder::default();
        eyes.set_mood(Mood::Tired);
        eyes.update(100, &mut panel);
        assert_eq!(eyes.pair.left.height_next, 21);
        assert_eq!(eyes.pair.right.height_next, 21);
    }

    #[test]
    fn mood_release_restores_rest_height() {
        let mut eyes = test_eyes();
        let mut panel = Recorder::default();
        eyes.set_mood(Mood::Tired);
        let now = run_ticks(&mut eyes, &mut panel, 40, 0);
        assert_eq!(eyes.pair.left.height, 21.0);

        eyes.set_mood(Mood::Default);
        run_ticks(&mut eyes, &mut panel, 40, now);
        assert_eq!(eyes.pair.left.height, 36.0);
    }

    #[test]
    fn cyclops_draws_one_centered_eye() {
        let mut eyes = test_eyes();
        let mut panel = Recorder::default();
        eyes.set_cyclops(true);
        // Park the pair somewhere off-center first
        eyes.look(Direction::NorthWest);
        run_ticks(&mut eyes, &mut panel, 50, 0);

        panel.ops.clear();
        eyes.update(10_000, &mut panel);
        let rects: Vec<&Op> = panel
            .ops
            .iter()
            .filter(|op| matches!(op, Op::RoundRect { color, .. } if *color == Rgb::WHITE))
            .collect();
        assert_eq!(rects.len(), 1, "cyclops mode draws exactly one eye");
        match rects[0] {
            Op::RoundRect { x, y, w, h, .. } => {
                assert_eq!(*x, 240 / 2 - w / 2);
                assert_eq!(*y, 240 / 2 - h / 2);
            }
            _ => unreachable!(),
        }
    }

    #[test]
    fn closed_eyes_draw_nothing_and_stay_closed() {
        let mut eyes = test_eyes();
        let mut panel = Recorder::default();
        eyes.close();
        run_ticks(&mut eyes, &mut panel, 60, 0);
        assert_eq!(eyes.pair.left.height, 0.0);

        panel.ops.clear();
        eyes.update(10_000, &mut panel);
        // Background fill only: no eye shapes at zero height
        assert_eq!(panel.ops, vec![Op::Fill(Rgb::BLACK)]);

        eyes.open();
        run_ticks(&mut eyes, &mut panel, 60, 10_000);
        assert_eq!(eyes.pair.left.height, 36.0);
    }

    #[test]
    fn mood_squint_does_not_reopen_closed_eyes() {
        let mut eyes = test_eyes();
        let mut panel = Recorder::default();
        eyes.close();
        let now = run_ticks(&mut eyes, &mut panel, 60, 0);

        eyes.set_mood(Mood::Happy);
        run_ticks(&mut eyes, &mut panel, 20, now);
        assert_eq!(
            eyes.pair.left.height, 0.0,
            "mood bias must not lift deliberately closed lids"
        );
    }

    #[test]
    fn curiosity_widens_near_the_edge_only() {
        let mut eyes = test_eyes();
        let mut panel = Recorder::default();
        eyes.set_curiosity(true);

        eyes.pair.set_gaze(5, 50);
        eyes.update(100, &mut panel);
        assert_eq!(eyes.pair.left.width_next, 44);
        assert_eq!(eyes.pair.right.width_next, 44);

        eyes.pair.set_gaze(80, 50);
        eyes.update(200, &mut panel);
        assert_eq!(eyes.pair.left.width_next, 36);
        assert_eq!(eyes.pair.right.width_next, 36);
    }

    #[test]
    fn confused_sequence_shakes_and_recenters() {
        let mut eyes = test_eyes();
        let mut panel = Recorder::default();
        let seq = eyes.confused();
        let center_x = eyes.pair.constraint_x() / 2;
        eyes.play(seq);
        assert!(eyes.is_animating());

        let mut now = 0;
        let mut saw_right = false;
        let mut saw_left = false;
        for _ in 0..40 {
            now += 40;
            eyes.update(now, &mut panel);
            saw_right |= eyes.pair.left.x_next == center_x + 20;
            saw_left |= eyes.pair.left.x_next == center_x - 20;
            if !eyes.is_animating() {
                break;
            }
        }
        assert!(saw_right && saw_left, "sequence never swung both ways");
        assert!(!eyes.is_animating(), "sequence never finished");
        assert_eq!(eyes.pair.left.x_next, center_x);
    }

    #[test]
    fn laugh_sequence_keeps_horizontal_gaze() {
        let mut eyes = test_eyes();
        let mut panel = Recorder::default();
        let x_before = eyes.pair.left.x_next;
        let seq = eyes.laugh();
        eyes.play(seq);

        let mut now = 0;
        while eyes.is_animating() && now < 4_000 {
            now += 40;
            eyes.update(now, &mut panel);
            assert_eq!(eyes.pair.left.x_next, x_before);
        }
        assert!(!eyes.is_animating());
    }

    #[test]
    fn buffered_mode_pushes_one_frame_per_tick() {
        let mut eyes = RoboEyes::with_rng_seed(240, 240, 30, 7);
        let mut panel = Recorder::default();
        eyes.update(100, &mut panel);
        assert_eq!(panel.frames_pushed, 1);
        // No direct drawing happened on the panel itself
        assert!(panel.ops.is_empty());
        // Screen center falls in the gap between the eyes, so it carries
        // the background color of a properly composed frame
        assert_eq!(panel.last_frame_center, Some(Rgb::BLACK));

        eyes.update(200, &mut panel);
        assert_eq!(panel.frames_pushed, 2);
    }

    #[test]
    fn autoblink_fires_and_completes_on_its_own() {
        let mut eyes = test_eyes();
        let mut panel = Recorder::default();
        eyes.set_autoblinker(true, 1, 0);

        let mut now = 0;
        let mut blinked = false;
        let mut min_height = f32::MAX;
        for _ in 0..200 {
            now += 40;
            eyes.update(now, &mut panel);
            blinked |= eyes.is_blinking();
            min_height = min_height.min(eyes.pair.left.height);
        }
        assert!(blinked, "autoblinker never started a blink");
        assert!(min_height <= 2.0);

        // Stop scheduling new blinks and let the current one drain out
        eyes.set_autoblinker(false, 0, 0);
        for _ in 0..100 {
            now += 40;
            eyes.update(now, &mut panel);
            if !eyes.is_blinking() {
                break;
            }
        }
        assert!(!eyes.is_blinking(), "blink never completed");
    }

    #[test]
    fn autoblinker_leaves_closed_eyes_alone() {
        let mut eyes = test_eyes();
        let mut panel = Recorder::default();
        eyes.set_autoblinker(true, 1, 0);
        eyes.close();

        let mut now = 0;
        for _ in 0..120 {
            now += 40;
            eyes.update(now, &mut panel);
            assert!(!eyes.is_blinking());
        }
        assert_eq!(eyes.pair.left.height, 0.0);
    }

    #[test]
    fn from_config_applies_shape_and_behavior() {
        let cfg = FaceConfig::default();
        let eyes = RoboEyes::from_config(&cfg);
        assert_eq!(eyes.pair.left.width_default, 16);
        assert_eq!(eyes.pair.left.radius, 4);
        assert_eq!(eyes.pair.spacing, 12);
        // 128x32 screen, 16px eyes, 12px spacing
        assert_eq!(eyes.pair.left.x_default, (128 - (16 + 12 + 16)) / 2);
        assert_eq!(eyes.pair.left.y_default, (32 - 16) / 2);
        assert!(eyes.autoblinker.enabled);
        assert!(eyes.idle.enabled);
    }
}
