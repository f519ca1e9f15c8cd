// Canned keyframe animations: short scripted gaze gestures

/// One step of a canned animation: optional new gaze targets for the left
/// eye, held for a number of animation ticks. Axes left `None` keep their
/// current target, so a horizontal shake never disturbs vertical gaze.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Keyframe {
    pub x: Option<i32>,
    pub y: Option<i32>,
    pub hold_ticks: u16,
}

impl Keyframe {
    pub fn x(x: i32, hold_ticks: u16) -> Self {
        Self { x: Some(x), y: None, hold_ticks }
    }

    pub fn y(y: i32, hold_ticks: u16) -> Self {
        Self { x: None, y: Some(y), hold_ticks }
    }
}

/// A finite keyframe script, consumed one frame at a time by the engine.
/// Playback shares the normal animation tick, so a sequence never blocks
/// blinking or mood changes; it only pins the gaze while it runs.
#[derive(Debug, Clone)]
pub struct Sequence {
    frames: Vec<Keyframe>,
    cursor: usize,
}

impl Sequence {
    pub fn new(frames: Vec<Keyframe>) -> Self {
        Self { frames, cursor: 0 }
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Horizontal head-shake: three quick swings around `center_x`,
    /// then back to center.
    pub(crate) fn confused(center_x: i32) -> Self {
        let mut frames = Vec::new();
        for _ in 0..3 {
            frames.push(Keyframe::x(center_x + 20, 5));
            frames.push(Keyframe::x(center_x - 20, 5));
        }
        frames.push(Keyframe::x(center_x, 1));
        Self::new(frames)
    }

    /// Vertical bounce around `center_y`, then back to center.
    pub(crate) fn laugh(center_y: i32) -> Self {
        let mut frames = Vec::new();
        for _ in 0..3 {
            frames.push(Keyframe::y(center_y - 15, 4));
            frames.push(Keyframe::y(center_y + 15, 4));
        }
        frames.push(Keyframe::y(center_y, 1));
        Self::new(frames)
    }
}

impl Iterator for Sequence {
    type Item = Keyframe;

    fn next(&mut self) -> Option<Keyframe> {
        let frame = self.frames.get(self.cursor).copied();
        if frame.is_some() {
            self.cursor += 1;
        }
        frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confused_swings_then_recenters() {
        let seq = Sequence::confused(100);
        let frames: Vec<Keyframe> = seq.collect();
        assert_eq!(frames.len(), 7);
        assert_eq!(frames[0], Keyframe::x(120, 5));
        assert_eq!(frames[1], Keyframe::x(80, 5));
        assert_eq!(frames[6], Keyframe::x(100, 1));
        // Purely horizontal: vertical gaze is never touched
        assert!(frames.iter().all(|f| f.y.is_none()));
    }

    #[test]
    fn laugh_bounces_then_recenters() {
        let seq = Sequence::laugh(50);
        let frames: Vec<Keyframe> = seq.collect();
        assert_eq!(frames.len(), 7);
        assert_eq!(frames[0], Keyframe::y(35, 4));
        assert_eq!(frames[1], Keyframe::y(65, 4));
        assert_eq!(frames[6], Keyframe::y(50, 1));
        assert!(frames.iter().all(|f| f.x.is_none()));
    }

    #[test]
    fn iteration_stops_at_the_end() {
        let mut seq = Sequence::new(vec![Keyframe::x(1, 1)]);
        assert!(seq.next().is_some());
        assert!(seq.next().is_none());
        assert!(seq.next().is_none());
    }
}
