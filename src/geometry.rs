// Eye geometry: sizes, positions and the bounds gaze targets live in

use crate::mood::Direction;
use crate::motion;

/// Geometry of a single eye.
///
/// Every animated dimension is a pair: an integer target and a float current
/// value that the motion interpolator drags toward it each tick. Defaults are
/// the configured rest values that blinks and moods return to.
#[derive(Debug, Clone, Copy)]
pub(crate) struct EyeGeometry {
    pub(crate) width_default: i32,
    pub(crate) height_default: i32,
    pub(crate) x_default: i32,
    pub(crate) y_default: i32,
    pub(crate) radius: i32,

    pub(crate) width: f32,
    pub(crate) height: f32,
    pub(crate) x: f32,
    pub(crate) y: f32,

    pub(crate) width_next: i32,
    pub(crate) height_next: i32,
    pub(crate) x_next: i32,
    pub(crate) y_next: i32,

    /// Logical lid state; a blink may cover the eye while this stays true.
    pub(crate) open: bool,
}

impl EyeGeometry {
    fn new(width: i32, height: i32, radius: i32) -> Self {
        Self {
            width_default: width,
            height_default: height,
            x_default: 0,
            y_default: 0,
            radius,
            width: width as f32,
            height: height as f32,
            x: 0.0,
            y: 0.0,
            width_next: width,
            height_next: height,
            x_next: 0,
            y_next: 0,
            open: true,
        }
    }

    /// Change the rest width. The current value eases over.
    pub(crate) fn set_width(&mut self, width: i32) {
        self.width_default = width;
        self.width_next = width;
    }

    pub(crate) fn set_height(&mut self, height: i32) {
        self.height_default = height;
        self.height_next = height;
    }

    /// Pin the eye to a resting position, without easing.
    fn place(&mut self, x: i32, y: i32) {
        self.x_default = x;
        self.y_default = y;
        self.x = x as f32;
        self.y = y as f32;
        self.x_next = x;
        self.y_next = y;
    }

    fn ease(&mut self) {
        self.width = motion::ease(self.width, self.width_next);
        self.height = motion::ease(self.height, self.height_next);
        self.x = motion::ease(self.x, self.x_next);
        self.y = motion::ease(self.y, self.y_next);
    }
}

/// Both eyes plus the spacing that welds them into one rigid unit.
///
/// All gaze math is phrased in terms of the left eye; the right eye is
/// re-derived from it whenever targets move.
pub(crate) struct EyePair {
    pub(crate) left: EyeGeometry,
    pub(crate) right: EyeGeometry,
    pub(crate) spacing: i32,
    screen_width: i32,
    screen_height: i32,
}

impl EyePair {
    pub(crate) fn new(
        screen_width: i32,
        screen_height: i32,
        eye_width: i32,
        eye_height: i32,
        radius: i32,
        spacing: i32,
    ) -> Self {
        let mut pair = Self {
            left: EyeGeometry::new(eye_width, eye_height, radius),
            right: EyeGeometry::new(eye_width, eye_height, radius),
            spacing,
            screen_width,
            screen_height,
        };
        pair.center();
        pair
    }

    /// Rest both eyes centered on screen for their current default sizes.
    pub(crate) fn center(&mut self) {
        let total =
            self.left.width_default + self.spacing + self.right.width_default;
        let left_x = (self.screen_width - total) / 2;
        let left_y = (self.screen_height - self.left.height_default) / 2;
        self.left.place(left_x, left_y);
        self.right.place(
            left_x + self.left.width_default + self.spacing,
            left_y,
        );
    }

    /// Horizontal gaze bound. Uses the live widths, so a widened pair
    /// (curiosity) has less room to roam.
    pub(crate) fn constraint_x(&self) -> i32 {
        self.screen_width
            - self.left.width.round() as i32
            - self.spacing
            - self.right.width.round() as i32
    }

    /// Vertical gaze bound. Deliberately keyed to the default height, not the
    /// live one, so a mid-blink pair does not gain extra travel.
    pub(crate) fn constraint_y(&self) -> i32 {
        self.screen_height - self.left.height_default
    }

    /// Map a compass direction onto the corner or edge midpoint of the
    /// position bounds.
    pub(crate) fn look(&mut self, dir: Direction) {
        let max_x = self.constraint_x();
        let max_y = self.constraint_y();
        let (x, y) = match dir {
            Direction::North => (max_x / 2, 0),
            Direction::NorthEast => (max_x, 0),
            Direction::East => (max_x, max_y / 2),
            Direction::SouthEast => (max_x, max_y),
            Direction::South => (max_x / 2, max_y),
            Direction::SouthWest => (0, max_y),
            Direction::West => (0, max_y / 2),
            Direction::NorthWest => (0, 0),
            Direction::Center => (max_x / 2, max_y / 2),
        };
        self.set_gaze(x, y);
    }

    /// Aim the left eye at a pixel position; the right eye follows rigidly.
    pub(crate) fn set_gaze(&mut self, x: i32, y: i32) {
        self.left.x_next = x;
        self.left.y_next = y;
        self.align_right();
    }

    /// Re-derive the right eye's position targets from the left eye.
    pub(crate) fn align_right(&mut self) {
        self.right.x_next =
            self.left.x_next + self.left.width.round() as i32 + self.spacing;
        self.right.y_next = self.left.y_next;
    }

    pub(crate) fn ease(&mut self) {
        self.left.ease();
        self.right.ease();
    }
}
