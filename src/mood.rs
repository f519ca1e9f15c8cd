// Mood and gaze vocabulary shared by the engine, the director and the host

/// Eye expression. Moods reshape the eyes every tick until replaced,
/// so switching is a single state change, not an animation to manage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mood {
    Default,
    Tired,
    Angry,
    Happy,
}

impl Default for Mood {
    fn default() -> Self {
        Mood::Default
    }
}

impl Mood {
    pub fn next(&self) -> Self {
        match self {
            Mood::Default => Mood::Tired,
            Mood::Tired => Mood::Angry,
            Mood::Angry => Mood::Happy,
            Mood::Happy => Mood::Default,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Mood::Default => "Default",
            Mood::Tired => "Tired",
            Mood::Angry => "Angry",
            Mood::Happy => "Happy",
        }
    }

    /// Pixels shaved off the eye height target while the mood is active.
    /// Angry narrows via its eyelid wedges alone, so the height stands.
    pub(crate) fn squint(&self) -> i32 {
        match self {
            Mood::Default | Mood::Angry => 0,
            Mood::Happy => 10,
            Mood::Tired => 15,
        }
    }
}

/// Compass gaze target inside the current position bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Center,
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mood_cycle_visits_all_four() {
        let mut m = Mood::Default;
        let mut seen = vec![m];
        for _ in 0..3 {
            m = m.next();
            seen.push(m);
        }
        assert_eq!(seen, vec![Mood::Default, Mood::Tired, Mood::Angry, Mood::Happy]);
        assert_eq!(m.next(), Mood::Default);
    }

    #[test]
    fn squint_depths_match_the_moods() {
        assert_eq!(Mood::Default.squint(), 0);
        assert_eq!(Mood::Angry.squint(), 0);
        assert_eq!(Mood::Happy.squint(), 10);
        assert_eq!(Mood::Tired.squint(), 15);
    }
}
