use std::fmt;

/// Playback speed, `1` being the fastest and `5` the slowest.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SpeedLevel(u8);

impl SpeedLevel {
    pub const FASTEST: Self = Self(1);
    pub const NORMAL: Self = Self(3);
    pub const SLOWEST: Self = Self(5);

    pub fn new(level: u8) -> Option<Self> {
        (Self::FASTEST.0..=Self::SLOWEST.0)
            .contains(&level)
            .then_some(Self(level))
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// Seconds between two generations while running.
    pub fn interval(self) -> f64 {
        match self.0 {
            1 => 0.01,
            2 => 0.05,
            3 => 0.1,
            4 => 0.5,
            _ => 1.,
        }
    }

    pub fn label(self) -> &'static str {
        match self.0 {
            1 => "Fastest",
            2 => "Faster",
            3 => "Normal",
            4 => "Slower",
            _ => "Slowest",
        }
    }

    pub fn faster(self) -> Self {
        Self(self.0.saturating_sub(1).max(Self::FASTEST.0))
    }

    pub fn slower(self) -> Self {
        Self((self.0 + 1).min(Self::SLOWEST.0))
    }
}

impl Default for SpeedLevel {
    fn default() -> Self {
        Self::NORMAL
    }
}

impl fmt::Display for SpeedLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
