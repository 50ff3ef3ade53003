use super::*;
use rbd_core::*;

/// Starting score of every leg.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub enum Start {
    X301,
    #[default]
    X501,
}

impl From<Start> for Score {
    fn from(start: Start) -> Score {
        match start {
            Start::X301 => 301,
            Start::X501 => 501,
        }
    }
}

impl TryFrom<Score> for Start {
    type Error = GameError;
    fn try_from(score: Score) -> Result<Self, Self::Error> {
        match score {
            301 => Ok(Self::X301),
            501 => Ok(Self::X501),
            _ => Err(GameError::Configuration(format!(
                "unsupported starting score {}",
                score
            ))),
        }
    }
}

impl std::fmt::Display for Start {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", Score::from(*self))
    }
}

/// Who throws first in each leg.
///
/// - `Alternate` — seat 0 opens leg 1, and the opener swaps every leg
/// - `Fixed` — the given seat opens every leg
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub enum Opening {
    #[default]
    Alternate,
    Fixed(Position),
}

impl Opening {
    /// Opener of the first leg.
    pub fn first(&self) -> Position {
        match self {
            Self::Alternate => 0,
            Self::Fixed(p) => *p,
        }
    }
    /// Opener of the leg after one opened by `previous`.
    pub fn after(&self, previous: Position) -> Position {
        match self {
            Self::Alternate => (previous + 1) % N,
            Self::Fixed(p) => *p,
        }
    }
}

/// Match configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub struct Rules {
    start: Start,
    legs: u8,
    double_out: bool,
    opening: Opening,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            start: Start::X501,
            legs: 3,
            double_out: true,
            opening: Opening::Alternate,
        }
    }
}

impl Rules {
    pub fn new(start: Start, legs: u8, double_out: bool, opening: Opening) -> Result<Self, GameError> {
        Self {
            start,
            legs,
            double_out,
            opening,
        }
        .validate()
    }
    /// Rejects configurations no match could be played under.
    pub fn validate(self) -> Result<Self, GameError> {
        if self.legs == 0 {
            return Err(GameError::Configuration("legs to win must be positive".into()));
        }
        if let Opening::Fixed(p) = self.opening {
            if p >= N {
                return Err(GameError::Configuration(format!("no seat {} to open legs", p)));
            }
        }
        Ok(self)
    }
    pub fn start(&self) -> Start {
        self.start
    }
    /// Starting score as points.
    pub fn points(&self) -> Score {
        Score::from(self.start)
    }
    /// Legs needed to win the match.
    pub fn legs(&self) -> u8 {
        self.legs
    }
    pub fn double_out(&self) -> bool {
        self.double_out
    }
    pub fn opening(&self) -> Opening {
        self.opening
    }
}

impl std::fmt::Display for Rules {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{} first to {} {}",
            self.start,
            self.legs,
            if self.double_out { "double out" } else { "straight out" }
        )
    }
}
