use super::*;
use rbd_core::*;
use rbd_gameplay::GameError;

/// How widely a thrower scatters around the aim point.
///
/// `sigma` is the per-axis standard deviation in board-normalized units.
/// Zero is a perfect thrower.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub struct Profile {
    sigma: Coordinate,
}

impl Profile {
    /// A profile with arbitrary dispersion. Must be finite and non-negative.
    pub fn custom(sigma: Coordinate) -> Result<Self, GameError> {
        match sigma.is_finite() && sigma >= 0. {
            true => Ok(Self { sigma }),
            false => Err(GameError::Configuration(format!(
                "dispersion must be a non-negative number, got {}",
                sigma
            ))),
        }
    }
    /// Never misses the aim point.
    pub fn perfect() -> Self {
        Self { sigma: 0. }
    }
    pub fn sigma(&self) -> Coordinate {
        self.sigma
    }
}

impl From<Level> for Profile {
    fn from(level: Level) -> Self {
        Self {
            sigma: level.sigma(),
        }
    }
}

impl Default for Profile {
    fn default() -> Self {
        Self::from(Level::default())
    }
}

impl std::fmt::Display for Profile {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "σ={:.3}", self.sigma)
    }
}
