use rbd_core::*;
use rbd_gameplay::GameError;

/// A calibrated bot skill tier.
///
/// Tiers are named by rough three-dart average ambition, from 20 (a
/// beginner) to 95 (touring professional). Each maps to one entry of
/// [`BOT_DISPERSION`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub struct Level(u8);

impl Level {
    pub fn tier(&self) -> u8 {
        self.0
    }
    /// Aim dispersion for this tier.
    pub fn sigma(&self) -> Coordinate {
        BOT_DISPERSION
            .iter()
            .find(|(tier, _)| *tier == self.0)
            .map(|(_, sigma)| *sigma)
            .unwrap_or(BOT_DISPERSION[0].1)
    }
    /// Every tier, weakest first.
    pub fn all() -> impl Iterator<Item = Self> {
        BOT_DISPERSION.iter().map(|(tier, _)| Self(*tier))
    }
    pub fn weakest() -> Self {
        Self(BOT_DISPERSION[0].0)
    }
    pub fn strongest() -> Self {
        Self(BOT_DISPERSION[BOT_DISPERSION.len() - 1].0)
    }
}

impl TryFrom<u8> for Level {
    type Error = GameError;
    fn try_from(tier: u8) -> Result<Self, Self::Error> {
        BOT_DISPERSION
            .iter()
            .find(|(t, _)| *t == tier)
            .map(|(t, _)| Self(*t))
            .ok_or_else(|| {
                GameError::Configuration(format!(
                    "no bot level {} (expected one of {})",
                    tier,
                    BOT_DISPERSION
                        .iter()
                        .map(|(t, _)| t.to_string())
                        .collect::<Vec<_>>()
                        .join(", ")
                ))
            })
    }
}

impl Default for Level {
    fn default() -> Self {
        Self(55)
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "L{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nine_tiers() {
        assert_eq!(Level::all().count(), 9);
        assert_eq!(Level::weakest().tier(), 20);
        assert_eq!(Level::strongest().tier(), 95);
    }

    #[test]
    fn unknown_tier_rejected() {
        assert!(Level::try_from(50).is_err());
        assert!(Level::try_from(0).is_err());
        assert_eq!(Level::try_from(85).unwrap().tier(), 85);
    }

    #[test]
    fn stronger_is_tighter() {
        let levels = Level::all().collect::<Vec<_>>();
        assert!(levels.windows(2).all(|w| w[0].sigma() > w[1].sigma()));
        assert_eq!(Level::try_from(20).unwrap().sigma(), 0.170);
    }
}
