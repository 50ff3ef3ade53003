use rbd_core::Score;

/// Named performance band for a drill total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub enum Grade {
    Novice,
    Beginner,
    Intermediate,
    Advanced,
    Professional,
    Expert,
}

impl Grade {
    /// The first band whose threshold `score` reaches, else novice.
    /// Bands are listed highest first.
    pub(crate) fn banded(score: Score, bands: &[(Score, Self)]) -> Self {
        bands
            .iter()
            .find(|(threshold, _)| score >= *threshold)
            .map(|(_, grade)| *grade)
            .unwrap_or(Self::Novice)
    }
}

impl std::fmt::Display for Grade {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Novice => write!(f, "Novice"),
            Self::Beginner => write!(f, "Beginner"),
            Self::Intermediate => write!(f, "Intermediate"),
            Self::Advanced => write!(f, "Advanced"),
            Self::Professional => write!(f, "Professional"),
            Self::Expert => write!(f, "Expert"),
        }
    }
}
