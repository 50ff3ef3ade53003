use super::*;
use rbd_board::Dart;
use rbd_core::*;

/// Why a visit scored nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub enum Bust {
    /// The remainder went below zero.
    Overshoot,
    /// The remainder landed on one, which no double can finish.
    LeftOne,
    /// The remainder reached zero without a double under double-out rules.
    NoDouble,
}

impl std::fmt::Display for Bust {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Overshoot => write!(f, "overshoot"),
            Self::LeftOne => write!(f, "left one"),
            Self::NoDouble => write!(f, "no double"),
        }
    }
}

/// A resolved visit.
///
/// Darts are evaluated in throw order and evaluation stops at the first
/// terminal [`Step`]; darts after a bust or a finish are not counted. On a
/// bust the total is zero and the remainder is the prior score. On a
/// checkout the total is the prior score and the remainder is zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    prior: Score,
    total: Score,
    remaining: Score,
    counted: usize,
    bust: Option<Bust>,
}

impl Outcome {
    /// Applies up to three darts to `prior` points left.
    pub fn resolve(prior: Score, darts: &[Dart], double_out: bool) -> Self {
        let mut running = prior;
        for (i, dart) in darts.iter().take(DARTS_PER_VISIT).enumerate() {
            match Step::after(running, dart.segment(), double_out) {
                Step::Open(left) => running = left,
                Step::Bust(bust) => return Self::busted(prior, i + 1, bust),
                Step::Checkout => return Self::finished(prior, i + 1),
            }
        }
        Self {
            prior,
            total: prior - running,
            remaining: running,
            counted: darts.len().min(DARTS_PER_VISIT),
            bust: None,
        }
    }
    fn busted(prior: Score, counted: usize, bust: Bust) -> Self {
        Self {
            prior,
            total: 0,
            remaining: prior,
            counted,
            bust: Some(bust),
        }
    }
    fn finished(prior: Score, counted: usize) -> Self {
        Self {
            prior,
            total: prior,
            remaining: 0,
            counted,
            bust: None,
        }
    }
}

impl Outcome {
    pub fn prior(&self) -> Score {
        self.prior
    }
    /// Points scored; zero on a bust.
    pub fn total(&self) -> Score {
        self.total
    }
    /// Points left after the visit.
    pub fn remaining(&self) -> Score {
        self.remaining
    }
    /// How many darts were evaluated before the visit ended.
    pub fn counted(&self) -> usize {
        self.counted
    }
    pub fn bust(&self) -> Option<Bust> {
        self.bust
    }
    pub fn is_bust(&self) -> bool {
        self.bust.is_some()
    }
    pub fn is_checkout(&self) -> bool {
        self.bust.is_none() && self.remaining == 0 && self.counted > 0
    }
    /// Reports a non-double finish attempt as a validation error.
    ///
    /// The visit itself is still a valid bust; this lets callers surface the
    /// reason to whoever threw it.
    pub fn check(&self) -> Result<&Self, GameError> {
        match self.bust {
            Some(Bust::NoDouble) => Err(GameError::Validation(format!(
                "finishing {} requires a double or the bullseye",
                self.prior
            ))),
            _ => Ok(self),
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match (self.bust, self.is_checkout()) {
            (Some(bust), _) => write!(f, "BUST ({}) {} left", bust, self.remaining),
            (None, true) => write!(f, "CHECKOUT {}", self.total),
            (None, false) => write!(f, "{} scored, {} left", self.total, self.remaining),
        }
    }
}
