use super::*;
use rbd_board::Dart;
use rbd_board::Segment;
use rbd_core::*;

/// Rounds in a JDC challenge.
pub const JDC_ROUNDS: usize = 14;

/// What a JDC round is played at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub enum Target {
    /// Any bed of the number.
    Number(u8),
    /// The treble only.
    Treble(u8),
    /// Any double, bull included.
    Doubles,
    /// The inner bull only.
    Bull,
}

impl Target {
    /// The target of a 1-based round.
    pub fn of(round: usize) -> Option<Self> {
        match round {
            1..=6 => Some(Self::Number(9 + round as u8)),
            7..=12 => Some(Self::Treble(3 + round as u8)),
            13 => Some(Self::Doubles),
            14 => Some(Self::Bull),
            _ => None,
        }
    }
    pub fn qualifies(&self, segment: Segment) -> bool {
        match self {
            Self::Number(n) => segment.number() == Some(*n),
            Self::Treble(n) => segment == Segment::Triple(*n),
            Self::Doubles => segment.is_double(),
            Self::Bull => segment == Segment::Bull,
        }
    }
    /// Whether doubles earn a bonus point this round.
    pub fn rewards_doubles(&self) -> bool {
        !matches!(self, Self::Bull)
    }
}

impl std::fmt::Display for Target {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}s", n),
            Self::Treble(n) => write!(f, "T{}s", n),
            Self::Doubles => write!(f, "doubles"),
            Self::Bull => write!(f, "bull"),
        }
    }
}

/// A scored JDC round.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub struct Round {
    target: Target,
    darts: Vec<Dart>,
    score: Score,
    bonus: Score,
}

impl Round {
    fn new(target: Target, darts: &[Dart]) -> Self {
        let hits = darts
            .iter()
            .filter(|d| target.qualifies(d.segment()))
            .collect::<Vec<_>>();
        let score = hits.iter().map(|d| d.value()).sum();
        let bonus = match target.rewards_doubles() {
            true => hits.iter().filter(|d| d.multiplier() == 2).count() as Score,
            false => 0,
        };
        Self {
            target,
            darts: darts.to_vec(),
            score,
            bonus,
        }
    }
    pub fn target(&self) -> Target {
        self.target
    }
    pub fn darts(&self) -> &[Dart] {
        &self.darts
    }
    /// Sum of qualifying dart values.
    pub fn score(&self) -> Score {
        self.score
    }
    /// One point per qualifying double.
    pub fn bonus(&self) -> Score {
        self.bonus
    }
    pub fn total(&self) -> Score {
        self.score + self.bonus
    }
}

/// JDC challenge.
///
/// Fourteen rounds of three darts: any bed of 10 to 15, trebles of 10 to 15,
/// any double, then the inner bull. Only darts in the round's target score,
/// and each double among them earns a bonus point except in the bull round.
#[derive(Debug, Default, Clone)]
pub struct Jdc {
    rounds: Vec<Round>,
}

impl Jdc {
    pub fn new() -> Self {
        Self::default()
    }
    /// Scores the current round.
    pub fn record(&mut self, darts: &[Dart]) -> Result<&Round, DrillError> {
        self.progress().ensure("JDC challenge")?;
        if darts.len() > DARTS_PER_VISIT {
            return Err(DrillError::Validation(format!(
                "a round has at most {} darts, got {}",
                DARTS_PER_VISIT,
                darts.len()
            )));
        }
        let target = self.target().ok_or_else(|| {
            DrillError::Validation("JDC challenge has no round left".into())
        })?;
        self.rounds.push(Round::new(target, darts));
        if !self.progress().is_active() {
            log::info!("JDC challenge finished on {} ({})", self.total(), self.grade());
        }
        self.rounds
            .last()
            .ok_or_else(|| DrillError::Validation("JDC round was not recorded".into()))
    }
    /// The target of the round about to be played.
    pub fn target(&self) -> Option<Target> {
        Target::of(self.rounds.len() + 1)
    }
    pub fn progress(&self) -> Progress {
        match self.rounds.len() >= JDC_ROUNDS {
            true => Progress::Completed,
            false => Progress::Active,
        }
    }
    pub fn rounds(&self) -> &[Round] {
        &self.rounds
    }
    pub fn total(&self) -> Score {
        self.rounds.iter().map(Round::total).sum()
    }
    pub fn bonus(&self) -> Score {
        self.rounds.iter().map(Round::bonus).sum()
    }
    pub fn highest(&self) -> Score {
        self.rounds.iter().map(Round::total).max().unwrap_or(0)
    }
    pub fn average(&self) -> f32 {
        match self.rounds.len() {
            0 => 0.,
            n => self.total() as f32 / n as f32,
        }
    }
    pub fn grade(&self) -> Grade {
        Grade::banded(
            self.total(),
            &[
                (500, Grade::Professional),
                (400, Grade::Advanced),
                (300, Grade::Intermediate),
                (200, Grade::Beginner),
            ],
        )
    }
}
