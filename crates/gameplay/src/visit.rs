use super::*;
use rbd_board::Dart;
use rbd_core::*;

/// An accepted turn, as recorded.
///
/// Visits are append-only: created once by [`Match::apply`] and never
/// mutated. `order` is strictly increasing within a leg and is the only
/// ordering used to reconstruct history. Only the darts that were counted
/// are kept; a thrower stops once finished or bust.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub struct Visit {
    id: ID<Self>,
    game: ID<Match>,
    leg: ID<Leg>,
    thrower: Position,
    darts: Vec<Dart>,
    prior: Score,
    total: Score,
    bust: Option<Bust>,
    checkout: bool,
    order: u32,
}

impl Visit {
    pub fn new(
        game: ID<Match>,
        leg: ID<Leg>,
        thrower: Position,
        order: u32,
        darts: &[Dart],
        outcome: &Outcome,
    ) -> Self {
        Self {
            id: ID::default(),
            game,
            leg,
            thrower,
            order,
            darts: darts.iter().take(outcome.counted()).copied().collect(),
            prior: outcome.prior(),
            total: outcome.total(),
            bust: outcome.bust(),
            checkout: outcome.is_checkout(),
        }
    }
}

impl Visit {
    pub fn game(&self) -> ID<Match> {
        self.game
    }
    pub fn leg(&self) -> ID<Leg> {
        self.leg
    }
    pub fn thrower(&self) -> Position {
        self.thrower
    }
    pub fn darts(&self) -> &[Dart] {
        &self.darts
    }
    /// Points left before this visit.
    pub fn prior(&self) -> Score {
        self.prior
    }
    /// Points scored; zero on a bust.
    pub fn total(&self) -> Score {
        self.total
    }
    /// Points left after this visit.
    pub fn remaining(&self) -> Score {
        self.prior - self.total
    }
    pub fn bust(&self) -> Option<Bust> {
        self.bust
    }
    pub fn is_bust(&self) -> bool {
        self.bust.is_some()
    }
    pub fn is_checkout(&self) -> bool {
        self.checkout
    }
    /// Creation order within the leg, starting at 1.
    pub fn order(&self) -> u32 {
        self.order
    }
}

impl Unique for Visit {
    fn id(&self) -> ID<Self> {
        self.id
    }
}

impl std::fmt::Display for Visit {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let darts = self
            .darts
            .iter()
            .map(|d| d.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        match (self.bust, self.checkout) {
            (Some(bust), _) => write!(f, "P{} [{}] BUST ({})", self.thrower, darts, bust),
            (None, true) => write!(f, "P{} [{}] CHECKOUT {}", self.thrower, darts, self.total),
            (None, false) => write!(f, "P{} [{}] {} ({} left)", self.thrower, darts, self.total, self.remaining()),
        }
    }
}
