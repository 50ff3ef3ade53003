use super::*;
use rbd_core::*;

/// One race to zero within a match.
///
/// Legs are numbered from 1 and only ever move from active to completed.
/// The leg also counts its visits so each new one gets the next
/// `created_order`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub struct Leg {
    id: ID<Self>,
    game: ID<Match>,
    sequence: u32,
    opener: Position,
    winner: Option<Position>,
    visits: u32,
}

impl Leg {
    /// Leg 1 of a match.
    pub fn first(game: ID<Match>, opener: Position) -> Self {
        Self {
            id: ID::default(),
            game,
            sequence: 1,
            opener,
            winner: None,
            visits: 0,
        }
    }
    /// The leg that follows this one.
    pub fn next(&self, opener: Position) -> Self {
        Self {
            id: ID::default(),
            game: self.game,
            sequence: self.sequence + 1,
            opener,
            winner: None,
            visits: 0,
        }
    }
    pub(crate) fn close(&mut self, winner: Position) {
        self.winner = Some(winner);
    }
    /// Reserves the creation order for the next visit.
    pub(crate) fn count(&mut self) -> u32 {
        self.visits += 1;
        self.visits
    }
}

impl Leg {
    pub fn game(&self) -> ID<Match> {
        self.game
    }
    /// 1-based position of this leg within its match.
    pub fn sequence(&self) -> u32 {
        self.sequence
    }
    /// Seat that threw first.
    pub fn opener(&self) -> Position {
        self.opener
    }
    pub fn winner(&self) -> Option<Position> {
        self.winner
    }
    /// Visits recorded so far.
    pub fn visits(&self) -> u32 {
        self.visits
    }
    pub fn status(&self) -> Status {
        match self.winner {
            Some(_) => Status::Completed,
            None => Status::Active,
        }
    }
}

impl Unique for Leg {
    fn id(&self) -> ID<Self> {
        self.id
    }
}

impl std::fmt::Display for Leg {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.winner {
            Some(p) => write!(f, "leg {} won by P{}", self.sequence, p),
            None => write!(f, "leg {} ({} visits)", self.sequence, self.visits),
        }
    }
}
