use super::*;
use rbd_board::Dart;
use rbd_core::*;

/// A thrower's darts, stamped with the state they were thrown against.
///
/// The leg, thrower, and version let [`Match::apply`] detect a submission
/// built from a stale read and refuse it with [`GameError::Conflict`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub struct Submission {
    leg: ID<Leg>,
    thrower: Position,
    version: u64,
    darts: Vec<Dart>,
}

impl Submission {
    pub fn new(leg: ID<Leg>, thrower: Position, version: u64, darts: Vec<Dart>) -> Self {
        Self {
            leg,
            thrower,
            version,
            darts,
        }
    }
    /// A submission for whoever is on the oche in the given state.
    pub fn current(game: &Match, darts: Vec<Dart>) -> Self {
        Self::new(game.leg().id(), game.thrower(), game.version(), darts)
    }
    pub fn leg(&self) -> ID<Leg> {
        self.leg
    }
    pub fn thrower(&self) -> Position {
        self.thrower
    }
    pub fn version(&self) -> u64 {
        self.version
    }
    pub fn darts(&self) -> &[Dart] {
        &self.darts
    }
}
