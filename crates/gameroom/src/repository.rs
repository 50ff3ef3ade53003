use rbd_core::*;
use rbd_gameplay::*;

/// Persistence for matches, legs, and visits.
///
/// Implementations must make [`store`](Self::store) atomic and must refuse
/// it with [`GameError::Conflict`] when the stored match is no longer at
/// `expected` version. That check backs up the referee's per-match lock
/// against writers outside this process.
#[async_trait::async_trait]
pub trait Repository: Send + Sync {
    /// Inserts a new match and its opening leg.
    async fn create(&self, game: &Match) -> Result<(), GameError>;
    /// The current state of a match.
    async fn load(&self, id: ID<Match>) -> Result<Match, GameError>;
    /// Persists a transition produced from the match at `expected` version.
    async fn store(&self, transition: &Transition, expected: u64) -> Result<(), GameError>;
    /// Every visit of a leg in creation order.
    async fn visits(&self, leg: ID<Leg>) -> Result<Vec<Visit>, GameError>;
    /// Every leg of a match in sequence order.
    async fn legs(&self, game: ID<Match>) -> Result<Vec<Leg>, GameError>;
}
