use super::*;
use rbd_board::Dart;
use rbd_core::Score;

/// Anything that can step up to the oche.
///
/// The table asks the player to throw whenever it holds the turn and relays
/// every published snapshot. Implementations may compute locally, wait on a
/// person, or talk to a remote client; the table only sees darts.
#[async_trait::async_trait]
pub trait Player: Send {
    /// Throws up to three darts from `remaining`.
    async fn throw(&mut self, remaining: Score, double_out: bool) -> Vec<Dart>;
    /// Observes a state change of the match being played.
    async fn notify(&mut self, _: &Snapshot) {}
}
