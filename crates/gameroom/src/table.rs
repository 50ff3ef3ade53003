use super::*;
use rbd_core::*;
use rbd_gameplay::*;
use std::sync::Arc;

/// Plays one match between two players through a referee.
///
/// The table owns the players and asks whoever holds the turn to throw,
/// submitting their darts against the state they saw. Each player is told
/// about every snapshot the referee publishes for the match.
pub struct Table<R> {
    referee: Arc<Referee<R>>,
    players: [Box<dyn Player>; N],
}

impl<R> Table<R>
where
    R: Repository,
{
    pub fn new(referee: Arc<Referee<R>>, home: Box<dyn Player>, away: Box<dyn Player>) -> Self {
        Self {
            referee,
            players: [home, away],
        }
    }
    /// Opens `game` and plays it out, returning the completed match.
    pub async fn play(mut self, game: Match) -> Result<Match, GameError> {
        let mut game = self.referee.open(game).await?;
        self.broadcast(&Snapshot::opening(game.clone())).await;
        while !game.is_over() {
            let seat = game.thrower();
            let darts = self.players[seat]
                .throw(game.remaining(seat), game.rules().double_out())
                .await;
            let submission = Submission::current(&game, darts);
            let transition = self.referee.submit(game.id(), &submission).await?;
            self.broadcast(&Snapshot::from(&transition)).await;
            game = transition.into_parts().0;
        }
        Ok(game)
    }
    async fn broadcast(&mut self, snapshot: &Snapshot) {
        for player in self.players.iter_mut() {
            player.notify(snapshot).await;
        }
    }
}
