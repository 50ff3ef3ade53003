use super::*;
use rbd_core::*;
use rbd_gameplay::*;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Serializes visits per match.
///
/// Every submission runs load → apply → store → publish while holding the
/// match's own lock, so two visits for the same turn can never both be
/// accepted. Different matches proceed independently. The repository's
/// version check catches writers that bypass this referee.
pub struct Referee<R> {
    repository: R,
    feed: Feed,
    gates: Mutex<HashMap<ID<Match>, Arc<Mutex<()>>>>,
}

impl<R> Referee<R>
where
    R: Repository,
{
    pub fn new(repository: R) -> Self {
        Self {
            repository,
            feed: Feed::new(),
            gates: Mutex::new(HashMap::new()),
        }
    }
    pub fn repository(&self) -> &R {
        &self.repository
    }
    pub fn feed(&self) -> &Feed {
        &self.feed
    }
    pub fn subscribe(&self, game: ID<Match>) -> Subscription {
        self.feed.subscribe(game)
    }
    /// Starts a pending match, persists it, and publishes its opening snapshot.
    pub async fn open(&self, game: Match) -> Result<Match, GameError> {
        let game = game.start()?;
        self.repository.create(&game).await?;
        log::info!("[referee] match {} opened: {}", game.id(), game.rules());
        self.feed.publish(&Snapshot::opening(game.clone()));
        Ok(game)
    }
    /// Applies one visit to a match.
    ///
    /// A stale submission fails with [`GameError::Conflict`] and changes
    /// nothing; the caller should reload and resubmit.
    pub async fn submit(
        &self,
        id: ID<Match>,
        submission: &Submission,
    ) -> Result<Transition, GameError> {
        let gate = self.gate(id).await;
        let _guard = gate.lock().await;
        let game = self.repository.load(id).await?;
        if game.is_over() {
            self.release(id).await;
        }
        let transition = game.apply(submission).inspect_err(|e| {
            log::warn!("[referee] match {} rejected visit: {}", id, e);
        })?;
        self.repository
            .store(&transition, game.version())
            .await
            .inspect_err(|e| log::warn!("[referee] match {} store failed: {}", id, e))?;
        self.report(&transition);
        self.feed.publish(&Snapshot::from(&transition));
        if transition.game().is_over() {
            self.release(id).await;
        }
        Ok(transition)
    }
    /// Replays the current leg from stored visits.
    pub async fn replay(&self, id: ID<Match>) -> Result<[Score; N], GameError> {
        let game = self.repository.load(id).await?;
        let visits = self.repository.visits(game.leg().id()).await?;
        Ok(game.replay(&visits))
    }
    async fn gate(&self, id: ID<Match>) -> Arc<Mutex<()>> {
        self.gates.lock().await.entry(id).or_default().clone()
    }
    /// Forgets a finished match's lock. Later submissions for it still
    /// serialize on a fresh lock and are refused by the completed state.
    async fn release(&self, id: ID<Match>) {
        self.gates.lock().await.remove(&id);
    }
    fn report(&self, transition: &Transition) {
        let game = transition.game();
        let visit = transition.visit();
        log::debug!("[referee] match {} P{} {}", game.id(), visit.thrower(), visit);
        if let Some(Bust::NoDouble) = visit.bust() {
            log::warn!(
                "[referee] match {} P{} finished {} without a double",
                game.id(),
                visit.thrower(),
                visit.prior()
            );
        }
        if let Some(leg) = transition.closed() {
            log::info!(
                "[referee] match {} leg {} to P{} ({}-{})",
                game.id(),
                leg.sequence(),
                visit.thrower(),
                game.won(0),
                game.won(1)
            );
        }
        if game.is_over() {
            log::info!("[referee] match {} won by P{}", game.id(), visit.thrower());
        }
    }
}
