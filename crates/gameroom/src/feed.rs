use super::*;
use futures::Stream;
use rbd_core::*;
use rbd_gameplay::Match;
use std::collections::HashMap;
use std::pin::Pin;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::MutexGuard;
use std::sync::PoisonError;
use std::sync::atomic::AtomicU64;
use std::sync::atomic::Ordering;
use std::task::Context;
use std::task::Poll;
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::sync::mpsc::UnboundedSender;
use tokio::sync::mpsc::unbounded_channel;

type Inboxes = HashMap<ID<Match>, Vec<(u64, UnboundedSender<Snapshot>)>>;

#[derive(Debug, Default)]
struct Registry {
    next: AtomicU64,
    inboxes: Mutex<Inboxes>,
}

impl Registry {
    /// The inbox table. A panic elsewhere never leaves it half-written, so a
    /// poisoned lock is taken over rather than abandoned.
    fn inboxes(&self) -> MutexGuard<'_, Inboxes> {
        self.inboxes.lock().unwrap_or_else(PoisonError::into_inner)
    }
    fn remove(&self, game: ID<Match>, key: u64) {
        let mut inboxes = self.inboxes();
        if let Some(list) = inboxes.get_mut(&game) {
            list.retain(|(k, _)| *k != key);
            if list.is_empty() {
                inboxes.remove(&game);
            }
        }
    }
}

/// Per-match snapshot fan-out.
///
/// Cloning a feed shares its subscriber registry. Delivery never blocks:
/// every subscription has its own unbounded queue.
#[derive(Debug, Default, Clone)]
pub struct Feed {
    registry: Arc<Registry>,
}

impl Feed {
    pub fn new() -> Self {
        Self::default()
    }
    /// Starts receiving every snapshot published for `game` from now on.
    pub fn subscribe(&self, game: ID<Match>) -> Subscription {
        let key = self.registry.next.fetch_add(1, Ordering::Relaxed);
        let (tx, rx) = unbounded_channel();
        self.registry
            .inboxes()
            .entry(game)
            .or_default()
            .push((key, tx));
        log::debug!("[feed] subscriber {} joined match {}", key, game);
        Subscription {
            game,
            key,
            inbox: rx,
            registry: Some(self.registry.clone()),
        }
    }
    /// Delivers a snapshot to every live subscriber of its match.
    pub fn publish(&self, snapshot: &Snapshot) {
        let game = snapshot.game.id();
        let mut inboxes = self.registry.inboxes();
        if let Some(list) = inboxes.get_mut(&game) {
            list.retain(|(_, tx)| tx.send(snapshot.clone()).is_ok());
            log::trace!("[feed] match {} published to {}", game, list.len());
            if list.is_empty() {
                inboxes.remove(&game);
            }
        }
    }
    /// Live subscribers of a match.
    pub fn subscribers(&self, game: ID<Match>) -> usize {
        self.registry.inboxes().get(&game).map_or(0, Vec::len)
    }
}

/// A lazy, unbounded, cancelable stream of one match's snapshots.
///
/// Snapshots queue until polled. [`cancel`](Self::cancel) or dropping the
/// subscription deregisters it immediately; after cancellation the stream
/// yields whatever was already queued and then ends.
#[derive(Debug)]
pub struct Subscription {
    game: ID<Match>,
    key: u64,
    inbox: UnboundedReceiver<Snapshot>,
    registry: Option<Arc<Registry>>,
}

impl Subscription {
    pub fn game(&self) -> ID<Match> {
        self.game
    }
    pub fn cancel(&mut self) {
        if let Some(registry) = self.registry.take() {
            registry.remove(self.game, self.key);
            self.inbox.close();
            log::debug!("[feed] subscriber {} left match {}", self.key, self.game);
        }
    }
    pub fn is_cancelled(&self) -> bool {
        self.registry.is_none()
    }
}

impl Stream for Subscription {
    type Item = Snapshot;
    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.inbox.poll_recv(cx)
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::StreamExt;
    use rbd_gameplay::Rules;

    fn game() -> Match {
        Match::new([ID::default(), ID::default()], Rules::default()).unwrap()
    }

    #[tokio::test]
    async fn delivers_in_order() {
        let feed = Feed::new();
        let game = game();
        let mut sub = feed.subscribe(game.id());
        let started = game.start().unwrap();
        feed.publish(&Snapshot::opening(game.clone()));
        feed.publish(&Snapshot::opening(started.clone()));
        assert_eq!(sub.next().await.unwrap().game, game);
        assert_eq!(sub.next().await.unwrap().game, started);
    }

    #[tokio::test]
    async fn other_matches_are_invisible() {
        let feed = Feed::new();
        let mine = game();
        let theirs = game();
        let mut sub = feed.subscribe(mine.id());
        feed.publish(&Snapshot::opening(theirs));
        feed.publish(&Snapshot::opening(mine.clone()));
        assert_eq!(sub.next().await.unwrap().game, mine);
    }

    #[tokio::test]
    async fn survives_a_poisoned_registry() {
        let feed = Feed::new();
        let registry = feed.registry.clone();
        let crashed = std::thread::spawn(move || {
            let _held = registry.inboxes.lock().unwrap();
            panic!("subscriber bookkeeping crashed");
        })
        .join();
        assert!(crashed.is_err());
        assert!(feed.registry.inboxes.is_poisoned());
        let game = game();
        let mut sub = feed.subscribe(game.id());
        assert_eq!(feed.subscribers(game.id()), 1);
        feed.publish(&Snapshot::opening(game.clone()));
        assert_eq!(sub.next().await.unwrap().game, game);
        sub.cancel();
        assert_eq!(feed.subscribers(game.id()), 0);
    }

    #[tokio::test]
    async fn cancel_deregisters() {
        let feed = Feed::new();
        let game = game();
        let mut a = feed.subscribe(game.id());
        let b = feed.subscribe(game.id());
        assert_eq!(feed.subscribers(game.id()), 2);
        a.cancel();
        assert!(a.is_cancelled());
        assert_eq!(feed.subscribers(game.id()), 1);
        drop(b);
        assert_eq!(feed.subscribers(game.id()), 0);
        feed.publish(&Snapshot::opening(game.clone()));
        assert!(a.next().await.is_none());
    }
}
