use super::*;
use rbd_core::*;
use rbd_gameplay::*;
use std::collections::HashMap;
use tokio::sync::RwLock;

#[derive(Debug, Default)]
struct Tables {
    matches: HashMap<ID<Match>, Match>,
    legs: HashMap<ID<Leg>, Leg>,
    visits: HashMap<ID<Leg>, Vec<Visit>>,
}

/// In-process repository.
///
/// Everything lives behind one lock, so each call observes and produces a
/// consistent state.
#[derive(Debug, Default)]
pub struct Memory {
    tables: RwLock<Tables>,
}

impl Memory {
    pub fn new() -> Self {
        Self::default()
    }
    /// An unknown id is a bad request, not a stale read: reloading cannot
    /// make it valid, so it is not reported as a conflict.
    fn missing(id: ID<Match>) -> GameError {
        GameError::Validation(format!("no match {}", id))
    }
}

#[async_trait::async_trait]
impl Repository for Memory {
    async fn create(&self, game: &Match) -> Result<(), GameError> {
        let mut tables = self.tables.write().await;
        if tables.matches.contains_key(&game.id()) {
            return Err(GameError::Conflict(format!("match {} already exists", game.id())));
        }
        tables.matches.insert(game.id(), game.clone());
        tables.legs.insert(game.leg().id(), game.leg().clone());
        Ok(())
    }
    async fn load(&self, id: ID<Match>) -> Result<Match, GameError> {
        self.tables
            .read()
            .await
            .matches
            .get(&id)
            .cloned()
            .ok_or_else(|| Self::missing(id))
    }
    async fn store(&self, transition: &Transition, expected: u64) -> Result<(), GameError> {
        let game = transition.game();
        let visit = transition.visit();
        let mut tables = self.tables.write().await;
        let stored = tables
            .matches
            .get(&game.id())
            .map(Match::version)
            .ok_or_else(|| Self::missing(game.id()))?;
        if stored != expected {
            return Err(GameError::Conflict(format!(
                "match {} is at version {}, expected {}",
                game.id(),
                stored,
                expected
            )));
        }
        tables.matches.insert(game.id(), game.clone());
        tables.visits.entry(visit.leg()).or_default().push(visit.clone());
        if let Some(closed) = transition.closed() {
            tables.legs.insert(closed.id(), closed.clone());
        }
        tables.legs.insert(game.leg().id(), game.leg().clone());
        Ok(())
    }
    async fn visits(&self, leg: ID<Leg>) -> Result<Vec<Visit>, GameError> {
        let mut visits = self
            .tables
            .read()
            .await
            .visits
            .get(&leg)
            .cloned()
            .unwrap_or_default();
        visits.sort_by_key(Visit::order);
        Ok(visits)
    }
    async fn legs(&self, game: ID<Match>) -> Result<Vec<Leg>, GameError> {
        let mut legs = self
            .tables
            .read()
            .await
            .legs
            .values()
            .filter(|leg| leg.game() == game)
            .cloned()
            .collect::<Vec<_>>();
        legs.sort_by_key(Leg::sequence);
        Ok(legs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rbd_board::Dart;

    fn started() -> Match {
        Match::new([ID::default(), ID::default()], Rules::default())
            .unwrap()
            .start()
            .unwrap()
    }

    #[tokio::test]
    async fn create_then_load() {
        let memory = Memory::new();
        let game = started();
        memory.create(&game).await.unwrap();
        assert_eq!(memory.load(game.id()).await.unwrap(), game);
        assert!(memory.create(&game).await.unwrap_err().is_conflict());
        assert!(matches!(
            memory.load(ID::default()).await,
            Err(GameError::Validation(_))
        ));
        assert_eq!(memory.legs(game.id()).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn store_checks_version() {
        let memory = Memory::new();
        let game = started();
        memory.create(&game).await.unwrap();
        let darts = Dart::parse("T20 T20 T20").unwrap();
        let transition = game.apply(&Submission::current(&game, darts)).unwrap();
        assert!(memory
            .store(&transition, game.version() + 1)
            .await
            .unwrap_err()
            .is_conflict());
        memory.store(&transition, game.version()).await.unwrap();
        assert!(memory
            .store(&transition, game.version())
            .await
            .unwrap_err()
            .is_conflict());
        let loaded = memory.load(game.id()).await.unwrap();
        assert_eq!(loaded.remaining(0), 321);
        let visits = memory.visits(game.leg().id()).await.unwrap();
        assert_eq!(visits.len(), 1);
        assert_eq!(visits[0].total(), 180);
    }
}
