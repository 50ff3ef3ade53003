use rbd_gameplay::*;

/// The state of a match as published to subscribers.
///
/// `visit` is the visit that produced this state, or `None` for the snapshot
/// published when the match starts.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub struct Snapshot {
    pub game: Match,
    pub visit: Option<Visit>,
}

impl Snapshot {
    pub fn opening(game: Match) -> Self {
        Self { game, visit: None }
    }
    #[cfg(feature = "client")]
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

impl From<&Transition> for Snapshot {
    fn from(transition: &Transition) -> Self {
        Self {
            game: transition.game().clone(),
            visit: Some(transition.visit().clone()),
        }
    }
}

impl std::fmt::Display for Snapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match &self.visit {
            Some(visit) => write!(f, "{} => {}", visit, self.game),
            None => write!(f, "start => {}", self.game),
        }
    }
}
