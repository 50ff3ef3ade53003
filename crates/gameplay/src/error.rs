/// Failures surfaced synchronously to the caller.
///
/// The engine never retries and never applies a partial transition: any
/// error leaves the caller's state exactly as it was.
///
/// - `Validation` — malformed input, e.g. four darts, or a non-double finish
///   reported through [`Outcome::check`](crate::Outcome::check)
/// - `Conflict` — the submission was built against stale state (wrong leg,
///   wrong thrower, old version, finished match); reload and retry
/// - `Configuration` — rules that cannot describe a playable match
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    Validation(String),
    Conflict(String),
    Configuration(String),
}

impl GameError {
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::Conflict(_))
    }
}

impl std::fmt::Display for GameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(s) => write!(f, "validation error: {}", s),
            Self::Conflict(s) => write!(f, "state conflict: {}", s),
            Self::Configuration(s) => write!(f, "configuration error: {}", s),
        }
    }
}

impl std::error::Error for GameError {}
