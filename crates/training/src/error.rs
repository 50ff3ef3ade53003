/// Failures raised by drill sessions.
///
/// - `Validation` — darts offered to a session that is no longer active, or
///   more darts than a round allows
/// - `Configuration` — a session that could never be played, e.g. a finish
///   range with no checkable score in it
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrillError {
    Validation(String),
    Configuration(String),
}

impl std::fmt::Display for DrillError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(s) => write!(f, "validation error: {}", s),
            Self::Configuration(s) => write!(f, "configuration error: {}", s),
        }
    }
}

impl std::error::Error for DrillError {}
