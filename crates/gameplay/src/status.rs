/// Lifecycle of a match or leg.
///
/// Matches move `Pending → Active → Completed`. Legs are created `Active`
/// and only ever move to `Completed`. `Completed` is terminal for both.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub enum Status {
    #[default]
    Pending,
    Active,
    Completed,
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Pending => write!(f, "pending"),
            Self::Active => write!(f, "active"),
            Self::Completed => write!(f, "completed"),
        }
    }
}
