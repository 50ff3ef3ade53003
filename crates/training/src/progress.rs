use super::*;

/// Where a drill session stands.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub enum Progress {
    #[default]
    Active,
    Completed,
    Failed,
}

impl Progress {
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active)
    }
    /// Rejects further input once the session has ended.
    pub(crate) fn ensure(&self, drill: &str) -> Result<(), DrillError> {
        match self {
            Self::Active => Ok(()),
            ended => Err(DrillError::Validation(format!(
                "{} session is {}",
                drill, ended
            ))),
        }
    }
}

impl std::fmt::Display for Progress {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Active => write!(f, "active"),
            Self::Completed => write!(f, "completed"),
            Self::Failed => write!(f, "failed"),
        }
    }
}
