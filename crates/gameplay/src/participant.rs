use rbd_core::*;

/// Someone seated in a match: a person, or a bot of some skill tier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub struct Participant {
    id: ID<Self>,
    name: String,
    tier: Option<u8>,
}

impl Participant {
    pub fn human(name: &str) -> Self {
        Self {
            id: ID::default(),
            name: name.to_string(),
            tier: None,
        }
    }
    pub fn robot(name: &str, tier: u8) -> Self {
        Self {
            id: ID::default(),
            name: name.to_string(),
            tier: Some(tier),
        }
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    /// Skill tier when this participant is a bot.
    pub fn tier(&self) -> Option<u8> {
        self.tier
    }
    pub fn is_robot(&self) -> bool {
        self.tier.is_some()
    }
}

impl Unique for Participant {
    fn id(&self) -> ID<Self> {
        self.id
    }
}

impl std::fmt::Display for Participant {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.tier {
            Some(tier) => write!(f, "{} (bot {})", self.name, tier),
            None => write!(f, "{}", self.name),
        }
    }
}
