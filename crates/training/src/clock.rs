use super::*;
use rbd_board::Dart;
use rbd_core::*;

/// Which bed of each number counts in around the clock.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub enum Mode {
    #[default]
    Standard,
    Doubles,
    Triples,
    /// Singles for 1 to 6, doubles for 7 to 13, trebles for 14 to 20.
    Mixed,
}

impl Mode {
    /// Minimum multiplier that advances past `number`.
    pub fn required(&self, number: u8) -> u8 {
        match self {
            Self::Standard => 1,
            Self::Doubles => 2,
            Self::Triples => 3,
            Self::Mixed => match number {
                ..=6 => 1,
                7..=13 => 2,
                _ => 3,
            },
        }
    }
    fn prefix(&self, number: u8) -> &'static str {
        match self.required(number) {
            3 => "T",
            2 => "D",
            _ => "",
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Standard => write!(f, "standard"),
            Self::Doubles => write!(f, "doubles"),
            Self::Triples => write!(f, "triples"),
            Self::Mixed => write!(f, "mixed"),
        }
    }
}

/// One player's progress around the board.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub struct Runner {
    name: String,
    cursor: u8,
    darts: u32,
}

impl Runner {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            cursor: 1,
            darts: 0,
        }
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    /// The number this runner needs next; past [`LAST_NUMBER`] once finished.
    pub fn cursor(&self) -> u8 {
        self.cursor
    }
    pub fn darts(&self) -> u32 {
        self.darts
    }
    pub fn is_done(&self) -> bool {
        self.cursor > LAST_NUMBER
    }
    pub fn stats(&self) -> ClockStats {
        ClockStats {
            darts: self.darts,
            hit: self.cursor - 1,
            left: (LAST_NUMBER + 1).saturating_sub(self.cursor),
        }
    }
}

/// What one dart did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hit {
    pub advanced: bool,
    pub completed: bool,
}

/// Around the clock.
///
/// Runners take turns at the board; the one holding the turn throws darts
/// until [`pass`](Self::pass) hands the board on. A dart advances its
/// thrower when it lands in the needed number with at least the mode's
/// multiplier. Bulls never count. The first runner past twenty wins and the
/// game is over.
#[derive(Debug, Clone)]
pub struct Clock {
    mode: Mode,
    runners: Vec<Runner>,
    turn: usize,
    winner: Option<usize>,
}

impl Clock {
    pub fn new(mode: Mode, names: &[&str]) -> Result<Self, DrillError> {
        if names.is_empty() {
            return Err(DrillError::Configuration(
                "around the clock needs at least one player".into(),
            ));
        }
        Ok(Self {
            mode,
            runners: names.iter().map(|name| Runner::new(name)).collect(),
            turn: 0,
            winner: None,
        })
    }
    /// A single-player session.
    pub fn solo(mode: Mode) -> Self {
        Self {
            mode,
            runners: vec![Runner::new("Player")],
            turn: 0,
            winner: None,
        }
    }
    /// Applies one dart for the runner holding the turn.
    pub fn throw(&mut self, dart: Dart) -> Result<Hit, DrillError> {
        self.progress().ensure("around the clock")?;
        let mode = self.mode;
        let runner = &mut self.runners[self.turn];
        let needed = runner.cursor;
        let advanced = dart.segment().number() == Some(needed)
            && dart.multiplier() >= mode.required(needed);
        runner.darts += 1;
        if advanced {
            runner.cursor += 1;
        }
        let completed = runner.is_done();
        if completed {
            log::info!("{} went around the clock in {} darts", runner.name, runner.darts);
            self.winner = Some(self.turn);
        }
        Ok(Hit {
            advanced,
            completed,
        })
    }
    /// Hands the board to the next runner.
    pub fn pass(&mut self) -> Result<(), DrillError> {
        self.progress().ensure("around the clock")?;
        self.turn = (self.turn + 1) % self.runners.len();
        Ok(())
    }
    /// Prompt for the runner holding the turn.
    pub fn message(&self) -> String {
        let runner = self.current();
        match runner.is_done() {
            true => format!("{} completed around the clock", runner.name),
            false => format!(
                "{} needs {}{}",
                runner.name,
                self.mode.prefix(runner.cursor),
                runner.cursor
            ),
        }
    }
}

impl Clock {
    pub fn mode(&self) -> Mode {
        self.mode
    }
    pub fn runners(&self) -> &[Runner] {
        &self.runners
    }
    pub fn current(&self) -> &Runner {
        &self.runners[self.turn]
    }
    pub fn winner(&self) -> Option<&Runner> {
        self.winner.map(|i| &self.runners[i])
    }
    pub fn progress(&self) -> Progress {
        match self.winner {
            Some(_) => Progress::Completed,
            None => Progress::Active,
        }
    }
}

/// Summary of one runner's around-the-clock session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub struct ClockStats {
    pub darts: u32,
    pub hit: u8,
    pub left: u8,
}

impl ClockStats {
    pub fn per_number(&self) -> f32 {
        match self.hit {
            0 => 0.,
            n => self.darts as f32 / n as f32,
        }
    }
}
