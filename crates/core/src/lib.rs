//! Core type aliases, identifiers, and constants for robodarts.
//!
//! This crate provides the foundational types and configuration parameters
//! used throughout the robodarts workspace.
#![allow(dead_code)]

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Points: remaining scores, visit totals, dart values.
pub type Score = i16;
/// Participant index within a match (0 = home, 1 = away).
pub type Position = usize;
/// Board-normalized distance. The outer edge of the double ring is 1.0.
pub type Coordinate = f32;
/// Hit rates and success percentages.
pub type Probability = f32;

// ============================================================================
// TRAITS
// ============================================================================
/// Unique identifier trait for domain entities.
pub trait Unique<T = Self> {
    fn id(&self) -> ID<T>;
}

// ============================================================================
// IDENTITY TYPES
// ============================================================================
use std::cmp::Ordering;
use std::fmt::Debug;
use std::fmt::Display;
use std::fmt::Formatter;
use std::hash::Hash;
use std::hash::Hasher;
use std::marker::PhantomData;

/// Generic ID wrapper providing compile-time type safety over uuid::Uuid.
pub struct ID<T> {
    inner: uuid::Uuid,
    marker: PhantomData<T>,
}

impl<T> ID<T> {
    pub fn inner(&self) -> uuid::Uuid {
        self.inner
    }
    /// Cast ID<T> to ID<U> while preserving the underlying UUID.
    pub fn cast<U>(self) -> ID<U> {
        ID {
            inner: self.inner,
            marker: PhantomData,
        }
    }
}

impl<T> From<ID<T>> for uuid::Uuid {
    fn from(id: ID<T>) -> Self {
        id.inner()
    }
}
impl<T> From<uuid::Uuid> for ID<T> {
    fn from(inner: uuid::Uuid) -> Self {
        Self {
            inner,
            marker: PhantomData,
        }
    }
}

impl<T> Default for ID<T> {
    fn default() -> Self {
        Self {
            inner: uuid::Uuid::now_v7(),
            marker: PhantomData,
        }
    }
}

impl<T> Copy for ID<T> {}
impl<T> Clone for ID<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Eq for ID<T> {}
impl<T> PartialEq for ID<T> {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<T> Ord for ID<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.inner.cmp(&other.inner)
    }
}
impl<T> PartialOrd for ID<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Hash for ID<T> {
    fn hash<H>(&self, state: &mut H)
    where
        H: Hasher,
    {
        self.inner.hash(state);
    }
}

impl<T> Debug for ID<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("ID").field(&self.inner).finish()
    }
}
impl<T> Display for ID<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.inner, f)
    }
}

impl<T> serde::Serialize for ID<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serde::Serialize::serialize(&self.inner, serializer)
    }
}
impl<'de, T> serde::Deserialize<'de> for ID<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        <uuid::Uuid as serde::Deserialize>::deserialize(deserializer).map(Self::from)
    }
}

// ============================================================================
// MATCH PARAMETERS
// ============================================================================
/// Number of participants in a match.
pub const N: usize = 2;
/// Darts thrown per visit.
pub const DARTS_PER_VISIT: usize = 3;
/// Highest remaining score that can be finished in one visit.
pub const MAX_CHECKOUT: Score = 170;
/// Highest score a single visit can produce (three treble twenties).
pub const MAX_VISIT: Score = 180;

// ============================================================================
// BOARD GEOMETRY
// Regulation ring radii (mm) normalized by the outer double wire at 170mm.
// ============================================================================
/// Outer edge of the inner bull (double bull, 50).
pub const BULL_RADIUS: Coordinate = 6.35 / 170.0;
/// Outer edge of the outer bull (single bull, 25).
pub const OUTER_RADIUS: Coordinate = 15.9 / 170.0;
/// Inner edge of the treble ring.
pub const TRIPLE_INNER: Coordinate = 99.0 / 170.0;
/// Outer edge of the treble ring.
pub const TRIPLE_OUTER: Coordinate = 107.0 / 170.0;
/// Inner edge of the double ring.
pub const DOUBLE_INNER: Coordinate = 162.0 / 170.0;
/// Outer edge of the double ring; anything further out scores nothing.
pub const DOUBLE_OUTER: Coordinate = 1.0;
/// Angular width of one numbered wedge, in degrees.
pub const WEDGE_DEGREES: Coordinate = 18.0;

// ============================================================================
// BOT DISPERSION
// Standard deviation of the Gaussian aim error per skill tier, board-normalized.
// Lower sigma = tighter grouping = stronger bot.
// ============================================================================
/// (tier, sigma) pairs from weakest to strongest.
pub const BOT_DISPERSION: [(u8, Coordinate); 9] = [
    (20, 0.170),
    (25, 0.140),
    (35, 0.130),
    (45, 0.100),
    (55, 0.070),
    (65, 0.050),
    (75, 0.036),
    (85, 0.024),
    (95, 0.014),
];
/// Noised aim points are clamped to this half-width on each axis.
pub const AIM_CLAMP: Coordinate = 0.96;

// ============================================================================
// TRAINING DRILLS
// ============================================================================
/// Distinct targets played before a finish-training session completes.
pub const FINISH_TARGETS: usize = 10;
/// Default visits allowed per finish-training target.
pub const FINISH_ATTEMPTS: usize = 3;
/// Last numbered wedge; around-the-clock and Bob's 27 end beyond it.
pub const LAST_NUMBER: u8 = 20;
/// Bob's 27 opening (and reset) score.
pub const BOBS_START: Score = 27;
/// Bob's 27 lives before the session fails.
pub const BOBS_LIVES: u8 = 3;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "server")]
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}
