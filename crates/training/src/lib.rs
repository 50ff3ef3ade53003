//! Single-player practice drills.
//!
//! Each drill is a session value owned by the caller. Sessions never touch
//! match state; they take darts one dart or one round at a time, update
//! themselves, and report what happened. Any number of sessions may exist at
//! once.
//!
//! ## Drills
//!
//! - [`Finish`] — Random checkout targets, a fixed number of visits at each
//! - [`Clock`] — Hit 1 through 20 in order, optionally on doubles or trebles
//! - [`Jdc`] — Fourteen rounds of singles, trebles, doubles, and the bull
//! - [`Bobs`] — Doubles 1 through 20 with lives, starting from 27
//!
//! ## Shared
//!
//! - [`Progress`] — Whether a session is still accepting darts
//! - [`Grade`] — Named bands for drill scores
//! - [`DrillError`] — Misuse of a session or an unusable configuration
mod bobs;
mod clock;
mod error;
mod finish;
mod grade;
mod jdc;
mod progress;

pub use bobs::*;
pub use clock::*;
pub use error::*;
pub use finish::*;
pub use grade::*;
pub use jdc::*;
pub use progress::*;
