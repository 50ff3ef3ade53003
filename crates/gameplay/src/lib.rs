//! X01 scoring engine.
//!
//! The functional core of a darts match: given the current state and a new
//! visit, compute the next state. Nothing here performs I/O or retains state
//! between calls; persistence and delivery belong to the caller.
//!
//! ## Scoring
//!
//! - [`Step`] — Effect of a single dart on a running remainder
//! - [`Outcome`] — A resolved visit: total, bust, checkout, remainder
//! - [`Bust`] — Why a visit scored nothing
//!
//! ## State Machine
//!
//! - [`Match`] — Scores, legs, turn order, and lifecycle of one match
//! - [`Leg`] — One race to zero within a match
//! - [`Visit`] — Append-only record of one accepted turn
//! - [`Submission`] — A thrower's darts plus the state version they were thrown against
//! - [`Transition`] — The result of applying a submission
//!
//! ## Configuration and Reporting
//!
//! - [`Rules`] — Starting score, legs to win, double-out, leg opening policy
//! - [`GameError`] — Validation, conflict, and configuration failures
//! - [`Tally`] — Averages, high visits, and checkout rate from visit history
//! - [`MatchRecord`], [`LegRecord`], [`VisitRecord`] — Flat boundary shapes for persistence
mod error;
mod game;
mod leg;
mod outcome;
mod participant;
mod record;
mod rules;
mod status;
mod step;
mod submission;
mod tally;
mod transition;
mod visit;

pub use error::*;
pub use game::*;
pub use leg::*;
pub use outcome::*;
pub use participant::*;
pub use record::*;
pub use rules::*;
pub use status::*;
pub use step::*;
pub use submission::*;
pub use tally::*;
pub use transition::*;
pub use visit::*;
