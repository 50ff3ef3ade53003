//! Dartboard geometry, segment vocabulary, and checkout advice.
//!
//! Every throw in the system, whether submitted by a person or produced by the
//! bot simulator, is expressed in the types defined here so that scoring is
//! resolved identically regardless of its source.
//!
//! ## Core Types
//!
//! - [`Segment`] — A scoring region as a tagged variant (single, double, treble, bulls, miss)
//! - [`Dart`] — One resolved throw, optionally carrying the aim point that produced it
//! - [`Point`] — A position in board-normalized space (origin at centre, double wire at 1.0)
//!
//! ## Geometry
//!
//! - [`Board`] — Resolves points to segments and segments back to canonical aim points
//! - [`Ring`] — Concentric scoring band for a given radius
//!
//! ## Advice
//!
//! - [`Checkout`] — Static table of finishing routes for remaining scores 2..=170
mod board;
mod checkout;
mod dart;
mod point;
mod ring;
mod segment;

pub use board::*;
pub use checkout::*;
pub use dart::*;
pub use point::*;
pub use ring::*;
pub use segment::*;
