//! Async coordination around the scoring engine.
//!
//! The engine in [`rbd_gameplay`] is pure: it turns a match and a visit into
//! the next match. This crate is the imperative shell that loads state,
//! serializes visits per match, persists transitions, and tells subscribers
//! what changed.
//!
//! ## Architecture
//!
//! - [`Referee`] — Per-match serialized read → apply → persist → publish
//! - [`Repository`] — Persistence seam with optimistic version checks
//! - [`Memory`] — In-process [`Repository`]
//! - [`Feed`] — Per-match snapshot fan-out
//! - [`Subscription`] — Cancelable stream of [`Snapshot`]s
//!
//! ## Players
//!
//! - [`Player`] — Anything that can throw a visit
//! - [`Robot`] — A simulated bot at the oche
//! - [`Table`] — Drives a match to completion between two players
mod feed;
mod memory;
mod player;
mod referee;
mod repository;
mod robot;
mod snapshot;
mod table;

pub use feed::*;
pub use memory::*;
pub use player::*;
pub use referee::*;
pub use repository::*;
pub use robot::*;
pub use snapshot::*;
pub use table::*;
