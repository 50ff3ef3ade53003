//! Darts scoring engine, bot simulator, and practice drills.
//!
//! This facade crate re-exports all public rbd crates for convenient access.
//!
//! ## Crate Organization
//!
//! ### Core Types
//! - [`core`] — Type aliases, identifiers, and tunable constants
//! - [`board`] — Board geometry, segments, and checkout routes
//!
//! ### Domain Logic
//! - [`gameplay`] — Visit resolution and the match/leg state machine
//! - [`players`] — Bot simulator
//! - [`training`] — Practice drills
//!
//! ### Application
//! - [`gameroom`] — Async referee, persistence seam, and snapshot feeds

pub use rbd_core     as core;
pub use rbd_board    as board;
pub use rbd_gameplay as gameplay;
pub use rbd_players  as players;
pub use rbd_training as training;
pub use rbd_gameroom as gameroom;

// Re-export commonly used types at the root
pub use rbd_core::*;
