//! Lobus terminal front end.
//!
//! Wires the intro flows to a local terminal: an in-process player store
//! and the connect session that sits between the MOTD and the host game.

pub mod repository;
pub mod session;
