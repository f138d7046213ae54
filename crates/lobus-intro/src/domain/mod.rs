//! Domain types for the intro flows.

pub mod names;
pub mod player;
