//! Application-level flows that talk to the participant.

pub mod character_creation;
pub mod origin;
pub mod prompt;
