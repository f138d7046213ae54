//! Lobus Intro: the input events a new connection walks through.
//!
//! Responsible for character naming and creation, the character origin
//! questionnaire driven by the choices engine, and the small numbered menus
//! shown between them. Login, account management and the command loop live
//! with the host game.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
