//! Core types and flows for the rdv shared agenda.
//!
//! This crate provides everything the CLI composes into the user-facing
//! surface:
//! - `User`, `Participant` and `Event` types
//! - `gateway` for talking to the agenda backend over HTTP
//! - `session` for the locally persisted user record and credential
//! - `auth`, `schedule` and `participation` flows

pub mod auth;
pub mod config;
pub mod error;
pub mod event;
pub mod gateway;
pub mod participation;
pub mod schedule;
pub mod session;
pub mod user;

pub use error::{RdvError, RdvResult};
pub use event::Event;
pub use user::{Participant, User};
