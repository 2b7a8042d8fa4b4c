//! Terminal front end for the chess rules engine.
//!
//! The binary wires [`SessionConfig`] and command-line flags into a
//! [`Session`] reading moves from stdin.

pub mod config;
pub mod display;
pub mod session;

pub use config::{ConfigError, SessionConfig};
pub use session::{Session, SessionError};
