//! On-air control room: drives a `stage` editing session and the
//! preview/program switch, with pluggable persistence.
//!
//! | Module | Role |
//! |--------|------|
//! | [`session`] | Engine, broadcast controller, and layout loading for one operator |
//! | [`broadcast`] | Preview/program state and the non-blocking Take |
//! | [`store`] | Persistence traits with in-memory and JSON-file backends |
//! | [`services`] | Background tasks (layout autosave) |
//! | [`command`] | Newline-delimited JSON command protocol |
//! | [`config`] | Environment-driven configuration |
//! | [`error`] | Error types and reply codes |

pub mod broadcast;
pub mod command;
pub mod config;
pub mod error;
pub mod services;
pub mod session;
pub mod store;
