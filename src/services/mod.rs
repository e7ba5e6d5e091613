//! Background services spawned alongside a session.

pub mod autosave;
