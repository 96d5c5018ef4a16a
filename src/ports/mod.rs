//! Port traits for external collaborators.

pub mod history_port;
