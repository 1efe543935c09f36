//! Shared helpers for listing and feed generation.

pub mod date;
pub mod html;
pub mod path;
pub mod plural;
pub mod size;
