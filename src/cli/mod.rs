//! Command-line interface module.

mod args;
pub mod feed;
pub mod index;

pub use args::{Cli, Commands, FeedArgs, IndexArgs};
