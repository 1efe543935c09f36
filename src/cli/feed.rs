//! `dirlist feed` command.

use crate::{config::TreeConfig, feed::build_feed};
use anyhow::Result;

pub fn run_feed(config: &TreeConfig) -> Result<()> {
    build_feed(config).map(|_| ())
}
