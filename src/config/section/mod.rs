//! Configuration section definitions.
//!
//! Each module corresponds to a section in `dirlist.toml`:
//!
//! | Module  | TOML Section | Purpose                               |
//! |---------|--------------|---------------------------------------|
//! | `index` | `[index]`    | Listing filename, filter, exclusions  |
//! | `feed`  | `[feed]`     | Feed base URL, channel info, output   |

mod feed;
mod index;

pub use feed::{FeedFormat, FeedSectionConfig};
pub use index::{IndexSectionConfig, TimestampSource};
