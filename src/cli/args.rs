//! Command-line interface definitions.

use crate::config::FeedFormat;
use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Generate an index.html listing for every directory in a tree
///
/// Without a subcommand, builds listings starting from ROOT
/// (or the current directory). Use `dirlist index ROOT` when the
/// root directory is itself named like a subcommand.
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, args_conflicts_with_subcommands = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: <ROOT>/dirlist.toml)
    #[arg(short = 'C', long, global = true, value_hint = clap::ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub index: IndexArgs,

    /// subcommands
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Write listings into every directory (the default command)
    Index {
        #[command(flatten)]
        args: IndexArgs,
    },

    /// Build a syndication feed from the generated pages
    Feed {
        #[command(flatten)]
        args: FeedArgs,
    },
}

/// Listing command arguments.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct IndexArgs {
    /// Top folder to start generating listings from (default: current directory)
    #[arg(value_hint = clap::ValueHint::DirPath)]
    pub root: Option<PathBuf>,

    /// Only include files matching this glob, e.g. "*.py"
    #[arg(short, long)]
    pub filter: Option<String>,

    /// List every processed file and directory (slow on large trees)
    #[arg(short, long)]
    pub verbose: bool,

    /// Don't write any files, just simulate the traversal
    #[arg(short, long = "dry-run", visible_alias = "dryrun")]
    pub dry_run: bool,

    /// Emit a parent-directory row in the root listing too
    #[arg(long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = true)]
    pub root_parent_link: Option<bool>,
}

/// Feed command arguments.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct FeedArgs {
    /// Top folder to scan for generated pages (default: current directory)
    #[arg(value_hint = clap::ValueHint::DirPath)]
    pub root: Option<PathBuf>,

    /// Site URL that page paths are appended to
    #[arg(short = 'u', long, value_hint = clap::ValueHint::Url)]
    pub base_url: Option<String>,

    /// Feed file path (relative to ROOT)
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,

    /// Feed format
    #[arg(long, value_enum)]
    pub format: Option<FeedFormat>,

    /// List every page added to the feed
    #[arg(short, long)]
    pub verbose: bool,

    /// Build the feed without writing it
    #[arg(short, long = "dry-run", visible_alias = "dryrun")]
    pub dry_run: bool,
}

impl Cli {
    /// Resolve the command to run; bare arguments mean `index`.
    pub fn resolve_command(&self) -> Commands {
        self.command.clone().unwrap_or_else(|| Commands::Index {
            args: self.index.clone(),
        })
    }
}

impl Commands {
    /// Root directory argument, if one was given.
    pub fn root(&self) -> Option<&PathBuf> {
        match self {
            Self::Index { args } => args.root.as_ref(),
            Self::Feed { args } => args.root.as_ref(),
        }
    }

    pub const fn verbose(&self) -> bool {
        match self {
            Self::Index { args } => args.verbose,
            Self::Feed { args } => args.verbose,
        }
    }

    pub const fn dry_run(&self) -> bool {
        match self {
            Self::Index { args } => args.dry_run,
            Self::Feed { args } => args.dry_run,
        }
    }

    pub const fn is_feed(&self) -> bool {
        matches!(self, Self::Feed { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("dirlist").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_bare_arguments_mean_index() {
        let cli = parse(&["public", "-f", "*.txt", "-v", "-d"]);
        let Commands::Index { args } = cli.resolve_command() else {
            panic!("expected index command");
        };
        assert_eq!(args.root, Some(PathBuf::from("public")));
        assert_eq!(args.filter.as_deref(), Some("*.txt"));
        assert!(args.verbose);
        assert!(args.dry_run);
    }

    #[test]
    fn test_no_arguments_defaults() {
        let cli = parse(&[]);
        let command = cli.resolve_command();
        assert!(!command.is_feed());
        assert_eq!(command.root(), None);
        assert!(!command.dry_run());
    }

    #[test]
    fn test_dryrun_alias() {
        let cli = parse(&["--dryrun"]);
        assert!(cli.resolve_command().dry_run());
    }

    #[test]
    fn test_root_parent_link_flag() {
        let cli = parse(&["--root-parent-link"]);
        assert_eq!(cli.index.root_parent_link, Some(true));

        let cli = parse(&["--root-parent-link=false", "public"]);
        assert_eq!(cli.index.root_parent_link, Some(false));
    }

    #[test]
    fn test_feed_subcommand() {
        let cli = parse(&["feed", "site", "-u", "https://example.com", "--format", "atom"]);
        let command = cli.resolve_command();
        assert!(command.is_feed());
        assert_eq!(command.root(), Some(&PathBuf::from("site")));

        let Commands::Feed { args } = command else {
            panic!("expected feed command");
        };
        assert_eq!(args.base_url.as_deref(), Some("https://example.com"));
        assert_eq!(args.format, Some(FeedFormat::Atom));
    }

    #[test]
    fn test_explicit_index_subcommand() {
        let cli = parse(&["index", "feed"]);
        assert!(!cli.resolve_command().is_feed());
        assert_eq!(cli.resolve_command().root(), Some(&PathBuf::from("feed")));
    }
}
