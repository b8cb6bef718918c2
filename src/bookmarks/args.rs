use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.1.0" for releases, "0.1.0@abc1234 2024-01-15 14:30" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "bookmarks", version = get_version())]
#[command(about = "Simple bookmarks manager", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to bookmarks file
    #[arg(long, global = true, value_name = "PATH")]
    pub bookmarks: Option<PathBuf>,

    /// Debug output
    #[arg(long, global = true)]
    pub debug: bool,

    /// Create the bookmarks file if it is missing (default)
    #[arg(long, global = true, overrides_with = "no_create_bookmarks_file")]
    pub create_bookmarks_file: bool,

    /// Fail instead of creating a missing bookmarks file
    #[arg(long, global = true, overrides_with = "create_bookmarks_file")]
    pub no_create_bookmarks_file: bool,
}

impl Cli {
    pub fn should_create_bookmarks_file(&self) -> bool {
        !self.no_create_bookmarks_file
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add one or more bookmarks
    Add {
        /// URLs to bookmark
        #[arg(value_name = "URL", required = true, num_args = 1..)]
        urls: Vec<String>,
    },

    /// Add the URL currently in the clipboard
    AddFromClipboard,

    /// List bookmarked URLs
    #[command(alias = "ls")]
    List,

    /// Open one or more URLs in the browser
    Open {
        /// URLs to open
        #[arg(value_name = "URL", required = true, num_args = 1..)]
        urls: Vec<String>,
    },

    /// Create the bookmarks file if it does not exist
    Init,

    /// Print the path to the bookmarks file
    Path,
}

impl Commands {
    /// Commands that read or write the bookmarks file.
    pub fn uses_store(&self) -> bool {
        matches!(
            self,
            Commands::Add { .. } | Commands::AddFromClipboard | Commands::List
        )
    }
}
