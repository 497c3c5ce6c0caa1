use clap::{Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser, Debug)]
#[command(author, version, about = "LNB bot leaderboard viewer")]
pub struct Cli {
    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Load the leaderboard once and print it
    Show {
        /// Base URL hosting stats.json (defaults to the build-time PUBLIC_URL)
        #[arg(short, long)]
        url: Option<String>,
        /// Only show players whose name contains this text
        #[arg(short, long)]
        search: Option<String>,
        /// Click a column header; repeat to toggle direction
        #[arg(long = "sort", value_name = "COLUMN")]
        sort: Vec<String>,
    },
    /// Browse the leaderboard interactively
    Browse {
        /// Base URL hosting stats.json (defaults to the build-time PUBLIC_URL)
        #[arg(short, long)]
        url: Option<String>,
    },
    /// Serve a local stats.json for previewing
    Serve {
        /// Port number (optional, defaults to 3000)
        #[arg(short, long, default_value_t = 3000)]
        port: u16,
        /// Feed file to serve
        #[arg(short, long, default_value = "stats.json")]
        feed: String,
    },
    /// Print a shell completion script
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}
