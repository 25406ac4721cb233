use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// `Referent` - fetch a web article and summarize, outline, repost or translate it.
#[derive(Parser, Debug)]
#[command(name = "referent")]
#[command(version)]
#[command(about = "Fetch a web article and process it with an LLM.", long_about = None)]
pub struct Cli {
    /// Config file to load instead of ~/.referent/config.toml
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the HTTP gateway (/api/parse, /api/generate)
    Serve {
        /// Host to bind to (default: gateway.host from config)
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on, 0 for a random free port (default: gateway.port from config)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Fetch an article and print its title, date and content
    Parse {
        /// Article URL; `https://` is added when no scheme is given
        url: String,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Fetch an article and run one action on it
    Generate {
        /// about | thesis | telegram | translate
        #[arg(short, long)]
        action: String,

        /// Article URL; `https://` is added when no scheme is given
        url: String,

        /// Print article and result as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the available actions with their models and budgets
    Actions,
}
