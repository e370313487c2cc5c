use std::path::PathBuf;

use structopt::StructOpt;

#[derive(Debug, StructOpt)]
/// Module registry listing tools
#[structopt(
    name = "registry-site",
    after_help = "EXAMPLES:
    Show the page strip for page 5 of 200 results:
        registry-site window 200 --page 5
    Render a saved search response:
        registry-site listing modules.json --query 'page=2'
    Render registry statistics:
        registry-site stats stats.json"
)]
pub struct Cli {
    /// Log level
    #[structopt(long, default_value = "info")]
    pub log_level: String,

    #[structopt(subcommand)]
    pub cmd: Command,
}

#[derive(StructOpt, Debug)]
pub enum Command {
    /// Compute the page window for a result count
    Window {
        /// Total number of results
        total_count: i64,

        /// Results on each page
        #[structopt(long, default_value = "20", allow_hyphen_values = true)]
        per_page: i64,

        /// Requested page (1-indexed)
        #[structopt(long, default_value = "1", allow_hyphen_values = true)]
        page: i64,

        /// Print JSON
        #[structopt(long)]
        json: bool,
    },

    /// Render a module listing from a search response
    ///
    /// The input is the JSON document returned by the module search
    /// service; the query string is the one from the listing URL,
    /// eg: `page=3` or `query=http`.
    Listing {
        /// Search response JSON file
        #[structopt(parse(from_os_str))]
        input: PathBuf,

        /// Listing URL query string
        #[structopt(short, long, default_value = "")]
        query: String,

        /// Registry config file
        #[structopt(short, long, parse(from_os_str))]
        config: Option<PathBuf>,

        /// Print JSON
        #[structopt(long)]
        json: bool,
    },

    /// Render the recently added and updated modules
    Stats {
        /// Statistics response JSON file
        #[structopt(parse(from_os_str))]
        input: PathBuf,

        /// Registry config file
        #[structopt(short, long, parse(from_os_str))]
        config: Option<PathBuf>,

        /// Print JSON
        #[structopt(long)]
        json: bool,
    },
}
