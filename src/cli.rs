use clap::Parser;

/// Collects rental listings and enriches them with commute and
/// walkability data.
#[derive(Parser, Debug)]
pub struct Args {
    /// Input CSV with a `url` column of listing pages
    #[clap(long)]
    pub input: String,

    /// Output CSV path
    #[clap(long)]
    pub output: String,

    /// Cache fetched pages in this directory (created if absent)
    #[clap(long)]
    pub cache: Option<String>,

    /// Seconds to sleep between live requests (avoid blocking)
    #[clap(long, default_value_t = 10)]
    pub sleep: u64,

    /// HTTP timeout in seconds for every external call
    #[clap(long, default_value_t = 30)]
    pub timeout: u64,

    /// Also look up a walkability score per listing
    #[clap(long)]
    pub walkscore: bool,

    /// Addresses to commute from
    #[clap(long, num_args = 1..)]
    pub commute_addresses: Vec<String>,

    /// Only process the first N input URLs
    #[clap(long)]
    pub limit: Option<usize>,
}
