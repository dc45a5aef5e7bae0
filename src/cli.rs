use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "naturequiz", version, about = "Terminal nature quiz game")]
pub struct Cli {
    /// YAML question bank to play instead of the built-in one
    #[arg(long, value_name = "path")]
    pub bank: Option<String>,

    /// Directory for the best score and log [default: platform data dir]
    #[arg(long, value_name = "dir")]
    pub data_dir: Option<String>,

    /// Print the stored best score and exit
    #[arg(long)]
    pub best: bool,

    /// Clear the stored best score before playing
    #[arg(long)]
    pub reset_best: bool,

    /// Seed for reproducible question and choice order
    #[arg(long, value_name = "n")]
    pub seed: Option<u64>,

    /// Keep the best score in memory only
    #[arg(long)]
    pub no_save: bool,

    /// Raise log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
