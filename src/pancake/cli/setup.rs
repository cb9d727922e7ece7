use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "pancake", bin_name = "pancake", version)]
#[command(about = "Interactive command-line task manager", long_about = None)]
pub struct Cli {
    /// Save file to use instead of saved_tasks.json beside the executable
    #[arg(long, value_name = "PATH")]
    pub save_file: Option<PathBuf>,
}
