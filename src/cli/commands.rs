use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(name = "jot", about = concat!("[+] jot v", env!("CARGO_PKG_VERSION"), " - todos that vanish when you do"), version)]
pub struct Cli {
    /// Seed the session with these notes
    pub notes: Vec<String>,

    /// Start in dark mode
    #[arg(long)]
    pub dark: bool,

    /// Use a specific config file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}
