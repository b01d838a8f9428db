use clap::Parser;

/// Atelier — workshop console bridge for embedded lesson content.
#[derive(Parser, Debug)]
#[command(name = "atelier", version, about)]
pub struct Args {
    /// Lesson page description to load (TOML).
    #[arg(short = 'p', long)]
    pub page: Option<String>,

    /// Config file path override.
    #[arg(long)]
    pub config: Option<String>,

    /// Log level override (debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,
}

pub fn parse() -> Args {
    Args::parse()
}
