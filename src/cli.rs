use clap::Parser;
use std::path::PathBuf;

use crate::models::StatRequest;

#[derive(Parser)]
#[command(name = "rumba")]
#[command(author, version, about = "Access-log aggregation and reporting for proxy and web logs")]
pub struct Cli {
    /// Log files to analyze (supports glob patterns)
    #[arg(long, num_args = 1.., required = true)]
    pub files: Vec<PathBuf>,

    /// Path for the JSON report
    #[arg(long, short = 'o', default_value = "./output.json")]
    pub output_file: PathBuf,

    /// Input log format
    #[arg(long, default_value = "csv")]
    pub file_format: String,

    /// Report the client address with the most requests
    #[arg(long)]
    pub most_frequent_ip: bool,

    /// Report the client address with the fewest requests
    #[arg(long)]
    pub least_frequent_ip: bool,

    /// Report the total header plus response bytes
    #[arg(long)]
    pub total_bytes_exchanged: bool,

    /// Report the event rate over the observed time span
    #[arg(long)]
    pub event_per_seconds: bool,
}

impl Cli {
    /// Collapse the statistic switches into one immutable request.
    pub fn stat_request(&self) -> StatRequest {
        StatRequest {
            most_frequent_ip: self.most_frequent_ip,
            least_frequent_ip: self.least_frequent_ip,
            total_bytes_exchanged: self.total_bytes_exchanged,
            event_per_seconds: self.event_per_seconds,
        }
    }
}
