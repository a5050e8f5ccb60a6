use std::path::PathBuf;

use clap::Parser;
use part_discovery::{
    catalog::load_catalogs,
    report::{DiscoveryReport, ReportOptions},
    word_stats::DEFAULT_TOP_N,
    Result,
};
use tracing::info;

#[derive(Parser, Debug)]
#[command(version, about = "Exposes key words from new editions of part catalogs", long_about = None)]
struct Args {
    /// Directory holding the catalog JSON files
    #[arg(long, default_value = "catalogs")]
    catalogs: PathBuf,

    /// Number of top scored words to report per catalog
    #[arg(short = 'n', long, default_value_t = DEFAULT_TOP_N)]
    top_n: usize,

    /// Word to drop from every catalog before scoring, may be repeated
    #[arg(short, long = "exclude")]
    excluded_words: Vec<String>,

    /// Prints the report as JSON
    #[arg(long, default_value = "false")]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("part_discovery=info")),
        )
        .init();

    let args = Args::parse();

    let catalogs = load_catalogs(&args.catalogs)?;
    let options = ReportOptions {
        top_n: args.top_n,
        excluded_words: args.excluded_words,
    };

    // Time the report
    let start = std::time::Instant::now();
    let report = DiscoveryReport::build(&catalogs, &options)?;
    info!(elapsed = ?start.elapsed(), "Report ready");

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{report}");
    }

    Ok(())
}
