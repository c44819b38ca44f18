use anyhow::Result;
use clap::Parser;
use idcard_demographics::{IdCardResolver, RegionTable};
use std::path::PathBuf;
use tracing::{info, warn};

/// Decode region, birth date and gender from resident identity numbers
#[derive(Parser)]
#[command(name = "idcard_demographics")]
struct Args {
    /// Identity numbers to decode
    #[arg(required = true)]
    ids: Vec<String>,

    /// Region table file to use instead of the bundled one
    #[arg(long, value_name = "PATH")]
    regions: Option<PathBuf>,

    /// Print one JSON object per identifier
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("info")
        .init();

    let args = Args::parse();

    let table = match &args.regions {
        Some(path) => RegionTable::from_path(path)?,
        None => RegionTable::bundled(),
    };
    info!("Region table holds {} codes", table.len());

    let resolver = IdCardResolver::new(table);

    for id in &args.ids {
        match resolver.resolve(id) {
            Ok(profile) if args.json => println!("{}", serde_json::to_string(&profile)?),
            Ok(profile) => info!(
                "{}: region={} birth_date={} gender={}",
                id,
                profile.region,
                profile.birth_date,
                profile.gender.as_zh()
            ),
            Err(e) => warn!("{}: {}", id, e),
        }
    }

    Ok(())
}
