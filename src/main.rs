use clap::Parser;
use std::fs;
use std::path::Path;
use std::process;
use std::time::Duration;

mod cli;
mod commute;
mod domain;
mod extraction;
mod fetch;
mod pipeline;
mod tables;
mod walkscore;

use cli::Args;
use commute::{load_api_key, CommuteOracle};
use fetch::{FetchConfig, PageCache, PageFetcher, RateLimiter};
use pipeline::Pipeline;
use walkscore::WalkscoreClient;

fn main() {
    let args = Args::parse();

    // Missing credential is the one fatal error; everything after this
    // degrades per row instead of aborting the batch.
    let api_key = match load_api_key() {
        Ok(key) => key,
        Err(e) => {
            eprintln!("❌ {e}");
            process::exit(1);
        }
    };

    let cache = match args.cache.as_deref() {
        Some(dir) => {
            if !Path::new(dir).exists() {
                println!("Creating caching directory {dir}");
                if let Err(e) = fs::create_dir_all(dir) {
                    eprintln!("❌ Could not create cache directory {dir}: {e}");
                    process::exit(1);
                }
            }
            Some(PageCache::new(dir))
        }
        None => None,
    };

    let mut urls = match tables::read_url_column(&args.input) {
        Ok(urls) => urls,
        Err(e) => {
            eprintln!("❌ Could not read {}: {e}", args.input);
            process::exit(1);
        }
    };
    if let Some(limit) = args.limit {
        urls.truncate(limit);
    }

    let timeout = Duration::from_secs(args.timeout);
    let pipeline = match build_pipeline(&args, timeout, cache, api_key) {
        Ok(pipeline) => pipeline,
        Err(e) => {
            eprintln!("❌ Client init failed: {e}");
            process::exit(1);
        }
    };

    let mut records = Vec::with_capacity(urls.len());
    for url in &urls {
        println!("Processing {url}");
        records.push(pipeline.process(url));
    }

    let columns = tables::column_order(&args.commute_addresses, args.walkscore);
    if let Err(e) = tables::write_records(&args.output, &columns, &records) {
        eprintln!("❌ Could not write {}: {e}", args.output);
        process::exit(1);
    }
    println!("✅ Wrote {} rows to {}", records.len(), args.output);
}

fn build_pipeline(
    args: &Args,
    timeout: Duration,
    cache: Option<PageCache>,
    api_key: String,
) -> Result<Pipeline, Box<dyn std::error::Error>> {
    let config = FetchConfig {
        timeout,
        ..FetchConfig::default()
    };
    let fetcher = PageFetcher::new(config, cache)?;
    let walkscore = if args.walkscore {
        Some(WalkscoreClient::new(timeout)?)
    } else {
        None
    };
    let oracle = CommuteOracle::new(api_key, timeout)?;

    Ok(Pipeline::new(
        fetcher,
        walkscore,
        oracle,
        args.commute_addresses.clone(),
        RateLimiter::new(args.sleep),
    ))
}
