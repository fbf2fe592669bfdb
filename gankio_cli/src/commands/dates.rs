//! The `dates` subcommand: the day-history list.

use std::sync::Arc;

use anyhow::Result;
use clap::Args;
use gankio_lib::CachedClient;

use crate::output::{print_json, OutputFormat};

#[derive(Args)]
pub struct DatesArgs {
    /// Maximum number of dates to show, newest first
    #[arg(long, default_value = "30")]
    pub limit: usize,
}

pub async fn run(args: &DatesArgs, client: Arc<CachedClient>, format: &OutputFormat) -> Result<()> {
    let resp = client.get_day_history().await?;
    let dates: Vec<&String> = resp.results.iter().take(args.limit).collect();

    match format {
        OutputFormat::Json => print_json(&dates)?,
        OutputFormat::Table => {
            for date in dates {
                println!("{}", date);
            }
        }
    }
    Ok(())
}
