//! The `day` subcommand: one date's entries grouped by category.

use std::sync::Arc;

use anyhow::{anyhow, Result};
use chrono::NaiveDate;
use clap::Args;
use gankio_lib::CachedClient;

use crate::output::{print_entries_table, print_json, OutputFormat};

#[derive(Args)]
pub struct DayArgs {
    /// Date to show, as YYYY-MM-DD
    pub date: String,
}

pub async fn run(args: &DayArgs, client: Arc<CachedClient>, format: &OutputFormat) -> Result<()> {
    let date = NaiveDate::parse_from_str(&args.date, "%Y-%m-%d")
        .map_err(|e| anyhow!("invalid date {:?} (expected YYYY-MM-DD): {}", args.date, e))?;

    let resp = client.get_day(date).await?;
    if resp.error {
        return Err(anyhow!("no content published on {}", date));
    }

    if let OutputFormat::Json = format {
        return print_json(&resp);
    }

    let day = &resp.results;
    let sections = [
        ("Android", &day.android),
        ("iOS", &day.ios),
        ("App", &day.app),
        ("休息视频", &day.video),
        ("福利", &day.images),
        ("拓展资源", &day.resources),
        ("前端", &day.front_end),
        ("瞎推荐", &day.recommended),
    ];
    for (name, entries) in sections {
        if entries.is_empty() {
            continue;
        }
        println!("## {}", name);
        print_entries_table(entries);
        println!();
    }
    Ok(())
}
