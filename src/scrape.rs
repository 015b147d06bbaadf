// src/scrape.rs
// Scrape game names from 3ds.jdbye.com, one page per region, and write a
// JSON exchange file that gen_title_db accepts as one more input.
//
// Expected row shape on the site: Region | Name | Product Code | Title ID

use std::path::Path;
use std::time::Instant;
use std::{thread, time::Duration};

use serde_json::{json, Value};

use crate::consts::{REGIONS, REQUEST_PAUSE_MS, SCRAPE_BASE, TITLE_ID_HEX_LEN};
use crate::core::{html, net};
use crate::merge::merge_into;
use crate::progress::Progress;
use crate::sources::SourceMap;

/// Fetch one region page and extract its titles.
/// Any transport failure propagates: a half-scraped exchange file would
/// silently shadow better sources downstream.
pub fn fetch_region(region: &str) -> Result<SourceMap, Box<dyn std::error::Error>> {
    let url = join!(SCRAPE_BASE, region);
    let doc = net::http_get(&url)?;

    let t = Instant::now();
    let rows = html::extract_rows(&doc);
    let entries = titles_from_rows(&rows);
    logd!("Scrape: {region} parsed in {:?}, {} entries", t.elapsed(), entries.len());

    Ok(entries)
}

/// Keep rows that look like title listings: at least 4 cells, cell 1 a
/// non-empty name, cell 3 a full 16-hex-digit title id. First-seen id wins.
pub fn titles_from_rows(rows: &[Vec<String>]) -> SourceMap {
    let mut entries = SourceMap::new();
    for row in rows {
        if row.len() < 4 {
            continue;
        }
        let name = row[1].trim();
        let tid_str = row[3].trim().to_ascii_uppercase();
        if name.is_empty() || tid_str.len() != TITLE_ID_HEX_LEN {
            continue;
        }
        let Ok(tid) = u64::from_str_radix(&tid_str, 16) else { continue };
        entries.entry(tid).or_insert_with(|| s!(name));
    }
    entries
}

/// Scrape every region in order, pausing between requests.
/// Earlier regions win on duplicate ids.
pub fn run(
    out: &Path,
    progress: &mut dyn Progress,
) -> Result<usize, Box<dyn std::error::Error>> {
    progress.begin(REGIONS.len());

    let mut merged = SourceMap::new();
    for (i, region) in REGIONS.iter().enumerate() {
        progress.log(&format!("  Fetching {}{} ...", SCRAPE_BASE, region));
        let entries = fetch_region(region)?;
        let found = entries.len();
        let added = merge_into(&mut merged, entries);
        logf!("Scrape: {region}: {found} entries, {added} new");
        progress.item_done(region, added);

        if i + 1 < REGIONS.len() {
            thread::sleep(Duration::from_millis(REQUEST_PAUSE_MS)); // be polite
        }
    }
    progress.finish();

    let total = merged.len();
    crate::file::write_text(out, &render_exchange(&merged))?;
    Ok(total)
}

/// Render the exchange file: a JSON array sorted ascending by id, each entry
/// in the canonical {TitleID, Name} shape the generator probes first.
pub fn render_exchange(entries: &SourceMap) -> String {
    let mut sorted: Vec<(&u64, &String)> = entries.iter().collect();
    sorted.sort();

    let arr: Vec<Value> = sorted
        .into_iter()
        .map(|(tid, name)| {
            json!({
                "TitleID": format!("{tid:016X}"),
                "Name": name,
            })
        })
        .collect();

    // Vec<Value> serialization can't fail
    serde_json::to_string_pretty(&arr).unwrap_or_else(|_| s!("[]"))
}
