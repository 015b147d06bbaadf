// src/sources.rs
// Parse one title database file into an id→name map. Community sources are
// inconsistently shaped, so three layouts are accepted:
//   - array of objects:  [{"TitleID": "000400...", "Name": "..."}, ...]
//   - object keyed by id: {"000400...": {"name": "..."}, ...} (or plain string values)
//   - newline-delimited JSON, one object per line (fallback when the whole
//     file fails to parse)

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde_json::{Map, Value};

/// id → display name, intra-source deduplicated (first-seen id wins).
pub type SourceMap = HashMap<u64, String>;

// Key spellings seen in the wild, in probe order
const ID_KEYS: [&str; 4] = ["TitleID", "titleID", "title_id", "tid"];
const NAME_KEYS: [&str; 2] = ["Name", "name"];

/// Read and parse one source file. Only the file read itself can fail;
/// malformed content degrades to fewer (possibly zero) records.
pub fn parse_file(path: &Path) -> Result<SourceMap, Box<dyn std::error::Error>> {
    let raw = fs::read_to_string(path)?;
    Ok(parse_str(&raw, &path.display().to_string()))
}

/// Parse raw source text. `label` names the source in warnings.
pub fn parse_str(raw: &str, label: &str) -> SourceMap {
    match serde_json::from_str::<Value>(raw) {
        Ok(Value::Array(items)) => parse_array(&items),
        Ok(Value::Object(map)) => parse_object(&map),
        Ok(_) => {
            eprintln!("  Unrecognised JSON structure in {label}");
            loge!("{label}: top-level value is neither array nor object");
            SourceMap::new()
        }
        // Whole-file parse failed: fall back to newline-delimited JSON
        Err(_) => parse_lines(raw, label),
    }
}

fn parse_array(items: &[Value]) -> SourceMap {
    let mut entries = SourceMap::new();
    for item in items {
        let Some(obj) = item.as_object() else { continue };
        let Some(tid_str) = probe_field(obj, &ID_KEYS) else { continue };
        let Some(name) = probe_field(obj, &NAME_KEYS) else { continue };
        let Ok(tid) = u64::from_str_radix(tid_str, 16) else { continue };
        entries.entry(tid).or_insert_with(|| s!(name));
    }
    entries
}

fn parse_object(map: &Map<String, Value>) -> SourceMap {
    let mut entries = SourceMap::new();
    for (tid_str, val) in map {
        let name = match val {
            Value::Object(obj) => probe_field(obj, &NAME_KEYS),
            Value::String(s) => Some(s.trim()).filter(|s| !s.is_empty()),
            _ => None,
        };
        let Some(name) = name else { continue };
        let Ok(tid) = u64::from_str_radix(tid_str.trim(), 16) else { continue };
        entries.entry(tid).or_insert_with(|| s!(name));
    }
    entries
}

fn parse_lines(raw: &str, label: &str) -> SourceMap {
    let mut entries = SourceMap::new();
    for (lineno, line) in raw.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let obj = match serde_json::from_str::<Value>(line) {
            Ok(v) => v,
            Err(e) => {
                eprintln!("  Skipping line {} in {label}: {e}", lineno + 1);
                continue;
            }
        };
        for (tid, name) in parse_array(std::slice::from_ref(&obj)) {
            entries.entry(tid).or_insert(name);
        }
    }
    entries
}

/// First non-empty string value among the candidate key spellings.
/// An absent, non-string, or blank value falls through to the next spelling.
fn probe_field<'a>(obj: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a str> {
    keys.iter()
        .filter_map(|k| obj.get(*k).and_then(Value::as_str))
        .map(str::trim)
        .find(|s| !s.is_empty())
}
