// src/bin/scrape_titles.rs
// Scrape title names from 3ds.jdbye.com into a JSON file that
// gen_title_db accepts as one more (lowest-priority) input.
// Usage:
//   scrape_titles [-o tools/jdbye.json]

use std::{env, path::PathBuf, process};

use titledb_tools::consts::DEFAULT_SCRAPE_OUT;
use titledb_tools::progress::Progress;
use titledb_tools::{file, scrape};

struct ConsoleProgress;

impl Progress for ConsoleProgress {
    fn log(&mut self, msg: &str) {
        println!("{msg}");
    }
    fn item_done(&mut self, label: &str, new_entries: usize) {
        println!("    {new_entries} new unique entries from {label}");
    }
}

fn main() {
    let out = match parse_cli() {
        Ok(p) => p,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(2);
        }
    };

    let mut progress = ConsoleProgress;
    match scrape::run(&out, &mut progress) {
        Ok(total) => println!("\nWrote {total} entries to {}", out.display()),
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    }
}

fn parse_cli() -> Result<PathBuf, Box<dyn std::error::Error>> {
    let mut out = String::new();

    let mut args = env::args().skip(1);
    while let Some(a) = args.next() {
        match a.as_str() {
            "-o" | "--out" => out = args.next().ok_or("Missing output path")?,
            "-h" | "--help" => {
                eprintln!(
                    "Usage: scrape_titles [-o output.json]\n\n\
                     Default output: {DEFAULT_SCRAPE_OUT}"
                );
                process::exit(0);
            }
            other => return Err(format!("Unknown arg: {other}").into()),
        }
    }
    file::resolve_out_path(&out, DEFAULT_SCRAPE_OUT)
}
