// src/bin/gen_title_db.rs
// Build the embedded title database C source from JSON title lists.
// Usage:
//   gen_title_db tools/system_apps.json tools/list_US.json ... [-o output.c]
// Files listed first take priority on duplicate title IDs.

use std::{env, path::PathBuf, process};

use titledb_tools::consts::DEFAULT_DB_OUT;
use titledb_tools::{file, generate};

struct Cli {
    inputs: Vec<PathBuf>,
    out: PathBuf,
}

fn main() {
    let cli = match parse_cli() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(2);
        }
    };
    if let Err(e) = generate::run(&cli.inputs, &cli.out) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn parse_cli() -> Result<Cli, Box<dyn std::error::Error>> {
    let mut inputs = Vec::new();
    let mut out = String::new();

    let mut args = env::args().skip(1);
    while let Some(a) = args.next() {
        match a.as_str() {
            "-o" | "--out" => out = args.next().ok_or("Missing output path")?,
            "-h" | "--help" => {
                eprintln!(
                    "Usage: gen_title_db <input.json> [input2.json ...] [-o output.c]\n\n\
                     Files listed first win on duplicate title IDs.\n\
                     Default output: {DEFAULT_DB_OUT}"
                );
                process::exit(0);
            }
            s if s.starts_with('-') => return Err(format!("Unknown arg: {s}").into()),
            path => inputs.push(PathBuf::from(path)),
        }
    }
    if inputs.is_empty() {
        return Err("Specify at least one input file (see --help)".into());
    }
    let out = file::resolve_out_path(&out, DEFAULT_DB_OUT)?;
    Ok(Cli { inputs, out })
}
