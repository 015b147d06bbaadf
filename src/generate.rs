// src/generate.rs
// Generator pipeline: read each input in listed order, fold into one map
// (first file wins on duplicate ids), render and write the C table.

use std::path::{Path, PathBuf};

use crate::{emit, file, merge, sources};
use crate::sources::SourceMap;

pub fn run(inputs: &[PathBuf], out: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let mut merged = SourceMap::new();

    for path in inputs {
        println!("Reading {}...", path.display());
        let entries = sources::parse_file(path)?;
        let found = entries.len();
        let added = merge::merge_into(&mut merged, entries);
        println!("  {found} entries found, {added} new");
        logf!("Gen: {}: {found} found, {added} new", path.display());
    }

    let (text, written) = emit::render_table(&merged, inputs);
    file::write_text(out, &text)?;

    println!("Wrote {written} total entries to {}", out.display());
    logf!("Gen: wrote {written} entries to {}", out.display());
    Ok(())
}
