// src/emit.rs
// Render the merged map as the C table the firmware embeds. The consumer
// binary-searches title_db[], so ascending id order is a hard requirement.

use std::path::PathBuf;

use crate::consts::NAME_MAX;
use crate::core::truncate::truncate_name;
use crate::sources::SourceMap;

/// Escape for a C string literal: backslash, double quote, and control
/// characters. Octal escapes are fixed at three digits so a following
/// digit can never extend them.
pub fn escape_c(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            c if (c as u32) < 0x20 || c as u32 == 0x7F => {
                out.push_str(&format!("\\{:03o}", c as u32));
            }
            c => out.push(c),
        }
    }
    out
}

/// Render the full generated source. Returns the text and the number of
/// real entries written (the stub for an empty table doesn't count).
pub fn render_table(merged: &SourceMap, inputs: &[PathBuf]) -> (String, usize) {
    let mut entries: Vec<(&u64, &String)> = merged.iter().collect();
    entries.sort();

    let source_names = inputs
        .iter()
        .map(|p| {
            p.file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| p.display().to_string())
        })
        .collect::<Vec<_>>()
        .join(", ");

    let mut out = s!();
    out.push_str("/* Auto-generated by gen_title_db — do not edit manually.\n");
    out.push_str(&format!(" * Sources: {source_names}\n"));
    out.push_str(" * Re-run the tool to update.\n");
    out.push_str(" */\n");
    out.push_str("#include \"title_db.h\"\n\n");
    out.push_str("const TitleDbEntry title_db[] = {\n");

    let mut written = 0;
    for (tid, name) in entries {
        let safe = escape_c(&truncate_name(name, NAME_MAX));
        out.push_str(&format!("    {{ 0x{tid:016X}ULL, \"{safe}\" }},\n"));
        written += 1;
    }
    if written == 0 {
        // keep the array non-empty so sizeof stays legal
        out.push_str("    { 0x0000000000000000ULL, \"\" }, /* stub */\n");
    }

    out.push_str("};\n\n");
    out.push_str("const int title_db_count =\n");
    out.push_str("    (int)(sizeof(title_db) / sizeof(title_db[0]));\n");

    (out, written)
}
