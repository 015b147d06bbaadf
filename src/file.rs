// src/file.rs

use std::{
    fs,
    path::{Path, PathBuf},
};

/// Resolve a user-supplied `-o` value against a default filename.
/// Empty → default; trailing separator or existing directory → join the
/// default filename; anything else is taken as the file path.
pub fn resolve_out_path(user_o: &str, default_path: &str) -> Result<PathBuf, Box<dyn std::error::Error>> {
    if user_o.is_empty() {
        return Ok(PathBuf::from(default_path));
    }
    let p = PathBuf::from(normalize_separators(user_o));
    if looks_like_dir_hint(&p) || p.is_dir() {
        ensure_directory(&p)?;
        let default_name = Path::new(default_path)
            .file_name()
            .ok_or("Default output has no filename")?;
        Ok(p.join(default_name))
    } else {
        Ok(p)
    }
}

/// Write `contents`, creating missing parent directories first.
pub fn write_text(path: &Path, contents: &str) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    fs::write(path, contents)?;
    Ok(())
}

pub fn normalize_separators(p: &str) -> String {
    let sep = std::path::MAIN_SEPARATOR;
    p.chars().map(|c| if c == '/' || c == '\\' { sep } else { c }).collect()
}

pub fn ensure_directory(dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    if dir.exists() && !dir.is_dir() {
        return Err(format!("Path exists but is not a directory: {}", dir.display()).into());
    }
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }
    Ok(())
}

pub fn looks_like_dir_hint(p: &Path) -> bool {
    let s = p.to_string_lossy();
    s.ends_with('/') || s.ends_with('\\')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_arg_uses_default() {
        let p = resolve_out_path("", "source/title_db_data.c").unwrap();
        assert_eq!(p, PathBuf::from("source/title_db_data.c"));
    }

    #[test]
    fn dir_hint_joins_default_filename() {
        let mut dir = std::env::temp_dir();
        dir.push("titledb_file_test_hint");
        let _ = fs::remove_dir_all(&dir);

        let hint = format!("{}/", dir.display());
        let p = resolve_out_path(&hint, "tools/jdbye.json").unwrap();
        assert_eq!(p.file_name().unwrap(), "jdbye.json");
        assert!(dir.is_dir());

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn plain_file_path_is_kept() {
        let p = resolve_out_path("custom.c", "source/title_db_data.c").unwrap();
        assert_eq!(p, PathBuf::from("custom.c"));
    }

    #[test]
    fn write_text_creates_parents() {
        let mut path = std::env::temp_dir();
        path.push("titledb_file_test_write");
        let _ = fs::remove_dir_all(&path);
        path.push("nested/out.txt");

        write_text(&path, "hello").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "hello");

        let mut root = std::env::temp_dir();
        root.push("titledb_file_test_write");
        let _ = fs::remove_dir_all(&root);
    }
}
