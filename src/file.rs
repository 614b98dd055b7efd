// src/file.rs

use std::{fs, path::Path};

/// Write an export file, creating parent directories as needed.
pub fn write_export(path: &Path, contents: &str) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    fs::write(path, contents)?;
    Ok(())
}

pub fn ensure_directory(dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    if dir.exists() && !dir.is_dir() {
        return Err(format!("Path exists but is not a directory: {}", dir.display()).into());
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ensure_directory_rejects_files() {
        let mut p = std::env::temp_dir();
        p.push(format!("coin_file_unit_{}", std::process::id()));
        fs::write(&p, "x").unwrap();
        let err = ensure_directory(&p).unwrap_err();
        assert!(err.to_string().contains("not a directory"));
        let _ = fs::remove_file(&p);
    }
}
