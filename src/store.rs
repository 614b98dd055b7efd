// src/store.rs
//
// Subscriber list, persisted as a one-column CSV under the store dir.
// The file is re-read on every call; it's tiny and another process may edit it.
// Writers in one process are serialised by the mutex. Across processes there is
// no lock: two concurrent read-modify-write cycles can lose one update, so run a
// single writing process per store dir.

use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::config::consts::SUBSCRIBERS_FILE;
use crate::csv::{parse_rows, to_export_string};
use crate::file::ensure_directory;

const SEP: char = ',';

pub type UserId = i64;

pub struct SubscriberStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl SubscriberStore {
    /// Open (and create, if needed) the store directory.
    pub fn open(dir: &Path) -> Result<Self, Box<dyn Error>> {
        ensure_directory(dir)?;
        Ok(Self { path: dir.join(SUBSCRIBERS_FILE), lock: Mutex::new(()) })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Add a subscriber. Returns `false` if already present.
    pub fn add(&self, id: UserId) -> Result<bool, Box<dyn Error>> {
        let _guard = self.lock.lock().map_err(|_| "subscriber store lock poisoned")?;
        let mut ids = self.read()?;
        if ids.contains(&id) {
            return Ok(false);
        }
        ids.push(id);
        self.write(&ids)?;
        logf!("Subscriber {id} added");
        Ok(true)
    }

    /// Remove a subscriber. Returns `false` if it wasn't there.
    pub fn remove(&self, id: UserId) -> Result<bool, Box<dyn Error>> {
        let _guard = self.lock.lock().map_err(|_| "subscriber store lock poisoned")?;
        let mut ids = self.read()?;
        let before = ids.len();
        ids.retain(|&x| x != id);
        if ids.len() == before {
            return Ok(false);
        }
        self.write(&ids)?;
        logf!("Subscriber {id} removed");
        Ok(true)
    }

    /// All subscribers in the order they joined.
    pub fn list(&self) -> Result<Vec<UserId>, Box<dyn Error>> {
        let _guard = self.lock.lock().map_err(|_| "subscriber store lock poisoned")?;
        self.read()
    }

    fn read(&self) -> Result<Vec<UserId>, Box<dyn Error>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let text = fs::read_to_string(&self.path)?;
        let mut ids = Vec::new();
        for row in parse_rows(&text, SEP) {
            let Some(cell) = row.first() else { continue };
            match cell.trim().parse::<UserId>() {
                Ok(id) if !ids.contains(&id) => ids.push(id),
                Ok(_) => {}
                Err(_) => logw!("Skipping bad subscriber line in {}: {:?}", self.path.display(), cell),
            }
        }
        Ok(ids)
    }

    /// Sibling temp file, unique per process so writers never share one.
    fn temp_path(&self) -> PathBuf {
        self.path.with_extension(format!("csv.tmp.{}", std::process::id()))
    }

    /// Write to the temp file, then rename over the real one.
    fn write(&self, ids: &[UserId]) -> Result<(), Box<dyn Error>> {
        let rows: Vec<Vec<String>> = ids.iter().map(|id| vec![id.to_string()]).collect();
        let contents = to_export_string(None, &rows, SEP);

        let tmp = self.temp_path();
        fs::write(&tmp, contents)?;
        if let Err(e) = fs::rename(&tmp, &self.path) {
            let _ = fs::remove_file(&tmp);
            return Err(e.into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tmp_dir(name: &str) -> PathBuf {
        let mut p = std::env::temp_dir();
        p.push(format!("coin_store_unit_{}_{}", name, std::process::id()));
        let _ = fs::remove_dir_all(&p);
        p
    }

    #[test]
    fn bad_lines_are_skipped() {
        let dir = tmp_dir("bad_lines");
        let store = SubscriberStore::open(&dir).unwrap();
        fs::write(store.path(), "42\nnot-a-number\n7\n42\n").unwrap();
        assert_eq!(store.list().unwrap(), vec![42, 7]);
    }

    #[test]
    fn temp_file_is_per_process() {
        let dir = tmp_dir("temp_name");
        let store = SubscriberStore::open(&dir).unwrap();
        let tmp = store.temp_path();
        assert_ne!(tmp, store.path().with_extension("csv.tmp"));
        assert!(tmp.to_string_lossy().ends_with(&format!(".{}", std::process::id())));

        store.add(1).unwrap();
        assert!(!tmp.exists());
    }
}
