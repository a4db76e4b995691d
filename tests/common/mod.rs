#![allow(dead_code)]

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

/// Temp-file SQLite database removed (with its WAL/SHM siblings) on drop.
pub struct TempDb {
    pub path: PathBuf,
    pub url: String,
}

impl TempDb {
    pub fn new(tag: &str) -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system time before UNIX_EPOCH")
            .as_nanos();

        let mut path = std::env::temp_dir();
        path.push(format!(
            "rollcall-{tag}-{}-{}.sqlite",
            std::process::id(),
            nanos
        ));
        let url = format!("sqlite:{}", path.display());
        Self { path, url }
    }
}

impl Drop for TempDb {
    fn drop(&mut self) {
        let base = self.path.to_string_lossy().into_owned();
        let _ = std::fs::remove_file(format!("{base}-wal"));
        let _ = std::fs::remove_file(format!("{base}-shm"));
        let _ = std::fs::remove_file(&self.path);
    }
}
