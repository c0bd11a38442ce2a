use crate::domain::ports::Storage;
use crate::utils::error::Result;
use std::fs::{self, File};
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

/// 讀取時路徑為 "-" 代表 stdin
pub const STDIN_PATH: &str = "-";

#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: PathBuf,
}

impl LocalStorage {
    pub fn new<P: Into<PathBuf>>(base_path: P) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    fn resolve(&self, path: &str) -> PathBuf {
        // 絕對路徑時 join 會直接取代 base_path
        self.base_path.join(Path::new(path))
    }
}

impl Default for LocalStorage {
    fn default() -> Self {
        Self::new(".")
    }
}

impl Storage for LocalStorage {
    fn open(&self, path: &str) -> Result<Box<dyn BufRead>> {
        if path == STDIN_PATH {
            return Ok(Box::new(std::io::stdin().lock()));
        }

        let full_path = self.resolve(path);
        tracing::debug!("Opening input file {}", full_path.display());
        let file = File::open(full_path)?;
        Ok(Box::new(BufReader::new(file)))
    }

    fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let full_path = self.resolve(path);

        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(full_path, data)?;
        Ok(())
    }
}
