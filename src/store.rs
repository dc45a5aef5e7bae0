use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use log::warn;

/// Key under which the best percentage is kept.
pub const BEST_SCORE_KEY: &str = "bestQuizScore";

/// Persists a single best-score percentage across sessions.
///
/// The store never decides whether a score is an improvement; callers compare
/// against `load_best` before calling `save_best`.
pub trait ScoreStore {
    /// Stored best, or 0 when absent or unreadable.
    fn load_best(&self) -> u32;

    /// Overwrites the stored best unconditionally.
    fn save_best(&mut self, percentage: u32) -> Result<(), String>;
}

/// Parses a stored value. Anything that is not a base-10 integer in 0..=100 reads as 0.
pub fn parse_best(raw: &str) -> u32 {
    match raw.trim().parse::<u32>() {
        Ok(v) if v <= 100 => v,
        _ => 0,
    }
}

#[derive(Debug, Default, Clone)]
pub struct MemoryScoreStore {
    values: HashMap<String, String>,
}

impl MemoryScoreStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the raw stored string, for exercising malformed values.
    pub fn with_raw(raw: &str) -> Self {
        let mut values = HashMap::new();
        values.insert(BEST_SCORE_KEY.to_string(), raw.to_string());
        Self { values }
    }
}

impl ScoreStore for MemoryScoreStore {
    fn load_best(&self) -> u32 {
        self.values
            .get(BEST_SCORE_KEY)
            .map(|v| parse_best(v))
            .unwrap_or(0)
    }

    fn save_best(&mut self, percentage: u32) -> Result<(), String> {
        self.values
            .insert(BEST_SCORE_KEY.to_string(), percentage.to_string());
        Ok(())
    }
}

/// Keeps the best score as a one-line file named after [`BEST_SCORE_KEY`].
#[derive(Debug, Clone)]
pub struct FileScoreStore {
    dir: PathBuf,
}

impl FileScoreStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path(&self) -> PathBuf {
        self.dir.join(BEST_SCORE_KEY)
    }

    pub fn clear(&self) -> Result<(), String> {
        let path = self.path();
        if path.exists() {
            fs::remove_file(&path).map_err(|e| format!("Cannot clear best score: {}", e))?;
        }
        Ok(())
    }
}

impl ScoreStore for FileScoreStore {
    fn load_best(&self) -> u32 {
        let path = self.path();
        if !path.exists() {
            return 0;
        }
        match fs::read_to_string(&path) {
            Ok(raw) => {
                let best = parse_best(&raw);
                if best == 0 && raw.trim() != "0" {
                    warn!("Ignoring malformed best score {:?} in {}", raw.trim(), path.display());
                }
                best
            }
            Err(e) => {
                warn!("Cannot read {}: {}", path.display(), e);
                0
            }
        }
    }

    fn save_best(&mut self, percentage: u32) -> Result<(), String> {
        fs::create_dir_all(&self.dir)
            .map_err(|e| format!("Cannot create data dir {}: {}", self.dir.display(), e))?;
        atomic_write(&self.path(), &percentage.to_string())
    }
}

fn atomic_write(path: &Path, content: &str) -> Result<(), String> {
    let tmp = path.with_extension("tmp");
    fs::write(&tmp, content).map_err(|e| format!("Cannot write {}: {}", tmp.display(), e))?;
    fs::rename(&tmp, path).map_err(|e| format!("Cannot rename: {}", e))?;
    Ok(())
}

/// Platform data directory, falling back to `./.naturequiz`.
pub fn default_data_dir() -> PathBuf {
    ProjectDirs::from("", "", "naturequiz")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from(".naturequiz"))
}
