use std::fs::{self, File};
use std::path::Path;

use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

pub const LOG_FILE: &str = "naturequiz.log";

pub fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    }
}

/// Routes `log` output to a file in `dir`; the terminal belongs to the UI.
pub fn init_logging(dir: &Path, verbosity: u8) -> Result<(), String> {
    fs::create_dir_all(dir)
        .map_err(|e| format!("Cannot create data dir {}: {}", dir.display(), e))?;
    let path = dir.join(LOG_FILE);
    let file = File::create(&path)
        .map_err(|e| format!("Cannot create log file {}: {}", path.display(), e))?;
    let config = ConfigBuilder::new()
        .set_target_level(LevelFilter::Error)
        .build();
    WriteLogger::init(level_for(verbosity), config, file)
        .map_err(|e| format!("Cannot initialise logging: {}", e))
}
