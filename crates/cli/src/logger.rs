//! Logging for `easel` runs.
//!
//! Every invocation of the binary gets its own directory under
//! `~/.easel/logs`, named after the start time plus a short random tag, so
//! two demos started in the same second never share a file. Records also
//! go to stderr because stdout carries the JSON op log that `easel demo`
//! prints.

use anyhow::{Context, Result};
use chrono::Local;
use dirs::home_dir;
use log::{LevelFilter, Log, Metadata, Record};
use std::fs::{create_dir_all, File, OpenOptions};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use uuid::Uuid;

/// Writes each record to the run's `log` file and to stderr.
pub struct EaselLogger {
    level: LevelFilter,
    file: Mutex<File>,
    run_id: String,
    log_path: PathBuf,
}

impl EaselLogger {
    /// Pick a run id and open `<run dir>/log` for appending.
    pub fn new(level: LevelFilter) -> Result<Self> {
        let timestamp = Local::now().format("%Y%m%d_%H%M%S").to_string();
        let tag = Uuid::new_v4().simple().to_string();
        let run_id = format!("{timestamp}_{}", &tag[..8]);

        let log_dir = Self::log_dir(&run_id)?;
        create_dir_all(&log_dir)
            .with_context(|| format!("Failed to create log directory: {}", log_dir.display()))?;

        let log_path = log_dir.join("log");
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)
            .with_context(|| format!("Failed to open log file: {}", log_path.display()))?;

        Ok(Self {
            level,
            file: Mutex::new(file),
            run_id,
            log_path,
        })
    }

    /// `~/.easel/logs/<run_id>`
    pub fn log_dir(run_id: &str) -> Result<PathBuf> {
        let home = home_dir().ok_or_else(|| anyhow::anyhow!("Could not find home directory"))?;
        Ok(home.join(".easel").join("logs").join(run_id))
    }

    /// Install as the global logger. Fails if one is already set.
    pub fn init(level: LevelFilter) -> Result<PathBuf> {
        let logger = Self::new(level)?;
        let run_id = logger.run_id.clone();
        let log_path = logger.log_path.clone();

        log::set_boxed_logger(Box::new(logger))
            .map(|()| log::set_max_level(level))
            .map_err(|e| anyhow::anyhow!("Failed to set logger: {}", e))?;

        log::info!("easel run {}", run_id);
        log::info!("logging to {}", log_path.display());
        Ok(log_path)
    }
}

impl Log for EaselLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
        let message = format!(
            "{} {} [{}] {}",
            timestamp,
            record.level(),
            record.target(),
            record.args()
        );

        if let Ok(mut file) = self.file.lock() {
            // Write errors are dropped; stderr still has the record.
            let _ = writeln!(file, "{}", message);
            let _ = file.flush();
        }
        eprintln!("{}", message);
    }

    fn flush(&self) {
        if let Ok(mut file) = self.file.lock() {
            let _ = file.flush();
        }
    }
}

/// Banner line marking where a scene's records begin.
pub fn log_section(name: &str) {
    log::info!("---- scene {} ----", name);
}

/// Echo a settings file into the debug log with line numbers, so a run's
/// log shows exactly which configuration it used.
pub fn log_file_contents(path: &Path) -> Result<()> {
    let mut contents = String::new();
    File::open(path)
        .and_then(|mut file| file.read_to_string(&mut contents))
        .with_context(|| format!("Failed to read {}", path.display()))?;

    log::debug!("settings from {}:", path.display());
    for (i, line) in contents.lines().enumerate() {
        log::debug!("{:4}: {}", i + 1, line);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_dir_is_per_run() {
        let first = EaselLogger::log_dir("20260101_120000_abcd1234").unwrap();
        let second = EaselLogger::log_dir("20260101_120000_ef567890").unwrap();
        assert_ne!(first, second);
        assert!(first.ends_with(".easel/logs/20260101_120000_abcd1234"));
    }

    #[test]
    fn test_log_file_contents_reports_missing_file() {
        let err = log_file_contents(Path::new("/nonexistent/easel.json")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/easel.json"));
    }
}
