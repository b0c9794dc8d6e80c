//! Deletion log: a plain-text record of the candidate set, written before
//! any branch is deleted.
//!
//! Files are named `deleted_branches_<YYYYMMDD_HHMMSS>.log`. A log is never
//! overwritten; if the name is taken (two runs within one second) a numeric
//! suffix is added.

use crate::error::{Result, SweepError};
use chrono::{DateTime, TimeZone};
use std::fs::{self, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

const LOG_PREFIX: &str = "deleted_branches_";
const LOG_EXTENSION: &str = "log";
const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Upper bound on suffixed names tried within a single second.
const MAX_ATTEMPTS: u32 = 1000;

/// File name for a log created at `now`. `attempt` 0 has no suffix.
pub fn log_file_name<Tz: TimeZone>(now: &DateTime<Tz>, attempt: u32) -> String
where
    Tz::Offset: std::fmt::Display,
{
    let stamp = now.format(TIMESTAMP_FORMAT);
    if attempt == 0 {
        format!("{}{}.{}", LOG_PREFIX, stamp, LOG_EXTENSION)
    } else {
        format!("{}{}_{}.{}", LOG_PREFIX, stamp, attempt, LOG_EXTENSION)
    }
}

/// Write `candidates`, one per line, to a new log file in `dir`.
///
/// The directory is created if missing. An empty candidate set produces an
/// empty file.
pub fn write_deletion_log<Tz: TimeZone>(
    dir: &Path,
    candidates: &[String],
    now: &DateTime<Tz>,
) -> Result<PathBuf>
where
    Tz::Offset: std::fmt::Display,
{
    fs::create_dir_all(dir).map_err(|e| {
        SweepError::LogError(format!(
            "failed to create log directory '{}': {}",
            dir.display(),
            e
        ))
    })?;

    let (path, file) = create_unique(dir, now)?;

    let mut writer = BufWriter::new(file);
    for name in candidates {
        writeln!(writer, "{}", name).map_err(|e| write_error(&path, e))?;
    }
    writer.flush().map_err(|e| write_error(&path, e))?;

    log::info!(
        "recorded {} candidate(s) in {}",
        candidates.len(),
        path.display()
    );
    Ok(path)
}

fn create_unique<Tz: TimeZone>(dir: &Path, now: &DateTime<Tz>) -> Result<(PathBuf, fs::File)>
where
    Tz::Offset: std::fmt::Display,
{
    for attempt in 0..MAX_ATTEMPTS {
        let path = dir.join(log_file_name(now, attempt));
        match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(file) => return Ok((path, file)),
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                log::debug!("{} already exists, trying next suffix", path.display());
            }
            Err(e) => return Err(write_error(&path, e)),
        }
    }

    Err(SweepError::LogError(format!(
        "no free log file name in '{}' after {} attempts",
        dir.display(),
        MAX_ATTEMPTS
    )))
}

fn write_error(path: &Path, e: io::Error) -> SweepError {
    SweepError::LogError(format!("failed to write '{}': {}", path.display(), e))
}
