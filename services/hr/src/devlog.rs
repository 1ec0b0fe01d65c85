//! Development server log file
//!
//! Keeps the same daily log the paired frontend dev server writes: one file
//! per calendar day under a configurable directory, with bracketed timestamp
//! and level tags so both sides of the dev setup share one format.

use std::env;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use axum::{
    extract::State,
    http::Request,
    middleware::Next,
    response::Response,
};
use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};

/// Dev log configuration
#[derive(Debug, Clone)]
pub struct DevLogConfig {
    /// Whether the log file is written at all
    pub enabled: bool,
    /// Directory the daily files live in
    pub dir: PathBuf,
    /// File name prefix, named after the paired frontend dev server
    pub file_prefix: String,
}

impl DevLogConfig {
    /// Create a new DevLogConfig from environment variables
    pub fn from_env() -> Self {
        let enabled = env::var("HR_DEV_LOG")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        let dir = env::var("HR_DEV_LOG_DIR").unwrap_or_else(|_| "logs".to_string());

        let file_prefix = env::var("HR_DEV_LOG_PREFIX").unwrap_or_else(|_| "vite".to_string());

        DevLogConfig {
            enabled,
            dir: PathBuf::from(dir),
            file_prefix,
        }
    }
}

/// Severity tags used in the dev log file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DevLogLevel {
    Info,
    Http,
    Hmr,
    Build,
}

impl DevLogLevel {
    /// Tag as it appears between brackets in the file
    pub fn as_str(self) -> &'static str {
        match self {
            DevLogLevel::Info => "INFO",
            DevLogLevel::Http => "HTTP",
            DevLogLevel::Hmr => "HMR",
            DevLogLevel::Build => "BUILD",
        }
    }
}

/// Append-only daily log file
///
/// The handle is opened once and reused until the calendar day rolls over;
/// writes are serialized by the mutex, so one instance is shared across
/// request handlers. The file closes when the instance drops.
pub struct DevServerLog {
    dir: PathBuf,
    file_prefix: String,
    state: Mutex<LogState>,
}

struct LogState {
    day: NaiveDate,
    file: File,
}

impl DevServerLog {
    /// Open today's log file, creating the directory as needed.
    pub fn open(config: &DevLogConfig) -> std::io::Result<Self> {
        std::fs::create_dir_all(&config.dir)?;

        let day = Utc::now().date_naive();
        let file = open_day_file(&config.dir, &config.file_prefix, day)?;

        Ok(DevServerLog {
            dir: config.dir.clone(),
            file_prefix: config.file_prefix.clone(),
            state: Mutex::new(LogState { day, file }),
        })
    }

    /// Path of the file currently written to
    pub fn current_path(&self) -> PathBuf {
        let state = self.state.lock().expect("dev log mutex poisoned");
        day_file_path(&self.dir, &self.file_prefix, state.day)
    }

    /// Append one line at the given level.
    pub fn log(&self, level: DevLogLevel, message: &str) -> std::io::Result<()> {
        self.log_at(Utc::now(), level, message)
    }

    fn log_at(
        &self,
        now: DateTime<Utc>,
        level: DevLogLevel,
        message: &str,
    ) -> std::io::Result<()> {
        let mut state = self.state.lock().expect("dev log mutex poisoned");

        // Roll over to a fresh file when the calendar day changes.
        let today = now.date_naive();
        if state.day != today {
            state.file = open_day_file(&self.dir, &self.file_prefix, today)?;
            state.day = today;
        }

        let timestamp = now.to_rfc3339_opts(SecondsFormat::Millis, true);
        writeln!(state.file, "[{}] [{}] {}", timestamp, level.as_str(), message)
    }

    /// Append an INFO line.
    pub fn info(&self, message: &str) -> std::io::Result<()> {
        self.log(DevLogLevel::Info, message)
    }

    /// Append an HTTP line.
    pub fn http(&self, message: &str) -> std::io::Result<()> {
        self.log(DevLogLevel::Http, message)
    }

    /// Append an HMR line.
    pub fn hmr(&self, message: &str) -> std::io::Result<()> {
        self.log(DevLogLevel::Hmr, message)
    }

    /// Append a BUILD line.
    pub fn build(&self, message: &str) -> std::io::Result<()> {
        self.log(DevLogLevel::Build, message)
    }
}

fn day_file_path(dir: &Path, prefix: &str, day: NaiveDate) -> PathBuf {
    dir.join(format!("{}-{}.log", prefix, day.format("%Y-%m-%d")))
}

fn open_day_file(dir: &Path, prefix: &str, day: NaiveDate) -> std::io::Result<File> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(day_file_path(dir, prefix, day))
}

/// Request logging middleware
pub async fn http_log(
    State(log): State<Arc<DevServerLog>>,
    req: Request<axum::body::Body>,
    next: Next,
) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let response = next.run(req).await;

    let line = format!("{} {} {}", method, path, response.status().as_u16());
    if let Err(e) = log.http(&line) {
        tracing::warn!("Failed to write dev log line: {}", e);
    }

    response
}
