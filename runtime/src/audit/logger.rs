//! JSONL audit logger: one appended line per attendance request.

use anyhow::{Context, Result};
use chrono::Utc;
use serde::Serialize;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;

/// A single audit event. Never contains the forwarded credential.
#[derive(Debug, Clone, Serialize)]
pub struct AuditEvent {
    pub timestamp: String,
    pub endpoint: String,
    /// `ok` or the error kind.
    pub outcome: String,
    pub status: u16,
    pub duration_ms: u64,
}

/// Append-only JSONL audit logger.
pub struct AuditLogger {
    file: File,
}

impl AuditLogger {
    /// Open or create the audit log file.
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("failed to open audit log: {}", path.display()))?;

        Ok(Self { file })
    }

    /// Log an audit event.
    pub fn log(&mut self, event: &AuditEvent) -> Result<()> {
        let json = serde_json::to_string(event)?;
        writeln!(self.file, "{json}")?;
        Ok(())
    }

    /// Log a request outcome with timing.
    pub fn log_request(
        &mut self,
        endpoint: &str,
        outcome: &str,
        status: u16,
        duration_ms: u64,
    ) -> Result<()> {
        self.log(&AuditEvent {
            timestamp: Utc::now().to_rfc3339(),
            endpoint: endpoint.to_string(),
            outcome: outcome.to_string(),
            status,
            duration_ms,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_appends_json_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("audit.jsonl");

        let mut logger = AuditLogger::open(&path).unwrap();
        logger.log_request("/api/present", "ok", 200, 12).unwrap();
        logger
            .log_request("/api/present", "session_expired", 401, 8)
            .unwrap();
        drop(logger);

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<serde_json::Value> = contents
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["outcome"], "ok");
        assert_eq!(lines[1]["status"], 401);
        assert!(lines[1]["timestamp"].as_str().unwrap().contains('T'));
    }

    #[test]
    fn test_reopen_appends() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("audit.jsonl");

        AuditLogger::open(&path)
            .unwrap()
            .log_request("/api/present", "ok", 200, 1)
            .unwrap();
        AuditLogger::open(&path)
            .unwrap()
            .log_request("/api/present", "ok", 200, 2)
            .unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents.lines().count(), 2);
    }
}
