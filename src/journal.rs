//! Append-only JSONL session journal.
//!
//! One line per event. The journal is never read back; the roster itself
//! only lives in memory.

use crate::error::RosterError;
use crate::player::PlayerRecord;
use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

pub struct Journal {
    pub path: Option<PathBuf>,
    session_id: String,
    file: Option<File>,
}

#[derive(Serialize)]
struct Event<'a> {
    ts: DateTime<Utc>,
    session_id: &'a str,
    #[serde(rename = "type")]
    event_type: &'a str,
    #[serde(flatten)]
    data: serde_json::Value,
}

impl Journal {
    pub fn new(path: &Path, session_id: &str) -> Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;

        Ok(Self {
            path: Some(path.to_path_buf()),
            session_id: session_id.to_string(),
            file: Some(file),
        })
    }

    /// A journal that drops every event
    pub fn disabled(session_id: &str) -> Self {
        Self {
            path: None,
            session_id: session_id.to_string(),
            file: None,
        }
    }

    pub fn log(&mut self, event_type: &str, data: serde_json::Value) -> Result<()> {
        let Some(file) = self.file.as_mut() else {
            return Ok(());
        };
        let event = Event {
            ts: Utc::now(),
            session_id: &self.session_id,
            event_type,
            data,
        };
        let line = serde_json::to_string(&event)?;
        writeln!(file, "{}", line)?;
        file.flush()?;
        Ok(())
    }

    pub fn session_start(&mut self, seeded: usize) -> Result<()> {
        self.log("session_start", serde_json::json!({ "seeded": seeded }))
    }

    pub fn player_added(&mut self, player: &PlayerRecord, size: usize) -> Result<()> {
        self.log(
            "player_added",
            serde_json::json!({ "player": player, "size": size }),
        )
    }

    pub fn player_popped(&mut self, player: &PlayerRecord, size: usize) -> Result<()> {
        self.log(
            "player_popped",
            serde_json::json!({ "player": player, "size": size }),
        )
    }

    pub fn player_updated(&mut self, player: &PlayerRecord) -> Result<()> {
        self.log("player_updated", serde_json::json!({ "player": player }))
    }

    pub fn player_deleted(&mut self, id: i32, size: usize) -> Result<()> {
        self.log(
            "player_deleted",
            serde_json::json!({ "id": id, "size": size }),
        )
    }

    /// Log a failure that was reported to the user
    pub fn notice(&mut self, command: &str, err: &RosterError) -> Result<()> {
        self.log(
            "notice",
            serde_json::json!({
                "command": command,
                "severity": err.severity().as_str(),
                "message": err.to_string(),
            }),
        )
    }
}
